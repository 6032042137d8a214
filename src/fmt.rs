use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::conformance::Divergence;
use crate::history::{History, Invocation};

impl<Op, Ret> Display for Invocation<Op, Ret>
where
    Op: Debug,
    Ret: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(format!("{:?} : {:?}", self.op, self.ret).as_str())
    }
}

impl<Op, Ret> Display for History<Op, Ret>
where
    Op: Debug,
    Ret: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let table = Table {
            sections: vec![Section {
                header: "HISTORY".to_string(),
                rows: self.iter().map(|inv| format!("{}", inv)).collect(),
            }],
        };

        table.fmt(f)
    }
}

impl<Op, Ret> Display for Divergence<Op, Ret>
where
    Op: Debug,
    Ret: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let table = Table {
            sections: vec![
                Section {
                    header: "AGREED PREFIX".to_string(),
                    rows: self.prefix.iter().map(|inv| format!("{}", inv)).collect(),
                },
                Section {
                    header: "DIVERGENCE".to_string(),
                    rows: vec![
                        format!("op      : {:?}", self.op),
                        format!("subject : {:?}", self.subject_ret),
                        format!("model   : {:?}", self.model_ret),
                    ],
                },
            ],
        };

        table.fmt(f)
    }
}

impl<Op, Ret> Error for Divergence<Op, Ret>
where
    Op: Debug,
    Ret: Debug,
{
}

struct Section {
    header: String,
    rows: Vec<String>,
}

struct Table {
    sections: Vec<Section>,
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self
            .sections
            .iter()
            .flat_map(|section| {
                section
                    .rows
                    .iter()
                    .map(|row| row.len() + 2)
                    .chain(std::iter::once(section.header.len() + 2))
            })
            .max()
            .unwrap_or(0);

        for section in &self.sections {
            writeln!(f, "|{:=<width$}|", "", width = width)?;
            writeln!(f, "|{:^width$}|", section.header, width = width)?;
            writeln!(f, "|{:=<width$}|", "", width = width)?;

            for row in &section.rows {
                writeln!(f, "| {:<width$} |", row, width = width - 2)?;
            }
        }
        writeln!(f, "|{:=<width$}|", "", width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{LifoOp, LifoRet};

    #[test]
    fn divergence_renders_prefix_and_verdict() {
        let divergence = Divergence {
            prefix: vec![
                Invocation {
                    op: LifoOp::Push(8),
                    ret: LifoRet::Push,
                },
                Invocation {
                    op: LifoOp::Push(6),
                    ret: LifoRet::Push,
                },
            ]
            .into(),
            op: LifoOp::Pop,
            subject_ret: LifoRet::Pop(Some(8)),
            model_ret: LifoRet::Pop(Some(6)),
        };

        let rendered = divergence.to_string();

        assert!(rendered.contains("AGREED PREFIX"));
        assert!(rendered.contains("DIVERGENCE"));
        assert!(rendered.contains("Push(8) : Push"));
        assert!(rendered.contains("subject : Pop(Some(8))"));
        assert!(rendered.contains("model   : Pop(Some(6))"));

        // every line of the table shares one border width
        let widths: Vec<_> = rendered.lines().map(str::len).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn empty_history_still_renders_a_header() {
        let history = History::<LifoOp<u8>, LifoRet<u8>>::new();
        let rendered = history.to_string();

        assert!(rendered.contains("HISTORY"));
    }
}
