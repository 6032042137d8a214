//! The module with the conformance checker implementation.

use std::mem;

use crate::history::{History, Invocation};
use crate::spec::SequentialSpec;

/// The first point at which a subject disagreed with its model.
///
/// Carries the agreed-upon prefix of the replay, the operation both sides
/// executed next, and the two returns that differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence<Op, Ret> {
    pub prefix: History<Op, Ret>,
    pub op: Op,
    pub subject_ret: Ret,
    pub model_ret: Ret,
}

/// The conformance checker itself.
///
/// Execution is sequential and deterministic, so there is exactly one order
/// in which the operations can take effect: the checker simply replays the
/// script on the subject and on the model in lockstep and compares the
/// return values after every step. The first disagreement aborts the replay
/// and is reported together with everything that was agreed on before it.
pub struct ConformanceChecker<Sub: SequentialSpec, Model> {
    subject: Sub,
    model: Model,
    history: History<Sub::Op, Sub::Ret>,
}

impl<Sub, Model> ConformanceChecker<Sub, Model>
where
    Sub: SequentialSpec,
    Model: SequentialSpec<Op = Sub::Op, Ret = Sub::Ret>,
    Sub::Op: Clone,
    Sub::Ret: PartialEq,
{
    /// Replays `ops` on freshly constructed subject and model instances.
    ///
    /// Returns the full history if they agree on every step, or the first
    /// [Divergence] otherwise.
    pub fn check<I>(ops: I) -> Result<History<Sub::Op, Sub::Ret>, Divergence<Sub::Op, Sub::Ret>>
    where
        I: IntoIterator<Item = Sub::Op>,
    {
        let mut checker = ConformanceChecker {
            subject: Sub::default(),
            model: Model::default(),
            history: History::new(),
        };

        for op in ops {
            checker.step(op)?;
        }

        Ok(checker.history)
    }

    fn step(&mut self, op: Sub::Op) -> Result<(), Divergence<Sub::Op, Sub::Ret>> {
        let subject_ret = self.subject.exec(op.clone());
        let model_ret = self.model.exec(op.clone());

        if subject_ret != model_ret {
            return Err(Divergence {
                prefix: mem::take(&mut self.history),
                op,
                subject_ret,
                model_ret,
            });
        }

        self.history.push(Invocation {
            op,
            ret: subject_ret,
        });
        Ok(())
    }
}
