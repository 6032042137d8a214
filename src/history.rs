use std::ops::{Deref, DerefMut};

/// A single executed operation together with its observed return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<Op, Ret> {
    pub op: Op,
    pub ret: Ret,
}

/// The ordered record of everything a replay executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<Op, Ret> {
    inner: Vec<Invocation<Op, Ret>>,
}

impl<Op, Ret> History<Op, Ret> {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<Invocation<Op, Ret>> {
        self.inner
    }
}

// The rest of the file is conversion and access boilerplate.

impl<Op, Ret> Deref for History<Op, Ret> {
    type Target = Vec<Invocation<Op, Ret>>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<Op, Ret> DerefMut for History<Op, Ret> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<Op, Ret> IntoIterator for History<Op, Ret> {
    type Item = Invocation<Op, Ret>;
    type IntoIter = <Vec<Invocation<Op, Ret>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, Op, Ret> IntoIterator for &'a History<Op, Ret> {
    type Item = &'a Invocation<Op, Ret>;
    type IntoIter = <&'a Vec<Invocation<Op, Ret>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

impl<Op, Ret> Default for History<Op, Ret> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Op, Ret> From<Vec<Invocation<Op, Ret>>> for History<Op, Ret> {
    fn from(inner: Vec<Invocation<Op, Ret>>) -> Self {
        Self { inner }
    }
}

impl<Op, Ret> From<History<Op, Ret>> for Vec<Invocation<Op, Ret>> {
    fn from(history: History<Op, Ret>) -> Self {
        history.inner
    }
}
