use proptest::prelude::*;

use crate::traits::{Fifo, Lifo};

/// The sequential specification of a data structure: executes reified
/// operations one at a time against owned state.
pub trait SequentialSpec: Default {
    /// The type of operations.
    type Op;

    /// The type of return values.
    type Ret;

    /// Executes an operation on the data structure.
    fn exec(&mut self, op: Self::Op) -> Self::Ret;
}

/// Operations understood by any [Lifo] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifoOp<T> {
    Push(T),
    Pop,
    Peek,
    Len,
    IsEmpty,
}

/// Return values of [LifoOp] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifoRet<T> {
    Push,
    Pop(Option<T>),
    Peek(Option<T>),
    Len(usize),
    IsEmpty(bool),
}

/// Operations understood by any [Fifo] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FifoOp<T> {
    Enqueue(T),
    Dequeue,
    Peek,
    Len,
    IsEmpty,
}

/// Return values of [FifoOp] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FifoRet<T> {
    Enqueue,
    Dequeue(Option<T>),
    Peek(Option<T>),
    Len(usize),
    IsEmpty(bool),
}

// Mutating ops are weighted up so that generated scripts actually grow and
// shrink the structure instead of querying an empty one.

impl<T: Arbitrary + Clone + 'static> Arbitrary for LifoOp<T> {
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            4 => any_with::<T>(args).prop_map(LifoOp::Push),
            3 => Just(LifoOp::Pop),
            2 => Just(LifoOp::Peek),
            1 => Just(LifoOp::Len),
            1 => Just(LifoOp::IsEmpty),
        ]
        .boxed()
    }
}

impl<T: Arbitrary + Clone + 'static> Arbitrary for FifoOp<T> {
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            4 => any_with::<T>(args).prop_map(FifoOp::Enqueue),
            3 => Just(FifoOp::Dequeue),
            2 => Just(FifoOp::Peek),
            1 => Just(FifoOp::Len),
            1 => Just(FifoOp::IsEmpty),
        ]
        .boxed()
    }
}

/// Drives any [Lifo] through [LifoOp] scripts.
///
/// Both the structure under test and its reference model are wrapped in
/// this adapter, so one op alphabet exercises them both.
#[derive(Debug, Default)]
pub struct LifoSubject<C>(pub C);

impl<C> SequentialSpec for LifoSubject<C>
where
    C: Lifo + Default,
    C::Item: Clone,
{
    type Op = LifoOp<C::Item>;
    type Ret = LifoRet<C::Item>;

    fn exec(&mut self, op: Self::Op) -> Self::Ret {
        match op {
            LifoOp::Push(value) => {
                self.0.push(value);
                LifoRet::Push
            }
            LifoOp::Pop => LifoRet::Pop(self.0.pop()),
            LifoOp::Peek => LifoRet::Peek(self.0.peek().cloned()),
            LifoOp::Len => LifoRet::Len(self.0.len()),
            LifoOp::IsEmpty => LifoRet::IsEmpty(self.0.is_empty()),
        }
    }
}

/// Drives any [Fifo] through [FifoOp] scripts.
#[derive(Debug, Default)]
pub struct FifoSubject<C>(pub C);

impl<C> SequentialSpec for FifoSubject<C>
where
    C: Fifo + Default,
    C::Item: Clone,
{
    type Op = FifoOp<C::Item>;
    type Ret = FifoRet<C::Item>;

    fn exec(&mut self, op: Self::Op) -> Self::Ret {
        match op {
            FifoOp::Enqueue(value) => {
                self.0.enqueue(value);
                FifoRet::Enqueue
            }
            FifoOp::Dequeue => FifoRet::Dequeue(self.0.dequeue()),
            FifoOp::Peek => FifoRet::Peek(self.0.peek().cloned()),
            FifoOp::Len => FifoRet::Len(self.0.len()),
            FifoOp::IsEmpty => FifoRet::IsEmpty(self.0.is_empty()),
        }
    }
}
