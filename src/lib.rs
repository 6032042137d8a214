use proptest::{
    prelude::*,
    test_runner::{TestCaseError, TestError, TestRunner},
};
use std::fmt::Debug;

mod conformance;
mod fmt;
mod history;
mod queue;
mod queued_stack;
mod spec;
mod stack;
mod stacked_queue;
mod traits;

pub use conformance::*;
pub use history::*;
pub use queue::*;
pub use queued_stack::*;
pub use spec::*;
pub use stack::*;
pub use stacked_queue::*;
pub use traits::*;

/// A generated sequence of operations to replay on a subject and its model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script<Op> {
    pub ops: Vec<Op>,
}

/// Replays a single script.
///
/// Returns the first [Divergence] if the subject `Sub` ever disagrees with
/// the model `Model`, and `Ok` if the whole script agrees.
pub fn check_script<Sub, Model>(
    script: Script<Sub::Op>,
) -> Result<(), Divergence<Sub::Op, Sub::Ret>>
where
    Sub: SequentialSpec,
    Model: SequentialSpec<Op = Sub::Op, Ret = Sub::Ret>,
    Sub::Op: Clone,
    Sub::Ret: PartialEq,
{
    ConformanceChecker::<Sub, Model>::check(script.ops).map(|_| ())
}

/// Configuration of a conformance run.
#[derive(Clone, Debug)]
pub struct Conformance {
    /// Upper bound on the number of operations in one generated script.
    pub ops_per_script: usize,
}

impl Default for Conformance {
    fn default() -> Self {
        Self { ops_per_script: 64 }
    }
}

impl<Op: Arbitrary + 'static> Arbitrary for Script<Op> {
    type Parameters = Conformance;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop::collection::vec(any::<Op>(), 1..=args.ops_per_script)
            .prop_map(|ops| Self { ops })
            .boxed()
    }
}

impl Conformance {
    /// Searches for a script on which the subject diverges from the model.
    ///
    /// Scripts are generated and shrunk by proptest, so the returned
    /// divergence comes from a minimal counterexample.
    pub fn verify<Sub, Model>(&self) -> Result<(), Divergence<Sub::Op, Sub::Ret>>
    where
        Sub: SequentialSpec,
        Model: SequentialSpec<Op = Sub::Op, Ret = Sub::Ret>,
        Sub::Op: Arbitrary + Clone + 'static,
        Sub::Ret: PartialEq + Debug,
    {
        let result = TestRunner::default().run(
            &any_with::<Script<Sub::Op>>(self.clone()),
            |script| match check_script::<Sub, Model>(script) {
                Ok(()) => Ok(()),
                Err(divergence) => Err(TestCaseError::fail(divergence.to_string())),
            },
        );

        match result {
            Ok(()) => Ok(()),
            // replay the minimal script to recover the divergence itself
            Err(TestError::Fail(_, script)) => match check_script::<Sub, Model>(script) {
                Err(divergence) => Err(divergence),
                Ok(()) => panic!("shrunk script no longer diverges on replay"),
            },
            Err(failure) => panic!("Unexpected failure: {:?}", failure),
        }
    }

    /// Same as [verify](Conformance::verify) but panics with the rendered
    /// divergence trace, for direct use in tests.
    pub fn verify_or_panic<Sub, Model>(&self)
    where
        Sub: SequentialSpec,
        Model: SequentialSpec<Op = Sub::Op, Ret = Sub::Ret>,
        Sub::Op: Arbitrary + Clone + 'static,
        Sub::Ret: PartialEq + Debug,
    {
        if let Err(divergence) = self.verify::<Sub, Model>() {
            panic!("Subject diverged from its model: \n\n{}", divergence);
        }
    }
}
