//! The two-operation contract between the driver and a harness

use crate::types::CaseSet;

/// A harness instance scoped to one case set.
///
/// `run` takes the instance by value: an instance serves exactly one run.
pub trait Harness {
    /// Whatever the harness reports on success
    type Output;

    /// The harness's own failure type, passed through the driver untouched
    type Error;

    /// Execute every case the instance was constructed with
    fn run(self) -> Result<Self::Output, Self::Error>;
}

/// Builds harness instances from a case set.
pub trait HarnessFactory {
    type Harness: Harness;

    /// Create an instance scoped to exactly `cases`
    fn construct(
        &self,
        cases: CaseSet,
    ) -> Result<Self::Harness, <Self::Harness as Harness>::Error>;

    /// Name used in log output
    fn name(&self) -> &str {
        "harness"
    }
}

impl<F, H> HarnessFactory for F
where
    F: Fn(CaseSet) -> Result<H, H::Error>,
    H: Harness,
{
    type Harness = H;

    fn construct(&self, cases: CaseSet) -> Result<H, H::Error> {
        self(cases)
    }
}
