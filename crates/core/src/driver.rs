//! Runner driver: bind a case set to a harness and run it once
//!
//! The driver owns no error handling of its own. Whatever the factory or the
//! harness returns comes back to the caller as-is.

use tracing::{debug, info};

use crate::harness::{Harness, HarnessFactory};
use crate::types::CaseSet;

/// Output type of the harness a factory builds
pub type HarnessOutput<F> = <<F as HarnessFactory>::Harness as Harness>::Output;

/// Error type of the harness a factory builds
pub type HarnessFailure<F> = <<F as HarnessFactory>::Harness as Harness>::Error;

#[derive(Debug, Clone)]
pub struct Driver {
    cases: CaseSet,
}

impl Driver {
    pub fn new(cases: CaseSet) -> Self {
        Self { cases }
    }

    pub fn cases(&self) -> &CaseSet {
        &self.cases
    }

    /// Construct a harness for the case set, then run it.
    ///
    /// If construction fails the harness is never run.
    pub fn drive<F>(self, factory: &F) -> Result<HarnessOutput<F>, HarnessFailure<F>>
    where
        F: HarnessFactory + ?Sized,
    {
        info!(
            "Running {} case(s) with {}",
            self.cases.len(),
            factory.name()
        );
        debug!("Cases: {:?}", self.cases.to_strings());

        let harness = factory.construct(self.cases)?;
        harness.run()
    }
}

/// Shorthand for `Driver::new(cases).drive(factory)`
pub fn run_cases<F>(factory: &F, cases: CaseSet) -> Result<HarnessOutput<F>, HarnessFailure<F>>
where
    F: HarnessFactory + ?Sized,
{
    Driver::new(cases).drive(factory)
}
