//! Test fixtures for exercising the caserun driver contract
//!
//! [`RecordingFactory`] builds harnesses that write down what they were asked
//! to do instead of running anything, with switches to fail at either stage.

use caserun_core::{CaseSet, Harness, HarnessFactory};
use std::cell::RefCell;
use std::rc::Rc;

/// Failure produced on request by the recording harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedFailure {
    Construct(String),
    Run(String),
}

impl std::fmt::Display for RecordedFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordedFailure::Construct(msg) => write!(f, "construct failed: {msg}"),
            RecordedFailure::Run(msg) => write!(f, "run failed: {msg}"),
        }
    }
}

impl std::error::Error for RecordedFailure {}

/// Every call the driver made, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    pub constructed: Vec<Vec<String>>,
    pub runs: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingFactory {
    journal: Rc<RefCell<Journal>>,
    construct_failure: Option<String>,
    run_failure: Option<String>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_construct(mut self, message: impl Into<String>) -> Self {
        self.construct_failure = Some(message.into());
        self
    }

    pub fn failing_run(mut self, message: impl Into<String>) -> Self {
        self.run_failure = Some(message.into());
        self
    }

    pub fn journal(&self) -> Journal {
        self.journal.borrow().clone()
    }
}

impl HarnessFactory for RecordingFactory {
    type Harness = RecordingHarness;

    fn construct(&self, cases: CaseSet) -> Result<RecordingHarness, RecordedFailure> {
        self.journal
            .borrow_mut()
            .constructed
            .push(cases.to_strings());

        if let Some(ref message) = self.construct_failure {
            return Err(RecordedFailure::Construct(message.clone()));
        }

        Ok(RecordingHarness {
            journal: Rc::clone(&self.journal),
            cases,
            run_failure: self.run_failure.clone(),
        })
    }

    fn name(&self) -> &str {
        "recording"
    }
}

#[derive(Debug)]
pub struct RecordingHarness {
    journal: Rc<RefCell<Journal>>,
    cases: CaseSet,
    run_failure: Option<String>,
}

impl Harness for RecordingHarness {
    /// Number of cases the run was handed
    type Output = usize;
    type Error = RecordedFailure;

    fn run(self) -> Result<usize, RecordedFailure> {
        self.journal.borrow_mut().runs.push(self.cases.to_strings());
        match self.run_failure {
            Some(message) => Err(RecordedFailure::Run(message)),
            None => Ok(self.cases.len()),
        }
    }
}
