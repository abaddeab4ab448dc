pub mod case;

pub use case::{BUILTIN_CASES, CaseId, CaseSet};
