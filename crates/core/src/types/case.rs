use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Cases exercised when no configuration names any.
pub const BUILTIN_CASES: &[&str] = &[
    "cases/example",
    "cases/types/types",
    "cases/cluster/sync",
    "cases/auth",
];

/// Opaque name of one test case or case group.
///
/// The string is kept exactly as written; only identifiers with no visible
/// content are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CaseId(String);

impl CaseId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::InvalidCaseId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CaseId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<CaseId> for String {
    fn from(id: CaseId) -> Self {
        id.0
    }
}

impl AsRef<str> for CaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered sequence of cases handed to a harness for one run.
///
/// Declaration order is kept and duplicates are not collapsed. An empty set
/// is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseSet(Vec<CaseId>);

impl CaseSet {
    pub fn new(cases: Vec<CaseId>) -> Self {
        Self(cases)
    }

    /// The versioned list of cases run by default.
    pub fn builtin() -> Self {
        Self(
            BUILTIN_CASES
                .iter()
                .map(|id| CaseId(id.to_string()))
                .collect(),
        )
    }

    /// Validate and collect raw identifiers, stopping at the first bad one.
    pub fn parse<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter()
            .map(CaseId::new)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CaseId> {
        self.0.iter()
    }

    /// Identifiers as plain strings, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|id| id.0.clone()).collect()
    }
}

impl FromIterator<CaseId> for CaseSet {
    fn from_iter<T: IntoIterator<Item = CaseId>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for CaseSet {
    type Item = CaseId;
    type IntoIter = std::vec::IntoIter<CaseId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CaseSet {
    type Item = &'a CaseId;
    type IntoIter = std::slice::Iter<'a, CaseId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
