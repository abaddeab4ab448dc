use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::CaseSet;

/// Name of the configuration file searched for in each directory
pub const CONFIG_FILE_NAME: &str = ".caserun.json";

/// Program launched when no configuration names one
pub const DEFAULT_HARNESS_PROGRAM: &str = "jury";

/// How to launch the external harness program
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HarnessSettings {
    pub command: String,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Default for HarnessSettings {
    fn default() -> Self {
        Self {
            command: DEFAULT_HARNESS_PROGRAM.to_string(),
            args: Vec::new(),
            working_dir: None,
            env: BTreeMap::new(),
        }
    }
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub cases: CaseSet,
    pub harness: HarnessSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cases: CaseSet::builtin(),
            harness: HarnessSettings::default(),
        }
    }
}

impl Config {
    /// Replace the configured case set
    pub fn with_cases(mut self, cases: CaseSet) -> Self {
        self.cases = cases;
        self
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// On-disk form of a config file. Every field is optional so that a file
/// nearer to the working directory can override only what it names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub cases: Option<CaseSet>,
    #[serde(default)]
    pub harness: Option<HarnessFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessFile {
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub args: Option<Vec<String>>,
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
    #[serde(default)]
    pub env: Option<BTreeMap<String, String>>,
}

impl ConfigFile {
    /// Layer `other` on top of `self`; fields present in `other` win.
    pub fn merge(&mut self, other: ConfigFile) {
        if other.cases.is_some() {
            self.cases = other.cases;
        }

        if let Some(top) = other.harness {
            match self.harness {
                Some(ref mut base) => base.merge(top),
                None => self.harness = Some(top),
            }
        }
    }

    /// Anchor a relative `working_dir` at the directory holding the file
    pub fn resolve_paths(&mut self, base_dir: &Path) {
        if let Some(ref mut harness) = self.harness {
            if let Some(ref dir) = harness.working_dir {
                if dir.is_relative() {
                    harness.working_dir = Some(base_dir.join(dir));
                }
            }
        }
    }

    /// Fill unset fields from the defaults
    pub fn resolve(self) -> Config {
        let defaults = Config::default();
        let harness = match self.harness {
            Some(h) => HarnessSettings {
                command: h.command.unwrap_or(defaults.harness.command),
                args: h.args.unwrap_or_default(),
                working_dir: h.working_dir,
                env: h.env.unwrap_or_default(),
            },
            None => defaults.harness,
        };

        Config {
            cases: self.cases.unwrap_or(defaults.cases),
            harness,
        }
    }
}

impl HarnessFile {
    fn merge(&mut self, other: HarnessFile) {
        if other.command.is_some() {
            self.command = other.command;
        }
        if other.args.is_some() {
            self.args = other.args;
        }
        if other.working_dir.is_some() {
            self.working_dir = other.working_dir;
        }
        if let Some(env) = other.env {
            self.env.get_or_insert_with(BTreeMap::new).extend(env);
        }
    }
}
