use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::check::manifest::{Entry, Manifest};
use crate::descriptor::{DescriptorError, DescriptorKind};
use crate::engine::{
    classify_raw_access, classify_raw_event, classify_raw_state, Recommendation, Strategy,
};

/// A manifest entry could not be classified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error("{kind} entry '{name}': {source}")]
    InvalidEntry {
        kind: DescriptorKind,
        name: String,
        #[source]
        source: DescriptorError,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Report entries without an `expect` strategy.
    pub require_expect: bool,
}

/// Classification of one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    pub kind: DescriptorKind,
    pub name: String,
    pub recommendation: Recommendation,
}

/// Something a check run flags for the author to fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "finding", rename_all = "kebab-case")]
pub enum Finding {
    /// The pinned strategy differs from the engine's.
    Mismatch {
        kind: DescriptorKind,
        name: String,
        expected: Strategy,
        actual: Strategy,
        rule: &'static str,
    },
    /// No strategy pinned while `require_expect` is on.
    Unpinned { kind: DescriptorKind, name: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Mismatch {
                kind,
                name,
                expected,
                actual,
                rule,
            } => write!(
                f,
                "{kind} {name}: expected {expected}, engine recommends {actual} ({rule})"
            ),
            Finding::Unpinned { kind, name } => {
                write!(f, "{kind} {name}: no expected strategy given")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub entries: Vec<EntryOutcome>,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }

    fn record<R>(
        &mut self,
        kind: DescriptorKind,
        entry: &Entry<R>,
        recommendation: Recommendation,
        options: CheckOptions,
    ) {
        match entry.expect {
            Some(expected) if expected != recommendation.strategy() => {
                self.findings.push(Finding::Mismatch {
                    kind,
                    name: entry.name.clone(),
                    expected,
                    actual: recommendation.strategy(),
                    rule: recommendation.rule(),
                });
            }
            None if options.require_expect => {
                self.findings.push(Finding::Unpinned {
                    kind,
                    name: entry.name.clone(),
                });
            }
            _ => {}
        }
        self.entries.push(EntryOutcome {
            kind,
            name: entry.name.clone(),
            recommendation,
        });
    }
}

fn invalid_entry(kind: DescriptorKind, name: &str, source: DescriptorError) -> CheckError {
    CheckError::InvalidEntry {
        kind,
        name: name.to_string(),
        source,
    }
}

/// Classify every manifest entry: states, then events, then accesses.
///
/// The first entry with an unset field aborts the run; no partial report is returned.
pub fn run_check(manifest: &Manifest, options: CheckOptions) -> Result<CheckReport, CheckError> {
    let mut report = CheckReport::default();

    for entry in &manifest.state {
        let rec = classify_raw_state(entry.descriptor)
            .map_err(|e| invalid_entry(DescriptorKind::State, &entry.name, e))?;
        report.record(DescriptorKind::State, entry, rec, options);
    }
    for entry in &manifest.event {
        let rec = classify_raw_event(entry.descriptor)
            .map_err(|e| invalid_entry(DescriptorKind::Event, &entry.name, e))?;
        report.record(DescriptorKind::Event, entry, rec, options);
    }
    for entry in &manifest.access {
        let rec = classify_raw_access(entry.descriptor)
            .map_err(|e| invalid_entry(DescriptorKind::Access, &entry.name, e))?;
        report.record(DescriptorKind::Access, entry, rec, options);
    }

    debug!(
        entries = report.entries.len(),
        findings = report.findings.len(),
        "check finished"
    );
    if !report.passed() {
        info!(findings = report.findings.len(), "check reported findings");
    }
    Ok(report)
}
