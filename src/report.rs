//! Rendering recommendations and check reports for humans and tools.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::check::CheckReport;
use crate::engine::{Recommendation, RuleSet};

/// Output encoding for the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How much of the rationale trail to keep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TrailMode {
    /// Every consulted rule.
    #[default]
    Full,
    /// Only the deciding rule.
    Decisive,
}

impl TrailMode {
    pub fn apply(self, recommendation: Recommendation) -> Recommendation {
        match self {
            TrailMode::Full => recommendation,
            TrailMode::Decisive => recommendation.into_decisive(),
        }
    }
}

fn answer(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Multi-line text rendering of a single recommendation.
pub fn render_text(recommendation: &Recommendation) -> String {
    let mut out = String::new();
    let names: Vec<&str> = recommendation.strategies().map(|s| s.as_str()).collect();
    let _ = writeln!(out, "recommendation: {}", names.join(" + "));
    for strategy in recommendation.strategies() {
        let _ = writeln!(out, "  {}", strategy.guidance());
    }
    if let Some(decisive) = recommendation.decisive() {
        let _ = writeln!(out, "decided by: {} (rule {})", decisive.rule, decisive.rank);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "trail:");
    for j in recommendation.trail() {
        let marker = if j.contributing { "  <- decisive" } else { "" };
        let _ = writeln!(
            out,
            "  {}. [{}] {} -> {}{}",
            j.rank,
            j.rule,
            j.question,
            answer(j.answer),
            marker
        );
    }
    out
}

/// Text rendering of a check run: one line per entry, then findings.
pub fn render_check_text(report: &CheckReport) -> String {
    let mut out = String::new();
    for entry in &report.entries {
        let names: Vec<&str> = entry
            .recommendation
            .strategies()
            .map(|s| s.as_str())
            .collect();
        let _ = writeln!(
            out,
            "{} {}: {} ({})",
            entry.kind,
            entry.name,
            names.join(" + "),
            entry.recommendation.rule()
        );
    }

    if report.findings.is_empty() {
        let _ = writeln!(out, "\n{} entries checked, no findings", report.entries.len());
        return out;
    }

    let _ = writeln!(out, "\nfindings:");
    for finding in &report.findings {
        let _ = writeln!(out, "  {finding}");
    }
    let _ = writeln!(
        out,
        "\n{} entries checked, {} findings",
        report.entries.len(),
        report.findings.len()
    );
    out
}

/// Text listing of a rule table in priority order.
pub fn render_rules_text<D: 'static>(rules: &RuleSet<D>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} rules:", rules.kind);
    for (index, rule) in rules.rules.iter().enumerate() {
        let _ = writeln!(out, "  {}. [{}] {}", index + 1, rule.id, rule.question);
    }
    let fallback = &rules.fallback;
    let _ = writeln!(
        out,
        "  {}. [{}] {} => {}",
        rules.rules.len() + 1,
        fallback.id,
        fallback.question,
        fallback.outcome.strategy
    );
    out
}

/// Pretty JSON for any serializable report value.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}
