//! `retrack check` — dry-run: show decisions and the would-be patch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use retrack_core::{workflow, Decision};
use retrack_github::RepoClient;
use retrack_sync::{diff, pipeline, SyncOutcome};

use crate::trigger;

/// Arguments for `retrack check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Workflow file holding the tracked `files` mapping.
    #[arg(long, default_value = ".github/workflows/sync-files.yml")]
    pub file: PathBuf,

    /// Base ref of the comparison.
    #[arg(long)]
    pub base: String,

    /// Head ref of the comparison.
    #[arg(long)]
    pub head: String,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    pub fn run(self) -> Result<()> {
        let (repo, token, api_url) = trigger::api_env()?;
        let workflow = workflow::load_at(&self.file)
            .with_context(|| format!("failed to load workflow '{}'", self.file.display()))?;
        let client = RepoClient::new(&api_url, &repo, &token);

        let outcome = pipeline::run(&client, &workflow, &self.base, &self.head)
            .with_context(|| format!("check failed for {}...{}", self.base, self.head))?;

        if self.json {
            return print_json(&outcome);
        }

        if outcome.decisions.is_empty() {
            println!("No tracked file mappings in '{}'.", self.file.display());
            return Ok(());
        }

        let rows: Vec<DecisionRow> = outcome.decisions.iter().map(decision_row).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");

        match &outcome.patched {
            None => println!("{} nothing would change", "✓".green()),
            Some(patched) => {
                println!();
                print!("{}", diff::unified_diff(&workflow.raw, patched, &self.file));
            }
        }
        Ok(())
    }
}

#[derive(Tabled)]
struct DecisionRow {
    #[tabled(rename = "source")]
    source: String,
    #[tabled(rename = "action")]
    action: String,
    #[tabled(rename = "new source")]
    new_source: String,
}

fn decision_row(decision: &Decision) -> DecisionRow {
    match decision {
        Decision::Unchanged(spec) => DecisionRow {
            source: spec.source.clone(),
            action: "unchanged".to_string(),
            new_source: String::new(),
        },
        Decision::Dropped(spec) => DecisionRow {
            source: spec.source.clone(),
            action: "drop".to_string(),
            new_source: String::new(),
        },
        Decision::Retargeted { old, new } => DecisionRow {
            source: old.source.clone(),
            action: "retarget".to_string(),
            new_source: new.source.clone(),
        },
    }
}

#[derive(Serialize)]
struct CheckReportJson {
    changed: bool,
    dropped: usize,
    retargeted: usize,
    decisions: Vec<DecisionJson>,
}

#[derive(Serialize)]
struct DecisionJson {
    source: String,
    action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_source: Option<String>,
}

fn print_json(outcome: &SyncOutcome) -> Result<()> {
    let decisions = outcome
        .decisions
        .iter()
        .map(|decision| match decision {
            Decision::Unchanged(spec) => DecisionJson {
                source: spec.source.clone(),
                action: "unchanged".to_string(),
                new_source: None,
            },
            Decision::Dropped(spec) => DecisionJson {
                source: spec.source.clone(),
                action: "drop".to_string(),
                new_source: None,
            },
            Decision::Retargeted { old, new } => DecisionJson {
                source: old.source.clone(),
                action: "retarget".to_string(),
                new_source: Some(new.source.clone()),
            },
        })
        .collect();
    let report = CheckReportJson {
        changed: outcome.patched.is_some(),
        dropped: outcome.dropped(),
        retargeted: outcome.retargeted(),
        decisions,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
