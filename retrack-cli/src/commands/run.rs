//! `retrack run` — the CI entrypoint.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use retrack_core::{workflow, Decision};
use retrack_github::RepoClient;
use retrack_sync::pipeline;

use crate::commit;
use crate::trigger::{self, CommitTarget};

/// Arguments for `retrack run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Workflow file holding the tracked `files` mapping.
    #[arg(long, default_value = ".github/workflows/sync-files.yml")]
    pub file: PathBuf,

    /// Commit message for the auto-commit.
    #[arg(long, default_value = "ci: update tracked file mappings")]
    pub message: String,

    /// Patch the file locally but never commit.
    #[arg(long)]
    pub no_commit: bool,
}

impl RunArgs {
    pub fn run(self) -> Result<()> {
        let ctx = trigger::from_env()?;
        let workflow = workflow::load_at(&self.file)
            .with_context(|| format!("failed to load workflow '{}'", self.file.display()))?;
        let client = RepoClient::new(&ctx.api_url, &ctx.repo, &ctx.token);

        let outcome = pipeline::run(&client, &workflow, &ctx.base, &ctx.head)?;
        print_decisions(&outcome.decisions);
        let (dropped, retargeted) = (outcome.dropped(), outcome.retargeted());

        let Some(patched) = outcome.patched else {
            println!("{} mappings already up to date", "✓".green());
            return Ok(());
        };

        fs::write(&self.file, &patched)
            .with_context(|| format!("failed to write '{}'", self.file.display()))?;
        println!(
            "{} patched '{}' ({dropped} dropped, {retargeted} retargeted)",
            "✎".yellow(),
            self.file.display(),
        );

        if self.no_commit {
            println!("  · skipping commit (--no-commit)");
            return Ok(());
        }

        match ctx.commit_target {
            CommitTarget::ReadOnly => {
                println!("  · cross-fork pull request; skipping auto-commit");
            }
            CommitTarget::Branch(branch) => {
                commit::push_update(&client, &self.file, &patched, &branch, &self.message)?;
                println!("  {} committed to '{branch}'", "✓".green());
            }
        }
        Ok(())
    }
}

fn print_decisions(decisions: &[Decision]) {
    for decision in decisions {
        match decision {
            Decision::Unchanged(_) => {}
            Decision::Dropped(spec) => {
                println!("  {} dropped '{}'", "-".red(), spec.source);
            }
            Decision::Retargeted { old, new } => {
                println!("  {} retargeted '{}' to '{}'", "~".yellow(), old.source, new.source);
            }
        }
    }
}
