//! Interactive repository selection
//!
//! The fuzzy matching itself is dialoguer's. The prompt is drawn on stderr so
//! stdout only ever carries the selected path (or a diagnostic).

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::FuzzySelect;
use std::io::Write;
use tracing::debug;

use crate::cache::reader::load_repos;
use crate::core::config::Config;
use crate::core::model::Repo;

/// Prompt shown above the candidate list
pub const PROMPT: &str = "select a repository:";

/// Outcome of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index into the list passed to the selector
    Chosen(usize),
    /// User aborted, or there was nothing to choose from
    Cancelled,
}

/// Something that picks one repository out of a list
pub trait Selector {
    fn select(&self, repos: &[Repo]) -> Result<Selection>;
}

/// Terminal fuzzy finder
#[derive(Default)]
pub struct FuzzySelector {
    theme: ColorfulTheme,
}

impl Selector for FuzzySelector {
    fn select(&self, repos: &[Repo]) -> Result<Selection> {
        if repos.is_empty() {
            return Ok(Selection::Cancelled);
        }

        let labels: Vec<&str> = repos.iter().map(Repo::label).collect();
        let chosen = FuzzySelect::with_theme(&self.theme)
            .with_prompt(PROMPT)
            .items(&labels)
            .default(0)
            .highlight_matches(true)
            .interact_opt()?;

        Ok(chosen.map_or(Selection::Cancelled, Selection::Chosen))
    }
}

/// Load repositories, let the user pick one and print its full path.
///
/// Selector failures and cancellations are reported on `out` and are not
/// errors; only a failed scan is.
pub fn run_pick<S, W>(config: &Config, selector: &S, mut out: W) -> Result<()>
where
    S: Selector + ?Sized,
    W: Write,
{
    let repos = load_repos(config)?;
    debug!(count = repos.len(), "presenting repositories");

    match selector.select(&repos) {
        Ok(Selection::Chosen(idx)) => match repos.get(idx) {
            Some(repo) => writeln!(out, "{}", repo.full_path)?,
            None => writeln!(out, "Error selecting repository: index {idx} out of range")?,
        },
        Ok(Selection::Cancelled) if repos.is_empty() => {
            writeln!(out, "Error selecting repository: no repositories found")?
        }
        Ok(Selection::Cancelled) => writeln!(out, "Error selecting repository: selection cancelled")?,
        Err(e) => writeln!(out, "Error selecting repository: {e}")?,
    }

    Ok(())
}
