use super::outcome::{DeletionOutcome, RepositoryReport};
use crate::core::git::RepositoryPath;
use crate::utils::{CleanupError, Result};
use std::io::Write;

/// Renders cleanup results as plain lines on any writer.
pub struct CleanupReporter<W: Write> {
    out: W,
}

impl<W: Write> CleanupReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn show_results(&mut self, report: &RepositoryReport) -> Result<()> {
        if report.is_empty() {
            writeln!(
                self.out,
                "No gone branches found at `{}`.",
                report.repository
            )?;
            return Ok(());
        }

        writeln!(self.out, "Found gone branches at `{}`:", report.repository)?;
        for entry in &report.outcomes {
            match &entry.outcome {
                DeletionOutcome::Deleted => writeln!(self.out, "\t- Deleted {}", entry.branch)?,
                DeletionOutcome::Preview => {
                    writeln!(self.out, "\t- Will delete {}", entry.branch)?
                }
                DeletionOutcome::Failed(detail) => writeln!(
                    self.out,
                    "\t- Failed to delete {}: {}",
                    entry.branch, detail
                )?,
            }
        }

        Ok(())
    }

    pub fn show_error(&mut self, repository: &RepositoryPath, error: &CleanupError) -> Result<()> {
        writeln!(self.out, "Error at `{}`: {}", repository, error)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
