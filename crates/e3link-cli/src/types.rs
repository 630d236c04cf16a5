use std::path::PathBuf;

use e3link_model::{GeneratedLink, RecordIssue, RunReport, UrlTemplate};

/// Outcome of one `generate` run.
#[derive(Debug)]
pub struct GenerateResult {
    pub input: PathBuf,
    /// Where the links were written; `None` for dry runs and failed batches.
    pub output: Option<PathBuf>,
    pub template: UrlTemplate,
    pub links: Vec<GeneratedLink>,
    pub issues: Vec<RecordIssue>,
    pub dry_run: bool,
    /// True when the batch produced nothing useful (zero valid codes and no
    /// lenient header-only file was requested).
    pub failed: bool,
}

impl GenerateResult {
    pub fn to_run_report(&self) -> RunReport {
        RunReport {
            input: self.input.clone(),
            output: self.output.clone(),
            template: self.template.as_str().to_string(),
            generated: self.links.len(),
            issues: self.issues.clone(),
        }
    }
}
