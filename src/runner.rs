use std::path::Path;
use tracing::{info, warn};

use crate::config::PatcherConfig;
use crate::error::{PatchError, Result};
use crate::fs::{read_file_to_string, write_file_atomic};
use crate::patch::{PatchPlan, PatchReport};
use crate::preview::unified_diff;

pub const SUCCESS_MESSAGE: &str = "✅ Successfully added FirebaseStorage to project.pbxproj";
pub const NEXT_STEP_MESSAGE: &str =
    "🔄 Now run: xcodebuild -scheme MessageAI -sdk iphonesimulator build";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Fail, without writing, if any anchor is missing
    pub strict: bool,
    /// Compute the diff but leave the file alone
    pub dry_run: bool,
}

impl RunOptions {
    /// Command-line flags can only switch a mode on, never off a config setting
    pub fn merged(config: &PatcherConfig, strict: bool, dry_run: bool) -> Self {
        Self {
            strict: strict || config.strict,
            dry_run: dry_run || config.dry_run,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: PatchReport,
    /// Set for dry runs only
    pub diff: Option<String>,
    pub written: bool,
}

/// Read the project file, apply the plan and write the result back
pub fn run(project: &Path, plan: &PatchPlan, options: RunOptions) -> Result<RunOutcome> {
    info!(
        "Applying plan '{}' to {}",
        plan.name(),
        project.display()
    );

    let original = read_file_to_string(project)?;
    let (patched, report) = plan.apply(&original);

    let unmatched = report.unmatched();
    if !unmatched.is_empty() {
        if options.strict {
            return Err(PatchError::unmatched(
                unmatched.into_iter().map(String::from).collect(),
            ));
        }
        warn!(
            "{} of {} anchors not found; writing anyway",
            unmatched.len(),
            plan.anchors().len()
        );
    }

    if options.dry_run {
        let label = project.to_string_lossy();
        let diff = unified_diff(&original, &patched, &label);
        info!("Dry run, {} left unchanged", project.display());
        return Ok(RunOutcome {
            report,
            diff: Some(diff),
            written: false,
        });
    }

    // The file is rewritten even when nothing matched
    write_file_atomic(project, &patched)?;
    info!("Wrote {}", project.display());

    Ok(RunOutcome {
        report,
        diff: None,
        written: true,
    })
}
