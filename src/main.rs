use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info};

use pbxpatch::{
    config::PatcherConfig,
    firebase_storage_plan,
    runner::{NEXT_STEP_MESSAGE, SUCCESS_MESSAGE},
    RunOptions,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to project.pbxproj (defaults to PBXPATCH_PROJECT, then the config file)
    project: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the diff instead of writing the file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Fail without writing if any anchor is missing
    #[arg(short, long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    pbxpatch::init_with_logger(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => PatcherConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => PatcherConfig::default(),
    };
    debug!("Effective config: {:?}", config);

    let project = config.resolve_project(cli.project.as_deref());
    let options = RunOptions::merged(&config, cli.strict, cli.dry_run);

    let plan = firebase_storage_plan().context("Failed to build patch plan")?;
    let outcome = match pbxpatch::run(&project, &plan, options) {
        Ok(outcome) => outcome,
        Err(e) => {
            if let Some(path) = e.path() {
                error!("Error while handling {}", path.display());
            }
            return Err(anyhow::Error::new(e).context(format!(
                "Failed to patch {}",
                project.display()
            )));
        }
    };

    debug!("Patch report:\n{}", outcome.report);
    info!("Anchors applied: {}", outcome.report.applied().join(", "));

    if !outcome.written {
        if let Some(diff) = outcome.diff {
            print!("{}", diff);
        }
        return Ok(());
    }

    println!("{}", SUCCESS_MESSAGE);
    println!("{}", NEXT_STEP_MESSAGE);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "pbxpatch",
            "-n",
            "-s",
            "-v",
            "-c",
            "pbxpatch.toml",
            "App.xcodeproj/project.pbxproj",
        ])
        .unwrap();

        assert!(cli.dry_run);
        assert!(cli.strict);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("pbxpatch.toml")));
        assert_eq!(
            cli.project,
            Some(PathBuf::from("App.xcodeproj/project.pbxproj"))
        );
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["pbxpatch"]).unwrap();

        assert!(!cli.dry_run && !cli.strict && !cli.verbose);
        assert!(cli.config.is_none());
        assert!(cli.project.is_none());
    }

    #[test]
    fn test_parse_long_flags_and_merge() {
        let cli = Cli::try_parse_from(["pbxpatch", "--dry-run", "--config", "p.toml"]).unwrap();
        let config = PatcherConfig {
            strict: true,
            ..Default::default()
        };

        let options = RunOptions::merged(&config, cli.strict, cli.dry_run);
        assert!(options.strict);
        assert!(options.dry_run);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["pbxpatch", "--force"]).is_err());
    }
}
