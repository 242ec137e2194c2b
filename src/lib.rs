// pbxpatch - wires the FirebaseStorage package product into an Xcode project
// by inserting text after fixed anchors in project.pbxproj

pub mod config;
pub mod error;
pub mod fs;
pub mod patch;
pub mod preview;
pub mod runner;

use anyhow::Result;
use tracing::info;

pub use error::PatchError;
pub use patch::{firebase_storage_plan, Anchor, AnchorOutcome, PatchPlan, PatchReport};
pub use runner::{run, RunOptions, RunOutcome};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging on stderr so stdout only carries status lines and diffs
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` when `verbose`.
pub fn init_with_logger(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))?;

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    info!("pbxpatch v{}", version());
    Ok(())
}
