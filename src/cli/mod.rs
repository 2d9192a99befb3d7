//! Command-line interfaces for the sam-inspect tools.
//!
//! Two binaries share the same single option:
//!
//! - **sam-flags**: Count records per FLAG bit and pairing category
//! - **sam-header**: Describe every tag in the SAM header
//!
//! ## Usage
//!
//! ```text
//! # Summarize FLAG bits
//! sam-flags --sam sample.sam
//!
//! # Annotate header tags
//! sam-header -a sample.sam
//!
//! # Show debug logging on stderr
//! RUST_LOG=sam_inspect=debug sam-flags -a sample.sam
//! ```

use std::path::PathBuf;

use clap::Args;
use tracing_subscriber::EnvFilter;

pub mod flags;
pub mod header;

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "sam_inspect=warn";

#[derive(Args, Debug, Clone)]
pub struct SamArgs {
    /// SAM file
    #[arg(short = 'a', long = "sam", required = true)]
    pub sam: PathBuf,
}

/// Initialize logging on stderr, honoring `RUST_LOG` when present.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
