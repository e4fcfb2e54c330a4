//! Command-line argument definitions

use clap::Args;

/// Arguments for the clip command
#[derive(Args, Debug)]
pub struct ClipArgs {
    /// Video link; repeat to create several clips with the same range
    #[arg(short, long = "url", required = true)]
    pub urls: Vec<String>,

    /// Start time (MM:SS), defaults to the configured form default
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time (MM:SS), defaults to the configured form default
    #[arg(short, long)]
    pub end: Option<String>,

    /// Print the final clip list as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not wait for clips to finish processing
    #[arg(long)]
    pub no_wait: bool,

    /// Print a share line for every ready clip after the list
    #[arg(long, conflicts_with = "json")]
    pub share: bool,
}

/// Arguments for the duration command
#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Start time (MM:SS)
    #[arg(short, long)]
    pub start: String,

    /// End time (MM:SS)
    #[arg(short, long)]
    pub end: String,
}

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Video link
    #[arg(short, long)]
    pub url: String,
}
