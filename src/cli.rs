use clap::Parser;
use std::path::PathBuf;

// Build version with target info
const VERSION_INFO: &str = const_format::concatcp!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Target: ",
    std::env::consts::ARCH,
    "-",
    std::env::consts::OS
);

/// 3D flip box demo
#[derive(Parser, Debug)]
#[command(author, version = VERSION_INFO, about, long_about = None)]
pub struct Args {
    /// Number of demo panels to seed the box with
    #[arg(short = 'n', long = "panels", value_name = "N", default_value = "4")]
    pub panels: usize,

    /// Flip around the horizontal edge (top/bottom faces) instead of the vertical one
    #[arg(short = 'V', long = "vertical")]
    pub vertical: bool,

    /// Start panel index (0-based)
    #[arg(long = "index", value_name = "N")]
    pub index: Option<usize>,

    /// Auto-advance on startup
    #[arg(short = 'a', long = "autoplay")]
    pub autoplay: bool,

    /// Auto-advance backwards
    #[arg(long = "reverse")]
    pub autoplay_reverse: bool,

    /// Milliseconds between automatic advances
    #[arg(short = 'w', long = "wait", value_name = "MS")]
    pub wait: Option<u64>,

    /// Flip animation duration in milliseconds
    #[arg(short = 'd', long = "duration", value_name = "MS")]
    pub duration: Option<u64>,

    /// Easing curve: linear, ease, ease-in, ease-out, ease-in-out
    #[arg(short = 'e', long = "easing", value_name = "NAME")]
    pub easing: Option<String>,

    /// Pause autoplay while the pointer hovers the box
    #[arg(long = "pause-on-hover")]
    pub pause_on_hover: bool,

    /// Increase logging verbosity (default: warn, -v: info, -vv: debug, -vvv+: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Custom configuration directory (overrides default platform paths)
    #[arg(short = 'c', long = "config-dir", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}
