// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "raymarch-viewer")]
#[command(about = "Real-time raymarching viewer", long_about = None)]
pub struct Cli {
    /// WGSL vertex stage (entry point `vs_main`)
    #[arg(long)]
    pub vertex: Option<PathBuf>,

    /// WGSL fragment stage (entry point `fs_main`)
    #[arg(long)]
    pub fragment: Option<PathBuf>,

    /// JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height
    #[arg(long)]
    pub height: Option<u32>,

    /// Present as fast as possible instead of waiting for vblank
    #[arg(long = "no-vsync", default_value = "false")]
    pub no_vsync: bool,
}
