use std::path::PathBuf;

use clap::Parser;

/// First-person virtual art gallery.
#[derive(Parser, Debug)]
#[command(name = "virtual-gallery")]
#[command(about = "Walk a 3D gallery of famous paintings", long_about = None)]
pub struct Cli {
    /// Disable the FPS overlay
    #[arg(long)]
    pub no_ui: bool,

    /// Directory containing the painting and wall textures
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,
}
