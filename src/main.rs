use anyhow::Result;
use clap::Parser;
use icon_resize::constants::paths;
use icon_resize::{resize_icons, ResizeConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resize-icons")]
#[command(about = "Resize the bundled status icons to 14x14 in place", long_about = None)]
struct Cli {
    /// Directory holding the icon files
    #[arg(default_value = paths::RESOURCES_DIR)]
    resources_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ResizeConfig::with_resources_dir(cli.resources_dir);
    resize_icons(&config)?;

    Ok(())
}
