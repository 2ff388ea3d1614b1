use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-overview",
    about = "Walk a Visual Studio solution and report its third-party NuGet package licenses",
    version
)]
pub struct Cli {
    /// Solution file to scan
    pub solution: Option<PathBuf>,

    /// Print project discovery details
    #[arg(short, long)]
    pub verbose: bool,
}
