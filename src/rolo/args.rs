use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolo")]
#[command(about = "An interactive address book for the command line", long_about = None)]
pub struct Cli {
    /// Path to the contacts file (defaults to the user data directory)
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}
