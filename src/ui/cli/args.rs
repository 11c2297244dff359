// Wed Jan 15 2026 - Alex

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abi-layout")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Struct and union layout explorer", long_about = None)]
pub struct Args {
    /// Read commands from a file instead of stdin
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Print DESCRIBIR reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Include member offsets in reports
    #[arg(long)]
    pub detailed: bool,

    #[arg(long)]
    pub no_color: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(script) = &self.script {
            if !script.exists() {
                return Err(format!("Script file does not exist: {:?}", script));
            }
        }
        if self.json && self.detailed {
            return Err("--json and --detailed cannot be combined".to_string());
        }
        Ok(())
    }
}
