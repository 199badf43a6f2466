use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "dashgen",
    version,
    about = "Generate a client analysis dashboard from template + data JSON"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, help = "Print debug diagnostics to stderr")]
    pub verbose: bool,
    #[arg(value_name = "DATA_FILE", help = "JSON file with an optional `client` object")]
    pub data_file: PathBuf,
    #[arg(value_name = "OUTPUT_FILE", help = "Where the generated HTML is written")]
    pub output_file: PathBuf,
    /// Accepted for compatibility; anything after the output path is ignored.
    #[arg(hide = true)]
    pub extra: Vec<String>,
}
