use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "claimcheck")]
#[command(about = "Research claim integrity and evidence provenance analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project name recorded in the report metadata
    #[arg(default_value = "analysis")]
    pub project: String,

    /// Directory the report files are written into
    #[arg(short, long, value_name = "DIR", default_value = "reports")]
    pub output: PathBuf,
}
