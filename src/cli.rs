use clap::Parser;
use std::path::PathBuf;

/// Print a collision-free name for each candidate line
#[derive(clap::Parser, Debug)]
#[command(name = "uniqname", version)]
pub struct Arguments {
    /// File of candidates, one per line (`candidate` or `candidate<TAB>prefix`).
    /// Reads stdin when omitted
    pub input: Option<PathBuf>,
    /// JSON registry config
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Overrides the separator of the config
    #[arg(long)]
    pub separator: Option<String>,
    /// Overrides the empty marker of the config
    #[arg(long)]
    pub empty_marker: Option<String>,
    /// Name that must never be issued (repeatable)
    #[arg(long = "reserve", value_name = "NAME")]
    pub reserved: Vec<String>,
}

pub fn parse_command_line_args() -> Arguments {
    Arguments::parse()
}
