use anyhow::Result;
use uniqname::{cli, runner};

fn main() -> Result<()> {
    env_logger::init();
    let args = cli::parse_command_line_args();
    runner::run(&args)
}
