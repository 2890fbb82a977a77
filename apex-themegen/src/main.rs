//! CLI entrypoint for `apex-themegen`.

use apex_themegen::cli::Args;
use apex_themegen::{logging, run};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(args.is_verbose)?;
    run(&args)?;
    Ok(())
}
