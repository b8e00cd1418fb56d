use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use number_katas::cli::CommonArgs;
use number_katas::{logging, CircleAreaCommand, Console};

#[derive(Parser)]
#[command(name = "circle-area")]
#[command(version)]
#[command(about = "Compute the area of a circle from its radius", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let options = cli.common.run_options();

    logging::init_logging(options.verbose)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock()).with_color(options.color);

    let outcome = CircleAreaCommand::new().execute(&mut console)?;

    if outcome.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
