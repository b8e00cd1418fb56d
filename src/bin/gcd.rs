use anyhow::Result;
use clap::Parser;
use std::io;
use std::process::ExitCode;

use number_katas::cli::CommonArgs;
use number_katas::{logging, Console, GcdCommand};

#[derive(Parser)]
#[command(name = "gcd")]
#[command(version)]
#[command(about = "Compute the greatest common divisor of two integers", long_about = None)]
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

    match GcdCommand::new().execute(&mut console)? {
        Some(_) => Ok(ExitCode::SUCCESS),
        None => Ok(ExitCode::FAILURE),
    }
}
