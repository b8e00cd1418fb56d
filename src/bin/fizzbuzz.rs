use anyhow::Result;
use clap::Parser;
use std::io;

use number_katas::cli::CommonArgs;
use number_katas::{logging, Console, FizzBuzzCommand};

#[derive(Parser)]
#[command(name = "fizzbuzz")]
#[command(version)]
#[command(
    about = "Classify integers read from stdin as Fizz, Buzz or FizzBuzz",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let options = cli.common.run_options();

    logging::init_logging(options.verbose)?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock()).with_color(options.color);

    FizzBuzzCommand::new().execute(&mut console)?;

    Ok(())
}
