use clap::Args;
use std::io::IsTerminal;

/// Flags every program accepts.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            verbose: self.verbose,
            color: std::io::stdout().is_terminal(),
        }
    }
}

/// Per-run settings derived from the command line and the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub verbose: bool,
    pub color: bool,
}
