//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Run a sparr register-machine program
#[derive(Parser, Debug)]
#[command(
    name = "sparr",
    version,
    about = "Interpreter for the sparr register machine",
    after_help = "\
Examples:
  sparr count.sparr                 Run a program
  sparr hello.sparr input.txt       Run with an initial stack, one value per line
  SPARR_LOG=trace sparr loop.sparr  Trace every executed instruction
"
)]
pub struct Cli {
    /// Program source file
    pub program: Option<PathBuf>,

    /// Initial stack file; the last line ends up on top
    pub stack_file: Option<PathBuf>,

    /// Print the scanned tokens before running
    #[arg(long)]
    pub print_tokens: bool,

    /// Print the line-indexed program before running
    #[arg(long)]
    pub print_program: bool,

    /// Abort with a runtime error after this many executed instructions
    #[arg(long, value_name = "N")]
    pub max_steps: Option<u64>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
