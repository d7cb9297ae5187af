//! Sparr CLI
//!
//! Entry point for the interpreter. Parses CLI arguments and delegates to
//! the Runtime for execution.

use clap::{CommandFactory, Parser as ClapParser};
use sparr_cli::{init_logging, Cli, Runtime};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(program) = cli.program.as_deref() else {
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    };

    let runtime = Runtime::new()
        .with_print_tokens(cli.print_tokens)
        .with_print_program(cli.print_program)
        .with_max_steps(cli.max_steps);

    if let Err(e) = runtime.execute_file(program, cli.stack_file.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
