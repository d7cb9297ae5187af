//! Runtime orchestration for sparr execution
//!
//! The Runtime struct wires the pipeline together:
//! - Scanner and Parser for source text
//! - Program materialization
//! - VM for execution, with stdout or captured output

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use core_types::Number;
use instruction_set::Program;
use interpreter::{CaptureWriter, ConsoleWriter, StdoutWriter, VM};
use parser::{Parser, Scanner};

use crate::error::{CliError, CliResult};
use crate::stack_file::parse_initial_stack;

/// Runs sparr programs end to end
#[derive(Debug, Default)]
pub struct Runtime {
    /// Whether to print scanner output before execution
    print_tokens: bool,
    /// Whether to print the program listing before execution
    print_program: bool,
    /// Step limit passed to the VM
    max_steps: Option<u64>,
    /// Capture buffer replacing stdout
    output: Option<Rc<RefCell<Vec<String>>>>,
}

impl Runtime {
    /// Create a new runtime writing to stdout
    ///
    /// # Example
    /// ```
    /// use sparr_cli::Runtime;
    ///
    /// let runtime = Runtime::new().with_max_steps(Some(1000));
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable token printing
    pub fn with_print_tokens(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Enable program listing
    pub fn with_print_program(mut self, enabled: bool) -> Self {
        self.print_program = enabled;
        self
    }

    /// Limit the number of executed instructions
    pub fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Collect every output line in `output` instead of printing it
    pub fn with_output(mut self, output: Rc<RefCell<Vec<String>>>) -> Self {
        self.output = Some(output);
        self
    }

    /// Execute a program file, optionally seeding the stack from a file
    ///
    /// # Errors
    /// Returns `CliError` if a file cannot be read or the program fails
    ///
    /// # Example
    /// ```no_run
    /// use sparr_cli::Runtime;
    ///
    /// Runtime::new().execute_file("count.sparr", None).unwrap();
    /// ```
    pub fn execute_file(&self, program: impl AsRef<Path>, stack_file: Option<&Path>) -> CliResult<()> {
        let program = program.as_ref();
        let source = std::fs::read_to_string(program).map_err(|e| CliError::io(program, e))?;

        let initial_stack = match stack_file {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
                parse_initial_stack(&text)
            }
            None => Vec::new(),
        };
        tracing::debug!(
            program = %program.display(),
            stack_values = initial_stack.len(),
            "loaded input files"
        );

        self.execute_string(&source, &initial_stack)
    }

    /// Execute sparr source text with the given initial stack
    ///
    /// # Example
    /// ```
    /// use std::cell::RefCell;
    /// use std::rc::Rc;
    /// use sparr_cli::Runtime;
    ///
    /// let output = Rc::new(RefCell::new(Vec::new()));
    /// Runtime::new()
    ///     .with_output(output.clone())
    ///     .execute_string("pop\nwrt rv", &[5.0])
    ///     .unwrap();
    /// assert_eq!(*output.borrow(), vec!["5".to_string()]);
    /// ```
    pub fn execute_string(&self, source: &str, initial_stack: &[Number]) -> CliResult<()> {
        let tokens = Scanner::new(source).scan_tokens()?;

        if self.print_tokens {
            let console = self.console();
            for token in &tokens {
                console.write(&token.to_string());
            }
        }

        let instructions = Parser::new(tokens).parse()?;
        let program = Program::from_instructions(instructions);

        if self.print_program {
            let console = self.console();
            for line in program.listing().lines() {
                console.write(line);
            }
        }

        let mut vm = VM::new(program)
            .with_console(self.console())
            .with_initial_stack(initial_stack.iter().copied());
        if let Some(limit) = self.max_steps {
            vm = vm.with_step_limit(limit);
        }

        vm.run()?;
        Ok(())
    }

    fn console(&self) -> Box<dyn ConsoleWriter> {
        match &self.output {
            Some(output) => Box::new(CaptureWriter::new(output.clone())),
            None => Box::new(StdoutWriter),
        }
    }
}
