//! End-to-End CLI Integration Tests
//!
//! Tests the complete interpreter through the sparr_cli Runtime API.
//! This is the highest level integration test - source code to final output.

use core_types::ErrorKind;
use sparr_cli::{parse_initial_stack, CliError, Runtime};
use std::cell::RefCell;
use std::rc::Rc;

fn run(runtime: Runtime, source: &str, stack: &[f64]) -> (Result<(), CliError>, Vec<String>) {
    let output = Rc::new(RefCell::new(Vec::new()));
    let result = runtime.with_output(output.clone()).execute_string(source, stack);
    let lines = output.borrow().clone();
    (result, lines)
}

/// Test: set and write
#[test]
fn test_e2e_set_write() {
    let (result, output) = run(Runtime::new(), "set 3\nwrt rv", &[]);
    result.expect("Execution failed");
    assert_eq!(output, vec!["3"]);
}

/// Test: add and write
#[test]
fn test_e2e_add_write() {
    let (result, output) = run(Runtime::new(), "set 3\nadd rv 4\nwrt rv", &[]);
    result.expect("Execution failed");
    assert_eq!(output, vec!["7"]);
}

/// Test: reverse the characters of an initial stack file
#[test]
fn test_e2e_reverse_input() {
    let stack = parse_initial_stack("s\np\na\nr\nr\n");
    let (result, output) = run(Runtime::new(), "wrtsc", &stack);
    result.expect("Execution failed");
    assert_eq!(output, vec!["rraps"]);
}

/// Test: sum every value on the stack
#[test]
fn test_e2e_sum_stack() {
    // r0 holds the running total; the loop pops until a 0 sentinel
    let source = "\
pop
cpeq rv 0 7 rc
add r0 rv
cp rv r0
cp 1 rc
wrt 0
wrt r0
";
    let stack = parse_initial_stack("0\n10\n20\n12\n");
    let (result, output) = run(Runtime::new(), source, &stack);
    result.expect("Execution failed");
    assert_eq!(output, vec!["42"]);
}

/// Test: listing and tokens are emitted before program output
#[test]
fn test_e2e_diagnostic_printing() {
    let runtime = Runtime::new().with_print_tokens(true).with_print_program(true);
    let (result, output) = run(runtime, "wrt 9", &[]);
    result.expect("Execution failed");
    assert_eq!(
        output,
        vec![
            "\"wrt\": Command",
            "\"9\": Number",
            "\"\": EndOfInput",
            "1: wrt 9",
            "9",
        ]
    );
}

/// Test: step limit stops a runaway program
#[test]
fn test_e2e_step_limit() {
    let runtime = Runtime::new().with_max_steps(Some(50));
    let (result, output) = run(runtime, "wrt 1\ncp 1 rc", &[]);
    match result {
        Err(CliError::Sparr(e)) => {
            assert_eq!(e.kind, ErrorKind::RuntimeError);
            assert!(e.message.contains("step limit of 50"));
        }
        other => panic!("expected step limit error, got {:?}", other),
    }
    assert_eq!(output.len(), 25);
}

/// Test: arity errors name the command
#[test]
fn test_e2e_arity_error() {
    let (result, output) = run(Runtime::new(), "add 1", &[]);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("invalid number of arguments (1) for add command, expected 2"));
    assert!(output.is_empty());
}
