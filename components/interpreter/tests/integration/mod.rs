//! Integration tests for interpreter
//!
//! Parses source text with the parser crate and runs it on the VM.

use core_types::{ErrorKind, Register};
use interpreter::{CaptureWriter, VM};
use parser::parse_program;
use std::cell::RefCell;
use std::rc::Rc;

fn vm_for(source: &str) -> (VM, Rc<RefCell<Vec<String>>>) {
    let output = Rc::new(RefCell::new(Vec::new()));
    let program = parse_program(source).unwrap();
    let vm = VM::new(program).with_console(Box::new(CaptureWriter::new(output.clone())));
    (vm, output)
}

fn run_source(source: &str) -> Vec<String> {
    let (mut vm, output) = vm_for(source);
    vm.run().unwrap();
    let lines = output.borrow().clone();
    lines
}

#[test]
fn test_set_and_write() {
    assert_eq!(run_source("set 3\nwrt rv"), vec!["3"]);
}

#[test]
fn test_add_and_write() {
    assert_eq!(run_source("set 3\nadd rv 4\nwrt rv"), vec!["7"]);
}

#[test]
fn test_counting_loop() {
    let source = "set 0\nadd rv 1\nwrt rv\ncplt rv 5 2 rc\n";
    assert_eq!(run_source(source), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_self_jump_never_halts() {
    // Copying 4 into rc on line 4 re-runs line 4 forever
    let (vm, output) = vm_for("set 0\nadd rv 1\nwrt rv\ncplt rv 5 4 rc\n");
    let mut vm = vm.with_step_limit(100);
    let err = vm.run().unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError);
    assert!(err.message.contains("step limit"));
    assert_eq!(*output.borrow(), vec!["1".to_string()]);
    assert_eq!(vm.steps(), 100);
}

#[test]
fn test_stack_order_law() {
    let source = "set 1\npush\nset 2\npush\nset 3\npush\nwrts\n";
    assert_eq!(run_source(source), vec!["3 2 1"]);
}

#[test]
fn test_write_stack_chars_reverses_push_order() {
    let source = "set 105\npush\nset 104\npush\nwrtsc";
    assert_eq!(run_source(source), vec!["hi"]);
}

#[test]
fn test_pop_after_write_stack_fails() {
    let (mut vm, output) = vm_for("push\nwrts\npop\n");
    let err = vm.run().unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError);
    assert_eq!(err.line(), Some(3));
    assert_eq!(*output.borrow(), vec!["1".to_string()]);
}

#[test]
fn test_jump_to_zero_halts() {
    assert_eq!(run_source("wrt 1\ncp 0 rc\nwrt 2"), vec!["1"]);
}

#[test]
fn test_jump_past_end_halts() {
    assert_eq!(run_source("wrt 1\ncp 99 rc\nwrt 2"), vec!["1"]);
}

#[test]
fn test_negative_counter_halts() {
    assert_eq!(run_source("sub 0 5\ncp rv rc\nwrt 2"), Vec::<String>::new());
}

#[test]
fn test_nan_counter_halts() {
    let (mut vm, output) = vm_for("div 0 0\ncp rv rc\nwrt 2");
    vm.run().unwrap();
    assert!(output.borrow().is_empty());
    assert!(vm.register(Register::Counter).is_nan());
}

#[test]
fn test_comment_and_blank_lines_shift_targets() {
    let plain = run_source("set 0\nadd rv 1\nwrt rv\ncplt rv 3 2 rc");
    let padded = run_source("# counter\nset 0\n\nadd rv 1\nwrt rv # print\ncplt rv 3 4 rc");
    assert_eq!(plain, padded);
    assert_eq!(plain, vec!["1", "2", "3"]);
}

#[test]
fn test_initial_stack_is_visible_to_program() {
    let (vm, output) = vm_for("pop\nwrt rv\nwrts");
    let mut vm = vm.with_initial_stack(vec![10.0, 20.0, 30.0]);
    vm.run().unwrap();
    assert_eq!(*output.borrow(), vec!["30".to_string(), "20 10".to_string()]);
}

#[test]
fn test_registers_as_loop_variables() {
    // r0 counts down from 3, r1 accumulates
    let source = "\
cp 3 r0
add r1 r0
cp rv r1
sub r0 1
cp rv r0
cpgt r0 0 2 rc
wrt r1
";
    assert_eq!(run_source(source), vec!["6"]);
}
