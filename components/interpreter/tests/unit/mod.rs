//! Unit tests for interpreter components

use core_types::{ErrorKind, Register};
use instruction_set::{Condition, Instruction, Operand, Operation, Program};
use interpreter::{CaptureWriter, Dispatcher, ExecutionContext, VM};
use std::cell::RefCell;
use std::rc::Rc;

fn lit(value: f64) -> Operand {
    Operand::Literal(value)
}

fn reg(register: Register) -> Operand {
    Operand::Register(register)
}

/// Build a program from operations placed on consecutive lines starting at 1
fn program(operations: Vec<Operation>) -> Program {
    Program::from_instructions(
        operations
            .into_iter()
            .enumerate()
            .map(|(i, op)| Instruction::new(op, i as u32 + 1)),
    )
}

fn run(operations: Vec<Operation>) -> (VM, Vec<String>) {
    let output = Rc::new(RefCell::new(Vec::new()));
    let mut vm = VM::new(program(operations)).with_console(Box::new(CaptureWriter::new(output.clone())));
    vm.run().unwrap();
    let lines = output.borrow().clone();
    (vm, lines)
}

// ============================================================================
// ExecutionContext Tests
// ============================================================================

#[test]
fn test_context_register_roundtrip_for_every_register() {
    let mut ctx = ExecutionContext::new();
    for (i, register) in Register::all().enumerate() {
        ctx.set_register(register, i as f64 * 10.0);
    }
    for (i, register) in Register::all().enumerate() {
        assert_eq!(ctx.get_register(register), i as f64 * 10.0);
    }
}

#[test]
fn test_context_snapshot() {
    let mut ctx = ExecutionContext::new();
    ctx.set_register(Register::General(9), 3.0);
    ctx.push(8.0);
    let snapshot = ctx.snapshot();
    assert_eq!(snapshot.general[9], 3.0);
    assert_eq!(snapshot.v, 1.0);
    assert_eq!(snapshot.c, 1.0);
    assert_eq!(snapshot.stack, vec![8.0]);
    assert_eq!(snapshot.steps, 0);
}

// ============================================================================
// Dispatcher Tests
// ============================================================================

#[test]
fn test_dispatcher_copy_into_counter() {
    let dispatcher = Dispatcher::with_console(Box::new(CaptureWriter::default()));
    let mut ctx = ExecutionContext::new();
    dispatcher
        .execute(
            &mut ctx,
            &Instruction::new(
                Operation::Copy {
                    src: lit(7.0),
                    dst: Register::Counter,
                },
                1,
            ),
        )
        .unwrap();
    assert_eq!(ctx.counter(), 7.0);
}

#[test]
fn test_dispatcher_pop_error_reports_line() {
    let dispatcher = Dispatcher::with_console(Box::new(CaptureWriter::default()));
    let mut ctx = ExecutionContext::new();
    let err = dispatcher
        .execute(&mut ctx, &Instruction::new(Operation::Pop, 12))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::RuntimeError);
    assert_eq!(err.line(), Some(12));
}

// ============================================================================
// VM Tests
// ============================================================================

#[test]
fn test_set_literal() {
    let (vm, _) = run(vec![Operation::Set(lit(42.0))]);
    assert_eq!(vm.register(Register::Result), 42.0);
}

#[test]
fn test_set_from_register() {
    let (vm, _) = run(vec![
        Operation::Copy {
            src: lit(5.0),
            dst: Register::General(2),
        },
        Operation::Set(reg(Register::General(2))),
    ]);
    assert_eq!(vm.register(Register::Result), 5.0);
}

#[test]
fn test_arithmetic_operations() {
    let cases = vec![
        (Operation::Add(lit(2.0), lit(3.0)), 5.0),
        (Operation::Sub(lit(2.0), lit(3.0)), -1.0),
        (Operation::Mul(lit(2.0), lit(3.0)), 6.0),
        (Operation::Div(lit(3.0), lit(2.0)), 1.5),
    ];
    for (operation, expected) in cases {
        let (vm, _) = run(vec![operation.clone()]);
        assert_eq!(vm.register(Register::Result), expected, "{}", operation);
    }
}

#[test]
fn test_division_edge_cases() {
    let (vm, _) = run(vec![Operation::Div(lit(-1.0), lit(0.0))]);
    assert_eq!(vm.register(Register::Result), f64::NEG_INFINITY);

    let (vm, _) = run(vec![Operation::Div(lit(0.0), lit(0.0))]);
    assert!(vm.register(Register::Result).is_nan());
}

#[test]
fn test_push_pop() {
    let (vm, _) = run(vec![
        Operation::Set(lit(9.0)),
        Operation::Push,
        Operation::Set(lit(1.0)),
        Operation::Pop,
    ]);
    assert_eq!(vm.register(Register::Result), 9.0);
    assert!(vm.stack().is_empty());
}

#[test]
fn test_conditional_copy_conditions() {
    let cases = [
        (Condition::GT, 2.0, 1.0, true),
        (Condition::GT, 1.0, 1.0, false),
        (Condition::LT, 1.0, 2.0, true),
        (Condition::LT, 2.0, 2.0, false),
        (Condition::EQ, 3.0, 3.0, true),
        (Condition::EQ, 3.0, 4.0, false),
    ];
    for (condition, a, b, copied) in cases {
        let (vm, _) = run(vec![Operation::ConditionalCopy {
            condition,
            a: lit(a),
            b: lit(b),
            src: lit(77.0),
            dst: Register::General(1),
        }]);
        let expected = if copied { 77.0 } else { 0.0 };
        assert_eq!(vm.register(Register::General(1)), expected, "{:?} {} {}", condition, a, b);
    }
}

#[test]
fn test_write_formats_numbers() {
    let (_, output) = run(vec![
        Operation::Write(lit(3.0)),
        Operation::Write(lit(0.5)),
        Operation::Div(lit(1.0), lit(0.0)),
        Operation::Write(reg(Register::Result)),
    ]);
    assert_eq!(output, vec!["3", "0.5", "Infinity"]);
}

#[test]
fn test_write_char() {
    let (_, output) = run(vec![
        Operation::WriteChar(lit(72.0)),
        Operation::WriteChar(lit(-5.0)),
    ]);
    assert_eq!(output, vec!["H".to_string(), "\u{FFFD}".to_string()]);
}

#[test]
fn test_step_counts_noop_padding() {
    let program = Program::from_instructions(vec![Instruction::new(Operation::Push, 3)]);
    let mut vm = VM::new(program).with_console(Box::new(CaptureWriter::default()));
    vm.run().unwrap();
    assert_eq!(vm.steps(), 3);
    assert_eq!(vm.stack(), &[1.0]);
}

#[test]
fn test_fractional_counter_truncates() {
    // Jump to 2.5 lands on line 2, then continues at 3.5 (line 3)
    let (_, output) = run(vec![
        Operation::Copy {
            src: lit(2.5),
            dst: Register::Counter,
        },
        Operation::Write(lit(2.0)),
        Operation::Write(lit(3.0)),
    ]);
    assert_eq!(output, vec!["2", "3"]);
}

#[test]
fn test_program_accessor() {
    let vm = VM::new(program(vec![Operation::Push]));
    assert_eq!(vm.program().instruction_count(), 1);
}
