//! Console output for write instructions

use std::cell::RefCell;
use std::rc::Rc;

/// Console output writer trait
///
/// Every write instruction emits exactly one line through this trait.
pub trait ConsoleWriter {
    /// Write one line of program output
    fn write(&self, message: &str);
}

/// Default console writer that prints to stdout
#[derive(Debug, Default)]
pub struct StdoutWriter;

impl ConsoleWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{}", message);
    }
}

/// Console writer that records lines in a shared buffer
#[derive(Debug, Clone, Default)]
pub struct CaptureWriter {
    output: Rc<RefCell<Vec<String>>>,
}

impl CaptureWriter {
    /// Create a writer appending to `output`
    pub fn new(output: Rc<RefCell<Vec<String>>>) -> Self {
        Self { output }
    }

    /// Lines written so far
    pub fn lines(&self) -> Vec<String> {
        self.output.borrow().clone()
    }
}

impl ConsoleWriter for CaptureWriter {
    fn write(&self, message: &str) {
        self.output.borrow_mut().push(message.to_string());
    }
}
