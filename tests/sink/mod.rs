use std::cell::RefCell;
use std::io::{Result, Write};
use std::rc::Rc;

/// Sink appending to a shared byte vector.
///
/// Clones write to the same destination, so the bytes received by the
/// sink can be observed while a `BufWriter` still owns one of the clones.
pub struct SharedSink {
    bytes: Rc<RefCell<Vec<u8>>>,
    flushes: Rc<RefCell<usize>>,
}

impl SharedSink {
    pub fn new() -> Self {
        SharedSink {
            bytes: Rc::new(RefCell::new(Vec::new())),
            flushes: Rc::new(RefCell::new(0)),
        }
    }

    /// Bytes received by the sink so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.borrow().clone()
    }

    /// Number of `flush()` calls the sink received so far.
    pub fn flushes(&self) -> usize {
        *self.flushes.borrow()
    }
}

impl Clone for SharedSink {
    fn clone(&self) -> Self {
        SharedSink {
            bytes: Rc::clone(&self.bytes),
            flushes: Rc::clone(&self.flushes),
        }
    }
}

impl Write for SharedSink {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<()> {
        *self.flushes.borrow_mut() += 1;
        Ok(())
    }
}
