use super::FlushStopper;
use std::io::Write;

/// Make a writer unable to flush its buffer through `flush()`.
///
/// ```
/// use noflush::builder::StopFlush;
/// use std::io::{BufWriter, Write};
///
/// let mut writer = BufWriter::new(Vec::new()).stop_flush();
/// writer.write_all(b"AB").unwrap();
/// ```
pub trait StopFlush: Write {
    /// Wrap this writer into a
    /// [flush stopper](../struct.FlushStopper.html) so that callers
    /// invoking `flush()` on it cannot force the buffer out.
    fn stop_flush(self) -> FlushStopper<Self>
    where
        Self: Sized,
    {
        FlushStopper::new(self)
    }
}

impl<W: Write> StopFlush for W {}
