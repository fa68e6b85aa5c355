use super::FlushStopper;
use crate::FlushNow;
use std::io::{Result, Write};

impl<W: Write> FlushNow for FlushStopper<W> {
    /// Forwards exactly one `flush()` call to the wrapped writer.
    fn flush_now(&mut self) -> Result<()> {
        self.sink.flush()
    }
}

impl<W: Write> FlushStopper<W> {
    /// Flush the wrapped writer for real, then unwrap it.
    ///
    /// This is the usual way to end a batch of writes: everything still
    /// buffered goes out to the destination once, and the writer is
    /// handed back to the caller who owns its lifecycle.
    ///
    /// ```
    /// use noflush::FlushStopper;
    /// use std::io::Write;
    ///
    /// let mut writer = FlushStopper::buffered(Vec::new());
    /// writer.write_all(b"AB").unwrap();
    /// let sink = writer.finish().unwrap();
    /// assert_eq!(sink.get_ref(), b"AB");
    /// ```
    pub fn finish(mut self) -> Result<W> {
        self.sink.flush()?;
        Ok(self.sink)
    }
}
