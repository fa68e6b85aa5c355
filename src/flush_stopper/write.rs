use super::FlushStopper;
use std::io::{IoSlice, Result, Seek, SeekFrom, Write};

impl<W: Write> Write for FlushStopper<W> {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.sink.write(buf)
    }

    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> Result<usize> {
        self.sink.write_vectored(bufs)
    }

    fn write_all(&mut self, buf: &[u8]) -> Result<()> {
        self.sink.write_all(buf)
    }

    /// Performs no action and always returns `Ok(())`.
    ///
    /// The wrapped writer's buffer is left untouched, even when its own
    /// `flush()` would fail.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<W: Seek> Seek for FlushStopper<W> {
    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        self.sink.seek(pos)
    }
}
