use std::io::{BufWriter, Write};

/// `Write` wrapper disabling the `flush()` method.
///
/// This wrapper forwards every [`Write`](std::io::Write) method call to
/// the writer it wraps except for
/// [`flush()`](struct.FlushStopper.html#method.flush). This method
/// performs no action and always succeeds, so buffered bytes only move
/// when the owner invokes [`flush_now()`](trait.FlushNow.html) from the
/// [`FlushNow`](trait.FlushNow.html) trait, or when the wrapped writer is
/// dropped and flushes itself.
///
/// This is useful when a writer is handed to a library that flushes after
/// every write. Unstopped, each of these flushes forces a partial buffer
/// out to the destination and cancels the benefit of buffering.
///
/// ## Examples
///
/// This example shows the effect of a flush stopper on a
/// [`BufWriter`](std::io::BufWriter).
///
/// ```
/// use noflush::{FlushNow, FlushStopper};
/// use std::io::{BufWriter, Write};
///
/// let mut writer = FlushStopper::new(BufWriter::new(Vec::new()));
/// writer.write_all(b"AB").unwrap();
///
/// // After this call the written bytes are still sitting in the buffer.
/// writer.flush().unwrap();
/// assert!(writer.get_ref().get_ref().is_empty());
///
/// // After this call they reached the destination.
/// writer.flush_now().unwrap();
/// assert_eq!(writer.get_ref().get_ref(), b"AB");
/// ```
pub struct FlushStopper<W> {
    pub(super) sink: W,
}

impl<W> FlushStopper<W> {
    pub fn new(sink: W) -> Self {
        FlushStopper { sink }
    }

    /// Get a shared reference to the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Get a mutable reference to the wrapped writer.
    ///
    /// The wrapped writer's own `flush()` is reachable through this
    /// reference and is not stopped.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Unwrap this `FlushStopper`, returning the wrapped writer.
    ///
    /// Buffered bytes are not flushed. Use
    /// [`finish()`](struct.FlushStopper.html#method.finish) to flush
    /// before unwrapping.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> FlushStopper<BufWriter<W>> {
    /// Wrap `sink` in a [`BufWriter`](std::io::BufWriter) with a stopped
    /// `flush()`.
    ///
    /// This is the shape wanted when the destination is unbuffered, e.g.
    /// a file or a socket handed to a flush-happy serializer.
    ///
    /// ```
    /// use noflush::FlushStopper;
    /// use std::io::Write;
    ///
    /// let mut writer = FlushStopper::buffered(Vec::new());
    /// writer.write_all(b"buffered").unwrap();
    /// ```
    pub fn buffered(sink: W) -> Self {
        FlushStopper::new(BufWriter::new(sink))
    }
}
