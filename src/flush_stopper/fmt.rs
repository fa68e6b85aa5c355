use super::FlushStopper;
use std::fmt;

/// Formats like the wrapped writer, with no wrapper-specific framing.
impl<W: fmt::Debug> fmt::Debug for FlushStopper<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sink.fmt(f)
    }
}

impl<W: fmt::Display> fmt::Display for FlushStopper<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.sink.fmt(f)
    }
}
