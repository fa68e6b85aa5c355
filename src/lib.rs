//! Suppress `flush()` on a buffered writer without giving up the real one.
//!
//! Some serialization libraries flush their output after every value they
//! write. When the output is a [`std::io::BufWriter`], each of these calls
//! forces the partially filled buffer out to the destination and defeats
//! buffering entirely. [`FlushStopper`] wraps any [`std::io::Write`]
//! implementer and forwards every write unchanged, but turns
//! [`flush()`](std::io::Write::flush) into a no-op that always succeeds.
//! The real flush remains available through the separate [`FlushNow`]
//! trait, to be invoked when a flush is actually desired, typically once
//! at the end of a batch of writes.
//!
//! ## Examples
//!
//! ```
//! use noflush::{FlushNow, FlushStopper};
//! use std::io::{BufWriter, Write};
//!
//! let mut writer = FlushStopper::new(BufWriter::new(Vec::new()));
//!
//! writer.write_all(b"AB").unwrap();
//! // A library flushing after every write no longer hurts.
//! writer.flush().unwrap();
//!
//! // The owner decides when the buffer really goes out.
//! writer.flush_now().unwrap();
//! ```

use std::io::Result;

/// Explicit flush for writers whose standard `flush()` is a no-op.
///
/// [`Write::flush()`](std::io::Write::flush) and `flush_now()` are two
/// distinct capabilities on purpose: a [`FlushStopper`](struct.FlushStopper.html)
/// silences the former so that write-happy callers cannot drain the buffer,
/// while the owner of the writer keeps the latter to force buffered bytes
/// out when it actually wants to. Keeping the forcing variant on its own
/// trait makes the suppression visible at the call site instead of hiding
/// it in the method resolution of a wrapper.
pub trait FlushNow {
    /// Force buffered bytes out to the underlying destination.
    ///
    /// Unlike the silenced [`flush()`](std::io::Write::flush), this
    /// performs exactly one real flush per call and surfaces the
    /// underlying writer's error unchanged.
    fn flush_now(&mut self) -> Result<()>;
}

impl<F: FlushNow + ?Sized> FlushNow for &mut F {
    fn flush_now(&mut self) -> Result<()> {
        (**self).flush_now()
    }
}

impl<F: FlushNow + ?Sized> FlushNow for Box<F> {
    fn flush_now(&mut self) -> Result<()> {
        (**self).flush_now()
    }
}

/// [`Write`](std::io::Write) wrapper disabling the `flush()` method.
mod flush_stopper;
pub use crate::flush_stopper::FlushStopper;

pub mod builder;
