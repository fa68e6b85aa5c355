//! Chainable construction of [`FlushStopper`](../struct.FlushStopper.html)
//! writers.
//!
//! ## Examples
//!
//! ```
//! use noflush::builder::StopFlush;
//! use std::io::{BufWriter, Write};
//!
//! let mut writer = BufWriter::new(Vec::new()).stop_flush();
//! writer.write_all(b"AB").unwrap();
//! ```

pub use crate::flush_stopper::builder::StopFlush;
