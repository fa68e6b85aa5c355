#[allow(clippy::module_inception)]
mod flush_stopper;
pub use flush_stopper::FlushStopper;
pub(crate) mod builder;
mod cmp;
mod flush_now;
mod fmt;
mod write;
