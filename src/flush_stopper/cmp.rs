use super::FlushStopper;
use std::hash::{Hash, Hasher};

/// Two `FlushStopper`s compare like the writers they wrap. Distinct
/// wrapper instances over writers that compare equal are therefore
/// indistinguishable, which matters when stoppers end up as keys in a
/// collection.
impl<W: PartialEq> PartialEq for FlushStopper<W> {
    fn eq(&self, other: &Self) -> bool {
        self.sink == other.sink
    }
}

impl<W: Eq> Eq for FlushStopper<W> {}

impl<W: Hash> Hash for FlushStopper<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sink.hash(state)
    }
}
