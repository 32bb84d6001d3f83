use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

lazy_static::lazy_static! {
    static ref NEXT_EVENT_ID: AtomicU64 = AtomicU64::new(0);
}

/// Process wide identity of an event. Two clones of the same event share it.
#[derive(Clone, Copy, Hash, PartialOrd, PartialEq, Ord, Eq, Debug)]
pub struct UniqID(u64);

impl UniqID {
    pub fn new() -> Self {
        UniqID(NEXT_EVENT_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for UniqID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
