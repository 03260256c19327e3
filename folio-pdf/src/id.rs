use std::sync::atomic::{AtomicU32, Ordering};

/// Issues object numbers for the indirect objects of one document.
///
/// Numbers start at 1 and only grow. A number handed out by
/// [`Id::increment`] stays spent even if its requester is discarded, and
/// the order in which numbers are requested is the order objects appear in
/// the body.
#[derive(Debug)]
pub struct Id {
    next: AtomicU32,
}

impl Id {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(initial: u32) -> Self {
        Self {
            next: AtomicU32::new(initial),
        }
    }

    /// Next number to be issued. Does not consume it.
    pub fn value(&self) -> u32 {
        self.next.load(Ordering::SeqCst)
    }

    /// Issues the current number and advances the counter by one.
    pub fn increment(&self) -> u32 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}
