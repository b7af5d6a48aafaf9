use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Issues entry ids based on the wall clock in milliseconds.
///
/// Ids are strictly increasing for the lifetime of the generator, so two
/// entries created in the same millisecond never collide.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start above `floor`, e.g. the largest id already stored.
    pub fn starting_after(floor: i64) -> Self {
        Self {
            last: AtomicI64::new(floor),
        }
    }

    pub fn next_id(&self) -> i64 {
        self.next_at(Utc::now().timestamp_millis())
    }

    /// Next id given the current time in milliseconds.
    pub fn next_at(&self, now_millis: i64) -> i64 {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(actual) => current = actual,
            }
        }
    }

    /// Next id that is not in `taken`.
    pub fn next_unused<I>(&self, taken: I) -> i64
    where
        I: IntoIterator<Item = i64>,
    {
        if let Some(max) = taken.into_iter().max() {
            self.last.fetch_max(max, Ordering::SeqCst);
        }
        self.next_id()
    }
}
