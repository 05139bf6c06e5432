use crate::task::Task;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Integer counter whose increments are serialized by a mutex.
#[derive(Debug, Default)]
pub struct Counter {
    count: Mutex<u64>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        *self.lock() += 1;
    }

    /// Meant to be read once every worker has been joined.
    pub fn get_count(&self) -> u64 {
        *self.lock()
    }

    // A panicking holder can't leave a half-written u64 behind, so a
    // poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, u64> {
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct CounterWorker {
    id: usize,
    counter: Arc<Counter>,
    increments: u64,
}

impl CounterWorker {
    pub fn new(id: usize, counter: Arc<Counter>, increments: u64) -> Self {
        Self {
            id,
            counter,
            increments,
        }
    }
}

impl Task for CounterWorker {
    type Output = u64;

    fn name(&self) -> String {
        format!("counter-{}", self.id)
    }

    fn run(self) -> u64 {
        for _ in 0..self.increments {
            self.counter.increment();
        }
        self.increments
    }
}
