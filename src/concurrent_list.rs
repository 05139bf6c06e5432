//! Copy-on-write list.
//!
//! Readers take an `Arc` snapshot and iterate it without holding any lock.
//! An append publishes a new snapshot; snapshots already handed out never
//! change underneath their holders.

use crate::task::Task;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;

pub struct ConcurrentList<T> {
    items: RwLock<Arc<Vec<T>>>,
}

impl<T: Clone> ConcurrentList<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Arc::new(Vec::new())),
        }
    }

    pub fn push(&self, item: T) {
        let mut current = self.items.write().unwrap_or_else(PoisonError::into_inner);
        // Clones the vector only while some reader still holds the old snapshot.
        Arc::make_mut(&mut *current).push(item);
    }

    pub fn snapshot(&self) -> Arc<Vec<T>> {
        let current = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*current)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Default for ConcurrentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders one snapshot as `[a, b, c]`.
pub struct SnapshotDisplay<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for SnapshotDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

pub fn list_line<T: fmt::Display>(items: &[T]) -> String {
    format!("List: {}", SnapshotDisplay(items))
}

/// Appends its own thread name, then prints the whole list.
pub struct ListWorker {
    id: usize,
    list: Arc<ConcurrentList<String>>,
}

impl ListWorker {
    pub fn new(id: usize, list: Arc<ConcurrentList<String>>) -> Self {
        Self { id, list }
    }
}

impl Task for ListWorker {
    /// Snapshot taken right after this worker's append.
    type Output = Arc<Vec<String>>;

    fn name(&self) -> String {
        format!("list-{}", self.id)
    }

    fn run(self) -> Arc<Vec<String>> {
        let me = thread::current()
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| self.name());
        self.list.push(me);

        let snapshot = self.list.snapshot();
        println!("{}", list_line(snapshot.as_slice()));
        snapshot
    }
}
