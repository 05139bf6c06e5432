//! Spawn-and-join for a batch of workers.
//!
//! Every demo has the same shape: build N tasks, give each its own named OS
//! thread, then block until all of them have finished.

use crate::error::{DemoError, Result};
use std::thread::{self, JoinHandle};

/// A unit of work that runs to completion on its own thread.
pub trait Task: Send + 'static {
    type Output: Send + 'static;

    /// Thread name, used in output lines and error reports.
    fn name(&self) -> String;

    fn run(self) -> Self::Output;
}

/// Spawns one thread per task and joins all of them.
///
/// Outputs come back in spawn order. If any worker panics the remaining
/// workers are still joined before the first failure is returned, so the
/// caller never observes a half-finished batch.
pub fn spawn_and_join<T: Task>(tasks: Vec<T>) -> Result<Vec<T::Output>> {
    let mut handles: Vec<(String, JoinHandle<T::Output>)> = Vec::with_capacity(tasks.len());

    for task in tasks {
        let name = task.name();
        let spawned = thread::Builder::new()
            .name(name.clone())
            .spawn(move || task.run());

        match spawned {
            Ok(handle) => handles.push((name, handle)),
            Err(source) => {
                // Don't leave already-running workers detached.
                let _ = join_all(handles);
                return Err(DemoError::Spawn { name, source });
            }
        }
    }

    join_all(handles)
}

fn join_all<O>(handles: Vec<(String, JoinHandle<O>)>) -> Result<Vec<O>> {
    let mut outputs = Vec::with_capacity(handles.len());
    let mut failure = None;

    for (name, handle) in handles {
        match handle.join() {
            Ok(output) => outputs.push(output),
            Err(_) => {
                failure.get_or_insert(DemoError::WorkerPanicked { name });
            }
        }
    }

    match failure {
        Some(err) => Err(err),
        None => Ok(outputs),
    }
}
