//! Interruptible pause.
//!
//! A thread blocked in [`Interrupt::pause`] wakes early when the paired
//! [`InterruptHandle`] fires. One signal interrupts exactly one pause.

use crate::error::{DemoError, Result};
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct InterruptHandle {
    tx: Sender<()>,
}

impl InterruptHandle {
    /// Wakes the next (or current) pause on the paired `Interrupt`.
    pub fn interrupt(&self) {
        // The worker may already be gone; nothing left to wake.
        let _ = self.tx.send(());
    }
}

#[derive(Debug)]
pub struct Interrupt {
    rx: Receiver<()>,
}

pub fn interrupt_pair() -> (InterruptHandle, Interrupt) {
    let (tx, rx) = channel::unbounded();
    (InterruptHandle { tx }, Interrupt { rx })
}

impl Interrupt {
    /// An interrupt that never fires.
    pub fn never() -> Self {
        Self {
            rx: channel::never(),
        }
    }

    pub fn pause(&self, duration: Duration) -> Result<()> {
        let started = Instant::now();
        match self.rx.recv_timeout(duration) {
            Ok(()) => Err(DemoError::Interrupted {
                after: started.elapsed(),
            }),
            Err(RecvTimeoutError::Timeout) => Ok(()),
            Err(RecvTimeoutError::Disconnected) => {
                // Handle dropped: nobody can interrupt us any more.
                thread::sleep(duration.saturating_sub(started.elapsed()));
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_sleeps_full_duration() {
        let started = Instant::now();
        Interrupt::never().pause(Duration::from_millis(20)).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_pending_signal_interrupts_one_pause() {
        let (handle, interrupt) = interrupt_pair();
        handle.interrupt();

        let first = interrupt.pause(Duration::from_secs(5));
        assert!(matches!(first, Err(DemoError::Interrupted { .. })));

        let second = interrupt.pause(Duration::from_millis(1));
        assert!(second.is_ok());
    }

    #[test]
    fn test_interrupt_from_another_thread() {
        let (handle, interrupt) = interrupt_pair();
        let waker = thread::spawn(move || {
            thread::sleep(Duration::from_millis(10));
            handle.interrupt();
        });

        let started = Instant::now();
        let result = interrupt.pause(Duration::from_secs(10));
        waker.join().unwrap();

        assert!(matches!(result, Err(DemoError::Interrupted { .. })));
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn test_dropped_handle_still_pauses() {
        let (handle, interrupt) = interrupt_pair();
        drop(handle);

        let started = Instant::now();
        interrupt.pause(Duration::from_millis(15)).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(15));
    }
}
