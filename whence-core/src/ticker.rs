//! Repeating timer backing live display components
//!
//! [`repeat`] spawns a background thread that invokes a callback at a fixed
//! interval and hands back a [`TickerHandle`]. The handle is the subscription:
//! cancelling it (or dropping it) stops the thread, so a live component that
//! owns its handle can never leak a timer past its own teardown.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

/// Start a repeating timer; the callback runs on a background thread
///
/// A zero interval returns an inert handle that never fires.
pub fn repeat(interval: Duration, mut callback: impl FnMut() + Send + 'static) -> TickerHandle {
    if interval.is_zero() {
        return TickerHandle { inner: None };
    }

    let (stop_tx, stop_rx) = mpsc::channel::<()>();
    let thread = std::thread::spawn(move || loop {
        match stop_rx.recv_timeout(interval) {
            // recv_timeout doubles as the interval sleep
            Err(RecvTimeoutError::Timeout) => callback(),
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    });
    tracing::debug!(interval_ms = interval.as_millis() as u64, "ticker started");

    TickerHandle {
        inner: Some((stop_tx, thread)),
    }
}

/// Owned subscription to a repeating timer
///
/// Cancellation happens at most once, on the first of [`cancel`] or drop.
///
/// [`cancel`]: TickerHandle::cancel
#[derive(Debug)]
pub struct TickerHandle {
    inner: Option<(Sender<()>, JoinHandle<()>)>,
}

impl TickerHandle {
    /// Stop the timer and wait for its thread to finish; idempotent
    pub fn cancel(&mut self) {
        if let Some((stop_tx, thread)) = self.inner.take() {
            // Dropping the sender also wakes the thread; send covers the
            // window where it is mid-callback
            let _ = stop_tx.send(());
            drop(stop_tx);
            let _ = thread.join();
            tracing::debug!("ticker cancelled");
        }
    }

    /// Whether the timer is still running
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
