//! Ticker Actor: dedicated thread for the animation clock.
//!
//! Deadlines advance by exactly one interval per tick, so the clock never
//! drifts with rendering cost. A controller that falls behind receives the
//! missed ticks in a burst rather than losing them.

use super::deliver;
use super::messages::{Event, Tick};
use crossbeam_channel::Sender;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Longest single sleep, so shutdown is noticed promptly.
const MAX_SLEEP: Duration = Duration::from_millis(10);

/// Ticker actor that generates regular timing events.
pub struct TickerActor {
    /// Handle to the ticker thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl TickerActor {
    /// Spawn a new ticker actor with the given interval.
    ///
    /// # Arguments
    ///
    /// * `sender` - Event queue to deliver ticks to.
    /// * `interval` - Time between ticks (250ms for the default animation).
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the ticker thread.
    pub fn spawn(sender: Sender<Event>, interval: Duration) -> std::io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("lilguy-ticker".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, interval);
                tracing::debug!("ticker stopped");
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the ticker to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main ticker loop.
    fn run_loop(sender: &Sender<Event>, shutdown: &AtomicBool, interval: Duration) {
        let start = Instant::now();
        let mut sequence = 0u64;
        let mut next_tick = start + interval;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let now = Instant::now();
            if now >= next_tick {
                let tick = Tick {
                    sequence,
                    elapsed: next_tick - start,
                };

                // Blocks while the queue is full; ticks are never skipped.
                if !deliver(sender, Event::Tick(tick), shutdown) {
                    break;
                }

                sequence += 1;
                next_tick += interval;
            } else {
                thread::sleep((next_tick - now).min(MAX_SLEEP));
            }
        }
    }
}

impl Drop for TickerActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
