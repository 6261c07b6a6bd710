//! Actor Model: message-passing concurrency for the engine.
//!
//! Three producers feed one bounded queue; a single controller drains it:
//! - **Input Actor**: polls the keyboard, forwards key and resize events
//! - **Ticker Actor**: emits animation ticks at a fixed period
//! - **Line Relay**: forwards lines read from piped standard input
//! - **Controller**: applies events to the state in arrival order and draws
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ Input Thread │ ──── Key/Resize ────┐
//! └──────────────┘                     ▼
//! ┌──────────────┐                ┌─────────┐     ┌────────────┐    Frame    ┌──────────┐
//! │ Ticker Thread│ ──── Tick ───▶ │  Event  │ ──▶ │ Controller │ ──────────▶ │ Terminal │
//! └──────────────┘                │  Queue  │     └────────────┘             └──────────┘
//! ┌──────────────┐                └─────────┘
//! │ Relay Thread │ ──── Line ──────────▲
//! └──────────────┘
//! ```
//!
//! Producers never touch the state. They block when the queue is full, so
//! nothing is dropped, but keep checking their shutdown flag while blocked.

mod controller;
mod engine;
mod input;
mod messages;
mod relay;
mod ticker;

pub use controller::{Controller, FrameSink, MAX_CONSECUTIVE_PRESENT_FAILURES};
pub use engine::{Engine, EngineConfig};
pub use input::InputActor;
pub use messages::{Command, Event, KeyCode, KeyModifiers, Tick};
pub use relay::LineRelay;
pub use ticker::TickerActor;

use crossbeam_channel::{SendTimeoutError, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// How long a blocked producer waits before re-checking its shutdown flag.
const SEND_RETRY: Duration = Duration::from_millis(50);

/// Deliver an event, waiting for room in the queue.
///
/// Returns `false` if the event could not be delivered because shutdown
/// was requested or the controller is gone.
fn deliver(sender: &Sender<Event>, mut event: Event, shutdown: &AtomicBool) -> bool {
    loop {
        if shutdown.load(Ordering::Relaxed) {
            return false;
        }
        match sender.send_timeout(event, SEND_RETRY) {
            Ok(()) => return true,
            Err(SendTimeoutError::Timeout(returned)) => event = returned,
            Err(SendTimeoutError::Disconnected(_)) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_deliver_waits_for_room() {
        let (tx, rx) = bounded(1);
        let shutdown = AtomicBool::new(false);
        assert!(deliver(&tx, Event::InputClosed, &shutdown));

        let drainer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(120));
            let first = rx.recv().unwrap();
            let second = rx.recv().unwrap();
            (first, second)
        });

        assert!(deliver(&tx, Event::Line("queued".into()), &shutdown));
        let (first, second) = drainer.join().unwrap();
        assert_eq!(first, Event::InputClosed);
        assert_eq!(second, Event::Line("queued".into()));
    }

    #[test]
    fn test_deliver_gives_up_on_shutdown() {
        let (tx, _rx) = bounded(1);
        let shutdown = Arc::new(AtomicBool::new(false));
        assert!(deliver(&tx, Event::InputClosed, &shutdown));

        let flag = shutdown.clone();
        let stopper = thread::spawn(move || {
            thread::sleep(Duration::from_millis(80));
            flag.store(true, Ordering::Relaxed);
        });

        assert!(!deliver(&tx, Event::InputClosed, &shutdown));
        stopper.join().unwrap();
    }

    #[test]
    fn test_deliver_disconnected() {
        let (tx, rx) = bounded::<Event>(1);
        drop(rx);
        assert!(!deliver(&tx, Event::InputClosed, &AtomicBool::new(false)));
    }
}
