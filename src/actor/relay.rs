//! Line Relay: dedicated thread forwarding piped input, line by line.
//!
//! Lines are forwarded untouched apart from their terminator, in the order
//! they were read. When the source is exhausted the relay sends
//! [`Event::InputClosed`] and exits.

use super::deliver;
use super::messages::Event;
use crossbeam_channel::Sender;
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Relay actor reading lines from a blocking source.
///
/// A read that is already blocked cannot be interrupted, so shutdown
/// detaches the thread instead of joining it.
pub struct LineRelay {
    /// Handle to the relay thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl LineRelay {
    /// Spawn a relay reading from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the relay thread.
    pub fn spawn<R>(reader: R, sender: Sender<Event>) -> std::io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("lilguy-relay".to_string())
            .spawn(move || {
                let forwarded = Self::run_loop(reader, &sender, &shutdown_clone);
                tracing::debug!(lines = forwarded, "relay stopped");
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the relay to stop after its current read.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the relay thread if it has already exited, otherwise detach it.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            if handle.is_finished() {
                let _ = handle.join();
            }
        }
    }

    /// Main relay loop. Returns the number of lines forwarded.
    fn run_loop<R: BufRead>(mut reader: R, sender: &Sender<Event>, shutdown: &AtomicBool) -> u64 {
        let mut forwarded = 0u64;
        let mut buf = Vec::new();

        loop {
            if shutdown.load(Ordering::Relaxed) {
                return forwarded;
            }

            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    let line = Self::decode_line(&buf);
                    tracing::trace!(line = %line, "received");
                    if !deliver(sender, Event::Line(line), shutdown) {
                        return forwarded;
                    }
                    forwarded += 1;
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => {
                    tracing::warn!(error = %e, "input read failed");
                    if !deliver(sender, Event::Error(format!("input read failed: {e}")), shutdown) {
                        return forwarded;
                    }
                    break;
                }
            }
        }

        let _ = deliver(sender, Event::InputClosed, shutdown);
        forwarded
    }

    /// Strip the line terminator and decode, replacing invalid UTF-8.
    fn decode_line(raw: &[u8]) -> String {
        let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        String::from_utf8_lossy(raw).into_owned()
    }
}

impl Drop for LineRelay {
    fn drop(&mut self) {
        self.shutdown();
    }
}
