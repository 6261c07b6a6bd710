//! Input Actor: dedicated thread for polling the keyboard.
//!
//! Uses crossterm's event polling so key presses are picked up without
//! blocking the controller. With standard input redirected, crossterm reads
//! from the controlling TTY instead.

use super::deliver;
use super::messages::{Event, KeyCode, KeyModifiers};
use crossbeam_channel::Sender;
use crossterm::event::{self, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Event queue to send input events to.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if the OS fails to spawn the input thread.
    pub fn spawn(sender: Sender<Event>, poll_timeout: Duration) -> std::io::Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("lilguy-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
                tracing::debug!("input actor stopped");
            })?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<Event>, shutdown: &AtomicBool, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let event = match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(raw) => Self::convert_event(raw),
                    Err(e) => Some(Event::Error(format!("keyboard read failed: {e}"))),
                },
                // No event, loop again to check shutdown
                Ok(false) => None,
                Err(e) => {
                    // Polling errors repeat forever once the TTY is gone.
                    let _ = deliver(
                        sender,
                        Event::Error(format!("keyboard poll failed: {e}")),
                        shutdown,
                    );
                    break;
                }
            };

            if let Some(event) = event {
                if !deliver(sender, event, shutdown) {
                    break;
                }
            }
        }
    }

    /// Convert a crossterm event to our Event.
    fn convert_event(event: event::Event) -> Option<Event> {
        match event {
            event::Event::Key(key_event) => {
                // Only process key press events (not release or repeat)
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }

                let code = Self::convert_key_code(key_event.code)?;
                let modifiers = Self::convert_modifiers(key_event.modifiers);
                Some(Event::Key { code, modifiers })
            }
            event::Event::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }

    /// Convert crossterm KeyCode to our KeyCode.
    fn convert_key_code(code: event::KeyCode) -> Option<KeyCode> {
        Some(match code {
            event::KeyCode::Char(c) => KeyCode::Char(c),
            event::KeyCode::Enter => KeyCode::Enter,
            event::KeyCode::Up => KeyCode::Up,
            event::KeyCode::Down => KeyCode::Down,
            event::KeyCode::Left => KeyCode::Left,
            event::KeyCode::Right => KeyCode::Right,
            event::KeyCode::Home => KeyCode::Home,
            event::KeyCode::End => KeyCode::End,
            event::KeyCode::PageUp => KeyCode::PageUp,
            event::KeyCode::PageDown => KeyCode::PageDown,
            event::KeyCode::Esc => KeyCode::Esc,
            _ => return None,
        })
    }

    /// Convert crossterm KeyModifiers to our KeyModifiers.
    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        let mut out = KeyModifiers::empty();
        out.set(KeyModifiers::SHIFT, mods.contains(event::KeyModifiers::SHIFT));
        out.set(KeyModifiers::CONTROL, mods.contains(event::KeyModifiers::CONTROL));
        out.set(KeyModifiers::ALT, mods.contains(event::KeyModifiers::ALT));
        out.set(KeyModifiers::SUPER, mods.contains(event::KeyModifiers::SUPER));
        out
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: event::KeyCode, mods: event::KeyModifiers, kind: KeyEventKind) -> event::Event {
        event::Event::Key(KeyEvent::new_with_kind(code, mods, kind))
    }

    #[test]
    fn test_convert_press() {
        let converted = InputActor::convert_event(key(
            event::KeyCode::Char('c'),
            event::KeyModifiers::CONTROL,
            KeyEventKind::Press,
        ));
        assert_eq!(
            converted,
            Some(Event::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            })
        );
    }

    #[test]
    fn test_ignore_release_and_unbound_codes() {
        let release = key(
            event::KeyCode::Char('q'),
            event::KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(InputActor::convert_event(release), None);

        let f1 = key(event::KeyCode::F(1), event::KeyModifiers::NONE, KeyEventKind::Press);
        assert_eq!(InputActor::convert_event(f1), None);
    }

    #[test]
    fn test_convert_resize() {
        assert_eq!(
            InputActor::convert_event(event::Event::Resize(120, 40)),
            Some(Event::Resize {
                width: 120,
                height: 40
            })
        );
    }
}
