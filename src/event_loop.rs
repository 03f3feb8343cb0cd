use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Single-threaded loop that owns the input driver.
///
/// Each iteration runs one frame tick (`handler(None)`), then waits up to
/// the poll interval for input and drains every queued event
/// (`handler(Some(event))`) before the next tick. All window state is
/// mutated from inside the handler, so nothing needs locking.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Runs until the handler returns [`ControlFlow::Quit`].
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if handler(&mut self.driver, None)? == ControlFlow::Quit {
                return Ok(());
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain bursts (mouse drags) so the frame tick never falls
                // behind the input stream.
                loop {
                    let event = self.driver.read()?;
                    if handler(&mut self.driver, Some(event))? == ControlFlow::Quit {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::ZERO)? {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::headless::ScriptedInputDriver;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn burst_is_drained_between_ticks() {
        let driver = ScriptedInputDriver::new([key('a'), key('b'), key('c')]);
        let mut event_loop = EventLoop::new(driver, Duration::ZERO);
        let mut log = Vec::new();
        event_loop
            .run(|_, event| {
                match event {
                    Some(Event::Key(k)) => log.push(format!("{:?}", k.code)),
                    Some(_) => {}
                    None => {
                        log.push("tick".to_string());
                        if log.len() > 1 {
                            return Ok(ControlFlow::Quit);
                        }
                    }
                }
                Ok(ControlFlow::Continue)
            })
            .unwrap();
        assert_eq!(log, vec!["tick", "Char('a')", "Char('b')", "Char('c')", "tick"]);
    }

    #[test]
    fn quit_from_event_stops_immediately() {
        let driver = ScriptedInputDriver::new([key('q'), key('x')]);
        let mut event_loop = EventLoop::new(driver, Duration::ZERO);
        event_loop
            .run(|_, event| {
                Ok(match event {
                    Some(_) => ControlFlow::Quit,
                    None => ControlFlow::Continue,
                })
            })
            .unwrap();
        assert!(!event_loop.driver().is_drained());
    }
}
