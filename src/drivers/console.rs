use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Size;

use super::{InputDriver, KeyboardNormalizer, OutputDriver};
use crate::ui::UiFrame;

/// Reads the real terminal. Everything already buffered by the terminal is
/// pulled in with each read so that bursts of resize events collapse into
/// the last one.
#[derive(Debug, Default)]
pub struct ConsoleInputDriver {
    normalizer: KeyboardNormalizer,
    event_queue: VecDeque<Event>,
}

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self::default()
    }

    fn fill_queue(&mut self) -> io::Result<()> {
        let evt = crossterm::event::read()?;
        self.push(evt);
        while crossterm::event::poll(Duration::ZERO)? {
            let evt = crossterm::event::read()?;
            self.push(evt);
        }
        coalesce_resizes(&mut self.event_queue);
        Ok(())
    }

    fn push(&mut self, evt: Event) {
        if let Some(normalized) = self.normalizer.normalize(evt) {
            self.event_queue.push_back(normalized);
        }
    }
}

/// Collapse each run of consecutive resize events into its last entry.
fn coalesce_resizes(queue: &mut VecDeque<Event>) {
    let mut out = VecDeque::with_capacity(queue.len());
    for evt in queue.drain(..) {
        if matches!(evt, Event::Resize(..)) && matches!(out.back(), Some(Event::Resize(..))) {
            out.pop_back();
        }
        out.push_back(evt);
    }
    *queue = out;
}

impl InputDriver for ConsoleInputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        if !self.event_queue.is_empty() {
            return Ok(true);
        }
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        loop {
            if let Some(evt) = self.event_queue.pop_front() {
                return Ok(evt);
            }
            self.fill_queue()?;
        }
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            execute!(io::stdout(), EnableMouseCapture)
        } else {
            execute!(io::stdout(), DisableMouseCapture)
        }
    }
}

/// Asked of terminals that speak the kitty keyboard protocol. Without it
/// Ctrl+M is indistinguishable from Enter and Super is never reported.
pub const KEYBOARD_FLAGS: KeyboardEnhancementFlags =
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES;

pub struct ConsoleOutputDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    entered: bool,
    keyboard_enhanced: bool,
}

impl ConsoleOutputDriver {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            entered: false,
            keyboard_enhanced: false,
        })
    }
}

impl OutputDriver for ConsoleOutputDriver {
    type Backend = CrosstermBackend<Stdout>;

    fn enter(&mut self) -> io::Result<()> {
        if self.entered {
            return Ok(());
        }
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        match terminal::supports_keyboard_enhancement() {
            Ok(true) => {
                execute!(
                    self.terminal.backend_mut(),
                    PushKeyboardEnhancementFlags(KEYBOARD_FLAGS)
                )?;
                self.keyboard_enhanced = true;
            }
            Ok(false) => tracing::debug!("terminal has no keyboard enhancement"),
            Err(err) => tracing::debug!(error = %err, "keyboard enhancement query failed"),
        }
        self.terminal.hide_cursor()?;
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        if self.keyboard_enhanced {
            execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
            self.keyboard_enhanced = false;
        }
        terminal::disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.terminal.show_cursor()?;
        self.entered = false;
        Ok(())
    }

    fn size(&self) -> io::Result<Size> {
        self.terminal.size()
    }

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>),
    {
        self.terminal
            .draw(move |frame| {
                let wrapper = UiFrame::new(frame);
                f(wrapper);
            })
            .map(|_| ())
            .map_err(|err| io::Error::other(err.to_string()))
    }
}

impl Drop for ConsoleOutputDriver {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn resize_bursts_keep_only_the_last_size() {
        let mut queue: VecDeque<Event> = [
            Event::Resize(80, 24),
            Event::Resize(90, 30),
            Event::Resize(100, 40),
            key('a'),
            Event::Resize(120, 50),
        ]
        .into_iter()
        .collect();
        coalesce_resizes(&mut queue);
        let events: Vec<Event> = queue.into_iter().collect();
        assert_eq!(
            events,
            vec![Event::Resize(100, 40), key('a'), Event::Resize(120, 50)]
        );
    }

    #[test]
    fn keyboard_flags_disambiguate_without_release_events() {
        assert!(KEYBOARD_FLAGS.contains(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES));
        assert!(!KEYBOARD_FLAGS.contains(KeyboardEnhancementFlags::REPORT_EVENT_TYPES));
    }

    #[test]
    fn queued_events_are_read_before_the_terminal() {
        let mut d = ConsoleInputDriver::new();
        d.push(key('z'));
        d.push(key('y'));
        assert!(d.poll(Duration::ZERO).unwrap());
        assert_eq!(d.read().unwrap(), key('z'));
        assert_eq!(d.read().unwrap(), key('y'));
    }
}
