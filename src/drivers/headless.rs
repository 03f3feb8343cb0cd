//! Drivers that need no real terminal: a scripted input queue and an
//! in-memory output buffer. Used to run the desktop under test.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::event::Event;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Size;

use super::{InputDriver, KeyboardNormalizer, OutputDriver};
use crate::ui::UiFrame;

/// Replays a fixed list of events, then reports an idle terminal.
#[derive(Debug, Default)]
pub struct ScriptedInputDriver {
    normalizer: KeyboardNormalizer,
    events: VecDeque<Event>,
}

impl ScriptedInputDriver {
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            normalizer: KeyboardNormalizer::new(),
            events: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn is_drained(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputDriver for ScriptedInputDriver {
    fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> io::Result<Event> {
        while let Some(evt) = self.events.pop_front() {
            if let Some(normalized) = self.normalizer.normalize(evt) {
                return Ok(normalized);
            }
        }
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "scripted input exhausted",
        ))
    }
}

pub struct HeadlessOutputDriver {
    terminal: Terminal<TestBackend>,
}

impl HeadlessOutputDriver {
    pub fn new(columns: u16, rows: u16) -> io::Result<Self> {
        let terminal = Terminal::new(TestBackend::new(columns, rows))
            .map_err(|err| io::Error::other(err.to_string()))?;
        Ok(Self { terminal })
    }

    /// Contents of the last drawn frame.
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    pub fn resize(&mut self, columns: u16, rows: u16) {
        self.terminal.backend_mut().resize(columns, rows);
    }
}

impl OutputDriver for HeadlessOutputDriver {
    type Backend = TestBackend;

    fn enter(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn size(&self) -> io::Result<Size> {
        self.terminal
            .size()
            .map_err(|err| io::Error::other(err.to_string()))
    }

    fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(UiFrame<'_>),
    {
        self.terminal
            .draw(move |frame| f(UiFrame::new(frame)))
            .map(|_| ())
            .map_err(|err| io::Error::other(err.to_string()))
    }
}

/// Text of row `y` in `buffer`.
pub fn buffer_row(buffer: &Buffer, y: u16) -> String {
    (buffer.area.x..buffer.area.right())
        .map(|x| buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    #[test]
    fn scripted_input_drops_releases() {
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        let press = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE);
        let mut input = ScriptedInputDriver::new([Event::Key(release), Event::Key(press)]);
        assert!(input.poll(Duration::ZERO).unwrap());
        assert!(matches!(input.read().unwrap(), Event::Key(k) if k.code == KeyCode::Char('b')));
        assert!(!input.poll(Duration::ZERO).unwrap());
        assert!(input.read().is_err());
    }

    #[test]
    fn headless_output_reports_size_and_draws() {
        let mut out = HeadlessOutputDriver::new(12, 3).unwrap();
        assert_eq!(out.size().unwrap(), Size::new(12, 3));
        out.draw(|mut frame| {
            let area = frame.area();
            frame.put_str(area, 0, 1, "hello", ratatui::style::Style::default());
        })
        .unwrap();
        assert_eq!(buffer_row(out.buffer(), 1), "hello       ");
    }
}
