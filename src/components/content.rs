//! Bodies of application windows.
//!
//! Most applications only announce themselves; the help window shows the
//! embedded help text and the settings window edits the preferences.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use indoc::formatdoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{Component, ComponentContext};
use crate::prefs::Preferences;
use crate::ui::UiFrame;

include!(concat!(env!("OUT_DIR"), "/generated_help.rs"));

/// Request from window content to the desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAction {
    ToggleTheme,
    CycleBackground,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    Help,
    Settings(Preferences),
    Notice(&'static [&'static str]),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct WindowContent {
    body: Body,
    scroll: u16,
    pending: Option<ContentAction>,
}

const WELCOME: &[&str] = &[
    "SYSTEM OVERVIEW",
    "",
    "What's inside:",
    "  AI OS ASSISTANT: ask about projects and experience",
    "  AI DEMOS: product insight analyzer",
    "  RETRO GAMES: snack game",
    "  MUSIC PLAYER: retro jams",
    "  PAINT: doodle away",
    "  INTERNET: browse the archive",
    "  GUESTBOOK: leave a note",
    "",
    "Double-click an icon to begin. Press F1 for help.",
];

const ASSISTANT: &[&str] = &[
    "ANURAG OS ASSISTANT",
    "",
    "The assistant needs a network connection and is not",
    "available on this desktop.",
];

const DEMO: &[&str] = &[
    "AI PRODUCT INSIGHT ANALYZER",
    "",
    "The analyzer runs online only and is not available on",
    "this desktop.",
];

impl WindowContent {
    /// Content for window `id`, created the first time the window is drawn.
    pub fn for_window(id: &str, title: &str) -> Self {
        let body = match id {
            "help" => Body::Help,
            "settings" => Body::Settings(Preferences::default()),
            "welcome" => Body::Notice(WELCOME),
            "assistant" => Body::Notice(ASSISTANT),
            "demo" => Body::Notice(DEMO),
            _ => Body::Text(formatdoc! {"
                {title}

                This application opens here.
            ", title = title}),
        };
        Self {
            body,
            scroll: 0,
            pending: None,
        }
    }

    /// Keep the settings panel in step with the desktop's preferences.
    pub fn sync_preferences(&mut self, prefs: Preferences) {
        if let Body::Settings(current) = &mut self.body {
            *current = prefs;
        }
    }

    /// Action requested by the last handled event, if any.
    pub fn take_action(&mut self) -> Option<ContentAction> {
        self.pending.take()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    fn lines(&self, ctx: &ComponentContext) -> Vec<Line<'static>> {
        match &self.body {
            Body::Help => EMBEDDED_HELP
                .lines()
                .map(|line| {
                    if let Some(heading) = line.strip_prefix("# ").or(line.strip_prefix("## ")) {
                        Line::from(Span::styled(
                            heading.to_string(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ))
                    } else {
                        Line::from(line.to_string())
                    }
                })
                .collect(),
            Body::Settings(prefs) => {
                let highlight = Style::default()
                    .fg(ctx.palette().menu_selected_fg)
                    .bg(ctx.palette().menu_selected_bg);
                vec![
                    Line::from(Span::styled(
                        "PREFERENCES",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(vec![
                        Span::raw("Theme:      "),
                        Span::styled(prefs.theme.as_str().to_uppercase(), highlight),
                    ]),
                    Line::from(vec![
                        Span::raw("Background: "),
                        Span::styled(prefs.background.as_str().to_uppercase(), highlight),
                    ]),
                    Line::from(""),
                    Line::from("t  switch light / dark"),
                    Line::from("b  next background"),
                ]
            }
            Body::Notice(lines) => lines.iter().map(|l| Line::from(*l)).collect(),
            Body::Text(text) => text.lines().map(|l| Line::from(l.to_string())).collect(),
        }
    }
}

impl Component for WindowContent {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let lines = self.lines(ctx);
        let max_scroll = u16::try_from(lines.len())
            .unwrap_or(u16::MAX)
            .saturating_sub(area.height);
        self.scroll = self.scroll.min(max_scroll);
        let paragraph = Paragraph::new(lines)
            .style(ctx.palette().window())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event
        else {
            return false;
        };
        if !(modifiers.is_empty() || *modifiers == KeyModifiers::SHIFT) {
            return false;
        }
        match (&self.body, code) {
            (Body::Settings(_), KeyCode::Char('t' | 'T')) => {
                self.pending = Some(ContentAction::ToggleTheme);
                true
            }
            (Body::Settings(_), KeyCode::Char('b' | 'B')) => {
                self.pending = Some(ContentAction::CycleBackground);
                true
            }
            (_, KeyCode::Down) => {
                self.scroll = self.scroll.saturating_add(1);
                true
            }
            (_, KeyCode::Up) => {
                self.scroll = self.scroll.saturating_sub(1);
                true
            }
            (_, KeyCode::PageDown) => {
                self.scroll = self.scroll.saturating_add(10);
                true
            }
            (_, KeyCode::PageUp) => {
                self.scroll = self.scroll.saturating_sub(10);
                true
            }
            (_, KeyCode::Home) => {
                self.scroll = 0;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::headless::buffer_row;
    use crate::prefs::{Background, Theme};
    use ratatui::buffer::Buffer;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn render(content: &mut WindowContent, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let mut ui = UiFrame::from_parts(area, &mut buf);
        content.render(&mut ui, area, &ComponentContext::default());
        buf
    }

    #[test]
    fn help_shows_embedded_text() {
        let mut help = WindowContent::for_window("help", "HELP");
        let buf = render(&mut help, 40, 4);
        assert!(buffer_row(&buf, 0).starts_with("RETRO DESK HELP"));
    }

    #[test]
    fn settings_keys_request_actions() {
        let mut settings = WindowContent::for_window("settings", "SETTINGS");
        let ctx = ComponentContext::default();
        assert!(settings.handle_event(&key(KeyCode::Char('t')), &ctx));
        assert_eq!(settings.take_action(), Some(ContentAction::ToggleTheme));
        assert_eq!(settings.take_action(), None);
        assert!(settings.handle_event(&key(KeyCode::Char('b')), &ctx));
        assert_eq!(settings.take_action(), Some(ContentAction::CycleBackground));
    }

    #[test]
    fn settings_render_synced_preferences() {
        let mut settings = WindowContent::for_window("settings", "SETTINGS");
        settings.sync_preferences(Preferences {
            theme: Theme::Dark,
            background: Background::Forest,
        });
        let buf = render(&mut settings, 40, 6);
        assert!(buffer_row(&buf, 2).contains("DARK"));
        assert!(buffer_row(&buf, 3).contains("FOREST"));
    }

    #[test]
    fn other_windows_ignore_settings_keys() {
        let mut about = WindowContent::for_window("about", "ABOUT");
        assert!(!about.handle_event(&key(KeyCode::Char('t')), &ComponentContext::default()));
        assert_eq!(about.take_action(), None);
    }

    #[test]
    fn scroll_is_clamped_on_render() {
        let mut help = WindowContent::for_window("help", "HELP");
        let ctx = ComponentContext::default();
        for _ in 0..200 {
            help.handle_event(&key(KeyCode::Down), &ctx);
        }
        let lines = EMBEDDED_HELP.lines().count() as u16;
        render(&mut help, 80, 5);
        assert_eq!(help.scroll(), lines - 5);
    }

    #[test]
    fn assistant_shows_offline_notice() {
        let mut assistant = WindowContent::for_window("assistant", "ASSISTANT");
        let buf = render(&mut assistant, 60, 4);
        assert!(buffer_row(&buf, 2).contains("not"));
    }
}
