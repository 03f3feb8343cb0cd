use ratatui::style::{Color, Modifier, Style};

use crate::prefs::{Background, Theme};

// Centralized theme colors. RGB values go through `rgb` so terminals without
// truecolor still get the nearest xterm-256 entry.

pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    if let Ok(var) = std::env::var("COLORTERM") {
        let lv = var.to_lowercase();
        if lv.contains("truecolor") || lv.contains("24bit") {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Indexed(xterm_cube_index(r, g, b))
}

fn xterm_cube_index(r: u8, g: u8, b: u8) -> u8 {
    // 6x6x6 cube at indices 16..231
    let step = |v: u8| ((u16::from(v) * 5 + 127) / 255) as u8;
    16 + 36 * step(r) + 6 * step(g) + step(b)
}

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub menu_bg: Color,
    pub menu_fg: Color,
    pub menu_selected_bg: Color,
    pub menu_selected_fg: Color,
    pub window_bg: Color,
    pub window_fg: Color,
    pub border: Color,
    pub header_active_bg: Color,
    pub header_inactive_bg: Color,
    pub header_fg: Color,
    pub button_close: Color,
    pub button_minimize: Color,
    pub button_maximize: Color,
    pub dock_bg: Color,
    pub dock_fg: Color,
    pub dock_running: Color,
    pub icon_fg: Color,
    pub icon_selected_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                menu_bg: rgb(240, 236, 228),
                menu_fg: Color::Black,
                menu_selected_bg: rgb(40, 40, 40),
                menu_selected_fg: Color::White,
                window_bg: rgb(250, 248, 242),
                window_fg: Color::Black,
                border: Color::Black,
                header_active_bg: rgb(225, 220, 205),
                header_inactive_bg: rgb(200, 200, 200),
                header_fg: Color::Black,
                button_close: rgb(255, 95, 87),
                button_minimize: rgb(255, 189, 46),
                button_maximize: rgb(40, 200, 64),
                dock_bg: rgb(235, 230, 220),
                dock_fg: Color::Black,
                dock_running: rgb(40, 40, 40),
                icon_fg: Color::Black,
                icon_selected_bg: rgb(180, 200, 255),
            },
            Theme::Dark => Self {
                menu_bg: rgb(30, 30, 34),
                menu_fg: rgb(230, 230, 230),
                menu_selected_bg: rgb(230, 230, 230),
                menu_selected_fg: Color::Black,
                window_bg: rgb(38, 38, 44),
                window_fg: rgb(230, 230, 230),
                border: rgb(120, 120, 130),
                header_active_bg: rgb(60, 60, 72),
                header_inactive_bg: rgb(48, 48, 52),
                header_fg: rgb(235, 235, 235),
                button_close: rgb(255, 95, 87),
                button_minimize: rgb(255, 189, 46),
                button_maximize: rgb(40, 200, 64),
                dock_bg: rgb(24, 24, 28),
                dock_fg: rgb(230, 230, 230),
                dock_running: rgb(230, 230, 230),
                icon_fg: rgb(240, 240, 240),
                icon_selected_bg: rgb(70, 90, 160),
            },
        }
    }

    pub fn menu(&self) -> Style {
        Style::default().bg(self.menu_bg).fg(self.menu_fg)
    }

    pub fn menu_selected(&self) -> Style {
        Style::default()
            .bg(self.menu_selected_bg)
            .fg(self.menu_selected_fg)
    }

    pub fn window(&self) -> Style {
        Style::default().bg(self.window_bg).fg(self.window_fg)
    }

    pub fn header(&self, active: bool) -> Style {
        let bg = if active {
            self.header_active_bg
        } else {
            self.header_inactive_bg
        };
        let style = Style::default().bg(bg).fg(self.header_fg);
        if active {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn border(&self) -> Style {
        Style::default().bg(self.window_bg).fg(self.border)
    }

    pub fn dock(&self) -> Style {
        Style::default().bg(self.dock_bg).fg(self.dock_fg)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

/// Solid fill standing in for each wallpaper.
pub fn background_color(background: Background) -> Color {
    match background {
        Background::WarmNeutral => rgb(222, 208, 186),
        Background::CoolGray => rgb(150, 160, 170),
        Background::Lavender => rgb(190, 170, 220),
        Background::Forest => rgb(40, 90, 60),
        Background::Sunset => rgb(230, 120, 80),
        Background::Clouds => rgb(150, 190, 230),
        Background::Street => rgb(90, 90, 100),
        Background::Beach => rgb(230, 210, 160),
        Background::Meadow => rgb(120, 180, 90),
        Background::Night => rgb(20, 24, 50),
        Background::RetroRoom => rgb(160, 110, 80),
        Background::PixelSky => rgb(100, 150, 240),
        Background::Vaporwave => rgb(220, 110, 200),
        Background::CrtNoise => rgb(60, 70, 60),
        Background::Minimal => rgb(235, 235, 235),
    }
}
