// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

use crate::config::PALETTE_ENV;

/// Page highlight: yellow fill, red border.
const HIGHLIGHT_FILL: Color = Color::Yellow;
const HIGHLIGHT_BORDER: Color = Color::Red;
/// Selected-marker background of a mirror row (`rgba(76, 172, 255, .62)` over the panel).
const SELECTED_ENTRY_BG: Color = Color::Rgb(76, 172, 255);
/// Panel background (`rgb(242, 249, 255)`).
const PANEL_BG: Color = Color::Rgb(242, 249, 255);
const PANEL_FG: Color = Color::Black;

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_palette(value: Option<&str>) -> Result<Self, ThemeError> {
        let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
            return Ok(Self::default());
        };
        let palette = TuiPalette::parse_csv(value).map_err(|error| ThemeError::InvalidEnv {
            name: PALETTE_ENV,
            value: format!("{value} ({error})"),
        })?;
        Ok(Self {
            palette: Some(palette),
        })
    }

    /// Page background. Without a palette the terminal's own colours show through.
    pub(crate) fn base_style(&self) -> Style {
        self.palette
            .as_ref()
            .map_or_else(Style::default, |palette| Style::default().fg(palette.fg).bg(palette.bg))
    }

    fn slot(&self, slot: Slot) -> Color {
        let colors = self.palette.as_ref().map_or(&ANSI_DEFAULTS, |palette| &palette.ansi);
        colors[slot as usize]
    }

    pub(crate) fn element_border_style(&self) -> Style {
        self.base_style().fg(self.slot(Slot::BrightBlack))
    }

    pub(crate) fn element_label_style(&self) -> Style {
        self.base_style().fg(self.slot(Slot::Cyan))
    }

    pub(crate) fn highlight_fill_style(&self) -> Style {
        let fill = match self.palette {
            Some(_) => self.slot(Slot::Yellow),
            None => HIGHLIGHT_FILL,
        };
        self.base_style().fg(self.slot(Slot::Black)).bg(fill)
    }

    pub(crate) fn highlight_border_style(&self) -> Style {
        let border = match self.palette {
            Some(_) => self.slot(Slot::Red),
            None => HIGHLIGHT_BORDER,
        };
        self.highlight_fill_style().fg(border).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn panel_style(&self) -> Style {
        let (fg, bg) = self
            .palette
            .as_ref()
            .map_or((PANEL_FG, PANEL_BG), |palette| (palette.fg, palette.bg));
        Style::default().fg(fg).bg(bg)
    }

    pub(crate) fn panel_title_style(&self) -> Style {
        self.panel_style().add_modifier(Modifier::BOLD)
    }

    pub(crate) fn tooltip_style(&self) -> Style {
        self.panel_style().add_modifier(Modifier::ITALIC)
    }

    pub(crate) fn selected_entry_style(&self) -> Style {
        let bg = match self.palette {
            Some(_) => self.slot(Slot::BrightBlue),
            None => SELECTED_ENTRY_BG,
        };
        self.panel_style().bg(bg)
    }

    pub(crate) fn cursor_style(&self) -> Style {
        self.panel_style().add_modifier(Modifier::REVERSED)
    }

    pub(crate) fn status_style(&self) -> Style {
        self.base_style().fg(self.slot(Slot::White))
    }

    pub(crate) fn key_style(&self) -> Style {
        self.base_style().fg(self.slot(Slot::Cyan))
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    ansi: [Color; 16],
}

const PALETTE_LEN: usize = 18;

impl TuiPalette {
    /// `fg,bg` followed by the 16 ANSI colours.
    fn parse_csv(value: &str) -> Result<Self, String> {
        let colors = value
            .split(',')
            .map(parse_palette_color)
            .collect::<Result<Vec<_>, _>>()?;
        let [fg, bg, ansi @ ..] = colors.as_slice() else {
            return Err(format!("expected {PALETTE_LEN} colors, got {}", colors.len()));
        };
        let ansi: [Color; 16] = ansi
            .try_into()
            .map_err(|_| format!("expected {PALETTE_LEN} colors, got {}", colors.len()))?;
        Ok(Self {
            fg: *fg,
            bg: *bg,
            ansi,
        })
    }
}

/// Accepts `#RRGGBB`, `0xRRGGBB`, `RRGGBB` and xterm-style `rgb:RR/GG/BB`.
fn parse_palette_color(value: &str) -> Result<Color, String> {
    let color = value.trim();
    let invalid = || format!("unrecognized color {color:?}");
    let channel = |raw: &str| u8::from_str_radix(raw, 16).map_err(|_| invalid());

    if let Some(rest) = color.to_ascii_lowercase().strip_prefix("rgb:") {
        let parts: Vec<&str> = rest.split('/').collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(invalid());
        };
        return Ok(Color::Rgb(channel(r)?, channel(g)?, channel(b)?));
    }

    let hex = color
        .strip_prefix('#')
        .or_else(|| color.strip_prefix("0x"))
        .unwrap_or(color);
    if hex.len() != 6 || !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    Ok(Color::Rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?))
}

/// Terminal colours used when no palette override is set, indexed like the palette's 16 ANSI
/// slots.
const ANSI_DEFAULTS: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightMagenta,
    Color::LightCyan,
    Color::White,
];

/// Palette slots the overlay actually paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Black = 0,
    Red = 1,
    Yellow = 3,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightBlue = 12,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: &'static str, value: String },
}
