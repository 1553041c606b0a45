// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Panel geometry, row/label formatting, footer and page-box drawing helpers used by TUI
/// rendering.
const PANEL_TITLE: &str = "DOM Tree Widget";
const PANEL_TOOLTIP: &str =
    "Click on a node to highlight and scroll it on the page. If nothing happened, the element is hidden somewhere:";
const PANEL_MAX_WIDTH: u16 = 64;
const PANEL_MIN_WIDTH: u16 = 24;
const PANEL_MAX_LIST_ROWS: u16 = 16;
const PANEL_TOOLTIP_ROWS: u16 = 3;
const ENTRY_MARKER: &str = "🦆 ";
const ENTRY_INDENT: &str = "  ";
const TOGGLE_SYMBOL: &str = "_";
const CLOSE_SYMBOL: &str = "x";

/// Screen areas of the floating panel, kept from the last draw for mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct PanelLayout {
    outer: Rect,
    header: Rect,
    toggle: Rect,
    close: Rect,
    tooltip: Option<Rect>,
    list: Option<Rect>,
}

fn panel_layout(area: Rect, panel: &PanelState, entry_count: usize) -> Option<PanelLayout> {
    if !panel.is_open() || area.width < PANEL_MIN_WIDTH || area.height < 3 {
        return None;
    }

    let width = PANEL_MAX_WIDTH.min(area.width);
    let list_rows = if panel.list_visible() {
        u16::try_from(entry_count).unwrap_or(u16::MAX).clamp(1, PANEL_MAX_LIST_ROWS)
    } else {
        0
    };
    let tooltip_rows = if panel.list_visible() { PANEL_TOOLTIP_ROWS } else { 0 };
    let height = (2 + 1 + tooltip_rows + list_rows).min(area.height);

    let left = panel.left().min(area.width - width);
    let top = panel.top().min(area.height - height);
    let outer = Rect::new(area.x + left, area.y + top, width, height);
    let inner = Rect::new(
        outer.x + 1,
        outer.y + 1,
        outer.width.saturating_sub(2),
        outer.height.saturating_sub(2),
    );

    let header = Rect::new(inner.x, inner.y, inner.width, 1.min(inner.height));
    let close = Rect::new(inner.right().saturating_sub(1), inner.y, 1, header.height);
    let toggle = Rect::new(inner.right().saturating_sub(3), inner.y, 1, header.height);

    let body_height = inner.height.saturating_sub(1);
    let (tooltip, list) = if panel.list_visible() && body_height > 0 {
        let tooltip_height = tooltip_rows.min(body_height);
        let tooltip = Rect::new(inner.x, inner.y + 1, inner.width, tooltip_height);
        let list_height = body_height - tooltip_height;
        let list = (list_height > 0).then(|| {
            Rect::new(inner.x, tooltip.bottom(), inner.width, list_height)
        });
        (Some(tooltip), list)
    } else {
        (None, None)
    };

    Some(PanelLayout {
        outer,
        header,
        toggle,
        close,
        tooltip,
        list,
    })
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

fn entry_row_text(entry: &MirrorEntry) -> String {
    format!("{}{ENTRY_MARKER}{}", ENTRY_INDENT.repeat(entry.depth()), entry.label())
}

fn panel_header_line(theme: &TuiTheme, width: u16) -> Line<'static> {
    let controls = format!("{TOGGLE_SYMBOL} {CLOSE_SYMBOL}");
    let title_width = usize::from(width).saturating_sub(controls.chars().count() + 1);
    let title = truncate_with_ellipsis(PANEL_TITLE, title_width);
    let gap = usize::from(width)
        .saturating_sub(title.chars().count() + controls.chars().count());
    Line::from(vec![
        Span::styled(title, theme.panel_title_style()),
        Span::styled(" ".repeat(gap), theme.panel_style()),
        Span::styled(controls, theme.panel_title_style()),
    ])
}

/// Compact label for a box on the page: `DIV.card` (the highlight class is not shown).
fn page_box_label(element: &Element) -> String {
    match element.classes().iter().find(|class| class.as_str() != HIGHLIGHT_CLASS) {
        Some(class) => format!("{}.{class}", element.tag()),
        None => element.tag().to_owned(),
    }
}

fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text.chars().count() <= max_len {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

fn footer_line(theme: &TuiTheme, panel: &PanelState, status: Option<&str>) -> Line<'static> {
    if let Some(status) = status {
        return Line::from(Span::styled(status.to_owned(), theme.status_style()));
    }

    let mut hints: Vec<(&str, &str)> = vec![("j/k", "move"), ("⏎", "select")];
    if panel.is_open() {
        hints.push(("_", "list"));
        hints.push(("x", "close"));
        hints.push(("HJKL", "move panel"));
    } else {
        hints.push(("o", "open panel"));
    }
    hints.push(("PgUp/PgDn", "scroll"));
    hints.push(("q", "quit"));

    let mut spans = Vec::new();
    for (idx, (key, label)) in hints.into_iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ", theme.status_style()));
        }
        spans.push(Span::styled(key.to_owned(), theme.key_style()));
        spans.push(Span::styled(format!(" {label}"), theme.status_style()));
    }
    Line::from(spans)
}

/// Converts a viewport-relative box to screen cells inside `area`: `(x0, y0, x1, y1)`, end
/// exclusive, unclipped.
fn screen_box(area: Rect, bounding: BoundingRect) -> (i32, i32, i32, i32) {
    let x0 = i32::from(area.x) + bounding.left.round() as i32;
    let y0 = i32::from(area.y) + bounding.top.round() as i32;
    let x1 = i32::from(area.x) + bounding.right.round() as i32;
    let y1 = i32::from(area.y) + bounding.bottom.round() as i32;
    (x0, y0, x1, y1)
}

fn put_symbol(buf: &mut Buffer, clip: Rect, x: i32, y: i32, symbol: &str, style: Style) {
    let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
        return;
    };
    if !rect_contains(clip, x, y) {
        return;
    }
    buf.get_mut(x, y).set_symbol(symbol).set_style(style);
}

fn put_text(buf: &mut Buffer, clip: Rect, x: i32, y: i32, text: &str, max_len: usize, style: Style) {
    let text = truncate_with_ellipsis(text, max_len);
    for (offset, ch) in text.chars().enumerate() {
        let mut tmp = [0u8; 4];
        put_symbol(buf, clip, x + offset as i32, y, ch.encode_utf8(&mut tmp), style);
    }
}

struct BoxStyle {
    border: Style,
    label: Style,
    fill: Option<Style>,
}

fn draw_element_box(
    buf: &mut Buffer,
    clip: Rect,
    bounding: BoundingRect,
    label: &str,
    text: Option<&str>,
    style: &BoxStyle,
) {
    let (x0, y0, x1, y1) = screen_box(clip, bounding);
    if x1 <= x0 || y1 <= y0 {
        return;
    }

    if let Some(fill) = style.fill {
        for y in y0..y1 {
            for x in x0..x1 {
                put_symbol(buf, clip, x, y, " ", fill);
            }
        }
    }

    let (right, bottom) = (x1 - 1, y1 - 1);
    for x in x0..=right {
        let top_symbol = match x {
            _ if x == x0 && right > x0 => "┌",
            _ if x == right && right > x0 => "┐",
            _ => "─",
        };
        put_symbol(buf, clip, x, y0, top_symbol, style.border);
        if bottom > y0 {
            let bottom_symbol = match x {
                _ if x == x0 && right > x0 => "└",
                _ if x == right && right > x0 => "┘",
                _ => "─",
            };
            put_symbol(buf, clip, x, bottom, bottom_symbol, style.border);
        }
    }
    for y in (y0 + 1)..bottom {
        put_symbol(buf, clip, x0, y, "│", style.border);
        if right > x0 {
            put_symbol(buf, clip, right, y, "│", style.border);
        }
    }

    let room = usize::try_from(x1 - x0 - 4).unwrap_or(0);
    put_text(buf, clip, x0 + 2, y0, label, room, style.label);
    if let Some(text) = text {
        if bottom - y0 >= 2 {
            put_text(buf, clip, x0 + 2, y0 + 1, text, room, style.border);
        }
    }
}
