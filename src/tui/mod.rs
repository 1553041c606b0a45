// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Domlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Domlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Hosts the mirror panel (ratatui + crossterm): the page is drawn as nested element boxes in a
//! scrollable viewport, and a draggable floating panel lists the mirror entries. Activating an
//! entry goes through the same `MirrorTree::activate` path as any other host would use.

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Widget, Wrap},
    Frame, Terminal,
};
use tracing::{debug, info};

use crate::config::Config;
use crate::layout::layout_document;
use crate::mirror::{build, MirrorEntry, MirrorTree};
use crate::model::{BoundingRect, Document, Element, NodeId, Size};
use crate::page::{DocumentPage, ScrollAnimator, HIGHLIGHT_CLASS};
use crate::selection::{SelectOutcome, Selection};
use crate::ui::PanelState;

mod theme;

use theme::TuiTheme;

const IDLE_POLL: Duration = Duration::from_millis(250);
const ANIMATION_POLL: Duration = Duration::from_millis(16);
const WHEEL_STEP: f64 = 3.0;

/// Runs the interactive terminal UI against `document`.
pub fn run(document: Document, config: &Config) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_palette(config.palette.as_deref())?;
    let mut app = App::new(document, config.scroll_frames, theme);
    let mut terminal = TerminalSession::new()?;
    info!(entries = app.mirror.len(), "tui started");

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        let timeout = if app.page.is_scrolling() {
            ANIMATION_POLL
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        } else {
            app.page.tick();
        }
    }

    info!("tui stopped");
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let page_area = layout[0];
    let status_area = layout[1];

    app.ensure_laid_out(page_area);
    app.page.set_viewport(Some(Size::new(
        f64::from(page_area.width),
        f64::from(page_area.height),
    )));

    frame.render_widget(
        PageView {
            page: &app.page,
            theme: &app.theme,
        },
        page_area,
    );

    app.panel_layout = panel_layout(page_area, &app.panel, app.mirror.len());
    if let Some(panel_layout) = app.panel_layout {
        draw_panel(frame, app, panel_layout);
    }

    let footer = footer_line(&app.theme, &app.panel, app.status.as_deref());
    frame.render_widget(Paragraph::new(footer).style(app.theme.base_style()), status_area);
}

fn draw_panel(frame: &mut Frame<'_>, app: &mut App, panel_layout: PanelLayout) {
    frame.render_widget(Clear, panel_layout.outer);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .style(app.theme.panel_style()),
        panel_layout.outer,
    );
    frame.render_widget(
        Paragraph::new(panel_header_line(&app.theme, panel_layout.header.width)),
        panel_layout.header,
    );

    if let Some(tooltip) = panel_layout.tooltip {
        frame.render_widget(
            Paragraph::new(PANEL_TOOLTIP)
                .style(app.theme.tooltip_style())
                .wrap(Wrap { trim: true }),
            tooltip,
        );
    }

    if let Some(list_area) = panel_layout.list {
        let cursor = app.list_state.selected();
        let marked = app.mirror.selected(&app.selection);
        let items = app
            .mirror
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let style = if cursor == Some(idx) {
                    app.theme.cursor_style()
                } else if marked == Some(entry.id()) {
                    app.theme.selected_entry_style()
                } else {
                    app.theme.panel_style()
                };
                ListItem::new(Line::from(entry_row_text(entry))).style(style)
            })
            .collect::<Vec<_>>();
        let list = List::new(items).style(app.theme.panel_style());
        frame.render_stateful_widget(list, list_area, &mut app.list_state);
    }
}

/// Draws the laid-out document through the page's current scroll offset.
struct PageView<'a> {
    page: &'a DocumentPage,
    theme: &'a TuiTheme,
}

impl Widget for PageView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base_style());
        let document = self.page.document();
        let scroll = self.page.scroll();

        let plain = BoxStyle {
            border: self.theme.element_border_style(),
            label: self.theme.element_label_style(),
            fill: None,
        };
        let highlighted = BoxStyle {
            border: self.theme.highlight_border_style(),
            label: self.theme.highlight_border_style(),
            fill: Some(self.theme.highlight_fill_style()),
        };

        // Pre-order, so descendants paint over their ancestors.
        for node in document.descendants() {
            let (Some(element), Some(rect)) = (document.get(node), document.rect(node)) else {
                continue;
            };
            let style = if element.has_class(HIGHLIGHT_CLASS) {
                &highlighted
            } else {
                &plain
            };
            draw_element_box(
                buf,
                area,
                rect.to_bounding(scroll),
                &page_box_label(element),
                element.text(),
                style,
            );
        }
    }
}

struct App {
    page: DocumentPage,
    mirror: MirrorTree,
    selection: Selection,
    panel: PanelState,
    panel_layout: Option<PanelLayout>,
    list_state: ListState,
    theme: TuiTheme,
    laid_out: bool,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    fn new(document: Document, scroll_frames: u16, theme: TuiTheme) -> Self {
        let mirror = build(&document, document.root());
        let mut list_state = ListState::default();
        if !mirror.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            page: DocumentPage::with_animator(document, ScrollAnimator::new(scroll_frames)),
            mirror,
            selection: Selection::new(),
            panel: PanelState::default(),
            panel_layout: None,
            list_state,
            theme,
            laid_out: false,
            status: None,
            should_quit: false,
        }
    }

    fn ensure_laid_out(&mut self, page_area: Rect) {
        if self.laid_out {
            return;
        }
        let width = f64::from(page_area.width);
        let placed = layout_document(self.page.document_mut(), width);
        if self.page.document().client_size() == Size::default() {
            self.page
                .document_mut()
                .set_client_size(Size::new(width, f64::from(page_area.height)));
        }
        debug!(placed, width, "initial layout");
        self.laid_out = true;
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.status = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1),
            KeyCode::Char('g') | KeyCode::Home => self.move_cursor_to(0),
            KeyCode::Char('G') | KeyCode::End => {
                self.move_cursor_to(self.mirror.len().saturating_sub(1))
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_cursor(),
            KeyCode::Char('_') => self.panel.toggle_list(),
            KeyCode::Char('x') => self.panel.close(),
            KeyCode::Char('o') => self.panel.reopen(),
            KeyCode::Char('H') => self.panel.nudge(-2, 0),
            KeyCode::Char('L') => self.panel.nudge(2, 0),
            KeyCode::Char('K') => self.panel.nudge(0, -1),
            KeyCode::Char('J') => self.panel.nudge(0, 1),
            KeyCode::PageDown => self.scroll_page_by_viewport(1.0),
            KeyCode::PageUp => self.scroll_page_by_viewport(-1.0),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(x, y),
            MouseEventKind::Drag(MouseButton::Left) => {
                self.panel.drag_to(x, y);
            }
            MouseEventKind::Up(MouseButton::Left) => self.panel.end_drag(),
            MouseEventKind::ScrollDown => self.wheel(x, y, 1),
            MouseEventKind::ScrollUp => self.wheel(x, y, -1),
            _ => {}
        }
    }

    fn click(&mut self, x: u16, y: u16) {
        let Some(layout) = self.panel_layout else {
            return;
        };
        if rect_contains(layout.close, x, y) {
            self.panel.close();
        } else if rect_contains(layout.toggle, x, y) {
            self.panel.toggle_list();
        } else if rect_contains(layout.header, x, y) {
            self.panel.begin_drag(x, y);
        } else if let Some(list) = layout.list.filter(|list| rect_contains(*list, x, y)) {
            let row = usize::from(y - list.y) + self.list_state.offset();
            if row < self.mirror.len() {
                self.list_state.select(Some(row));
                self.activate_cursor();
            }
        }
    }

    fn wheel(&mut self, x: u16, y: u16, direction: i32) {
        let over_list = self
            .panel_layout
            .and_then(|layout| layout.list)
            .is_some_and(|list| rect_contains(list, x, y));
        if over_list {
            self.move_cursor(direction);
        } else {
            self.page.scroll_by(0.0, WHEEL_STEP * f64::from(direction));
        }
    }

    fn move_cursor(&mut self, delta: i32) {
        let Some(current) = self.list_state.selected() else {
            return;
        };
        let next = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            current.saturating_add(delta as usize)
        };
        self.move_cursor_to(next);
    }

    fn move_cursor_to(&mut self, idx: usize) {
        if self.mirror.is_empty() {
            return;
        }
        self.list_state.select(Some(idx.min(self.mirror.len() - 1)));
    }

    fn activate_cursor(&mut self) {
        let Some(entry) = self
            .list_state
            .selected()
            .and_then(|idx| self.mirror.entries().get(idx))
            .map(MirrorEntry::id)
        else {
            return;
        };
        let outcome = self.mirror.activate(entry, &mut self.selection, &mut self.page);
        let label = self
            .mirror
            .entry(entry)
            .map(|entry| entry.label().to_owned())
            .unwrap_or_default();
        self.status = match outcome {
            Some(SelectOutcome::Highlighted { scrolled: true }) => {
                Some(format!("{label} (scrolling into view)"))
            }
            Some(SelectOutcome::Highlighted { scrolled: false }) => Some(label),
            Some(SelectOutcome::Unchanged) => None,
            Some(SelectOutcome::Detached) => {
                Some(format!("{label} is no longer part of the page"))
            }
            None => None,
        };
    }

    fn scroll_page_by_viewport(&mut self, pages: f64) {
        let height = self.page.visible_size().height;
        self.page.scroll_by(0.0, (height - 1.0).max(1.0) * pages);
    }
}

include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
}

/// A small landing page: header with navigation, an inline SVG icon, a column of article cards
/// tall enough to need scrolling, and a footer. Scripts and SVG paths are present so the mirror's
/// exclusions are visible.
pub fn demo_document() -> Document {
    let mut doc = Document::new(Element::new("BODY").with_class("landing"));
    let body = doc.root();

    let header = add(&mut doc, body, Element::new("HEADER").with_class("site-header"));
    add(&mut doc, header, Element::new("H1").with_class("title").with_text("Duck Pond Weekly"));
    let nav = add(&mut doc, header, Element::new("NAV").with_class("menu"));
    let ul = add(&mut doc, nav, Element::new("UL"));
    for label in ["News", "Ponds", "About"] {
        let li = add(&mut doc, ul, Element::new("LI"));
        add(&mut doc, li, Element::new("A").with_text(label));
    }
    let logo_script = add(&mut doc, header, Element::new("SCRIPT"));
    add(&mut doc, logo_script, Element::new("SPAN").with_text("never mirrored"));

    let main = add(&mut doc, body, Element::new("MAIN"));
    let hero = add(&mut doc, main, Element::new("SECTION").with_class("hero"));
    add(&mut doc, hero, Element::new("P").with_text("Everything about ducks, every week."));
    let svg = add(&mut doc, hero, Element::new("svg").with_class("icon"));
    add(&mut doc, svg, Element::new("path"));
    add(&mut doc, svg, Element::new("circle").with_text("o"));

    let articles = [
        ("Mallards", "The most common duck you will meet."),
        ("Mandarins", "Colourful, shy, and fond of trees."),
        ("Eiders", "Sea ducks with famously warm down."),
        ("Teals", "Small, fast, and always in a hurry."),
        ("Pintails", "Elegant long tails, elegant long trips."),
        ("Wigeons", "Whistling grazers of wet meadows."),
    ];
    for (title, blurb) in articles {
        let article = add(&mut doc, main, Element::new("ARTICLE").with_class("card"));
        add(&mut doc, article, Element::new("H2").with_text(title));
        add(&mut doc, article, Element::new("P").with_text(blurb));
    }

    let footer = add(&mut doc, body, Element::new("FOOTER").with_class("site-footer"));
    add(&mut doc, footer, Element::new("P").with_text("Made with bread crumbs."));
    add(&mut doc, body, Element::new("script"));

    doc
}

/// Appends below a parent that is known to exist. Falls back to the parent id otherwise, so a
/// broken demo degrades to a flatter tree instead of aborting.
fn add(doc: &mut Document, parent: NodeId, element: Element) -> NodeId {
    doc.append_child(parent, element).unwrap_or(parent)
}
