//! # Dressing Page Component
//!
//! Detail view for one dressing: its recipe page, the salads and bowls that
//! use it, and the composite dressings it goes into.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Ranch Dressing (page 177)                    │
//! │                                              │
//! │ Salads                                       │
//! │   Cobb (page 42)                             │
//! │   Southwest (page 44)                        │
//! │     Requires additional dressings            │
//! │     (Chipotle Mayo). See Spicy Ranch, p 178. │
//! │                                              │
//! │ Dressings                                    │
//! │   Spicy Ranch (page 178)                     │
//! └──── ↑↓ Links  Enter Open  Esc Back ──────────┘
//! ```
//!
//! Dressing names on the page are links. The highlighted link is followed
//! with Enter, which the parent turns into `Action::Select`.
//!
//! ## Architecture
//!
//! `DressingPageState` is persistent (link highlight, scroll offset) and is
//! rebuilt whenever a different dressing comes on screen. `DressingPage` is
//! transient, created each frame with the catalog as a prop. Both sides build
//! the page through `DetailView`, so the link list the state navigates is the
//! same one the renderer draws.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::dataset::Dish;
use crate::core::index::{Catalog, UsageEntry};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the dressing page.
pub struct DressingPageState {
    pub name: String,
    links: Vec<String>,
    selected_link: Option<usize>,
    /// Scroll the highlighted link into view on the next render.
    follow_selection: bool,
    pub scroll_state: ScrollViewState,
}

/// Events emitted by the dressing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DressingPageEvent {
    /// Open the linked dressing.
    Follow(String),
    Back,
}

impl DressingPageState {
    pub fn new(catalog: &Catalog, name: &str) -> Self {
        let links = DetailView::build(catalog, name, None).links;
        let selected_link = if links.is_empty() { None } else { Some(0) };
        Self {
            name: name.to_string(),
            links,
            selected_link,
            follow_selection: false,
            scroll_state: ScrollViewState::default(),
        }
    }

    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn selected_link(&self) -> Option<&str> {
        self.selected_link.map(|i| self.links[i].as_str())
    }

    fn step_link(&mut self, forward: bool) {
        let count = self.links.len();
        if count == 0 {
            return;
        }
        self.selected_link = Some(match self.selected_link {
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
            None => 0,
        });
        self.follow_selection = true;
    }
}

impl EventHandler for DressingPageState {
    type Event = DressingPageEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DressingPageEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::CursorLeft => {
                Some(DressingPageEvent::Back)
            }
            TuiEvent::CursorDown | TuiEvent::NextLink => {
                self.step_link(true);
                None
            }
            TuiEvent::CursorUp | TuiEvent::PrevLink => {
                self.step_link(false);
                None
            }
            TuiEvent::Submit => self
                .selected_link()
                .map(|name| DressingPageEvent::Follow(name.to_string())),
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            _ => None,
        }
    }
}

/// The page content as styled lines, plus the links in reading order.
pub struct DetailView {
    pub lines: Vec<Line<'static>>,
    pub links: Vec<String>,
    /// Line index of each link, parallel to `links`.
    pub link_lines: Vec<usize>,
}

impl DetailView {
    pub fn build(catalog: &Catalog, name: &str, selected: Option<usize>) -> Self {
        let mut view = ViewBuilder {
            selected,
            lines: Vec::new(),
            links: Vec::new(),
            link_lines: Vec::new(),
            current: Vec::new(),
        };

        let Some(dressing) = catalog.dressing(name) else {
            view.text(format!("No such dressing: {name}"), Style::default().fg(Color::Red));
            view.end_line();
            return view.finish();
        };

        view.text(dressing.label(), Style::default().add_modifier(Modifier::BOLD));
        view.text(page_suffix(dressing.page), Style::default().fg(Color::DarkGray));
        view.end_line();

        if dressing.is_composite() {
            view.text("Made from ", italic());
            view.link_list(&dressing.components);
            view.end_line();
        }

        let Some(usage) = catalog.usage(name).filter(|u| !u.is_empty()) else {
            view.end_line();
            view.text("Nothing in the book uses this dressing.", italic());
            view.end_line();
            return view.finish();
        };

        if !usage.salads.is_empty() {
            view.heading("Salads");
            for entry in &usage.salads {
                view.dish(catalog, entry);
            }
        }

        if !usage.bowls.is_empty() {
            view.heading("Bowls");
            for entry in &usage.bowls {
                view.dish(catalog, entry);
            }
        }

        if !usage.dressings.is_empty() {
            view.heading("Dressings");
            for composite in &usage.dressings {
                view.text("  ", Style::default());
                view.link(&composite.name);
                view.text(page_suffix(composite.page), Style::default().fg(Color::DarkGray));
                view.end_line();
            }
        }

        view.finish()
    }
}

struct ViewBuilder {
    selected: Option<usize>,
    lines: Vec<Line<'static>>,
    links: Vec<String>,
    link_lines: Vec<usize>,
    current: Vec<Span<'static>>,
}

impl ViewBuilder {
    fn text(&mut self, text: impl Into<String>, style: Style) {
        self.current.push(Span::styled(text.into(), style));
    }

    fn link(&mut self, name: &str) {
        let index = self.links.len();
        let mut style = Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED);
        if self.selected == Some(index) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        self.links.push(name.to_string());
        self.link_lines.push(self.lines.len());
        self.current.push(Span::styled(name.to_string(), style));
    }

    fn link_list(&mut self, names: &[String]) {
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.text(", ", italic());
            }
            self.link(name);
        }
    }

    fn end_line(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn heading(&mut self, title: &str) {
        self.end_line();
        self.text(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED),
        );
        self.end_line();
    }

    fn dish(&mut self, catalog: &Catalog, entry: &UsageEntry<Dish>) {
        self.text(format!("  {}", entry.item.name), Style::default());
        self.text(page_suffix(entry.item.page), Style::default().fg(Color::DarkGray));
        self.end_line();

        let Some(additional) = &entry.additional_dressings else {
            return;
        };
        self.text("    Requires additional dressings", italic());
        if !additional.components.is_empty() {
            self.text(" (", italic());
            self.link_list(&additional.components);
            self.text(")", italic());
        }
        self.text(". See ", italic());
        self.link(&additional.name);
        if let Some(page) = catalog.dressing(&additional.name).and_then(|d| d.page) {
            self.text(format!(", page {page}"), italic());
        }
        self.text(".", italic());
        self.end_line();
    }

    fn finish(mut self) -> DetailView {
        if !self.current.is_empty() {
            self.end_line();
        }
        DetailView {
            lines: self.lines,
            links: self.links,
            link_lines: self.link_lines,
        }
    }
}

fn italic() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

fn page_suffix(page: Option<u32>) -> String {
    page.map(|p| format!(" (page {p})")).unwrap_or_default()
}

/// Transient render wrapper for the dressing page.
pub struct DressingPage<'a> {
    state: &'a mut DressingPageState,
    catalog: &'a Catalog,
}

impl<'a> DressingPage<'a> {
    pub fn new(state: &'a mut DressingPageState, catalog: &'a Catalog) -> Self {
        Self { state, catalog }
    }

    /// Scroll so the highlighted link's line is inside the viewport.
    fn scroll_to_selected(&mut self, view: &DetailView, width: u16, viewport_height: u16) {
        let Some(line) = self.state.selected_link.and_then(|i| view.link_lines.get(i)) else {
            return;
        };
        let top = wrapped_height(&view.lines[..*line], width);
        let bottom = top.saturating_add(wrapped_height(&view.lines[*line..=*line], width));
        let offset_y = self.state.scroll_state.offset().y;

        if top < offset_y {
            self.state.scroll_state.set_offset(Position { x: 0, y: top });
        } else if bottom > offset_y.saturating_add(viewport_height) {
            let new_y = bottom.saturating_sub(viewport_height);
            self.state.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }
}

fn wrapped_height(lines: &[Line<'static>], width: u16) -> u16 {
    if lines.is_empty() {
        return 0;
    }
    let count = Paragraph::new(lines.to_vec())
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(count).unwrap_or(u16::MAX)
}

impl Component for DressingPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let view = DetailView::build(self.catalog, &self.state.name, self.state.selected_link);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(" ↑↓ Links  Enter Open  Esc Back  PgUp/PgDn Scroll ").centered());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave a column for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let content_height = wrapped_height(&view.lines, content_width);

        if self.state.follow_selection {
            self.scroll_to_selected(&view, content_width, inner.height);
            self.state.follow_selection = false;
        }

        // Clamp so page-down can't scroll past the end
        let max_y = content_height.saturating_sub(inner.height);
        let current = self.state.scroll_state.offset();
        if current.y > max_y {
            self.state.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        let paragraph = Paragraph::new(view.lines).wrap(Wrap { trim: false });
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
