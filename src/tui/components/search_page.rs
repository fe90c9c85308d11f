//! # Search Page Component
//!
//! The landing screen: a text box that filters the list of used dressings.
//! Typing narrows the list, Up/Down move the highlight, Enter opens the
//! highlighted dressing, Esc clears the query (or quits when it is empty).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `SearchPageState` lives in `TuiState`
//! - `SearchPage` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::partition::DressingOption;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Persistent state for the search page.
pub struct SearchPageState {
    pub query: String,
    options: Vec<DressingOption>,
    /// Indices into `options` that match `query`, in option order.
    matches: Vec<usize>,
    selected: usize,
    list_state: ListState,
}

/// Events emitted by the search page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Open the dressing with this name.
    Select(String),
    Quit,
}

impl SearchPageState {
    pub fn new(options: Vec<DressingOption>) -> Self {
        let mut state = Self {
            query: String::new(),
            matches: (0..options.len()).collect(),
            options,
            selected: 0,
            list_state: ListState::default(),
        };
        state.sync_selection();
        state
    }

    /// Options matching the current query.
    pub fn visible(&self) -> impl Iterator<Item = &DressingOption> {
        self.matches.iter().map(|&i| &self.options[i])
    }

    pub fn highlighted(&self) -> Option<&DressingOption> {
        self.matches.get(self.selected).map(|&i| &self.options[i])
    }

    /// Clear the query and move the highlight back to the top.
    pub fn reset(&mut self) {
        self.query.clear();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.matches = self
            .options
            .iter()
            .enumerate()
            .filter(|(_, option)| matches_query(&option.label, &self.query))
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        if self.matches.is_empty() {
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(self.matches.len() - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

impl EventHandler for SearchPageState {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<SearchEvent> {
        match event {
            TuiEvent::Escape => {
                if self.query.is_empty() {
                    return Some(SearchEvent::Quit);
                }
                self.reset();
                None
            }
            TuiEvent::InputChar(c) => {
                self.query.push(*c);
                self.refilter();
                None
            }
            TuiEvent::Paste(text) => {
                self.query
                    .extend(text.chars().filter(|c| !c.is_control()));
                self.refilter();
                None
            }
            TuiEvent::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
                None
            }
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.sync_selection();
                None
            }
            TuiEvent::CursorDown => {
                self.selected += 1;
                self.sync_selection();
                None
            }
            TuiEvent::Submit => self
                .highlighted()
                .map(|option| SearchEvent::Select(option.value.clone())),
            _ => None,
        }
    }
}

/// Case-insensitive: every whitespace-separated term must appear in `label`.
pub fn matches_query(label: &str, query: &str) -> bool {
    let label = label.to_lowercase();
    query
        .split_whitespace()
        .all(|term| label.contains(&term.to_lowercase()))
}

/// Transient render wrapper for the search page.
pub struct SearchPage<'a> {
    state: &'a mut SearchPageState,
}

impl<'a> SearchPage<'a> {
    pub fn new(state: &'a mut SearchPageState) -> Self {
        Self { state }
    }
}

impl Component for SearchPage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = centered_rect(70, 80, area);
        let [input_area, list_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(panel);

        let input = Paragraph::new(self.state.query.as_str())
            .style(Style::default().fg(Color::Green))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title(" Select a dressing… "),
            );
        frame.render_widget(input, input_area);

        let cursor_x = input_area.x + 1 + self.state.query.width() as u16;
        frame.set_cursor_position((
            cursor_x.min(input_area.right().saturating_sub(2)),
            input_area.y + 1,
        ));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title_bottom(Line::from(" ↑↓ Move  Enter Open  Esc Clear/Quit ").centered())
            .padding(Padding::horizontal(1));

        if self.state.matches.is_empty() {
            let empty = Paragraph::new("No options found.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, list_area);
            return;
        }

        let inner_width = list_area.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .state
            .visible()
            .map(|option| ListItem::new(truncate_str(&option.label, inner_width)))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str("...");
    out
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
