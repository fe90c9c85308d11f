//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm Event → TuiEvent → active page → SearchEvent / DressingPageEvent
//!                                                   │
//!                                                   ▼
//!                                    Action → core::update() → Effect
//!                                                   │
//!                                                   ▼
//!                                        TuiState::sync(&App)
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws after an event. It sleeps up to
//! 500ms per poll and drains all pending events before drawing again.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::navigation::Screen;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{DressingPageEvent, DressingPageState, SearchEvent, SearchPageState};
pub use crate::tui::event::TuiEvent;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search: SearchPageState,
    /// Present exactly while the core is on `Screen::Viewing`.
    pub dressing_page: Option<DressingPageState>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut tui = Self {
            search: SearchPageState::new(app.options.clone()),
            dressing_page: None,
        };
        tui.sync(app);
        tui
    }

    /// Bring page state in line with the navigation screen after an update.
    pub fn sync(&mut self, app: &App) {
        match app.navigation.screen() {
            Screen::Browsing => {
                if self.dressing_page.take().is_some() {
                    self.search.reset();
                }
            }
            Screen::Viewing(name) => {
                let stale = self
                    .dressing_page
                    .as_ref()
                    .is_none_or(|page| page.name != *name);
                if stale {
                    debug!("Opening dressing page: {}", name);
                    self.dressing_page = Some(DressingPageState::new(&app.catalog, name));
                }
            }
        }
    }
}

/// Route one event to the active page and apply the resulting action.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let action = match event {
        TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        _ => match tui.dressing_page.as_mut() {
            Some(page) => page.handle_event(event).map(|e| match e {
                DressingPageEvent::Follow(name) => Action::Select(name),
                DressingPageEvent::Back => Action::Back,
            }),
            None => tui.search.handle_event(event).map(|e| match e {
                SearchEvent::Select(name) => Action::Select(name),
                SearchEvent::Quit => Action::Quit,
            }),
        },
    };

    let Some(action) = action else {
        return Effect::None;
    };
    let effect = update(app, action);
    tui.sync(app);
    effect
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Cursor sits in the search box
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableBracketedPaste);
    }
}

pub fn run(mut app: App) -> io::Result<()> {
    let mut tui = TuiState::new(&app);
    let mut terminal = ratatui::init();

    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut app, &mut tui),
        Err(e) => Err(e),
    };

    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let mut pending = poll_event_timeout(IDLE_POLL)?;
        while let Some(event) = pending {
            needs_redraw = true;
            if handle_event(app, tui, &event) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}
