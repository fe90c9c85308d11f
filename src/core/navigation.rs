//! # Navigation
//!
//! Which screen is showing, and how to get back.
//!
//! ```text
//!              select(name)                 select(other)
//!  Browsing ───────────────▶ Viewing(name) ───────────────▶ Viewing(other)
//!     ▲                        │     ▲        push(name)         │
//!     └────── back() ──────────┘     └──────── back() ───────────┘
//!          (stack empty)                     pop → name
//! ```
//!
//! `back()` from `Browsing` does nothing. There is no terminal state.

use std::mem;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    /// Search page, nothing selected.
    #[default]
    Browsing,
    /// Detail page for the named dressing.
    Viewing(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    screen: Screen,
    /// Previously viewed dressings, most recent last.
    back_stack: Vec<String>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Name of the dressing on screen, if any.
    pub fn current(&self) -> Option<&str> {
        match &self.screen {
            Screen::Viewing(name) => Some(name),
            Screen::Browsing => None,
        }
    }

    pub fn back_stack(&self) -> &[String] {
        &self.back_stack
    }

    /// Back is offered on every detail page; from the first one it leads to
    /// the search page.
    pub fn can_go_back(&self) -> bool {
        matches!(self.screen, Screen::Viewing(_))
    }

    pub fn select(&mut self, name: String) {
        if let Screen::Viewing(previous) = mem::replace(&mut self.screen, Screen::Viewing(name)) {
            self.back_stack.push(previous);
        }
    }

    pub fn back(&mut self) {
        if let Screen::Browsing = self.screen {
            return;
        }
        self.screen = match self.back_stack.pop() {
            Some(previous) => Screen::Viewing(previous),
            None => Screen::Browsing,
        };
    }

    /// Return to the search page and forget the history.
    pub fn reset(&mut self) {
        self.screen = Screen::Browsing;
        self.back_stack.clear();
    }
}
