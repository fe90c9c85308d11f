//! # Actions
//!
//! Everything that can happen in Saladbook becomes an `Action`.
//! User picks a dressing from the list? That's `Action::Select(name)`.
//! User follows a link on a dressing page? Also `Action::Select(name)`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the adapter to carry out.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, warn};

use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the named dressing.
    Select(String),
    Back,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Select(name) => {
            if app.catalog.dressing(&name).is_none() {
                warn!("No such dressing: {}", name);
                app.status_message = format!("No such dressing: {name}");
                app.navigation.reset();
                return Effect::None;
            }
            app.status_message.clear();
            app.navigation.select(name);
            Effect::None
        }
        Action::Back => {
            app.status_message.clear();
            app.navigation.back();
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
