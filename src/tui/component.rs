use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something drawn into a region of the frame.
///
/// Pages are thin wrappers built fresh each frame around borrowed data
/// (`&Catalog`) and a `&mut` persistent state, so `render` may update scroll
/// offsets and cached link positions as it draws.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Page state that turns key presses into page-level intents.
///
/// Returns `None` when the event was consumed locally (typing, scrolling,
/// moving the highlight) and needs no core action.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
