//! # TitleBar Component
//!
//! Top status bar: app name, how deep the back stack is, and the status
//! message from the core (e.g. "No such dressing: ...").
//!
//! Stateless. All three props are copied from `App` each frame:
//!
//! 1. **Viewing with history**: `"Saladbook | Back: 2 | No such dressing: X"`
//! 2. **Viewing, first page**: `"Saladbook | Back: search"`
//! 3. **Browsing**: `"Saladbook"` (plus the status message, if any)

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct TitleBar {
    /// `None` while browsing; otherwise the back stack depth.
    pub back_depth: Option<usize>,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(back_depth: Option<usize>, status_message: String) -> Self {
        Self {
            back_depth,
            status_message,
        }
    }

    pub fn text(&self) -> String {
        let mut parts = vec!["Saladbook".to_string()];
        match self.back_depth {
            Some(0) => parts.push("Back: search".to_string()),
            Some(depth) => parts.push(format!("Back: {depth}")),
            None => {}
        }
        if !self.status_message.is_empty() {
            parts.push(self.status_message.clone());
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.status_message.is_empty() {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_browsing_plain() {
        let title_bar = TitleBar::new(None, String::new());
        assert_eq!(title_bar.text(), "Saladbook");
    }

    #[test]
    fn test_first_detail_page_goes_back_to_search() {
        let title_bar = TitleBar::new(Some(0), String::new());
        assert_eq!(title_bar.text(), "Saladbook | Back: search");
    }

    #[test]
    fn test_depth_and_status() {
        let title_bar = TitleBar::new(Some(2), "No such dressing: X".to_string());
        assert_eq!(title_bar.text(), "Saladbook | Back: 2 | No such dressing: X");
    }

    #[test]
    fn test_render() {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        let mut title_bar = TitleBar::new(None, "No such dressing: X".to_string());

        terminal
            .draw(|f| {
                let area = f.area();
                title_bar.render(f, area);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Saladbook | No such dressing: X"));
    }
}
