use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DressingPage, SearchPage, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, main_area] = Layout::vertical([Length(1), Min(0)]).areas(frame.area());

    let back_depth = app
        .navigation
        .can_go_back()
        .then(|| app.navigation.back_stack().len());
    TitleBar::new(back_depth, app.status_message.clone()).render(frame, title_area);

    match tui.dressing_page.as_mut() {
        Some(page) => DressingPage::new(page, &app.catalog).render(frame, main_area),
        None => SearchPage::new(&mut tui.search).render(frame, main_area),
    }
}
