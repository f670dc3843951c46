use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorPanel, ResponsePanel, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    // Error panel stacks above the response panel: a failed stream keeps
    // whatever partial text already arrived visible underneath.
    let response_area = if let Some(error_msg) = &app.error {
        let [error_area, rest] = Layout::vertical([Length(3), Min(0)]).areas(main_area);
        ErrorPanel { message: error_msg }.render(frame, error_area);
        rest
    } else {
        main_area
    };

    ResponsePanel::new(&mut tui.response_panel, &app.response, app.is_loading)
        .render(frame, response_area);

    // Title bar renders after the response panel so the unseen-content
    // indicator reflects this frame's scroll position.
    TitleBar::new(
        app.base_url.clone(),
        app.status_message.clone(),
        tui.response_panel.has_unseen_content,
    )
    .render(frame, title_area);

    tui.input_box.render(frame, input_area);
}
