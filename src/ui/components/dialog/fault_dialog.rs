//! Recovery screen shown after a rendering failure

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Clear,
    Frame,
};

/// Replace the whole screen with the "something went wrong" dialog
pub fn render_fault_screen(frame: &mut Frame, error_message: &str) {
    frame.render_widget(Clear, frame.area());

    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to try again"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Something went wrong",
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
