//! Result / error banner shown above the form

use super::dialog::wrap_text;
use crate::platform::{COPY_SHORTCUT, GENERATE_SHORTCUT};
use crate::state::{AgentResult, SubmissionState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SUCCESS_FALLBACK: &str = "Document generated successfully";

/// Rows the banner needs at the given width (0 when there is nothing to show)
pub fn banner_height(submission: &SubmissionState, width: u16) -> u16 {
    if submission.result().is_some() {
        5
    } else if let Some(message) = submission.error_message() {
        let inner = width.saturating_sub(4).max(10) as usize;
        4 + wrap_text(message, inner).len() as u16
    } else {
        0
    }
}

/// Draw the banner for a finished submission
pub fn draw_banner(frame: &mut Frame, area: Rect, submission: &SubmissionState) {
    let (lines, color) = if let Some(result) = submission.result() {
        (success_lines(result, submission.pdf_url()), Color::Green)
    } else if let Some(message) = submission.error_message() {
        let inner = area.width.saturating_sub(4).max(10) as usize;
        (failure_lines(message, inner), Color::Red)
    } else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn badge(text: &str, color: Color) -> Span<'static> {
    Span::styled(format!("[{text}]"), Style::default().fg(color))
}

fn success_lines(result: &AgentResult, pdf_url: Option<&str>) -> Vec<Line<'static>> {
    let message = result.message.as_deref().unwrap_or(SUCCESS_FALLBACK);
    let headline = Line::from(vec![
        Span::styled(" ✓ ", Style::default().fg(Color::Green)),
        Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let mut badges = vec![Span::raw("   ")];
    if let Some(title) = &result.document_title {
        badges.push(badge(title, Color::White));
        badges.push(Span::raw(" "));
    }
    if let Some(vendor) = &result.vendor_name {
        badges.push(badge(vendor, Color::Gray));
        badges.push(Span::raw(" "));
    }
    if let Some(status) = &result.status {
        badges.push(badge(status, Color::Gray));
    }

    let link = match pdf_url {
        Some(url) => Line::from(vec![
            Span::styled(" ⇩ Download PDF: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                url.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(
                format!("  ({COPY_SHORTCUT} to copy)"),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        None => Line::from(Span::styled(
            "   No document link was returned",
            Style::default().fg(Color::DarkGray),
        )),
    };

    vec![headline, Line::from(badges), link]
}

fn failure_lines(message: &str, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(" ✗ ", Style::default().fg(Color::Red)),
        Span::styled(
            "PDF generation failed",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.extend(wrap_text(message, width).into_iter().map(|l| {
        Line::from(Span::styled(
            format!("   {l}"),
            Style::default().fg(Color::Gray),
        ))
    }));
    lines.push(Line::from(vec![
        Span::styled(
            format!("   ↻ Retry ({GENERATE_SHORTCUT})"),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("  ·  Esc to dismiss", Style::default().fg(Color::DarkGray)),
    ]));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_banner_when_idle_or_loading() {
        assert_eq!(banner_height(&SubmissionState::Idle, 80), 0);
        assert_eq!(banner_height(&SubmissionState::Loading, 80), 0);
    }

    #[test]
    fn test_success_banner_height() {
        let state = SubmissionState::Succeeded {
            result: AgentResult::default(),
            pdf_url: None,
        };
        assert_eq!(banner_height(&state, 80), 5);
    }

    #[test]
    fn test_failure_banner_grows_with_message() {
        let short = SubmissionState::Failed {
            message: "nope".to_string(),
        };
        let long = SubmissionState::Failed {
            message: "word ".repeat(40),
        };
        assert_eq!(banner_height(&short, 80), 5);
        assert!(banner_height(&long, 80) > 5);
    }

    #[test]
    fn test_success_lines_use_fallback_message() {
        let lines = success_lines(&AgentResult::default(), None);
        let headline: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(headline.contains(SUCCESS_FALLBACK));
    }
}
