//! Field rendering utilities for forms

use crate::state::{choice_label, FieldId, FieldKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Width of the label column, including the required marker
pub const LABEL_WIDTH: usize = 28;

/// How a field should be drawn
#[derive(Debug, Clone, Copy)]
pub struct FieldStyle {
    pub is_focused: bool,
    pub is_disabled: bool,
    pub has_error: bool,
}

/// Render one field as a single line: label column then value
pub fn field_line(field: FieldId, value: &str, style: FieldStyle) -> Line<'static> {
    let label_style = if style.is_disabled {
        Style::default().fg(Color::DarkGray)
    } else if style.has_error {
        Style::default().fg(Color::Red)
    } else if style.is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let marker = if style.is_focused { "› " } else { "  " };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(field.label().to_string(), label_style),
    ];
    let mut label_len = field.label().chars().count();
    if field.is_required() {
        spans.push(Span::styled("*", Style::default().fg(Color::Red)));
        label_len += 1;
    }
    spans.push(Span::raw(" ".repeat(LABEL_WIDTH.saturating_sub(label_len))));

    spans.extend(value_spans(field, value, style));
    Line::from(spans)
}

fn value_spans(field: FieldId, value: &str, style: FieldStyle) -> Vec<Span<'static>> {
    let value_style = if style.is_disabled {
        Style::default().fg(Color::DarkGray)
    } else if style.is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    match field.kind() {
        FieldKind::Text => {
            let mut spans = if value.is_empty() && !style.is_focused {
                vec![Span::styled(field.placeholder().to_string(), placeholder_style)]
            } else {
                vec![Span::styled(value.to_string(), value_style)]
            };
            if style.is_focused && !style.is_disabled {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            spans
        }
        FieldKind::Select(choices) => {
            let shown = if value.is_empty() {
                Span::styled(field.placeholder().to_string(), placeholder_style)
            } else {
                let label = choice_label(choices, value).unwrap_or(value);
                Span::styled(label.to_string(), value_style)
            };
            if style.is_focused && !style.is_disabled {
                vec![
                    Span::styled("‹ ", Style::default().fg(Color::Cyan)),
                    shown,
                    Span::styled(" ›", Style::default().fg(Color::Cyan)),
                ]
            } else {
                vec![shown]
            }
        }
        FieldKind::Radio(choices) => {
            let mut spans = Vec::with_capacity(choices.len() * 2);
            for (i, choice) in choices.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw("   "));
                }
                let selected = choice.value == value;
                let mark = if selected { "(•) " } else { "( ) " };
                let s = if selected {
                    value_style.add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };
                spans.push(Span::styled(format!("{mark}{}", choice.label), s));
            }
            spans
        }
    }
}

/// Inline validation message shown under a field
pub fn error_line(message: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 2)),
        Span::styled(format!("! {message}"), Style::default().fg(Color::Red)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    const PLAIN: FieldStyle = FieldStyle {
        is_focused: false,
        is_disabled: false,
        has_error: false,
    };

    #[test]
    fn test_required_field_has_marker() {
        let text = text_of(&field_line(FieldId::CompanyName, "Acme", PLAIN));
        assert!(text.contains("Company Name*"));
        assert!(text.ends_with("Acme"));
    }

    #[test]
    fn test_empty_text_shows_placeholder() {
        let text = text_of(&field_line(FieldId::City, "", PLAIN));
        assert!(text.contains("e.g. San Francisco"));
    }

    #[test]
    fn test_focused_text_shows_cursor_not_placeholder() {
        let style = FieldStyle {
            is_focused: true,
            ..PLAIN
        };
        let text = text_of(&field_line(FieldId::City, "", style));
        assert!(!text.contains("San Francisco"));
        assert!(text.ends_with('▌'));
    }

    #[test]
    fn test_radio_marks_selected_option() {
        let text = text_of(&field_line(FieldId::PaymentTerms, "net45", PLAIN));
        assert!(text.contains("( ) Net 30"));
        assert!(text.contains("(•) Net 45"));
        assert!(text.contains("( ) Net 60"));
    }

    #[test]
    fn test_focused_select_shows_arrows() {
        let style = FieldStyle {
            is_focused: true,
            ..PLAIN
        };
        let text = text_of(&field_line(FieldId::Country, "Canada", style));
        assert!(text.contains("‹ Canada ›"));
    }

    #[test]
    fn test_error_line_contains_message() {
        let text = text_of(&error_line("Phone number is required"));
        assert!(text.contains("Phone number is required"));
    }
}
