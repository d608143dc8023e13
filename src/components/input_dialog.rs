//! Value input dialog component
//!
//! Single-line numeric entry used by insert, delete, and search. The
//! buffer itself lives on the modal stack so the dialog stays stateless.

use crate::action::Action;
use crate::components::centered_popup;
use crate::model::InputPurpose;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Value input dialog
pub struct InputDialog;

impl InputDialog {
    /// Map a key event to an input action
    pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SubmitInput),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => Some(Action::InputChar(c)),
            _ => None,
        }
    }

    /// Draw the dialog with the current buffer contents
    pub fn draw(frame: &mut Frame, area: Rect, purpose: InputPurpose, buffer: &str) {
        let popup_area = centered_popup(area, 44, 7);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("  {} ", purpose.prompt()),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    buffer.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", Style::default().fg(Color::Yellow)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "  Enter ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Confirm  "),
                Span::styled(
                    " Esc ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("Cancel"),
            ]),
        ];

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", purpose.title()))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digits_and_minus_are_accepted() {
        assert_eq!(
            InputDialog::handle_key_event(key(KeyCode::Char('7'))),
            Some(Action::InputChar('7'))
        );
        assert_eq!(
            InputDialog::handle_key_event(key(KeyCode::Char('-'))),
            Some(Action::InputChar('-'))
        );
    }

    #[test]
    fn test_letters_are_ignored() {
        assert_eq!(InputDialog::handle_key_event(key(KeyCode::Char('a'))), None);
    }

    #[test]
    fn test_enter_submits_and_esc_closes() {
        assert_eq!(
            InputDialog::handle_key_event(key(KeyCode::Enter)),
            Some(Action::SubmitInput)
        );
        assert_eq!(
            InputDialog::handle_key_event(key(KeyCode::Esc)),
            Some(Action::CloseModal)
        );
    }
}
