//! Quit confirmation dialog

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Confirmation prompt shown before leaving the app. The dataset is never
/// persisted, so quitting discards it.
pub struct QuitDialog;

impl Default for QuitDialog {
    fn default() -> Self {
        Self
    }
}

impl Component for QuitDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 38, 6);

        frame.render_widget(Clear, popup_area);

        let content = vec![
            Line::from(Span::styled(
                "Quit dsa-tui?",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "The current dataset will be discarded.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "y/q",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" quit", Style::default().fg(Color::DarkGray)),
                Span::raw("   "),
                Span::styled(
                    "n/Esc",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" stay", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Quit ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_confirm_keys_force_quit() {
        let mut dialog = QuitDialog;
        for code in [KeyCode::Char('y'), KeyCode::Char('Y'), KeyCode::Char('q')] {
            let action = dialog.handle_key_event(press(code)).unwrap();
            assert_eq!(action, Some(Action::ForceQuit));
        }
    }

    #[test]
    fn test_decline_keys_close_the_dialog() {
        let mut dialog = QuitDialog;
        for code in [KeyCode::Char('n'), KeyCode::Char('N'), KeyCode::Esc] {
            let action = dialog.handle_key_event(press(code)).unwrap();
            assert_eq!(action, Some(Action::CloseModal));
        }
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let mut dialog = QuitDialog;
        let action = dialog.handle_key_event(press(KeyCode::Char('x'))).unwrap();
        assert_eq!(action, None);
    }
}
