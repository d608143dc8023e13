//! Code panel component
//!
//! Shows the explanation and a reference implementation for the selected
//! structure or algorithm, with syntax highlighting and scrolling.

use crate::components::code_highlight::highlight_rust;
use crate::model::{Algorithm, Structure};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Scrollable explanation + code panel
#[derive(Default)]
pub struct CodePanel {
    pub scroll_offset: usize,
}

impl CodePanel {
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Draw the panel for the selected structure and algorithm
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        structure: Structure,
        algorithm: Algorithm,
    ) {
        let mut content: Vec<Line<'static>> = Vec::new();

        content.push(Line::from(Span::styled(
            structure.name().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        content.push(Line::from(Span::styled(
            structure.explanation().to_string(),
            Style::default().fg(Color::Gray),
        )));
        content.push(Line::from(""));
        content.extend(highlight_rust(structure.code()));
        content.push(Line::from(""));

        content.push(Line::from(vec![
            Span::styled(
                format!("{} ", algorithm.name()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                algorithm.complexity().to_string(),
                Style::default().fg(Color::Magenta),
            ),
        ]));
        content.push(Line::from(Span::styled(
            algorithm.explanation().to_string(),
            Style::default().fg(Color::Gray),
        )));
        content.push(Line::from(""));

        content.extend(highlight_rust(algorithm.code()));

        let total = content.len();
        let visible_height = area.height.saturating_sub(2) as usize;

        // Clamp scroll offset
        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Explain ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(total.saturating_sub(visible_height)).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_up_saturates_at_zero() {
        let mut panel = CodePanel::default();
        panel.scroll_up();
        assert_eq!(panel.scroll_offset, 0);

        panel.scroll_down();
        panel.scroll_down();
        assert_eq!(panel.scroll_offset, 2);
    }
}
