//! Home screen component
//!
//! The main screen: structure and algorithm pickers in the sidebar, the
//! canvas in the middle, and the optional explanation panel on the right.
//! Key handling lives on `HomeComponent`; rendering is a free function fed
//! by a `HomeRenderContext` snapshot so the App keeps ownership of state.

use crate::action::Action;
use crate::component::Component;
use crate::components::canvas::draw_canvas;
use crate::components::layout::calculate_main_layout;
use crate::components::CodePanel;
use crate::model::{Algorithm, Highlight, InputPurpose, Structure};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Home screen key handling
#[derive(Default)]
pub struct HomeComponent;

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl-modified keys first
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let action = match key.code {
                KeyCode::Char('e') => Some(Action::ScrollDown),
                KeyCode::Char('y') => Some(Action::ScrollUp),
                _ => None,
            };
            return Ok(action);
        }

        let action = match key.code {
            KeyCode::Tab | KeyCode::Right => Some(Action::NextStructure),
            KeyCode::BackTab | KeyCode::Left => Some(Action::PrevStructure),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextAlgorithm),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevAlgorithm),
            KeyCode::Enter | KeyCode::Char('a') => Some(Action::StartAlgorithm),
            KeyCode::Char('i') => Some(Action::OpenValueInput(InputPurpose::Insert)),
            KeyCode::Char('d') => Some(Action::OpenValueInput(InputPurpose::Delete)),
            KeyCode::Char('s') => Some(Action::OpenValueInput(InputPurpose::Search)),
            KeyCode::Char('g') => Some(Action::GenerateRandom),
            KeyCode::Char('x') => Some(Action::ClearAll),
            KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::SpeedUp),
            KeyCode::Char('-') => Some(Action::SpeedDown),
            KeyCode::Char('c') => Some(Action::ToggleCodePanel),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Rendering happens through draw_home_screen with a render context
        Ok(())
    }
}

/// Snapshot of app state needed to render the home screen
pub struct HomeRenderContext<'a> {
    pub structure: Structure,
    pub algo_cursor: usize,
    /// Display-ordered values for the canvas
    pub values: &'a [i64],
    pub highlights: &'a [Highlight],
    pub caption: Option<&'a str>,
    pub dataset_len: usize,
    pub speed: u64,
    pub running: bool,
    pub status: &'a str,
    pub show_code: bool,
}

/// Draw the complete home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    ctx: &HomeRenderContext,
    code_panel: &mut CodePanel,
) {
    let layout = calculate_main_layout(area, ctx.show_code);

    draw_structure_list(frame, layout.structures, ctx.structure);
    draw_info_box(frame, layout.info, ctx);
    draw_algorithm_list(frame, layout.algorithms, ctx.algo_cursor);
    draw_canvas(
        frame,
        layout.canvas,
        ctx.structure,
        ctx.values,
        ctx.highlights,
        ctx.caption,
    );

    if let Some(code_area) = layout.code {
        let algorithm = Algorithm::all()[ctx.algo_cursor.min(Algorithm::all().len() - 1)];
        code_panel.draw(frame, code_area, ctx.structure, algorithm);
    }

    draw_status_line(frame, layout.status, ctx);
    draw_help_bar(frame, layout.help);
}

fn draw_structure_list(frame: &mut Frame, area: Rect, selected: Structure) {
    let items: Vec<ListItem> = Structure::all()
        .iter()
        .map(|s| ListItem::new(format!(" {}", s.name())))
        .collect();

    let selected_index = Structure::all().iter().position(|s| *s == selected);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Structures ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(selected_index);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_info_box(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let state_span = if ctx.running {
        Span::styled(
            "running",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("idle", Style::default().fg(Color::Green))
    };

    let content = vec![
        Line::from(vec![
            Span::styled("  items  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                ctx.dataset_len.to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("  speed  ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/10", ctx.speed),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled("  state  ", Style::default().fg(Color::DarkGray)),
            state_span,
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Info ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_algorithm_list(frame: &mut Frame, area: Rect, cursor: usize) {
    let items: Vec<ListItem> = Algorithm::all()
        .iter()
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {:<17}", a.name())),
                Span::styled(a.complexity(), Style::default().fg(Color::Magenta)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Algorithms ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(Some(cursor.min(Algorithm::all().len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status_line(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let spans = if ctx.running {
        vec![
            Span::styled(
                " ▶ ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(ctx.status.to_string(), Style::default().fg(Color::Yellow)),
        ]
    } else {
        vec![
            Span::raw(" "),
            Span::styled(ctx.status.to_string(), Style::default().fg(Color::Gray)),
        ]
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_bar(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" structure ", Style::default().fg(Color::DarkGray)),
        Span::styled("j/k", Style::default().fg(Color::Cyan)),
        Span::styled(" algorithm ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" run ", Style::default().fg(Color::DarkGray)),
        Span::styled("i/d/s", Style::default().fg(Color::Cyan)),
        Span::styled(" insert/delete/search ", Style::default().fg(Color::DarkGray)),
        Span::styled("g", Style::default().fg(Color::Cyan)),
        Span::styled(" random ", Style::default().fg(Color::DarkGray)),
        Span::styled("x", Style::default().fg(Color::Cyan)),
        Span::styled(" clear ", Style::default().fg(Color::DarkGray)),
        Span::styled("+/-", Style::default().fg(Color::Cyan)),
        Span::styled(" speed ", Style::default().fg(Color::DarkGray)),
        Span::styled("c", Style::default().fg(Color::Cyan)),
        Span::styled(" code ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Cyan)),
        Span::styled(" help ", Style::default().fg(Color::DarkGray)),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::styled(" quit", Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(hints).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_tab_cycles_structures() {
        let mut home = HomeComponent;
        assert_eq!(
            home.handle_key_event(key(KeyCode::Tab)).unwrap(),
            Some(Action::NextStructure)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::BackTab)).unwrap(),
            Some(Action::PrevStructure)
        );
    }

    #[test]
    fn test_enter_starts_algorithm() {
        let mut home = HomeComponent;
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::StartAlgorithm)
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('a'))).unwrap(),
            Some(Action::StartAlgorithm)
        );
    }

    #[test]
    fn test_dataset_keys_open_input_dialogs() {
        let mut home = HomeComponent;
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('i'))).unwrap(),
            Some(Action::OpenValueInput(InputPurpose::Insert))
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('s'))).unwrap(),
            Some(Action::OpenValueInput(InputPurpose::Search))
        );
    }

    #[test]
    fn test_ctrl_keys_scroll_code_panel() {
        let mut home = HomeComponent;
        let ctrl_e = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::CONTROL);
        assert_eq!(
            home.handle_key_event(ctrl_e).unwrap(),
            Some(Action::ScrollDown)
        );
    }

    #[test]
    fn test_unbound_keys_do_nothing() {
        let mut home = HomeComponent;
        assert_eq!(home.handle_key_event(key(KeyCode::Char('z'))).unwrap(), None);
    }
}
