//! Canvas component - renders the current data structure
//!
//! The canvas draws whatever the animator (or the idle dataset) provides:
//! a list of display-ordered values plus one highlight per element. Each
//! structure has its own text layout; highlights map to element styles.

use crate::model::{Bst, DemoGraph, Highlight, Structure};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Accent color for a highlight (borders, markers)
fn accent(highlight: Highlight) -> Color {
    match highlight {
        Highlight::None => Color::DarkGray,
        Highlight::Comparing => Color::Yellow,
        Highlight::Current => Color::LightBlue,
        Highlight::Match => Color::Green,
        Highlight::Sorted => Color::Cyan,
        Highlight::Pivot => Color::Magenta,
        Highlight::Visited => Color::Green,
    }
}

/// Fill style for a highlighted element's value
pub fn highlight_style(highlight: Highlight) -> Style {
    match highlight {
        Highlight::None => Style::default().fg(Color::White),
        other => Style::default()
            .fg(Color::Black)
            .bg(accent(other))
            .add_modifier(Modifier::BOLD),
    }
}

fn mark(highlights: &[Highlight], index: usize) -> Highlight {
    highlights.get(index).copied().unwrap_or(Highlight::None)
}

/// Draw the canvas for the given structure and display-ordered values
pub fn draw_canvas(
    frame: &mut Frame,
    area: Rect,
    structure: Structure,
    values: &[i64],
    highlights: &[Highlight],
    caption: Option<&str>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", structure.name()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(Color::DarkGray));

    if values.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                structure.empty_label(),
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let mut lines = match structure {
        Structure::Array => array_lines(values, highlights),
        Structure::LinkedList => linked_list_lines(values, highlights),
        Structure::Stack => stack_lines(values, highlights),
        Structure::Queue => queue_lines(values, highlights),
        Structure::Tree => tree_lines(values, highlights),
        Structure::Graph => graph_lines(values, highlights),
    };

    if let Some(caption) = caption {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            caption.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // One line of breathing room below the border
    lines.insert(0, Line::from(""));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

/// Boxed cells in a row, with an index line underneath
fn array_lines(values: &[i64], highlights: &[Highlight]) -> Vec<Line<'static>> {
    let mut top = vec![Span::raw(" ")];
    let mut mid = vec![Span::raw(" ")];
    let mut bot = vec![Span::raw(" ")];
    let mut idx = vec![Span::raw(" ")];

    for (i, value) in values.iter().enumerate() {
        let text = value.to_string();
        let width = text.width().max(1);
        let border = Style::default().fg(accent(mark(highlights, i)));

        top.push(Span::styled(format!("┌{}┐", "─".repeat(width + 2)), border));
        top.push(Span::raw(" "));

        mid.push(Span::styled("│".to_string(), border));
        mid.push(Span::styled(
            format!(" {} ", text),
            highlight_style(mark(highlights, i)),
        ));
        mid.push(Span::styled("│".to_string(), border));
        mid.push(Span::raw(" "));

        bot.push(Span::styled(format!("└{}┘", "─".repeat(width + 2)), border));
        bot.push(Span::raw(" "));

        idx.push(Span::styled(
            format!("{:^cell$} ", i, cell = width + 4),
            Style::default().fg(Color::DarkGray),
        ));
    }

    vec![
        Line::from(top),
        Line::from(mid),
        Line::from(bot),
        Line::from(idx),
    ]
}

/// Nodes chained with arrows, terminated by ∅
fn linked_list_lines(values: &[i64], highlights: &[Highlight]) -> Vec<Line<'static>> {
    let mut spans = vec![Span::raw(" ")];

    for (i, value) in values.iter().enumerate() {
        spans.push(Span::styled(
            format!("[ {} ]", value),
            highlight_style(mark(highlights, i)),
        ));
        spans.push(Span::styled(
            "──▶".to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(
        " ∅".to_string(),
        Style::default().fg(Color::DarkGray),
    ));

    vec![Line::from(spans)]
}

/// Values stacked vertically, top of stack first
fn stack_lines(values: &[i64], highlights: &[Highlight]) -> Vec<Line<'static>> {
    let width = values
        .iter()
        .map(|v| v.to_string().width())
        .max()
        .unwrap_or(1);

    let mut lines = Vec::new();
    for (i, value) in values.iter().enumerate() {
        let border = Style::default().fg(accent(mark(highlights, i)));
        let mut spans = vec![
            Span::raw(" "),
            Span::styled("│".to_string(), border),
            Span::styled(
                format!(" {:^width$} ", value),
                highlight_style(mark(highlights, i)),
            ),
            Span::styled("│".to_string(), border),
        ];
        if i == 0 {
            spans.push(Span::styled(
                " ◀ top".to_string(),
                Style::default().fg(Color::Cyan),
            ));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(
        format!(" └{}┘", "─".repeat(width + 2)),
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

/// Array cells with front/rear markers
fn queue_lines(values: &[i64], highlights: &[Highlight]) -> Vec<Line<'static>> {
    let mut lines = array_lines(values, highlights);

    // Column where the last cell begins (the leading space plus each
    // earlier cell's width)
    let rear_column: usize = 1 + values
        .iter()
        .take(values.len().saturating_sub(1))
        .map(|v| v.to_string().width().max(1) + 5)
        .sum::<usize>();

    let marker = if values.len() == 1 {
        " front/rear".to_string()
    } else {
        format!(" front{:>pad$}", "rear", pad = rear_column + 3)
    };
    lines.push(Line::from(Span::styled(
        marker,
        Style::default().fg(Color::Cyan),
    )));

    lines
}

/// One row per depth, columns by in-order position
///
/// The display order of tree values is the pre-order walk, so inserting
/// them back in that order rebuilds the identical tree and highlight index
/// i lands on the i-th pre-order node.
fn tree_lines(values: &[i64], highlights: &[Highlight]) -> Vec<Line<'static>> {
    let bst = Bst::build(values);
    let cells = bst.layout();

    let col_width = values
        .iter()
        .map(|v| v.to_string().width())
        .max()
        .unwrap_or(1)
        + 3;
    let max_depth = cells.iter().map(|c| c.depth).max().unwrap_or(0);

    let mut lines = Vec::new();
    for depth in 0..=max_depth {
        let mut row: Vec<(usize, &crate::model::tree::TreeCell)> = cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.depth == depth)
            .collect();
        row.sort_by_key(|(_, cell)| cell.order);

        let mut spans = vec![Span::raw(" ")];
        let mut column = 0usize;
        for (pre_index, cell) in row {
            let target = cell.order * col_width;
            if target > column {
                spans.push(Span::raw(" ".repeat(target - column)));
                column = target;
            }
            let text = cell.value.to_string();
            column += text.width();
            spans.push(Span::styled(
                text,
                highlight_style(mark(highlights, pre_index)),
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

/// Node row plus an edge list
fn graph_lines(values: &[i64], highlights: &[Highlight]) -> Vec<Line<'static>> {
    let graph = DemoGraph::build(values);

    let mut node_spans = vec![Span::raw(" ")];
    for (i, value) in graph.nodes().iter().enumerate() {
        node_spans.push(Span::styled(
            format!("({})", value),
            highlight_style(mark(highlights, i)),
        ));
        node_spans.push(Span::raw("  "));
    }

    let mut lines = vec![Line::from(node_spans), Line::from("")];
    lines.push(Line::from(Span::styled(
        " edges".to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    for (a, b) in graph.edges() {
        lines.push(Line::from(Span::styled(
            format!("   {} ── {}", graph.nodes()[a], graph.nodes()[b]),
            Style::default().fg(Color::Gray),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_array_lines_shape() {
        let lines = array_lines(&[5, 3, 8], &[]);

        // Top, value, bottom, index rows
        assert_eq!(lines.len(), 4);
        let text = rendered(&lines);
        assert!(text.contains(" 5 "));
        assert!(text.contains(" 0 "));
        assert!(text.contains(" 2 "));
    }

    #[test]
    fn test_linked_list_ends_with_nil() {
        let lines = linked_list_lines(&[1, 2], &[]);
        let text = rendered(&lines);

        assert!(text.contains("[ 1 ]──▶[ 2 ]──▶ ∅"));
    }

    #[test]
    fn test_stack_marks_top_on_first_line() {
        let lines = stack_lines(&[8, 3, 5], &[]);
        let text = rendered(&lines);

        let first = text.lines().next().unwrap_or("");
        assert!(first.contains('8'));
        assert!(first.contains("◀ top"));
    }

    #[test]
    fn test_queue_lines_have_front_and_rear_markers() {
        let lines = queue_lines(&[5, 3, 8], &[]);
        let text = rendered(&lines);

        assert!(text.contains("front"));
        assert!(text.contains("rear"));
    }

    #[test]
    fn test_tree_lines_root_on_first_row() {
        // Pre-order of the tree built from [5, 3, 8]
        let lines = tree_lines(&[5, 3, 8], &[]);
        let text = rendered(&lines);

        let first = text.lines().next().unwrap_or("");
        assert!(first.contains('5'));
        assert!(!first.contains('3'));
        assert!(text.contains('3'));
        assert!(text.contains('8'));
    }

    #[test]
    fn test_graph_lines_list_edges() {
        let lines = graph_lines(&[1, 2, 3], &[]);
        let text = rendered(&lines);

        assert!(text.contains("(1)"));
        assert!(text.contains("edges"));
        assert!(text.contains("1 ── 2"));
        assert!(text.contains("1 ── 3"));
    }

    #[test]
    fn test_highlight_style_none_has_no_background() {
        assert_eq!(highlight_style(Highlight::None).bg, None);
        assert_eq!(
            highlight_style(Highlight::Match).bg,
            Some(Color::Green)
        );
    }
}
