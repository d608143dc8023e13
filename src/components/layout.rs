//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub structures: Rect,
    pub info: Rect,
    pub algorithms: Rect,
    pub canvas: Rect,
    pub code: Option<Rect>,
    pub status: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate main screen layout
pub fn calculate_main_layout(area: Rect, show_code: bool) -> MainLayout {
    // Main vertical layout: content + status line + help bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    // Horizontal split: sidebar (24%) and main area (76%)
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(24), Constraint::Percentage(76)])
        .split(main_chunks[0]);

    // Sidebar: structure list + info box + algorithm list
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(horizontal_chunks[0]);

    // Main area: canvas alone, or canvas + code panel
    let (canvas_area, code_area) = if show_code {
        let right_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(horizontal_chunks[1]);
        (right_chunks[0], Some(right_chunks[1]))
    } else {
        (horizontal_chunks[1], None)
    };

    MainLayout {
        structures: left_chunks[0],
        info: left_chunks[1],
        algorithms: left_chunks[2],
        canvas: canvas_area,
        code: code_area,
        status: main_chunks[1],
        help: main_chunks[2],
    }
}
