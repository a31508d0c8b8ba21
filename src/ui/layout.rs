use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the frame into header, body, notice line, and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);
    (rows[0], rows[1], rows[2], rows[3])
}

/// Split the body into the document panel, the parameter panel, and the
/// result panel.
pub fn body_regions(body: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(6),
            Constraint::Min(4),
        ])
        .split(body);
    (rows[0], rows[1], rows[2])
}
