use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

pub struct Layout {
    pub full: Rect,
    pub header: Rect,
    pub content: Rect,
    pub message: Rect,
    pub status: Rect,
}

impl Layout {
    pub fn new(area: Rect) -> Self {
        // Message panel space is always reserved so the card never jumps
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),  // Header
                Constraint::Min(10),    // Content
                Constraint::Length(3),  // Message panel
                Constraint::Length(1),  // Status bar
            ])
            .split(area);

        Self {
            full: area,
            header: chunks[0],
            content: chunks[1],
            message: chunks[2],
            status: chunks[3],
        }
    }

    pub fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
        let horizontal = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(width),
                Constraint::Fill(1),
            ])
            .split(area);

        let vertical = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(height),
                Constraint::Fill(1),
            ])
            .split(horizontal[1]);

        vertical[1]
    }

    /// The one-row strip `offset` rows into `area`, if it lies inside it
    pub fn row(area: Rect, offset: u16) -> Option<Rect> {
        if offset >= area.height || area.width == 0 {
            return None;
        }
        Some(Rect::new(area.x, area.y + offset, area.width, 1))
    }

    /// Shift `area` horizontally by `offset` columns, clipped to `bounds`.
    /// Positive offsets move right.
    pub fn shifted(area: Rect, offset: i32, bounds: Rect) -> Rect {
        let left = (area.x as i32 + offset).max(bounds.x as i32);
        let right = (area.right() as i32 + offset).min(bounds.right() as i32);
        if right <= left {
            return Rect::new(bounds.x, area.y, 0, area.height);
        }
        Rect::new(left as u16, area.y, (right - left) as u16, area.height)
    }
}
