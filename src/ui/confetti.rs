use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

const GRAVITY: f32 = 0.0015;
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
];
const GLYPHS: [char; 5] = ['*', '+', '•', '~', '◆'];

#[derive(Debug, Clone)]
struct Piece {
    // Position in area-relative units: 0.0..1.0 spans the area.
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    color: Color,
    glyph: char,
}

/// One-shot confetti shower. Pieces fall once and are dropped when they
/// leave the bottom edge; nothing is recycled.
#[derive(Debug, Clone, Default)]
pub struct Confetti {
    pieces: Vec<Piece>,
}

impl Confetti {
    pub fn burst(count: usize) -> Self {
        Self::burst_with(count, &mut fastrand::Rng::new())
    }

    pub fn burst_with(count: usize, rng: &mut fastrand::Rng) -> Self {
        let pieces = (0..count)
            .map(|_| Piece {
                x: rng.f32(),
                y: -rng.f32() * 0.3,
                vx: (rng.f32() - 0.5) * 0.02,
                vy: 0.005 + rng.f32() * 0.015,
                color: COLORS[rng.usize(..COLORS.len())],
                glyph: GLYPHS[rng.usize(..GLYPHS.len())],
            })
            .collect();
        Self { pieces }
    }

    pub fn tick(&mut self) {
        for piece in &mut self.pieces {
            piece.vy += GRAVITY;
            piece.x += piece.vx;
            piece.y += piece.vy;
        }
        self.pieces.retain(|p| p.y <= 1.0);
    }

    pub fn is_finished(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

impl Widget for &Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for piece in &self.pieces {
            if !(0.0..1.0).contains(&piece.x) || !(0.0..1.0).contains(&piece.y) {
                continue;
            }
            let col = area.x + (piece.x * area.width as f32) as u16;
            let row = area.y + (piece.y * area.height as f32) as u16;
            if let Some(cell) = buf.cell_mut((col, row)) {
                cell.set_char(piece.glyph).set_fg(piece.color);
            }
        }
    }
}
