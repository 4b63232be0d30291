//! GameView: blits a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so layout is unit-tested directly against the framebuffer.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, COLS, ROWS};

/// Play-area background
pub const BOARD_BG: Rgb = Rgb::hex(0x13182a);

const BLOCK: char = '█';

/// Display colour of each piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::hex(0x00d1ff),
        PieceKind::O => Rgb::hex(0xffd84d),
        PieceKind::T => Rgb::hex(0xbf7bff),
        PieceKind::S => Rgb::hex(0x53e08a),
        PieceKind::Z => Rgb::hex(0xff6b6b),
        PieceKind::J => Rgb::hex(0x5aa0ff),
        PieceKind::L => Rgb::hex(0xffa14f),
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board + HUD layout
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell; 2 roughly squares the glyph aspect ratio.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Size of the bordered board in terminal cells
    pub fn frame_size(&self) -> (u16, u16) {
        (COLS as u16 * self.cell_w + 2, ROWS as u16 + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        if fb.width() != viewport.width || fb.height() != viewport.height {
            fb.resize(viewport.width, viewport.height);
        }
        fb.fill(' ', CellStyle::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y);
        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                if let Some(kind) = PieceKind::from_code(code) {
                    self.draw_block(fb, origin_x, origin_y, x as i8, y as i8, kind);
                }
            }
        }

        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                self.draw_block(fb, origin_x, origin_y, x, y, active.kind);
            }
        }

        self.draw_hud(fb, snap, origin_x + frame_w + 2, origin_y);

        if !snap.playable() {
            self.draw_game_over(fb, origin_x, origin_y);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let (w, h) = self.frame_size();
        let style = CellStyle::new(Rgb::new(0x4a, 0x52, 0x70), Rgb::new(0, 0, 0));

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    /// Paint one board cell; cells outside the grid (e.g. above the top) are skipped.
    fn draw_block(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, x: i8, y: i8, kind: PieceKind) {
        if x < 0 || x >= COLS as i8 || y < 0 || y >= ROWS as i8 {
            return;
        }
        let px = ox + 1 + x as u16 * self.cell_w;
        let py = oy + 1 + y as u16;
        let style = CellStyle::new(piece_color(kind), BOARD_BG);
        fb.fill_rect(px, py, self.cell_w, 1, BLOCK, style);
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        if x >= fb.width() {
            return;
        }
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let stats = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ];
        let mut row = y;
        for (name, n) in stats {
            fb.put_str(x, row, name, label);
            fb.put_str(x, row + 1, &n.to_string(), value);
            row += 3;
        }

        let help = CellStyle::new(Rgb::new(120, 120, 140), Rgb::new(0, 0, 0));
        for line in ["←→ move", "↑ rotate", "↓ soft drop", "space drop", "r restart", "q quit"] {
            fb.put_str(x, row, line, help);
            row += 1;
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, ox: u16, oy: u16) {
        let (w, h) = self.frame_size();
        let shade = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
        let mid = oy + h / 2;
        fb.fill_rect(ox + 1, mid - 1, w - 2, 3, ' ', shade);
        self.put_centered(fb, ox, w, mid - 1, "GAME OVER", shade.bold());
        self.put_centered(fb, ox, w, mid + 1, "press R to restart", shade);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, ox: u16, w: u16, y: u16, text: &str, style: CellStyle) {
        let len = text.chars().count() as u16;
        fb.put_str(ox + w.saturating_sub(len) / 2, y, text, style);
    }
}
