//! Board rendering for the four-in-a-row GUI

use crate::rules::{is_valid_move, WIN_LENGTH};
use crate::{Board, Pos, Stone, COLS, ROWS};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view needs to draw one frame
pub struct BoardSnapshot<'a> {
    pub board: &'a Board,
    pub current_turn: Stone,
    pub last_move: Option<Pos>,
    pub suggested_move: Option<Pos>,
    pub winning_line: Option<[Pos; WIN_LENGTH]>,
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(&mut self, ui: &mut egui::Ui, snap: &BoardSnapshot<'_>) -> Option<Pos> {
        let available = ui.available_size();

        // Fit the ROWS x COLS grid of square cells
        let cell_w = (available.x - 2.0 * BOARD_MARGIN - 20.0) / COLS as f32;
        let cell_h = (available.y - 2.0 * BOARD_MARGIN - 20.0) / ROWS as f32;
        self.cell_size = cell_w.min(cell_h).max(16.0);

        let size = Vec2::new(
            COLS as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
            ROWS as f32 * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_coordinates(&painter);

        for (pos, stone) in snap.board.cells() {
            if stone != Stone::Empty {
                self.draw_mark(&painter, pos, mark_color(stone), stone);
            }
        }

        if let Some(pos) = snap.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = snap.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if let Some(pos) = snap.suggested_move {
            self.draw_suggestion(&painter, pos);
        }

        let mut clicked_pos = None;

        if snap.accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    let is_valid = is_valid_move(snap.board, pos, snap.current_turn);
                    if is_valid {
                        let color = preview_color(snap.current_turn);
                        self.draw_mark(&painter, pos, color, snap.current_turn);
                    } else if snap.board.is_empty(pos) {
                        painter.rect_filled(self.cell_rect(pos).shrink(2.0), 0.0, CELL_HOVER_INVALID);
                    }

                    if response.clicked() && is_valid {
                        clicked_pos = Some(pos);
                    }
                }
            }
        }

        clicked_pos
    }

    fn grid_origin(&self) -> Pos2 {
        self.board_rect.min + Vec2::splat(BOARD_MARGIN)
    }

    /// Draw the cell borders
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.grid_origin();
        let width = COLS as f32 * self.cell_size;
        let height = ROWS as f32 * self.cell_size;

        for col in 0..=COLS {
            let x = origin.x + col as f32 * self.cell_size;
            painter.line_segment([Pos2::new(x, origin.y), Pos2::new(x, origin.y + height)], stroke);
        }
        for row in 0..=ROWS {
            let y = origin.y + row as f32 * self.cell_size;
            painter.line_segment([Pos2::new(origin.x, y), Pos2::new(origin.x + width, y)], stroke);
        }
    }

    /// Draw 1-based row and column numbers
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(14.0);
        let origin = self.grid_origin();

        for col in 0..COLS {
            let x = origin.x + (col as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(x, self.board_rect.min.y + BOARD_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, col + 1, font.clone(), GRID_LINE);
        }

        for row in 0..ROWS {
            let y = origin.y + (row as f32 + 0.5) * self.cell_size;
            let pos = Pos2::new(self.board_rect.min.x + BOARD_MARGIN * 0.5, y);
            painter.text(pos, egui::Align2::CENTER_CENTER, row + 1, font.clone(), GRID_LINE);
        }
    }

    /// Draw an X as two strokes or an O as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, color: Color32, stone: Stone) {
        let center = self.board_to_screen(pos);
        let r = self.cell_size * MARK_RATIO;
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        match stone {
            Stone::X => {
                painter.line_segment([center + Vec2::new(-r, -r), center + Vec2::new(r, r)], stroke);
                painter.line_segment([center + Vec2::new(-r, r), center + Vec2::new(r, -r)], stroke);
            }
            Stone::O => {
                painter.circle_stroke(center, r, stroke);
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(3.0);
        painter.rect_stroke(
            rect,
            CornerRadius::same(4),
            Stroke::new(3.0, LAST_MOVE_MARKER),
            egui::StrokeKind::Inside,
        );
    }

    /// Strike through the four winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; WIN_LENGTH]) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[WIN_LENGTH - 1]);
        painter.line_segment([start, end], stroke);

        for pos in line {
            let rect = self.cell_rect(*pos).shrink(3.0);
            painter.rect_stroke(rect, CornerRadius::same(4), Stroke::new(3.0, WIN_HIGHLIGHT), egui::StrokeKind::Inside);
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Pos) {
        painter.text(
            self.board_to_screen(pos),
            egui::Align2::CENTER_CENTER,
            "?",
            egui::FontId::proportional(self.cell_size * 0.5),
            SUGGESTION,
        );
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let origin = self.grid_origin();
        let min = Pos2::new(
            origin.x + pos.col as f32 * self.cell_size,
            origin.y + pos.row as f32 * self.cell_size,
        );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_origin();
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
