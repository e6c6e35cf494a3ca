//! Theme constants for the four-in-a-row GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 228, 210);
pub const CELL_HOVER_INVALID: Color32 = Color32::from_rgba_premultiplied(90, 20, 20, 90);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 60, 50);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(40, 90, 200);
pub const O_MARK: Color32 = Color32::from_rgb(210, 60, 50);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 190, 40);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 200, 80);
pub const SUGGESTION: Color32 = Color32::from_rgb(120, 120, 120);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 32.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_STROKE_WIDTH: f32 = 6.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;

/// Color used for a player's marks
pub fn mark_color(stone: crate::Stone) -> Color32 {
    match stone {
        crate::Stone::O => O_MARK,
        _ => X_MARK,
    }
}

/// Same color, faded for previews
pub fn preview_color(stone: crate::Stone) -> Color32 {
    mark_color(stone).gamma_multiply(0.35)
}
