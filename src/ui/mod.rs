pub mod layout;
mod overlays;
pub mod picture;
mod quiz;

use crate::app::{App, Screen};
use ratatui::Frame;

pub use layout::{
    calculate_card_rows, calculate_quiz_chunks, centered_rect, control_buttons, hint_done_button,
    overlay_area,
};
pub use overlays::draw_overlay;
pub use picture::ImageCache;
pub use quiz::{draw_header, draw_quiz, draw_status};

/// Render the whole screen for the current state.
pub fn draw(f: &mut Frame, app: &App, images: &mut ImageCache) {
    match app.screen() {
        Screen::Loading | Screen::Empty => draw_status(f, app),
        Screen::Quiz => draw_quiz(f, app),
    }
    draw_overlay(f, app, images);
}
