pub mod common;
pub mod game_scene;

use crate::scene::Scene;
use ratatui::Frame;

/// Immediate-mode entry point: draw one frame from a scene snapshot.
pub fn draw(frame: &mut Frame, scene: &Scene) {
    let area = frame.size();
    game_scene::render_game(frame, area, scene);
}
