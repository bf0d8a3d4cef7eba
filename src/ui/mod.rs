pub mod game_common;
pub mod pigeon_scene;

use crate::game::Session;
use ratatui::Frame;

/// Draw one frame of the game.
pub fn draw_ui(frame: &mut Frame, session: &Session) {
    let area = frame.size();
    pigeon_scene::render_pigeon_scene(frame, area, session);
}
