//! Terminal rendering of the session's draw list.
//!
//! The core works in screen pixels; each terminal cell covers a block of
//! pixels. Sprites are stamped into a cell buffer by their footprint and
//! the buffer is written row-by-row as Paragraph widgets.

use super::game_common::{
    create_game_layout, render_game_over_banner, render_info_panel_frame, render_status_bar,
};
use crate::constants::{HEART_SIZE, PIGEON_HEIGHT, PIGEON_WIDTH};
use crate::game::{DifficultyState, DrawCommand, Facing, Session, SpriteId, TextKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(28, 34, 52);
const STONE_DARK: Color = Color::Rgb(110, 100, 92);
const STONE_LIGHT: Color = Color::Rgb(160, 150, 140);
const PIGEON_BODY: Color = Color::Rgb(170, 175, 195);
const PIGEON_WING: Color = Color::Rgb(120, 125, 150);
const HEART: Color = Color::Rgb(220, 50, 60);

/// Cell in the render buffer with foreground and background colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Maps screen pixels onto a `cols` x `rows` cell grid.
#[derive(Debug, Clone, Copy)]
struct Projection {
    screen_w: i32,
    screen_h: i32,
    cols: i32,
    rows: i32,
}

impl Projection {
    fn col(&self, x: i32) -> i32 {
        (x as i64 * self.cols as i64).div_euclid(self.screen_w as i64) as i32
    }

    fn row(&self, y: i32) -> i32 {
        (y as i64 * self.rows as i64).div_euclid(self.screen_h as i64) as i32
    }

    /// Cells covered by a pixel box, at least one cell each way.
    fn footprint(&self, x: i32, y: i32, w: i32, h: i32) -> (i32, i32, i32, i32) {
        let c0 = self.col(x);
        let r0 = self.row(y);
        let c1 = self.col(x + w - 1).max(c0);
        let r1 = self.row(y + h - 1).max(r0);
        (c0, r0, c1, r1)
    }
}

struct Buffer {
    cells: Vec<Vec<Cell>>,
    cols: i32,
    rows: i32,
}

impl Buffer {
    fn set(&mut self, col: i32, row: i32, ch: char, fg: Color) {
        if col < 0 || row < 0 || col >= self.cols || row >= self.rows {
            return;
        }
        let cell = &mut self.cells[row as usize][col as usize];
        cell.ch = ch;
        cell.fg = fg;
    }

    fn fill(&mut self, bg: Color) {
        for cell in self.cells.iter_mut().flatten() {
            *cell = Cell {
                ch: ' ',
                fg: Color::Reset,
                bg,
            };
        }
    }
}

/// Stamp a draw list into a `cols` x `rows` cell buffer. Overlay text is
/// left to the caller.
pub fn rasterize(
    commands: &[DrawCommand],
    screen: (i32, i32),
    cols: u16,
    rows: u16,
) -> Vec<Vec<Cell>> {
    let mut buf = Buffer {
        cells: vec![vec![Cell::default(); cols as usize]; rows as usize],
        cols: cols as i32,
        rows: rows as i32,
    };
    if cols == 0 || rows == 0 {
        return buf.cells;
    }
    let proj = Projection {
        screen_w: screen.0.max(1),
        screen_h: screen.1.max(1),
        cols: cols as i32,
        rows: rows as i32,
    };

    for command in commands {
        match command {
            DrawCommand::Sprite { sprite, x, y } => stamp_sprite(&mut buf, &proj, *sprite, *x, *y),
            DrawCommand::Text {
                text,
                x,
                y,
                kind: TextKind::Score,
            } => {
                let (col, row) = (proj.col(*x), proj.row(*y));
                for (i, ch) in text.chars().enumerate() {
                    buf.set(col + i as i32, row, ch, Color::White);
                }
            }
            DrawCommand::Text { .. } => {}
        }
    }
    buf.cells
}

fn stamp_sprite(buf: &mut Buffer, proj: &Projection, sprite: SpriteId, x: i32, y: i32) {
    match sprite {
        SpriteId::Background => buf.fill(SKY),
        SpriteId::Stone { size } => {
            let (c0, r0, c1, r1) = proj.footprint(x, y, size, size);
            for row in r0..=r1 {
                for col in c0..=c1 {
                    let ch = if c0 == c1 && r0 == r1 { '●' } else { '█' };
                    let fg = if row == r0 { STONE_LIGHT } else { STONE_DARK };
                    buf.set(col, row, ch, fg);
                }
            }
        }
        SpriteId::Pigeon { frame, facing } => {
            let (c0, r0, c1, r1) = proj.footprint(x, y, PIGEON_WIDTH, PIGEON_HEIGHT);
            for row in r0..=r1 {
                for col in c0..=c1 {
                    buf.set(col, row, '█', PIGEON_BODY);
                }
            }
            // Wing flaps up for the first half of the cycle
            let wing_row = if frame < 3 { r0 } else { r1 };
            let wing_col = (c0 + c1) / 2;
            buf.set(wing_col, wing_row, '▓', PIGEON_WING);
            match facing {
                Facing::Right => buf.set(c1, r0, '>', PIGEON_BODY),
                Facing::Left => buf.set(c0, r0, '<', PIGEON_BODY),
            }
        }
        SpriteId::Heart => {
            let (c0, r0, _, _) = proj.footprint(x, y, HEART_SIZE, HEART_SIZE);
            buf.set(c0, r0, '♥', HEART);
        }
    }
}

/// Render the whole game screen.
pub fn render_pigeon_scene(frame: &mut Frame, area: Rect, session: &Session) {
    let layout = create_game_layout(frame, area, " Pigeon Dodge ", Color::LightCyan, 10, 24);

    let commands = session.draw_list();
    render_play_field(frame, layout.content, session, &commands);
    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);

    let overlay: Vec<String> = commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Text {
                text,
                kind: TextKind::Overlay,
                ..
            } => Some(text.clone()),
            _ => None,
        })
        .collect();
    if let Some((title, rest)) = overlay.split_first() {
        render_game_over_banner(frame, layout.content, title, rest);
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, session: &Session, commands: &[DrawCommand]) {
    if area.height < 2 || area.width < 10 {
        return;
    }
    let screen = (session.config.screen_width, session.config.screen_height);
    let buffer = rasterize(commands, screen, area.width, area.height);

    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &Session) {
    if session.game_over {
        render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[Space]", "Play again"), ("[Esc]", "Quit")],
        );
        return;
    }
    render_status_bar(
        frame,
        area,
        "Dodge!",
        Color::LightCyan,
        &[
            ("[Arrows/WASD]", "Fly"),
            ("[R]", "Restart"),
            ("[Esc]", "Quit"),
        ],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_info_panel_frame(frame, area);
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);
    let difficulty = &session.difficulty;

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Lives: ", label),
            Span::styled("♥".repeat(session.lives as usize), Style::default().fg(HEART)),
        ]),
        Line::from(vec![
            Span::styled("Points: ", label),
            Span::styled(
                session.points.to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Stones: ", label),
            Span::styled(
                format!("{}/{}", session.live_stone_count(), difficulty.stone_cap),
                value,
            ),
        ]),
        Line::from(vec![
            Span::styled("Spawn every: ", label),
            Span::styled(format!("{} ticks", difficulty.cooldown_ceiling), value),
        ]),
        Line::from(vec![
            Span::styled("Difficulty: ", label),
            Span::styled(difficulty_label(difficulty), value),
        ]),
        Line::from(vec![
            Span::styled("Ticks: ", label),
            Span::styled(session.tick_count.to_string(), value),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn difficulty_label(difficulty: &DifficultyState) -> &'static str {
    if difficulty.at_max() {
        "MAX"
    } else {
        "ramping"
    }
}
