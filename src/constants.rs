// Screen constants (pixels)
pub const SCREEN_WIDTH: i32 = 1000;
pub const SCREEN_HEIGHT: i32 = 750;

// Timing constants
pub const TICK_RATE: u32 = 60;

// Pigeon constants
pub const PLAYER_SPEED: i32 = 6;
pub const PLAYER_SPAWN_OFFSET: i32 = 120; // distance of the pigeon's top edge above the bottom edge
pub const PIGEON_WIDTH: i32 = 64;
pub const PIGEON_HEIGHT: i32 = 44;
pub const PIGEON_ANIM_FRAMES: u8 = 6;
pub const PIGEON_ANIM_COOLDOWN: u8 = 5;

// Stone constants
pub const STONE_BASE_SIZE: i32 = 200;
pub const STONE_SIZE_RATIO_MIN: f64 = 0.1;
pub const STONE_SIZE_RATIO_MAX: f64 = 0.5;
pub const STONE_SPEED: f64 = 25.0;
pub const BAND_TOP: i32 = 15;
pub const POINTS_PER_SIZE_RATIO: f64 = 10.0;

// Spawn cadence constants (ticks)
pub const SPAWN_COOLDOWN_INITIAL: u32 = 120;
pub const SPAWN_COOLDOWN_FLOOR: u32 = 30;
pub const SPAWN_COOLDOWN_STEP: u32 = 5;

// Stone cap constants
pub const STONE_CAP_INITIAL: usize = 3;
pub const STONE_CAP_MAX: usize = 10;

// Session constants
pub const LIVES_INITIAL: u32 = 3;
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 50;

// HUD constants
pub const HEART_SIZE: i32 = 32;
pub const HEART_MARGIN: i32 = 8;
pub const HUD_MARGIN: i32 = 10;
