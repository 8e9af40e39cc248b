// Playing field (pixels, top-down)
pub const FIELD_WIDTH: i32 = 500;
pub const FIELD_HEIGHT: i32 = 500;

// Bird
pub const BIRD_SIZE: i32 = 20;
pub const BIG_BIRD_SIZE: i32 = 50;
pub const BIRD_LEFT: i32 = 0; // fixed horizontal slot
pub const INITIAL_BIRD_TOP: i32 = 250;
pub const GRAVITY: i32 = 8;
pub const BIG_BIRD_GRAVITY: i32 = 6;
pub const JUMP_HEIGHT: i32 = 70;

// Obstacle pair
pub const OBSTACLE_WIDTH: i32 = 50;
pub const OBSTACLE_GAP: i32 = 150;
pub const INITIAL_GAP_TOP: i32 = 50;
pub const HORIZONTAL_SPEED: i32 = 5;

// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 24;
pub const MAX_TICK_LAG_MS: u64 = 100;
pub const IDLE_WAIT_MS: u64 = 500;

// Files
pub const APP_NAME: &str = "flapper";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "flapper.log";
