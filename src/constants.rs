// --- File: constants.rs ---
// --- Global Simulation Constants ---
pub const BACKGROUND_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

pub const WINDOW_WIDTH: u32 = 1024;
pub const WINDOW_HEIGHT: u32 = 1024;

pub const DEFAULT_GRID_WIDTH: i32 = 128;
pub const DEFAULT_GRID_HEIGHT: i32 = 128;
pub const DEFAULT_ZOMBIE_COUNT: i32 = 60;
pub const DEFAULT_SURVIVOR_COUNT: i32 = 30;
pub const DEFAULT_WALL_COUNT: i32 = 5;
pub const DEFAULT_WALL_THICKNESS: i32 = 3;

// Seconds between generations. Up/Down halve or double it within these bounds.
pub const DEFAULT_TICK_INTERVAL_SECS: f32 = 0.25;
pub const MIN_TICK_INTERVAL_SECS: f32 = 1.0 / 120.0;
pub const MAX_TICK_INTERVAL_SECS: f32 = 4.0;
pub const TICK_INTERVAL_ADJUST_FACTOR: f32 = 2.0;

// Caps catch-up ticks after a long stall (window drag, breakpoint).
pub const MAX_TICKS_PER_FRAME: u32 = 8;

pub const FPS_UPDATE_INTERVAL_SECS: f64 = 1.0;
pub const CENSUS_LOG_INTERVAL_GENERATIONS: u64 = 100;

/// Fraction of each cell quad left as a gap so the grid lines show.
pub const CELL_GAP_FRACTION: f32 = 0.08;

pub const SEED_ENV_VAR: &str = "ZOMBIESIM_SEED";
// --- End of File: constants.rs ---
