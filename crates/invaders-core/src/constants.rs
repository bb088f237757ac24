//! Gameplay constants and tuning parameters.

/// Frame rate the headless game loop runs at (Hz).
pub const FRAME_RATE: u32 = 60;

/// Seconds per frame at the nominal frame rate.
pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

// --- Player ---

/// Default mouse sensitivity (x, y).
pub const PLAYER_MOUSE_SENSITIVITY: [f32; 2] = [0.5, 0.3];

/// Default per-axis move speed. `x` drives W/S, `y` drives A/D.
pub const PLAYER_MOVE_SPEED: f32 = 2.0;

/// Speed multiplier while left shift is held, as constructed.
pub const PLAYER_SHIFT_MULTIPLIER: f32 = 1.5;

/// Shift multiplier restored when a persisted record has none.
/// Differs from [`PLAYER_SHIFT_MULTIPLIER`]; kept for save compatibility.
pub const PERSISTED_SHIFT_MULTIPLIER_DEFAULT: f32 = 2.0;

/// Facing (Euler degrees about z) for each movement key.
pub const FACING_UP_DEG: f32 = -90.0;
pub const FACING_DOWN_DEG: f32 = 90.0;
pub const FACING_LEFT_DEG: f32 = 0.0;
pub const FACING_RIGHT_DEG: f32 = 180.0;

// --- Enemies ---

/// Default (unused) move speed carried by enemy records.
pub const ENEMY_RECORD_MOVE_SPEED: f32 = 4.0;

/// Rank-and-file enemy: seconds between direction flips.
pub const ENEMY_PATROL_PERIOD_SECS: f32 = 40.0;
/// Rank-and-file enemy: horizontal speed (units/s).
pub const ENEMY_SWEEP_SPEED: f32 = 0.4;
/// Rank-and-file enemy: descent speed (units/s).
pub const ENEMY_DESCENT_SPEED: f32 = 0.105;

/// Top ship: seconds between direction flips.
pub const TOP_ENEMY_PATROL_PERIOD_SECS: f32 = 5.0;
/// Top ship: horizontal speed (units/s).
pub const TOP_ENEMY_SWEEP_SPEED: f32 = 3.8;

/// Enemies at or below this y have invaded.
pub const LOSS_LINE_Y: f32 = -9.0;

/// Hit metric threshold between an enemy and the bolt.
pub const HIT_RADIUS: f32 = 1.0;

/// Weight applied to the squared z-difference in the hit metric.
pub const HIT_Z_WEIGHT: f32 = 2.0;

// --- Bolt ---

/// Bolt travel speed along +y (units/s).
pub const BOLT_SPEED: f32 = 20.0;

/// Seconds a fired bolt stays live, and the refire cooldown.
pub const BOLT_COOLDOWN_SECS: f32 = 1.5;

/// Height the idle bolt rides at beneath the player.
pub const BOLT_IDLE_Z: f32 = 0.6;

/// Uniform scale of the parked bolt.
pub const BOLT_IDLE_SCALE: f32 = 0.01;

/// Uniform scale of the bolt in flight.
pub const BOLT_FIRED_SCALE: f32 = 0.3;

// --- Scene layout ---

/// Number of decorative lights scattered over the arena.
pub const SCENE_LIGHT_COUNT: usize = 50;

/// Radius of the disk the decorative lights are scattered on.
pub const SCENE_LIGHT_DISK_RADIUS: f32 = 25.0;

/// Player (and parked bolt) spawn point.
pub const PLAYER_SPAWN: [f32; 3] = [0.0, -11.0, 1.0];

/// Wall x offset from the arena centre.
pub const WALL_OFFSET_X: f32 = 27.0;

/// Enemy grid columns (x) and rows (y).
pub const ENEMY_COLUMNS: [f32; 5] = [-8.0, -4.0, 0.0, 4.0, 8.0];
pub const ENEMY_ROWS: [f32; 3] = [0.0, 4.0, 8.0];

/// Top ship spawn point.
pub const TOP_SHIP_SPAWN: [f32; 3] = [9.0, 12.0, 1.0];

/// Camera spawn point.
pub const CAMERA_SPAWN: [f32; 3] = [0.0, 0.0, 15.0];

/// Version written into scene files.
pub const SCENE_FILE_VERSION: u32 = 1;
