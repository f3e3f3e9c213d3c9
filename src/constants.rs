// Field and track constants
pub const NUM_HORSES: usize = 6;
pub const TRACK_LENGTH: f64 = 50.0;
pub const MAX_STEP: f64 = 1.5;

// Race pacing constants
pub const TICK_INTERVAL_MS: u64 = 100;
pub const PRE_RACE_PAUSE_MS: u64 = 1000;

// Odds constants
pub const STRENGTH_MIN: f64 = 1.0;
pub const STRENGTH_MAX: f64 = 5.0;

// Session constants
pub const STARTING_BALANCE: f64 = 1000.0;

// One glyph per saddle, reused by the lobby, the track rows, and the results
pub const HORSE_GLYPHS: [&str; NUM_HORSES] = ["🐎", "🏇", "🐴", "🐎", "🏇", "🐴"];
