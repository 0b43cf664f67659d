//! Defaults for a new game and for board geometry.

// =============================================================================
// Game
// =============================================================================

/// Default number of square rows.
pub const DEFAULT_ROWS: usize = 6;

/// Default number of square columns.
pub const DEFAULT_COLS: usize = 6;

/// Default number of players.
pub const DEFAULT_PLAYERS: usize = 2;

/// Largest accepted number of square rows or columns.
pub const MAX_DIMENSION: usize = 256;

/// Largest accepted number of players.
pub const MAX_PLAYERS: usize = 64;

// =============================================================================
// Geometry
// =============================================================================

/// Side of the square drawing canvas, in pixels.
pub const BOARD_SIZE_PX: f64 = 600.0;

/// Edge line width as a fraction of the canvas side, divided by the row count.
pub const EDGE_WIDTH_RATIO: f64 = 0.075;

// =============================================================================
// Random playouts
// =============================================================================

/// Seed used by the demo when none is given.
pub const DEMO_SEED: u64 = 1;
