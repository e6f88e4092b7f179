//! Block geometry and the round-constant schedule.

/// Bytes per cipher block.
pub const BLOCK_LEN: usize = 16;

/// Rounds applied to each block.
pub const N_ROUNDS: usize = 8;

/// Rows in the state matrix.
pub const N_ROWS: usize = 8;

/// Bit columns in the state matrix.
pub const N_COLS: usize = 16;

/// Per-row round constants. Row `i` receives `RC[i].rotate_left(2 * r)` at
/// round `r`.
pub const RC: [u16; N_ROWS] = [
    0x8000, 0x2000, 0x0800, 0x0200, 0x0080, 0x0020, 0x0008, 0x0002,
];
