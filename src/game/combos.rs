//! Winning-combination geometry

/// A board coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// A winning combination: N coordinates that end the game when they all
/// hold the same non-empty label.
pub type Combo = Vec<Coord>;

/// Compute the winning combinations for an N-by-N board.
///
/// The result order is fixed and observable: N rows, then N columns,
/// then the two diagonals. Win detection scans in this order and keeps
/// the first completed combination, so simultaneous completions resolve
/// by this order rather than by any game rule.
pub fn winning_combos(size: usize) -> Vec<Combo> {
    let mut combos = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        combos.push((0..size).map(|col| (row, col)).collect());
    }
    for col in 0..size {
        combos.push((0..size).map(|row| (row, col)).collect());
    }
    combos.push((0..size).map(|i| (i, i)).collect());
    combos.push((0..size).map(|i| (i, size - 1 - i)).collect());

    combos
}
