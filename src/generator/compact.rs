use crate::grid::Grid;

/// Down-samples the double-resolution guide grid to the compact grid of
/// visitation numbers, keeping only the node slots at even/even coordinates.
pub fn compact_grid(guide: &Grid) -> Grid {
    let mut compact = Grid::new(guide.rows().div_ceil(2), guide.cols().div_ceil(2), 0);
    for x in (0..guide.rows()).step_by(2) {
        for y in (0..guide.cols()).step_by(2) {
            compact[(x / 2, y / 2)] = guide[(x, y)];
        }
    }
    compact
}
