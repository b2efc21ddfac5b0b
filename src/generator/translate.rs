use super::{CLOSED, DEAD};
use crate::grid::Grid;

/// Projects the half-resolution wall buffer onto the full double-resolution
/// guide grid.
///
/// Cell meaning in the result follows coordinate parity: even/even slots are
/// unvisited nodes (0), odd/odd slots are impassable filler, and the remaining
/// slots are either walls ([`CLOSED`]) or open interstitial space ([`DEAD`])
/// depending on whether the corresponding wall edge survived the
/// spanning-tree pass.
pub fn translate_walls(walls: &Grid, height: u16, width: u16) -> Grid {
    debug_assert_eq!(walls.rows(), height - 1);
    debug_assert_eq!(walls.cols(), width - 1);

    let mut guide = Grid::new(2 * height - 1, 2 * width - 1, 0);

    // Seed every slot from parity alone.
    for x in 0..guide.rows() {
        for y in 0..guide.cols() {
            guide[(x, y)] = match (x % 2, y % 2) {
                (0, 0) => 0,
                (1, 1) => CLOSED,
                _ => DEAD,
            };
        }
    }

    // Expand each surviving wall edge into its two guide-grid wall slots. A
    // removed edge leaves both slots open as a passage.
    for x in 0..walls.rows() {
        for y in 0..walls.cols() {
            match (x % 2, y % 2) {
                (1, 1) => continue,
                (0, 0) => {
                    guide[(2 * x + 1, 2 * y + 1)] = CLOSED;
                    continue;
                }
                _ => {}
            }
            if walls[(x, y)] == CLOSED {
                continue;
            }
            if x % 2 == 0 {
                guide[(2 * x + 1, 2 * y)] = CLOSED;
                guide[(2 * x + 1, 2 * y + 2)] = CLOSED;
            } else {
                guide[(2 * x, 2 * y + 1)] = CLOSED;
                guide[(2 * x + 2, 2 * y + 1)] = CLOSED;
            }
        }
    }

    prune_dead_pockets(&mut guide);
    guide
}

/// Recodes wall remnants that no longer border anything traversable.
///
/// Filler slots stranded inside a removed edge, and junction posts whose
/// every incident edge was removed, would otherwise read as walls the
/// traversal never actually follows. The scan mutates in place in raster
/// order, so freshly recoded slots feed the checks on their later neighbors.
fn prune_dead_pockets(guide: &mut Grid) {
    if guide.rows() == 3 && guide.cols() == 3 {
        // The 2x2 maze owns a single central post and no edges at all; the
        // tour follows that post, so it must stay a wall.
        return;
    }
    for x in 1..guide.rows().saturating_sub(1) {
        for y in 1..guide.cols().saturating_sub(1) {
            if guide[(x, y)] != 0
                && guide[(x, y - 1)] == DEAD
                && guide[(x, y + 1)] == DEAD
                && guide[(x + 1, y)] == DEAD
                && guide[(x - 1, y)] == DEAD
            {
                guide[(x, y)] = DEAD;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: u16, cols: u16, values: &[i32]) -> Grid {
        assert_eq!(values.len(), rows as usize * cols as usize);
        let mut grid = Grid::new(rows, cols, 0);
        for x in 0..rows {
            for y in 0..cols {
                grid[(x, y)] = values[x as usize * cols as usize + y as usize];
            }
        }
        grid
    }

    fn assert_grid_eq(actual: &Grid, expected: &Grid) {
        assert_eq!(actual.rows(), expected.rows());
        assert_eq!(actual.cols(), expected.cols());
        for x in 0..actual.rows() {
            for y in 0..actual.cols() {
                assert_eq!(
                    actual[(x, y)],
                    expected[(x, y)],
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_two_by_two_keeps_central_post() {
        let walls = Grid::new(1, 1, 0);
        let guide = translate_walls(&walls, 2, 2);
        #[rustfmt::skip]
        let expected = grid_from(3, 3, &[
             0, -2,  0,
            -2, -1, -2,
             0, -2,  0,
        ]);
        assert_grid_eq(&guide, &expected);
    }

    #[test]
    fn test_surviving_walls_expand_and_pockets_die() {
        // A 2x2 junction lattice whose left vertical edge was removed: the
        // three surviving edges expand into a C-shaped wall, while the filler
        // inside the removed edge and the stranded central post go dead.
        #[rustfmt::skip]
        let walls = grid_from(3, 3, &[
             0,  7,  0,
            -1, -1,  9,
             0,  4,  0,
        ]);
        let guide = translate_walls(&walls, 4, 4);
        #[rustfmt::skip]
        let expected = grid_from(7, 7, &[
             0, -2,  0, -2,  0, -2,  0,
            -2, -1, -1, -1, -1, -1, -2,
             0, -2,  0, -2,  0, -1,  0,
            -2, -2, -2, -2, -2, -1, -2,
             0, -2,  0, -2,  0, -1,  0,
            -2, -1, -1, -1, -1, -1, -2,
             0, -2,  0, -2,  0, -2,  0,
        ]);
        assert_grid_eq(&guide, &expected);
    }

    #[test]
    fn test_full_wall_row_for_path_lattice() {
        // H=2, W=4: a 1x3 buffer where no edge could be removed projects to an
        // unbroken wall bar between the two node rows.
        #[rustfmt::skip]
        let walls = grid_from(1, 3, &[0, 5, 0]);
        let guide = translate_walls(&walls, 2, 4);
        #[rustfmt::skip]
        let expected = grid_from(3, 7, &[
             0, -2,  0, -2,  0, -2,  0,
            -2, -1, -1, -1, -1, -1, -2,
             0, -2,  0, -2,  0, -2,  0,
        ]);
        assert_grid_eq(&guide, &expected);
    }
}
