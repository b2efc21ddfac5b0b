use super::{CLOSED, connectivity::can_reach_home};
use crate::grid::Grid;

/// Thins the fully-weighted wall buffer down to a spanning tree of walls.
///
/// Junctions sit at even/even slots and candidate edges between them carry
/// random weights. Each junction in raster order (skipping the final one)
/// nominates the heavier of its down and right edges and tentatively removes
/// it. The removal stands only if both junctions flanking the removed edge can
/// still reach the home junction `(0, 0)` through the remaining walls;
/// otherwise the edge gets its weight back. An edge whose far junction falls
/// outside the buffer always fails the check, so dangling edges are never
/// removed.
pub fn build_spanning_tree(walls: &mut Grid) {
    let rows = walls.rows();
    let cols = walls.cols();

    let mut x = 0;
    while x < rows {
        let mut y = 0;
        while y < cols {
            if x == rows - 1 && y == cols - 1 {
                break;
            }

            // The down edge is nominated when it is strictly heavier than the
            // right edge, or when no right edge exists.
            let down_wins =
                x + 1 < rows && (y + 1 >= cols || walls[(x + 1, y)] > walls[(x, y + 1)]);
            let (ex, ey) = if down_wins { (x + 1, y) } else { (x, y + 1) };

            let prev = walls[(ex, ey)];
            walls[(ex, ey)] = CLOSED;

            let (ex, ey) = (i32::from(ex), i32::from(ey));
            let connected = if ex % 2 == 1 {
                // Vertical edge: junctions above and below.
                can_reach_home(walls, (ex + 1, ey)) && can_reach_home(walls, (ex - 1, ey))
            } else {
                can_reach_home(walls, (ex, ey + 1)) && can_reach_home(walls, (ex, ey - 1))
            };

            if !connected {
                walls[(ex as u16, ey as u16)] = prev;
            }

            y += 2;
        }
        x += 2;
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::super::weights::populate_edges;
    use super::*;

    fn built_walls(rows: u16, cols: u16, seed: u64) -> Grid {
        let mut walls = Grid::new(rows, cols, 0);
        populate_edges(&mut walls, &mut StdRng::seed_from_u64(seed));
        build_spanning_tree(&mut walls);
        walls
    }

    fn removed_edges(walls: &Grid) -> usize {
        let mut count = 0;
        for x in 0..walls.rows() {
            for y in 0..walls.cols() {
                if (x % 2 == 1) ^ (y % 2 == 1) && walls[(x, y)] == CLOSED {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_every_junction_stays_connected() {
        for seed in 0..8 {
            let walls = built_walls(5, 7, seed);
            for x in (0..walls.rows()).step_by(2) {
                for y in (0..walls.cols()).step_by(2) {
                    assert!(
                        can_reach_home(&walls, (i32::from(x), i32::from(y))),
                        "junction ({x}, {y}) severed with seed {seed}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_removal_count_leaves_a_tree() {
        // An m x n junction lattice holds m*(n-1) + n*(m-1) candidate edges;
        // a spanning tree keeps m*n - 1 of them, so exactly (m-1)*(n-1)
        // removals must stand.
        for (rows, cols, m, n) in [(3u16, 3u16, 2usize, 2usize), (5, 5, 3, 3), (5, 7, 3, 4)] {
            for seed in 0..8 {
                let walls = built_walls(rows, cols, seed);
                assert_eq!(
                    removed_edges(&walls),
                    (m - 1) * (n - 1),
                    "{rows}x{cols} buffer with seed {seed}"
                );
            }
        }
    }

    #[test]
    fn test_junction_values_untouched() {
        let walls = built_walls(5, 5, 1);
        for x in (0..walls.rows()).step_by(2) {
            for y in (0..walls.cols()).step_by(2) {
                assert_eq!(walls[(x, y)], 0);
            }
        }
    }

    #[test]
    fn test_dangling_edges_survive() {
        // A 1 x n lattice is a path of junctions; removing any edge would
        // sever it, so every candidate keeps its weight.
        let walls = built_walls(1, 7, 9);
        for y in (1..walls.cols()).step_by(2) {
            assert!(walls[(0, y)] > 0, "edge (0, {y}) was removed");
        }
    }
}
