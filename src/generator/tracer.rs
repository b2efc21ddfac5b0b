use super::{CLOSED, GenerateError};
use crate::grid::{Direction, Grid};

/// Steps allowed per guide-grid slot before the walk is declared stuck. The
/// complete boundary walk touches each traversable slot a handful of times,
/// so a healthy run never comes close to this budget.
const STEP_BUDGET_FACTOR: u64 = 10;

/// Walks the guide grid with a wall kept on the right-hand side, stamping
/// every node with its 1-based visitation number.
///
/// Each step expects a wall one slot away in the direction 90 degrees
/// clockwise of the current facing. Overshooting the grid or standing on a
/// wall backs the walker out one step; a missing expected wall (anywhere but
/// a grid corner) marks it lost. A lost walker turns toward the slot where
/// the wall was expected, or doubles back when that slot is itself a wall.
///
/// Because the guide encodes a connected spanning tree of walls, the walk
/// traces the tree's full boundary and stamps every node exactly once,
/// closing into a Hamiltonian cycle. Returns the stamped positions in
/// visitation order, or [`GenerateError::CycleConstruction`] if the step
/// budget runs out first.
pub fn trace_cycle(guide: &mut Grid) -> Result<Vec<(u16, u16)>, GenerateError> {
    let rows = i32::from(guide.rows());
    let cols = i32::from(guide.cols());
    let target = u32::from(guide.rows().div_ceil(2)) * u32::from(guide.cols().div_ceil(2));
    let mut order = vec![(0u16, 0u16); target as usize];

    let (mut x, mut y) = (0i32, 0i32);
    let mut dir = Direction::Right;
    let mut next = 1u32;

    let step_budget =
        STEP_BUDGET_FACTOR * u64::from(guide.rows()) * u64::from(guide.cols()) + 20;
    let mut steps = 0u64;

    while next <= target {
        steps += 1;
        if steps > step_budget {
            tracing::debug!(
                "walk exhausted its step budget after stamping {} of {} nodes",
                next - 1,
                target
            );
            return Err(GenerateError::CycleConstruction {
                visited: next - 1,
                expected: target,
            });
        }

        // The slot where a wall should sit for right-hand following.
        let (mut i, mut j) = dir.complement().delta();

        let lost = if !guide.contains(x + i, y + j) || guide.get(x, y) == Some(CLOSED) {
            // Overshot the boundary or stepped onto a wall: back out one step.
            (i, j) = dir.delta();
            x -= i;
            y -= j;
            true
        } else {
            let corner = (x == 0 || x == rows - 1) && (y == 0 || y == cols - 1);
            !corner && guide.get(x + i, y + j) != Some(CLOSED)
        };

        if guide.get(x, y) == Some(0) {
            order[(next - 1) as usize] = (x as u16, y as u16);
            guide[(x as u16, y as u16)] = next as i32;
            next += 1;
        }

        if lost {
            // A wall in the probed slot means the walker was blocked: double
            // back. Otherwise turn toward where the wall went missing.
            dir = if guide.get(x + i, y + j) == Some(CLOSED) {
                dir.complement().invert()
            } else {
                dir.complement()
            };
        }

        let (di, dj) = dir.delta();
        x += di;
        y += dj;
    }

    Ok(order)
}
