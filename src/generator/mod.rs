use std::fmt;

use rand::{SeedableRng, rngs::StdRng};

use crate::grid::Grid;

mod compact;
mod connectivity;
mod spanning;
mod tracer;
mod translate;
mod weights;

/// Marker for a decided slot: a removed candidate edge in the half-resolution
/// wall buffer, or an impassable wall cell in the double-resolution guide grid.
pub const CLOSED: i32 = -1;
/// Marker for interstitial guide-grid cells the traversal never needs to enter.
pub const DEAD: i32 = -2;

/// Largest accepted height or width. Keeps the doubled buffer coordinates
/// inside the grid container's u16 space with plenty of headroom.
pub const MAX_DIMENSION: u16 = 4096;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// The outcome of one generation run.
#[derive(Debug)]
pub struct Generation {
    /// H x W grid of 1-based visitation numbers.
    pub numbered: Grid,
    /// The full double-resolution guide grid with nodes stamped in visitation
    /// order, kept for debug rendering.
    pub guide: Grid,
    /// Compact `(row, col)` cell coordinates in the order the cycle visits them.
    pub order: Vec<(u16, u16)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// Height or width is zero or exceeds [`MAX_DIMENSION`].
    InvalidDimension { height: u16, width: u16 },
    /// The wall-following traversal failed to number every cell.
    CycleConstruction { visited: u32, expected: u32 },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::InvalidDimension { height, width } => {
                write!(
                    f,
                    "invalid dimensions {}x{}: height and width must be between 1 and {}",
                    width, height, MAX_DIMENSION
                )
            }
            GenerateError::CycleConstruction { visited, expected } => {
                write!(
                    f,
                    "cycle construction failed: visited {} of {} cells",
                    visited, expected
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// Generates a Hamiltonian cycle over a `height` x `width` grid of cells.
///
/// Returns the numbered grid together with the ordered visitation sequence.
/// The run is a pure function of `(height, width, seed)`: passing the same
/// seed reproduces the same cycle, while `None` draws a fresh seed from the
/// operating system.
///
/// A cycle is constructible when both dimensions are even (or for the
/// degenerate 1x1 grid); other inputs report
/// [`GenerateError::CycleConstruction`] once the traversal's step budget is
/// exhausted.
pub fn generate(
    height: u16,
    width: u16,
    seed: Option<u64>,
) -> Result<Generation, GenerateError> {
    if height == 0 || width == 0 || height > MAX_DIMENSION || width > MAX_DIMENSION {
        return Err(GenerateError::InvalidDimension { height, width });
    }
    if height == 1 && width == 1 {
        // A single cell is its own one-element cycle.
        return Ok(Generation {
            numbered: Grid::new(1, 1, 1),
            guide: Grid::new(1, 1, 1),
            order: vec![(0, 0)],
        });
    }

    let mut rng = get_rng(seed);

    let mut walls = Grid::new(height - 1, width - 1, 0);
    tracing::info!("Populating candidate edges");
    weights::populate_edges(&mut walls, &mut rng);
    tracing::info!("Generating spanning tree");
    spanning::build_spanning_tree(&mut walls);

    tracing::info!("Finalizing guide grid");
    let mut guide = translate::translate_walls(&walls, height, width);

    tracing::info!("Tracing pathway");
    let order = tracer::trace_cycle(&mut guide)?;

    let numbered = compact::compact_grid(&guide);
    let order = order.into_iter().map(|(x, y)| (x / 2, y / 2)).collect();
    Ok(Generation {
        numbered,
        guide,
        order,
    })
}
