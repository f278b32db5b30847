//! Track module - procedurally generated lane of solid cells and gaps
//!
//! A track is generated in a single forward pass: cell 0 is solid, a cell after a gap
//! is solid, and every other cell is a coin flip. Two gaps are therefore never adjacent,
//! which keeps every track crossable with jumps of at most two cells.

use thiserror::Error;

use crate::rng::TrackRng;
use crate::types::{CellType, Vec3, BLOCK_OFFSET_Y};

/// Reasons an explicit cell sequence is not a valid track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("track must contain at least one cell")]
    Empty,
    #[error("track must start on a solid cell")]
    StartsWithGap,
    #[error("gaps at {} and {index} are adjacent", .index - 1)]
    AdjacentGaps { index: usize },
}

/// Immutable sequence of cells for one session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Track {
    cells: Vec<CellType>,
}

impl Track {
    /// Generate a track of `length` cells.
    ///
    /// A `length` of 0 is clamped to 1 so a session always has ground to stand on.
    pub fn generate<R: TrackRng + ?Sized>(length: usize, rng: &mut R) -> Self {
        let length = if length == 0 {
            tracing::warn!("track length 0 requested, clamping to 1");
            1
        } else {
            length
        };

        let mut cells = Vec::with_capacity(length);
        cells.push(CellType::Solid);

        for i in 1..length {
            let cell = if cells[i - 1].is_gap() {
                CellType::Solid
            } else if rng.coin_flip() {
                CellType::Solid
            } else {
                CellType::Gap
            };
            cells.push(cell);
        }

        let track = Self { cells };
        debug_assert!(track.is_well_formed());
        track
    }

    /// Build a track from explicit cells, validating both invariants.
    pub fn from_cells(cells: Vec<CellType>) -> Result<Self, TrackError> {
        match cells.first() {
            None => return Err(TrackError::Empty),
            Some(CellType::Gap) => return Err(TrackError::StartsWithGap),
            Some(CellType::Solid) => {}
        }

        if let Some(index) = first_adjacent_gap(&cells) {
            return Err(TrackError::AdjacentGaps { index });
        }

        Ok(Self { cells })
    }

    /// An all-solid track of `length` cells (clamped to at least 1).
    pub fn solid(length: usize) -> Self {
        Self {
            cells: vec![CellType::Solid; length.max(1)],
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A track always holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<CellType> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    pub fn gap_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_gap()).count()
    }

    /// Check the start-on-solid and no-adjacent-gaps invariants.
    pub fn is_well_formed(&self) -> bool {
        matches!(self.cells.first(), Some(CellType::Solid))
            && first_adjacent_gap(&self.cells).is_none()
    }

    /// Indices of solid cells, in track order.
    pub fn solid_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_solid())
            .map(|(i, _)| i)
    }

    /// World positions of the visual blocks: one per solid cell, none for gaps.
    pub fn block_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.solid_indices()
            .map(|i| Vec3::new(i as f32, BLOCK_OFFSET_Y, 0.0))
    }
}

fn first_adjacent_gap(cells: &[CellType]) -> Option<usize> {
    cells
        .windows(2)
        .position(|w| w[0].is_gap() && w[1].is_gap())
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    /// Always answers the same coin flip.
    struct ConstRng(u32);

    impl TrackRng for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_generate_length() {
        let mut rng = SimpleRng::new(1);
        assert_eq!(Track::generate(50, &mut rng).len(), 50);
        assert_eq!(Track::generate(1, &mut rng).len(), 1);
    }

    #[test]
    fn test_generate_zero_length_clamps_to_one() {
        let mut rng = SimpleRng::new(1);
        let track = Track::generate(0, &mut rng);
        assert_eq!(track.cells(), &[CellType::Solid]);
        assert!(!track.is_empty());
        assert!(!Track::solid(0).is_empty());
    }

    #[test]
    fn test_generate_invariants_over_many_seeds() {
        for seed in 0..500 {
            let mut rng = SimpleRng::new(seed);
            let track = Track::generate(64, &mut rng);
            assert_eq!(track.get(0), Some(CellType::Solid));
            for i in 1..track.len() {
                assert!(
                    !(track.cells()[i].is_gap() && track.cells()[i - 1].is_gap()),
                    "seed {seed}: adjacent gaps at {i}"
                );
            }
        }
    }

    #[test]
    fn test_generate_is_deterministic() {
        let a = Track::generate(50, &mut SimpleRng::new(2024));
        let b = Track::generate(50, &mut SimpleRng::new(2024));
        assert_eq!(a, b);
    }

    #[test]
    fn test_all_heads_gives_all_solid() {
        let track = Track::generate(10, &mut ConstRng(u32::MAX));
        assert_eq!(track, Track::solid(10));
        assert_eq!(track.gap_count(), 0);
    }

    #[test]
    fn test_all_tails_alternates() {
        let track = Track::generate(6, &mut ConstRng(0));
        use CellType::*;
        assert_eq!(track.cells(), &[Solid, Gap, Solid, Gap, Solid, Gap]);
        assert!(track.is_well_formed());
    }

    #[test]
    fn test_gap_skips_rng_draw() {
        struct CountingRng(u32);
        impl TrackRng for CountingRng {
            fn next_u32(&mut self) -> u32 {
                self.0 += 1;
                0
            }
        }
        let mut rng = CountingRng(0);
        // S G S G S: cells 2 and 4 follow a gap and are forced solid
        Track::generate(5, &mut rng);
        assert_eq!(rng.0, 2);
    }

    #[test]
    fn test_from_cells_validation() {
        use CellType::*;
        assert_eq!(Track::from_cells(vec![]), Err(TrackError::Empty));
        assert_eq!(
            Track::from_cells(vec![Gap, Solid]),
            Err(TrackError::StartsWithGap)
        );
        assert_eq!(
            Track::from_cells(vec![Solid, Solid, Gap, Gap, Solid]),
            Err(TrackError::AdjacentGaps { index: 3 })
        );
        let ok = Track::from_cells(vec![Solid, Gap, Solid, Solid]).unwrap();
        assert_eq!(ok.len(), 4);
        assert_eq!(ok.get(1), Some(Gap));
        assert_eq!(ok.get(4), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TrackError::AdjacentGaps { index: 3 }.to_string(),
            "gaps at 2 and 3 are adjacent"
        );
    }

    #[test]
    fn test_block_positions_skip_gaps() {
        use CellType::*;
        let track = Track::from_cells(vec![Solid, Gap, Solid]).unwrap();
        let blocks: Vec<Vec3> = track.block_positions().collect();
        assert_eq!(
            blocks,
            vec![
                Vec3::new(0.0, BLOCK_OFFSET_Y, 0.0),
                Vec3::new(2.0, BLOCK_OFFSET_Y, 0.0)
            ]
        );
        assert_eq!(track.solid_indices().collect::<Vec<_>>(), vec![0, 2]);
    }
}
