//! Random guillotine partitions of a square board
//!
//! Cutting the board recursively along full-length lines always yields a set
//! of rectangles that exactly tiles it, which makes these partitions a source
//! of puzzles known to be solvable.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::board::validate_board_size;
use crate::spatial::pieces::Piece;

#[derive(Clone, Copy, Debug)]
struct Region {
    width: usize,
    height: usize,
}

impl Region {
    const fn area(self) -> usize {
        self.width * self.height
    }

    const fn is_cuttable(self) -> bool {
        self.width > 1 || self.height > 1
    }

    // Splits along a random allowed axis at a random offset
    fn cut(self, rng: &mut StdRng) -> (Self, Self) {
        let vertical = match (self.width > 1, self.height > 1) {
            (true, true) => rng.random_bool(0.5),
            (true, false) => true,
            _ => false,
        };

        if vertical {
            let left = rng.random_range(1..self.width);
            (
                Self {
                    width: left,
                    height: self.height,
                },
                Self {
                    width: self.width - left,
                    height: self.height,
                },
            )
        } else {
            let top = rng.random_range(1..self.height);
            (
                Self {
                    width: self.width,
                    height: top,
                },
                Self {
                    width: self.width,
                    height: self.height - top,
                },
            )
        }
    }
}

/// Cut a `size` x `size` board into `piece_count` rectangles
///
/// The largest cuttable region is split at each step, so pieces stay
/// reasonably balanced. Each piece is rotated with probability one half and
/// the list is shuffled, all driven by `seed`.
///
/// # Errors
///
/// Returns an error if `size` is not a supported board side, or if
/// `piece_count` is zero or larger than the number of cells
pub fn generate_partition(size: usize, piece_count: usize, seed: u64) -> Result<Vec<Piece>> {
    validate_board_size(size)?;
    if piece_count == 0 || piece_count > size * size {
        return Err(invalid_parameter(
            "generate",
            &piece_count,
            &format!("must be between 1 and {}", size * size),
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut regions = vec![Region {
        width: size,
        height: size,
    }];

    while regions.len() < piece_count {
        let largest = regions
            .iter()
            .enumerate()
            .filter(|(_, region)| region.is_cuttable())
            .max_by_key(|(_, region)| region.area())
            .map(|(index, _)| index);

        // Only 1x1 regions remain, which cannot happen below size * size pieces
        let Some(index) = largest else {
            break;
        };

        let region = regions.swap_remove(index);
        let (first, second) = region.cut(&mut rng);
        regions.push(first);
        regions.push(second);
    }

    let mut pieces = regions
        .into_iter()
        .map(|region| {
            if rng.random_bool(0.5) {
                Piece::new(region.height, region.width)
            } else {
                Piece::new(region.width, region.height)
            }
        })
        .collect::<Result<Vec<_>>>()?;
    pieces.shuffle(&mut rng);

    Ok(pieces)
}
