use super::config::Grid;
use super::state::{Cell, Snake};
use log::trace;
use rand::Rng;

/// Pick a uniformly random free cell by rejection sampling.
///
/// Draws cells until one is not covered by the snake. There is no retry cap:
/// with `k` free cells out of `n` every draw succeeds with probability
/// `k / n`, so the loop ends almost surely as long as one free cell exists.
/// Callers must not ask for food on a grid the snake fills completely.
pub fn place_food<R: Rng + ?Sized>(snake: &Snake, grid: Grid, rng: &mut R) -> Cell {
    let mut rejected = 0u32;
    loop {
        let cell = Cell::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height));
        if !snake.occupies(cell) {
            if rejected > 0 {
                trace!("food placed at {:?} after {} rejected draws", cell, rejected);
            }
            return cell;
        }
        rejected += 1;
    }
}
