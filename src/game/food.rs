//! Food placement

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use super::state::{Position, Snake};

/// Pick a uniformly random free cell for food
///
/// Draws random cells and rejects those under the snake. After
/// `width * height` rejected draws the free cells are enumerated and one is
/// chosen directly, so a crowded board costs at most one extra scan.
/// Returns `None` when the snake covers the whole board.
pub fn place_food<R: Rng>(
    rng: &mut R,
    snake: &Snake,
    width: usize,
    height: usize,
) -> Option<Position> {
    let cells = width * height;
    if cells == 0 || snake.len() >= cells {
        return None;
    }

    for _ in 0..cells {
        let pos = Position::new(
            rng.gen_range(0..width) as i32,
            rng.gen_range(0..height) as i32,
        );
        if !snake.contains(pos) {
            return Some(pos);
        }
    }

    debug!(
        snake_len = snake.len(),
        cells, "rejection sampling exhausted, choosing from free cells"
    );
    let free: Vec<Position> = (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
        .filter(|&pos| !snake.contains(pos))
        .collect();
    free.choose(rng).copied()
}
