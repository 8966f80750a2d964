use log::debug;
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};

use super::config::GRID_SIZE;
use super::state::{Position, Snake};

/// Which cells food may respawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPolicy {
    /// Any cell on the grid, including ones under the snake
    #[default]
    Uniform,
    /// Only cells the snake does not occupy, falling back to `Uniform`
    /// when the snake fills the grid
    ExcludeOccupied,
}

/// The single piece of food on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    position: Position,
    policy: FoodPolicy,
}

impl Food {
    /// Create food at a random position
    pub fn new<R: Rng>(policy: FoodPolicy, snake: &Snake, rng: &mut R) -> Self {
        let mut food = Self {
            position: Position::new(0, 0),
            policy,
        };
        food.respawn(snake, rng);
        food
    }

    /// Create food at a fixed position
    pub fn at(position: Position, policy: FoodPolicy) -> Self {
        Self { position, policy }
    }

    /// Move the food to a new random cell
    pub fn respawn<R: Rng>(&mut self, snake: &Snake, rng: &mut R) {
        self.position = match self.policy {
            FoodPolicy::Uniform => random_cell(rng),
            FoodPolicy::ExcludeOccupied => free_cell(snake, rng).unwrap_or_else(|| random_cell(rng)),
        };
        debug!("food respawned at ({}, {})", self.position.x, self.position.y);
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

fn random_cell<R: Rng>(rng: &mut R) -> Position {
    Position::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE))
}

fn free_cell<R: Rng>(snake: &Snake, rng: &mut R) -> Option<Position> {
    (0..GRID_SIZE)
        .flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y)))
        .filter(|pos| !snake.occupies(*pos))
        .choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_respawn_stays_on_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new(3);
        let mut food = Food::new(FoodPolicy::Uniform, &snake, &mut rng);

        for _ in 0..500 {
            food.respawn(&snake, &mut rng);
            assert!(food.position().is_within(GRID_SIZE));
        }
    }

    #[test]
    fn test_uniform_reaches_every_row_and_column() {
        let mut rng = StdRng::seed_from_u64(42);
        let snake = Snake::new(3);
        let mut food = Food::at(Position::new(0, 0), FoodPolicy::Uniform);
        let mut xs = [false; GRID_SIZE as usize];
        let mut ys = [false; GRID_SIZE as usize];

        for _ in 0..2000 {
            food.respawn(&snake, &mut rng);
            xs[food.position().x as usize] = true;
            ys[food.position().y as usize] = true;
        }

        assert!(xs.iter().all(|seen| *seen));
        assert!(ys.iter().all(|seen| *seen));
    }

    #[test]
    fn test_exclude_occupied_avoids_snake() {
        let mut rng = StdRng::seed_from_u64(3);
        // Fill the top ten rows
        let snake = Snake::from_segments(
            (0..10).flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y))),
            Direction::Right,
        );
        let mut food = Food::at(Position::new(0, 0), FoodPolicy::ExcludeOccupied);

        for _ in 0..500 {
            food.respawn(&snake, &mut rng);
            assert!(!snake.occupies(food.position()));
        }
    }

    #[test]
    fn test_exclude_occupied_falls_back_on_full_grid() {
        let mut rng = StdRng::seed_from_u64(9);
        let snake = Snake::from_segments(
            (0..GRID_SIZE).flat_map(|y| (0..GRID_SIZE).map(move |x| Position::new(x, y))),
            Direction::Right,
        );
        let mut food = Food::at(Position::new(-1, -1), FoodPolicy::ExcludeOccupied);

        food.respawn(&snake, &mut rng);
        assert!(food.position().is_within(GRID_SIZE));
    }
}
