use std::collections::VecDeque;

use super::action::Direction;
use super::config::GRID_SIZE;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Check if the position lies inside a `size x size` grid
    pub fn is_within(&self, size: i32) -> bool {
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }
}

/// Longest snake that fits on the starting row
pub const MAX_LENGTH: i32 = GRID_SIZE;

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake's head ran into its own body
    SelfCollision,
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: VecDeque<Position>,
    /// Current direction of movement
    direction: Direction,
    /// Set by `grow`, consumed by the next `move_forward`
    has_eaten: bool,
}

impl Snake {
    /// Create a snake laid out along the top row, head rightmost, moving right.
    ///
    /// The length is clamped to `1..=MAX_LENGTH`, so the snake always has a head.
    pub fn new(length: usize) -> Self {
        let length = i32::try_from(length).map_or(MAX_LENGTH, |len| len.clamp(1, MAX_LENGTH));
        let body = (0..length).rev().map(|x| Position::new(x, 0)).collect();

        Self {
            body,
            direction: Direction::Right,
            has_eaten: false,
        }
    }

    /// Create a snake from explicit segments, head first.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments<I>(segments: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let body: VecDeque<Position> = segments.into_iter().collect();
        assert!(!body.is_empty(), "a snake needs at least one segment");

        Self {
            body,
            direction,
            has_eaten: false,
        }
    }

    /// Advance one cell in the current direction.
    ///
    /// The tail is kept if the snake ate since the last move. No bounds
    /// checking happens here; see [`Snake::check_collision`].
    pub fn move_forward(&mut self) {
        let new_head = self.head().moved_in_direction(self.direction);
        self.body.push_front(new_head);

        if self.has_eaten {
            self.has_eaten = false;
        } else {
            self.body.pop_back();
        }
    }

    /// Grow by one segment on the next move
    pub fn grow(&mut self) {
        self.has_eaten = true;
    }

    /// Change direction unless it would be a 180-degree turn
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// What the head has run into, if anything
    pub fn collision(&self) -> Option<CollisionType> {
        let head = self.head();

        if !head.is_within(GRID_SIZE) {
            return Some(CollisionType::Wall);
        }

        if self.body.iter().skip(1).any(|segment| *segment == head) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// True if the head is off the grid or overlaps the rest of the body
    pub fn check_collision(&self) -> bool {
        self.collision().is_some()
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// All occupied cells, head first
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn has_eaten(&self) -> bool {
        self.has_eaten
    }

    /// Check if a position is occupied by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false once constructed
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
