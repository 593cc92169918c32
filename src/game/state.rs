use super::action::Direction;
use super::collision::CollisionType;

/// A cell on the game grid
///
/// Coordinates are signed so a head that steps off the board is still
/// representable until the collision check rejects it.
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

    /// Manhattan distance to another cell
    pub fn distance_to(&self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake whose body trails straight behind the head
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self { body, direction }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(body: Vec<Position>, direction: Direction) -> Self {
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Insert a freshly computed head in front of the current one
    pub fn push_head(&mut self, head: Position) {
        self.body.insert(0, head);
    }

    /// Drop the last segment
    pub fn pop_tail(&mut self) -> Option<Position> {
        self.body.pop()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Why an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// Too many steps without eating
    Starvation,
    /// The snake covers every cell, so no food can be placed
    BoardFull,
}

impl From<CollisionType> for Termination {
    fn from(collision: CollisionType) -> Self {
        match collision {
            CollisionType::Wall => Termination::Wall,
            CollisionType::SelfCollision => Termination::SelfCollision,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    /// Total steps taken this episode
    pub steps: u32,
    /// Steps since food was last eaten
    pub steps_since_food: usize,
    pub is_alive: bool,
    pub termination: Option<Termination>,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            steps_since_food: 0,
            is_alive: true,
            termination: None,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Current heading of the snake
    pub fn direction(&self) -> Direction {
        self.snake.direction
    }

    /// Read-only snapshot handed to presentation code
    pub fn view(&self) -> GameView<'_> {
        GameView {
            width: self.grid_width,
            height: self.grid_height,
            snake: &self.snake.body,
            food: self.food,
            score: self.score,
            is_alive: self.is_alive,
            termination: self.termination,
        }
    }
}

/// Borrowed view of a game, consumed once per tick by renderers
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub width: usize,
    pub height: usize,
    /// Snake cells, head first
    pub snake: &'a [Position],
    pub food: Position,
    pub score: u32,
    pub is_alive: bool,
    pub termination: Option<Termination>,
}

impl GameView<'_> {
    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }
}
