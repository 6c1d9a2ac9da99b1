use super::action::Direction;

/// Grid coordinate: column `x`, row `y`, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn neighbour(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Head first. Never empty.
    pub body: Vec<Cell>,
    pub heading: Direction,
}

impl Snake {
    /// `length` cells in a straight line, the tail trailing away from `heading`
    pub fn new(head: Cell, heading: Direction, length: usize) -> Self {
        let back = heading.opposite();
        let mut body = vec![head];
        while body.len() < length {
            let last = body[body.len() - 1];
            body.push(last.neighbour(back));
        }
        Self { body, heading }
    }

    /// Explicit body, head first
    pub fn from_cells(cells: &[(i32, i32)], heading: Direction) -> Self {
        assert!(!cells.is_empty(), "snake needs a head");
        Self {
            body: cells.iter().map(|&c| Cell::from(c)).collect(),
            heading,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Change heading; a reversal is ignored and reported as `false`
    pub fn steer(&mut self, direction: Direction) -> bool {
        let accepted = !direction.reverses(self.heading);
        if accepted {
            self.heading = direction;
        }
        accepted
    }

    pub fn next_head(&self) -> Cell {
        self.head().neighbour(self.heading)
    }

    pub fn push_head(&mut self, cell: Cell) {
        self.body.insert(0, cell);
    }

    /// Drop the last segment. A lone head stays put.
    pub fn pop_tail(&mut self) -> Option<Cell> {
        if self.body.len() < 2 {
            return None;
        }
        self.body.pop()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn head_hits_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&c| c == head)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    Wall,
    SelfCollision,
}

/// One round in progress
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub steps: u32,
    pub alive: bool,
}

impl GameState {
    pub fn new(snake: Snake, food: Cell, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            grid_width,
            grid_height,
            score: 0,
            steps: 0,
            alive: true,
        }
    }

    /// Whether `cell` lies on the board
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.grid_width as i32).contains(&cell.x) && (0..self.grid_height as i32).contains(&cell.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours() {
        let c = Cell::new(5, 5);
        assert_eq!(c.neighbour(Direction::Right), Cell::new(6, 5));
        assert_eq!(c.neighbour(Direction::Left), Cell::new(4, 5));
        assert_eq!(c.neighbour(Direction::Down), Cell::new(5, 6));
        assert_eq!(c.neighbour(Direction::Up), Cell::new(5, 4));
    }

    #[test]
    fn test_new_snake_trails_behind_head() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert_eq!(
            snake.body,
            vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]
        );

        let single = Snake::new(Cell::new(5, 5), Direction::Right, 0);
        assert_eq!(single.body, vec![Cell::new(5, 5)]);
    }

    #[test]
    fn test_steer_ignores_reversal() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 1);
        assert!(!snake.steer(Direction::Left));
        assert_eq!(snake.heading, Direction::Right);

        assert!(snake.steer(Direction::Up));
        assert_eq!(snake.heading, Direction::Up);
    }

    #[test]
    fn test_lone_head_survives_pop() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right, 2);
        assert_eq!(snake.pop_tail(), Some(Cell::new(4, 5)));
        assert_eq!(snake.pop_tail(), None);
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn test_head_hits_body() {
        let mut snake = Snake::from_cells(&[(5, 5), (5, 6), (4, 6), (4, 5)], Direction::Left);
        assert!(!snake.head_hits_body());

        snake.push_head(Cell::new(4, 5));
        assert!(snake.head_hits_body());
    }

    #[test]
    fn test_board_edges() {
        let state = GameState::new(
            Snake::new(Cell::new(5, 5), Direction::Right, 1),
            Cell::new(10, 10),
            30,
            20,
        );

        assert!(state.contains(Cell::new(0, 0)));
        assert!(state.contains(Cell::new(29, 19)));
        assert!(!state.contains(Cell::new(-1, 0)));
        assert!(!state.contains(Cell::new(30, 0)));
        assert!(!state.contains(Cell::new(0, 20)));
    }
}
