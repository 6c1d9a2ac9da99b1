#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// A 180 degree turn; the snake may never take one
    pub fn reverses(self, heading: Direction) -> bool {
        self == heading.opposite()
    }

    /// (dx, dy) of one step, rows counting downwards
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Steering applied at a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Turn(Direction),
    Straight,
}

impl From<Option<Direction>> for Action {
    fn from(turn: Option<Direction>) -> Self {
        match turn {
            Some(direction) => Action::Turn(direction),
            None => Action::Straight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversal_pairs() {
        for (a, b) in [
            (Direction::Up, Direction::Down),
            (Direction::Left, Direction::Right),
        ] {
            assert!(a.reverses(b));
            assert!(b.reverses(a));
        }
        assert!(!Direction::Up.reverses(Direction::Left));
        assert!(!Direction::Right.reverses(Direction::Right));
    }

    #[test]
    fn test_offsets_cancel_with_opposite() {
        for d in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let (dx, dy) = d.offset();
            let (ox, oy) = d.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
        assert_eq!(Direction::Up.offset(), (0, -1));
    }

    #[test]
    fn test_pending_turn_becomes_action() {
        assert_eq!(Action::from(Some(Direction::Up)), Action::Turn(Direction::Up));
        assert_eq!(Action::from(None), Action::Straight);
    }
}
