use super::{
    action::{Action, Direction},
    config::GameConfig,
    state::{Cell, CollisionType, GameState, Snake},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// What happened during a step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    pub ate_food: bool,
    pub collision: Option<CollisionType>,
}

impl StepResult {
    pub fn terminated(&self) -> bool {
        self.collision.is_some()
    }
}

/// Advances rounds of the game
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a reproducible food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fresh round: snake at the start cell heading right, score 0
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(
            Cell::new(self.config.start_x, self.config.start_y),
            Direction::Right,
            self.config.initial_snake_length,
        );
        let food = self.spawn_food(&snake);

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Execute one tick.
    ///
    /// The head is pushed first, then the tail is dropped unless food was
    /// eaten, and collisions are judged on the resulting body. A head moving
    /// into the cell the tail just vacated is therefore safe.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.alive {
            return StepResult {
                ate_food: false,
                collision: None,
            };
        }

        if let Action::Turn(direction) = action {
            state.snake.steer(direction);
        }

        let new_head = state.snake.next_head();
        state.snake.push_head(new_head);

        let ate_food = new_head == state.food;
        if ate_food {
            state.score += self.config.food_score;
            state.food = self.spawn_food(&state.snake);
            log::debug!("food eaten, score {} -> food at {:?}", state.score, state.food);
        } else {
            state.snake.pop_tail();
        }

        state.steps += 1;

        let collision = Self::check_collision(state);
        if let Some(kind) = collision {
            state.alive = false;
            log::info!(
                "{:?} collision at {:?} after {} steps, score {}",
                kind,
                new_head,
                state.steps,
                state.score
            );
        }

        StepResult {
            ate_food,
            collision,
        }
    }

    fn check_collision(state: &GameState) -> Option<CollisionType> {
        let head = state.snake.head();
        if !state.contains(head) {
            return Some(CollisionType::Wall);
        }
        if state.snake.head_hits_body() {
            return Some(CollisionType::SelfCollision);
        }
        None
    }

    /// Rejection sampling over the whole grid until a cell off the snake turns up.
    ///
    /// Never returns when the snake fills every cell.
    fn spawn_food(&mut self, snake: &Snake) -> Cell {
        loop {
            let x = self.rng.gen_range(0..self.config.grid_width) as i32;
            let y = self.rng.gen_range(0..self.config.grid_height) as i32;
            let cell = Cell::new(x, y);

            if !snake.occupies(cell) {
                return cell;
            }
        }
    }
}
