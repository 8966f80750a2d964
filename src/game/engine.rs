use super::{
    action::Direction,
    clock::FixedStep,
    config::GameConfig,
    food::Food,
    menu::{Menu, MenuInput, MenuItem},
    state::{CollisionType, Position, Snake},
};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;
use std::time::Instant;

/// Top-level phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Start menu is showing
    Menu,
    /// A game is running
    Playing,
    /// The game-over screen is showing, entered at `since`
    GameOver { since: Instant },
}

/// Input the engine understands, already decoded from raw key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Confirm,
    Quit,
}

/// What the caller should do after handing the engine a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Result of one simulation tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the head landed on the food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

/// Read-only snapshot of everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Occupied cells, head first
    pub snake: &'a VecDeque<Position>,
    pub food: Position,
    pub mode: Mode,
    /// Game-over overlay opacity, 0 outside of `Mode::GameOver`
    pub fade_alpha: u8,
    pub menu_selection: MenuItem,
}

/// Owns the snake, food, menu and mode, and wires input and time into them
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
    mode: Mode,
    menu: Menu,
    snake: Snake,
    food: Food,
    step: FixedStep,
    fade_alpha: f32,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(config.initial_snake_length);
        let food = Food::new(config.food_policy, &snake, &mut rng);
        let step = FixedStep::new(config.tick_interval(), Instant::now());

        Self {
            config,
            rng,
            mode: Mode::Menu,
            menu: Menu::new(),
            snake,
            food,
            step,
            fade_alpha: 0.0,
        }
    }

    /// Apply one input command
    pub fn handle(&mut self, command: Command, now: Instant) -> Control {
        match (self.mode, command) {
            (_, Command::Quit) => return Control::Exit,

            (Mode::Menu, Command::Steer(Direction::Up)) => {
                self.menu.handle(MenuInput::Up);
            }
            (Mode::Menu, Command::Steer(Direction::Down)) => {
                self.menu.handle(MenuInput::Down);
            }
            (Mode::Menu, Command::Confirm) => match self.menu.handle(MenuInput::Confirm) {
                Some(MenuItem::Start) => self.start_game(now),
                Some(MenuItem::Exit) => {
                    info!("exit selected from menu");
                    return Control::Exit;
                }
                None => {}
            },

            (Mode::Playing, Command::Steer(direction)) => {
                self.snake.set_direction(direction);
            }

            (Mode::GameOver { .. }, Command::Confirm) => self.return_to_menu(),

            _ => {}
        }

        Control::Continue
    }

    /// Advance time: runs a due tick while playing and drives the game-over timer
    pub fn update(&mut self, now: Instant) -> Option<TickResult> {
        let mode = self.mode;
        match mode {
            Mode::Playing if self.step.poll(now) => Some(self.tick(now)),
            Mode::GameOver { since } => {
                let elapsed = now.saturating_duration_since(since);
                let alpha = (self.config.fade_speed * elapsed.as_secs_f32()).clamp(0.0, 255.0);
                self.fade_alpha = self.fade_alpha.max(alpha);

                if elapsed >= self.config.game_over_delay() {
                    self.return_to_menu();
                }
                None
            }
            _ => None,
        }
    }

    /// Run exactly one simulation step. Does nothing outside of `Mode::Playing`.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        if self.mode != Mode::Playing {
            return TickResult::default();
        }

        self.snake.move_forward();

        if let Some(collision) = self.snake.collision() {
            let head = self.snake.head();
            info!(
                "game over: {:?} at ({}, {}), length {}",
                collision,
                head.x,
                head.y,
                self.snake.len()
            );
            self.mode = Mode::GameOver { since: now };
            self.fade_alpha = 0.0;
            return TickResult {
                ate_food: false,
                collision: Some(collision),
            };
        }

        let ate_food = self.snake.head() == self.food.position();
        if ate_food {
            self.snake.grow();
            self.food.respawn(&self.snake, &mut self.rng);
            debug!("snake ate, length will be {}", self.snake.len() + 1);
        }

        TickResult {
            ate_food,
            collision: None,
        }
    }

    fn start_game(&mut self, now: Instant) {
        self.snake = Snake::new(self.config.initial_snake_length);
        self.food = Food::new(self.config.food_policy, &self.snake, &mut self.rng);
        self.step.restart(now);
        self.fade_alpha = 0.0;
        self.mode = Mode::Playing;
        info!("game started");
    }

    fn return_to_menu(&mut self) {
        self.fade_alpha = 0.0;
        self.mode = Mode::Menu;
        info!("back to menu");
    }

    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            snake: self.snake.body(),
            food: self.food.position(),
            mode: self.mode,
            fade_alpha: self.fade_alpha(),
            menu_selection: self.menu.selected_item(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn fade_alpha(&self) -> u8 {
        self.fade_alpha.round() as u8
    }
}
