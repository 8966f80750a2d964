use std::time::{Duration, Instant};

use tui_snake::game::{
    CollisionType, Command, Control, Direction, FoodPolicy, GRID_SIZE, GameConfig, GameEngine,
    MenuItem, Mode, Position,
};

const TICK: Duration = Duration::from_millis(100);

fn start(engine: &mut GameEngine, now: Instant) {
    assert_eq!(engine.handle(Command::Confirm, now), Control::Continue);
    assert_eq!(engine.mode(), Mode::Playing);
}

/// Step the engine one interval at a time until the game ends, returning the final time
fn run_until_game_over(engine: &mut GameEngine, mut now: Instant, max_ticks: usize) -> Instant {
    for _ in 0..max_ticks {
        now += TICK;
        if let Some(result) = engine.update(now) {
            if result.collision.is_some() {
                return now;
            }
        }
    }
    panic!("game did not end within {max_ticks} ticks");
}

#[test]
fn straight_run_hits_the_right_wall() {
    let t0 = Instant::now();
    let mut engine = GameEngine::with_seed(GameConfig::default(), 11);
    start(&mut engine, t0);

    // Head starts at x = 2 and leaves the 20-wide grid on the 18th move
    let mut now = t0;
    for tick in 1..=17 {
        now += TICK;
        let result = engine.update(now).expect("tick should be due");
        assert_eq!(result.collision, None, "unexpected collision on tick {tick}");
    }
    assert_eq!(engine.snake().head(), Position::new(19, 0));

    now += TICK;
    let result = engine.update(now).expect("tick should be due");
    assert_eq!(result.collision, Some(CollisionType::Wall));
    assert_eq!(engine.snake().head(), Position::new(20, 0));
    assert_eq!(engine.mode(), Mode::GameOver { since: now });
}

#[test]
fn game_over_times_out_to_menu() {
    let t0 = Instant::now();
    let mut engine = GameEngine::with_seed(GameConfig::default(), 2);
    start(&mut engine, t0);

    let ended = run_until_game_over(&mut engine, t0, 100);

    engine.update(ended + Duration::from_millis(400));
    assert!(matches!(engine.mode(), Mode::GameOver { .. }));
    let early_alpha = engine.frame().fade_alpha;
    assert!(early_alpha > 0);

    engine.update(ended + Duration::from_millis(800));
    assert!(engine.frame().fade_alpha >= early_alpha);

    engine.update(ended + Duration::from_millis(1000));
    assert_eq!(engine.mode(), Mode::Menu);
    assert_eq!(engine.frame().fade_alpha, 0);
}

#[test]
fn replay_after_game_over_gets_a_fresh_snake() {
    let t0 = Instant::now();
    let mut engine = GameEngine::with_seed(GameConfig::default(), 3);
    start(&mut engine, t0);

    engine.handle(Command::Steer(Direction::Down), t0);
    let ended = run_until_game_over(&mut engine, t0, 100);

    assert_eq!(engine.handle(Command::Confirm, ended), Control::Continue);
    assert_eq!(engine.mode(), Mode::Menu);
    assert_eq!(engine.menu().selected_item(), MenuItem::Start);

    start(&mut engine, ended);
    let body: Vec<Position> = engine.snake().body().iter().copied().collect();
    assert_eq!(
        body,
        vec![Position::new(2, 0), Position::new(1, 0), Position::new(0, 0)]
    );
    assert_eq!(engine.snake().direction(), Direction::Right);
}

#[test]
fn reversal_is_ignored_during_play() {
    let t0 = Instant::now();
    let mut engine = GameEngine::with_seed(GameConfig::default(), 4);
    start(&mut engine, t0);

    engine.handle(Command::Steer(Direction::Left), t0);
    engine.update(t0 + TICK);
    assert_eq!(engine.snake().head(), Position::new(3, 0));
    assert_eq!(engine.mode(), Mode::Playing);
}

#[test]
fn menu_exit_requests_shutdown() {
    let now = Instant::now();
    let mut engine = GameEngine::with_seed(GameConfig::default(), 5);

    engine.handle(Command::Steer(Direction::Down), now);
    engine.handle(Command::Steer(Direction::Down), now);
    assert_eq!(engine.menu().selected_index(), 1);
    assert_eq!(engine.handle(Command::Confirm, now), Control::Exit);
}

#[test]
fn snake_grows_by_chasing_food() {
    let t0 = Instant::now();
    let config = GameConfig {
        initial_snake_length: 1,
        food_policy: FoodPolicy::ExcludeOccupied,
        ..GameConfig::default()
    };
    let mut engine = GameEngine::with_seed(config, 6);
    start(&mut engine, t0);

    let mut now = t0;
    let mut meals = 0;
    for _ in 0..2000 {
        // Walk toward the food, one axis at a time
        let head = engine.snake().head();
        let food = engine.food().position();
        let current = engine.snake().direction();
        let mut want = if food.x > head.x {
            Direction::Right
        } else if food.x < head.x {
            Direction::Left
        } else if food.y > head.y {
            Direction::Down
        } else {
            Direction::Up
        };
        // A direct reversal would be ignored, so side-step first
        if want == current.opposite() {
            want = match current {
                Direction::Up | Direction::Down if head.x < GRID_SIZE - 1 => Direction::Right,
                Direction::Up | Direction::Down => Direction::Left,
                _ if head.y < GRID_SIZE - 1 => Direction::Down,
                _ => Direction::Up,
            };
        }
        engine.handle(Command::Steer(want), now);

        let before = engine.snake().len();
        let had_eaten = engine.snake().has_eaten();
        now += TICK;
        let Some(result) = engine.update(now) else {
            continue;
        };
        if result.collision.is_some() {
            break;
        }
        assert_eq!(engine.snake().len(), before + usize::from(had_eaten));
        if result.ate_food {
            meals += 1;
            assert_ne!(engine.food().position(), engine.snake().head());
        }
        if meals == 3 {
            break;
        }
    }

    assert!(meals >= 1);
}
