use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use grid_snake::collision::Termination;
use grid_snake::input::TurnQueue;
use grid_snake::snake::MoveResult;
use grid_snake::{Cell, Game, Grid, Heading, Status};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn new_game(seed: u64) -> (Game, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let game = Game::new(Grid::new(32, 24), &mut rng);
    (game, rng)
}

#[test]
fn three_quiet_ticks_then_eating() {
    let (mut game, mut rng) = new_game(11);
    game.set_food(Cell::new(0, 0));

    for _ in 0..3 {
        assert_eq!(game.tick(None, &mut rng), Status::Playing);
    }
    assert_eq!(game.snake().head(), Cell::new(19, 12));
    assert_eq!(game.snake().len(), 1);

    let (mut game, mut rng) = new_game(11);
    game.set_food(Cell::new(0, 0));
    game.tick(None, &mut rng);
    game.tick(None, &mut rng);
    game.set_food(Cell::new(19, 12));

    assert_eq!(game.tick(None, &mut rng), Status::Playing);
    assert_eq!(game.snake().len(), 2);
    assert_eq!(game.score(), 1);
    // Eating moves the head a second time within the tick
    assert_eq!(game.snake().head(), Cell::new(20, 12));
}

#[test]
fn every_meal_is_one_point_one_growth_one_new_food() {
    let (mut game, mut rng) = new_game(5);
    let mut row = 12;
    game.set_food(Cell::new(17, row));

    for meal in 1..=4 {
        let len_before = game.snake().len();
        assert_eq!(game.tick(None, &mut rng), Status::Playing);

        assert_eq!(game.score(), meal);
        assert_eq!(game.snake().len(), len_before + 1);
        assert_eq!(game.last_moves().len(), 2);

        let food = game.food().unwrap();
        assert!(!game.snake().occupies(food));

        // Next meal straight ahead of the head
        row = game.snake().head().y;
        game.set_food(Cell::new(game.snake().head().x + 1, row));
    }

    // A tick without food keeps the length
    game.set_food(Cell::new(0, 0));
    let len = game.snake().len();
    game.tick(None, &mut rng);
    assert_eq!(game.snake().len(), len);
    assert_eq!(game.score(), 4);
    assert_eq!(game.last_moves().len(), 1);
}

#[test]
fn turning_back_into_the_body_is_refused_but_a_loop_is_fatal() {
    let (mut game, mut rng) = new_game(8);
    game.set_food(Cell::new(0, 0));

    // Grow to length 5 along row 12
    for x in 17..21 {
        game.set_food(Cell::new(game.snake().head().x + 1, 12));
        game.tick(None, &mut rng);
        assert!(game.snake().head().x > x);
    }
    game.set_food(Cell::new(0, 0));
    assert_eq!(game.snake().len(), 5);

    // Straight reversal is ignored
    game.tick(Some(Heading::Left), &mut rng);
    assert_eq!(game.snake().heading(), Heading::Right);

    // Down, left, up runs the head into its own body
    game.tick(Some(Heading::Down), &mut rng);
    game.tick(Some(Heading::Left), &mut rng);
    game.tick(Some(Heading::Up), &mut rng);
    assert_eq!(game.tick(None, &mut rng), Status::GameOver(Termination::SelfCollision));
    assert!(matches!(game.last_moves(), [MoveResult::Crashed(Termination::SelfCollision)]));
}

#[test]
fn walls_end_the_game_on_every_side() {
    let cases = [
        (Heading::Up, 14),
        (Heading::Down, 13),
        (Heading::Right, 16),
    ];

    for &(heading, ticks) in cases.iter() {
        let (mut game, mut rng) = new_game(2);
        game.set_food(Cell::new(0, 0));
        let mut status = Status::Playing;
        // First tick still moves right; the new heading takes effect after it
        for i in 0..ticks {
            let input = if i == 0 { Some(heading) } else { None };
            status = game.tick(input, &mut rng);
        }
        assert_eq!(status, Status::GameOver(Termination::OutOfBounds), "{:?}", heading);
    }

    // Leftwards needs a turn first: right, up, left
    let (mut game, mut rng) = new_game(2);
    game.set_food(Cell::new(31, 0));
    game.tick(Some(Heading::Up), &mut rng);
    game.tick(Some(Heading::Left), &mut rng);
    let mut status = Status::Playing;
    while status == Status::Playing {
        status = game.tick(None, &mut rng);
    }
    assert_eq!(status, Status::GameOver(Termination::OutOfBounds));
    assert_eq!(game.snake().head().x, -1);
}

#[test]
fn food_never_spawns_on_the_snake() {
    for seed in 0..20 {
        let (mut game, mut rng) = new_game(seed);
        // Circle around the center, eating whatever shows up in the way
        let turns = [Heading::Down, Heading::Left, Heading::Up, Heading::Right];
        for i in 0..40 {
            let input = if i % 4 == 0 { Some(turns[(i / 4) % 4]) } else { None };
            if game.tick(input, &mut rng).is_over() {
                break;
            }
            if let Some(food) = game.food() {
                assert!(!game.snake().occupies(food));
            }
        }
    }
}

#[test]
fn quick_u_turn_within_one_tick_is_kept() {
    let (mut game, mut rng) = new_game(6);
    game.set_food(Cell::new(0, 0));
    let mut turns = TurnQueue::new();

    let key = |code| KeyEvent { code, modifiers: KeyModifiers::NONE };
    let pressed = [key(KeyCode::Up), key(KeyCode::Left)];
    assert!(!turns.push_events(pressed.iter()));

    // Up steers the second move, Left the third
    game.tick(turns.next_turn(), &mut rng);
    assert_eq!(game.snake().heading(), Heading::Up);
    game.tick(turns.next_turn(), &mut rng);
    assert_eq!(game.snake().heading(), Heading::Left);
    game.tick(turns.next_turn(), &mut rng);

    assert_eq!(game.snake().head(), Cell::new(16, 11));
    assert_eq!(game.status(), Status::Playing);
}
