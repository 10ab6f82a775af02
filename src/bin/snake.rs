//! Snake on the dot grid (default binary).
//!
//! The classic demo: black snake, red pills, wrap-around edges, arrow keys to
//! steer. Game state lives in one `SnakeState` shared by the closures through
//! an `Rc<RefCell<_>>`; the engine holds no game-specific state.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_dots::core::{Engine, Game, GameConfig};
use tui_dots::types::{Color, Direction};

const GRID: i32 = 24;

/// Simple LCG (Numerical Recipes constants), enough for pill placement.
struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
struct Point {
    x: i32,
    y: i32,
}

struct SnakeState {
    body: Vec<Point>,
    direction: Direction,
    // Latch: at most one direction change per frame, so two quick key
    // presses cannot turn the snake back on itself.
    direction_changed_this_frame: bool,
    rng: SimpleRng,
}

impl SnakeState {
    fn new(seed: u32) -> Self {
        Self {
            body: vec![Point { x: 7, y: 7 }, Point { x: 6, y: 7 }],
            direction: Direction::Right,
            direction_changed_this_frame: false,
            rng: SimpleRng::new(seed),
        }
    }

    fn contains(&self, p: Point) -> bool {
        self.body.iter().any(|&dot| dot == p)
    }

    fn place_pill(&mut self, game: &mut Game) {
        let mut pill = self.random_point();
        while self.contains(pill) {
            pill = self.random_point();
        }
        game.set_dot(pill.x, pill.y, Color::Red).unwrap();
    }

    fn random_point(&mut self) -> Point {
        Point {
            x: self.rng.next_range(GRID as u32) as i32,
            y: self.rng.next_range(GRID as u32) as i32,
        }
    }

    fn paint(&self, game: &mut Game, color: Color) {
        for dot in &self.body {
            game.set_dot(dot.x, dot.y, color).unwrap();
        }
    }

    fn steer(&mut self, direction: Direction) {
        if self.direction_changed_this_frame {
            return;
        }
        let reversal = matches!(
            (self.direction, direction),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        );
        if !reversal {
            self.direction = direction;
            self.direction_changed_this_frame = true;
        }
    }

    fn step(&mut self, game: &mut Game) {
        self.direction_changed_this_frame = false;

        let head = self.body[0];
        let mut next = head;
        match self.direction {
            Direction::Right => next.x += 1,
            Direction::Left => next.x -= 1,
            Direction::Up => next.y -= 1,
            Direction::Down => next.y += 1,
        }
        next.x = next.x.rem_euclid(GRID);
        next.y = next.y.rem_euclid(GRID);

        match game.get_dot(next.x, next.y).unwrap() {
            // Ran into ourselves: paint the body red and stop.
            Color::Black => {
                self.paint(game, Color::Red);
                game.end();
                return;
            }
            // Ate a pill: grow by one and place a new pill.
            Color::Red => {
                let tail = *self.body.last().expect("zero length snake");
                self.body.push(tail);
                self.place_pill(game);
            }
            _ => {}
        }

        self.body.insert(0, next);
        let tail = self.body.pop().expect("zero length snake");
        game.set_dot(tail.x, tail.y, Color::Gray).unwrap();

        self.paint(game, Color::Black);
        game.set_text(format!("Score: {}", self.body.len() - 2));
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let state = Rc::new(RefCell::new(SnakeState::new(seed)));

    let create_state = Rc::clone(&state);
    let update_state = Rc::clone(&state);
    let key_state = Rc::clone(&state);

    let config = GameConfig::new()
        .frame_rate(5.0)
        .clear_grid(false)
        .create(move |game| {
            let mut state = create_state.borrow_mut();
            state.paint(game, Color::Black);
            state.place_pill(game);
            game.set_text("Score: 0");
        })
        .update(move |game| {
            update_state.borrow_mut().step(game);
        })
        .on_key_press(move |direction| {
            key_state.borrow_mut().steer(direction);
        });

    Engine::new(config).run()
}
