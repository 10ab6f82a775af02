//! Input dispatch tests - key mapping, repeat suppression, click hit-testing
//! exercised through the engine's event path

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEventKind};

use tui_dots::core::{Engine, GameConfig};
use tui_dots::input::hit_test;
use tui_dots::render::{DotLayout, MemoryRenderer, SurfaceEvent};
use tui_dots::types::Direction;

fn key(code: KeyCode, kind: KeyEventKind) -> SurfaceEvent {
    SurfaceEvent::Key { code, kind }
}

#[test]
fn test_arrow_press_reaches_the_key_handler() {
    let presses = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&presses);
    let mut engine = Engine::new(
        GameConfig::new().on_key_press(move |direction| sink.borrow_mut().push(direction)),
    );
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    engine.dispatch(key(KeyCode::Up, KeyEventKind::Press));
    engine.dispatch(key(KeyCode::Up, KeyEventKind::Release));
    engine.dispatch(key(KeyCode::Left, KeyEventKind::Press));

    assert_eq!(*presses.borrow(), vec![Direction::Up, Direction::Left]);
}

#[test]
fn test_non_arrow_keys_are_ignored() {
    let presses = Rc::new(Cell::new(0u32));
    let sink = Rc::clone(&presses);
    let mut engine = Engine::new(
        GameConfig::new().on_key_press(move |_| sink.set(sink.get() + 1)),
    );
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    engine.dispatch(key(KeyCode::Char('w'), KeyEventKind::Press));
    engine.dispatch(key(KeyCode::Enter, KeyEventKind::Press));
    engine.dispatch(key(KeyCode::Esc, KeyEventKind::Press));

    assert_eq!(presses.get(), 0);
}

#[test]
fn test_key_repeat_is_suppressed() {
    let presses = Rc::new(Cell::new(0u32));
    let sink = Rc::clone(&presses);
    let mut engine = Engine::new(
        GameConfig::new().on_key_press(move |_| sink.set(sink.get() + 1)),
    );
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    engine.dispatch(key(KeyCode::Down, KeyEventKind::Press));
    engine.dispatch(key(KeyCode::Down, KeyEventKind::Repeat));
    engine.dispatch(key(KeyCode::Down, KeyEventKind::Repeat));
    // Terminals without repeat reporting send a second Press instead.
    engine.dispatch(key(KeyCode::Down, KeyEventKind::Press));

    assert_eq!(presses.get(), 1, "only the initial press may dispatch");
}

#[test]
fn test_release_then_press_dispatches_again() {
    let presses = Rc::new(Cell::new(0u32));
    let sink = Rc::clone(&presses);
    let mut engine = Engine::new(
        GameConfig::new().on_key_press(move |_| sink.set(sink.get() + 1)),
    );
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    engine.dispatch(key(KeyCode::Right, KeyEventKind::Press));
    engine.dispatch(key(KeyCode::Right, KeyEventKind::Release));
    engine.dispatch(key(KeyCode::Right, KeyEventKind::Press));

    assert_eq!(presses.get(), 2);
}

#[test]
fn test_click_on_dot_center_fires_once() {
    let clicks = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicks);
    let mut engine = Engine::new(
        GameConfig::new().on_dot_clicked(move |x, y| sink.borrow_mut().push((x, y))),
    );
    // Default layout: 16-unit dots, 8-unit gaps, centers at 8, 32, 56, ...
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    engine.dispatch(SurfaceEvent::Pointer { x: 32.0, y: 8.0 });
    assert_eq!(*clicks.borrow(), vec![(1, 0)]);
}

#[test]
fn test_click_in_gap_or_outside_grid_is_ignored() {
    let clicks = Rc::new(Cell::new(0u32));
    let sink = Rc::clone(&clicks);
    let mut engine = Engine::new(
        GameConfig::new()
            .grid_width(3)
            .grid_height(3)
            .on_dot_clicked(move |_, _| sink.set(sink.get() + 1)),
    );
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    // Gap between the first two dots.
    engine.dispatch(SurfaceEvent::Pointer { x: 20.0, y: 8.0 });
    // Exactly on the rim: distance equals the radius, not strictly inside.
    engine.dispatch(SurfaceEvent::Pointer { x: 16.0, y: 8.0 });
    // Past the 3x3 grid.
    engine.dispatch(SurfaceEvent::Pointer { x: 80.0, y: 8.0 });
    engine.dispatch(SurfaceEvent::Pointer { x: -1.0, y: 8.0 });

    assert_eq!(clicks.get(), 0);
}

#[test]
fn test_hit_test_corner_of_cell_misses_the_circle() {
    let layout = DotLayout::new(16.0, 8.0);
    // Inside the bounding cell of dot (0, 0), outside the inscribed circle.
    assert_eq!(hit_test(15.0, 15.0, layout, 24, 24), None);
    // Just inside the circle along the x axis.
    assert_eq!(hit_test(15.9, 8.0, layout, 24, 24), Some((0, 0)));
}

#[test]
fn test_key_and_click_events_between_ticks_see_consistent_state() {
    let mut engine = Engine::new(GameConfig::new().grid_width(2).grid_height(2));
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    engine.tick().unwrap();
    engine.dispatch(key(KeyCode::Up, KeyEventKind::Press));
    // Dispatch without handlers is a no-op, not an error.
    engine.dispatch(SurfaceEvent::Pointer { x: 8.0, y: 8.0 });
    engine.tick().unwrap();
    assert_eq!(engine.frame_count(), 2);
}
