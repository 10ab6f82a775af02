//! Engine tests - tick semantics, flush contents, termination

use std::cell::Cell;
use std::rc::Rc;

use tui_dots::core::{Engine, GameConfig};
use tui_dots::render::{MemoryRenderer, SurfaceEvent};
use tui_dots::types::Color;

#[test]
fn test_frame_count_follows_completed_ticks() {
    let mut engine = Engine::new(GameConfig::new().grid_width(2).grid_height(2));
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    assert_eq!(engine.frame_count(), 0);
    for n in 1..=5 {
        engine.tick().unwrap();
        assert_eq!(engine.frame_count(), n);
    }
}

#[test]
fn test_tick_clears_grid_by_default() {
    let mut engine = Engine::new(GameConfig::new().grid_width(2).grid_height(2));
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    engine.set_dot(0, 0, Color::Black).unwrap();
    engine.tick().unwrap();
    assert_eq!(engine.get_dot(0, 0), Ok(Color::Gray));
}

#[test]
fn test_clear_grid_disabled_keeps_dots_across_ticks() {
    let mut engine = Engine::new(
        GameConfig::new()
            .grid_width(2)
            .grid_height(2)
            .clear_grid(false),
    );
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    engine.set_dot(0, 0, Color::Black).unwrap();
    engine.tick().unwrap();
    assert_eq!(engine.get_dot(0, 0), Ok(Color::Black));
}

#[test]
fn test_update_is_not_called_after_end() {
    let updates = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&updates);
    let mut engine = Engine::new(
        GameConfig::new()
            .grid_width(2)
            .grid_height(2)
            .update(move |_| counter.set(counter.get() + 1)),
    );
    engine.attach(Box::new(MemoryRenderer::new())).unwrap();

    engine.tick().unwrap();
    engine.tick().unwrap();
    assert_eq!(updates.get(), 2);

    engine.end();
    engine.tick().unwrap();
    engine.tick().unwrap();
    engine.tick().unwrap();
    assert_eq!(updates.get(), 2, "no update may run after end()");
    assert_eq!(engine.frame_count(), 2);
}

#[test]
fn test_end_during_update_still_flushes_that_tick() {
    let mut engine = Engine::new(GameConfig::new().grid_width(3).grid_height(3).update(
        move |game| {
            game.end();
            game.set_dot(1, 1, Color::Red).unwrap();
        },
    ));
    let renderer = MemoryRenderer::new();
    let log = renderer.log();
    engine.attach(Box::new(renderer)).unwrap();

    engine.tick().unwrap();
    // The mutation after end() is part of the tick and reaches the flush.
    let log_ref = log.borrow();
    let frame = log_ref.last_frame().expect("the tick must flush");
    assert_eq!(frame.dot(1, 1), Some(Color::Red));
    drop(log_ref);

    engine.tick().unwrap();
    assert_eq!(log.borrow().frames.len(), 1, "no flush after cancellation");
}

#[test]
fn test_flush_pushes_every_cell_and_the_caption() {
    let mut engine = Engine::new(GameConfig::new().grid_width(3).grid_height(2));
    let renderer = MemoryRenderer::new();
    let log = renderer.log();
    engine.attach(Box::new(renderer)).unwrap();

    engine.set_dot(2, 1, Color::Green).unwrap();
    engine.set_text("hello");
    engine.flush().unwrap();

    let log = log.borrow();
    let frame = log.last_frame().unwrap();
    assert_eq!(frame.dots.len(), 6, "one push per cell, no dirty tracking");
    assert_eq!(frame.dot(2, 1), Some(Color::Green));
    assert_eq!(frame.dot(0, 0), Some(Color::Gray));
    assert_eq!(frame.text, "hello");
    // Row-major: y outer, x inner.
    let order: Vec<_> = frame.dots.iter().map(|&(x, y, _)| (x, y)).collect();
    assert_eq!(order, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
}

#[test]
fn test_run_with_calls_create_once_and_flushes_before_ticking() {
    let creates = Rc::new(Cell::new(0u32));
    let create_counter = Rc::clone(&creates);
    let mut engine = Engine::new(
        GameConfig::new()
            .grid_width(2)
            .grid_height(2)
            .frame_rate(250.0)
            .create(move |game| {
                create_counter.set(create_counter.get() + 1);
                game.set_dot(1, 0, Color::Blue).unwrap();
            })
            .update(|game| {
                if game.frame_count() >= 3 {
                    game.end();
                }
            }),
    );

    let renderer = MemoryRenderer::new();
    let log = renderer.log();
    engine.run_with(Box::new(renderer)).unwrap();

    assert_eq!(creates.get(), 1);
    assert_eq!(engine.frame_count(), 3);

    let log = log.borrow();
    // Initial post-create flush plus one per completed tick.
    assert_eq!(log.frames.len(), 4);
    assert_eq!(log.frames[0].dot(1, 0), Some(Color::Blue));
    // The default auto-clear wiped the create-time dot on the first tick.
    assert_eq!(log.frames[1].dot(1, 0), Some(Color::Gray));
}

#[test]
fn test_second_run_is_a_no_op() {
    let updates = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&updates);
    let mut engine = Engine::new(
        GameConfig::new()
            .grid_width(2)
            .grid_height(2)
            .frame_rate(250.0)
            .update(move |game| {
                counter.set(counter.get() + 1);
                game.end();
            }),
    );

    engine.run_with(Box::new(MemoryRenderer::new())).unwrap();
    assert_eq!(updates.get(), 1);

    // Ended is terminal; a renderer is already attached.
    engine.run_with(Box::new(MemoryRenderer::new())).unwrap();
    engine.run().unwrap();
    assert_eq!(updates.get(), 1);
    assert_eq!(engine.frame_count(), 1);
}

#[test]
fn test_quit_event_ends_the_game() {
    let mut engine = Engine::new(GameConfig::new().grid_width(2).grid_height(2));
    let mut renderer = MemoryRenderer::new();
    renderer.push_event(SurfaceEvent::Quit);

    engine.run_with(Box::new(renderer)).unwrap();
    assert!(engine.game().ended());
}
