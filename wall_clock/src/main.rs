//! Wall Clock
//!
//! A fixed-size analog wall clock: a dial with twelve numerals and three
//! hands tracking the host's local time, redrawn once per second.

mod drawing;
mod geometry;

use nannou::prelude::*;
use shared::TimeSample;

use crate::drawing::{colors, draw_dial, draw_hands, draw_hub, draw_numerals};
use crate::geometry::compute_hands;

/// The client area is a fixed square
const WINDOW_SIZE: u32 = 400;

/// Dial radius in pixels
const DIAL_RADIUS: f32 = 150.0;

/// One redraw tick per second
const TICK_RATE_FPS: f64 = 1.0;

fn main() {
    nannou::app(model).update(update).run();
}

/// Application state
struct Model {
    /// Time sampled at the most recent tick
    time: TimeSample,
}

fn model(app: &App) -> Model {
    app.new_window()
        .title("Wall Clock")
        .size(WINDOW_SIZE, WINDOW_SIZE)
        .resizable(false)
        .view(view)
        .build()
        .unwrap();

    app.set_loop_mode(LoopMode::rate_fps(TICK_RATE_FPS));

    Model {
        time: TimeSample::now(),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    model.time = TimeSample::now();
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let center = app.window_rect().xy();

    draw.background().color(colors::BACKGROUND);

    draw_dial(&draw, center, DIAL_RADIUS);
    draw_numerals(&draw, center, DIAL_RADIUS);

    let hands = compute_hands(&model.time, DIAL_RADIUS);
    draw_hands(&draw, &hands, center);
    draw_hub(&draw, center);

    // A frame that fails to submit is dropped; the next tick redraws
    let _ = draw.to_frame(app, &frame);
}
