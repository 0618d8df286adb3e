//! Drawing module - dial, numerals, hands, and center hub
//!
//! Renders the wall clock face using nannou's Draw API.

use nannou::prelude::*;

use crate::geometry::{self, HandSet};

/// Color palette for the clock face
pub mod colors {
    use nannou::prelude::*;

    /// White face behind everything
    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 255,
        green: 255,
        blue: 255,
        standard: std::marker::PhantomData,
    };
    /// Dial outline, numerals, hour and minute hands
    pub const FOREGROUND: Srgb<u8> = Srgb {
        red: 0,
        green: 0,
        blue: 0,
        standard: std::marker::PhantomData,
    };
    /// Second hand
    pub const SECOND_HAND: Srgb<u8> = Srgb {
        red: 255,
        green: 0,
        blue: 0,
        standard: std::marker::PhantomData,
    };
}

/// Stroke weight of the dial outline
const DIAL_WEIGHT: f32 = 4.0;

/// Diameter of the filled hub covering the hand origins
const HUB_DIAMETER: f32 = 10.0;

/// Numeral font size
const NUMERAL_FONT_SIZE: u32 = 16;

/// Side of the square box each numeral is laid out in
const NUMERAL_BOX: f32 = 30.0;

/// Draw the dial outline centered on the face.
pub fn draw_dial(draw: &Draw, center: Point2, radius: f32) {
    draw_ring(draw, center, radius, DIAL_WEIGHT, colors::FOREGROUND);
}

/// Draw the numerals 1-12 on their ring inside the dial.
pub fn draw_numerals(draw: &Draw, center: Point2, radius: f32) {
    for (numeral, position) in geometry::numeral_ring(center, radius) {
        draw.text(&numeral.to_string())
            .xy(position)
            .color(colors::FOREGROUND)
            .font_size(NUMERAL_FONT_SIZE)
            .w_h(NUMERAL_BOX, NUMERAL_BOX);
    }
}

/// Draw the three hands as segments from the center to their tips.
pub fn draw_hands(draw: &Draw, hands: &HandSet, center: Point2) {
    for (hand, color) in [
        (hands.hour, colors::FOREGROUND),
        (hands.minute, colors::FOREGROUND),
        (hands.second, colors::SECOND_HAND),
    ] {
        draw.line()
            .start(center)
            .end(hand.tip(center))
            .weight(hand.weight)
            .color(color);
    }
}

/// Draw the filled hub over the hand origins.
pub fn draw_hub(draw: &Draw, center: Point2) {
    draw.ellipse()
        .xy(center)
        .w_h(HUB_DIAMETER, HUB_DIAMETER)
        .color(colors::FOREGROUND);
}

/// Draw a circle outline as a closed polyline
fn draw_ring(draw: &Draw, center: Point2, radius: f32, weight: f32, color: Srgb<u8>) {
    let segments = 120;
    let points: Vec<Point2> = (0..=segments)
        .map(|i| {
            let angle = (i as f32 / segments as f32) * TAU;
            center + vec2(angle.cos(), angle.sin()) * radius
        })
        .collect();

    draw.polyline().weight(weight).color(color).points(points);
}
