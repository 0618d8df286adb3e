//! Geometry module - maps a time sample onto the three clock hands
//!
//! Pure functions from wall-clock time and dial radius to hand angles, tip
//! positions, and the numeral ring. Everything works in nannou's coordinate
//! space: origin at the window center, y pointing up.

use nannou::prelude::*;
use shared::TimeSample;
use std::f32::consts::PI;

/// Hand lengths as fractions of the dial radius
const HOUR_LENGTH_RATIO: f32 = 0.5;
const MINUTE_LENGTH_RATIO: f32 = 0.7;
const SECOND_LENGTH_RATIO: f32 = 0.9;

/// Stroke weights in pixels
const HOUR_WEIGHT: f32 = 6.0;
const MINUTE_WEIGHT: f32 = 4.0;
const SECOND_WEIGHT: f32 = 2.0;

/// The numerals sit on a ring inside the dial outline
const NUMERAL_RING_RATIO: f32 = 0.85;

/// Angles for the three hands, in degrees clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Stroke geometry for a single hand.
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    /// Degrees clockwise from 12 o'clock, in [0, 360) for valid input
    pub angle_deg: f64,
    /// Length in pixels
    pub length: f32,
    /// Stroke weight in pixels
    pub weight: f32,
}

impl Hand {
    /// Tip position for this hand anchored at `center`.
    pub fn tip(&self, center: Point2) -> Point2 {
        hand_tip(center, self.angle_deg, self.length)
    }
}

/// The three hands computed for one time sample.
#[derive(Debug, Clone, Copy)]
pub struct HandSet {
    pub hour: Hand,
    pub minute: Hand,
    pub second: Hand,
}

/// Compute the three hand angles for a time sample.
///
/// Each second is 6 degrees of the second hand's revolution. The minute
/// hand advances 1/60 of its own 6-degree step per second, and the hour
/// hand 1/12 of its 30-degree step per minute, so both sweep continuously
/// instead of snapping at their boundaries.
///
/// `seconds` may carry a fractional part; with whole seconds every angle
/// stays strictly below 360.
pub fn hand_angles(hour: u32, minute: u32, seconds: f64) -> HandAngles {
    let second = seconds * 6.0;
    let minute = minute as f64 * 6.0 + second / 60.0;
    let hour = (hour % 12) as f64 * 30.0 + minute / 12.0;
    HandAngles {
        hour,
        minute,
        second,
    }
}

/// Tip of a hand of `length` pixels at `angle_deg`, measured clockwise
/// from 12 o'clock.
pub fn hand_tip(center: Point2, angle_deg: f64, length: f32) -> Point2 {
    // Start at 12 o'clock (PI/2) and go clockwise (subtract angle)
    let theta = PI / 2.0 - (angle_deg as f32).to_radians();
    center + vec2(theta.cos(), theta.sin()) * length
}

/// Compute the three hands for a time sample and dial radius.
pub fn compute_hands(time: &TimeSample, radius: f32) -> HandSet {
    let angles = hand_angles(time.hour, time.minute, time.seconds());
    HandSet {
        hour: Hand {
            angle_deg: angles.hour,
            length: radius * HOUR_LENGTH_RATIO,
            weight: HOUR_WEIGHT,
        },
        minute: Hand {
            angle_deg: angles.minute,
            length: radius * MINUTE_LENGTH_RATIO,
            weight: MINUTE_WEIGHT,
        },
        second: Hand {
            angle_deg: angles.second,
            length: radius * SECOND_LENGTH_RATIO,
            weight: SECOND_WEIGHT,
        },
    }
}

/// Positions for the numerals 1-12, each centered on the ring at its
/// hour angle (numeral k at k * 30 degrees).
pub fn numeral_ring(center: Point2, radius: f32) -> Vec<(u32, Point2)> {
    (1..=12)
        .map(|numeral| {
            let position = hand_tip(center, numeral as f64 * 30.0, radius * NUMERAL_RING_RATIO);
            (numeral, position)
        })
        .collect()
}
