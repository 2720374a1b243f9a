use std::f64::consts::PI;
use std::time::Duration;

/// Flight characteristics of the ship.
///
/// Keep this separate from runtime configuration (window, frame rate).
#[derive(Debug, Clone, Copy)]
pub struct ShipTuning {
    /// Velocity change applied by one engine burn, in pixels per tick.
    pub thrust: f64,

    /// Heading change per turn input, in radians. Turning is applied once per
    /// rendered frame, so the effective turn rate follows the frame rate.
    pub turn_increment: f64,

    /// Time between physics steps.
    pub tick_interval: Duration,

    /// Heading at spawn; pi/2 points up the screen.
    pub initial_heading: f64,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            thrust: 0.1,
            turn_increment: PI / 50.0,
            tick_interval: Duration::from_millis(10),
            initial_heading: PI / 2.0,
        }
    }
}
