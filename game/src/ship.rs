use crate::tuning::ShipTuning;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

impl Vec2d {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl AddAssign for Vec2d {
    fn add_assign(&mut self, rhs: Vec2d) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipCommand {
    TurnLeft,
    TurnRight,
    Burn,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    /// World position relative to the window centre, y up.
    pub position: Vec2d,
    /// Displacement per tick.
    pub velocity: Vec2d,
    /// Radians, counter-clockwise from +x. Never wrapped.
    pub heading: f64,
    pub thrust: f64,
    pub turn_increment: f64,
    /// Pending engine burn; consumed by the next `step`.
    pub thrusting: bool,
}

impl Ship {
    pub fn new(tuning: &ShipTuning) -> Self {
        Self {
            position: Vec2d::default(),
            velocity: Vec2d::default(),
            heading: tuning.initial_heading,
            thrust: tuning.thrust,
            turn_increment: tuning.turn_increment,
            thrusting: false,
        }
    }

    pub fn turn_left(&mut self) {
        self.heading += self.turn_increment;
    }

    pub fn turn_right(&mut self) {
        self.heading -= self.turn_increment;
    }

    pub fn burn(&mut self) {
        self.thrusting = true;
    }

    pub fn apply(&mut self, cmd: ShipCommand) {
        match cmd {
            ShipCommand::TurnLeft => self.turn_left(),
            ShipCommand::TurnRight => self.turn_right(),
            ShipCommand::Burn => self.burn(),
        }
    }

    /// One physics tick: apply a pending burn along the heading, then move.
    pub fn step(&mut self) {
        if self.thrusting {
            let (sin, cos) = self.heading.sin_cos();
            self.velocity += Vec2d::new(cos * self.thrust, sin * self.thrust);
            self.thrusting = false;
        }
        self.position += self.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn ship() -> Ship {
        Ship::new(&ShipTuning::default())
    }

    #[test]
    fn burn_then_step_pushes_along_heading() {
        let mut s = ship();
        s.burn();
        s.step();

        assert_abs_diff_eq!(s.velocity.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.velocity.y, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(s.position.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.position.y, 0.1, epsilon = 1e-12);
        assert!(!s.thrusting);
    }

    #[test]
    fn burn_at_arbitrary_heading() {
        let mut s = ship();
        s.heading = 2.5;
        s.thrust = 0.7;
        s.velocity = Vec2d::new(1.0, -2.0);
        s.burn();
        s.step();

        assert_abs_diff_eq!(s.velocity.x, 1.0 + 0.7 * 2.5_f64.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(s.velocity.y, -2.0 + 0.7 * 2.5_f64.sin(), epsilon = 1e-12);
    }

    #[test]
    fn step_without_burn_only_moves() {
        let mut s = ship();
        s.position = Vec2d::new(3.0, 4.0);
        s.velocity = Vec2d::new(-1.5, 0.25);
        s.step();

        assert_eq!(s.position, Vec2d::new(1.5, 4.25));
        assert_eq!(s.velocity, Vec2d::new(-1.5, 0.25));
    }

    #[test]
    fn repeated_burns_collapse_into_one_impulse() {
        let mut once = ship();
        once.burn();
        once.step();

        let mut thrice = ship();
        thrice.burn();
        thrice.burn();
        thrice.burn();
        thrice.step();

        assert_eq!(once, thrice);

        // flag was consumed, next step coasts
        thrice.step();
        assert_abs_diff_eq!(thrice.velocity.y, 0.1, epsilon = 1e-12);
        assert_abs_diff_eq!(thrice.position.y, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn turning_leaves_motion_alone() {
        let mut s = ship();
        s.velocity = Vec2d::new(0.3, 0.4);
        s.turn_left();
        s.turn_left();
        s.turn_left();

        assert_abs_diff_eq!(s.heading, FRAC_PI_2 + 3.0 * PI / 50.0, epsilon = 1e-12);
        assert_eq!(s.velocity, Vec2d::new(0.3, 0.4));
        assert_eq!(s.position, Vec2d::default());

        for _ in 0..5 {
            s.turn_right();
        }
        assert_abs_diff_eq!(s.heading, FRAC_PI_2 - 2.0 * PI / 50.0, epsilon = 1e-12);
    }

    #[test]
    fn heading_is_not_wrapped() {
        let mut s = ship();
        for _ in 0..200 {
            s.turn_left();
        }
        assert!(s.heading > 2.0 * PI);
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut s = ship();
        s.apply(ShipCommand::TurnLeft);
        s.apply(ShipCommand::TurnRight);
        s.apply(ShipCommand::Burn);

        assert_abs_diff_eq!(s.heading, FRAC_PI_2, epsilon = 1e-12);
        assert!(s.thrusting);
    }
}
