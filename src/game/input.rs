use super::constants::INPUT_DEADZONE;
use super::math::{clamp, normalize};
use super::types::Point;

/// Joystick-style steering intent sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SteerIntent {
    pub dx: f64,
    pub dy: f64,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKey {
    Up,
    Down,
    Left,
    Right,
}

impl AxisKey {
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Self::Up),
            "ArrowDown" => Some(Self::Down),
            "ArrowLeft" => Some(Self::Left),
            "ArrowRight" => Some(Self::Right),
            _ => None,
        }
    }

    /// Screen-space unit vector; y grows downward.
    pub fn direction(self) -> Point {
        match self {
            Self::Up => Point::new(0.0, -1.0),
            Self::Down => Point::new(0.0, 1.0),
            Self::Left => Point::new(-1.0, 0.0),
            Self::Right => Point::new(1.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub steer: SteerIntent,
    pub key: Option<AxisKey>,
}

/// Returns the unit steering target, or `None` when the stick is released,
/// inside the dead zone, or carries garbage.
pub fn parse_intent(intent: SteerIntent) -> Option<Point> {
    if !intent.active || !intent.dx.is_finite() || !intent.dy.is_finite() {
        return None;
    }
    let dx = clamp(intent.dx, -1.0, 1.0);
    let dy = clamp(intent.dy, -1.0, 1.0);
    if dx.abs() <= INPUT_DEADZONE && dy.abs() <= INPUT_DEADZONE {
        return None;
    }
    Some(normalize(Point { x: dx, y: dy }))
}
