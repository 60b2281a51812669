use super::constants::MIN_MAGNITUDE;
use super::types::Point;
use rand::Rng;

pub fn length(point: Point) -> f64 {
  point.x.hypot(point.y)
}

pub fn distance(a: Point, b: Point) -> f64 {
  (a.x - b.x).hypot(a.y - b.y)
}

pub fn sub(a: Point, b: Point) -> Point {
  Point {
    x: a.x - b.x,
    y: a.y - b.y,
  }
}

pub fn scale(point: Point, factor: f64) -> Point {
  Point {
    x: point.x * factor,
    y: point.y * factor,
  }
}

pub fn normalize(point: Point) -> Point {
  let len = length(point);
  if !len.is_finite() || len == 0.0 {
    return Point::ZERO;
  }
  Point {
    x: point.x / len,
    y: point.y / len,
  }
}

/// Like `normalize`, but keeps `fallback` when `point` has no usable direction.
pub fn normalize_or(point: Point, fallback: Point) -> Point {
  let normalized = normalize(point);
  if normalized == Point::ZERO {
    fallback
  } else {
    normalized
  }
}

/// Unit vector from `from` toward `to`. The distance is floored at
/// `MIN_MAGNITUDE` so coincident points never divide by zero.
pub fn direction_between(from: Point, to: Point) -> Point {
  let delta = sub(to, from);
  let dist = length(delta).max(MIN_MAGNITUDE);
  scale(delta, 1.0 / dist)
}

pub fn lerp(from: Point, to: Point, t: f64) -> Point {
  Point {
    x: from.x + (to.x - from.x) * t,
    y: from.y + (to.y - from.y) * t,
  }
}

/// Moves `direction` a fraction of the way toward `target`, then restores unit length.
pub fn blend_direction(direction: &mut Point, target: Point, factor: f64) {
  let blended = lerp(*direction, target, factor);
  *direction = normalize_or(blended, *direction);
}

pub fn random_direction<R: Rng>(rng: &mut R) -> Point {
  let raw = Point {
    x: rng.gen_range(-1.0..1.0),
    y: rng.gen_range(-1.0..1.0),
  };
  normalize_or(raw, Point::new(1.0, 0.0))
}

pub fn point_on_ring(center: Point, angle: f64, radius: f64) -> Point {
  Point {
    x: center.x + angle.cos() * radius,
    y: center.y + angle.sin() * radius,
  }
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
  value.min(max).max(min)
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn normalize_zero_vector_stays_zero() {
    assert_eq!(normalize(Point::ZERO), Point::ZERO);
    assert_eq!(normalize(Point::new(f64::NAN, 1.0)), Point::ZERO);
  }

  #[test]
  fn normalize_or_uses_fallback_for_degenerate_input() {
    let fallback = Point::new(0.0, 1.0);
    assert_eq!(normalize_or(Point::ZERO, fallback), fallback);
    let unit = normalize_or(Point::new(3.0, 4.0), fallback);
    assert!((unit.x - 0.6).abs() < 1e-12);
    assert!((unit.y - 0.8).abs() < 1e-12);
  }

  #[test]
  fn direction_between_coincident_points_is_finite() {
    let dir = direction_between(Point::new(2.0, 2.0), Point::new(2.0, 2.0));
    assert!(dir.x.is_finite() && dir.y.is_finite());
    assert_eq!(dir, Point::ZERO);
  }

  #[test]
  fn blend_direction_keeps_unit_length() {
    let mut direction = Point::new(1.0, 0.0);
    for _ in 0..50 {
      blend_direction(&mut direction, Point::new(-0.6, 0.8), 0.18);
      assert!((length(direction) - 1.0).abs() < 1e-9);
    }
    assert!(direction.y > 0.7);
  }

  #[test]
  fn random_direction_is_unit() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
      let dir = random_direction(&mut rng);
      assert!((length(dir) - 1.0).abs() < 1e-9);
    }
  }

  #[test]
  fn distance_and_lerp() {
    assert!((distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)) - 5.0).abs() < 1e-12);
    assert_eq!(lerp(Point::new(0.0, 0.0), Point::new(10.0, -10.0), 0.25), Point::new(2.5, -2.5));
  }
}
