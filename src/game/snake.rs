use super::constants::{
    BOT_EXTRA_LENGTH_MAX, BOT_EXTRA_LENGTH_MIN, BOT_MAX_START_SPEED, BOT_MIN_SPEED,
    INITIAL_LENGTH, MIN_MAGNITUDE, MIN_SEGMENTS, PLAYER_COLOR, PLAYER_SPEED, PLAYER_TURN_BLEND,
    RELAX_EPSILON, SEGMENT_PULL, SEGMENT_SPACING, START_JITTER, WANDER_INITIAL_MS,
};
use super::math::{blend_direction, random_direction};
use super::types::{AiState, Creature, CreatureId, Point};
use rand::Rng;

pub fn segment_count(target_length: f64) -> usize {
    let whole = if target_length.is_finite() {
        target_length.floor().max(0.0) as usize
    } else {
        0
    };
    whole.max(MIN_SEGMENTS)
}

pub fn collapsed_segments(at: Point, count: usize) -> Vec<Point> {
    vec![at; count]
}

fn start_position<R: Rng>(rng: &mut R) -> Point {
    Point {
        x: rng.gen_range(-START_JITTER..=START_JITTER) as f64,
        y: rng.gen_range(-START_JITTER..=START_JITTER) as f64,
    }
}

fn base_creature<R: Rng>(
    id: CreatureId,
    name: String,
    is_player: bool,
    target_length: f64,
    rng: &mut R,
) -> Creature {
    let position = start_position(rng);
    let speed = if is_player {
        PLAYER_SPEED
    } else {
        rng.gen_range(BOT_MIN_SPEED..BOT_MAX_START_SPEED)
    };
    let color = if is_player {
        PLAYER_COLOR.to_string()
    } else {
        format!("hsl({},70%,70%)", rng.gen_range(0..360))
    };
    Creature {
        id,
        is_player,
        name,
        color,
        position,
        direction: random_direction(rng),
        speed,
        segments: collapsed_segments(position, segment_count(target_length)),
        target_length,
        spacing: SEGMENT_SPACING,
        alive: true,
        ai: AiState {
            change_timer_ms: rng.gen_range(WANDER_INITIAL_MS.0..WANDER_INITIAL_MS.1),
            target: None,
        },
        upgrade_level: 0,
    }
}

pub fn create_player<R: Rng>(id: CreatureId, name: String, rng: &mut R) -> Creature {
    base_creature(id, name, true, INITIAL_LENGTH, rng)
}

/// Bots start near the origin, scattered by up to `spawn_radius` tiles on each axis.
pub fn create_bot<R: Rng>(id: CreatureId, name: String, spawn_radius: f64, rng: &mut R) -> Creature {
    let extra = rng.gen_range(BOT_EXTRA_LENGTH_MIN..=BOT_EXTRA_LENGTH_MAX) as f64;
    let mut bot = base_creature(id, name, false, INITIAL_LENGTH + extra, rng);
    let reach = spawn_radius.floor().max(0.0) as i64;
    bot.position.x += rng.gen_range(-reach..=reach) as f64;
    bot.position.y += rng.gen_range(-reach..=reach) as f64;
    bot.segments = collapsed_segments(bot.position, segment_count(bot.target_length));
    bot
}

pub fn steer_player(creature: &mut Creature, target: Point) {
    blend_direction(&mut creature.direction, target, PLAYER_TURN_BLEND);
}

/// Grows the chain at the head or trims it from the tail to match `target_length`.
pub fn sync_segment_count(segments: &mut Vec<Point>, head: Point, target_length: f64) {
    let wanted = segment_count(target_length);
    if segments.len() < wanted {
        segments.resize(wanted, head);
    } else {
        segments.truncate(wanted);
    }
}

/// Single damped pass, head to tail. Each segment closes 60% of the slack to
/// its predecessor; segments already inside `spacing` are left alone.
pub fn relax_segments(head: Point, segments: &mut [Point], spacing: f64) {
    let mut prev = head;
    for segment in segments.iter_mut() {
        let dx = prev.x - segment.x;
        let dy = prev.y - segment.y;
        let dist = dx.hypot(dy).max(MIN_MAGNITUDE);
        let pull = (dist - spacing) * SEGMENT_PULL;
        if pull > RELAX_EPSILON {
            segment.x += dx / dist * pull;
            segment.y += dy / dist * pull;
        }
        prev = *segment;
    }
}

pub fn advance_creature(creature: &mut Creature, dt: f64) {
    creature.position.x += creature.direction.x * creature.speed * dt;
    creature.position.y += creature.direction.y * creature.speed * dt;
    sync_segment_count(&mut creature.segments, creature.position, creature.target_length);
    relax_segments(creature.position, &mut creature.segments, creature.spacing);
}
