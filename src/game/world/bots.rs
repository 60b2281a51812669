use super::*;
use crate::game::constants::{
    BOT_AVOID_BLEND, BOT_AVOID_RANGE, BOT_AVOID_WEIGHT, BOT_SEEK_BLEND, BOT_SEEK_RANGE,
    BOT_WANDER_KICK, WANDER_REARM_MS,
};
use crate::game::math::{blend_direction, direction_between, distance, normalize_or, scale};

impl World {
    /// One tick of bot steering: drop a stale target, pick the nearest food in
    /// range, then layer the wander kick, the seek blend and threat avoidance
    /// on top of each other.
    pub(super) fn steer_bot(&mut self, index: usize, dt: f64) {
        let Some(bot) = self.creatures.get(index) else { return };
        let head = bot.position;
        let kept = bot
            .ai
            .target
            .filter(|target| self.target_position(*target).is_some());
        let target = kept.or_else(|| self.pick_food_target(head));
        let goal = target.and_then(|target| self.target_position(target));
        let threat = self.nearest_threat(index);

        let Some(bot) = self.creatures.get_mut(index) else { return };
        bot.ai.change_timer_ms -= dt * 1000.0;
        bot.ai.target = target;

        if bot.ai.change_timer_ms <= 0.0 {
            bot.ai.change_timer_ms = self.rng.gen_range(WANDER_REARM_MS.0..WANDER_REARM_MS.1);
            let kicked = Point {
                x: bot.direction.x + self.rng.gen_range(-BOT_WANDER_KICK..BOT_WANDER_KICK),
                y: bot.direction.y + self.rng.gen_range(-BOT_WANDER_KICK..BOT_WANDER_KICK),
            };
            bot.direction = normalize_or(kicked, bot.direction);
        }

        if let Some(goal) = goal {
            blend_direction(&mut bot.direction, direction_between(head, goal), BOT_SEEK_BLEND);
        }

        if let Some((threat_head, dist)) = threat {
            if dist < BOT_AVOID_RANGE {
                let away = direction_between(threat_head, head);
                blend_direction(
                    &mut bot.direction,
                    scale(away, BOT_AVOID_WEIGHT),
                    BOT_AVOID_BLEND,
                );
            }
        }
    }

    /// Nearest food by head distance, adopted only inside `BOT_SEEK_RANGE`.
    /// Orbs are never picked as a fresh target.
    fn pick_food_target(&self, head: Point) -> Option<TargetRef> {
        let mut nearest: Option<(ItemId, f64)> = None;
        for food in &self.foods {
            let dist = distance(head, food.position);
            match nearest {
                Some((_, best)) if dist >= best => {}
                _ => nearest = Some((food.id, dist)),
            }
        }
        nearest
            .filter(|(_, dist)| *dist < BOT_SEEK_RANGE)
            .map(|(id, _)| TargetRef::Food(id))
    }

    fn nearest_threat(&self, index: usize) -> Option<(Point, f64)> {
        let head = self.creatures.get(index)?.position;
        let mut nearest: Option<(Point, f64)> = None;
        for (other_index, other) in self.creatures.iter().enumerate() {
            if other_index == index || !other.alive {
                continue;
            }
            let dist = distance(head, other.position);
            match nearest {
                Some((_, best)) if dist >= best => {}
                _ => nearest = Some((other.position, dist)),
            }
        }
        nearest
    }
}
