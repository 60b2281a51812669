use super::*;
use crate::game::constants::{
    BOT_MAX_SPEED, MAX_SEGMENT_VISUAL_SIZE, MAX_UPGRADE_LEVEL, MILESTONE_BOT_PULL,
    MILESTONE_BOT_SPEEDUP, MILESTONE_DISPLAY_MS, MILESTONE_FOOD_PULL, MILESTONE_FOOD_SPREAD,
    MILESTONE_ORB_FACTOR, MILESTONE_PLAYER_SPEEDUP, MIN_SPAWN_RADIUS, PLAYER_MAX_SPEED,
    SEGMENT_VISUAL_STEP, SPAWN_RADIUS_STEP, WANDER_AGGRESSION, WANDER_MIN_MS,
};
use crate::game::milestone::milestone_word;

impl World {
    /// Adds to the player's score and fires the milestone escalation when the
    /// new total lands on a fresh multiple of the milestone step.
    pub(super) fn award_score(&mut self, points: u64) {
        self.score += points;
        if self.milestone.check(self.score) {
            self.escalate(self.score);
        }
    }

    fn escalate(&mut self, score: u64) {
        let word = milestone_word(score);
        tracing::info!(score, word, "milestone reached");
        self.events.push(WorldEvent::Milestone {
            score,
            word,
            duration_ms: MILESTONE_DISPLAY_MS,
        });

        let anchor = self.player_position();
        for food in &mut self.foods {
            let spread = self
                .rng
                .gen_range(MILESTONE_FOOD_SPREAD.0..MILESTONE_FOOD_SPREAD.1);
            food.position = lerp(food.position, anchor, MILESTONE_FOOD_PULL * spread);
        }
        for orb in &mut self.orbs {
            orb.position = lerp(orb.position, anchor, MILESTONE_FOOD_PULL * MILESTONE_ORB_FACTOR);
        }

        let player_index = self.player.0;
        for (index, bot) in self.creatures.iter_mut().enumerate() {
            if index == player_index {
                continue;
            }
            // head only; the body catches up through relaxation
            bot.position = lerp(bot.position, anchor, MILESTONE_BOT_PULL);
            bot.speed = (bot.speed + MILESTONE_BOT_SPEEDUP).min(BOT_MAX_SPEED);
            bot.ai.change_timer_ms = (bot.ai.change_timer_ms * WANDER_AGGRESSION).max(WANDER_MIN_MS);
        }

        self.tunables.spawn_radius =
            (self.tunables.spawn_radius - SPAWN_RADIUS_STEP).max(MIN_SPAWN_RADIUS);
        self.tunables.segment_visual_size =
            (self.tunables.segment_visual_size + SEGMENT_VISUAL_STEP).min(MAX_SEGMENT_VISUAL_SIZE);

        if let Some(player) = self.creatures.get_mut(player_index) {
            player.upgrade_level = (player.upgrade_level + 1).min(MAX_UPGRADE_LEVEL);
            player.speed = (player.speed + MILESTONE_PLAYER_SPEEDUP).min(PLAYER_MAX_SPEED);
        }
    }
}
