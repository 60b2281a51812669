use super::*;
use crate::game::constants::{
    BOT_RESPAWN_LENGTH, BOT_RESPAWN_MS, INITIAL_LENGTH, MAX_ORBS_ON_DEATH, ORB_BIG_CHANCE,
    ORB_BIG_SIZE, ORB_JITTER, ORB_SMALL_SIZE, PLAYER_RESPAWN_MS,
};
use crate::game::math::random_direction;
use crate::game::snake::{collapsed_segments, segment_count};

impl World {
    /// Kills `victim`. A second call for an already dead creature does nothing.
    ///
    /// The body is scattered as orbs, the player is paid half the victim's
    /// length when it did the killing, and a respawn is queued.
    pub fn kill_creature(&mut self, victim: CreatureId, killer: Option<CreatureId>) {
        let Some(creature) = self.creatures.get_mut(victim.0) else { return };
        if !creature.alive {
            return;
        }
        creature.alive = false;
        let is_player = creature.is_player;
        let victim_length = creature.target_length;
        let segments = creature.segments.clone();
        tracing::debug!(victim = victim.0, killer = ?killer, is_player, "creature died");

        self.drop_remains(&segments);
        self.events.push(WorldEvent::CreatureDied {
            creature: victim,
            killer,
        });

        let paid_by_player = killer
            .filter(|killer| *killer != victim)
            .and_then(|killer| self.creatures.get(killer.0))
            .is_some_and(|killer| killer.is_player);
        if paid_by_player {
            self.award_score((victim_length / 2.0).floor() as u64);
        }

        let delay = if is_player {
            PLAYER_RESPAWN_MS
        } else {
            self.rng.gen_range(BOT_RESPAWN_MS.0..BOT_RESPAWN_MS.1)
        };
        self.respawns.schedule(victim, self.now_ms + delay);
    }

    /// Samples up to `MAX_ORBS_ON_DEATH` evenly spaced segments into orbs.
    fn drop_remains(&mut self, segments: &[Point]) {
        let total = segments.len();
        let count = total.min(MAX_ORBS_ON_DEATH);
        for i in 0..count {
            let Some(segment) = segments.get(i * total / count) else { continue };
            let position = Point {
                x: segment.x + self.rng.gen_range(-ORB_JITTER..ORB_JITTER),
                y: segment.y + self.rng.gen_range(-ORB_JITTER..ORB_JITTER),
            };
            let size = if self.rng.gen_bool(ORB_BIG_CHANCE) {
                ORB_BIG_SIZE
            } else {
                ORB_SMALL_SIZE
            };
            let id = self.alloc_item_id();
            self.orbs.push(Consumable {
                id,
                position,
                size,
                color: GOLD_COLOR.to_string(),
            });
        }
    }

    pub(super) fn run_due_respawns(&mut self) {
        for id in self.respawns.take_due(self.now_ms) {
            let Some(creature) = self.creatures.get(id.0) else { continue };
            if creature.is_player {
                self.respawn_player(id);
            } else {
                self.respawn_bot(id);
            }
            self.events.push(WorldEvent::CreatureRespawned { creature: id });
        }
    }

    /// Puts a bot back on a ring of `[r, 2r)` tiles around wherever the player is now.
    fn respawn_bot(&mut self, id: CreatureId) {
        let radius = self.tunables.spawn_radius;
        let angle = self.rng.gen::<f64>() * TAU;
        let distance = radius + self.rng.gen::<f64>() * radius;
        let position = point_on_ring(self.player_position(), angle, distance);
        let direction = random_direction(&mut self.rng);
        let length = self
            .rng
            .gen_range(BOT_RESPAWN_LENGTH.0..=BOT_RESPAWN_LENGTH.1) as f64;

        let Some(bot) = self.creatures.get_mut(id.0) else { return };
        bot.position = position;
        bot.direction = direction;
        bot.target_length = length;
        bot.segments = collapsed_segments(position, segment_count(length));
        bot.ai.target = None;
        bot.alive = true;
        tracing::debug!(bot = id.0, x = position.x, y = position.y, "bot respawned");
    }

    /// The score only drops back to zero here, not at the moment of death.
    fn respawn_player(&mut self, id: CreatureId) {
        let Some(player) = self.creatures.get_mut(id.0) else { return };
        player.position = Point::ZERO;
        player.direction = Point::new(1.0, 0.0);
        player.target_length = INITIAL_LENGTH;
        player.segments = collapsed_segments(Point::ZERO, segment_count(INITIAL_LENGTH));
        player.alive = true;
        self.score = 0;
        tracing::debug!(player = id.0, "player respawned");
    }
}
