use super::*;
use crate::game::constants::{
    BODY_HIT_RADIUS, FOOD_GROWTH_MAX, FOOD_GROWTH_MIN, ORB_GROWTH, ORB_HIGH_WATER, ORB_LOW_WATER,
    PICKUP_RADIUS,
};
use crate::game::math::distance;
use crate::game::snake::sync_segment_count;

impl World {
    /// Lets every living creature eat whatever its head overlaps. Lists are
    /// scanned back to front so removals never shift an index still to be visited.
    pub(super) fn consume_pickups(&mut self) {
        for index in 0..self.creatures.len() {
            let Some(creature) = self.creatures.get(index) else { continue };
            if !creature.alive {
                continue;
            }
            let head = creature.position;
            let is_player = creature.is_player;

            let mut i = self.foods.len();
            while i > 0 {
                i -= 1;
                let Some(food) = self.foods.get(i) else { continue };
                if distance(head, food.position) >= PICKUP_RADIUS {
                    continue;
                }
                self.foods.remove(i);
                let growth = self.rng.gen_range(FOOD_GROWTH_MIN..FOOD_GROWTH_MAX);
                if let Some(creature) = self.creatures.get_mut(index) {
                    creature.target_length += growth;
                    sync_segment_count(&mut creature.segments, creature.position, creature.target_length);
                }
                if is_player {
                    self.award_score(1);
                }
                // replacement lands around the eater, keeping the food count constant
                self.spawn_food_near(head);
            }

            let mut i = self.orbs.len();
            while i > 0 {
                i -= 1;
                let Some(orb) = self.orbs.get(i) else { continue };
                if distance(head, orb.position) >= PICKUP_RADIUS {
                    continue;
                }
                self.orbs.remove(i);
                if let Some(creature) = self.creatures.get_mut(index) {
                    creature.target_length += ORB_GROWTH;
                    sync_segment_count(&mut creature.segments, creature.position, creature.target_length);
                }
                if is_player {
                    self.award_score(1);
                }
            }
        }
    }

    /// Head of A against every body segment of every other living B. The first
    /// B in list order to be touched gets the kill.
    pub(super) fn resolve_head_collisions(&mut self) {
        let count = self.creatures.len();
        for attacker in 0..count {
            for owner in 0..count {
                if attacker == owner {
                    continue;
                }
                let (Some(a), Some(b)) = (self.creatures.get(attacker), self.creatures.get(owner)) else {
                    continue;
                };
                if !a.alive {
                    break;
                }
                if !b.alive {
                    continue;
                }
                let head = a.position;
                let hit = b
                    .segments
                    .iter()
                    .any(|segment| distance(head, *segment) < BODY_HIT_RADIUS);
                if hit {
                    self.kill_creature(CreatureId(attacker), Some(CreatureId(owner)));
                    break;
                }
            }
        }
    }

    /// Converts the most recently dropped orbs back into food once the orb
    /// population passes the high-water mark.
    pub(super) fn drain_orb_overflow(&mut self) {
        if self.orbs.len() <= ORB_HIGH_WATER {
            return;
        }
        let mut converted = 0usize;
        while self.orbs.len() > ORB_LOW_WATER {
            let Some(orb) = self.orbs.pop() else { break };
            let id = self.alloc_item_id();
            self.foods.push(Consumable { id, ..orb });
            converted += 1;
        }
        tracing::debug!(converted, "orb overflow drained into food");
    }
}
