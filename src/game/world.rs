use super::constants::{
  BOT_COUNT, CAMERA_FOLLOW, FOOD_BIG_CHANCE, FOOD_BIG_SIZE, FOOD_COLOR, FOOD_COUNT, FOOD_GOLD_CHANCE,
  FOOD_JITTER, FOOD_SMALL_SIZE, GOLD_COLOR, MAX_TICK_DT, SEGMENT_VISUAL_SIZE, SPAWN_RADIUS,
};
use super::input::{parse_intent, TickInput};
use super::math::{lerp, point_on_ring};
use super::milestone::MilestoneState;
use super::schedule::RespawnSchedule;
use super::snake::{advance_creature, create_bot, create_player, steer_player};
use super::types::{
  Consumable, Creature, CreatureId, CreatureSnapshot, ItemId, Point, TargetRef, Tunables,
  WorldEvent, WorldSnapshot,
};
use crate::shared::names::bot_name;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

mod bots;
mod collision;
mod escalation;
mod lifecycle;


#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
  pub seed: Option<u64>,
  pub bot_count: usize,
  pub food_count: usize,
  pub player_name: String,
}

impl Default for WorldConfig {
  fn default() -> Self {
    Self {
      seed: None,
      bot_count: BOT_COUNT,
      food_count: FOOD_COUNT,
      player_name: "you".to_string(),
    }
  }
}

/// The whole simulation. Owned by a single tick driver; nothing in here is shared.
///
/// Creatures, food and orbs keep insertion order, and every nearest-item scan
/// walks them front to back, so the first entry wins a distance tie.
#[derive(Debug)]
pub struct World {
  creatures: Vec<Creature>,
  foods: Vec<Consumable>,
  orbs: Vec<Consumable>,
  tunables: Tunables,
  score: u64,
  milestone: MilestoneState,
  camera: Point,
  now_ms: f64,
  respawns: RespawnSchedule,
  events: Vec<WorldEvent>,
  rng: StdRng,
  next_item_id: u32,
  player: CreatureId,
}

impl World {
  pub fn new(config: &WorldConfig) -> Self {
    let rng = match config.seed {
      Some(seed) => StdRng::seed_from_u64(seed),
      None => StdRng::from_entropy(),
    };
    let mut world = Self {
      creatures: Vec::with_capacity(config.bot_count + 1),
      foods: Vec::with_capacity(config.food_count),
      orbs: Vec::new(),
      tunables: Tunables {
        spawn_radius: SPAWN_RADIUS,
        segment_visual_size: SEGMENT_VISUAL_SIZE,
      },
      score: 0,
      milestone: MilestoneState::default(),
      camera: Point::ZERO,
      now_ms: 0.0,
      respawns: RespawnSchedule::default(),
      events: Vec::new(),
      rng,
      next_item_id: 0,
      player: CreatureId(0),
    };

    let player = create_player(CreatureId(0), config.player_name.clone(), &mut world.rng);
    world.camera = player.position;
    world.creatures.push(player);
    for index in 0..config.bot_count {
      let id = CreatureId(world.creatures.len());
      let bot = create_bot(
        id,
        bot_name(index + 1),
        world.tunables.spawn_radius,
        &mut world.rng,
      );
      world.creatures.push(bot);
    }

    let origin = world.player_position();
    for _ in 0..config.food_count {
      world.spawn_food_near(origin);
    }

    tracing::debug!(
      bots = config.bot_count,
      foods = config.food_count,
      "world initialised"
    );
    world
  }

  pub fn drain_events(&mut self) -> Vec<WorldEvent> {
    std::mem::take(&mut self.events)
  }

  /// Advances the simulation by one frame.
  ///
  /// `elapsed_secs` is the wall time since the previous call. Pending respawns
  /// run on that clock, while motion integrates at most `MAX_TICK_DT` so a
  /// long frame hitch cannot fling creatures across the map.
  pub fn tick(&mut self, input: &TickInput, elapsed_secs: f64) {
    let elapsed = if elapsed_secs.is_finite() {
      elapsed_secs.max(0.0)
    } else {
      0.0
    };
    let dt = elapsed.min(MAX_TICK_DT);
    self.now_ms += elapsed * 1000.0;

    self.run_due_respawns();
    self.apply_player_input(input);

    for index in 0..self.creatures.len() {
      let Some(creature) = self.creatures.get(index) else { continue };
      if !creature.alive {
        continue;
      }
      if !creature.is_player {
        self.steer_bot(index, dt);
      }
      if let Some(creature) = self.creatures.get_mut(index) {
        advance_creature(creature, dt);
      }
    }

    self.follow_camera();
    self.consume_pickups();
    self.resolve_head_collisions();
    self.drain_orb_overflow();
  }

  pub fn snapshot(&self) -> WorldSnapshot {
    WorldSnapshot {
      now_ms: self.now_ms,
      score: self.score,
      camera: self.camera,
      tunables: self.tunables,
      creatures: self
        .creatures
        .iter()
        .map(|creature| CreatureSnapshot {
          id: creature.id,
          name: creature.name.clone(),
          color: creature.color.clone(),
          is_player: creature.is_player,
          alive: creature.alive,
          position: creature.position,
          direction: creature.direction,
          segments: creature.segments.clone(),
          upgrade_level: creature.upgrade_level,
        })
        .collect(),
      foods: self.foods.clone(),
      orbs: self.orbs.clone(),
    }
  }

  fn apply_player_input(&mut self, input: &TickInput) {
    let Some(player) = self.creatures.get_mut(self.player.0) else { return };
    if !player.alive {
      return;
    }
    if let Some(key) = input.key {
      player.direction = key.direction();
    }
    if let Some(target) = parse_intent(input.steer) {
      steer_player(player, target);
    }
  }

  fn follow_camera(&mut self) {
    let Some(player) = self.creatures.get(self.player.0) else { return };
    if player.alive {
      self.camera = lerp(self.camera, player.position, CAMERA_FOLLOW);
    }
  }

  fn player_position(&self) -> Point {
    self
      .creatures
      .get(self.player.0)
      .map(|player| player.position)
      .unwrap_or(Point::ZERO)
  }

  fn alloc_item_id(&mut self) -> ItemId {
    let id = ItemId(self.next_item_id);
    self.next_item_id = self.next_item_id.wrapping_add(1);
    id
  }

  fn target_position(&self, target: TargetRef) -> Option<Point> {
    let (items, id) = match target {
      TargetRef::Food(id) => (&self.foods, id),
      TargetRef::Orb(id) => (&self.orbs, id),
    };
    items.iter().find(|item| item.id == id).map(|item| item.position)
  }

  /// Drops one food item on a ring of `[r, 3r)` tiles around `center`, snapped to whole tiles.
  fn spawn_food_near(&mut self, center: Point) {
    let radius = self.tunables.spawn_radius;
    let angle = self.rng.gen::<f64>() * TAU;
    let distance = radius + self.rng.gen::<f64>() * radius * 2.0;
    let ring = point_on_ring(center, angle, distance);
    let position = Point {
      x: (ring.x + self.rng.gen_range(-FOOD_JITTER..FOOD_JITTER)).round(),
      y: (ring.y + self.rng.gen_range(-FOOD_JITTER..FOOD_JITTER)).round(),
    };
    let size = if self.rng.gen_bool(FOOD_BIG_CHANCE) {
      FOOD_BIG_SIZE
    } else {
      FOOD_SMALL_SIZE
    };
    let color = if self.rng.gen_bool(FOOD_GOLD_CHANCE) {
      GOLD_COLOR
    } else {
      FOOD_COLOR
    };
    let id = self.alloc_item_id();
    self.foods.push(Consumable {
      id,
      position,
      size,
      color: color.to_string(),
    });
  }
}

/// Read access used by tests; the driver only needs `snapshot`.
#[cfg(test)]
impl World {
  pub fn creatures(&self) -> &[Creature] {
    &self.creatures
  }

  pub fn foods(&self) -> &[Consumable] {
    &self.foods
  }

  pub fn orbs(&self) -> &[Consumable] {
    &self.orbs
  }

  pub fn score(&self) -> u64 {
    self.score
  }

  pub fn tunables(&self) -> Tunables {
    self.tunables
  }

  pub fn now_ms(&self) -> f64 {
    self.now_ms
  }

  pub fn player(&self) -> Option<&Creature> {
    self.creatures.get(self.player.0)
  }
}
