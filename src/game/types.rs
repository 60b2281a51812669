use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Index of a creature in the world's creature list. Creatures are never
/// removed, so the index stays valid for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub usize);

/// Handle of a food item or orb. Ids are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

/// Weak reference to something a bot is chasing. Resolved against the live
/// collections every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRef {
  Food(ItemId),
  /// Fresh selection only ever picks food; orb targets are resolved but
  /// never chosen.
  #[allow(dead_code)]
  Orb(ItemId),
}

#[derive(Debug, Clone)]
pub struct AiState {
  pub change_timer_ms: f64,
  pub target: Option<TargetRef>,
}

#[derive(Debug, Clone)]
pub struct Creature {
  pub id: CreatureId,
  pub is_player: bool,
  pub name: String,
  pub color: String,
  pub position: Point,
  pub direction: Point,
  pub speed: f64,
  pub segments: Vec<Point>,
  pub target_length: f64,
  pub spacing: f64,
  pub alive: bool,
  pub ai: AiState,
  pub upgrade_level: u32,
}

/// Food and death orbs share one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consumable {
  pub id: ItemId,
  pub position: Point,
  pub size: f64,
  pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tunables {
  #[serde(rename = "spawnRadius")]
  pub spawn_radius: f64,
  #[serde(rename = "segmentSize")]
  pub segment_visual_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum WorldEvent {
  #[serde(rename = "milestone")]
  Milestone {
    score: u64,
    word: &'static str,
    #[serde(rename = "durationMs")]
    duration_ms: u64,
  },
  #[serde(rename = "died")]
  CreatureDied {
    creature: CreatureId,
    killer: Option<CreatureId>,
  },
  #[serde(rename = "respawned")]
  CreatureRespawned { creature: CreatureId },
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatureSnapshot {
  pub id: CreatureId,
  pub name: String,
  pub color: String,
  #[serde(rename = "isPlayer")]
  pub is_player: bool,
  pub alive: bool,
  pub position: Point,
  pub direction: Point,
  pub segments: Vec<Point>,
  #[serde(rename = "upgradeLevel")]
  pub upgrade_level: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot {
  #[serde(rename = "nowMs")]
  pub now_ms: f64,
  pub score: u64,
  pub camera: Point,
  pub tunables: Tunables,
  pub creatures: Vec<CreatureSnapshot>,
  pub foods: Vec<Consumable>,
  pub orbs: Vec<Consumable>,
}
