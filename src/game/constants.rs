pub const MAX_TICK_DT: f64 = 0.05;

pub const INITIAL_LENGTH: f64 = 9.0;
pub const MIN_SEGMENTS: usize = 3;
pub const SEGMENT_SPACING: f64 = 0.58;
pub const SEGMENT_PULL: f64 = 0.6;
pub const RELAX_EPSILON: f64 = 1e-4;
pub const MIN_MAGNITUDE: f64 = 1e-4;

pub const PLAYER_SPEED: f64 = 7.2;
pub const PLAYER_MAX_SPEED: f64 = 12.0;
pub const BOT_MIN_SPEED: f64 = 5.2;
pub const BOT_MAX_START_SPEED: f64 = 7.0;
pub const BOT_MAX_SPEED: f64 = 10.5;
pub const BOT_EXTRA_LENGTH_MIN: i64 = 4;
pub const BOT_EXTRA_LENGTH_MAX: i64 = 10;
pub const START_JITTER: i64 = 3;

pub const INPUT_DEADZONE: f64 = 0.02;
pub const PLAYER_TURN_BLEND: f64 = 0.18;

pub const BOT_SEEK_RANGE: f64 = 30.0;
pub const BOT_SEEK_BLEND: f64 = 0.08;
pub const BOT_AVOID_RANGE: f64 = 6.0;
pub const BOT_AVOID_BLEND: f64 = 0.2;
pub const BOT_AVOID_WEIGHT: f64 = 0.8;
pub const BOT_WANDER_KICK: f64 = 0.6;
pub const WANDER_INITIAL_MS: (f64, f64) = (600.0, 1400.0);
pub const WANDER_REARM_MS: (f64, f64) = (600.0, 1600.0);
pub const WANDER_MIN_MS: f64 = 200.0;
pub const WANDER_AGGRESSION: f64 = 0.7;

pub const PICKUP_RADIUS: f64 = 0.9;
pub const BODY_HIT_RADIUS: f64 = 0.6;
pub const FOOD_GROWTH_MIN: f64 = 1.0;
pub const FOOD_GROWTH_MAX: f64 = 2.8;
pub const ORB_GROWTH: f64 = 1.0;

pub const FOOD_COUNT: usize = 24;
pub const FOOD_JITTER: f64 = 6.0;
pub const FOOD_BIG_SIZE: f64 = 10.0;
pub const FOOD_SMALL_SIZE: f64 = 6.0;
pub const FOOD_BIG_CHANCE: f64 = 0.15;
pub const FOOD_GOLD_CHANCE: f64 = 0.2;
pub const FOOD_COLOR: &str = "#7cffb2";
pub const GOLD_COLOR: &str = "#ffd166";
pub const PLAYER_COLOR: &str = "#ffffff";

pub const MAX_ORBS_ON_DEATH: usize = 30;
pub const ORB_JITTER: f64 = 0.2;
pub const ORB_BIG_SIZE: f64 = 9.0;
pub const ORB_SMALL_SIZE: f64 = 5.0;
pub const ORB_BIG_CHANCE: f64 = 0.2;
pub const ORB_HIGH_WATER: usize = 120;
pub const ORB_LOW_WATER: usize = 80;

pub const BOT_COUNT: usize = 30;
pub const BOT_RESPAWN_MS: (f64, f64) = (2000.0, 5000.0);
pub const BOT_RESPAWN_LENGTH: (i64, i64) = (6, 12);
pub const PLAYER_RESPAWN_MS: f64 = 1500.0;

pub const SPAWN_RADIUS: f64 = 30.0;
pub const MIN_SPAWN_RADIUS: f64 = 14.0;
pub const SPAWN_RADIUS_STEP: f64 = 3.0;
pub const SEGMENT_VISUAL_SIZE: f64 = 14.0;
pub const MAX_SEGMENT_VISUAL_SIZE: f64 = 30.0;
pub const SEGMENT_VISUAL_STEP: f64 = 0.8;

pub const CAMERA_FOLLOW: f64 = 0.14;

pub const MILESTONE_STEP: u64 = 100;
pub const MILESTONE_DISPLAY_MS: u64 = 1500;
pub const MILESTONE_WORDS: [&str; 4] = ["Amazing!", "Awesome!", "Unstoppable!", "Godlike!"];
pub const MILESTONE_FOOD_PULL: f64 = 0.28;
pub const MILESTONE_FOOD_SPREAD: (f64, f64) = (0.9, 1.1);
pub const MILESTONE_ORB_FACTOR: f64 = 0.9;
pub const MILESTONE_BOT_PULL: f64 = 0.18;
pub const MILESTONE_BOT_SPEEDUP: f64 = 0.4;
pub const MILESTONE_PLAYER_SPEEDUP: f64 = 0.35;
pub const MAX_UPGRADE_LEVEL: u32 = 8;
