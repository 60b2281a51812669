pub mod constants;
pub mod input;
pub mod math;
pub mod milestone;
pub mod room;
pub mod schedule;
pub mod snake;
pub mod types;
pub mod world;
