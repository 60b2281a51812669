use super::input::{AxisKey, SteerIntent, TickInput};
use super::types::WorldSnapshot;
use super::world::World;
use crate::protocol::{self, ClientMessage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;

#[cfg(test)]
mod tests;

const LOG_PREVIEW_CHARS: usize = 80;

/// First `LOG_PREVIEW_CHARS` characters of `text`, cut on a char boundary.
fn line_preview(text: &str) -> &str {
  match text.char_indices().nth(LOG_PREVIEW_CHARS) {
    Some((end, _)) => &text[..end],
    None => text,
  }
}

/// Drives a `World` on a fixed interval and streams frames to one sink.
#[derive(Debug)]
pub struct Room {
  state: Mutex<RoomState>,
  running: AtomicBool,
  tick_ms: u64,
}

#[derive(Debug)]
struct RoomState {
  world: World,
  steer: SteerIntent,
  pending_key: Option<AxisKey>,
  sink: Option<UnboundedSender<String>>,
  last_tick: Option<Instant>,
  frame_every: u64,
  frame: u64,
}

impl Room {
  pub fn new(world: World, tick_ms: u64, frame_every: u64) -> Self {
    Self {
      state: Mutex::new(RoomState {
        world,
        steer: SteerIntent::default(),
        pending_key: None,
        sink: None,
        last_tick: None,
        frame_every: frame_every.max(1),
        frame: 0,
      }),
      running: AtomicBool::new(false),
      tick_ms: tick_ms.max(1),
    }
  }

  pub async fn attach_sink(&self, sender: UnboundedSender<String>) {
    let mut state = self.state.lock().await;
    state.sink = Some(sender);
  }

  pub async fn handle_text_message(&self, text: &str) {
    let Some(message) = protocol::decode_client_message(text) else {
      tracing::warn!(
        len = text.len(),
        line = line_preview(text),
        "ignoring malformed client message"
      );
      return;
    };
    let mut state = self.state.lock().await;
    state.handle_client_message(message);
  }

  pub async fn snapshot(&self) -> WorldSnapshot {
    let state = self.state.lock().await;
    state.world.snapshot()
  }

  #[cfg(test)]
  pub fn is_running(&self) -> bool {
    self.running.load(Ordering::SeqCst)
  }

  /// Halts the tick loop and drops the sink, which closes the output stream.
  pub async fn stop(&self) {
    self.running.store(false, Ordering::SeqCst);
    let mut state = self.state.lock().await;
    state.sink = None;
  }

  pub fn ensure_loop(self: &Arc<Self>) {
    if self
      .running
      .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
      .is_err()
    {
      return;
    }

    let room = Arc::clone(self);
    tokio::spawn(async move {
      let mut interval = tokio::time::interval(Duration::from_millis(room.tick_ms));
      loop {
        interval.tick().await;
        if !room.running.load(Ordering::SeqCst) {
          break;
        }
        let mut state = room.state.lock().await;
        if state.sink.is_none() {
          room.running.store(false, Ordering::SeqCst);
          break;
        }
        state.tick(Instant::now());
      }
      tracing::debug!("room loop stopped");
    });
  }
}

impl RoomState {
  fn handle_client_message(&mut self, message: ClientMessage) {
    match message {
      ClientMessage::Steer(intent) => self.steer = intent,
      ClientMessage::Key(key) => self.pending_key = Some(key),
    }
  }

  fn tick(&mut self, now: Instant) {
    let elapsed = self
      .last_tick
      .map(|last| now.saturating_duration_since(last).as_secs_f64())
      .unwrap_or(0.0);
    self.last_tick = Some(now);
    self.step(elapsed);
  }

  /// One simulation step followed by its frames. A key press is consumed by
  /// the tick that sees it; the joystick intent persists until replaced.
  fn step(&mut self, elapsed_secs: f64) {
    let input = TickInput {
      steer: self.steer,
      key: self.pending_key.take(),
    };
    self.world.tick(&input, elapsed_secs);
    self.frame += 1;

    for event in self.world.drain_events() {
      match protocol::encode_event(&event) {
        Ok(payload) => self.send(payload),
        Err(error) => tracing::warn!(%error, "failed to encode event"),
      }
    }

    if self.frame % self.frame_every == 0 {
      match protocol::encode_state(&self.world.snapshot()) {
        Ok(payload) => self.send(payload),
        Err(error) => tracing::warn!(%error, "failed to encode state"),
      }
    }
  }

  fn send(&mut self, payload: String) {
    let Some(sink) = &self.sink else { return };
    if sink.send(payload).is_err() {
      tracing::debug!("render sink closed");
      self.sink = None;
    }
  }
}
