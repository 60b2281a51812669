use super::*;
use crate::game::world::WorldConfig;
use tokio::sync::mpsc::{self, UnboundedReceiver};

fn make_world() -> World {
    World::new(&WorldConfig {
        seed: Some(11),
        bot_count: 3,
        food_count: 6,
        player_name: "tester".to_string(),
    })
}

fn make_state(frame_every: u64) -> (RoomState, UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let state = RoomState {
        world: make_world(),
        steer: SteerIntent::default(),
        pending_key: None,
        sink: Some(tx),
        last_tick: None,
        frame_every,
        frame: 0,
    };
    (state, rx)
}

fn frame_types(rx: &mut UnboundedReceiver<String>) -> Vec<String> {
    let mut types = Vec::new();
    while let Ok(payload) = rx.try_recv() {
        let json: serde_json::Value = serde_json::from_str(&payload).expect("valid json frame");
        types.push(json["type"].as_str().unwrap_or_default().to_string());
    }
    types
}

#[test]
fn every_step_emits_a_state_frame() {
    let (mut state, mut rx) = make_state(1);
    state.step(0.016);
    state.step(0.016);
    let states = frame_types(&mut rx)
        .into_iter()
        .filter(|kind| kind == "state")
        .count();
    assert_eq!(states, 2);
}

#[test]
fn frame_every_thins_state_frames() {
    let (mut state, mut rx) = make_state(3);
    for _ in 0..7 {
        state.step(0.016);
    }
    let states = frame_types(&mut rx)
        .into_iter()
        .filter(|kind| kind == "state")
        .count();
    assert_eq!(states, 2);
}

#[test]
fn world_events_are_forwarded() {
    let (mut state, mut rx) = make_state(1);
    state.world.kill_creature(crate::game::types::CreatureId(1), None);
    state.step(0.0);
    let types = frame_types(&mut rx);
    assert_eq!(types.first().map(String::as_str), Some("event"));
    assert_eq!(types.last().map(String::as_str), Some("state"));
}

#[test]
fn key_press_is_consumed_by_one_tick() {
    let (mut state, _rx) = make_state(1);
    state.handle_client_message(ClientMessage::Key(AxisKey::Down));
    assert_eq!(state.pending_key, Some(AxisKey::Down));
    state.step(0.0);
    assert_eq!(state.pending_key, None);
    let player = state.world.player().expect("player");
    assert_eq!(player.direction, crate::game::types::Point::new(0.0, 1.0));
}

#[test]
fn steer_intent_persists_between_ticks() {
    let (mut state, _rx) = make_state(1);
    let intent = SteerIntent {
        dx: -1.0,
        dy: 0.0,
        active: true,
    };
    state.handle_client_message(ClientMessage::Steer(intent));
    state.step(0.016);
    state.step(0.016);
    assert_eq!(state.steer, intent);
}

#[test]
fn closed_sink_is_dropped() {
    let (mut state, rx) = make_state(1);
    drop(rx);
    state.step(0.016);
    assert!(state.sink.is_none());
}

#[test]
fn first_tick_uses_zero_elapsed() {
    let (mut state, _rx) = make_state(1);
    let start = Instant::now();
    state.tick(start);
    assert_eq!(state.world.now_ms(), 0.0);
    state.tick(start + Duration::from_millis(20));
    assert!((state.world.now_ms() - 20.0).abs() < 1e-6);
}

#[tokio::test]
async fn malformed_text_leaves_input_untouched() {
    let room = Room::new(make_world(), 16, 1);
    room.handle_text_message("{oops").await;
    room.handle_text_message(r#"{"type":"key","key":"KeyW"}"#).await;
    let state = room.state.lock().await;
    assert_eq!(state.steer, SteerIntent::default());
    assert_eq!(state.pending_key, None);
}

#[tokio::test]
async fn text_messages_update_input() {
    let room = Room::new(make_world(), 16, 1);
    room.handle_text_message(r#"{"type":"input","dx":0.3,"dy":0.4,"active":true}"#)
        .await;
    room.handle_text_message(r#"{"type":"key","key":"ArrowRight"}"#)
        .await;
    let state = room.state.lock().await;
    assert!(state.steer.active);
    assert_eq!(state.steer.dx, 0.3);
    assert_eq!(state.pending_key, Some(AxisKey::Right));
}

#[tokio::test]
async fn loop_streams_frames_until_stopped() {
    let room = Arc::new(Room::new(make_world(), 2, 1));
    let (tx, mut rx) = mpsc::unbounded_channel();
    room.attach_sink(tx).await;
    room.ensure_loop();
    assert!(room.is_running());

    let payload = tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("frame before timeout")
        .expect("open sink");
    assert!(payload.contains(r#""type":"state""#));

    room.stop().await;
    assert!(!room.is_running());
    while tokio::time::timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("sink closes after stop")
        .is_some()
    {}
}

#[tokio::test]
async fn loop_exits_without_a_sink() {
    let room = Arc::new(Room::new(make_world(), 1, 1));
    room.ensure_loop();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!room.is_running());
}

#[test]
fn log_preview_caps_long_lines() {
    assert_eq!(line_preview("short"), "short");
    let long = "x".repeat(10_000);
    assert_eq!(line_preview(&long).len(), LOG_PREVIEW_CHARS);
    let wide = "é".repeat(100);
    assert_eq!(line_preview(&wide).chars().count(), LOG_PREVIEW_CHARS);
}
