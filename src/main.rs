use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod app;
mod game;
mod protocol;
mod shared;
mod transport;

use app::config::AppConfig;
use game::room::Room;
use game::world::World;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let config = AppConfig::from_env();
  tracing::info!(
    seed = ?config.world.seed,
    bots = config.world.bot_count,
    foods = config.world.food_count,
    tick_ms = config.tick_ms,
    "starting arena"
  );

  let world = World::new(&config.world);
  let room = Arc::new(Room::new(world, config.tick_ms, config.frame_every));

  let session = transport::stdio_session::run_stdio_session(Arc::clone(&room));
  tokio::pin!(session);

  let run_limit = async {
    match config.run_for {
      Some(limit) => tokio::time::sleep(limit).await,
      None => std::future::pending::<()>().await,
    }
  };

  let result = tokio::select! {
    result = &mut session => result,
    _ = tokio::signal::ctrl_c() => {
      tracing::info!("interrupted");
      room.stop().await;
      session.await
    }
    _ = run_limit => {
      tracing::info!("run limit reached");
      room.stop().await;
      session.await
    }
  };

  let snapshot = room.snapshot().await;
  tracing::info!(score = snapshot.score, elapsed_ms = snapshot.now_ms, "arena stopped");
  result
}
