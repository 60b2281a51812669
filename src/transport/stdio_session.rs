use crate::game::room::Room;
use anyhow::Context;
use std::io::BufRead;
use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub async fn run_stdio_session(room: Arc<Room>) -> anyhow::Result<()> {
    let input = spawn_line_reader(std::io::BufReader::new(std::io::stdin()))?;
    run_session(room, input, tokio::io::stdout()).await
}

/// Reads lines on a detached OS thread and forwards them over a channel.
/// A read blocked there never holds up runtime shutdown. The thread ends at
/// EOF, on a read error, or once the receiver is dropped.
pub fn spawn_line_reader<R>(reader: R) -> anyhow::Result<UnboundedReceiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::Builder::new()
        .name("input-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(error) => {
                        tracing::warn!(%error, "failed to read input");
                        break;
                    }
                };
                if tx.send(line).is_err() {
                    break;
                }
            }
            tracing::debug!("input closed");
        })
        .context("failed to spawn input reader")?;
    Ok(rx)
}

/// Feeds input lines to the room and writes its frames out, one JSON object
/// per line. Input closing only ends the inbound half; the session lasts
/// until the room drops its sink or the writer fails.
pub async fn run_session<W>(
    room: Arc<Room>,
    mut input: UnboundedReceiver<String>,
    mut writer: W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    room.attach_sink(tx).await;
    room.ensure_loop();

    let send_task = tokio::spawn(async move {
        while let Some(payload) = rx.recv().await {
            writer
                .write_all(payload.as_bytes())
                .await
                .context("failed to write frame")?;
            writer.write_all(b"\n").await.context("failed to write frame")?;
            writer.flush().await.context("failed to flush output")?;
        }
        anyhow::Ok(())
    });

    let input_room = Arc::clone(&room);
    let recv_task = tokio::spawn(async move {
        while let Some(line) = input.recv().await {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            input_room.handle_text_message(line).await;
        }
    });

    let result = send_task.await.context("output task panicked")?;
    recv_task.abort();
    room.stop().await;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::{World, WorldConfig};
    use std::io::Cursor;
    use std::time::Duration;
    use tokio::io::{AsyncBufReadExt, BufReader};

    fn make_room() -> Arc<Room> {
        let world = World::new(&WorldConfig {
            seed: Some(5),
            bot_count: 2,
            food_count: 4,
            player_name: "you".to_string(),
        });
        Arc::new(Room::new(world, 2, 1))
    }

    #[tokio::test]
    async fn line_reader_forwards_lines_until_eof() {
        let reader = Cursor::new(b"first\nsecond\n".to_vec());
        let mut input = spawn_line_reader(reader).expect("reader thread");
        let mut lines = Vec::new();
        while let Some(line) = tokio::time::timeout(Duration::from_secs(2), input.recv())
            .await
            .expect("reader finishes")
        {
            lines.push(line);
        }
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test]
    async fn session_ends_on_stop_while_input_stays_open() {
        let room = make_room();
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        input_tx
            .send(r#"{"type":"key","key":"ArrowUp"}"#.to_string())
            .expect("queue key");
        input_tx.send("not json".to_string()).expect("queue junk");
        input_tx.send(String::new()).expect("queue blank");
        let (client, server) = tokio::io::duplex(1 << 16);

        let session = tokio::spawn(run_session(Arc::clone(&room), input_rx, server));

        let mut lines = BufReader::new(client).lines();
        let first = tokio::time::timeout(Duration::from_secs(2), lines.next_line())
            .await
            .expect("frame before timeout")
            .expect("readable output")
            .expect("a line");
        let json: serde_json::Value = serde_json::from_str(&first).expect("json line");
        assert_eq!(json["type"], "state");

        room.stop().await;
        let result = tokio::time::timeout(Duration::from_secs(2), async {
            while let Ok(Some(_)) = lines.next_line().await {}
            session.await
        })
        .await
        .expect("session ends after stop")
        .expect("session task");
        assert!(result.is_ok());
        assert!(!room.is_running());
        drop(input_tx);
    }

    #[tokio::test]
    async fn closed_output_ends_session() {
        let room = make_room();
        let (client, server) = tokio::io::duplex(64);
        drop(client);
        let (_input_tx, input_rx) = mpsc::unbounded_channel();

        let result = tokio::time::timeout(
            Duration::from_secs(2),
            run_session(Arc::clone(&room), input_rx, server),
        )
        .await
        .expect("session ends");
        assert!(result.is_err());
        assert!(!room.is_running());
    }
}
