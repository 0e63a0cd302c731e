//! Unix-socket control surface: one contact event or control command per
//! line. This is the inbound half of the engine's boundary for headless
//! use; a windowing embedding would feed the engine directly.

use crate::events::AppEvent;
use async_channel::Sender;
use roundel::{ContactId, Point};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

pub const SOCKET_PATH: &str = "/tmp/rondo.sock";

/// Parse one control line.
///
/// `down <id> <x> <y>` | `move <id> <x> <y>` | `up <id>` |
/// `octave up` | `octave down` | `reload` | `quit`
pub fn parse_line(line: &str) -> Option<AppEvent> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        ["down", id, x, y] => Some(AppEvent::Down(parse_id(id)?, parse_point(x, y)?)),
        ["move", id, x, y] => Some(AppEvent::Move(parse_id(id)?, parse_point(x, y)?)),
        ["up", id] => Some(AppEvent::Up(parse_id(id)?)),
        ["octave", "up"] => Some(AppEvent::OctaveUp),
        ["octave", "down"] => Some(AppEvent::OctaveDown),
        ["reload"] => Some(AppEvent::ConfigReload),
        ["quit"] => Some(AppEvent::Quit),
        _ => None,
    }
}

fn parse_id(s: &str) -> Option<ContactId> {
    s.parse::<u64>().ok().map(ContactId::new)
}

fn parse_point(x: &str, y: &str) -> Option<Point> {
    Some(Point::new(x.parse().ok()?, y.parse().ok()?))
}

pub async fn run_server(tx: Sender<AppEvent>) {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = match UnixListener::bind(SOCKET_PATH) {
        Ok(l) => l,
        Err(e) => {
            log::error!("Failed to bind unix socket: {e}");
            return;
        }
    };

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match parse_line(&line) {
                            Some(event) => {
                                if tx.send(event).await.is_err() {
                                    break;
                                }
                            }
                            None => {
                                if !line.trim().is_empty() {
                                    log::warn!("Ignoring malformed control line: {line:?}");
                                }
                            }
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {e}");
            }
        }
    }
}
