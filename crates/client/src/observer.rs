//! Headless observer driven by line commands on stdin.
use anyhow::{Result, anyhow, bail};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

use rpg_core::{Input, ItemId, ObserverId, Snapshot};
use rpg_runtime::{Observer, RuntimeHandle};

use crate::config::SnapshotFormat;
use crate::view::{SnapshotSummary, render_text};

pub const HELP: &str = "\
commands: w/a/s/d move | g take all | t <id> take | p <id> drop | e <id> equip
          f search | q quit | c close window | ? help";

/// Translates one command line. `Ok(None)` for blank lines.
pub fn parse_command(line: &str, observer: ObserverId) -> Result<Option<Input>> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };

    let input = match command {
        "w" => Input::Up,
        "a" => Input::Left,
        "s" => Input::Down,
        "d" => Input::Right,
        "g" => Input::TakeAll,
        "f" => Input::Search,
        "q" => Input::QuitGame,
        "c" => Input::CloseWindow(observer),
        "t" | "p" | "e" => {
            let id = words
                .next()
                .ok_or_else(|| anyhow!("'{command}' needs an item id"))?;
            let id = ItemId(
                id.parse()
                    .map_err(|_| anyhow!("'{id}' is not an item id"))?,
            );
            match command {
                "t" => Input::TakeItem(id),
                "p" => Input::DropItem(id),
                _ => Input::EquipItem(id),
            }
        }
        other => bail!("unknown command '{other}'"),
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument '{extra}'");
    }
    Ok(Some(input))
}

fn print_snapshot(snapshot: &Snapshot, format: SnapshotFormat) -> Result<()> {
    match format {
        SnapshotFormat::Text => println!("{}", render_text(snapshot)),
        SnapshotFormat::Json => {
            println!("{}", serde_json::to_string(&SnapshotSummary::from(snapshot))?)
        }
    }
    Ok(())
}

/// Prints snapshots and forwards stdin commands until the stream ends.
pub async fn run(observer: Observer, format: SnapshotFormat) -> Result<()> {
    eprintln!("{HELP}");
    run_with(observer, BufReader::new(tokio::io::stdin()), format).await
}

/// Drives `observer` from a command source.
///
/// Commands are forwarded on their own task so a full input queue never
/// stops this loop from draining snapshots. End of input closes the window;
/// the loop then drains the remaining snapshots.
async fn run_with<R>(mut observer: Observer, commands: R, format: SnapshotFormat) -> Result<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    info!(observer = %observer.id(), "observer attached");
    let forwarder = tokio::spawn(forward_commands(
        commands,
        observer.handle().clone(),
        observer.id(),
    ));

    while let Some(snapshot) = observer.recv().await {
        print_snapshot(&snapshot, format)?;
        if snapshot.status.is_terminal() {
            break;
        }
    }
    debug!(observer = %observer.id(), "snapshot stream ended");

    forwarder.abort();
    Ok(())
}

async fn forward_commands<R>(commands: R, handle: RuntimeHandle, id: ObserverId)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = commands.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(error) => {
                warn!(%error, "failed to read command");
                break;
            }
        };
        if line.trim() == "?" {
            eprintln!("{HELP}");
            continue;
        }
        match parse_command(&line, id) {
            Ok(Some(input)) => {
                if let Err(error) = handle.send_input(input).await {
                    warn!(%error, "runtime stopped accepting input");
                    return;
                }
            }
            Ok(None) => {}
            Err(error) => warn!(%error, "ignoring command"),
        }
    }

    if let Err(error) = handle.close_window(id).await {
        debug!(%error, "runtime gone before the window closed");
    }
}
