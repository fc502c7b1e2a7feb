//! Tabnav - Main Entry Point
//!
//! Restores the saved tab session, applies the actions read from stdin
//! (one JSON object per line), prints the resulting state and saves it.
//!
//! ```text
//! {"store":"tabs","command":{"action":"focus_tab","uid":"t1"}}
//! ```

use tabnav_application::use_cases::{RestoreSession, SaveSession};
use tabnav_application::{Action, Store};
use tabnav_infrastructure::{FileSessionRepository, SettingsRepository, config_dir, to_json_stable};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout carries only the final state.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let dir = config_dir().ok_or("could not determine config directory")?;
    info!(dir = %dir.display(), "using config directory");

    let settings = SettingsRepository::new(&dir).load().await?;
    let sessions = FileSessionRepository::new(&dir);

    let mut store = RestoreSession::new(sessions.clone())
        .execute(&settings)
        .await?;

    let applied = replay(&mut store, BufReader::new(tokio::io::stdin())).await?;
    info!(applied, "replayed actions");

    let mut stdout = tokio::io::stdout();
    stdout.write_all(to_json_stable(&store)?.as_bytes()).await?;
    stdout.flush().await?;

    if settings.persist_session {
        SaveSession::new(sessions).execute(&store).await?;
    }

    Ok(())
}

/// Dispatches every well-formed action line of `input` and returns how many
/// were applied. Blank lines are ignored; malformed ones are logged and skipped.
async fn replay<R>(store: &mut Store, input: R) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut line_number = 0_usize;
    let mut applied = 0_usize;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Action>(line) {
            Ok(action) => {
                store.dispatch(action);
                applied += 1;
            }
            Err(error) => warn!(line = line_number, %error, "skipping malformed action"),
        }
    }

    Ok(applied)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn replay_applies_actions_in_order() {
        let input = br#"{"store":"tabs","command":{"action":"add_tab","uid":"a","collection_uid":"c1","type":"http-request","preview":false}}
{"store":"tabs","command":{"action":"add_tab","uid":"b","collection_uid":"c1","type":"http-request","preview":false}}
{"store":"tabs","command":{"action":"focus_tab","uid":"a"}}
"#;
        let mut store = Store::new();

        let applied = replay(&mut store, &input[..]).await.unwrap();

        assert_eq!(applied, 3);
        assert_eq!(store.tabs().tabs().len(), 2);
        assert_eq!(store.tabs().active_tab_uid(), Some("a"));
    }

    #[tokio::test]
    async fn replay_skips_blank_and_malformed_lines() {
        let input = br#"
not json
{"store":"tabs","command":{"action":"explode"}}
{"store":"workspace_tabs","command":{"action":"set_active_workspace_tab","workspace_uid":"w1","type":"git"}}
"#;
        let mut store = Store::new();

        let applied = replay(&mut store, &input[..]).await.unwrap();

        assert_eq!(applied, 1);
        assert_eq!(store.workspace_tabs().active_tab_uid(), Some("w1-git"));
    }
}
