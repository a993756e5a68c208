use anyhow::Result;
use clap::Subcommand;
use shared::format::format_time;
use shared::models::{CategoryFilter, WatchStatus, progress_for};

use super::{Settings, describe};

#[derive(Subcommand, Debug)]
pub enum ProgressCommand {
    /// Show watch status for every video
    List,
    /// Record a playback position
    Save {
        /// Video id
        id: String,
        /// Playback position in seconds
        #[arg(long, short)]
        timestamp: f64,
        /// Watch status (unwatched, in_progress, completed)
        #[arg(long, short, default_value = "in_progress", value_parser = parse_status)]
        status: WatchStatus,
    },
}

fn parse_status(value: &str) -> Result<WatchStatus, String> {
    match WatchStatus::from(value) {
        WatchStatus::Other(other) => Err(format!(
            "unknown status `{other}`; use unwatched, in_progress or completed"
        )),
        known => Ok(known),
    }
}

pub async fn run(settings: &Settings, command: ProgressCommand) -> Result<()> {
    let api = settings.client()?;
    let session = api.require_auth().map_err(describe)?;
    match command {
        ProgressCommand::List => {
            let progress = api.progress().await.map_err(describe)?;
            let videos = api.videos(&CategoryFilter::All).await.map_err(describe)?;
            println!("Progress for {}", session.email);
            for video in &videos {
                let record = progress_for(&progress, &video.id);
                println!(
                    "{}\t{}\t{} / {}\t{}\t{}",
                    video.id,
                    record.status,
                    format_time(record.timestamp),
                    video.duration_label(),
                    record.last_watched.as_deref().unwrap_or("-"),
                    video.title
                );
            }
        }
        ProgressCommand::Save {
            id,
            timestamp,
            status,
        } => {
            api.save_progress(&id, timestamp, status.clone())
                .await
                .map_err(describe)?;
            println!("Saved {id} at {} ({status})", format_time(timestamp));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_statuses() {
        assert_eq!(parse_status("completed"), Ok(WatchStatus::Completed));
        assert_eq!(parse_status("in_progress"), Ok(WatchStatus::InProgress));
        assert!(parse_status("paused").unwrap_err().contains("paused"));
    }
}
