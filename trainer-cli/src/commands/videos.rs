use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use shared::models::{CategoryFilter, DEFAULT_DURATION, NewVideo, UploadFile, Video};

use super::{Settings, describe};

#[derive(Subcommand, Debug)]
pub enum VideosCommand {
    /// List videos, optionally limited to one category
    List {
        /// Category id (all, required, optional)
        #[arg(long, short, help = "Category id (all, required, optional). Defaults to all.")]
        category: Option<String>,
    },
    /// Show one video
    Show {
        /// Video id
        id: String,
    },
    /// Upload a new video (admin only)
    Add {
        #[arg(long, short)]
        title: String,
        #[arg(long, short)]
        category: String,
        #[arg(long, short, default_value = "")]
        description: String,
        #[arg(long, default_value = DEFAULT_DURATION)]
        duration: String,
        #[arg(long, default_value = "")]
        thumbnail: String,
        /// Media file to upload
        #[arg(long, short)]
        file: Option<PathBuf>,
    },
    /// Delete a video (admin only)
    Delete {
        /// Video id
        id: String,
    },
}

pub async fn run(settings: &Settings, command: VideosCommand) -> Result<()> {
    let api = settings.client()?;
    match command {
        VideosCommand::List { category } => {
            let filter = CategoryFilter::from(category.as_deref());
            let videos = api.videos(&filter).await.map_err(describe)?;
            if videos.is_empty() {
                println!("No videos.");
            }
            for video in &videos {
                print_row(video);
            }
        }
        VideosCommand::Show { id } => {
            let Some(video) = api.video(&id).await.map_err(describe)? else {
                bail!("video {id} not found");
            };
            print_details(&video);
        }
        VideosCommand::Add {
            title,
            category,
            description,
            duration,
            thumbnail,
            file,
        } => {
            api.require_admin().map_err(describe)?;
            let mut form = NewVideo::new(title, category);
            form.description = description;
            form.duration = duration;
            form.thumbnail = thumbnail;
            if let Some(path) = file {
                let bytes = fs::read(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                form.file = Some(UploadFile { file_name, bytes });
            }
            let video = api.add_video(form).await.map_err(describe)?;
            println!("Created {}", video.id);
            print_details(&video);
        }
        VideosCommand::Delete { id } => {
            api.require_admin().map_err(describe)?;
            api.delete_video(&id).await.map_err(describe)?;
            println!("Deleted {id}");
        }
    }
    Ok(())
}

pub fn categories(settings: &Settings) -> Result<()> {
    let api = settings.client()?;
    for category in api.categories() {
        println!("{}\t{}", category.id, category.name);
    }
    Ok(())
}

fn print_row(video: &Video) {
    println!(
        "{}\t{}\t{}\t{}",
        video.id,
        video.category.as_deref().unwrap_or("-"),
        video.duration_label(),
        video.title
    );
}

fn print_details(video: &Video) {
    println!("id: {}", video.id);
    println!("title: {}", video.title);
    println!("category: {}", video.category.as_deref().unwrap_or("-"));
    println!("duration: {}", video.duration_label());
    println!("url: {}", video.url);
    if let Some(thumbnail) = &video.thumbnail {
        println!("thumbnail: {thumbnail}");
    }
    if !video.description_or_empty().is_empty() {
        println!("description: {}", video.description_or_empty());
    }
    if let Some(created_at) = &video.created_at {
        println!("created: {created_at}");
    }
}
