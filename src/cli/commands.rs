//! Command implementations

use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::adapters::ChannelEventAdapter;
use crate::app::container::AppContainer;
use crate::cli::args::{ClipArgs, DetectArgs, DurationArgs};
use crate::config_initialization::AppConfig;
use crate::domain::model::ClipEvent;
use crate::output::{render_clip_list, render_event, render_platforms, render_share, share_message};
use crate::ports::ClipEventListener;

/// Execute the clip command
pub async fn clip(args: ClipArgs, container: &dyn AppContainer, config: &AppConfig) -> Result<()> {
    let interactor = container.clip_interactor();
    let language = config.language;

    let start = args.start.unwrap_or_else(|| config.default_start.clone());
    let end = args.end.unwrap_or_else(|| config.default_end.clone());
    info!("Creating {} clip(s) for range {} - {}", args.urls.len(), start, end);

    let (adapter, mut events) = ChannelEventAdapter::new();
    interactor
        .add_listener(Arc::new(adapter) as Arc<dyn ClipEventListener>)
        .await;

    let mut remaining = HashSet::new();
    for url in &args.urls {
        let clip = interactor
            .create(url, &start, &end)
            .await
            .with_context(|| format!("Failed to create clip for '{}'", url))?;
        remaining.insert(clip.id);
    }

    if args.no_wait {
        interactor.shutdown().await;
    } else {
        while !remaining.is_empty() {
            let Some(event) = events.recv().await else {
                break;
            };
            if let ClipEvent::StatusChanged { id, to, .. } = &event {
                if to.is_terminal() {
                    remaining.remove(id);
                }
            }
            if !args.json {
                println!("{}", render_event(&event, language));
            }
        }
        debug!("All scheduled transitions fired");
    }

    let clips = interactor.list_clips().await;
    if args.json {
        let json = serde_json::to_string_pretty(&clips)
            .context("Failed to serialize clip list to JSON")?;
        println!("{}", json);
    } else {
        print!("{}", render_clip_list(&clips, language));
    }

    if args.share {
        for clip in &clips {
            if let Err(e) = share_message(clip, language) {
                warn!("{}", e);
            }
            println!("{}", render_share(clip, language));
        }
    }

    Ok(())
}

/// Execute the duration command
pub fn duration(args: DurationArgs, container: &dyn AppContainer) -> Result<()> {
    let duration = container
        .clip_interactor()
        .duration(&args.start, &args.end)
        .context("Failed to compute clip duration")?;
    println!("{}", duration);
    Ok(())
}

/// Execute the detect command
pub fn detect(args: DetectArgs, container: &dyn AppContainer) -> Result<()> {
    let platform = container.clip_interactor().detect_platform(&args.url);
    debug!("Detected {} for {}", platform, args.url);
    println!("{}", platform);
    Ok(())
}

/// Execute the platforms command
pub fn platforms(config: &AppConfig) -> Result<()> {
    print!("{}", render_platforms(config.language));
    Ok(())
}
