mod core;
mod resource;
#[cfg(test)]
mod test_support;
mod tui;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::core::config::{self, LecternConfig};
use crate::core::display::ContextViewMode;
use crate::core::session;
use crate::core::state::App;
use crate::core::verse_key::VerseKey;
use crate::resource::{BibleResource, UsfmResource};

#[derive(Parser)]
#[command(name = "lectern", about = "Terminal Bible resource viewer")]
struct Args {
    /// Directory of USFM files to load
    #[arg(short, long)]
    resource: Option<PathBuf>,

    /// Starting reference, e.g. "JHN 3:16"
    #[arg(short = 'g', long)]
    reference: Option<String>,

    /// Context view mode
    #[arg(short, long, value_enum)]
    view: Option<ContextViewMode>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to lectern.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("lectern.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Lectern starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config: {}", e);
            LecternConfig::default()
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.reference.as_deref(),
        args.view,
        args.resource.as_deref(),
    );

    let mut load_warning: Option<String> = None;
    let source: Arc<dyn BibleResource> = match UsfmResource::load(&resolved.resource_dir) {
        Ok(resource) => Arc::new(resource),
        Err(e) => {
            log::warn!(
                "Could not load {}: {}; falling back to the built-in sample",
                resolved.resource_dir.display(),
                e
            );
            load_warning = Some(format!(
                "Could not load {} (showing built-in sample)",
                resolved.resource_dir.display()
            ));
            match UsfmResource::sample() {
                Ok(resource) => Arc::new(resource),
                Err(e) => {
                    return Err(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        e.to_string(),
                    ));
                }
            }
        }
    };

    // Resume where the reader left off, unless --reference overrides it.
    let saved = if args.reference.is_none() {
        session::load_viewer_state()
    } else {
        None
    };
    let reference = saved
        .as_ref()
        .map(|s| s.reference.clone())
        .unwrap_or_else(|| resolved.start_reference.clone());
    let view_mode = args
        .view
        .or(saved.as_ref().map(|s| s.view_mode))
        .unwrap_or(resolved.view_mode);

    let start = match reference.parse::<VerseKey>() {
        Ok(key) if source.book_codes().iter().any(|b| b == key.book()) => key,
        _ => {
            let first = source.first_book().unwrap_or("JHN").to_string();
            log::warn!(
                "Reference {:?} not in the loaded text, starting at {} 1:1",
                reference,
                first
            );
            VerseKey::new(&first, 1, 1)
        }
    };

    log::info!(
        "Opening {} at {} ({} view)",
        source.name(),
        start,
        view_mode.label()
    );

    let mut app = App::new(source, start, view_mode);
    app.verses_before = resolved.verses_before;
    app.verses_after = resolved.verses_after;
    app.status_message = match load_warning {
        Some(warning) => warning,
        None => app.current_reference(),
    };

    tui::run(app)
}
