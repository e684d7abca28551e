// SPDX-License-Identifier: MPL-2.0
//! Line-oriented demo shell for the slideshow engine.
//!
//! Scans a directory into a listing and drives a `SlideshowController`
//! from stdin commands, printing what a real surface would render.

use foldershow::application::port::{MediaSurface, PlayerTransport};
use foldershow::application::MemoryHistory;
use foldershow::config::{self, SortOrder};
use foldershow::domain::MediaKind;
use foldershow::infrastructure::TokioTimerHost;
use foldershow::input::{Key, Modifiers};
use foldershow::listing::scanner::scan_listing;
use foldershow::router::SlideshowController;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// Surface that narrates to stdout instead of drawing.
#[derive(Debug, Default)]
struct TerminalSurface {
    image_source: Option<String>,
    player: Option<StubPlayer>,
}

#[derive(Debug, Default)]
struct StubPlayer {
    paused: bool,
    position: f64,
    ended: bool,
}

impl PlayerTransport for StubPlayer {
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn position_secs(&self) -> f64 {
        self.position
    }

    fn has_ended(&self) -> bool {
        self.ended
    }

    fn play(&mut self) {
        self.paused = false;
        println!("[player] play");
    }

    fn pause(&mut self) {
        self.paused = true;
        println!("[player] pause");
    }

    fn seek_by(&mut self, delta_secs: f64) {
        self.position = (self.position + delta_secs).max(0.0);
        println!("[player] seek {delta_secs:+}s -> {:.1}s", self.position);
    }
}

impl MediaSurface for TerminalSurface {
    fn has_image_surface(&self) -> bool {
        self.image_source.is_some()
    }

    fn create_image_surface(&mut self) {
        self.player = None;
        self.image_source = Some(String::new());
    }

    fn set_image_source(&mut self, target: &str) {
        if let Some(source) = self.image_source.as_mut() {
            target.clone_into(source);
        }
        if !target.is_empty() {
            println!("[surface] image {target}");
        }
    }

    fn mount_player(&mut self, kind: MediaKind, target: &str, poster: &str) {
        self.image_source = None;
        self.player = Some(StubPlayer::default());
        println!("[surface] {kind} player {target} (poster {poster})");
    }

    fn clear(&mut self) {
        self.image_source = None;
        self.player = None;
        println!("[surface] cleared");
    }

    fn set_waiting(&mut self, waiting: bool) {
        println!("[surface] waiting: {waiting}");
    }

    fn set_toolbar_visible(&mut self, visible: bool) {
        println!("[surface] toolbar: {visible}");
    }

    fn restore_focus(&mut self, target: &str) {
        println!("[surface] focus {target}");
    }

    fn player(&mut self) -> Option<&mut dyn PlayerTransport> {
        self.player
            .as_mut()
            .map(|player| player as &mut dyn PlayerTransport)
    }
}

const HELP: &str = "\
commands:
  list            show playable entries
  open <n>        open entry n
  n / p           next / previous
  space           toggle playback (or advance)
  m               pointer activity (toolbar)
  back / fwd      history back / forward
  loaded / failed media load completion / failure
  x               exit overlay
  q               quit";

fn parse_sort(value: &str) -> SortOrder {
    match value {
        "modified" => SortOrder::ModifiedDate,
        _ => SortOrder::Alphabetical,
    }
}

#[tokio::main]
async fn main() -> foldershow::error::Result<()> {
    let mut args = pico_args::Arguments::from_env();

    // The handle must stay alive for the duration of the program.
    let _logger = match flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(flexi_logger::Logger::start)
    {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("logger init failed: {err}");
            None
        }
    };

    let sort: Option<String> = args.opt_value_from_str("--sort").unwrap_or(None);
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or(None);
    let dir = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let config = match &config_path {
        Some(path) => config::load_from_path(path)?,
        None => config::load().unwrap_or_default(),
    };
    let sort_order = sort
        .as_deref()
        .map(parse_sort)
        .or(config.sort_order)
        .unwrap_or_default();

    let listing = scan_listing(&dir, sort_order)?;
    let targets: Vec<String> = listing
        .entries()
        .iter()
        .map(|entry| entry.target().to_string())
        .collect();
    println!("{} playable entries under {}", targets.len(), dir.display());

    let (timers, mut timer_rx) = TokioTimerHost::new();
    let origin = dir.to_string_lossy().into_owned();
    let mut controller = SlideshowController::new(
        listing,
        TerminalSurface::default(),
        MemoryHistory::new(origin),
        timers,
        &config,
    );

    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
    std::thread::spawn(move || {
        let mut buffer = String::new();
        while std::io::stdin().read_line(&mut buffer).unwrap_or(0) > 0 {
            if line_tx.send(buffer.trim().to_string()).is_err() {
                break;
            }
            buffer.clear();
        }
    });

    println!("{HELP}");
    loop {
        tokio::select! {
            Some(handle) = timer_rx.recv() => controller.timer_fired(handle),
            line = line_rx.recv() => {
                let Some(line) = line else { break };
                let mut words = line.split_whitespace();
                match words.next() {
                    Some("list") => {
                        for (index, target) in targets.iter().enumerate() {
                            println!("{index:3}  {target}");
                        }
                    }
                    Some("open") => {
                        let opened = words
                            .next()
                            .and_then(|raw| raw.parse::<usize>().ok())
                            .and_then(|index| targets.get(index))
                            .is_some_and(|target| controller.open_by_target(target));
                        if !opened {
                            println!("nothing to open");
                        }
                    }
                    Some("n") => controller.next(),
                    Some("p") => controller.previous(),
                    Some("space") => {
                        controller.handle_key(Key::Space, Modifiers::NONE);
                    }
                    Some("m") => controller.pointer_moved(),
                    Some("back") => {
                        if let Some(state) = controller.history_mut().port_mut().back() {
                            controller.history_popped(state);
                        } else {
                            println!("history: nothing before this");
                        }
                    }
                    Some("fwd") => {
                        if let Some(state) = controller.history_mut().port_mut().forward() {
                            controller.history_popped(state);
                        } else {
                            println!("history: nothing after this");
                        }
                    }
                    Some("loaded") => controller.media_loaded(),
                    Some("failed") => controller.media_failed(),
                    Some("x") => controller.exit(),
                    Some("q") => break,
                    Some(_) => println!("{HELP}"),
                    None => {}
                }
                println!(
                    "-- {} | address {}",
                    if controller.is_open() { "open" } else { "closed" },
                    controller.history().current_location()
                );
            }
        }
    }

    Ok(())
}
