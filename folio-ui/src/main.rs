use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use tokio::sync::mpsc;

use folio_config::{Config, ConfigLoader};
use folio_model::{Bounds, OverlayKey};
use folio_ui::domains::ui::carousel::{self, CarouselConfig, CarouselEngine, CarouselMessage};
use folio_ui::domains::ui::{
    CardDeck, Lightbox, LightboxImage, OverlayRegistry, Pager, PagerConfig, PagerMessage, Shell,
    ShellMessage, Slideshow,
};
use folio_ui::infra::frames::FrameLoop;
use folio_ui::infra::headless::{HeadlessItem, HeadlessPagerHost, strip_text};

/// Run the folio components headlessly and print what they would render.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Args {
    /// Config file (TOML or JSON). Defaults to FOLIO_CONFIG_PATH or folio.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of carousel frames to run.
    #[arg(long, default_value_t = 120)]
    frames: usize,

    /// Bubbles on the carousel track.
    #[arg(long, default_value_t = 8)]
    items: usize,

    /// Cards in the charity overlay.
    #[arg(long, default_value_t = 45)]
    cards: usize,

    /// Charity page to show after opening the overlay.
    #[arg(long, default_value_t = 1)]
    page: usize,
}

const BUBBLE_SIZE: f32 = 120.0;
const TRACK_WIDTH: f32 = 960.0;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("folio_ui", LevelFilter::Debug)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let args = Args::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("failed to load folio configuration")?;
    for warning in load.warnings.iter() {
        log::warn!("{}", warning.message);
    }

    run_carousel(&load.config, &args).await?;
    run_charity_overlay(&load.config, &args);
    run_media(&load.config)?;
    Ok(())
}

async fn run_carousel(config: &Config, args: &Args) -> anyhow::Result<()> {
    let cfg = CarouselConfig::from_settings(&config.carousel);
    let track = Bounds::new(0.0, 0.0, TRACK_WIDTH, BUBBLE_SIZE);
    let Some(mut engine) =
        CarouselEngine::new(HeadlessItem::batch("company", args.items, BUBBLE_SIZE), track, cfg)
    else {
        println!("carousel: no items");
        return Ok(());
    };

    let (tx, mut rx) = mpsc::channel::<Instant>(8);
    let frames = FrameLoop::spawn(config.carousel.frame_interval, tx);

    let mut received = 0;
    while received < args.frames {
        let Some(now) = rx.recv().await else {
            break;
        };
        received += 1;
        carousel::update(&mut engine, CarouselMessage::Tick(now));
    }
    frames.stop();

    let centered = engine
        .items()
        .get(engine.centered_index())
        .map(|item| item.label.as_str())
        .unwrap_or("-");
    println!(
        "carousel: {received} frames, offset {:.1}px, centered {centered}",
        engine.base_offset(),
    );
    for (item, x) in engine.items().iter().zip(engine.positions()) {
        println!("  {:<12} x={x:>7.1} {:?}", item.label, item.slot());
    }
    Ok(())
}

fn run_charity_overlay(config: &Config, args: &Args) {
    let mut shell = Shell::new(OverlayRegistry::with_overlays([
        OverlayKey::About,
        OverlayKey::Charity,
        OverlayKey::Associations,
    ]));

    let cards = HeadlessItem::batch("charity", args.cards, 0.0);
    let mut deck = CardDeck::new(cards);
    if let Some(label) = deck.toggle(0) {
        println!("card 0 toggle now reads \"{label}\"");
    }

    match Pager::mount(
        deck.into_cards(),
        Some(HeadlessPagerHost::new()),
        PagerConfig::from_settings(&config.pager),
    ) {
        Some(pager) => shell.bind_pager(OverlayKey::Charity, Box::new(pager)),
        None => {
            println!("charity: nothing to paginate");
            return;
        }
    }

    shell.update(ShellMessage::Open(OverlayKey::Charity));
    shell.update(ShellMessage::Pager(OverlayKey::Charity, PagerMessage::Goto(args.page)));
    if let Some(pager) = shell.pager(&OverlayKey::Charity) {
        println!(
            "charity: page {} of {}  {}",
            pager.current_page(),
            pager.total_pages(),
            strip_text(&pager.controls())
        );
    }

    shell.update(ShellMessage::NavClick);
    if let Some(pager) = shell.pager(&OverlayKey::Charity) {
        println!("after navigation: page {}", pager.current_page());
    }
}

fn run_media(config: &Config) -> anyhow::Result<()> {
    let mut slideshow = Slideshow::from_settings(
        HeadlessItem::batch("slide", 3, 0.0),
        &config.slideshow,
    )
    .context("slideshow has no slides")?;
    let start = Instant::now();
    slideshow.tick(start);
    slideshow.tick(start + config.slideshow.interval);
    println!(
        "slideshow: slide {} of {} after one interval",
        slideshow.current() + 1,
        slideshow.len()
    );

    let images = ["team%20offsite.jpg", "stage.png"]
        .iter()
        .map(|name| {
            url::Url::parse(&format!("https://portfolio.example.com/media/{name}"))
                .map(|url| LightboxImage::new(url, *name))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mut lightbox = Lightbox::new(images, &config.lightbox);
    lightbox.open(0);
    if let (Some(name), Some(links)) = (lightbox.download_name(), lightbox.share()) {
        println!("lightbox: download as \"{name}\", share via {}", links.x);
    }
    Ok(())
}
