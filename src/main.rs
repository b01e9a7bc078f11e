// src/main.rs
use nannou::event::TouchPhase;
use nannou::prelude::*;
use std::sync::OnceLock;
use tracing::{error, info, warn, Level};

use ladderline::{
    config::Config,
    draw::NannouSurface,
    services::IntervalTimer,
    stage::{Stage, StageConfig},
    LadderError,
};

static CONFIG: OnceLock<Config> = OnceLock::new();

struct Model {
    stage: Stage<NannouSurface, IntervalTimer>,
}

fn main() {
    // Load config, then start logging at the configured level
    let config_path = Config::locate();
    let config = match &config_path {
        Some(path) => Config::load_from_path(path),
        None => Ok(Config::default()),
    };
    let level = config
        .as_ref()
        .ok()
        .and_then(|config| config.log_level().ok())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = config.unwrap_or_else(|err| fatal(err));
    match &config_path {
        Some(path) => info!("loaded config from {}", path.display()),
        None => warn!("no config file found, using defaults"),
    }
    CONFIG
        .set(config)
        .expect("config is only initialised once, in main");

    nannou::app(model).update(update).run();
}

fn fatal(err: LadderError) -> ! {
    error!("{}", err);
    std::process::exit(1)
}

fn model(app: &App) -> Model {
    let config = CONFIG.get_or_init(Config::default);

    // Create window
    let mut builder = app
        .new_window()
        .title(&config.window.title)
        .resizable(false)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .key_pressed(key_pressed);
    builder = if config.window.fullscreen {
        builder.fullscreen()
    } else {
        builder.size(config.window.width, config.window.height)
    };
    let window_id = builder
        .build()
        .unwrap_or_else(|err| fatal(LadderError::surface_unavailable(err.to_string())));
    let window = app
        .window(window_id)
        .unwrap_or_else(|| fatal(LadderError::surface_unavailable("window closed at startup")));

    // Geometry is fixed to the window size at construction.
    // A fullscreen request may not have applied yet on every platform.
    let rect = window.rect();
    let surface = NannouSurface::new(nannou::Draw::new(), rect.w(), rect.h());
    let stage_config = StageConfig::from_config(config);

    let stage = Stage::new(stage_config, surface, IntervalTimer::new())
        .unwrap_or_else(|err| fatal(err));
    Model { stage }
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.stage.press();
    }
}

fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    if touch.phase == TouchPhase::Started {
        model.stage.press();
    }
}

fn key_pressed(app: &App, _model: &mut Model, key: Key) {
    if matches!(key, Key::Q | Key::Escape) {
        app.quit();
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.stage.update(update.since_last);
}

// Submit the retained draw; it only changes when the stage renders
fn view(app: &App, model: &Model, frame: Frame) {
    if let Err(err) = model.stage.surface().draw().to_frame(app, &frame) {
        error!("failed to render frame: {:?}", err);
    }
}
