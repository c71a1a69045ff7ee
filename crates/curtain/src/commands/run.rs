use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use tracing::{debug, info, warn};

use curtain_core::config::{self, Config, parse_geometry};
use curtain_core::{StylePreset, log};

use crate::backend;

/// Decoration style accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// No decorations
    Plain,
    /// Border always visible
    Outlined,
    /// Border and corner squares while hovering
    Indicators,
}

impl From<StyleArg> for StylePreset {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Plain => StylePreset::Plain,
            StyleArg::Outlined => StylePreset::Outlined,
            StyleArg::Indicators => StylePreset::Indicators,
        }
    }
}

/// Size and optional position parsed from `--geometry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: i32,
    pub height: i32,
    pub offset: Option<(i32, i32)>,
}

fn parse_geometry_arg(s: &str) -> Result<Geometry, String> {
    parse_geometry(s)
        .map(|(width, height, offset)| Geometry {
            width,
            height,
            offset,
        })
        .ok_or_else(|| format!("expected WIDTHxHEIGHT or WIDTHxHEIGHT+X+Y, got {s:?}"))
}

/// Arguments for running the overlay. Each one overrides the config file.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Config file to read (default: ~/.config/curtain/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Decoration style
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,
    /// Size of the corner resize handles in pixels
    #[arg(long, value_name = "N")]
    pub margin: Option<i32>,
    /// Smallest width the overlay can be resized to
    #[arg(long, value_name = "N")]
    pub min_width: Option<i32>,
    /// Smallest height the overlay can be resized to
    #[arg(long, value_name = "N")]
    pub min_height: Option<i32>,
    /// Window opacity from 0.0 to 1.0
    #[arg(long, value_name = "F")]
    pub opacity: Option<f64>,
    /// Initial geometry as WIDTHxHEIGHT or WIDTHxHEIGHT+X+Y
    #[arg(long, value_name = "GEOMETRY", value_parser = parse_geometry_arg, allow_hyphen_values = true)]
    pub geometry: Option<Geometry>,
}

/// Applies command-line overrides on top of the loaded config.
pub fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(style) = args.style {
        config.appearance.style = style.into();
    }
    if let Some(margin) = args.margin {
        config.interaction.margin = margin;
    }
    if let Some(w) = args.min_width {
        config.interaction.min_width = w;
    }
    if let Some(h) = args.min_height {
        config.interaction.min_height = h;
    }
    if let Some(opacity) = args.opacity {
        config.appearance.opacity = opacity;
    }
    if let Some(g) = args.geometry {
        config.window.width = g.width;
        config.window.height = g.height;
        if let Some((x, y)) = g.offset {
            config.window.x = x;
            config.window.y = y;
        }
    }
}

/// Loads the config, opens the overlay and runs it until it is closed.
pub fn execute(args: &RunArgs) -> anyhow::Result<()> {
    let (mut config, load_error) = match config::load(args.config.as_deref()) {
        Ok(c) => (c, None),
        Err(e) => (Config::default(), Some(e)),
    };
    apply_overrides(&mut config, args);
    let notes = config.validate();

    if let Some(path) = log::init(&config.logging) {
        info!("Logging to {}", path.display());
    }
    if let Some(e) = load_error {
        warn!("{e}; using defaults");
    }
    for note in notes {
        warn!("{note}");
    }

    let settings = config.settings();
    let options = config.window_options();
    debug!(?settings, "Starting overlay");

    backend::run(&options, &settings).context("overlay failed")?;
    Ok(())
}
