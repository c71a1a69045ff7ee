mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::color::Color;
use crate::decoration::{Decorations, StylePreset};
use crate::geometry::MinSize;
use crate::log::LogConfig;
use crate::runner::Settings;
use crate::window::WindowOptions;

pub use loader::{config_dir, config_path, load, resolve_path, write_template};

/// Top-level configuration for Curtain.
///
/// Loaded from `~/.config/curtain/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Initial placement and window-manager identity.
    pub window: WindowConfig,
    /// Drag and resize behaviour.
    pub interaction: InteractionConfig,
    /// Colors, opacity and decorations.
    pub appearance: AppearanceConfig,
    /// Log level and optional log file.
    pub logging: LogConfig,
}

/// Initial window placement and identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Window title (`WM_NAME` / `_NET_WM_NAME` on X11).
    pub title: String,
    /// Instance part of `WM_CLASS`.
    pub instance: String,
    /// Class part of `WM_CLASS`.
    pub class: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            x: 500,
            y: 900,
            width: 1600,
            height: 100,
            title: "Curtain".into(),
            instance: "curtain".into(),
            class: "Curtain".into(),
        }
    }
}

/// Drag and resize settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Size in pixels of the square resize handles in each corner.
    pub margin: i32,
    /// Width the window can never be resized below.
    pub min_width: i32,
    /// Height the window can never be resized below.
    pub min_height: i32,
    /// Show move/resize cursors over the handles.
    pub cursors: bool,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            margin: 20,
            min_width: 50,
            min_height: 50,
            cursors: true,
        }
    }
}

/// Appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Decoration preset: "plain", "outlined" or "indicators".
    pub style: StylePreset,
    /// Whole-window opacity from 0.0 (invisible) to 1.0 (opaque).
    pub opacity: f64,
    /// Hex color filling the window.
    pub background: String,
    /// Hex color for the border and corner indicators.
    pub accent: String,
    /// Border thickness in pixels.
    pub border_width: i32,
    /// Side length of the corner indicator squares in pixels.
    pub indicator_size: i32,
}

const DEFAULT_BACKGROUND: &str = "#000000";
const DEFAULT_ACCENT: &str = "#ff0000";

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            style: StylePreset::default(),
            opacity: 0.3,
            background: DEFAULT_BACKGROUND.into(),
            accent: DEFAULT_ACCENT.into(),
            border_width: 5,
            indicator_size: 20,
        }
    }
}

impl AppearanceConfig {
    pub fn background_color(&self) -> Color {
        Color::from_hex(&self.background).unwrap_or(Color::BLACK)
    }

    pub fn accent_color(&self) -> Color {
        Color::from_hex(&self.accent).unwrap_or(Color::RED)
    }

    pub fn decorations(&self) -> Decorations {
        Decorations {
            style: self.style.style(),
            border_width: self.border_width,
            indicator_size: self.indicator_size,
        }
    }
}

impl Config {
    /// Clamps values to safe ranges and repairs invalid colors.
    ///
    /// Returns a description of every value that had to be changed so
    /// the caller can log them once logging is up.
    pub fn validate(&mut self) -> Vec<String> {
        let mut notes = Vec::new();

        let i = &mut self.interaction;
        i.margin = i.margin.clamp(0, 500);
        i.min_width = i.min_width.clamp(1, 10_000);
        i.min_height = i.min_height.clamp(1, 10_000);

        let w = &mut self.window;
        w.width = w.width.max(self.interaction.min_width);
        w.height = w.height.max(self.interaction.min_height);

        let a = &mut self.appearance;
        if a.opacity.is_nan() {
            a.opacity = 1.0;
        }
        a.opacity = a.opacity.clamp(0.0, 1.0);
        a.border_width = a.border_width.clamp(0, 100);
        a.indicator_size = a.indicator_size.clamp(0, 500);

        let l = &mut self.logging;
        l.max_file_mb = l.max_file_mb.clamp(1, 1024);

        if Color::from_hex(&a.background).is_none() {
            notes.push(format!(
                "invalid background color {:?}, using {DEFAULT_BACKGROUND}",
                a.background
            ));
            a.background = DEFAULT_BACKGROUND.into();
        }
        if Color::from_hex(&a.accent).is_none() {
            notes.push(format!(
                "invalid accent color {:?}, using {DEFAULT_ACCENT}",
                a.accent
            ));
            a.accent = DEFAULT_ACCENT.into();
        }

        notes
    }

    /// Initial window geometry.
    pub fn geometry(&self) -> Rect {
        let w = &self.window;
        Rect::new(w.x, w.y, w.width, w.height)
    }

    pub fn min_size(&self) -> MinSize {
        MinSize::new(self.interaction.min_width, self.interaction.min_height)
    }

    /// Everything a backend needs to open the window.
    pub fn window_options(&self) -> WindowOptions {
        WindowOptions {
            geometry: self.geometry(),
            title: self.window.title.clone(),
            instance: self.window.instance.clone(),
            class: self.window.class.clone(),
            opacity: self.appearance.opacity,
            background: self.appearance.background_color(),
            accent: self.appearance.accent_color(),
        }
    }

    /// Event-loop settings derived from this config.
    pub fn settings(&self) -> Settings {
        Settings {
            margin: self.interaction.margin,
            min: self.min_size(),
            decorations: self.appearance.decorations(),
            cursors: self.interaction.cursors,
        }
    }
}

/// Parses an X-style geometry string: `WIDTHxHEIGHT` or
/// `WIDTHxHEIGHT+X+Y` (offsets may be negative, e.g. `+-20`).
pub fn parse_geometry(s: &str) -> Option<(i32, i32, Option<(i32, i32)>)> {
    let s = s.trim();
    let (size, offsets) = match s.find('+') {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let (w, h) = size.split_once(['x', 'X'])?;
    let width: i32 = w.parse().ok()?;
    let height: i32 = h.parse().ok()?;
    if width <= 0 || height <= 0 {
        return None;
    }

    let offset = match offsets {
        None => None,
        Some(rest) => {
            let (x, y) = rest.split_once('+')?;
            Some((x.parse().ok()?, y.parse().ok()?))
        }
    };

    Some((width, height, offset))
}
