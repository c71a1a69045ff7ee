/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `curtain init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Curtain configuration
# Location: ~/.config/curtain/config.toml

[window]
# Initial position and size in pixels.
x = 500
y = 900
width = 1600
height = 100
# Title and WM_CLASS reported to the window manager.
title = "Curtain"
instance = "curtain"
class = "Curtain"

[interaction]
# Size of the square resize handles in each corner. Pressing anywhere
# else drags the window.
margin = 20
# The window is never resized below this size.
min_width = 50
min_height = 50
# Show move/resize cursors over the handles.
cursors = true

[appearance]
# Decorations: "plain" (none), "outlined" (border always visible), or
# "indicators" (border and corner squares while hovering).
style = "indicators"
# Whole-window opacity, 0.0 to 1.0. Needs a compositor below 1.0.
opacity = 0.3
# Fill color and decoration color (hex).
background = "#000000"
accent = "#ff0000"
# Border thickness and corner indicator size in pixels.
border_width = 5
indicator_size = 20
# For a solid grey block with larger handles, use:
# style = "plain", opacity = 1.0, background = "#808080"
# and margin = 16, min_width = 100, min_height = 100 above.

[logging]
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Also write logs to ~/.config/curtain/logs/curtain.log.
file = false
# Maximum log file size in MB before rotation (1 to 1024).
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_config()).unwrap();
        assert_eq!(config, Config::default());
    }
}
