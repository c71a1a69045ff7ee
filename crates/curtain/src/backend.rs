//! Picks the windowing backend for the target platform.

use curtain_core::{Settings, WindowOptions};

/// Opens the overlay and runs it until it is closed.
#[cfg(windows)]
pub fn run(options: &WindowOptions, settings: &Settings) -> curtain_core::Result<()> {
    curtain_windows::enable_dpi_awareness();
    let mut window = curtain_windows::Win32Overlay::open(options)?;
    curtain_core::run(&mut window, settings)
}

/// Opens the overlay and runs it until it is closed.
#[cfg(all(unix, not(target_os = "macos")))]
pub fn run(options: &WindowOptions, settings: &Settings) -> curtain_core::Result<()> {
    let mut window = curtain_x11::X11Overlay::open(options)?;
    curtain_core::run(&mut window, settings)
}

#[cfg(not(any(windows, all(unix, not(target_os = "macos")))))]
pub fn run(_options: &WindowOptions, _settings: &Settings) -> curtain_core::Result<()> {
    Err(curtain_core::Error::Connect(
        "no supported windowing system on this platform".into(),
    ))
}
