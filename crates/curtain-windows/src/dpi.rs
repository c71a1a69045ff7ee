use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Opts the process into per-monitor (V2) DPI awareness.
///
/// Pointer positions and `SetWindowPos` then share physical pixels, so
/// the overlay tracks the cursor exactly while it is dragged across
/// monitors with different scaling. Call before the overlay is created.
pub fn enable_dpi_awareness() {
    // SAFETY: no pointers are passed. A failure (for example awareness
    // already set by a manifest) leaves the current mode in place.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}
