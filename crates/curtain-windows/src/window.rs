use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::sync::Once;

use curtain_core::{InputEvent, OverlayWindow, Point, Rect, Region, Shape, WindowOptions};
use tracing::{debug, info};
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, ClientToScreen, CreateSolidBrush, DeleteObject, EndPaint, FillRect, GetDC, HBRUSH,
    HDC, PAINTSTRUCT, ReleaseDC,
};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    ReleaseCapture, SetCapture, TME_LEAVE, TRACKMOUSEEVENT, TrackMouseEvent,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, DispatchMessageW, GetClientRect, GetMessageW,
    GetWindowRect, HTCLIENT, IDC_ARROW, IDC_SIZEALL, IDC_SIZENESW, IDC_SIZENWSE, LWA_ALPHA,
    LoadCursorW, MSG, RegisterClassW, SW_SHOWNOACTIVATE, SWP_NOACTIVATE, SWP_NOZORDER, SetCursor,
    SetLayeredWindowAttributes, SetWindowPos, ShowWindow, TranslateMessage, WM_CLOSE,
    WM_ERASEBKGND, WM_MOUSELEAVE, WM_MOUSEMOVE, WM_PAINT, WM_SETCURSOR, WNDCLASSW, WS_EX_LAYERED,
    WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
};
use windows::core::{HSTRING, PCWSTR, w};

use crate::WindowsError;
use crate::message::{button_message, split_lparam, to_win_rect};

thread_local! {
    /// Events produced by the window procedure, drained by `next_event`.
    static PENDING: RefCell<VecDeque<InputEvent>> = const { RefCell::new(VecDeque::new()) };
    /// Whether a `TrackMouseEvent` leave request is outstanding.
    static TRACKING: Cell<bool> = const { Cell::new(false) };
    /// Region whose cursor is shown inside the client area.
    static CURSOR: Cell<Option<Region>> = const { Cell::new(None) };
    /// Brush used to paint the background on `WM_PAINT`.
    static BACKGROUND: Cell<isize> = const { Cell::new(0) };
}

static REGISTER_CLASS: Once = Once::new();

fn class_name() -> PCWSTR {
    w!("CurtainOverlay")
}

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(overlay_wnd_proc),
            lpszClassName: class_name(),
            ..Default::default()
        };
        unsafe {
            RegisterClassW(&wc);
        }
    });
}

fn push(event: InputEvent) {
    PENDING.with(|q| q.borrow_mut().push_back(event));
}

fn cursor_id(region: Option<Region>) -> PCWSTR {
    match region {
        None => IDC_ARROW,
        Some(Region::Drag) => IDC_SIZEALL,
        Some(Region::ResizeTopLeft | Region::ResizeBottomRight) => IDC_SIZENWSE,
        Some(Region::ResizeTopRight | Region::ResizeBottomLeft) => IDC_SIZENESW,
    }
}

fn apply_cursor(region: Option<Region>) {
    unsafe {
        if let Ok(cursor) = LoadCursorW(None, cursor_id(region)) {
            let _ = SetCursor(Some(cursor));
        }
    }
}

fn fill_client(hwnd: HWND, dc: HDC, brush: HBRUSH) {
    let mut rect = RECT::default();
    unsafe {
        if GetClientRect(hwnd, &mut rect).is_ok() {
            let _ = FillRect(dc, &rect, brush);
        }
    }
}

/// Converts a client-relative `LPARAM` into local and screen points.
fn points(hwnd: HWND, lparam: LPARAM) -> (Point, Point) {
    let (x, y) = split_lparam(lparam.0);
    let mut screen = POINT { x, y };
    unsafe {
        let _ = ClientToScreen(hwnd, &mut screen);
    }
    (Point::new(x, y), Point::new(screen.x, screen.y))
}

unsafe extern "system" fn overlay_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if let Some((button, down)) = button_message(msg) {
        if down {
            let (local, root) = points(hwnd, lparam);
            if button == curtain_core::Button::Primary {
                unsafe {
                    let _ = SetCapture(hwnd);
                }
            }
            push(InputEvent::ButtonPress {
                button,
                local,
                root,
            });
        } else {
            if button == curtain_core::Button::Primary {
                unsafe {
                    let _ = ReleaseCapture();
                }
            }
            push(InputEvent::ButtonRelease { button });
        }
        return LRESULT(0);
    }

    match msg {
        WM_MOUSEMOVE => {
            if !TRACKING.get() {
                let mut tme = TRACKMOUSEEVENT {
                    cbSize: std::mem::size_of::<TRACKMOUSEEVENT>() as u32,
                    dwFlags: TME_LEAVE,
                    hwndTrack: hwnd,
                    dwHoverTime: 0,
                };
                unsafe {
                    let _ = TrackMouseEvent(&mut tme);
                }
                TRACKING.set(true);
                push(InputEvent::Enter);
            }
            let (local, root) = points(hwnd, lparam);
            push(InputEvent::Motion { local, root });
            LRESULT(0)
        }
        WM_MOUSELEAVE => {
            TRACKING.set(false);
            push(InputEvent::Leave);
            LRESULT(0)
        }
        WM_ERASEBKGND => LRESULT(1),
        WM_PAINT => {
            let mut ps = PAINTSTRUCT::default();
            unsafe {
                let dc = BeginPaint(hwnd, &mut ps);
                fill_client(hwnd, dc, HBRUSH(BACKGROUND.get() as *mut _));
                let _ = EndPaint(hwnd, &ps);
            }
            push(InputEvent::Expose);
            LRESULT(0)
        }
        WM_SETCURSOR if (lparam.0 & 0xFFFF) as u32 == HTCLIENT => {
            apply_cursor(CURSOR.get());
            LRESULT(1)
        }
        WM_CLOSE => {
            push(InputEvent::CloseRequested);
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

/// The overlay as a layered, topmost Win32 popup.
///
/// Input is collected by the window procedure into a thread-local queue,
/// so the overlay must be created and driven on the same thread.
pub struct Win32Overlay {
    hwnd: HWND,
    background: HBRUSH,
    accent: HBRUSH,
}

impl Win32Overlay {
    /// Creates and shows the overlay window.
    pub fn open(options: &WindowOptions) -> Result<Self, WindowsError> {
        ensure_class_registered();

        let mut ex = WS_EX_TOPMOST | WS_EX_TOOLWINDOW;
        if options.is_translucent() {
            ex |= WS_EX_LAYERED;
        }

        let g = options.geometry;
        let title = HSTRING::from(options.title.as_str());
        let hwnd = unsafe {
            CreateWindowExW(
                ex,
                class_name(),
                &title,
                WS_POPUP,
                g.x,
                g.y,
                g.width,
                g.height,
                None,
                None,
                None,
                None,
            )
            .map_err(WindowsError::Create)?
        };

        let (background, accent) = unsafe {
            (
                CreateSolidBrush(COLORREF(options.background.to_colorref())),
                CreateSolidBrush(COLORREF(options.accent.to_colorref())),
            )
        };
        BACKGROUND.set(background.0 as isize);

        let overlay = Self {
            hwnd,
            background,
            accent,
        };

        if options.is_translucent() {
            unsafe {
                SetLayeredWindowAttributes(hwnd, COLORREF(0), options.opacity_alpha(), LWA_ALPHA)?;
            }
        }

        unsafe {
            let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
        }

        info!(
            "Overlay shown at {}x{}+{}+{}",
            g.width, g.height, g.x, g.y
        );
        Ok(overlay)
    }

    fn with_dc(&self, f: impl FnOnce(HDC)) {
        unsafe {
            let dc = GetDC(Some(self.hwnd));
            f(dc);
            let _ = ReleaseDC(Some(self.hwnd), dc);
        }
    }
}

impl OverlayWindow for Win32Overlay {
    fn size(&self) -> curtain_core::Result<(i32, i32)> {
        let mut rect = RECT::default();
        unsafe { GetClientRect(self.hwnd, &mut rect).map_err(WindowsError::from)? };
        Ok((rect.right - rect.left, rect.bottom - rect.top))
    }

    fn position(&self) -> curtain_core::Result<(i32, i32)> {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(self.hwnd, &mut rect).map_err(WindowsError::from)? };
        Ok((rect.left, rect.top))
    }

    fn apply_geometry(&mut self, rect: Rect) -> curtain_core::Result<()> {
        unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOACTIVATE | SWP_NOZORDER,
            )
            .map_err(WindowsError::from)?;
        }
        Ok(())
    }

    fn next_event(&mut self) -> curtain_core::Result<InputEvent> {
        let mut msg = MSG::default();
        loop {
            if let Some(event) = PENDING.with(|q| q.borrow_mut().pop_front()) {
                return Ok(event);
            }

            let status = unsafe { GetMessageW(&mut msg, None, 0, 0) };
            match status.0 {
                0 => {
                    debug!("WM_QUIT received");
                    return Ok(InputEvent::CloseRequested);
                }
                -1 => return Err(WindowsError::MessageLoop.into()),
                _ => unsafe {
                    let _ = TranslateMessage(&msg);
                    DispatchMessageW(&msg);
                },
            }
        }
    }

    fn clear(&mut self) -> curtain_core::Result<()> {
        let (hwnd, brush) = (self.hwnd, self.background);
        self.with_dc(|dc| fill_client(hwnd, dc, brush));
        Ok(())
    }

    fn paint(&mut self, shapes: &[Shape]) -> curtain_core::Result<()> {
        let brush = self.accent;
        self.with_dc(|dc| {
            for rect in shapes.iter().flat_map(Shape::fill_rects) {
                unsafe {
                    let _ = FillRect(dc, &to_win_rect(rect), brush);
                }
            }
        });
        Ok(())
    }

    fn set_cursor(&mut self, region: Option<Region>) -> curtain_core::Result<()> {
        CURSOR.set(region);
        apply_cursor(region);
        Ok(())
    }
}

impl Drop for Win32Overlay {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyWindow(self.hwnd);
            let _ = DeleteObject(self.background.into());
            let _ = DeleteObject(self.accent.into());
        }
        BACKGROUND.set(0);
    }
}
