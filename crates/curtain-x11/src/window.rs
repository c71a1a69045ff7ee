use curtain_core::{InputEvent, OverlayWindow, Rect, Region, Shape, WindowOptions};
use tracing::{debug, info, warn};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{
    AtomEnum, ChangeWindowAttributesAux, ColormapAlloc, ConfigureWindowAux, ConnectionExt as _, CreateGCAux,
    CreateWindowAux, Gcontext, PropMode, Screen, VisualClass, Visualid, Window, WindowClass,
};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

use crate::X11Error;
use crate::atoms::Atoms;
use crate::cursor::Cursors;
use crate::event::{event_mask, translate};
use crate::hints;

/// The overlay window on an X11 display.
pub struct X11Overlay {
    conn: RustConnection,
    window: Window,
    root: Window,
    gc: Gcontext,
    colormap: Option<u32>,
    atoms: Atoms,
    cursors: Cursors,
}

impl X11Overlay {
    /// Connects to `$DISPLAY`, creates the window and maps it.
    pub fn open(options: &WindowOptions) -> Result<Self, X11Error> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let screen = &conn.setup().roots[screen_num];
        let root = screen.root;

        let atoms = Atoms::new(&conn)?.reply()?;

        let argb = find_argb_visual(screen);
        let (depth, visual, background) = match argb {
            Some(visual) => (32, visual, options.background.to_argb32()),
            None => {
                debug!("No 32-bit visual, using the default visual");
                (screen.root_depth, screen.root_visual, options.background.to_rgb24())
            }
        };

        let colormap = match argb {
            Some(visual) => {
                let id = conn.generate_id()?;
                conn.create_colormap(ColormapAlloc::NONE, id, root, visual)?;
                Some(id)
            }
            None => None,
        };

        let window = conn.generate_id()?;
        let mut values = CreateWindowAux::new()
            .background_pixel(background)
            .border_pixel(0)
            .event_mask(event_mask());
        if let Some(id) = colormap {
            values = values.colormap(id);
        }

        let rect = hints::rectangle(options.geometry);
        conn.create_window(
            depth,
            window,
            root,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            0,
            WindowClass::INPUT_OUTPUT,
            visual,
            &values,
        )?;

        set_properties(&conn, window, &atoms, options)?;

        let gc = conn.generate_id()?;
        let accent = if argb.is_some() {
            options.accent.to_argb32()
        } else {
            options.accent.to_rgb24()
        };
        conn.create_gc(gc, window, &CreateGCAux::new().foreground(accent))?;

        let cursors = Cursors::load(&conn)?;

        conn.map_window(window)?;
        conn.flush()?;

        info!(
            "Overlay mapped at {}x{}+{}+{}",
            rect.width, rect.height, rect.x, rect.y
        );

        Ok(Self {
            conn,
            window,
            root,
            gc,
            colormap,
            atoms,
            cursors,
        })
    }
}

fn set_properties(
    conn: &RustConnection,
    window: Window,
    atoms: &Atoms,
    options: &WindowOptions,
) -> Result<(), X11Error> {
    conn.change_property32(
        PropMode::REPLACE,
        window,
        atoms._MOTIF_WM_HINTS,
        atoms._MOTIF_WM_HINTS,
        &hints::motif_hints(),
    )?;
    conn.change_property32(
        PropMode::REPLACE,
        window,
        atoms._NET_WM_STATE,
        AtomEnum::ATOM,
        &[atoms._NET_WM_STATE_ABOVE],
    )?;
    if options.is_translucent() {
        conn.change_property32(
            PropMode::REPLACE,
            window,
            atoms._NET_WM_WINDOW_OPACITY,
            AtomEnum::CARDINAL,
            &[options.opacity_cardinal()],
        )?;
    }
    conn.change_property8(
        PropMode::REPLACE,
        window,
        AtomEnum::WM_CLASS,
        AtomEnum::STRING,
        &hints::wm_class(&options.instance, &options.class),
    )?;
    conn.change_property8(
        PropMode::REPLACE,
        window,
        AtomEnum::WM_NAME,
        AtomEnum::STRING,
        options.title.as_bytes(),
    )?;
    conn.change_property8(
        PropMode::REPLACE,
        window,
        atoms._NET_WM_NAME,
        atoms.UTF8_STRING,
        options.title.as_bytes(),
    )?;
    conn.change_property32(
        PropMode::REPLACE,
        window,
        atoms.WM_PROTOCOLS,
        AtomEnum::ATOM,
        &[atoms.WM_DELETE_WINDOW],
    )?;
    Ok(())
}

fn find_argb_visual(screen: &Screen) -> Option<Visualid> {
    screen
        .allowed_depths
        .iter()
        .filter(|d| d.depth == 32)
        .flat_map(|d| &d.visuals)
        .find(|v| v.class == VisualClass::TRUE_COLOR)
        .map(|v| v.visual_id)
}

impl X11Overlay {
    fn try_size(&self) -> Result<(i32, i32), X11Error> {
        let geo = self.conn.get_geometry(self.window)?.reply()?;
        Ok((i32::from(geo.width), i32::from(geo.height)))
    }

    fn try_position(&self) -> Result<(i32, i32), X11Error> {
        let reply = self
            .conn
            .translate_coordinates(self.window, self.root, 0, 0)?
            .reply()?;
        Ok((i32::from(reply.dst_x), i32::from(reply.dst_y)))
    }

    fn try_apply(&self, rect: Rect) -> Result<(), X11Error> {
        let r = hints::rectangle(rect);
        let values = ConfigureWindowAux::new()
            .x(i32::from(r.x))
            .y(i32::from(r.y))
            .width(u32::from(r.width))
            .height(u32::from(r.height));
        self.conn.configure_window(self.window, &values)?;
        self.conn.flush()?;
        Ok(())
    }

    fn try_next_event(&self) -> Result<InputEvent, X11Error> {
        self.conn.flush()?;
        loop {
            let event = self.conn.wait_for_event()?;
            if let Some(input) = translate(&event, self.atoms.WM_DELETE_WINDOW) {
                return Ok(input);
            }
        }
    }

    fn try_clear(&self) -> Result<(), X11Error> {
        self.conn.clear_area(false, self.window, 0, 0, 0, 0)?;
        self.conn.flush()?;
        Ok(())
    }

    fn try_paint(&self, shapes: &[Shape]) -> Result<(), X11Error> {
        let rects: Vec<_> = shapes
            .iter()
            .flat_map(Shape::fill_rects)
            .map(hints::rectangle)
            .collect();
        if rects.is_empty() {
            return Ok(());
        }
        self.conn.poly_fill_rectangle(self.window, self.gc, &rects)?;
        self.conn.flush()?;
        Ok(())
    }

    fn try_set_cursor(&self, region: Option<Region>) -> Result<(), X11Error> {
        let cursor = region.map_or(x11rb::NONE, |r| self.cursors.get(r));
        let values = ChangeWindowAttributesAux::new().cursor(cursor);
        self.conn.change_window_attributes(self.window, &values)?;
        self.conn.flush()?;
        Ok(())
    }
}

impl OverlayWindow for X11Overlay {
    fn size(&self) -> curtain_core::Result<(i32, i32)> {
        Ok(self.try_size()?)
    }

    fn position(&self) -> curtain_core::Result<(i32, i32)> {
        Ok(self.try_position()?)
    }

    fn apply_geometry(&mut self, rect: Rect) -> curtain_core::Result<()> {
        Ok(self.try_apply(rect)?)
    }

    fn next_event(&mut self) -> curtain_core::Result<InputEvent> {
        Ok(self.try_next_event()?)
    }

    fn clear(&mut self) -> curtain_core::Result<()> {
        Ok(self.try_clear()?)
    }

    fn paint(&mut self, shapes: &[Shape]) -> curtain_core::Result<()> {
        Ok(self.try_paint(shapes)?)
    }

    fn set_cursor(&mut self, region: Option<Region>) -> curtain_core::Result<()> {
        Ok(self.try_set_cursor(region)?)
    }
}

impl Drop for X11Overlay {
    fn drop(&mut self) {
        self.cursors.free(&self.conn);
        let _ = self.conn.free_gc(self.gc);
        let _ = self.conn.destroy_window(self.window);
        if let Some(id) = self.colormap {
            let _ = self.conn.free_colormap(id);
        }
        if let Err(e) = self.conn.flush() {
            warn!("Failed to flush X11 cleanup: {e}");
        }
    }
}
