use curtain_core::Region;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt as _, Cursor, Font};

use crate::X11Error;

// Glyph indices in the standard X cursor font.
const XC_BOTTOM_LEFT_CORNER: u16 = 12;
const XC_BOTTOM_RIGHT_CORNER: u16 = 14;
const XC_FLEUR: u16 = 52;
const XC_TOP_LEFT_CORNER: u16 = 134;
const XC_TOP_RIGHT_CORNER: u16 = 136;

/// Returns the cursor-font glyph shown over `region`.
pub fn glyph(region: Region) -> u16 {
    match region {
        Region::Drag => XC_FLEUR,
        Region::ResizeTopLeft => XC_TOP_LEFT_CORNER,
        Region::ResizeTopRight => XC_TOP_RIGHT_CORNER,
        Region::ResizeBottomLeft => XC_BOTTOM_LEFT_CORNER,
        Region::ResizeBottomRight => XC_BOTTOM_RIGHT_CORNER,
    }
}

/// One glyph cursor per region, created from the core cursor font.
pub struct Cursors {
    font: Font,
    cursors: [Cursor; 5],
}

impl Cursors {
    pub fn load<C: Connection>(conn: &C) -> Result<Self, X11Error> {
        let font = conn.generate_id()?;
        conn.open_font(font, b"cursor")?;

        let mut cursors = [0; 5];
        for (slot, region) in cursors.iter_mut().zip(Region::ALL) {
            let cursor = conn.generate_id()?;
            let g = glyph(region);
            conn.create_glyph_cursor(cursor, font, font, g, g + 1, 0, 0, 0, 0xFFFF, 0xFFFF, 0xFFFF)?;
            *slot = cursor;
        }

        Ok(Self { font, cursors })
    }

    pub fn get(&self, region: Region) -> Cursor {
        let idx = Region::ALL.iter().position(|r| *r == region).unwrap_or(0);
        self.cursors[idx]
    }

    pub fn free<C: Connection>(&self, conn: &C) {
        for cursor in self.cursors {
            let _ = conn.free_cursor(cursor);
        }
        let _ = conn.close_font(self.font);
    }
}
