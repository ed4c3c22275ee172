//! Handwriting overlay: a grid of drawing surfaces with the current glyph as
//! a guide in the first cell.

use web_sys::HtmlElement;

use super::screens;
use crate::characters::Character;
use crate::error::{FlashError, Result};
use crate::surface::StrokeStyle;
use crate::surface::canvas::{MountedSurface, SurfaceOptions};

pub struct Practice {
    host: HtmlElement,
    surfaces: Vec<MountedSurface>,
    glyph: Option<&'static str>,
}

impl Practice {
    /// Render the overlay into `host` and mount one surface per cell.
    pub fn open(
        host: &HtmlElement,
        cells: usize,
        style: &StrokeStyle,
        card: Option<&Character>,
    ) -> Result<Self> {
        host.set_inner_html(&screens::render_practice(cells));
        let mut surfaces = Vec::with_capacity(cells);
        for i in 0..cells {
            let cell = host
                .query_selector(&format!("[data-cell=\"{i}\"]"))?
                .ok_or_else(|| FlashError::MissingElement(format!("practice cell {i}")))?;
            let options = SurfaceOptions { style: style.clone(), show_controls: false };
            surfaces.push(MountedSurface::mount(&cell, options)?);
        }
        let mut practice = Self { host: host.clone(), surfaces, glyph: None };
        practice.show_card(card);
        log::debug!("practice overlay opened with {} cells", cells);
        Ok(practice)
    }

    /// Point the guide at `card`. Switching to a different glyph wipes the grid.
    pub fn show_card(&mut self, card: Option<&Character>) {
        let glyph = card.map(|c| c.glyph);
        if glyph == self.glyph {
            return;
        }
        if self.glyph.is_some() {
            self.clear_all();
        }
        self.glyph = glyph;
        set_text(&self.host, "[data-guide]", glyph.unwrap_or_default());
        set_text(&self.host, "[data-romaji]", card.map(|c| c.romaji).unwrap_or_default());
    }

    pub fn clear_all(&self) {
        for surface in &self.surfaces {
            surface.reset();
        }
    }
}

impl Drop for Practice {
    fn drop(&mut self) {
        self.surfaces.clear();
        self.host.set_inner_html("");
    }
}

fn set_text(host: &HtmlElement, selector: &str, text: &str) {
    if let Some(el) = host.query_selector(selector).ok().flatten() {
        el.set_text_content(Some(text));
    }
}
