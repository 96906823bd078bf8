//! Canvas 2D surface (WASM only)

use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::Surface;
use crate::sim::Texture;

/// Brick wall image, served next to the page
pub const BRICK_WALL_URL: &str = "wall.jpg";

/// Draws onto an `HtmlCanvasElement` through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    brick_wall: Option<HtmlImageElement>,
}

impl CanvasSurface {
    /// Grab the 2D context of `canvas`. Returns None if the browser refuses one.
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        Some(Self {
            ctx,
            brick_wall: load_image(BRICK_WALL_URL),
        })
    }

    fn image(&self, texture: Texture) -> Option<&HtmlImageElement> {
        match texture {
            Texture::BrickWall => self.brick_wall.as_ref(),
        }
    }
}

/// Start loading an image; the canvas draws nothing for it until it arrives
fn load_image(url: &str) -> Option<HtmlImageElement> {
    match HtmlImageElement::new() {
        Ok(img) => {
            img.set_src(url);
            Some(img)
        }
        Err(e) => {
            log::warn!("Could not create image for {}: {:?}", url, e);
            None
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: DVec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x, size.y);
    }

    fn fill_rect(&mut self, pos: DVec2, size: DVec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(pos.x, pos.y, size.x, size.y);
    }

    fn draw_image(&mut self, texture: Texture, pos: DVec2, size: DVec2) {
        let Some(img) = self.image(texture) else {
            return;
        };
        if let Err(e) = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(img, pos.x, pos.y, size.x, size.y)
        {
            log::warn!("drawImage failed: {:?}", e);
        }
    }
}
