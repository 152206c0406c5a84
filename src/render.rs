use crate::constants::HALO_ALPHA;
use crate::dom::{self, js_err};
use crate::field::{ParticleField, Shape};
use crate::sprite::{sprite_rect, SpriteCache, SpriteKey};
use crate::viewport::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rasterizes glow sprites onto detached canvases at a fixed device scale.
///
/// The scale is captured once at startup; cached sprites are never rebuilt,
/// so a later DPR change only resamples them at draw time.
pub struct SpriteFactory {
    document: web::Document,
    scale: f64,
}

impl SpriteFactory {
    pub fn new(document: web::Document, scale: f64) -> Self {
        Self {
            document,
            scale: if scale > 0.0 { scale } else { 1.0 },
        }
    }

    pub fn build(&self, key: &SpriteKey) -> anyhow::Result<web::HtmlCanvasElement> {
        let geo = key.geometry();
        let side_px = (geo.extent as f64 * self.scale).ceil().max(1.0) as u32;
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(js_err)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        canvas.set_width(side_px);
        canvas.set_height(side_px);
        let ctx = dom::context_2d(&canvas)?;
        ctx.scale(self.scale, self.scale).map_err(js_err)?;

        let c = geo.center() as f64;
        // halo, then solid core
        self.glow_pass(&ctx, key, c, geo.halo_radius, geo.halo_blur, HALO_ALPHA)?;
        self.glow_pass(&ctx, key, c, geo.core_radius, geo.core_blur, 1.0)?;
        Ok(canvas)
    }

    fn glow_pass(
        &self,
        ctx: &web::CanvasRenderingContext2d,
        key: &SpriteKey,
        center: f64,
        radius: f32,
        blur: f32,
        alpha: f64,
    ) -> anyhow::Result<()> {
        ctx.save();
        ctx.set_global_alpha(alpha);
        // shadow blur is in device pixels and ignores the transform
        ctx.set_shadow_blur(blur as f64 * self.scale);
        ctx.set_shadow_color(key.color);
        ctx.set_fill_style_str(key.color);
        trace_shape(ctx, key.shape, center, center, radius as f64)?;
        ctx.fill();
        ctx.restore();
        Ok(())
    }
}

fn trace_shape(
    ctx: &web::CanvasRenderingContext2d,
    shape: Shape,
    cx: f64,
    cy: f64,
    r: f64,
) -> anyhow::Result<()> {
    ctx.begin_path();
    match shape {
        Shape::Circle => ctx
            .arc(cx, cy, r, 0.0, std::f64::consts::TAU)
            .map_err(js_err)?,
        Shape::Square => ctx.rect(cx - r, cy - r, r * 2.0, r * 2.0),
        Shape::Triangle => {
            ctx.move_to(cx, cy - r);
            ctx.line_to(cx + r, cy + r);
            ctx.line_to(cx - r, cy + r);
            ctx.close_path();
        }
    }
    Ok(())
}

/// Clear the canvas and blit every particle's sprite centered on its position.
pub fn draw_field(
    ctx: &web::CanvasRenderingContext2d,
    viewport: &Viewport,
    field: &ParticleField,
    sprites: &mut SpriteCache<web::HtmlCanvasElement>,
    factory: &SpriteFactory,
) {
    ctx.clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    for p in field.particles() {
        let key = p.sprite_key();
        let sprite = match sprites.get_or_try_build(key, |k| factory.build(k)) {
            Ok(s) => s,
            Err(e) => {
                log::error!("[particles] sprite {:?} build error: {:?}", key, e);
                continue;
            }
        };
        let (x, y, w, h) = sprite_rect(p.pos, &key);
        ctx.set_global_alpha(p.opacity as f64);
        _ = ctx.draw_image_with_html_canvas_element_and_dw_and_dh(
            sprite, x as f64, y as f64, w as f64, h as f64,
        );
    }
    ctx.set_global_alpha(1.0);
}
