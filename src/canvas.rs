use glam::Vec2;
use trace_core::{Canvas2d, Rect, Rgba, Stroke};
use web_sys as web;

/// `Canvas2d` backed by a browser 2D rendering context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Canvas2d for CanvasSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ctx.set_shadow_blur(0.0);
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.origin.x as f64,
            rect.origin.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: Stroke) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        match stroke.glow {
            Some(glow) => {
                self.ctx.set_shadow_color(&glow.color.to_css());
                self.ctx.set_shadow_blur(glow.blur as f64);
            }
            None => self.ctx.set_shadow_blur(0.0),
        }
        self.ctx.set_stroke_style_str(&stroke.color.to_css());
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.stroke();
    }
}
