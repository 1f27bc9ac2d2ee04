//! Paints a [`DrawList`] onto a 2D canvas.

use std::f64::consts::TAU;

use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::rig::error::RigError;
use crate::rig::render::{Camera, DrawCmd, DrawList};

pub fn css_color(color: u32) -> String {
    format!("#{:06x}", color & 0x00ff_ffff)
}

pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    camera: Camera,
    size: (f64, f64),
}

impl CanvasPainter {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, RigError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(RigError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RigError::ContextUnavailable)?;
        Ok(Self {
            canvas,
            ctx,
            camera: Camera::new(1.0, 1.0),
            size: (0.0, 0.0),
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Match the backing store to the viewport at device resolution.
    pub fn resize(&mut self, width: f64, height: f64) {
        if self.size == (width, height) || width <= 0.0 || height <= 0.0 {
            return;
        }
        let ratio = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .filter(|r| *r > 0.0)
            .unwrap_or(1.0);
        self.canvas.set_width((width * ratio).round() as u32);
        self.canvas.set_height((height * ratio).round() as u32);
        // Setting the size resets the transform.
        if let Err(err) = self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0) {
            debug!("setTransform failed: {:?}", err);
        }
        self.size = (width, height);
        self.camera = Camera::new(width as f32, height as f32);
        debug!("Canvas resized to {}x{} at ratio {}", width, height, ratio);
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(0.0, 0.0, self.size.0, self.size.1);
    }

    pub fn paint(&self, list: &DrawList) {
        self.clear();
        let ctx = &self.ctx;
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        for cmd in &list.commands {
            ctx.set_shadow_blur(0.0);
            match cmd {
                DrawCmd::Dot { x, y, size, color, alpha } => {
                    ctx.set_global_alpha(*alpha as f64);
                    ctx.set_fill_style(&JsValue::from_str(&css_color(*color)));
                    let s = *size as f64;
                    ctx.fill_rect(*x as f64 - s / 2.0, *y as f64 - s / 2.0, s, s);
                }
                DrawCmd::Segment { from, to, width, color } => {
                    ctx.set_global_alpha(1.0);
                    ctx.set_stroke_style(&JsValue::from_str(&css_color(*color)));
                    ctx.set_line_width(*width as f64);
                    ctx.begin_path();
                    ctx.move_to(from.0 as f64, from.1 as f64);
                    ctx.line_to(to.0 as f64, to.1 as f64);
                    ctx.stroke();
                }
                DrawCmd::Ellipse { x, y, rx, ry, color, alpha, glow } => {
                    self.glow(*glow);
                    ctx.set_global_alpha(*alpha as f64);
                    ctx.set_fill_style(&JsValue::from_str(&css_color(*color)));
                    ctx.begin_path();
                    let drawn = ctx.ellipse(
                        *x as f64,
                        *y as f64,
                        rx.max(0.0) as f64,
                        ry.max(0.0) as f64,
                        0.0,
                        0.0,
                        TAU,
                    );
                    if drawn.is_ok() {
                        ctx.fill();
                    }
                }
                DrawCmd::Polygon { points, color, alpha, glow } => {
                    self.glow(*glow);
                    ctx.set_global_alpha(*alpha as f64);
                    ctx.set_fill_style(&JsValue::from_str(&css_color(*color)));
                    self.trace(points, true);
                    ctx.fill();
                }
                DrawCmd::Polyline { points, closed, width, color, alpha } => {
                    ctx.set_global_alpha(*alpha as f64);
                    ctx.set_stroke_style(&JsValue::from_str(&css_color(*color)));
                    ctx.set_line_width(*width as f64);
                    self.trace(points, *closed);
                    ctx.stroke();
                }
            }
        }
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }

    fn glow(&self, glow: Option<(u32, f32)>) {
        if let Some((color, intensity)) = glow {
            self.ctx.set_shadow_color(&css_color(color));
            self.ctx.set_shadow_blur((intensity.max(0.0) * 24.0) as f64);
        }
    }

    fn trace(&self, points: &[(f32, f32)], closed: bool) {
        self.ctx.begin_path();
        let mut iter = points.iter();
        if let Some(first) = iter.next() {
            self.ctx.move_to(first.0 as f64, first.1 as f64);
        }
        for p in iter {
            self.ctx.line_to(p.0 as f64, p.1 as f64);
        }
        if closed {
            self.ctx.close_path();
        }
    }
}

impl Drop for CanvasPainter {
    fn drop(&mut self) {
        self.clear();
    }
}
