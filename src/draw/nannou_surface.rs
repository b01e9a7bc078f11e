// src/draw/nannou_surface.rs
//
// Surface backed by a nannou Draw.
// The Draw is retained between frames: clear() resets its commands (not the
// transform or style stack), so the window keeps showing the last rendered
// picture until the stage renders again.

use nannou::lyon::tessellation::LineCap as LyonLineCap;
use nannou::prelude::*;

use super::{CanvasState, Color, LineCap, Surface};

pub struct NannouSurface {
    draw: Draw,
    width: f32,
    height: f32,
    state: CanvasState,
}

impl NannouSurface {
    pub fn new(draw: Draw, width: f32, height: f32) -> Self {
        Self {
            draw,
            width,
            height,
            state: CanvasState::new(),
        }
    }

    pub fn draw(&self) -> &Draw {
        &self.draw
    }

    // Canvas space (top-left origin, y down) to nannou space (centered, y up)
    fn to_nannou(&self, point: Point2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}

fn nannou_color(color: Color) -> Rgb8 {
    rgb8(color.r, color.g, color.b)
}

fn lyon_cap(cap: LineCap) -> LyonLineCap {
    match cap {
        LineCap::Butt => LyonLineCap::Butt,
        LineCap::Round => LyonLineCap::Round,
        LineCap::Square => LyonLineCap::Square,
    }
}

impl Surface for NannouSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.draw.reset();
        self.draw.background().color(nannou_color(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.state.set_stroke_color(color);
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.set_line_width(width);
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.state.set_line_cap(cap);
    }

    fn begin_path(&mut self) {
        self.state.begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.state.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.state.line_to(x, y);
    }

    fn stroke(&mut self) {
        let style = *self.state.style();
        for (start, end) in self.state.stroke_segments() {
            self.draw
                .line()
                .points(self.to_nannou(start), self.to_nannou(end))
                .color(nannou_color(style.color))
                .stroke_weight(style.width)
                .caps(lyon_cap(style.cap));
        }
    }

    fn save(&mut self) {
        self.state.save();
    }

    fn restore(&mut self) {
        self.state.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.state.translate(x, y);
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.state.scale(sx, sy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_to_nannou_coordinates() {
        let surface = NannouSurface::new(Draw::new(), 200.0, 100.0);
        assert_eq!(surface.to_nannou(pt2(0.0, 0.0)), pt2(-100.0, 50.0));
        assert_eq!(surface.to_nannou(pt2(100.0, 50.0)), pt2(0.0, 0.0));
        assert_eq!(surface.to_nannou(pt2(200.0, 100.0)), pt2(100.0, -50.0));
    }

    #[test]
    fn test_clear_keeps_transform_and_style() {
        let mut surface = NannouSurface::new(Draw::new(), 200.0, 100.0);
        surface.set_line_width(6.0);
        surface.save();
        surface.translate(20.0, 10.0);
        surface.clear(Color::BLACK);

        // clearing only repaints, like a canvas fillRect
        assert_eq!(surface.state.depth(), 1);
        assert_eq!(surface.state.transform().translation, vec2(20.0, 10.0));
        assert_eq!(surface.state.style().width, 6.0);

        surface.restore();
        assert_eq!(surface.state.depth(), 0);
        assert_eq!(surface.state.transform().translation, Vec2::ZERO);
    }
}
