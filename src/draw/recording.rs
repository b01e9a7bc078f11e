// src/draw/recording.rs
//
// Headless surface: records what would have been drawn.

use nannou::prelude::*;

use super::{CanvasState, Color, LineCap, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct StrokedSegment {
    pub start: Point2,
    pub end: Point2,
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl StrokedSegment {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear(Color),
    Stroke(StrokedSegment),
}

pub struct RecordingSurface {
    width: f32,
    height: f32,
    state: CanvasState,
    ops: Vec<SurfaceOp>,
    max_depth: usize,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            state: CanvasState::new(),
            ops: Vec::new(),
            max_depth: 0,
        }
    }

    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Segments stroked since the last clear.
    pub fn frame_segments(&self) -> Vec<&StrokedSegment> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear(_)))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Stroke(segment) => Some(segment),
                SurfaceOp::Clear(_) => None,
            })
            .collect()
    }

    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Clear(_)))
            .count()
    }

    pub fn save_depth(&self) -> usize {
        self.state.depth()
    }

    pub fn max_save_depth(&self) -> usize {
        self.max_depth
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(SurfaceOp::Clear(color));
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
            self.ops.push(SurfaceOp::Stroke(StrokedSegment {
                start,
                end,
                width: style.width,
                color: style.color,
                cap: style.cap,
            }));
        }
    }

    fn save(&mut self) {
        self.state.save();
        self.max_depth = self.max_depth.max(self.state.depth());
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
    fn test_records_styled_segments() {
        let mut surface = RecordingSurface::new(100.0, 100.0);
        let blue = Color::new(0x19, 0x76, 0xd2);
        surface.clear(Color::BLACK);
        surface.set_stroke_color(blue);
        surface.set_line_width(2.0);
        surface.set_line_cap(LineCap::Round);
        surface.save();
        surface.translate(50.0, 0.0);
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(0.0, 10.0);
        surface.stroke();
        surface.restore();

        let segments = surface.frame_segments();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].start, pt2(50.0, 0.0));
        assert_eq!(segments[0].end, pt2(50.0, 10.0));
        assert_eq!(segments[0].color, blue);
        assert_eq!(segments[0].cap, LineCap::Round);
        assert_eq!(segments[0].length(), 10.0);
        assert_eq!(surface.save_depth(), 0);
        assert_eq!(surface.max_save_depth(), 1);
    }

    #[test]
    fn test_frame_segments_start_after_last_clear() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(1.0, 0.0);
        surface.stroke();
        surface.clear(Color::BLACK);
        assert!(surface.frame_segments().is_empty());
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.ops().len(), 2);
    }
}
