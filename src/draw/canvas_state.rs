// src/draw/canvas_state.rs
//
// Transform + stroke style stack and the path under construction.
// Both surface backends delegate to this, so save/restore and path
// semantics are identical no matter where the strokes end up.

use nannou::prelude::*;

use super::{Color, LineCap, StrokeStyle, Transform2D};

#[derive(Debug, Default)]
pub struct CanvasState {
    transform: Transform2D,
    style: StrokeStyle,
    saved: Vec<(Transform2D, StrokeStyle)>,
    // subpaths in device space
    subpaths: Vec<Vec<Point2>>,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self) {
        self.saved.push((self.transform, self.style));
    }

    /// Pop the last saved state. An unbalanced restore is ignored.
    pub fn restore(&mut self) {
        if let Some((transform, style)) = self.saved.pop() {
            self.transform = transform;
            self.style = style;
        }
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.transform = self.transform.translate(x, y);
    }

    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.transform = self.transform.scaled(sx, sy);
    }

    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.style.color = color;
    }

    pub fn set_line_width(&mut self, width: f32) {
        // canvas ignores non-positive and non-finite widths
        if width.is_finite() && width > 0.0 {
            self.style.width = width;
        }
    }

    pub fn set_line_cap(&mut self, cap: LineCap) {
        self.style.cap = cap;
    }

    pub fn begin_path(&mut self) {
        self.subpaths.clear();
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        let point = self.transform.apply_to_point(pt2(x, y));
        self.subpaths.push(vec![point]);
    }

    /// Points are transformed when they are added, like a canvas path.
    pub fn line_to(&mut self, x: f32, y: f32) {
        let point = self.transform.apply_to_point(pt2(x, y));
        match self.subpaths.last_mut() {
            Some(subpath) => subpath.push(point),
            // line_to without a current point acts as move_to
            None => self.subpaths.push(vec![point]),
        }
    }

    /// Device-space segments of the current path, zero-length ones pruned.
    /// The path is kept, so stroking twice draws twice.
    pub fn stroke_segments(&self) -> Vec<(Point2, Point2)> {
        self.subpaths
            .iter()
            .flat_map(|subpath| subpath.windows(2).map(|pair| (pair[0], pair[1])))
            .filter(|(start, end)| start.distance_squared(*end) > f32::EPSILON)
            .collect()
    }
}
