// src/draw/ladder_draw.rs
// Row geometry of the ladder: two rails and one rung per node

use super::{Color, LineCap, Surface};
use crate::animation::AnimationState;

/// Line width is the shorter surface side divided by this.
pub const LINE_WIDTH_DIVISOR: f32 = 60.0;

#[derive(Debug, Clone, PartialEq)]
pub struct LadderLayout {
    pub width: f32,
    pub height: f32,
    pub node_count: usize,
    pub stroke_color: Color,
}

impl LadderLayout {
    /// Height of one row; rails and rung are sized from it.
    pub fn gap(&self) -> f32 {
        self.height / self.node_count.max(1) as f32
    }

    pub fn line_width(&self) -> f32 {
        self.width.min(self.height) / LINE_WIDTH_DIVISOR
    }

    /// Draw the row belonging to node `index` with the given progress.
    ///
    /// Rows are centered horizontally and stacked top to bottom. Odd rows are
    /// mirrored so their rung grows right to left.
    pub fn draw_row<S: Surface>(&self, surface: &mut S, index: usize, state: &AnimationState) {
        let gap = self.gap();
        let scale = state.scale() as f32;
        let rung = state.rung_scale() as f32;
        let mirror = if index % 2 == 0 { 1.0 } else { -1.0 };

        surface.set_line_width(self.line_width());
        surface.set_line_cap(LineCap::Round);
        surface.set_stroke_color(self.stroke_color);

        surface.save();
        surface.translate(self.width / 2.0, index as f32 * gap);
        surface.scale(mirror, 1.0);

        // rails
        for side in [-1.0, 1.0] {
            surface.save();
            surface.translate(side * gap / 2.0, 0.0);
            stroke_line(surface, (0.0, 0.0), (0.0, gap * scale));
            surface.restore();
        }

        // rung
        surface.save();
        surface.translate(0.0, gap / 2.0);
        stroke_line(surface, (-gap / 2.0, 0.0), (-gap / 2.0 + gap * rung, 0.0));
        surface.restore();

        surface.restore();
    }
}

fn stroke_line<S: Surface>(surface: &mut S, (x1, y1): (f32, f32), (x2, y2): (f32, f32)) {
    surface.begin_path();
    surface.move_to(x1, y1);
    surface.line_to(x2, y2);
    surface.stroke();
}
