// src/draw/transform.rs
//
// Local-coordinate transform used by the surfaces.
// Canvas style: translation plus non-uniform scale, no rotation.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub translation: Vec2,
    pub scale: Vec2,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: Vec2::ONE,
        }
    }
}

impl Transform2D {
    /// Move the local origin by (x, y) in local units.
    pub fn translate(&self, x: f32, y: f32) -> Transform2D {
        Transform2D {
            translation: self.translation + self.scale * vec2(x, y),
            scale: self.scale,
        }
    }

    /// Scale local units; negative factors mirror the axis.
    pub fn scaled(&self, sx: f32, sy: f32) -> Transform2D {
        Transform2D {
            translation: self.translation,
            scale: self.scale * vec2(sx, sy),
        }
    }

    // local point -> device point
    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        self.translation + self.scale * point
    }
}
