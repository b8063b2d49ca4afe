use glam::IVec2;

use crate::geometry::Rect;

/// View-projection uniform uploaded to the GPU.
///
/// The camera offset is applied on the CPU, so this is a plain orthographic
/// projection mapping pixel coords [0..w] × [0..h] to clip space.
///
/// Layout (column-major, matching WGSL `mat4x4<f32>`):
/// ```text
/// col0: [2/w,  0,    0,  0]
/// col1: [0,   -2/h,  0,  0]
/// col2: [0,    0,    1,  0]
/// col3: [-1,   1,    0,  1]
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn screen_ortho(width: f32, height: f32) -> Self {
        let sx = 2.0 / width;
        let sy = -2.0 / height;
        Self {
            view_proj: [
                [sx,   0.0,  0.0, 0.0], // col0
                [0.0,  sy,   0.0, 0.0], // col1
                [0.0,  0.0,  1.0, 0.0], // col2
                [-1.0, 1.0,  0.0, 1.0], // col3
            ],
        }
    }
}

/// 2D follow camera: a world-to-screen translation that keeps its target centered.
///
/// The offset snaps to the target every `update`; nothing is smoothed or
/// accumulated between frames.
#[derive(Clone, Debug)]
pub struct Camera {
    offset: IVec2,
    viewport: IVec2,
}

impl Camera {
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            offset: IVec2::ZERO,
            viewport: IVec2::new(viewport_width as i32, viewport_height as i32),
        }
    }

    /// Current `(dx, dy)` translation.
    pub fn offset(&self) -> IVec2 { self.offset }

    /// Recompute the offset so `target`'s midpoint lands at the viewport center.
    ///
    /// ```text
    /// dx = -(x + w/2 - W/2)
    /// dy = -(y + h/2 - H/2)
    /// ```
    /// All divisions floor.
    pub fn update(&mut self, target: &Rect) {
        let (cx, cy) = target.center();
        self.offset = IVec2::new(
            -(cx - self.viewport.x.div_euclid(2)),
            -(cy - self.viewport.y.div_euclid(2)),
        );
    }

    /// `rect` shifted into screen space.
    pub fn apply(&self, rect: &Rect) -> Rect {
        rect.translated(self.offset.x, self.offset.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_target_in_viewport() {
        let mut cam = Camera::new(550, 550);
        let p = Rect::new(65, 5, 20, 40);
        cam.update(&p);
        assert_eq!(cam.offset(), IVec2::new(200, 250));
        assert_eq!(cam.apply(&p).center(), (275, 275));
    }

    #[test]
    fn update_does_not_accumulate() {
        let mut cam = Camera::new(550, 550);
        let p = Rect::new(1000, -300, 20, 40);
        cam.update(&p);
        let first = cam.offset();
        cam.update(&p);
        assert_eq!(cam.offset(), first);
    }

    #[test]
    fn screen_ortho_maps_corners() {
        let u = CameraUniform::screen_ortho(550.0, 550.0);
        // x_ndc = sx * 550 + tx = 1.0
        assert!((u.view_proj[0][0] * 550.0 + u.view_proj[3][0] - 1.0).abs() < 1e-6);
        // y_ndc = sy * 550 + ty = -1.0
        assert!((u.view_proj[1][1] * 550.0 + u.view_proj[3][1] + 1.0).abs() < 1e-6);
    }
}
