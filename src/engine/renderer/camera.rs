// Screen-space camera for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Orthographic camera mapping window pixels to clip space
///
/// Origin is the top-left corner of the window and y grows downward, the
/// same coordinates the game uses for positions.
#[derive(Debug, Clone)]
pub struct Camera {
    viewport_width: f32,
    viewport_height: f32,
    view_proj: Mat4,
}

impl Camera {
    /// Create a new camera
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn update_view_proj(&mut self) {
        // bottom = height, top = 0 flips y so pixel rows grow downward
        self.view_proj = Mat4::orthographic_rh(
            0.0,
            self.viewport_width.max(1.0),
            self.viewport_height.max(1.0),
            0.0,
            -1.0,
            1.0,
        );
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update_view_proj();
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}
