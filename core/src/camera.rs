//! Camera

use crate::common::Float;
use crate::geometry::{Point3f, Ray, Vector3f};

/// World up used to derive the view basis.
const WORLD_UP: Vector3f = Vector3f::new(0.0, 1.0, 0.0);

/// Pinhole camera. Derives a view-plane basis from the eye position and
/// look-at target; read-only after construction.
///
/// Precondition: the look direction must not be parallel to world up,
/// or the derived x-axis degenerates to zero.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    pos: Point3f,
    target: Point3f,
    dist: Float,
    fov: Float,
    aspect: Float,

    view_width: Float,
    view_height: Float,
    view_center: Point3f,
    view_x_axis: Vector3f,
    view_y_axis: Vector3f,
}

impl Camera {
    /// Creates a new camera.
    ///
    /// * `pos`    - Eye position.
    /// * `target` - Look-at target.
    /// * `dist`   - Distance from the eye to the view plane.
    /// * `fov`    - Vertical field of view in radians.
    /// * `aspect` - View-plane width over height.
    pub fn new(pos: Point3f, target: Point3f, dist: Float, fov: Float, aspect: Float) -> Self {
        let view_height = 2.0 * dist * (fov / 2.0).tan();
        let view_width = view_height * aspect;

        let look_at = (target - pos).normalize();
        let view_center = pos + look_at * dist;

        let view_x_axis = WORLD_UP.cross(&look_at);
        let view_y_axis = look_at.cross(&view_x_axis);

        Self {
            pos,
            target,
            dist,
            fov,
            aspect,
            view_width,
            view_height,
            view_center,
            view_x_axis,
            view_y_axis,
        }
    }

    /// Returns the eye position.
    pub fn pos(&self) -> Point3f {
        self.pos
    }

    /// Returns the look-at target.
    pub fn target(&self) -> Point3f {
        self.target
    }

    /// Returns the distance from the eye to the view plane.
    pub fn dist(&self) -> Float {
        self.dist
    }

    /// Returns the vertical field of view in radians.
    pub fn fov(&self) -> Float {
        self.fov
    }

    /// Returns the aspect ratio.
    pub fn aspect(&self) -> Float {
        self.aspect
    }

    /// Returns the view-plane width.
    pub fn view_width(&self) -> Float {
        self.view_width
    }

    /// Returns the view-plane height.
    pub fn view_height(&self) -> Float {
        self.view_height
    }

    /// Returns the view-plane center.
    pub fn view_center(&self) -> Point3f {
        self.view_center
    }

    /// Returns the view-plane x-axis.
    pub fn view_x_axis(&self) -> Vector3f {
        self.view_x_axis
    }

    /// Returns the view-plane y-axis.
    pub fn view_y_axis(&self) -> Vector3f {
        self.view_y_axis
    }

    /// Generates the primary ray through image coordinates `(x, y)`
    /// (fractional; sub-pixel offsets already applied), mapping the
    /// pixel to normalized device coordinates centered on the image,
    /// offsetting the view center along the view basis and normalizing
    /// the eye-to-target direction.
    ///
    /// * `x`      - Image x-coordinate with sub-pixel offset.
    /// * `y`      - Image y-coordinate with sub-pixel offset.
    /// * `width`  - Image width in pixels.
    /// * `height` - Image height in pixels.
    pub fn generate_ray(&self, x: Float, y: Float, width: usize, height: usize) -> Ray {
        let ratio_x = x / width as Float - 0.5;
        let ratio_y = 0.5 - y / height as Float;
        let scene_x = ratio_x * self.view_width;
        let scene_y = ratio_y * self.view_height;
        let target = self.view_center + self.view_x_axis * scene_x + self.view_y_axis * scene_y;
        let direction = (target - self.pos).normalize();
        Ray::new(self.pos, direction)
    }
}
