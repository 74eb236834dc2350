//! Transform builders: projection, view, model and screen mapping.
//!
//! Every builder returns a fresh [`Mat4`] (or modifies a copy of the one
//! passed in) using GLM's closed-form formulas. Angles are in radians.
//! Projections are right-handed with clip depth in `[-1, 1]`.
//!
//! Only [`perspective_fov`] and [`pick_matrix`] validate their arguments;
//! everywhere else degenerate input (`left == right`, `z_near == z_far`,
//! `up` parallel to the view direction) propagates as Inf/NaN.
//!
//! # Example
//!
//! ```rust
//! use glm_math::{perspective, project, un_project, Mat4, Vec3, Vec4};
//!
//! let proj = perspective(std::f32::consts::FRAC_PI_4, 4.0 / 3.0, 0.1, 100.0);
//! let viewport = Vec4::new(0.0, 0.0, 800.0, 600.0);
//!
//! let win = project(Vec3::new(0.0, 0.0, -10.0), Mat4::IDENTITY, proj, viewport);
//! assert_eq!((win.x, win.y), (400.0, 300.0));
//!
//! let obj = un_project(win, Mat4::IDENTITY, proj, viewport);
//! assert!((obj.z + 10.0).abs() < 1e-2);
//! ```

use crate::{Mat4, Vec2, Vec3, Vec4};
use glm_core::{Error, Result};
use tracing::{debug, trace};

/// Depth epsilon used by [`tweaked_infinite_perspective`].
pub const TWEAKED_INFINITE_EPSILON: f32 = 0.0001;

// ============================================================================
// Projection
// ============================================================================

/// Creates a perspective projection from explicit frustum bounds.
///
/// The near plane rectangle is `[left, right] x [bottom, top]` at distance
/// `near`; `far` is the far plane distance.
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    // Starts from zero like GLM; [3][3] must stay 0.
    let mut result = Mat4::ZERO;
    result[(0, 0)] = (2.0 * near) / (right - left);
    result[(1, 1)] = (2.0 * near) / (top - bottom);
    result[(2, 0)] = (right + left) / (right - left);
    result[(2, 1)] = (top + bottom) / (top - bottom);
    result[(2, 2)] = -(far + near) / (far - near);
    result[(2, 3)] = -1.0;
    result[(3, 2)] = -(2.0 * far * near) / (far - near);
    result
}

/// Creates a symmetric perspective projection.
///
/// `fovy` is the vertical field of view, `aspect` is width over height.
pub fn perspective(fovy: f32, aspect: f32, z_near: f32, z_far: f32) -> Mat4 {
    let tan_half_fovy = (fovy / 2.0).tan();

    let mut result = Mat4::IDENTITY;
    result[(0, 0)] = 1.0 / (aspect * tan_half_fovy);
    result[(1, 1)] = 1.0 / tan_half_fovy;
    result[(2, 2)] = -(z_far + z_near) / (z_far - z_near);
    result[(2, 3)] = -1.0;
    result[(3, 2)] = -(2.0 * z_far * z_near) / (z_far - z_near);
    result[(3, 3)] = 0.0;
    result
}

/// Creates a perspective projection from a field of view and a viewport size.
///
/// # Errors
///
/// Returns [`Error::ArgumentOutOfRange`] if `width`, `height` or `fov` is
/// not strictly positive. NaN arguments are not rejected.
///
/// # Example
///
/// ```rust
/// use glm_math::{perspective_fov, Error};
///
/// assert!(perspective_fov(1.0, 800.0, 600.0, 0.1, 100.0).is_ok());
/// assert!(matches!(
///     perspective_fov(1.0, 0.0, 600.0, 0.1, 100.0),
///     Err(Error::ArgumentOutOfRange { name: "width", .. })
/// ));
/// ```
pub fn perspective_fov(fov: f32, width: f32, height: f32, z_near: f32, z_far: f32) -> Result<Mat4> {
    trace!(fov, width, height, z_near, z_far, "perspective_fov");

    Error::check_positive("width", width)
        .and_then(|_| Error::check_positive("height", height))
        .and_then(|_| Error::check_positive("fov", fov))
        .inspect_err(|err| debug!(%err, "Rejecting perspective_fov arguments"))?;

    let h = (0.5 * fov).cos() / (0.5 * fov).sin();
    let w = h * height / width;

    let mut result = Mat4::ZERO;
    result[(0, 0)] = w;
    result[(1, 1)] = h;
    result[(2, 2)] = -(z_far + z_near) / (z_far - z_near);
    result[(2, 3)] = -1.0;
    result[(3, 2)] = -(2.0 * z_far * z_near) / (z_far - z_near);
    Ok(result)
}

/// Creates a symmetric perspective projection with the far plane at infinity.
pub fn infinite_perspective(fovy: f32, aspect: f32, z_near: f32) -> Mat4 {
    infinite_projection(fovy, aspect, z_near, -1.0, -2.0 * z_near)
}

/// Like [`infinite_perspective`], with depth pulled in by
/// [`TWEAKED_INFINITE_EPSILON`] for hardware without depth clamping.
pub fn tweaked_infinite_perspective(fovy: f32, aspect: f32, z_near: f32) -> Mat4 {
    tweaked_infinite_perspective_with_epsilon(fovy, aspect, z_near, TWEAKED_INFINITE_EPSILON)
}

/// Like [`tweaked_infinite_perspective`] with a caller-chosen epsilon.
pub fn tweaked_infinite_perspective_with_epsilon(
    fovy: f32,
    aspect: f32,
    z_near: f32,
    epsilon: f32,
) -> Mat4 {
    // GLM sign, unnegated: eps = 0 reproduces infinite_perspective.
    infinite_projection(fovy, aspect, z_near, epsilon - 1.0, (epsilon - 2.0) * z_near)
}

// Shared body of the infinite projections; only the depth terms differ.
fn infinite_projection(fovy: f32, aspect: f32, z_near: f32, m22: f32, m32: f32) -> Mat4 {
    let range = (fovy / 2.0).tan() * z_near;
    let left = -range * aspect;
    let right = range * aspect;
    let bottom = -range;
    let top = range;

    let mut result = Mat4::ZERO;
    result[(0, 0)] = (2.0 * z_near) / (right - left);
    result[(1, 1)] = (2.0 * z_near) / (top - bottom);
    result[(2, 2)] = m22;
    result[(2, 3)] = -1.0;
    result[(3, 2)] = m32;
    result
}

/// Creates an orthographic projection for the given clipping volume.
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Mat4 {
    let mut result = Mat4::IDENTITY;
    result[(0, 0)] = 2.0 / (right - left);
    result[(1, 1)] = 2.0 / (top - bottom);
    result[(2, 2)] = -2.0 / (z_far - z_near);
    result[(3, 0)] = -(right + left) / (right - left);
    result[(3, 1)] = -(top + bottom) / (top - bottom);
    result[(3, 2)] = -(z_far + z_near) / (z_far - z_near);
    result
}

/// Creates an orthographic projection for 2D drawing (depth range `[-1, 1]`).
pub fn ortho_2d(left: f32, right: f32, bottom: f32, top: f32) -> Mat4 {
    let mut result = Mat4::IDENTITY;
    result[(0, 0)] = 2.0 / (right - left);
    result[(1, 1)] = 2.0 / (top - bottom);
    result[(2, 2)] = -1.0;
    result[(3, 0)] = -(right + left) / (right - left);
    result[(3, 1)] = -(top + bottom) / (top - bottom);
    result
}

// ============================================================================
// View and model
// ============================================================================

/// Builds a right-handed view matrix looking from `eye` towards `center`.
///
/// `up` must not be parallel to `center - eye`.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    let f = (center - eye).normalize();
    let s = f.cross(up).normalize();
    let u = s.cross(f);

    let mut result = Mat4::IDENTITY;
    result[(0, 0)] = s.x;
    result[(1, 0)] = s.y;
    result[(2, 0)] = s.z;
    result[(0, 1)] = u.x;
    result[(1, 1)] = u.y;
    result[(2, 1)] = u.z;
    result[(0, 2)] = -f.x;
    result[(1, 2)] = -f.y;
    result[(2, 2)] = -f.z;
    result[(3, 0)] = -s.dot(eye);
    result[(3, 1)] = -u.dot(eye);
    result[(3, 2)] = f.dot(eye);
    result
}

/// Post-multiplies `m` by a rotation of `angle` radians around `axis`.
///
/// The axis is normalized first. Column 3 of `m` passes through unchanged.
///
/// # Example
///
/// ```rust
/// use glm_math::{rotate, Mat4, Vec3, Vec4};
///
/// let r = rotate(Mat4::IDENTITY, std::f32::consts::FRAC_PI_2, Vec3::Z);
/// let v = r * Vec4::X;
/// assert!((v.y - 1.0).abs() < 1e-6 && v.x.abs() < 1e-6);
/// ```
pub fn rotate(m: Mat4, angle: f32, axis: Vec3) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();

    let axis = axis.normalize();
    let temp = (1.0 - c) * axis;

    // Rodrigues rotation, [column][row]
    let rot = [
        [
            c + temp[0] * axis[0],
            temp[0] * axis[1] + s * axis[2],
            temp[0] * axis[2] - s * axis[1],
        ],
        [
            temp[1] * axis[0] - s * axis[2],
            c + temp[1] * axis[1],
            temp[1] * axis[2] + s * axis[0],
        ],
        [
            temp[2] * axis[0] + s * axis[1],
            temp[2] * axis[1] - s * axis[0],
            c + temp[2] * axis[2],
        ],
    ];

    let col = |r: [f32; 3]| m[0] * r[0] + m[1] * r[1] + m[2] * r[2];
    Mat4::from_cols(col(rot[0]), col(rot[1]), col(rot[2]), m[3])
}

/// Post-multiplies `m` by a translation of `v`; only column 3 changes.
pub fn translate(m: Mat4, v: Vec3) -> Mat4 {
    let mut result = m;
    result[3] = m[0] * v[0] + m[1] * v[1] + m[2] * v[2] + m[3];
    result
}

/// Post-multiplies `m` by a non-uniform scale of `v`; column 3 is unchanged.
pub fn scale(m: Mat4, v: Vec3) -> Mat4 {
    let mut result = m;
    result[0] = m[0] * v[0];
    result[1] = m[1] * v[1];
    result[2] = m[2] * v[2];
    result
}

// ============================================================================
// Screen mapping
// ============================================================================

/// Maps object coordinates to window coordinates.
///
/// `viewport` is `(x, y, width, height)`. The returned `z` is depth in
/// `[0, 1]` for points inside the clip volume.
pub fn project(obj: Vec3, model: Mat4, proj: Mat4, viewport: Vec4) -> Vec3 {
    trace!(?obj, ?viewport, "project");

    let mut tmp = proj * (model * obj.extend(1.0));
    tmp /= tmp.w;
    tmp = tmp * 0.5 + 0.5;
    tmp[0] = tmp[0] * viewport[2] + viewport[0];
    tmp[1] = tmp[1] * viewport[3] + viewport[1];
    tmp.truncate()
}

/// Maps window coordinates back to object coordinates.
///
/// Inverts `proj * model`; a singular product yields non-finite output.
pub fn un_project(win: Vec3, model: Mat4, proj: Mat4, viewport: Vec4) -> Vec3 {
    trace!(?win, ?viewport, "un_project");

    let inverse = (proj * model).inverse();

    let mut tmp = win.extend(1.0);
    tmp[0] = (tmp[0] - viewport[0]) / viewport[2];
    tmp[1] = (tmp[1] - viewport[1]) / viewport[3];
    tmp = tmp * 2.0 - 1.0;

    let mut obj = inverse * tmp;
    obj /= obj.w;
    obj.truncate()
}

/// Builds a picking matrix that maps the rectangle of size `delta` centered
/// at `center` (window coordinates) onto the whole viewport.
///
/// # Errors
///
/// Returns [`Error::ArgumentOutOfRange`] if either component of `delta` is
/// not strictly positive.
pub fn pick_matrix(center: Vec2, delta: Vec2, viewport: Vec4) -> Result<Mat4> {
    trace!(?center, ?delta, ?viewport, "pick_matrix");

    Error::check_positive("delta.x", delta.x)
        .and_then(|_| Error::check_positive("delta.y", delta.y))
        .inspect_err(|err| debug!(%err, "Rejecting pick_matrix delta"))?;

    let temp = Vec3::new(
        (viewport[2] - 2.0 * (center.x - viewport[0])) / delta.x,
        (viewport[3] - 2.0 * (center.y - viewport[1])) / delta.y,
        0.0,
    );

    // Translate and scale the picked region to the entire window
    let result = translate(Mat4::IDENTITY, temp);
    Ok(scale(result, Vec3::new(viewport[2] / delta.x, viewport[3] / delta.y, 1.0)))
}
