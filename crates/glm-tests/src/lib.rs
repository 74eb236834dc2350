//! Integration tests for GLM-RS crates.
//!
//! This crate checks the public API end to end: algebraic properties that
//! must hold across vector and matrix types, and parity with `glam`, an
//! independent column-major `f32` implementation of the same conventions.

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use glm_math::prelude::*;
    use std::f32::consts::{FRAC_PI_3, FRAC_PI_4};
    use tracing_subscriber::EnvFilter;

    /// Installs a test subscriber once; set `RUST_LOG=glm_math=trace` to see builder logs.
    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn to_glam(m: Mat4) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&m.to_array())
    }

    fn from_glam(m: glam::Mat4) -> Mat4 {
        Mat4::from_array(m.to_cols_array())
    }

    fn v3(v: Vec3) -> glam::Vec3 {
        glam::Vec3::from_array(v.to_array())
    }

    /// A handful of well-conditioned, non-symmetric matrices.
    fn samples() -> Vec<Mat4> {
        vec![
            Mat4::from_cols(
                Vec4::new(2.0, 0.0, 1.0, 0.0),
                Vec4::new(1.0, 3.0, 0.0, 0.0),
                Vec4::new(0.0, 1.0, 4.0, 0.0),
                Vec4::new(5.0, -2.0, 1.0, 1.0),
            ),
            Mat4::from_cols(
                Vec4::new(4.0, -1.0, 0.5, 0.25),
                Vec4::new(0.0, 2.0, 1.0, -1.0),
                Vec4::new(1.5, 0.0, 3.0, 0.5),
                Vec4::new(-2.0, 1.0, 0.0, 2.0),
            ),
            rotate(translate(Mat4::IDENTITY, Vec3::new(3.0, -1.0, 2.0)), 0.8, Vec3::new(1.0, 2.0, -0.5)),
            perspective(FRAC_PI_4, 1.5, 0.5, 50.0) * look_at(Vec3::new(4.0, 3.0, 8.0), Vec3::ZERO, Vec3::Y),
        ]
    }

    // ========================================================================
    // Algebraic properties
    // ========================================================================

    #[test]
    fn test_vector_add_sub_roundtrip() {
        let v = Vec3::new(1.5, -2.0, 8.0);
        let w = Vec3::new(0.25, 4.0, -1.0);
        assert_eq!((v + w) - w, v);
        assert_eq!(v * 3.0, Vec3::new(v.x * 3.0, v.y * 3.0, v.z * 3.0));
        assert_eq!(3.0 * v, v * 3.0);
    }

    #[test]
    fn test_dot_commutative() {
        let pairs = [
            (Vec4::new(1.0, 2.0, 3.0, 4.0), Vec4::new(-0.5, 0.25, 8.0, 1.0)),
            (Vec4::new(1e8, 1.0, -1e8, 1.0), Vec4::ONE),
        ];
        for (a, b) in pairs {
            assert_eq!(dot(a, b), dot(b, a));
            assert_eq!(dot(a.truncate(), b.truncate()), dot(b.truncate(), a.truncate()));
        }
    }

    #[test]
    fn test_cross_anticommutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(cross(a, b), -cross(b, a));
        assert_eq!(cross(a, a), Vec3::ZERO);
        // Orthogonal to both inputs
        assert_abs_diff_eq!(dot(cross(a, b), a), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(dot(cross(a, b), b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_identity_is_neutral() {
        for m in samples() {
            assert_eq!(m * Mat4::identity(), m);
            assert_eq!(Mat4::identity() * m, m);
        }
        let m3 = samples()[1].to_mat3();
        assert_eq!(m3 * Mat3::identity(), m3);
        assert_eq!(Mat3::identity() * m3, m3);
        let m2 = m3.to_mat2();
        assert_eq!(m2 * Mat2::identity(), m2);
        assert_eq!(Mat2::identity() * m2, m2);
    }

    #[test]
    fn test_inverse_times_matrix_is_identity() {
        for m in samples() {
            assert_abs_diff_eq!(m * inverse(m), Mat4::IDENTITY, epsilon = 1e-4);
            assert_abs_diff_eq!(inverse(m) * m, Mat4::IDENTITY, epsilon = 1e-4);

            let m3 = m.to_mat3();
            assert_abs_diff_eq!(m3 * inverse(m3), Mat3::IDENTITY, epsilon = 1e-4);
            let m2 = m3.to_mat2();
            assert_abs_diff_eq!(m2 * inverse(m2), Mat2::IDENTITY, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_identity_to_array() {
        #[rustfmt::skip]
        let expected = [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        assert_eq!(Mat4::identity().to_array(), expected);
        assert_eq!(
            Mat4::identity().to_mat3().to_array(),
            [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_translate_identity_scenario() {
        let m = translate(Mat4::identity(), Vec3::new(1.0, 2.0, 3.0));
        let expected = Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(m, expected);
    }

    #[test]
    fn test_mat2_inverse_scenario() {
        let m = Mat2::new(2.0, 0.0, 0.0, 3.0);
        assert_eq!(inverse(m), Mat2::new(0.5, 0.0, 0.0, 1.0 / 3.0));
    }

    #[test]
    fn test_range_errors() {
        init_tracing();
        assert!(matches!(
            perspective_fov(1.0, 0.0, 600.0, 0.1, 100.0),
            Err(Error::ArgumentOutOfRange { name: "width", .. })
        ));
        assert!(matches!(
            perspective_fov(1.0, 800.0, 0.0, 0.1, 100.0),
            Err(Error::ArgumentOutOfRange { name: "height", .. })
        ));
        assert!(matches!(
            perspective_fov(0.0, 800.0, 600.0, 0.1, 100.0),
            Err(Error::ArgumentOutOfRange { name: "fov", .. })
        ));
        let viewport = Vec4::new(0.0, 0.0, 800.0, 600.0);
        assert!(matches!(
            pick_matrix(Vec2::new(10.0, 10.0), Vec2::new(0.0, 4.0), viewport),
            Err(Error::ArgumentOutOfRange { name: "delta.x", .. })
        ));

        assert_eq!(Vec4::ZERO.get(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
        assert_eq!(Mat4::IDENTITY.column(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
        assert!(Mat2::IDENTITY.element(0, 2).is_err());
    }

    #[test]
    fn test_non_finite_propagation() {
        // Never reported as errors
        assert!(normalize(Vec3::ZERO).is_nan());
        assert!(!(Vec2::ONE / 0.0).is_finite());
        assert!(!inverse(Mat4::ZERO).is_finite());
        assert!(!ortho(1.0, 1.0, 0.0, 1.0, 0.0, 1.0).is_finite());
    }

    // ========================================================================
    // Parity with glam
    // ========================================================================

    #[test]
    fn test_glam_products() {
        let all = samples();
        for a in &all {
            for b in &all {
                let ours = *a * *b;
                let theirs = from_glam(to_glam(*a) * to_glam(*b));
                assert_relative_eq!(ours, theirs, epsilon = 1e-5, max_relative = 1e-5);
            }
            let v = Vec4::new(1.0, -2.0, 0.5, 1.0);
            let theirs = to_glam(*a) * glam::Vec4::from_array(v.to_array());
            assert_relative_eq!(*a * v, Vec4::from_array(theirs.to_array()), epsilon = 1e-5);
        }
    }

    #[test]
    fn test_glam_inverse() {
        for m in samples() {
            let theirs = from_glam(to_glam(m).inverse());
            assert_relative_eq!(m.inverse(), theirs, epsilon = 1e-5, max_relative = 1e-4);
            assert_relative_eq!(m.determinant(), to_glam(m).determinant(), max_relative = 1e-5);

            let m3 = m.to_mat3();
            let g3 = glam::Mat3::from_cols_array(&m3.to_array());
            assert_relative_eq!(
                m3.inverse(),
                Mat3::from_array(g3.inverse().to_cols_array()),
                epsilon = 1e-5,
                max_relative = 1e-4
            );

            let m2 = m3.to_mat2();
            let g2 = glam::Mat2::from_cols_array(&m2.to_array());
            assert_relative_eq!(
                m2.inverse(),
                Mat2::from_array(g2.inverse().to_cols_array()),
                epsilon = 1e-5,
                max_relative = 1e-4
            );
        }
    }

    #[test]
    fn test_glam_inverse_exact() {
        // glam inverts with the same cofactor grouping
        let m = samples()[1];
        assert_eq!(m.inverse().to_array(), to_glam(m).inverse().to_cols_array());
    }

    #[test]
    fn test_glam_look_at() {
        let cases = [
            (Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y),
            (Vec3::new(3.0, 4.0, 5.0), Vec3::new(-1.0, 0.5, 0.0), Vec3::Y),
            (Vec3::new(-2.0, 8.0, 1.0), Vec3::new(0.0, 0.0, -3.0), Vec3::new(0.1, 1.0, 0.0)),
        ];
        for (eye, center, up) in cases {
            let ours = look_at(eye, center, up);
            let theirs = from_glam(glam::Mat4::look_at_rh(v3(eye), v3(center), v3(up)));
            assert_abs_diff_eq!(ours, theirs, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_glam_perspective() {
        let cases = [(FRAC_PI_4, 16.0 / 9.0, 0.1, 100.0), (FRAC_PI_3, 1.0, 1.0, 10.0), (1.2, 0.5, 0.01, 1000.0)];
        for (fovy, aspect, near, far) in cases {
            let ours = perspective(fovy, aspect, near, far);
            let theirs = from_glam(glam::Mat4::perspective_rh_gl(fovy, aspect, near, far));
            assert_relative_eq!(ours, theirs, epsilon = 1e-5, max_relative = 1e-5);

            // Symmetric frustum with the same near rectangle
            let top = near * (fovy / 2.0).tan();
            let right = top * aspect;
            let f = frustum(-right, right, -top, top, near, far);
            assert_relative_eq!(f, theirs, epsilon = 1e-5, max_relative = 1e-4);
        }
    }

    #[test]
    fn test_glam_ortho() {
        let cases = [
            (-1.0, 1.0, -1.0, 1.0, -1.0, 1.0),
            (0.0, 800.0, 0.0, 600.0, 0.1, 100.0),
            (-4.0, 2.0, 3.0, -3.0, -10.0, 10.0),
        ];
        for (l, r, b, t, n, f) in cases {
            let ours = ortho(l, r, b, t, n, f);
            let theirs = from_glam(glam::Mat4::orthographic_rh_gl(l, r, b, t, n, f));
            assert_relative_eq!(ours, theirs, epsilon = 1e-6, max_relative = 1e-5);
        }
        // The 2D overload is the full one with near = -1, far = 1
        let theirs = from_glam(glam::Mat4::orthographic_rh_gl(0.0, 640.0, 480.0, 0.0, -1.0, 1.0));
        assert_relative_eq!(ortho_2d(0.0, 640.0, 480.0, 0.0), theirs, epsilon = 1e-6);
    }

    #[test]
    fn test_glam_rotate_translate_scale() {
        let axes = [Vec3::X, Vec3::new(1.0, 1.0, 1.0), Vec3::new(-0.3, 2.0, 0.7)];
        for axis in axes {
            for angle in [0.0, 0.5, FRAC_PI_3, -2.0] {
                let ours = Mat4::rotation(angle, axis);
                let theirs = from_glam(glam::Mat4::from_axis_angle(v3(axis).normalize(), angle));
                assert_abs_diff_eq!(ours, theirs, epsilon = 1e-6);
            }
        }

        let base = samples()[1];
        let t = Vec3::new(1.0, -2.0, 3.5);
        let theirs = from_glam(to_glam(base) * glam::Mat4::from_translation(v3(t)));
        assert_relative_eq!(translate(base, t), theirs, epsilon = 1e-5);

        let s = Vec3::new(2.0, 0.5, -1.0);
        let theirs = from_glam(to_glam(base) * glam::Mat4::from_scale(v3(s)));
        assert_relative_eq!(scale(base, s), theirs, epsilon = 1e-5);

        let theirs = from_glam(to_glam(base) * glam::Mat4::from_axis_angle(glam::Vec3::Y, 0.3));
        assert_abs_diff_eq!(rotate(base, 0.3, Vec3::Y), theirs, epsilon = 1e-5);
    }

    #[test]
    fn test_glam_project() {
        init_tracing();
        let model = Mat4::rotation(0.4, Vec3::Y);
        let proj = perspective(FRAC_PI_4, 4.0 / 3.0, 0.1, 100.0);
        let viewport = Vec4::new(0.0, 0.0, 800.0, 600.0);
        let obj = Vec3::new(1.0, 0.5, -6.0);

        let ours = project(obj, model, proj, viewport);

        // Same mapping through glam: clip -> NDC -> window
        let ndc = (to_glam(proj) * to_glam(model)).project_point3(v3(obj));
        let theirs = Vec3::new(
            (ndc.x * 0.5 + 0.5) * 800.0,
            (ndc.y * 0.5 + 0.5) * 600.0,
            ndc.z * 0.5 + 0.5,
        );
        assert_abs_diff_eq!(ours, theirs, epsilon = 1e-3);

        let back = un_project(ours, model, proj, viewport);
        assert_abs_diff_eq!(back, obj, epsilon = 5e-3);
    }
}
