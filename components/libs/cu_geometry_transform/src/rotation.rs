//! Small rotation toolkit.
//!
//! Quaternions are `[x, y, z, w]`, matrices are row-major `[[f64; 3]; 3]`.
//! Inputs are never normalized: a non-unit quaternion gives a scaled matrix and NaN stays NaN.

pub type Quat = [f64; 4];
pub type Mat3 = [[f64; 3]; 3];
pub type Vec3 = [f64; 3];

pub const IDENTITY_QUAT: Quat = [0.0, 0.0, 0.0, 1.0];

pub const IDENTITY_MAT3: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Rotation matrix of `q`, homogeneous form.
pub fn quaternion_to_matrix(q: Quat) -> Mat3 {
    let [x, y, z, w] = q;
    let (xx, yy, zz, ww) = (x * x, y * y, z * z, w * w);
    [
        [
            ww + xx - yy - zz,
            2.0 * (x * y - w * z),
            2.0 * (x * z + w * y),
        ],
        [
            2.0 * (x * y + w * z),
            ww - xx + yy - zz,
            2.0 * (y * z - w * x),
        ],
        [
            2.0 * (x * z - w * y),
            2.0 * (y * z + w * x),
            ww - xx - yy + zz,
        ],
    ]
}

/// Quaternion of an orthonormal matrix (Shepperd's method).
pub fn matrix_to_quaternion(m: &Mat3) -> Quat {
    let trace = m[0][0] + m[1][1] + m[2][2];
    if trace > 0.0 {
        let s = (trace + 1.0).sqrt() * 2.0;
        [
            (m[2][1] - m[1][2]) / s,
            (m[0][2] - m[2][0]) / s,
            (m[1][0] - m[0][1]) / s,
            0.25 * s,
        ]
    } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
        let s = (1.0 + m[0][0] - m[1][1] - m[2][2]).sqrt() * 2.0;
        [
            0.25 * s,
            (m[0][1] + m[1][0]) / s,
            (m[0][2] + m[2][0]) / s,
            (m[2][1] - m[1][2]) / s,
        ]
    } else if m[1][1] > m[2][2] {
        let s = (1.0 + m[1][1] - m[0][0] - m[2][2]).sqrt() * 2.0;
        [
            (m[0][1] + m[1][0]) / s,
            0.25 * s,
            (m[1][2] + m[2][1]) / s,
            (m[0][2] - m[2][0]) / s,
        ]
    } else {
        let s = (1.0 + m[2][2] - m[0][0] - m[1][1]).sqrt() * 2.0;
        [
            (m[0][2] + m[2][0]) / s,
            (m[1][2] + m[2][1]) / s,
            0.25 * s,
            (m[1][0] - m[0][1]) / s,
        ]
    }
}

/// Hamilton product `a ∘ b`: rotating by the result is rotating by `b`, then by `a`.
pub fn quaternion_multiply(a: Quat, b: Quat) -> Quat {
    let [ax, ay, az, aw] = a;
    let [bx, by, bz, bw] = b;
    [
        aw * bx + ax * bw + ay * bz - az * by,
        aw * by - ax * bz + ay * bw + az * bx,
        aw * bz + ax * by - ay * bx + az * bw,
        aw * bw - ax * bx - ay * by - az * bz,
    ]
}

pub fn quaternion_conjugate(q: Quat) -> Quat {
    [-q[0], -q[1], -q[2], q[3]]
}

pub fn rotate(m: &Mat3, v: Vec3) -> Vec3 {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

pub fn transpose(m: &Mat3) -> Mat3 {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_1_SQRT_2;

    const RZ90: Quat = [0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2];
    const RX90: Quat = [FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2];

    fn assert_mat_eq(a: &Mat3, b: &Mat3) {
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(a[i][j], b[i][j], epsilon = 1e-12);
            }
        }
    }

    fn assert_quat_eq(a: Quat, b: Quat) {
        // q and -q are the same rotation.
        let sign = if a.iter().zip(b.iter()).map(|(x, y)| x * y).sum::<f64>() < 0.0 {
            -1.0
        } else {
            1.0
        };
        for i in 0..4 {
            assert_abs_diff_eq!(a[i], sign * b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_identity_quaternion_gives_identity_matrix() {
        assert_mat_eq(&quaternion_to_matrix(IDENTITY_QUAT), &IDENTITY_MAT3);
    }

    #[test]
    fn test_rz90_matrix() {
        let m = quaternion_to_matrix(RZ90);
        assert_mat_eq(
            &m,
            &[[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
        );
        let v = rotate(&m, [1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(v[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[1], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_quaternion_round_trip_all_branches() {
        let candidates = [
            IDENTITY_QUAT,
            RZ90,
            RX90,
            // 180 degrees about x, y and z hit the three non-trace branches
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.5, 0.5, 0.5, 0.5],
        ];
        for q in candidates {
            let back = matrix_to_quaternion(&quaternion_to_matrix(q));
            assert_quat_eq(back, q);
        }
    }

    #[test]
    fn test_multiply_matches_matrix_product() {
        let composed = quaternion_to_matrix(quaternion_multiply(RZ90, RX90));
        let a = quaternion_to_matrix(RZ90);
        let b = quaternion_to_matrix(RX90);
        let mut product = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                product[i][j] = (0..3).map(|k| a[i][k] * b[k][j]).sum();
            }
        }
        assert_mat_eq(&composed, &product);
    }

    #[test]
    fn test_conjugate_is_inverse_rotation() {
        let q = quaternion_multiply(RZ90, quaternion_conjugate(RZ90));
        assert_quat_eq(q, IDENTITY_QUAT);
        assert_mat_eq(
            &quaternion_to_matrix(quaternion_conjugate(RX90)),
            &transpose(&quaternion_to_matrix(RX90)),
        );
    }

    #[test]
    fn test_nan_propagates() {
        let m = quaternion_to_matrix([f64::NAN, 0.0, 0.0, 1.0]);
        assert!(m[0][0].is_nan());
        assert!(rotate(&m, [1.0, 0.0, 0.0])[0].is_nan());
    }
}
