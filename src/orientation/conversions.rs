use std::f64::consts::{PI, TAU};

use nalgebra::{Matrix3, Quaternion, Vector3};

use crate::config::EPSILON_ZERO;
use crate::orientation::rodrigues::Rodrigues;

// Polynomial fit of the inverse homochoric angle function, in powers of |h|².
const HOMOCHORIC_TFIT: [f64; 16] = [
    1.000_000_000_001_885_2,
    -0.500_000_000_219_484_7,
    -0.024_999_992_127_593_126,
    -0.003_928_701_544_781_374,
    -0.000_815_270_153_545_043_8,
    -0.000_200_950_042_611_971_2,
    -0.000_023_979_867_760_717_56,
    -0.000_082_028_689_266_058_41,
    0.000_124_487_150_420_900_92,
    -0.000_174_911_421_482_257_7,
    0.000_170_348_193_414_005_4,
    -0.000_120_620_650_041_168_28,
    0.000_059_719_705_868_660_826,
    -0.000_019_807_567_239_656_47,
    0.000_003_953_714_684_212_874,
    -0.000_000_365_550_014_397_195_44,
];

/// Bunge (φ1, Φ, φ2) in radians to a unit quaternion with non-negative scalar part.
pub fn euler_to_quaternion(euler: &Vector3<f64>) -> Quaternion<f64> {
    let (phi1, phi, phi2) = (euler[0], euler[1], euler[2]);
    let (s, c) = (0.5 * phi).sin_cos();
    let sigma = 0.5 * (phi1 + phi2);
    let delta = 0.5 * (phi1 - phi2);

    let q = Quaternion::new(
        c * sigma.cos(),
        -s * delta.cos(),
        -s * delta.sin(),
        -c * sigma.sin(),
    );
    positive_hemisphere(q)
}

/// Passive orientation matrix g for Bunge Euler angles.
pub fn euler_to_matrix(euler: &Vector3<f64>) -> Matrix3<f64> {
    let (s1, c1) = euler[0].sin_cos();
    let (s, c) = euler[1].sin_cos();
    let (s2, c2) = euler[2].sin_cos();

    Matrix3::new(
        c1 * c2 - s1 * s2 * c,
        s1 * c2 + c1 * s2 * c,
        s2 * s,
        -c1 * s2 - s1 * c2 * c,
        -s1 * s2 + c1 * c2 * c,
        c2 * s,
        s1 * s,
        -c1 * s,
        c,
    )
}

/// Rotation matrix of a unit quaternion. Composition is preserved:
/// `quaternion_to_matrix(a * b) == quaternion_to_matrix(a) * quaternion_to_matrix(b)`.
pub fn quaternion_to_matrix(q: &Quaternion<f64>) -> Matrix3<f64> {
    let (w, x, y, z) = (q.w, q.i, q.j, q.k);
    let qq = w * w - (x * x + y * y + z * z);

    Matrix3::new(
        qq + 2.0 * x * x,
        2.0 * (x * y - w * z),
        2.0 * (x * z + w * y),
        2.0 * (y * x + w * z),
        qq + 2.0 * y * y,
        2.0 * (y * z - w * x),
        2.0 * (z * x - w * y),
        2.0 * (z * y + w * x),
        qq + 2.0 * z * z,
    )
}

/// Bunge Euler angles of an orientation matrix, each wrapped into [0, 2π).
pub fn matrix_to_euler(g: &Matrix3<f64>) -> Vector3<f64> {
    let (phi1, phi, phi2) = if (g[(2, 2)].abs() - 1.0).abs() > EPSILON_ZERO {
        (
            g[(2, 0)].atan2(-g[(2, 1)]),
            g[(2, 2)].clamp(-1.0, 1.0).acos(),
            g[(0, 2)].atan2(g[(1, 2)]),
        )
    } else {
        let phi = if g[(2, 2)] > 0.0 { 0.0 } else { PI };
        (g[(0, 1)].atan2(g[(0, 0)]), phi, 0.0)
    };

    Vector3::new(wrap_two_pi(phi1), phi, wrap_two_pi(phi2))
}

pub fn quaternion_to_euler(q: &Quaternion<f64>) -> Vector3<f64> {
    matrix_to_euler(&quaternion_to_matrix(q))
}

/// Axis and angle ω ∈ [0, 2π] of a quaternion. The scalar part is clamped to [-1, 1]
/// first. A vanishing vector part yields the (0, 0, 1) axis.
pub fn quaternion_to_axis_angle(q: &Quaternion<f64>) -> (Vector3<f64>, f64) {
    let w = q.w.clamp(-1.0, 1.0);
    let angle = 2.0 * w.acos();
    let v = q.imag();
    let len = v.norm();
    if len < EPSILON_ZERO || angle == 0.0 {
        return (Vector3::z(), 0.0);
    }
    (v / len, angle)
}

pub fn axis_angle_to_quaternion(axis: &Vector3<f64>, angle: f64) -> Quaternion<f64> {
    let len = axis.norm();
    if len < EPSILON_ZERO {
        return Quaternion::identity();
    }
    let (s, c) = (0.5 * angle).sin_cos();
    let n = axis / len;
    Quaternion::new(c, n.x * s, n.y * s, n.z * s)
}

pub fn quaternion_to_rodrigues(q: &Quaternion<f64>) -> Rodrigues {
    let q = positive_hemisphere(*q);
    let v = q.imag();
    let len = v.norm();
    if len < EPSILON_ZERO {
        return Rodrigues::identity();
    }
    let magnitude = if q.w.abs() < EPSILON_ZERO {
        f64::INFINITY
    } else {
        len / q.w
    };
    Rodrigues::new(v / len, magnitude)
}

pub fn rodrigues_to_quaternion(rod: &Rodrigues) -> Quaternion<f64> {
    axis_angle_to_quaternion(&rod.axis, rod.angle())
}

/// Homochoric vector of a Rodrigues value: axis·(¾(ω − sin ω))^(1/3).
pub fn rodrigues_to_homochoric(rod: &Rodrigues) -> Vector3<f64> {
    if rod.magnitude == 0.0 {
        return Vector3::zeros();
    }
    let f = if rod.is_infinite() {
        (0.75 * PI).cbrt()
    } else {
        let angle = rod.angle();
        (0.75 * (angle - angle.sin())).cbrt()
    };
    rod.axis * f
}

/// Inverse of the homochoric map, evaluated with the polynomial fit.
pub fn homochoric_to_axis_angle(h: &Vector3<f64>) -> (Vector3<f64>, f64) {
    let hmag = h.norm_squared();
    if hmag < EPSILON_ZERO {
        return (Vector3::z(), 0.0);
    }
    let mut s = HOMOCHORIC_TFIT[0];
    let mut power = 1.0;
    for coeff in HOMOCHORIC_TFIT.iter().skip(1) {
        power *= hmag;
        s += coeff * power;
    }
    let angle = 2.0 * s.clamp(-1.0, 1.0).acos();
    (h / hmag.sqrt(), angle)
}

pub fn homochoric_to_quaternion(h: &Vector3<f64>) -> Quaternion<f64> {
    let (axis, angle) = homochoric_to_axis_angle(h);
    axis_angle_to_quaternion(&axis, angle)
}

/// Flip the sign of a quaternion so its scalar part is non-negative.
pub fn positive_hemisphere(q: Quaternion<f64>) -> Quaternion<f64> {
    if q.w < 0.0 {
        -q
    } else {
        q
    }
}

fn wrap_two_pi(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
