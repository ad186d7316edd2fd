use std::f64::consts::{PI, TAU};

use nalgebra::{Quaternion, Vector3};

use crate::interfaces::{to_rgb, Rgb, BLACK};
use crate::misorientation::misorientation;
use crate::orientation::euler_to_quaternion;
use crate::symmetries::{CrystalClass, SymmetryGroup};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Schuh misorientation color of `q` relative to `reference`.
///
/// The disorientation is mapped into an HSV cone through the chain of projections for the
/// m-3m fundamental zone. Only the high-symmetry cubic class has such a mapping; every other
/// class returns black.
pub fn generate_misorientation_color(
    group: &SymmetryGroup,
    q: &Quaternion<f64>,
    reference: &Quaternion<f64>,
) -> Rgb {
    if group.class() != CrystalClass::CubicHigh {
        return BLACK;
    }

    let m = misorientation(group, q, reference);
    let [x7, y7, z7] = cubic_misorientation_cone(m.angle, &m.axis);

    let h = (y7.atan2(x7) + TAU) % TAU / TAU;
    let mut s = (x7 * x7 + y7 * y7).sqrt();
    let v = z7;
    if v > 0.0 {
        s /= v;
    }

    let [r, g, b] = hsv_to_rgb(h, s, v);
    let rgb = to_rgb([r, g, b]);
    [255 - rgb[1], rgb[2], rgb[0]]
}

/// Misorientation color between two Euler orientations in radians.
pub fn generate_misorientation_color_euler(
    group: &SymmetryGroup,
    euler: &Vector3<f64>,
    reference: &Vector3<f64>,
) -> Rgb {
    generate_misorientation_color(
        group,
        &euler_to_quaternion(euler),
        &euler_to_quaternion(reference),
    )
}

// Cartesian HSV coordinates of a disorientation in the m-3m zone.
fn cubic_misorientation_cone(angle: f64, axis: &Vector3<f64>) -> [f64; 3] {
    let tan_8 = (PI / 8.0).tan();
    let cos_8 = (PI / 8.0).cos();
    let (sin_38, cos_38) = (3.0 * PI / 8.0).sin_cos();

    let mut n = [axis.x.abs(), axis.y.abs(), axis.z.abs()];
    n.sort_by(|a, b| a.total_cmp(b));
    let [z, y, x] = n;

    // scale onto the Rodrigues vector
    let k = (angle / 2.0).tan();
    let (x, y, z) = (x * k, y * k, z * k);

    // fold the corner region past the (111) plane
    let (x1, mut y1, mut z1) = (x, y, z);
    if x >= 1.0 / 3.0 && z.atan2(y) >= (1.0 - 2.0 * x) / x {
        y1 = (x * (y + z)) / (1.0 - x);
        z1 = (x * z * (y + z)) / (y * (1.0 - x));
    }

    let x2 = x1 - tan_8;
    let y2 = y1 * cos_38 - z1 * sin_38;
    let z2 = y1 * sin_38 + z1 * cos_38;

    let x3 = x2;
    // y2 = z2 = 0 for rotations about <100>, the identity included
    let y3 = if z2 == 0.0 { y2 } else { y2 * (1.0 + (y2 / z2) * tan_8) };
    let z3 = z2 + y2 * tan_8;

    let x4 = x3;
    let y4 = (y3 * cos_8) / tan_8;
    let z4 = z3 - x3 / cos_8;

    let k = (-x4).atan2(y4);
    let x5 = x4 * (k.sin() + k.cos().abs());
    let y5 = y4 * (k.sin() + k.cos().abs());
    let z5 = z4;

    let k = (-x5).atan2(y5);
    let radius = (x5 * x5 + y5 * y5).sqrt();
    let x6 = -radius * (2.0 * k).sin();
    let y6 = radius * (2.0 * k).cos();
    let z6 = z5;

    let x7 = (x6 * SQRT_3 - y6) / (2.0 * tan_8);
    let y7 = (x6 + y6 * SQRT_3) / (2.0 * tan_8);
    let z7 = z6 * (cos_8 / tan_8);
    [x7, y7, z7]
}

/// Standard HSV to RGB with hue in [0, 1). Saturation and value are clamped to [0, 1].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> [f64; 3] {
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);
    if s <= 0.0 {
        return [v, v, v];
    }

    let h6 = (h.rem_euclid(1.0)) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u32 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}
