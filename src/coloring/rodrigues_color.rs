use nalgebra::{Quaternion, Vector3};

use crate::fundamental_zone::odf_fz_rodrigues;
use crate::interfaces::{to_rgb, Rgb};
use crate::orientation::euler_to_quaternion;
use crate::symmetries::{FzGeometry, RodriguesScale, SymmetryGroup};

/// Map a fundamental-zone Rodrigues vector (axis·magnitude) onto the color cube spanned by
/// the class's bin extents.
pub fn rodrigues_color(scale: RodriguesScale, fz: &FzGeometry, r: &Vector3<f64>) -> Rgb {
    let [max1, max2, max3] = fz.extent;
    let mut red = (r.x + max1) / (2.0 * max1);
    let mut green = (r.y + max2) / (2.0 * max2);
    let mut blue = (r.z + max3) / (2.0 * max3);

    if scale == RodriguesScale::DoubleDivide {
        red /= max1;
        green /= max1;
        blue /= max2;
    }
    to_rgb([red, green, blue])
}

/// Rodrigues color of an orientation quaternion.
pub fn rodrigues_color_quaternion(group: &SymmetryGroup, q: &Quaternion<f64>) -> Rgb {
    let rod = odf_fz_rodrigues(group, q);
    rodrigues_color(group.rodrigues_scale(), group.fz_geometry(), &rod.vector())
}

/// Rodrigues color of Bunge Euler angles in radians.
pub fn generate_rodrigues_color(group: &SymmetryGroup, euler: &Vector3<f64>) -> Rgb {
    rodrigues_color_quaternion(group, &euler_to_quaternion(euler))
}
