// Orientation module: Conversions between the orientation representations used by the kernels
// Euler angles are Bunge (φ1, Φ, φ2) in radians, quaternions are nalgebra (w, i, j, k)

// ======================== MODULE DECLARATIONS ========================
pub mod conversions;
pub mod rodrigues;


// ======================== RODRIGUES VECTORS ========================
pub use rodrigues::Rodrigues; // struct - unit axis plus tan(ω/2) magnitude, infinite for half turns
// Rodrigues impl methods:
//   new(axis: Vector3<f64>, magnitude: f64) -> Self          - creates from axis and magnitude
//   identity() -> Self                                        - zero rotation with (0,0,1) axis
//   from_vector(v: Vector3<f64>) -> Self                      - splits axis·tan(ω/2) into axis and magnitude
//   vector(&self) -> Vector3<f64>                             - 3-component form with finite stand-in for infinity
//   angle(&self) -> f64                                       - rotation angle in radians

// ======================== CONVERSIONS ========================
pub use conversions::{
    euler_to_quaternion,        // fn(euler: &Vector3<f64>) -> Quaternion<f64> - Bunge Euler to unit quaternion, w >= 0
    euler_to_matrix,            // fn(euler: &Vector3<f64>) -> Matrix3<f64> - Bunge Euler to passive orientation matrix
    quaternion_to_matrix,       // fn(q: &Quaternion<f64>) -> Matrix3<f64> - rotation matrix, composition preserving
    matrix_to_euler,            // fn(g: &Matrix3<f64>) -> Vector3<f64> - orientation matrix to Bunge Euler in [0, 2π)
    quaternion_to_euler,        // fn(q: &Quaternion<f64>) -> Vector3<f64> - quaternion to Bunge Euler
    quaternion_to_axis_angle,   // fn(q: &Quaternion<f64>) -> (Vector3<f64>, f64) - clamped axis-angle
    axis_angle_to_quaternion,   // fn(axis: &Vector3<f64>, angle: f64) -> Quaternion<f64> - axis-angle to quaternion
    quaternion_to_rodrigues,    // fn(q: &Quaternion<f64>) -> Rodrigues - quaternion to Rodrigues
    rodrigues_to_quaternion,    // fn(rod: &Rodrigues) -> Quaternion<f64> - Rodrigues to quaternion
    rodrigues_to_homochoric,    // fn(rod: &Rodrigues) -> Vector3<f64> - Rodrigues to homochoric
    homochoric_to_axis_angle,   // fn(h: &Vector3<f64>) -> (Vector3<f64>, f64) - homochoric to axis-angle (polynomial fit)
    homochoric_to_quaternion,   // fn(h: &Vector3<f64>) -> Quaternion<f64> - homochoric to quaternion
    positive_hemisphere,        // fn(q: Quaternion<f64>) -> Quaternion<f64> - sign flip to w >= 0
};
