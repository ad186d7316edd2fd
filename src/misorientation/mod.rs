// Misorientation module: Minimum-angle rotation between two orientations over all symmetry equivalents

// ======================== MODULE DECLARATIONS ========================
pub mod misorientation_solver;


// ======================== MISORIENTATION ========================
pub use misorientation_solver::{
    Misorientation,                 // struct - angle in [0, π] plus unit axis
    misorientation,                 // fn(group: &SymmetryGroup, q1: &Quaternion<f64>, q2: &Quaternion<f64>) -> Misorientation
    misorientation_quaternion,      // fn(group, q1, q2) -> Quaternion<f64> - winning symmetric equivalent, w >= 0
    misorientation_from_eulers,     // fn(group, euler1: &Vector3<f64>, euler2: &Vector3<f64>) -> Misorientation
};
// Misorientation impl methods:
//   zero() -> Self                                                 - zero rotation about (0,0,1)
//   angle_degrees(&self) -> f64                                    - angle converted to degrees
