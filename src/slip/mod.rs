// Slip module: Schmid factors and grain boundary slip transmission metrics
// Default slip systems exist for cubic-high (FCC {111}<110>) and hexagonal-high (basal and prismatic <a>)

// ======================== MODULE DECLARATIONS ========================
pub mod schmid;
pub mod slip_systems;
pub mod transmission;


// ======================== SLIP SYSTEMS ========================
pub use slip_systems::{
    SlipSystem,                     // struct - slip plane normal and slip direction in crystal coordinates
    CUBIC_SLIP_SYSTEMS,             // [SlipSystem; 12] - FCC {111}<110>
    HEXAGONAL_SLIP_SYSTEMS,         // [SlipSystem; 6] - basal then prismatic <a>
    default_slip_systems,           // fn(class: CrystalClass) -> &'static [SlipSystem] - empty when undefined
    require_slip_systems,           // fn(class: CrystalClass) -> Result<&'static [SlipSystem], Error>
};
// SlipSystem impl methods:
//   new(plane: [f64; 3], direction: [f64; 3]) -> Self              - const constructor
//   plane_normal(&self) -> Vector3<f64>                             - unit plane normal
//   slip_direction(&self) -> Vector3<f64>                           - unit slip direction

// ======================== SCHMID FACTORS ========================
pub use schmid::{
    SchmidFactor,                   // struct - factor, winning system index, phi and lambda angles
    schmid_factor,                  // fn(class, crystal_load: &Vector3<f64>) -> SchmidFactor - default systems
    schmid_factor_for_system,       // fn(group, crystal_load, plane, direction) -> SchmidFactor - symmetric variants of one system
    best_of,                        // fn(systems: &[SlipSystem], crystal_load) -> SchmidFactor
    sample_to_crystal,              // fn(q: &Quaternion<f64>, sample_load: &Vector3<f64>) -> Vector3<f64>
    abs_cos,                        // fn(a, b) -> f64 - |cos| of the enclosed angle, 0 for zero vectors
};

// ======================== SLIP TRANSMISSION ========================
pub use transmission::{
    m_prime,                        // fn(class, q1, q2, load) -> Result<f64, Error> - Luster-Morris m'
    f1,                             // fn(class, q1, q2, load, max_sf: bool) -> Result<f64, Error>
    f1spt,                          // fn(class, q1, q2, load, max_sf: bool) -> Result<f64, Error> - F1 times direction alignment
    f7,                             // fn(class, q1, q2, load, max_sf: bool) -> Result<f64, Error>
};
