use anyhow::Error;
use nalgebra::Vector3;

use crate::symmetries::CrystalClass;

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// One slip system in Cartesian crystal coordinates. Components need not be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlipSystem {
    pub plane: [f64; 3],
    pub direction: [f64; 3],
}

impl SlipSystem {
    pub const fn new(plane: [f64; 3], direction: [f64; 3]) -> Self {
        SlipSystem { plane, direction }
    }

    /// Unit slip plane normal.
    pub fn plane_normal(&self) -> Vector3<f64> {
        Vector3::from(self.plane).normalize()
    }

    /// Unit slip direction.
    pub fn slip_direction(&self) -> Vector3<f64> {
        Vector3::from(self.direction).normalize()
    }
}

/// The twelve {111}<110> systems of FCC crystals, grouped by plane.
pub const CUBIC_SLIP_SYSTEMS: [SlipSystem; 12] = [
    SlipSystem::new([1.0, 1.0, 1.0], [0.0, 1.0, -1.0]),
    SlipSystem::new([1.0, 1.0, 1.0], [1.0, 0.0, -1.0]),
    SlipSystem::new([1.0, 1.0, 1.0], [1.0, -1.0, 0.0]),
    SlipSystem::new([1.0, 1.0, -1.0], [1.0, -1.0, 0.0]),
    SlipSystem::new([1.0, 1.0, -1.0], [1.0, 0.0, 1.0]),
    SlipSystem::new([1.0, 1.0, -1.0], [0.0, 1.0, 1.0]),
    SlipSystem::new([1.0, -1.0, 1.0], [1.0, 1.0, 0.0]),
    SlipSystem::new([1.0, -1.0, 1.0], [0.0, 1.0, 1.0]),
    SlipSystem::new([1.0, -1.0, 1.0], [1.0, 0.0, -1.0]),
    SlipSystem::new([-1.0, 1.0, 1.0], [1.0, 1.0, 0.0]),
    SlipSystem::new([-1.0, 1.0, 1.0], [1.0, 0.0, 1.0]),
    SlipSystem::new([-1.0, 1.0, 1.0], [0.0, 1.0, -1.0]),
];

/// Basal (0001)<11-20> then prismatic {10-10}<11-20> systems of HCP crystals, with the
/// crystal x axis along a1.
pub const HEXAGONAL_SLIP_SYSTEMS: [SlipSystem; 6] = [
    SlipSystem::new([0.0, 0.0, 1.0], [HALF_SQRT_3, -0.5, 0.0]),
    SlipSystem::new([0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    SlipSystem::new([0.0, 0.0, 1.0], [-HALF_SQRT_3, -0.5, 0.0]),
    SlipSystem::new([0.5, HALF_SQRT_3, 0.0], [HALF_SQRT_3, -0.5, 0.0]),
    SlipSystem::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    SlipSystem::new([-0.5, HALF_SQRT_3, 0.0], [-HALF_SQRT_3, -0.5, 0.0]),
];

/// Default slip systems of a class. Empty for classes without a default set.
pub fn default_slip_systems(class: CrystalClass) -> &'static [SlipSystem] {
    match class {
        CrystalClass::CubicHigh => &CUBIC_SLIP_SYSTEMS,
        CrystalClass::HexagonalHigh => &HEXAGONAL_SLIP_SYSTEMS,
        _ => &[],
    }
}

/// Like [`default_slip_systems`] but fails for classes without a default set.
pub fn require_slip_systems(class: CrystalClass) -> Result<&'static [SlipSystem], Error> {
    let systems = default_slip_systems(class);
    if systems.is_empty() {
        return Err(Error::msg(format!(
            "No default slip systems are defined for {}.",
            class
        )));
    }
    Ok(systems)
}
