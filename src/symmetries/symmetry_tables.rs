use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

use serde::Serialize;

use crate::symmetries::crystal_class::CrystalClass;

const R2: f64 = FRAC_1_SQRT_2;
const H3: f64 = 0.866_025_403_784_438_6; // √3/2
const R3: f64 = 0.577_350_269_189_625_8; // 1/√3

/// Fundamental IPF triangle of a class, bounds in degrees.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub enum UnitTriangle {
    /// Rectangular (η, χ) window.
    Azimuthal {
        eta_min: f64,
        eta_max: f64,
        chi_max: f64,
    },
    /// Cubic triangle: η ∈ [0, eta_max], χ bounded by the {111} great circle.
    Cubic { eta_max: f64 },
}

/// How the Rodrigues color of a class rescales its channels.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RodriguesScale {
    /// (r + max) / range per axis.
    Plain,
    /// Plain, then red and green divided by max1 and blue by max2 once more.
    DoubleDivide,
}

/// Canonical crystal directions of one pole-figure family.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PoleFamily {
    pub label: &'static str,
    pub directions: &'static [[f64; 3]],
}

/// Static per-class data. Quaternions are stored as (w, x, y, z).
#[derive(Debug)]
pub(crate) struct ClassTables {
    pub name: &'static str,
    pub has_inversion: bool,
    pub quaternions: &'static [[f64; 4]],
    pub fz_angles: [f64; 3],
    pub fz_divisors: [f64; 3],
    pub triangle: UnitTriangle,
    pub rodrigues_scale: RodriguesScale,
    pub pole_families: &'static [PoleFamily; 3],
}

// ======================== OPERATOR TABLES ========================

const TRICLINIC_QUATS: [[f64; 4]; 1] = [[1.0, 0.0, 0.0, 0.0]];

const MONOCLINIC_QUATS: [[f64; 4]; 2] = [[1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]];

const ORTHORHOMBIC_QUATS: [[f64; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

const TETRAGONAL_LOW_QUATS: [[f64; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [-R2, 0.0, 0.0, R2],
    [R2, 0.0, 0.0, R2],
];

const TETRAGONAL_HIGH_QUATS: [[f64; 4]; 8] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [-R2, 0.0, 0.0, R2],
    [R2, 0.0, 0.0, R2],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, R2, R2, 0.0],
    [0.0, -R2, R2, 0.0],
];

const TRIGONAL_LOW_QUATS: [[f64; 4]; 3] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.5, 0.0, 0.0, H3],
    [-0.5, 0.0, 0.0, H3],
];

const TRIGONAL_HIGH_QUATS: [[f64; 4]; 6] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.5, 0.0, 0.0, H3],
    [-0.5, 0.0, 0.0, H3],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, -0.5, H3, 0.0],
    [0.0, -0.5, -H3, 0.0],
];

const HEXAGONAL_LOW_QUATS: [[f64; 4]; 6] = [
    [1.0, 0.0, 0.0, 0.0],
    [H3, 0.0, 0.0, 0.5],
    [0.5, 0.0, 0.0, H3],
    [0.0, 0.0, 0.0, 1.0],
    [-0.5, 0.0, 0.0, H3],
    [-H3, 0.0, 0.0, 0.5],
];

const HEXAGONAL_HIGH_QUATS: [[f64; 4]; 12] = [
    [1.0, 0.0, 0.0, 0.0],
    [H3, 0.0, 0.0, 0.5],
    [0.5, 0.0, 0.0, H3],
    [0.0, 0.0, 0.0, 1.0],
    [-0.5, 0.0, 0.0, H3],
    [-H3, 0.0, 0.0, 0.5],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, H3, 0.5, 0.0],
    [0.0, 0.5, H3, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, -0.5, H3, 0.0],
    [0.0, -H3, 0.5, 0.0],
];

const CUBIC_LOW_QUATS: [[f64; 4]; 12] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [0.5, 0.5, 0.5, 0.5],
    [0.5, -0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5, -0.5],
    [0.5, -0.5, 0.5, 0.5],
    [0.5, 0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5, -0.5],
];

const CUBIC_HIGH_QUATS: [[f64; 4]; 24] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
    [R2, R2, 0.0, 0.0],
    [R2, 0.0, R2, 0.0],
    [R2, 0.0, 0.0, R2],
    [R2, -R2, 0.0, 0.0],
    [R2, 0.0, -R2, 0.0],
    [R2, 0.0, 0.0, -R2],
    [0.0, R2, R2, 0.0],
    [0.0, -R2, R2, 0.0],
    [0.0, 0.0, R2, R2],
    [0.0, 0.0, -R2, R2],
    [0.0, R2, 0.0, R2],
    [0.0, -R2, 0.0, R2],
    [0.5, 0.5, 0.5, 0.5],
    [0.5, -0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5, -0.5],
    [0.5, -0.5, 0.5, 0.5],
    [0.5, 0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5, -0.5],
];

// ======================== POLE FIGURE FAMILIES ========================

const AXIS_FAMILIES: [PoleFamily; 3] = [
    PoleFamily { label: "<001>", directions: &[[0.0, 0.0, 1.0]] },
    PoleFamily { label: "<100>", directions: &[[1.0, 0.0, 0.0]] },
    PoleFamily { label: "<010>", directions: &[[0.0, 1.0, 0.0]] },
];

const TETRAGONAL_HIGH_FAMILIES: [PoleFamily; 3] = [
    PoleFamily { label: "<001>", directions: &[[0.0, 0.0, 1.0]] },
    PoleFamily { label: "<100>", directions: &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] },
    PoleFamily { label: "<110>", directions: &[[R2, R2, 0.0], [-R2, R2, 0.0]] },
];

const TRIGONAL_LOW_FAMILIES: [PoleFamily; 3] = [
    PoleFamily { label: "<0001>", directions: &[[0.0, 0.0, 1.0]] },
    PoleFamily { label: "<-1-120>", directions: &[[-0.5, H3, 0.0]] },
    PoleFamily { label: "<2-1-10>", directions: &[[1.0, 0.0, 0.0]] },
];

const TRIGONAL_HIGH_FAMILIES: [PoleFamily; 3] = [
    PoleFamily { label: "<0001>", directions: &[[0.0, 0.0, 1.0]] },
    PoleFamily { label: "<0-110>", directions: &[[0.0, -1.0, 0.0]] },
    PoleFamily { label: "<1-100>", directions: &[[H3, -0.5, 0.0]] },
];

const HEXAGONAL_LOW_FAMILIES: [PoleFamily; 3] = [
    PoleFamily { label: "<0001>", directions: &[[0.0, 0.0, 1.0]] },
    PoleFamily { label: "<11-20>", directions: &[[-0.5, H3, 0.0]] },
    PoleFamily { label: "<2-1-10>", directions: &[[1.0, 0.0, 0.0]] },
];

const HEXAGONAL_HIGH_FAMILIES: [PoleFamily; 3] = [
    PoleFamily { label: "<0001>", directions: &[[0.0, 0.0, 1.0]] },
    PoleFamily {
        label: "<10-10>",
        directions: &[[H3, 0.5, 0.0], [0.0, 1.0, 0.0], [-H3, 0.5, 0.0]],
    },
    PoleFamily {
        label: "<11-20>",
        directions: &[[1.0, 0.0, 0.0], [0.5, H3, 0.0], [-0.5, H3, 0.0]],
    },
];

const CUBIC_FAMILIES: [PoleFamily; 3] = [
    PoleFamily {
        label: "<001>",
        directions: &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    },
    PoleFamily {
        label: "<011>",
        directions: &[
            [R2, R2, 0.0],
            [R2, 0.0, R2],
            [0.0, R2, R2],
            [-R2, R2, 0.0],
            [-R2, 0.0, R2],
            [0.0, -R2, R2],
        ],
    },
    PoleFamily {
        label: "<111>",
        directions: &[[R3, R3, R3], [-R3, R3, R3], [R3, -R3, R3], [R3, R3, -R3]],
    },
];

// ======================== CLASS DESCRIPTORS ========================

const WIDE_AXIS_TRIANGLE: UnitTriangle = UnitTriangle::Azimuthal {
    eta_min: 0.0,
    eta_max: 180.0,
    chi_max: 90.0,
};

const QUADRANT_TRIANGLE: UnitTriangle = UnitTriangle::Azimuthal {
    eta_min: 0.0,
    eta_max: 90.0,
    chi_max: 90.0,
};

static TRICLINIC: ClassTables = ClassTables {
    name: "Triclinic -1",
    has_inversion: true,
    quaternions: &TRICLINIC_QUATS,
    fz_angles: [PI, PI, PI],
    fz_divisors: [36.0, 36.0, 36.0],
    triangle: WIDE_AXIS_TRIANGLE,
    rodrigues_scale: RodriguesScale::DoubleDivide,
    pole_families: &AXIS_FAMILIES,
};

static MONOCLINIC: ClassTables = ClassTables {
    name: "Monoclinic 2/m",
    has_inversion: true,
    quaternions: &MONOCLINIC_QUATS,
    fz_angles: [PI, FRAC_PI_2, PI],
    fz_divisors: [36.0, 18.0, 36.0],
    triangle: WIDE_AXIS_TRIANGLE,
    rodrigues_scale: RodriguesScale::DoubleDivide,
    pole_families: &AXIS_FAMILIES,
};

static ORTHORHOMBIC: ClassTables = ClassTables {
    name: "OrthoRhombic mmm",
    has_inversion: true,
    quaternions: &ORTHORHOMBIC_QUATS,
    fz_angles: [FRAC_PI_2, FRAC_PI_2, FRAC_PI_2],
    fz_divisors: [18.0, 18.0, 18.0],
    triangle: QUADRANT_TRIANGLE,
    rodrigues_scale: RodriguesScale::DoubleDivide,
    pole_families: &AXIS_FAMILIES,
};

static TETRAGONAL_LOW: ClassTables = ClassTables {
    name: "Tetragonal 4/m",
    has_inversion: true,
    quaternions: &TETRAGONAL_LOW_QUATS,
    fz_angles: [PI, PI, FRAC_PI_4],
    fz_divisors: [36.0, 36.0, 9.0],
    triangle: QUADRANT_TRIANGLE,
    rodrigues_scale: RodriguesScale::DoubleDivide,
    pole_families: &AXIS_FAMILIES,
};

static TETRAGONAL_HIGH: ClassTables = ClassTables {
    name: "Tetragonal 4/mmm",
    has_inversion: true,
    quaternions: &TETRAGONAL_HIGH_QUATS,
    fz_angles: [FRAC_PI_2, FRAC_PI_2, FRAC_PI_4],
    fz_divisors: [18.0, 18.0, 9.0],
    triangle: QUADRANT_TRIANGLE,
    rodrigues_scale: RodriguesScale::Plain,
    pole_families: &TETRAGONAL_HIGH_FAMILIES,
};

static TRIGONAL_LOW: ClassTables = ClassTables {
    name: "Trigonal -3",
    has_inversion: true,
    quaternions: &TRIGONAL_LOW_QUATS,
    fz_angles: [PI, PI, FRAC_PI_3],
    fz_divisors: [36.0, 36.0, 12.0],
    triangle: UnitTriangle::Azimuthal {
        eta_min: -120.0,
        eta_max: 0.0,
        chi_max: 90.0,
    },
    rodrigues_scale: RodriguesScale::DoubleDivide,
    pole_families: &TRIGONAL_LOW_FAMILIES,
};

static TRIGONAL_HIGH: ClassTables = ClassTables {
    name: "Trigonal -3m",
    has_inversion: true,
    quaternions: &TRIGONAL_HIGH_QUATS,
    fz_angles: [FRAC_PI_2, FRAC_PI_2, FRAC_PI_3],
    fz_divisors: [18.0, 18.0, 12.0],
    triangle: UnitTriangle::Azimuthal {
        eta_min: -90.0,
        eta_max: -30.0,
        chi_max: 90.0,
    },
    rodrigues_scale: RodriguesScale::Plain,
    pole_families: &TRIGONAL_HIGH_FAMILIES,
};

static HEXAGONAL_LOW: ClassTables = ClassTables {
    name: "Hexagonal 6/m",
    has_inversion: true,
    quaternions: &HEXAGONAL_LOW_QUATS,
    fz_angles: [PI, PI, FRAC_PI_6],
    fz_divisors: [36.0, 36.0, 6.0],
    triangle: UnitTriangle::Azimuthal {
        eta_min: 0.0,
        eta_max: 60.0,
        chi_max: 90.0,
    },
    rodrigues_scale: RodriguesScale::DoubleDivide,
    pole_families: &HEXAGONAL_LOW_FAMILIES,
};

static HEXAGONAL_HIGH: ClassTables = ClassTables {
    name: "Hexagonal 6/mmm",
    has_inversion: true,
    quaternions: &HEXAGONAL_HIGH_QUATS,
    fz_angles: [FRAC_PI_2, FRAC_PI_2, FRAC_PI_6],
    fz_divisors: [18.0, 18.0, 6.0],
    triangle: UnitTriangle::Azimuthal {
        eta_min: 0.0,
        eta_max: 30.0,
        chi_max: 90.0,
    },
    rodrigues_scale: RodriguesScale::DoubleDivide,
    pole_families: &HEXAGONAL_HIGH_FAMILIES,
};

static CUBIC_LOW: ClassTables = ClassTables {
    name: "Cubic m-3",
    has_inversion: true,
    quaternions: &CUBIC_LOW_QUATS,
    fz_angles: [FRAC_PI_2, FRAC_PI_2, FRAC_PI_2],
    fz_divisors: [18.0, 18.0, 18.0],
    triangle: UnitTriangle::Cubic { eta_max: 90.0 },
    rodrigues_scale: RodriguesScale::DoubleDivide,
    pole_families: &CUBIC_FAMILIES,
};

static CUBIC_HIGH: ClassTables = ClassTables {
    name: "Cubic m-3m",
    has_inversion: true,
    quaternions: &CUBIC_HIGH_QUATS,
    fz_angles: [FRAC_PI_4, FRAC_PI_4, FRAC_PI_4],
    fz_divisors: [9.0, 9.0, 9.0],
    triangle: UnitTriangle::Cubic { eta_max: 45.0 },
    rodrigues_scale: RodriguesScale::Plain,
    pole_families: &CUBIC_FAMILIES,
};

pub(crate) fn class_tables(class: CrystalClass) -> &'static ClassTables {
    match class {
        CrystalClass::Triclinic => &TRICLINIC,
        CrystalClass::Monoclinic => &MONOCLINIC,
        CrystalClass::OrthoRhombic => &ORTHORHOMBIC,
        CrystalClass::TetragonalLow => &TETRAGONAL_LOW,
        CrystalClass::TetragonalHigh => &TETRAGONAL_HIGH,
        CrystalClass::TrigonalLow => &TRIGONAL_LOW,
        CrystalClass::TrigonalHigh => &TRIGONAL_HIGH,
        CrystalClass::HexagonalLow => &HEXAGONAL_LOW,
        CrystalClass::HexagonalHigh => &HEXAGONAL_HIGH,
        CrystalClass::CubicLow => &CUBIC_LOW,
        CrystalClass::CubicHigh => &CUBIC_HIGH,
    }
}
