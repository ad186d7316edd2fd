#[cfg(test)]
mod _tests_ipf_color {
    use super::super::ipf_color::{generate_ipf_color, ipf_pole};
    use crate::orientation::euler_to_quaternion;
    use crate::symmetries::{CrystalClass, SymmetryGroup, UnitTriangle};
    use nalgebra::{Quaternion, Vector3};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_4, PI, TAU};

    fn degrees(a: f64, b: f64, c: f64) -> Vector3<f64> {
        Vector3::new(a.to_radians(), b.to_radians(), c.to_radians())
    }

    #[test]
    fn test_cubic_regression_orientation() {
        let group = CrystalClass::CubicHigh.group();
        let euler = degrees(207.1653, 44.2854, 146.5178);
        let first = generate_ipf_color(group, &euler, &Vector3::z());
        for _ in 0..100 {
            assert_eq!(generate_ipf_color(group, &euler, &Vector3::z()), first);
        }
        assert_eq!(first, [107, 149, 255]);
        assert_eq!(*first.iter().max().unwrap(), 255);
    }

    #[test]
    fn test_lower_hemisphere_pole_skipped_without_inversion() {
        let proper = SymmetryGroup::from_quaternions(
            CrystalClass::Triclinic,
            vec![Quaternion::identity()],
        )
        .unwrap()
        .with_inversion(false);
        assert!(!proper.has_inversion());

        let q = Quaternion::identity();
        let down = Vector3::new(0.3, 0.2, -1.0);
        // the only operator is skipped, so the pole stays at its start value
        assert_eq!(ipf_pole(&proper, &q, &down), (0.0, 0.0));

        let (eta, chi) = ipf_pole(CrystalClass::Triclinic.group(), &q, &down);
        assert!(chi > 0.0 && chi < PI / 2.0);
        assert!((eta - (-0.2f64).atan2(-0.3)).abs() < 1e-12);

        let up = Vector3::new(0.3, 0.2, 1.0);
        assert_eq!(
            ipf_pole(&proper, &q, &up),
            ipf_pole(CrystalClass::Triclinic.group(), &q, &up)
        );
    }

    #[test]
    fn test_cubic_corners() {
        let group = CrystalClass::CubicHigh.group();
        // <001> parallel to the sample z axis is red
        assert_eq!(generate_ipf_color(group, &Vector3::zeros(), &Vector3::z()), [255, 0, 0]);
        // <011> is green
        let rgb = generate_ipf_color(group, &Vector3::new(0.0, FRAC_PI_4, 0.0), &Vector3::z());
        assert_eq!(rgb[1], 255);
        assert!(rgb[0] < 2 && rgb[2] < 2);
    }

    #[test]
    fn test_every_class_colors_random_orientations() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut visited = 0;
        for class in CrystalClass::ALL {
            let group = class.group();
            for _ in 0..20 {
                let euler = Vector3::new(
                    rng.gen_range(0.0..TAU),
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..TAU),
                );
                let rgb = generate_ipf_color(group, &euler, &Vector3::new(0.3, -0.2, 0.9));
                assert_eq!(*rgb.iter().max().unwrap(), 255, "{}", class);
            }
            visited += 1;
        }
        assert_eq!(visited, 11);
    }

    #[test]
    fn test_pole_lands_in_triangle() {
        let mut rng = StdRng::seed_from_u64(22);
        // the lone triclinic operator cannot move a pole into the η >= 0 half
        for class in CrystalClass::ALL.into_iter().filter(|c| *c != CrystalClass::Triclinic) {
            let group = class.group();
            let triangle = group.unit_triangle();
            for _ in 0..50 {
                let q = euler_to_quaternion(&Vector3::new(
                    rng.gen_range(0.0..TAU),
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..TAU),
                ));
                let (eta, chi) = ipf_pole(group, &q, &Vector3::z());
                assert!(triangle.contains(eta, chi), "{}: eta {} chi {}", class, eta, chi);
            }
        }
    }

    #[test]
    fn test_triangle_bounds() {
        let cubic = UnitTriangle::Cubic { eta_max: 45.0 };
        // χmax at η = 0 is the [101] pole, at η = 45° the [111] pole
        assert!((cubic.chi_max(0.0) - FRAC_PI_4).abs() < 1e-12);
        assert!((cubic.chi_max(FRAC_PI_4) - (1.0f64 / 3.0).sqrt().acos()).abs() < 1e-12);
        assert!(cubic.contains(0.1, 0.1));
        assert!(!cubic.contains(-0.1, 0.1));
        assert!(!cubic.contains(0.1, 1.0));

        let trigonal = CrystalClass::TrigonalHigh.group().unit_triangle();
        assert_eq!(trigonal.eta_range(), (-90.0, -30.0));
        assert!(trigonal.contains((-60.0f64).to_radians(), 0.5));
        assert!(!trigonal.contains(0.0, 0.5));
    }
}
