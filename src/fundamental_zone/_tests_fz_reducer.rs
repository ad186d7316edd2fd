#[cfg(test)]
mod _tests_fz_reducer {
    use super::super::fz_reducer::{
        fz_rodrigues, mdf_fz_rodrigues, nearest_quaternion, odf_fz_rodrigues,
        quaternion_nearest_origin,
    };
    use crate::misorientation::misorientation;
    use crate::orientation::{
        euler_to_quaternion, quaternion_to_rodrigues, rodrigues_to_quaternion, Rodrigues,
    };
    use crate::symmetries::CrystalClass;
    use nalgebra::{Quaternion, Vector3};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{PI, TAU};

    const TOL: f64 = 1e-9;

    fn random_quaternion(rng: &mut StdRng) -> Quaternion<f64> {
        euler_to_quaternion(&Vector3::new(
            rng.gen_range(0.0..TAU),
            rng.gen_range(0.0..PI),
            rng.gen_range(0.0..TAU),
        ))
    }

    #[test]
    fn test_reduction_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(1);
        for class in CrystalClass::ALL {
            let group = class.group();
            for _ in 0..50 {
                let once = odf_fz_rodrigues(group, &random_quaternion(&mut rng));
                let twice = fz_rodrigues(group, &once);
                assert!((once.magnitude - twice.magnitude).abs() < 1e-9, "{}", class);
                assert!((once.vector() - twice.vector()).norm() < 1e-6, "{}", class);
            }
        }
    }

    #[test]
    fn test_reduction_is_orientation_preserving() {
        // the reduced vector is a symmetric equivalent of the input
        let mut rng = StdRng::seed_from_u64(2);
        for class in CrystalClass::ALL {
            let group = class.group();
            for _ in 0..20 {
                let q = random_quaternion(&mut rng);
                let reduced = rodrigues_to_quaternion(&odf_fz_rodrigues(group, &q));
                let m = misorientation(group, &reduced, &q);
                assert!(m.angle < 1e-6, "{}: {}", class, m.angle);
            }
        }
    }

    #[test]
    fn test_reduction_never_grows_magnitude() {
        let mut rng = StdRng::seed_from_u64(3);
        let group = CrystalClass::CubicHigh.group();
        for _ in 0..100 {
            let rod = quaternion_to_rodrigues(&random_quaternion(&mut rng));
            let reduced = fz_rodrigues(group, &rod);
            assert!(reduced.magnitude <= rod.magnitude + TOL);
            // m-3m zone is bounded by the {100} planes at tan(π/8)
            assert!(reduced.vector().amax() <= (PI / 8.0).tan() + 1e-9);
        }
    }

    #[test]
    fn test_half_turn_input_is_representable() {
        let group = CrystalClass::Triclinic.group();
        let rod = Rodrigues::new(Vector3::x(), f64::INFINITY);
        let reduced = fz_rodrigues(group, &rod);
        assert!(!reduced.axis.iter().any(|c| c.is_nan()));
        assert!((reduced.axis - Vector3::x()).norm() < TOL);

        // a cubic half turn about x is an operator, so it reduces to the identity
        let cubic = fz_rodrigues(CrystalClass::CubicHigh.group(), &rod);
        assert!(cubic.magnitude < 1e-6);
    }

    #[test]
    fn test_mdf_matches_misorientation() {
        let group = CrystalClass::HexagonalHigh.group();
        let rod = mdf_fz_rodrigues(group, 0.4, &Vector3::new(0.0, 0.0, 2.0));
        assert!((rod.angle() - 0.4).abs() < TOL);
        assert_eq!(mdf_fz_rodrigues(group, 0.0, &Vector3::z()), Rodrigues::identity());
    }

    #[test]
    fn test_nearest_quaternion() {
        let mut rng = StdRng::seed_from_u64(4);
        let group = CrystalClass::CubicHigh.group();
        for _ in 0..20 {
            let q1 = random_quaternion(&mut rng);
            let q2 = random_quaternion(&mut rng);
            let nearest = nearest_quaternion(group, &q1, &q2);
            assert!(nearest.w >= 0.0);
            let d = nearest.coords.dot(&q1.coords);
            for s in group.quaternions() {
                let mut qc = s * q2;
                if qc.w < 0.0 {
                    qc = -qc;
                }
                assert!(qc.coords.dot(&q1.coords) <= d + TOL);
            }
        }
        // the reference itself is its own nearest equivalent
        let q = random_quaternion(&mut rng);
        assert!((nearest_quaternion(group, &q, &q).coords - q.coords).norm() < TOL);
    }

    #[test]
    fn test_quaternion_nearest_origin() {
        let mut rng = StdRng::seed_from_u64(5);
        for class in CrystalClass::ALL {
            let group = class.group();
            let q1 = random_quaternion(&mut rng);
            let q2 = random_quaternion(&mut rng);
            let qr = q1 * q2.conjugate();
            let nearest = quaternion_nearest_origin(group, &qr);
            assert!(nearest.w >= 0.0);
            let expected = misorientation(group, &q1, &q2).angle;
            assert!((2.0 * nearest.w.min(1.0).acos() - expected).abs() < 1e-9, "{}", class);
        }
    }
}
