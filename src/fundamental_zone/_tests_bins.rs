#[cfg(test)]
mod _tests_bins {
    use super::super::bins::{
        bin_index, bin_to_indices, determine_euler_angles, determine_random_euler_angles,
        determine_rodrigues_vector, mdf_bin, odf_bin, odf_bin_euler, randomize_euler_angles,
        sample_homochoric, Sampler,
    };
    use crate::misorientation::misorientation_from_eulers;
    use crate::orientation::euler_to_quaternion;
    use crate::symmetries::CrystalClass;
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{PI, TAU};

    #[test]
    fn test_bin_index_clamps_to_range() {
        let fz = *CrystalClass::CubicHigh.group().fz_geometry();
        let total = fz.total_bins();

        assert_eq!(bin_index(&Vector3::new(-10.0, -10.0, -10.0), &fz), 0);
        assert_eq!(bin_index(&Vector3::new(10.0, 10.0, 10.0), &fz), total - 1);
        assert!(bin_index(&Vector3::new(f64::NAN, 0.0, 0.0), &fz) < total);

        let just_above_origin = Vector3::repeat(0.5 * fz.bin_step[0]);
        assert_eq!(bin_to_indices(bin_index(&just_above_origin, &fz), &fz), [9, 9, 9]);
    }

    #[test]
    fn test_flattening_is_axis_zero_fastest() {
        let fz = *CrystalClass::Monoclinic.group().fz_geometry();
        let [b0, b1, b2] = fz.bin_count;
        for bin in [0, 1, b0, b0 * b1, b0 * b1 * b2 - 1, 12345] {
            let [i0, i1, i2] = bin_to_indices(bin, &fz);
            assert!(i0 < b0 && i1 < b1 && i2 < b2);
            assert_eq!(i2 * b0 * b1 + i1 * b0 + i0, bin);
        }
    }

    #[test]
    fn test_sample_lands_in_its_bin() {
        let mut rng = StdRng::seed_from_u64(9);
        for class in CrystalClass::ALL {
            let fz = *class.group().fz_geometry();
            let sampler = Sampler::new(&fz);
            for _ in 0..50 {
                let bin = rng.gen_range(0..fz.total_bins());
                let h = sampler.sample(bin, &mut rng);
                assert_eq!(bin_index(&h, &fz), bin, "{}", class);
                for k in 0..3 {
                    assert!(h[k].abs() <= fz.extent[k] + 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_sampling_is_reproducible_with_seed() {
        let fz = *CrystalClass::TrigonalHigh.group().fz_geometry();
        let a = sample_homochoric(77, &fz, &mut StdRng::seed_from_u64(123));
        let b = sample_homochoric(77, &fz, &mut StdRng::seed_from_u64(123));
        assert_eq!(a, b);
    }

    #[test]
    fn test_odf_bin_is_symmetry_invariant() {
        let mut rng = StdRng::seed_from_u64(10);
        for class in CrystalClass::ALL {
            let group = class.group();
            for _ in 0..20 {
                let euler = Vector3::new(
                    rng.gen_range(0.0..TAU),
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..TAU),
                );
                let q = euler_to_quaternion(&euler);
                let bin = odf_bin(group, &q);
                assert!(bin < group.fz_geometry().total_bins());
                assert_eq!(odf_bin_euler(group, &euler), bin);
                for s in group.quaternions() {
                    assert_eq!(odf_bin(group, &(s * q)), bin, "{}", class);
                }
            }
        }
    }

    #[test]
    fn test_mdf_bin_in_range() {
        let group = CrystalClass::CubicHigh.group();
        let total = group.fz_geometry().total_bins();
        assert!(mdf_bin(group, 0.0, &Vector3::z()) < total);
        assert!(mdf_bin(group, 1.0, &Vector3::new(1.0, 1.0, 1.0)) < total);
    }

    #[test]
    fn test_determined_angles_are_valid_orientations() {
        let mut rng = StdRng::seed_from_u64(11);
        for class in CrystalClass::ALL {
            let group = class.group();
            for _ in 0..10 {
                let e = determine_random_euler_angles(group, &mut rng);
                assert!(e.iter().all(|c| c.is_finite()), "{}", class);
                assert!(e[1] >= -1e-12 && e[1] <= PI + 1e-12);
            }
            let e = determine_euler_angles(group, 0, &mut rng);
            assert!(e.iter().all(|c| c.is_finite()));
            let rod = determine_rodrigues_vector(group, 0, &mut rng);
            assert!(!rod.axis.iter().any(|c| c.is_nan()));
        }
    }

    #[test]
    fn test_randomized_angles_are_equivalent() {
        let mut rng = StdRng::seed_from_u64(12);
        let group = CrystalClass::HexagonalHigh.group();
        let euler = Vector3::new(0.4, 0.9, 1.3);
        for _ in 0..10 {
            let moved = randomize_euler_angles(group, &euler, &mut rng);
            assert!(misorientation_from_eulers(group, &moved, &euler).angle < 1e-6);
        }
    }
}
