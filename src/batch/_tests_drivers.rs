#[cfg(test)]
mod _tests_drivers {
    use super::super::drivers::{
        compute_face_misorientations, compute_odf_bins, compute_schmid_factors, generate_ipf_colors,
        generate_misorientation_colors, generate_rodrigues_colors, PhaseArrays,
    };
    use crate::coloring::{generate_ipf_color, generate_rodrigues_color};
    use crate::fundamental_zone::odf_bin_euler;
    use crate::parallel::ParallelMode;
    use crate::slip::SchmidFactor;
    use crate::symmetries::CrystalClass;
    use nalgebra::{Quaternion, Vector3};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const SENTINEL: u8 = 77;

    fn random_eulers(n: usize, seed: u64) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .flat_map(|_| {
                [
                    rng.gen_range(0.0..std::f32::consts::TAU),
                    rng.gen_range(0.0..std::f32::consts::PI),
                    rng.gen_range(0.0..std::f32::consts::TAU),
                ]
            })
            .collect()
    }

    fn euler_f64(eulers: &[f32], i: usize) -> Vector3<f64> {
        Vector3::new(
            eulers[3 * i] as f64,
            eulers[3 * i + 1] as f64,
            eulers[3 * i + 2] as f64,
        )
    }

    #[test]
    fn test_ipf_colors_match_single_element_kernel() {
        let eulers = random_eulers(50, 3);
        let phases = vec![1i32; 50];
        let structures = [999u32, CrystalClass::CubicHigh.id()];
        let arrays = PhaseArrays::new(&phases, &structures);
        let ref_dir = Vector3::new(0.0, 0.0, 1.0);

        let mut out = vec![SENTINEL; 150];
        generate_ipf_colors(&eulers, &arrays, &ref_dir, &mut out, ParallelMode::Sequential).unwrap();

        let group = CrystalClass::CubicHigh.group();
        for i in 0..50 {
            let expected = generate_ipf_color(group, &euler_f64(&eulers, i), &ref_dir);
            assert_eq!(&out[3 * i..3 * i + 3], &expected, "element {}", i);
        }
    }

    #[test]
    fn test_skipped_elements_keep_caller_fallback() {
        let eulers = random_eulers(4, 5);
        // phase 0 maps to the unknown id, phase 7 is out of range, phase -1 is invalid
        let phases = [0i32, 1, 7, -1];
        let structures = [999u32, CrystalClass::HexagonalHigh.id()];
        let arrays = PhaseArrays::new(&phases, &structures);

        let mut out = vec![SENTINEL; 12];
        generate_rodrigues_colors(&eulers, &arrays, &mut out, ParallelMode::Sequential).unwrap();

        let group = CrystalClass::HexagonalHigh.group();
        assert_eq!(&out[0..3], &[SENTINEL; 3]);
        assert_eq!(&out[3..6], &generate_rodrigues_color(group, &euler_f64(&eulers, 1)));
        assert_eq!(&out[6..9], &[SENTINEL; 3]);
        assert_eq!(&out[9..12], &[SENTINEL; 3]);
    }

    #[test]
    fn test_mask_excludes_elements() {
        let eulers = random_eulers(3, 9);
        let phases = [1i32, 1, 1];
        let structures = [999u32, CrystalClass::CubicHigh.id()];
        let mask = [true, false, true];
        let arrays = PhaseArrays::new(&phases, &structures).with_mask(&mask);

        let mut out = vec![SENTINEL; 9];
        generate_ipf_colors(
            &eulers,
            &arrays,
            &Vector3::new(1.0, 0.0, 0.0),
            &mut out,
            ParallelMode::Sequential,
        )
        .unwrap();
        assert_eq!(&out[3..6], &[SENTINEL; 3]);
        assert_ne!(&out[0..3], &[SENTINEL; 3]);
    }

    #[test]
    fn test_length_mismatches_are_rejected() {
        let eulers = random_eulers(3, 1);
        let phases = [1i32, 1, 1];
        let structures = [999u32, 1];
        let arrays = PhaseArrays::new(&phases, &structures);

        let mut short = vec![0u8; 6];
        assert!(generate_rodrigues_colors(&eulers, &arrays, &mut short, ParallelMode::Sequential).is_err());

        let mask = [true, true];
        let masked = PhaseArrays::new(&phases, &structures).with_mask(&mask);
        let mut out = vec![0u8; 9];
        assert!(generate_rodrigues_colors(&eulers, &masked, &mut out, ParallelMode::Sequential).is_err());

        assert!(generate_ipf_colors(
            &eulers,
            &arrays,
            &Vector3::zeros(),
            &mut out,
            ParallelMode::Sequential
        )
        .is_err());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let n = 500;
        let eulers = random_eulers(n, 11);
        let phases: Vec<i32> = (0..n as i32).map(|i| 1 + i % 3).collect();
        let structures = [
            999u32,
            CrystalClass::CubicHigh.id(),
            CrystalClass::HexagonalLow.id(),
            CrystalClass::OrthoRhombic.id(),
        ];
        let arrays = PhaseArrays::new(&phases, &structures);
        let ref_dir = Vector3::new(0.0, 1.0, 1.0);

        let mut seq = vec![0u8; 3 * n];
        let mut par = vec![0u8; 3 * n];
        generate_ipf_colors(&eulers, &arrays, &ref_dir, &mut seq, ParallelMode::Sequential).unwrap();
        generate_ipf_colors(&eulers, &arrays, &ref_dir, &mut par, ParallelMode::Parallel).unwrap();
        assert_eq!(seq, par);

        let mut bins_seq = vec![0usize; n];
        let mut bins_par = vec![0usize; n];
        compute_odf_bins(&eulers, &arrays, &mut bins_seq, ParallelMode::Sequential).unwrap();
        compute_odf_bins(&eulers, &arrays, &mut bins_par, ParallelMode::Parallel).unwrap();
        assert_eq!(bins_seq, bins_par);
    }

    #[test]
    fn test_odf_bins_match_single_element_kernel() {
        let eulers = random_eulers(20, 21);
        let phases = vec![1i32; 20];
        let structures = [999u32, CrystalClass::TetragonalHigh.id()];
        let arrays = PhaseArrays::new(&phases, &structures);

        let mut out = vec![0usize; 20];
        compute_odf_bins(&eulers, &arrays, &mut out, ParallelMode::Sequential).unwrap();
        let group = CrystalClass::TetragonalHigh.group();
        for i in 0..20 {
            assert_eq!(out[i], odf_bin_euler(group, &euler_f64(&eulers, i)));
        }
    }

    #[test]
    fn test_misorientation_colors_black_outside_cubic() {
        // 0.5 rad about (1, 2, 3)
        let (s, c) = (0.25f32.sin() / 14f32.sqrt(), 0.25f32.cos());
        let quats = [s, 2.0 * s, 3.0 * s, c, s, 2.0 * s, 3.0 * s, c];
        let phases = [1i32, 2];
        let structures = [999u32, CrystalClass::CubicHigh.id(), CrystalClass::TrigonalHigh.id()];
        let arrays = PhaseArrays::new(&phases, &structures);
        let reference = Quaternion::new(1.0, 0.0, 0.0, 0.0);

        let mut out = vec![SENTINEL; 6];
        generate_misorientation_colors(&quats, &arrays, &reference, &mut out, ParallelMode::Sequential)
            .unwrap();
        assert_ne!(&out[0..3], &[0, 0, 0]);
        assert_eq!(&out[3..6], &[0, 0, 0]);
    }

    #[test]
    fn test_face_misorientation_about_z() {
        let half = (15.0f64).to_radians();
        // feature 0 is the exterior, features 1 and 2 are cubic, feature 3 is hexagonal
        let avg_quats = [
            0.0f32, 0.0, 0.0, 1.0,
            0.0, 0.0, 0.0, 1.0,
            0.0, 0.0, half.sin() as f32, half.cos() as f32,
            0.0, 0.0, 0.0, 1.0,
        ];
        let feature_phases = [0i32, 1, 1, 2];
        let structures = [999u32, CrystalClass::CubicHigh.id(), CrystalClass::HexagonalHigh.id()];
        let face_labels = [1i32, 2, 0, 1, 2, 3, -1, 2];

        let mut out = vec![-5.0f32; 16];
        compute_face_misorientations(
            &face_labels,
            &feature_phases,
            &avg_quats,
            &structures,
            &mut out,
            ParallelMode::Sequential,
        )
        .unwrap();

        assert!((out[3] - 30.0f32.to_radians()).abs() < 1e-5);
        assert!((out[2].abs() - 1.0).abs() < 1e-5);
        assert!(out[0].abs() < 1e-5 && out[1].abs() < 1e-5);
        assert!(out[4..].iter().all(|v| *v == -5.0));
    }

    #[test]
    fn test_face_misorientation_rejects_bad_lengths() {
        let mode = ParallelMode::Sequential;
        let mut out = vec![0.0f32; 4];
        // odd label count
        assert!(compute_face_misorientations(&[1, 2, 3], &[0, 1], &[0.0; 8], &[1], &mut out, mode).is_err());
        // one quaternion for two features
        assert!(compute_face_misorientations(&[1, 1], &[0, 1], &[0.0; 4], &[1], &mut out, mode).is_err());
    }

    #[test]
    fn test_schmid_factors_per_class() {
        let s = std::f32::consts::FRAC_1_SQRT_2;
        // cubic, hexagonal, triclinic, unknown, then cubic turned 90 degrees about x
        let quats = [
            0.0f32, 0.0, 0.0, 1.0,
            0.0, 0.0, 0.0, 1.0,
            0.0, 0.0, 0.0, 1.0,
            0.0, 0.0, 0.0, 1.0,
            s, 0.0, 0.0, s,
        ];
        let phases = [1i32, 2, 3, 0, 1];
        let structures = [
            999u32,
            CrystalClass::CubicHigh.id(),
            CrystalClass::HexagonalHigh.id(),
            CrystalClass::Triclinic.id(),
        ];
        let arrays = PhaseArrays::new(&phases, &structures);
        let fallback = SchmidFactor { factor: -1.0, ..SchmidFactor::default() };

        let mut out = vec![fallback; 5];
        compute_schmid_factors(&quats, &arrays, &Vector3::new(0.0, 0.0, 5.0), &mut out, ParallelMode::Sequential)
            .unwrap();

        assert!((out[0].factor - 1.0 / 6f64.sqrt()).abs() < 1e-6);
        assert_eq!(out[0].slip_system, Some(0));
        assert_eq!(out[1].slip_system, None);
        assert!(out[1].factor.abs() < 1e-6);
        assert_eq!(out[2], SchmidFactor::default());
        assert_eq!(out[3], fallback);
        assert!((out[4].factor - 1.0 / 6f64.sqrt()).abs() < 1e-6);

        let mut zero_load = vec![fallback; 5];
        assert!(compute_schmid_factors(&quats, &arrays, &Vector3::zeros(), &mut zero_load, ParallelMode::Sequential).is_err());
    }
}
