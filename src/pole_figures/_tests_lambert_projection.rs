#[cfg(test)]
mod _tests_lambert_projection {
    use super::super::lambert_projection::{stereographic_to_sphere, ModifiedLambertProjection};
    use crate::interfaces::Hemisphere;
    use crate::parallel::ParallelMode;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    const TOL: f64 = 1e-9;

    fn random_unit(rng: &mut StdRng) -> Vector3<f64> {
        let z: f64 = rng.gen_range(-1.0..1.0);
        let phi: f64 = rng.gen_range(0.0..2.0 * PI);
        let r = (1.0 - z * z).sqrt();
        Vector3::new(r * phi.cos(), r * phi.sin(), z)
    }

    #[test]
    fn test_square_geometry() {
        let lambert = ModifiedLambertProjection::new(64, 1.0);
        assert_relative_eq!(lambert.max_coord(), (2.0 * PI).sqrt() / 2.0, epsilon = TOL);
        assert_relative_eq!(lambert.step_size(), (2.0 * PI).sqrt() / 64.0, epsilon = TOL);
        assert_eq!(lambert.square(Hemisphere::North).len(), 64 * 64);
    }

    #[test]
    fn test_poles_map_to_the_center() {
        let lambert = ModifiedLambertProjection::new(64, 1.0);
        assert_eq!(lambert.square_coord(&Vector3::z()), (Hemisphere::North, [0.0, 0.0]));
        assert_eq!(lambert.square_coord(&-Vector3::z()), (Hemisphere::South, [0.0, 0.0]));
    }

    #[test]
    fn test_equator_maps_to_the_edge() {
        let lambert = ModifiedLambertProjection::new(64, 1.0);
        let (hemisphere, coord) = lambert.square_coord(&Vector3::x());
        assert_eq!(hemisphere, Hemisphere::North);
        assert!(coord[0] < lambert.max_coord());
        assert!(coord[0] >= lambert.max_coord() - 1e-4 - TOL);
        assert_relative_eq!(coord[1], 0.0, epsilon = TOL);

        let (_, coord) = lambert.square_coord(&-Vector3::y());
        assert_relative_eq!(coord[1], -lambert.max_coord(), epsilon = TOL);
    }

    #[test]
    fn test_coordinates_stay_inside_the_square() {
        let lambert = ModifiedLambertProjection::new(32, 1.0);
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..1000 {
            let (_, coord) = lambert.square_coord(&random_unit(&mut rng));
            for c in coord {
                assert!(c >= -lambert.max_coord() - TOL && c < lambert.max_coord());
            }
            assert!(lambert.square_index(&coord) < 32 * 32);
        }
    }

    #[test]
    fn test_splat_preserves_weight() {
        let mut rng = StdRng::seed_from_u64(32);
        let points: Vec<_> = (0..500).map(|_| random_unit(&mut rng)).collect();
        let lambert = ModifiedLambertProjection::from_points(16, 1.0, &points);
        let north: f64 = lambert.square(Hemisphere::North).iter().sum();
        let south: f64 = lambert.square(Hemisphere::South).iter().sum();
        assert_relative_eq!(north + south, 500.0, epsilon = 1e-9);
        let expected_north = points.iter().filter(|p| p.z >= 0.0).count() as f64;
        assert_relative_eq!(north, expected_north, epsilon = 1e-9);
    }

    #[test]
    fn test_merge_matches_single_pass() {
        let mut rng = StdRng::seed_from_u64(33);
        let points: Vec<_> = (0..200).map(|_| random_unit(&mut rng)).collect();
        let whole = ModifiedLambertProjection::from_points(16, 1.0, &points);
        let merged = ModifiedLambertProjection::from_points(16, 1.0, &points[..77])
            .merge(ModifiedLambertProjection::from_points(16, 1.0, &points[77..]));
        for h in [Hemisphere::North, Hemisphere::South] {
            for (a, b) in whole.square(h).iter().zip(merged.square(h).iter()) {
                assert_relative_eq!(a, b, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_mrd_of_uniform_density_is_one() {
        let mut lambert = ModifiedLambertProjection::new(8, 1.0);
        for h in [Hemisphere::North, Hemisphere::South] {
            for i in 0..8 {
                for j in 0..8 {
                    let step = lambert.step_size();
                    let coord = [
                        (i as f64 + 0.5) * step - lambert.max_coord(),
                        (j as f64 + 0.5) * step - lambert.max_coord(),
                    ];
                    lambert.add_interpolated_value(h, &coord, 3.0);
                }
            }
        }
        lambert.normalize_to_mrd();
        for v in lambert.square(Hemisphere::North) {
            assert_relative_eq!(*v, 1.0, epsilon = 1e-9);
        }
        // a bin center reads back its own value
        assert_relative_eq!(
            lambert.interpolated_value(Hemisphere::South, &[0.5 * lambert.step_size(), 0.5 * lambert.step_size()]),
            1.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_empty_projection_normalizes_to_zero() {
        let mut lambert = ModifiedLambertProjection::new(8, 1.0);
        lambert.normalize_to_mrd();
        assert!(lambert.square(Hemisphere::North).iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_stereographic_pixels() {
        // the pixel next to the image center is close to the north pole
        let center = stereographic_to_sphere(50, 50, 100).unwrap();
        assert!(center.z > 0.999);
        assert_relative_eq!(center.norm(), 1.0, epsilon = 1e-12);
        assert!(stereographic_to_sphere(0, 0, 100).is_none());

        let mut lambert = ModifiedLambertProjection::new(8, 1.0);
        lambert.add_point(&Vector3::z());
        lambert.normalize_to_mrd();
        for mode in [ParallelMode::Sequential, ParallelMode::Parallel] {
            let image = lambert.stereographic_projection(20, mode);
            assert_eq!(image.len(), 400);
            assert_eq!(image[0], 0.0);
            assert!(image[10 * 20 + 10] > 0.0);
        }
    }
}
