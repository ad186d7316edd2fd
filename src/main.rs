use clap::{Parser, Subcommand};
use env_logger::Env;
use laue_orientation::coloring::{generate_ipf_color, generate_misorientation_color, generate_rodrigues_color};
use laue_orientation::fundamental_zone::{determine_random_euler_angles, odf_bin_euler, odf_fz_rodrigues};
use laue_orientation::misorientation::misorientation;
use laue_orientation::orientation::{euler_to_quaternion, quaternion_to_euler, rodrigues_to_quaternion};
use laue_orientation::parallel::ParallelMode;
use laue_orientation::pole_figures::{generate_pole_figures, PoleFigureConfig};
use laue_orientation::slip::{f1, f1spt, f7, m_prime, sample_to_crystal, schmid_factor};
use laue_orientation::symmetries::CrystalClass;
use laue_orientation::Result;
use log::{info, warn};
use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(name = "laue-orientation")]
#[command(about = "Crystal symmetry kernels for EBSD orientation data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads to use (default: all available cores)
    #[arg(short, long)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the supported crystal classes
    Classes,
    /// IPF color of one orientation
    Ipf {
        /// Crystal class key or structure id
        #[arg(short, long)]
        class: CrystalClass,

        /// Bunge Euler angles (φ1 Φ φ2)
        #[arg(short, long, num_args = 3, allow_negative_numbers = true)]
        euler: Vec<f64>,

        /// Euler angles are given in degrees
        #[arg(short, long)]
        degrees: bool,

        /// Sample reference direction
        #[arg(short, long, num_args = 3, allow_negative_numbers = true, default_values_t = [0.0, 0.0, 1.0])]
        ref_dir: Vec<f64>,
    },
    /// Disorientation between two orientations
    Misorientation {
        /// Crystal class key or structure id
        #[arg(short, long)]
        class: CrystalClass,

        /// First orientation, Bunge Euler angles
        #[arg(long, num_args = 3, allow_negative_numbers = true)]
        euler1: Vec<f64>,

        /// Second orientation, Bunge Euler angles
        #[arg(long, num_args = 3, allow_negative_numbers = true)]
        euler2: Vec<f64>,

        /// Euler angles are given in degrees
        #[arg(short, long)]
        degrees: bool,
    },
    /// Reduce one orientation into the fundamental zone
    Reduce {
        /// Crystal class key or structure id
        #[arg(short, long)]
        class: CrystalClass,

        /// Bunge Euler angles (φ1 Φ φ2)
        #[arg(short, long, num_args = 3, allow_negative_numbers = true)]
        euler: Vec<f64>,

        /// Euler angles are given in degrees
        #[arg(short, long)]
        degrees: bool,
    },
    /// Schmid factor of one orientation, plus slip transmission metrics against a neighbor
    Schmid {
        /// Crystal class key or structure id
        #[arg(short, long)]
        class: CrystalClass,

        /// Bunge Euler angles (φ1 Φ φ2)
        #[arg(short, long, num_args = 3, allow_negative_numbers = true)]
        euler: Vec<f64>,

        /// Bunge Euler angles of the neighboring grain
        #[arg(short, long, num_args = 3, allow_negative_numbers = true)]
        neighbor: Option<Vec<f64>>,

        /// Euler angles are given in degrees
        #[arg(short, long)]
        degrees: bool,

        /// Sample loading direction
        #[arg(short, long, num_args = 3, allow_negative_numbers = true, default_values_t = [0.0, 0.0, 1.0])]
        load: Vec<f64>,
    },
    /// Render the pole figures of a random orientation set
    PoleFigure {
        /// Crystal class key or structure id
        #[arg(short, long)]
        class: CrystalClass,

        /// Number of random orientations
        #[arg(long, default_value = "1000")]
        random: usize,

        /// RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Output image side length in pixels
        #[arg(long, default_value = "226")]
        image_dim: usize,

        /// Lambert square side length in bins
        #[arg(long, default_value = "64")]
        lambert_dim: usize,

        /// Palette size
        #[arg(long, default_value = "32")]
        colors: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads {
        #[cfg(feature = "parallel")]
        {
            rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global()
                .map_err(|e| format!("Failed to set thread pool size: {}", e))?;
            info!("Using {} threads", threads);
        }
        #[cfg(not(feature = "parallel"))]
        {
            warn!("Thread count {} specified but parallel feature not enabled. Ignoring.", threads);
        }
    }

    info!("Starting laue-orientation v{}", laue_orientation::VERSION);

    match cli.command {
        Commands::Classes => list_classes(),
        Commands::Ipf {
            class,
            euler,
            degrees,
            ref_dir,
        } => ipf(class, to_euler(&euler, degrees)?, to_vector(&ref_dir)?),
        Commands::Misorientation {
            class,
            euler1,
            euler2,
            degrees,
        } => disorientation(class, to_euler(&euler1, degrees)?, to_euler(&euler2, degrees)?),
        Commands::Reduce {
            class,
            euler,
            degrees,
        } => reduce(class, to_euler(&euler, degrees)?),
        Commands::Schmid {
            class,
            euler,
            neighbor,
            degrees,
            load,
        } => {
            let neighbor = neighbor.map(|e| to_euler(&e, degrees)).transpose()?;
            schmid(class, to_euler(&euler, degrees)?, neighbor, to_vector(&load)?)
        }
        Commands::PoleFigure {
            class,
            random,
            seed,
            image_dim,
            lambert_dim,
            colors,
        } => {
            let config = PoleFigureConfig {
                image_dim,
                lambert_dim,
                num_colors: colors,
                ..PoleFigureConfig::default()
            };
            pole_figures(class, random, seed, &config)
        }
    }
}

fn to_vector(values: &[f64]) -> Result<Vector3<f64>> {
    match values {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(format!("Expected 3 components, got {}", values.len()).into()),
    }
}

fn to_euler(values: &[f64], degrees: bool) -> Result<Vector3<f64>> {
    let euler = to_vector(values)?;
    Ok(if degrees { euler.map(f64::to_radians) } else { euler })
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn list_classes() -> Result<()> {
    let classes: Vec<_> = CrystalClass::ALL
        .iter()
        .map(|class| {
            let group = class.group();
            json!({
                "id": class.id(),
                "key": class.key(),
                "name": group.name(),
                "num_sym_ops": group.num_sym_ops(),
                "has_inversion": group.has_inversion(),
                "fz_geometry": group.fz_geometry(),
            })
        })
        .collect();
    print_json(&json!(classes))
}

fn ipf(class: CrystalClass, euler: Vector3<f64>, ref_dir: Vector3<f64>) -> Result<()> {
    if ref_dir.norm() == 0.0 {
        return Err("Reference direction must be non-zero".into());
    }
    let rgb = generate_ipf_color(class.group(), &euler, &ref_dir);
    print_json(&json!({
        "class": class,
        "euler": euler,
        "ref_dir": ref_dir,
        "rgb": rgb,
    }))
}

fn disorientation(class: CrystalClass, euler1: Vector3<f64>, euler2: Vector3<f64>) -> Result<()> {
    let group = class.group();
    let (q1, q2) = (euler_to_quaternion(&euler1), euler_to_quaternion(&euler2));
    let m = misorientation(group, &q1, &q2);
    if class != CrystalClass::CubicHigh {
        warn!("Schuh coloring is only defined for cubic-high, reporting black");
    }
    print_json(&json!({
        "class": class,
        "angle": m.angle,
        "angle_degrees": m.angle_degrees(),
        "axis": m.axis,
        "schuh_rgb": generate_misorientation_color(group, &q1, &q2),
    }))
}

fn reduce(class: CrystalClass, euler: Vector3<f64>) -> Result<()> {
    let group = class.group();
    let rod = odf_fz_rodrigues(group, &euler_to_quaternion(&euler));
    let reduced = quaternion_to_euler(&rodrigues_to_quaternion(&rod));
    print_json(&json!({
        "class": class,
        "rodrigues": rod,
        "angle_degrees": rod.angle().to_degrees(),
        "fz_euler": reduced,
        "odf_bin": odf_bin_euler(group, &euler),
        "rodrigues_rgb": generate_rodrigues_color(group, &euler),
    }))
}

fn schmid(
    class: CrystalClass,
    euler: Vector3<f64>,
    neighbor: Option<Vector3<f64>>,
    load: Vector3<f64>,
) -> Result<()> {
    let load = load
        .try_normalize(0.0)
        .ok_or("Loading direction must be non-zero")?;
    let q1 = euler_to_quaternion(&euler);
    let crystal_load = sample_to_crystal(&q1, &load);
    let sf = schmid_factor(class, &crystal_load);
    if sf.slip_system.is_none() {
        warn!("No loaded default slip system for {}", class);
    }

    let transmission = match neighbor {
        Some(neighbor) => {
            let q2 = euler_to_quaternion(&neighbor);
            Some(json!({
                "m_prime": m_prime(class, &q1, &q2, &load)?,
                "f1": f1(class, &q1, &q2, &load, true)?,
                "f1spt": f1spt(class, &q1, &q2, &load, true)?,
                "f7": f7(class, &q1, &q2, &load, true)?,
            }))
        }
        None => None,
    };

    print_json(&json!({
        "class": class,
        "crystal_load": crystal_load,
        "schmid": sf,
        "transmission": transmission,
    }))
}

fn pole_figures(
    class: CrystalClass,
    count: usize,
    seed: u64,
    config: &PoleFigureConfig,
) -> Result<()> {
    let group = class.group();
    let mut rng = StdRng::seed_from_u64(seed);
    let eulers: Vec<_> = (0..count)
        .map(|_| determine_random_euler_angles(group, &mut rng))
        .collect();
    info!("Rendering {} pole figures from {} random orientations", class, count);

    let figures = generate_pole_figures(group, &eulers, config, ParallelMode::Parallel)?;

    let summary: Vec<_> = figures
        .iter()
        .map(|figure| {
            let inside = figure
                .rgba
                .chunks_exact(4)
                .filter(|px| px[..3] != [255, 255, 255])
                .count();
            json!({ "label": figure.label, "dim": figure.dim, "painted_pixels": inside })
        })
        .collect();

    print_json(&json!({ "class": class, "config": config, "figures": summary }))
}
