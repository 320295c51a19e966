use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use rand::prelude::*;
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use patternforge::patterns::{circular, geometric, tessellation, three_d, wave};
use patternforge::registry::SessionRegistry;
use patternforge::server;
use patternforge::settings::Settings;
use patternforge::transform;
use patternforge::vine::{GrowthConfig, GrowthPattern, Season, VineEngine};

#[derive(Parser)]
#[command(name = "patternforge")]
#[command(author = "Pattern Forge")]
#[command(version = "0.2.0")]
#[command(about = "Procedural decorative patterns: vines, tilings, and geometric motifs as JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the pattern-generation HTTP API
    Serve {
        /// Listen address (overrides config file)
        #[arg(short, long)]
        bind: Option<String>,

        /// Listen port (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Grow a vine and print it as JSON
    Vine {
        /// Growth style: climbing, hanging, spreading, spiral
        #[arg(short = 'g', long, default_value = "climbing")]
        pattern: String,

        /// Season: spring, summer, autumn, winter (defaults to the calendar)
        #[arg(short = 'S', long)]
        season: Option<String>,

        /// Maximum growth depth
        #[arg(short, long, default_value = "10")]
        max_length: u32,

        /// Segment length multiplier
        #[arg(long, default_value = "1.0")]
        speed: f64,

        /// Branch probability (0-1)
        #[arg(short, long, default_value = "0.3")]
        branch: f64,

        /// Leaf probability (0-1)
        #[arg(short, long, default_value = "0.4")]
        leaf: f64,

        /// Flower probability (0-1)
        #[arg(short, long, default_value = "0.2")]
        flower: f64,

        /// Start position as "x,y"
        #[arg(long, default_value = "0,0")]
        start: String,

        /// Obstacles as JSON: [{"x":0,"y":0,"radius":10}]
        #[arg(short, long)]
        obstacles: Option<String>,

        /// Growth steps to run (defaults to growing to completion)
        #[arg(long)]
        steps: Option<u32>,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate a circular motif document
    Circular {
        /// Number of concentric circles
        #[arg(short, long, default_value = "8")]
        circles: usize,

        /// Points per circle
        #[arg(short = 'n', long, default_value = "12")]
        points: usize,

        /// Connection density (0-1)
        #[arg(short, long, default_value = "0.7")]
        density: f64,

        /// Rotational symmetry order
        #[arg(short = 'y', long, default_value = "1")]
        symmetry: usize,

        /// Base hue (0-1)
        #[arg(long, default_value = "0.5")]
        hue: f64,

        /// Palette: complementary, analogous, triadic, monochromatic
        #[arg(long, default_value = "complementary")]
        palette: String,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate a layered geometric document
    Geometric {
        /// Rotational symmetry order
        #[arg(short = 'y', long, default_value = "6")]
        symmetry: usize,

        /// Number of concentric layers
        #[arg(short, long, default_value = "3")]
        layers: usize,

        /// Shape density (0-1)
        #[arg(short, long, default_value = "0.7")]
        complexity: f64,

        /// Whole-pattern rotation in degrees
        #[arg(short, long, default_value = "0")]
        rotation: f64,

        /// Base hue (0-1)
        #[arg(long, default_value = "0.5")]
        hue: f64,

        /// Palette: complementary, analogous, triadic, monochromatic
        #[arg(long, default_value = "monochromatic")]
        palette: String,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate a tessellation base-unit document
    Tessellation {
        /// Tiling: triangular, square, hexagonal
        #[arg(short = 'T', long, default_value = "triangular")]
        pattern: String,

        /// Cell size
        #[arg(short, long, default_value = "50")]
        cell_size: f64,

        /// Cell rotation in degrees
        #[arg(short, long, default_value = "0")]
        rotation: f64,

        /// Row offset
        #[arg(short, long, default_value = "0")]
        offset: f64,

        /// Color scheme: monochromatic, complementary
        #[arg(short = 'C', long, default_value = "monochromatic")]
        scheme: String,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate a 3D element cloud document
    Threed {
        /// Element kind: cube, sphere
        #[arg(short = 'T', long, default_value = "cube")]
        kind: String,

        /// Number of elements
        #[arg(short, long, default_value = "5")]
        complexity: usize,

        /// Scene rotation speed
        #[arg(short, long, default_value = "0.01")]
        rotation_speed: f64,

        /// Color scheme label passed through to the client
        #[arg(short = 'C', long, default_value = "rainbow")]
        scheme: String,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Generate a 3D sine-wave vertex grid document
    Wave {
        /// Grid side length in vertices
        #[arg(short = 'z', long, default_value = "20")]
        size: usize,

        /// Wave amplitude
        #[arg(short, long, default_value = "1.0")]
        amplitude: f64,

        /// Wave frequency
        #[arg(short, long, default_value = "0.1")]
        frequency: f64,

        /// Randomize size, amplitude, and frequency
        #[arg(long)]
        shuffle: bool,

        /// Random seed for reproducibility
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.server.log_filter.as_deref().unwrap_or("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).compact().init();

    match cli.command {
        Commands::Serve { bind, port } => {
            let bind = bind
                .or(settings.server.bind)
                .unwrap_or_else(|| "0.0.0.0".to_string());
            let port = port.or(settings.server.port).unwrap_or(8000);
            let addr: SocketAddr = format!("{bind}:{port}").parse()?;
            let registry = Arc::new(SessionRegistry::new());
            server::serve(registry, addr).await?;
        }

        Commands::Vine {
            pattern,
            season,
            max_length,
            speed,
            branch,
            leaf,
            flower,
            start,
            obstacles,
            steps,
            seed,
        } => {
            let config = GrowthConfig {
                max_length,
                growth_speed: speed,
                branch_probability: branch,
                leaf_probability: leaf,
                flower_probability: flower,
                growth_pattern: GrowthPattern::from_label(&pattern),
                season: season
                    .as_deref()
                    .map(Season::from_label)
                    .unwrap_or_else(Season::current),
                start_pos: parse_start(&start),
                obstacles: obstacles
                    .as_deref()
                    .map(server::parse_obstacles)
                    .unwrap_or_default(),
                seed,
                ..GrowthConfig::default()
            };

            let mut engine = VineEngine::new(config);
            let snapshot = match steps {
                Some(count) => {
                    let mut snapshot = engine.snapshot();
                    for _ in 0..count {
                        snapshot = engine.step();
                        if snapshot.completed {
                            break;
                        }
                    }
                    snapshot
                }
                None => engine.grow_to_completion(),
            };
            print_document(&transform::vine_document(&snapshot))?;
        }

        Commands::Circular {
            circles,
            points,
            density,
            symmetry,
            hue,
            palette,
            seed,
        } => {
            let params = circular::CircularParams {
                circles,
                points,
                density,
                symmetry,
                hue,
                palette,
            };
            print_document(&circular::generate(&params, &mut seeded_rng(seed)))?;
        }

        Commands::Geometric {
            symmetry,
            layers,
            complexity,
            rotation,
            hue,
            palette,
            seed,
        } => {
            let params = geometric::GeometricParams {
                symmetry,
                layers,
                complexity,
                rotation,
                hue,
                palette,
            };
            print_document(&geometric::generate(&params, &mut seeded_rng(seed)))?;
        }

        Commands::Tessellation {
            pattern,
            cell_size,
            rotation,
            offset,
            scheme,
            seed,
        } => {
            let params = tessellation::TessellationParams {
                pattern,
                cell_size,
                rotation,
                offset,
                color_scheme: scheme,
            };
            print_document(&tessellation::generate(&params, &mut seeded_rng(seed)))?;
        }

        Commands::Threed {
            kind,
            complexity,
            rotation_speed,
            scheme,
            seed,
        } => {
            let params = three_d::ThreeDParams {
                kind,
                complexity,
                rotation_speed,
                color_scheme: scheme,
            };
            print_document(&three_d::generate(&params, &mut seeded_rng(seed)))?;
        }

        Commands::Wave {
            size,
            amplitude,
            frequency,
            shuffle,
            seed,
        } => {
            let params = wave::WaveParams {
                size,
                amplitude,
                frequency,
                shuffle,
            };
            print_document(&wave::generate(&params, &mut seeded_rng(seed)))?;
        }
    }

    Ok(())
}

/// Seeded rng, falling back to the system clock.
fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    StdRng::seed_from_u64(seed)
}

/// Parse an "x,y" pair; anything malformed lands at the origin.
fn parse_start(raw: &str) -> (f64, f64) {
    let mut parts = raw.splitn(2, ',');
    let x = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0.0);
    let y = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0.0);
    (x, y)
}

fn print_document<T: Serialize>(document: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(document)?);
    Ok(())
}
