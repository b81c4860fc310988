// parkscan-cli/src/main.rs
//
// Command-line interface for the Parkscan occupancy-analysis system.
//
// Responsibilities include:
// - Defining CLI argument structures (`Cli`, `Commands`, `AnalyzeArgs`, `DetectArgs`).
// - Decoding the input image and loading or auto-detecting slot rectangles.
// - Configuring parkscan-core from CLI flags and defaults.
// - Invoking the core analysis (`parkscan_core::analyze`) or detection.
// - Rendering the per-slot report, optional JSON output, and optional
//   annotated image.
// - Managing process exit codes based on success or failure.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use parkscan_core::{
    analyze, detect_slots, CoreConfig, CoreConfigBuilder, Slot, SlotAnnotation, Strategy,
};

mod output;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Parkscan: parking-slot occupancy analysis",
    long_about = "Classifies rectangular regions of a parking-lot image as free, occupied, \
                  or unclear using the parkscan-core heuristics."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classifies configured slots of an image
    Analyze(AnalyzeArgs),
    /// Proposes candidate slot rectangles from lot markings
    Detect(DetectArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    /// Ternary weighted-score heuristic
    Weighted,
    /// Binary foreground-pixel count
    PixelCount,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Weighted => Strategy::Weighted,
            StrategyArg::PixelCount => Strategy::PixelCount,
        }
    }
}

#[derive(Parser, Debug)]
struct AnalyzeArgs {
    /// Input image (PNG or JPEG)
    #[arg(required = true, value_name = "IMAGE")]
    image: PathBuf,

    /// JSON slot list: an array of {x, y, width, height} objects
    #[arg(short, long, value_name = "FILE", conflicts_with = "auto_detect")]
    slots: Option<PathBuf>,

    /// Propose slots with the auto-detector instead of a slot file
    #[arg(long)]
    auto_detect: bool,

    /// Classification strategy
    #[arg(long, value_enum, default_value = "weighted")]
    strategy: StrategyArg,

    // --- Heuristic Threshold Overrides ---
    /// Maximum std deviation for an empty slot (5-60, default 20)
    #[arg(long, value_name = "STD")]
    empty_std_max: Option<f64>,
    /// Minimum std deviation counting toward occupancy (15-100, default 35)
    #[arg(long, value_name = "STD")]
    occ_std_min: Option<f64>,
    /// Minimum mean brightness for an empty slot (150-255, default 200)
    #[arg(long, value_name = "LEVEL")]
    empty_brightness_min: Option<f64>,
    /// Maximum mean brightness for an occupied slot (80-200, default 140)
    #[arg(long, value_name = "LEVEL")]
    occ_brightness_max: Option<f64>,
    /// Free decision threshold ((0, 1], default 0.65)
    #[arg(long, value_name = "SCORE")]
    free_threshold: Option<f64>,
    /// Occupied decision threshold ((0, 1], default 0.60)
    #[arg(long, value_name = "SCORE")]
    occ_threshold: Option<f64>,
    /// Foreground-pixel count for the pixel-count strategy (default 900)
    #[arg(long, value_name = "COUNT")]
    count_threshold: Option<u32>,

    /// Write an annotated copy of the image to this path
    #[arg(long, value_name = "PATH")]
    annotate: Option<PathBuf>,

    /// Emit the full report as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct DetectArgs {
    /// Input image (PNG or JPEG)
    #[arg(required = true, value_name = "IMAGE")]
    image: PathBuf,

    /// Minimum accepted candidate width in pixels (default 50)
    #[arg(long, value_name = "PX")]
    min_width: Option<u32>,
    /// Maximum accepted candidate width in pixels (default 180)
    #[arg(long, value_name = "PX")]
    max_width: Option<u32>,
    /// Minimum accepted candidate height in pixels (default 80)
    #[arg(long, value_name = "PX")]
    min_height: Option<u32>,
    /// Maximum accepted candidate height in pixels (default 250)
    #[arg(long, value_name = "PX")]
    max_height: Option<u32>,

    /// Write a copy of the image with candidate rectangles to this path
    #[arg(long, value_name = "PATH")]
    annotate: Option<PathBuf>,

    /// Emit the candidate list as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn build_analyze_config(args: &AnalyzeArgs) -> Result<CoreConfig, Box<dyn std::error::Error>> {
    let mut builder = CoreConfigBuilder::new();
    if let Some(value) = args.empty_std_max {
        builder = builder.empty_std_max(value);
    }
    if let Some(value) = args.occ_std_min {
        builder = builder.occ_std_min(value);
    }
    if let Some(value) = args.empty_brightness_min {
        builder = builder.empty_brightness_min(value);
    }
    if let Some(value) = args.occ_brightness_max {
        builder = builder.occ_brightness_max(value);
    }
    if let Some(value) = args.free_threshold {
        builder = builder.free_threshold(value);
    }
    if let Some(value) = args.occ_threshold {
        builder = builder.occ_threshold(value);
    }
    if let Some(value) = args.count_threshold {
        builder = builder.count_threshold(value);
    }
    Ok(builder.build()?)
}

fn build_detect_config(args: &DetectArgs) -> Result<CoreConfig, Box<dyn std::error::Error>> {
    let mut detection = CoreConfig::default().detection;
    if let Some(value) = args.min_width {
        detection.min_slot_width = value;
    }
    if let Some(value) = args.max_width {
        detection.max_slot_width = value;
    }
    if let Some(value) = args.min_height {
        detection.min_slot_height = value;
    }
    if let Some(value) = args.max_height {
        detection.max_slot_height = value;
    }
    Ok(CoreConfigBuilder::new().detection(detection).build()?)
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let image = image::open(&args.image)
        .map_err(|e| format!("Failed to open image '{}': {}", args.image.display(), e))?;
    let config = build_analyze_config(&args)?;

    let slots: Vec<Slot> = if args.auto_detect {
        let candidates = detect_slots(&image, &config.detection);
        log::info!("auto-detected {} candidate slot(s)", candidates.len());
        candidates
    } else if let Some(path) = &args.slots {
        parkscan_core::load_slots(path)?
    } else {
        return Err("either --slots FILE or --auto-detect is required".into());
    };

    let report = analyze(&image, &slots, &config, args.strategy.into())?;

    if let Some(path) = &args.annotate {
        let annotations = parkscan_core::annotations(&report);
        save_annotated(&image, &annotations, path)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }
    Ok(())
}

fn run_detect(args: DetectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let image = image::open(&args.image)
        .map_err(|e| format!("Failed to open image '{}': {}", args.image.display(), e))?;
    let config = build_detect_config(&args)?;

    let slots = detect_slots(&image, &config.detection);

    if let Some(path) = &args.annotate {
        let annotations: Vec<SlotAnnotation> = slots
            .iter()
            .map(|slot| SlotAnnotation {
                slot: *slot,
                color: output::CANDIDATE_COLOR,
                label: "SLOT".to_string(),
            })
            .collect();
        save_annotated(&image, &annotations, path)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
    } else {
        output::print_slots(&slots);
    }
    Ok(())
}

fn save_annotated(
    image: &image::DynamicImage,
    annotations: &[SlotAnnotation],
    path: &PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut canvas = image.to_rgb8();
    parkscan_core::draw_annotations(&mut canvas, annotations);
    canvas
        .save(path)
        .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    log::info!("annotated image written to {}", path.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Analyze(args) => run_analyze(args),
        Commands::Detect(args) => run_detect(args),
    };

    if let Err(e) = result {
        log::error!("{e}");
        process::exit(1);
    }
}
