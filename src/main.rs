use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use talwin::models::{ColorInput, Options, PartialOptions};
use talwin::services::{ColorState, Update};
use talwin::ui::HeadlessUi;
use talwin::Talwin;
use talwin_color::{detect, OutputFormat};

#[derive(Parser)]
#[command(name = "talwin")]
#[command(about = "Talwin - color picker core: convert, detect and validate colors")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color string or JSON object to another format
    Convert {
        /// Color string (e.g. "#ff8000", "hsl(30, 100%, 50%)") or JSON object
        /// (e.g. '{"h":30,"s":100,"v":100}')
        color: String,

        /// Output format: "hex", "rgb" or "hsl" (defaults to the config's format)
        #[arg(short, long)]
        to: Option<OutputFormat>,

        /// Options file (YAML)
        #[arg(short, long, env = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },
    /// Print the format of a JSON color object
    Detect {
        /// JSON object, e.g. '{"r":255,"g":0,"b":0}'
        json: String,
    },
    /// Load an options file and check its default color
    CheckConfig {
        /// Options file (YAML)
        #[arg(env = "CONFIG_FILE")]
        path: PathBuf,
    },
    /// Show version and configuration
    Status,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "talwin=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Convert { color, to, config }) => {
            run_convert_command(&color, to, config.as_deref())
        }
        Some(Commands::Detect { json }) => run_detect_command(&json),
        Some(Commands::CheckConfig { path }) => run_check_config_command(&path),
        Some(Commands::Status) | None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Strings that look like JSON objects are read as structured input.
fn color_input(arg: &str) -> anyhow::Result<ColorInput> {
    let trimmed = arg.trim();
    if trimmed.starts_with('{') {
        let value: serde_json::Value = serde_json::from_str(trimmed)
            .map_err(|e| anyhow::anyhow!("Invalid JSON color object: {e}"))?;
        Ok(ColorInput::from(value))
    } else {
        Ok(ColorInput::from(trimmed))
    }
}

/// Run the color through a headless picker and print it
fn run_convert_command(
    color: &str,
    to: Option<OutputFormat>,
    config: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let base = match config {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let mut options = PartialOptions::from(base);
    if let Some(format) = to {
        options = options.format(format);
    }

    let input = color_input(color)?;
    println!("{}", convert_color(input, options, &HeadlessUi::new())?);
    Ok(())
}

/// Set `input` on a headless picker and read it back in the configured
/// format.
///
/// The picker is destroyed before returning, whether the color was read or
/// not.
fn convert_color(
    input: ColorInput,
    options: PartialOptions,
    ui: &HeadlessUi,
) -> anyhow::Result<String> {
    let described = input.describe();
    let mut picker = Talwin::new("talwin-cli", options, ui)?;

    let update = picker.set_color(input);
    let converted = picker.color_string();
    picker.destroy();

    if let Update::Rejected(reason) = update {
        anyhow::bail!("Cannot read color '{described}': {reason}");
    }
    Ok(converted)
}

fn run_detect_command(json: &str) -> anyhow::Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("Invalid JSON: {e}"))?;

    match detect(&value) {
        Some(format) => {
            println!("{format}");
            Ok(())
        }
        None => {
            eprintln!("No known color format matches {value}");
            std::process::exit(1);
        }
    }
}

fn run_check_config_command(path: &std::path::Path) -> anyhow::Result<()> {
    let options = Options::load(path)?;
    let state = ColorState::new(&options.default, options.format)?;

    println!("Config OK: {}", path.display());
    println!("  format   = {}", options.format);
    println!("  default  = {} -> {state}", options.default.describe());
    if let Some(initial) = &options.color {
        let start = ColorState::with_fallback(initial, &options.default, options.format)?;
        println!("  color    = {} -> {start}", initial.describe());
    }
    println!("  preset   = {}", options.preset);
    println!("  toggle   = {}", options.toggle);
    println!("  disabled = {}", options.disabled);

    if !options.swatches.is_empty() {
        println!("  swatches:");
        for swatch in &options.swatches {
            match talwin_color::parse(swatch) {
                Ok(_) => println!("    {swatch}"),
                Err(e) => println!("    {swatch}  (ignored: {e})"),
            }
        }
    }

    if !options.ui.is_empty() {
        println!("  ui:");
        for key in options.ui.keys() {
            println!("    {key}");
        }
    }

    Ok(())
}

/// Display version and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("Talwin v{VERSION}");
    println!("Color picker core\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG    = {}",
        rust_log.as_deref().unwrap_or("talwin=warn (default)")
    );

    if let Some(path) = config_file {
        match Options::load(&path) {
            Ok(options) => println!("\nConfig: {path} (format {})", options.format),
            Err(e) => println!("\nConfig: {path} (error: {e})"),
        }
    }

    println!("\nCommands:");
    println!("  talwin convert       Convert a color to hex, rgb or hsl");
    println!("  talwin detect        Detect the format of a JSON color object");
    println!("  talwin check-config  Validate an options file");
    println!("\nRun 'talwin --help' for more details.");
}
