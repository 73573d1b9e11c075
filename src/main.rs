use catalog_resizer::activity::ActivityLog;
use catalog_resizer::config::{self, DEFAULT_CONFIG_FILE, ResizerConfig};
use catalog_resizer::imaging::RustBackend;
use catalog_resizer::walk::{Roots, process_tree};
use catalog_resizer::{menu, output};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn version_string() -> &'static str {
    if env!("RESIZER_RELEASE_BUILD") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    let hash = env!("RESIZER_GIT_HASH");
    if hash.is_empty() {
        "dev@unknown"
    } else {
        // clap wants a &'static str; built once per process
        Box::leak(format!("dev@{hash}").into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "catalog-resizer")]
#[command(about = "Batch resizer for product photos")]
#[command(long_about = "\
Batch resizer for product photos

Put each product's photos in its own folder under the input root, run the
tool, and pick an option from the menu. Results land in a mirrored tree
under the output root with the same folder and file names.

  images/                       resized-images/
  ├── shoes/                    ├── shoes/
  │   ├── 01.jpg         ──→    │   ├── 01.jpg
  │   └── 02.png         ──→    │   └── 02.png
  └── hats/                     └── hats/
      └── 01.jpg         ──→        └── 01.jpg

Menu options:
  1  Add a white background: scale to 65% of the canvas width and center
  2  Resize: stretch to the canvas size
  3  Smart resize: option 1 for small photos, option 2 for the rest

Supported inputs: png, jpg, jpeg, tiff, bmp, gif. Progress is appended to
image_processing.log. Run with --print-config for every setting.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (ignored if it does not exist)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Print a stock resizer.toml with all options documented and exit
    #[arg(long)]
    print_config: bool,

    /// Mirror activity to stderr at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("catalog_resizer={level}").into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = config::load_config(&cli.config)?;
    tracing::debug!(?config, "configuration loaded");

    let mut log = ActivityLog::open(&config.log_file, config.log_level)?;
    let roots = Roots::new(&config.input_root, &config.output_root);
    roots.ensure_exist()?;

    run(&config, &roots, &mut log)?;
    Ok(())
}

fn run(config: &ResizerConfig, roots: &Roots, log: &mut ActivityLog) -> std::io::Result<()> {
    let backend = RustBackend::new();
    let settings = config.transform_settings();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut stdout = std::io::stdout();

    menu::run_menu(
        &mut input,
        &mut stdout,
        config.canvas,
        log,
        |policy, log, out| {
            let lines = match process_tree(&backend, policy, roots, &settings, log) {
                Ok(summary) => {
                    output::format_batch_summary(policy, config.canvas, &summary, &roots.output)
                }
                Err(e) => {
                    log.error(&e.to_string());
                    output::format_walk_error(policy, config.canvas, &e)
                }
            };
            output::print_lines(&lines, out)
        },
    )
}
