use bulk_resizer::config::{self, ResizerConfig};
use bulk_resizer::request::RequestForm;
use bulk_resizer::scan::{self, ScanOptions, Selection};
use bulk_resizer::{output, process};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bulk-resizer", version)]
#[command(about = "Batch center-crop, resize and rename images")]
#[command(long_about = "\
Batch center-crop, resize and rename images

Each selected image is decoded, optionally center-cropped, optionally resized
to an exact size, and written to the output folder. With a prefix, outputs
are named <prefix>_<n>.<ext> in selection order; without one, the source
filename is kept. An image that cannot be read or written is reported and
skipped; the rest of the batch continues.

Recognized input extensions: jpg, jpeg, png, bmp, gif.

Defaults can be set in resizer.toml (see 'bulk-resizer gen-config').")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the images in a folder that a run would offer for selection
    List {
        /// Folder to list
        dir: PathBuf,
        /// Include images in subfolders
        #[arg(long)]
        recursive: bool,
    },
    /// Crop, resize and rename a selection of images
    Run(RunArgs),
    /// Print a stock resizer.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct RunArgs {
    /// Image files to process, in this order. When omitted, every image in
    /// --input is selected.
    files: Vec<PathBuf>,

    /// Input folder to select images from
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output folder (created if missing)
    #[arg(short, long)]
    output: PathBuf,

    /// Center-crop each image before resizing
    #[arg(long)]
    crop: bool,

    /// Crop width in pixels
    #[arg(long, value_name = "PX", allow_hyphen_values = true)]
    crop_width: Option<String>,

    /// Crop height in pixels
    #[arg(long, value_name = "PX", allow_hyphen_values = true)]
    crop_height: Option<String>,

    /// Resize each image to exactly --resize-width x --resize-height
    #[arg(long)]
    resize: bool,

    /// Resize width in pixels
    #[arg(long, value_name = "PX", allow_hyphen_values = true)]
    resize_width: Option<String>,

    /// Resize height in pixels
    #[arg(long, value_name = "PX", allow_hyphen_values = true)]
    resize_height: Option<String>,

    /// Output name prefix; outputs become <prefix>_<n>.<ext>
    #[arg(long)]
    prefix: Option<String>,

    /// Include images in subfolders of --input
    #[arg(long)]
    recursive: bool,

    /// Config file (defaults to ./resizer.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the per-item outcome list as JSON
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

impl RunArgs {
    /// Build the raw form: command-line values first, config values second.
    fn form(&self, config: &ResizerConfig) -> RequestForm {
        RequestForm {
            enable_crop: self.crop || config.crop.enabled,
            crop_width: self
                .crop_width
                .clone()
                .unwrap_or_else(|| config.crop.width.to_string()),
            crop_height: self
                .crop_height
                .clone()
                .unwrap_or_else(|| config.crop.height.to_string()),
            enable_resize: self.resize || config.resize.enabled,
            resize_width: self
                .resize_width
                .clone()
                .unwrap_or_else(|| config.resize.width.to_string()),
            resize_height: self
                .resize_height
                .clone()
                .unwrap_or_else(|| config.resize.height.to_string()),
            prefix: self
                .prefix
                .clone()
                .unwrap_or_else(|| config.prefix.clone()),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::List { dir, recursive } => {
            let images = scan::list_images(&dir, ScanOptions { recursive })?;
            output::print_image_list(&dir, &images);
        }
        Command::Run(args) => run(&args)?,
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(resolve_config_path(args.config.as_deref()).as_deref())?;

    let selection = match &args.input {
        Some(dir) if args.files.is_empty() => Selection::Folder {
            dir: dir.clone(),
            options: ScanOptions {
                recursive: args.recursive || config.scan.recursive,
            },
        },
        _ => Selection::Files(args.files.clone()),
    };

    let run = process::run_form(&args.form(&config), &selection, &args.output)?;
    output::print_request(&run.request);
    output::print_report(&run.report);

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(&run.report)?;
        std::fs::write(path, json)?;
    }

    Ok(())
}

/// An explicit `--config` wins; otherwise `./resizer.toml` if it exists.
fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let local = PathBuf::from(config::CONFIG_FILE_NAME);
            local.is_file().then_some(local)
        }
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Logs go to stderr; command output stays on stdout.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
