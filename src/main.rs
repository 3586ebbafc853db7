//! CLI entry point for dirtree

use std::fs::File;
use std::io::{BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use dirtree::{
    ColorMode, Config, IndentStyle, JsonReport, OutputConfig, StreamingFormatter, TraversalConfig,
    TreeError, TreeRenderer, output::write_json, print_json, resolve_root,
};
use termcolor::NoColor;

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Render a directory hierarchy as an indented tree")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "DEPTH")]
    level: Option<usize>,

    /// Show hidden entries (names starting with '.')
    #[arg(short, long)]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Do not list entries with exactly this name (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Turn off tree indent characters
    #[arg(long = "no-indent")]
    no_indent: bool,

    /// Draw the tree with ASCII characters
    #[arg(long = "ascii", conflicts_with = "no_indent")]
    ascii: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN")]
    color: Option<ColorMode>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Write output to FILE instead of stdout (never colored)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Omit the directory/file totals after the tree
    #[arg(long = "noreport")]
    noreport: bool,

    /// Path to configuration file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Merge flags over config file defaults.
    fn traversal_config(&self, file: &Config) -> TraversalConfig {
        let indent = if self.no_indent {
            IndentStyle::None
        } else if self.ascii {
            IndentStyle::Ascii
        } else {
            file.indent
        };

        TraversalConfig::new(resolve_root(&self.path))
            .with_max_depth(self.level.or(file.max_depth))
            .with_show_hidden(self.all || file.show_hidden)
            .with_dirs_only(self.dirs_only || file.dirs_only)
            .with_ignore_names(file.ignore.iter().chain(&self.ignore).cloned())
            .with_connectors(indent.connectors())
    }
}

fn init_logging(verbosity: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirtree={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let file_config = Config::load(args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    });
    tracing::debug!(?file_config, "configuration");

    let config = args.traversal_config(&file_config);
    let color = args.color.unwrap_or(file_config.color);

    if let Err(e) = run(&args, config, color) {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args, config: TraversalConfig, color: ColorMode) -> dirtree::Result<()> {
    // An invalid root must not leave an empty output file behind
    if !config.root.is_dir() {
        return Err(TreeError::InvalidRoot(config.root));
    }

    let dirs_only = config.dirs_only;
    let renderer = TreeRenderer::new(config);

    if args.json {
        // JSON needs the whole render in memory
        let rendered = renderer.render()?;
        let report = JsonReport::new(&rendered, dirs_only);
        match &args.output {
            Some(path) => {
                let mut out = BufWriter::new(File::create(path)?);
                write_json(&mut out, &report)?;
                out.flush()?;
            }
            None => print_json(&report)?,
        }
        return Ok(());
    }

    let output_config = OutputConfig {
        use_color: should_use_color(color),
        report: !args.noreport,
        dirs_only,
    };

    match &args.output {
        Some(path) => {
            let file = BufWriter::new(File::create(path)?);
            let mut formatter = StreamingFormatter::new(NoColor::new(file), output_config);
            renderer.render_to(&mut formatter)?;
            formatter.into_inner().into_inner().flush()?;
        }
        None => {
            let mut formatter = StreamingFormatter::stdout(output_config);
            renderer.render_to(&mut formatter)?;
        }
    }
    Ok(())
}
