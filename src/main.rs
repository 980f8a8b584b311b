//! CLI entry point for gentree

use std::fs::{self, File};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::Env;
use gentree::tree::{display_name, lexical_absolute};
use gentree::{
    DEFAULT_IGNORE_PATTERNS, ExclusionSet, FileFilter, OutputConfig, StreamingFormatter,
    StreamingOutput, TreeWalker, WalkSummary, WalkerConfig, ignore_files_for, resolve_color,
};
use log::info;

/// Determine whether stdout output should be colored from the environment.
fn should_use_color(to_file: bool) -> bool {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let term = std::env::var("TERM").ok();
    resolve_color(to_file, no_color, term.as_deref(), std::io::stdout().is_terminal())
}

#[derive(Parser, Debug)]
#[command(name = "gentree")]
#[command(
    about = "Print a directory tree, skipping paths excluded by .treeignore, .gitignore and built-in defaults"
)]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Write the tree to FILE instead of stdout (disables color)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Exclude paths matching PATTERN, gitignore syntax (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Descend into symlinked directories (cycles are reported, not followed)
    #[arg(short = 'l', long = "follow")]
    follow: bool,

    /// Report which ignore files were loaded and what was walked
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("gentree: error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let root = resolve_root(&args.path)?;
    let root_name = root_display_name(&args.path, &root);

    let exclusions = ExclusionSet::load(
        &root,
        &ignore_files_for(&root),
        DEFAULT_IGNORE_PATTERNS,
        &args.ignore,
    )
    .context("cannot compile exclusion patterns")?;
    info!("{} exclusion patterns in effect", exclusions.pattern_count());

    let walker = TreeWalker::new(WalkerConfig {
        follow_symlinks: args.follow,
        ..Default::default()
    })
    .with_filter(FileFilter::new(&root, exclusions));

    let use_color = should_use_color(args.output.is_some());
    let summary = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open output file '{}'", path.display()))?;
            let mut formatter = StreamingFormatter::file(file);
            let summary = render(&walker, &root, &root_name, &mut formatter)
                .with_context(|| format!("cannot write to '{}'", path.display()))?;
            info!("tree structure saved to '{}'", path.display());
            summary
        }
        None => {
            let mut formatter = StreamingFormatter::stdout(OutputConfig { use_color });
            render(&walker, &root, &root_name, &mut formatter)
                .context("cannot write to stdout")?
        }
    };

    info!(
        "{} directories, {} files, {} symlinks",
        summary.directories, summary.files, summary.symlinks
    );
    Ok(())
}

/// Absolute, symlink-free form of the root directory, used for walking and matching.
fn resolve_root(path: &Path) -> Result<PathBuf> {
    let root = fs::canonicalize(path)
        .with_context(|| format!("the directory '{}' does not exist", path.display()))?;
    if !root.is_dir() {
        bail!("'{}' is not a directory", path.display());
    }
    Ok(root)
}

/// Header name for the root: the last component of the path as given, made
/// absolute without resolving symlinks.
fn root_display_name(given: &Path, canonical: &Path) -> String {
    match lexical_absolute(given) {
        Ok(path) if path.file_name().is_some() => display_name(&path),
        _ => display_name(canonical),
    }
}

fn render<O: StreamingOutput>(
    walker: &TreeWalker,
    root: &Path,
    root_name: &str,
    output: &mut O,
) -> Result<WalkSummary> {
    match walker.walk_named(root, root_name, output)? {
        Some(summary) => Ok(summary),
        None => bail!("the directory '{}' does not exist", root.display()),
    }
}
