//! Exclusion pattern loading
//!
//! Builds a single gitignore-dialect matcher out of the built-in defaults,
//! the ignore files found in the root directory, and any extra patterns
//! passed on the command line.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use log::{info, warn};

/// Patterns that are always excluded, whatever the ignore files say.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // Version control
    ".git/",
    // Python caches and bytecode
    "__pycache__/",
    "*.pyc",
    // Virtual environments
    "venv/",
    "env/",
    ".venv/",
    // Node.js modules
    "node_modules/",
    // Editors
    ".vscode/",
    ".idea/",
    // OS artifacts
    ".DS_Store",
    "Thumbs.db",
    // Logs and scratch space
    "logs/",
    "*.log",
    "tmp/",
    "temp/",
    "secret_config.yaml",
];

/// Ignore files looked up directly in the root directory, in load order.
pub const IGNORE_FILE_NAMES: &[&str] = &[".treeignore", ".gitignore"];

/// The ignore files that apply to `root`.
pub fn ignore_files_for(root: &Path) -> Vec<PathBuf> {
    IGNORE_FILE_NAMES.iter().map(|name| root.join(name)).collect()
}

/// Read the pattern lines of one ignore file, dropping blanks and comments.
pub fn read_pattern_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

/// Compiled set of exclusion patterns, matched against root-relative paths.
#[derive(Debug)]
pub struct ExclusionSet {
    matcher: Gitignore,
    pattern_count: usize,
}

impl ExclusionSet {
    /// A set that excludes nothing.
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Compile a set from pattern lines alone, without touching the filesystem.
    pub fn from_patterns<I, S>(root: &Path, patterns: I) -> Result<Self, ignore::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;
        for pattern in patterns {
            if add_pattern(&mut builder, None, pattern.as_ref()) {
                pattern_count += 1;
            }
        }
        Self::build(&builder, pattern_count)
    }

    /// Merge `defaults`, the patterns of every existing file in `ignore_files`,
    /// and `extra` into one matcher.
    ///
    /// Missing or unreadable ignore files are logged and skipped. Only a failure
    /// to compile the final matcher is reported as an error.
    pub fn load(
        root: &Path,
        ignore_files: &[PathBuf],
        defaults: &[&str],
        extra: &[String],
    ) -> Result<Self, ignore::Error> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for pattern in defaults {
            if add_pattern(&mut builder, None, pattern) {
                pattern_count += 1;
            }
        }

        for file in ignore_files {
            match read_pattern_lines(file) {
                Ok(lines) => {
                    for line in &lines {
                        if add_pattern(&mut builder, Some(file.clone()), line) {
                            pattern_count += 1;
                        }
                    }
                    info!(
                        "loaded {} exclusion patterns from '{}'",
                        lines.len(),
                        file.display()
                    );
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    info!("ignore file '{}' not found, skipping", file.display());
                }
                Err(e) => {
                    warn!("cannot read ignore file '{}': {}", file.display(), e);
                }
            }
        }

        for pattern in extra {
            if add_pattern(&mut builder, None, pattern) {
                pattern_count += 1;
            }
        }

        Self::build(&builder, pattern_count)
    }

    fn build(builder: &GitignoreBuilder, pattern_count: usize) -> Result<Self, ignore::Error> {
        if pattern_count == 0 {
            return Ok(Self::empty());
        }
        Ok(Self {
            matcher: builder.build()?,
            pattern_count,
        })
    }

    /// Check a root-relative, `/`-separated path against the set.
    ///
    /// `is_dir` decides whether directory-only patterns (`name/`) apply.
    pub fn is_excluded(&self, relative_path: &str, is_dir: bool) -> bool {
        if self.pattern_count == 0 || relative_path.is_empty() {
            return false;
        }
        self.matcher.matched(relative_path, is_dir).is_ignore()
    }

    /// Number of pattern lines compiled into the set.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::empty()
    }
}

/// Add one line to the builder. Returns false (after logging) if the dialect
/// rejects it.
fn add_pattern(builder: &mut GitignoreBuilder, from: Option<PathBuf>, line: &str) -> bool {
    match builder.add_line(from, line) {
        Ok(_) => true,
        Err(e) => {
            warn!("skipping invalid exclusion pattern '{}': {}", line, e);
            false
        }
    }
}
