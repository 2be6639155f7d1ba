//! File and directory conversion entry points.

use crate::convert::convert_structure;
use crate::diagnostics::Diagnostics;
use crate::document::Cm3Structure;
use crate::error::{ConvertError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// File or directory to convert.
    pub input: PathBuf,
    /// Destination file or directory. Derived from the input when absent.
    pub output: Option<PathBuf>,
    /// Parse and convert, but write nothing.
    pub dry_run: bool,
}

/// Outcome counts for a directory conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents converted and written.
    pub converted: usize,
    /// Documents skipped after a read, parse, or write failure.
    pub failed: usize,
}

/// Convert whatever the config's input path points at.
///
/// A directory converts every `.json` file directly inside it; a file
/// converts alone. Any other path is an error.
pub fn run(config: &ConvertConfig) -> Result<()> {
    if config.input.is_dir() {
        convert_directory(&config.input, config.output.as_deref(), config.dry_run)?;
        Ok(())
    } else if config.input.is_file() {
        convert_file(&config.input, config.output.as_deref(), config.dry_run)?;
        Ok(())
    } else {
        Err(ConvertError::InputNotFound(config.input.clone()))
    }
}

/// Convert one CM3 JSON file and return the path written.
///
/// Without an explicit `output` the result lands next to the input as
/// `<stem>_converted.<ext>`. Conversion diagnostics go to stderr, a
/// progress line to stdout. Under `dry_run` everything happens except
/// the write, and the returned path is where the file would have gone.
pub fn convert_file(input: &Path, output: Option<&Path>, dry_run: bool) -> Result<PathBuf> {
    let contents = fs::read_to_string(input)?;
    let cm3: Cm3Structure = serde_json::from_str(&contents)?;

    let mut diagnostics = Diagnostics::new();
    let ma = convert_structure(&cm3, &mut diagnostics);
    diagnostics.print_to_stderr();

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input),
    };

    let rendered = serde_json::to_string_pretty(&ma)?;
    if !dry_run {
        fs::write(&output, rendered)?;
    }

    println!(
        "Converted{}: {} -> {}",
        if dry_run { " (dry)" } else { "" },
        input.display(),
        output.display()
    );

    Ok(output)
}

/// Convert every `.json` file directly inside `input_dir`.
///
/// Results keep their file names and land in `output_dir`, defaulting to
/// a `converted/` directory inside the input. Files are processed in
/// name order. A document that fails to convert is reported on stderr
/// and counted; it never aborts the rest of the batch.
pub fn convert_directory(
    input_dir: &Path,
    output_dir: Option<&Path>,
    dry_run: bool,
) -> Result<BatchSummary> {
    let output_dir = match output_dir {
        Some(path) => path.to_path_buf(),
        None => input_dir.join("converted"),
    };
    if !dry_run {
        fs::create_dir_all(&output_dir)?;
    }

    let mut summary = BatchSummary::default();
    for path in json_files(input_dir)? {
        let file_name = path.file_name().unwrap();
        match convert_file(&path, Some(&output_dir.join(file_name)), dry_run) {
            Ok(_) => summary.converted += 1,
            Err(e) => {
                eprintln!("Error converting {}: {}", path.display(), e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// The input path with `_converted` appended to its file stem.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match input.extension() {
        Some(ext) => format!("{}_converted.{}", stem, ext.to_string_lossy()),
        None => format!("{}_converted", stem),
    };
    input.with_file_name(file_name)
}

/// List the `.json` files directly inside `dir`, sorted by path.
fn json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
