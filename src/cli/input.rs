//! Input discovery and loading for the CLI
//!
//! Inputs are named as files, directories (walked recursively) or glob
//! patterns. Three file formats are understood:
//! - `.json`: an array of input records (`{"rawText": ..., "source": ...}`)
//! - `.jsonl`: one input record per line
//! - `.txt`: raw NOTAM texts separated by blank lines, all from one source

use crate::app::models::{NotamInput, Source};
use crate::constants::INPUT_EXTENSIONS;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Expand input arguments into a sorted, de-duplicated list of files
pub fn resolve_input_paths(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);

        if path.is_dir() {
            files.extend(discover_input_files(path)?);
        } else if path.is_file() {
            files.push(path.to_path_buf());
        } else if is_glob_pattern(input) {
            let entries = glob::glob(input)
                .map_err(|e| Error::glob_pattern(input.as_str(), e.to_string()))?;
            let matched: Vec<PathBuf> = entries
                .filter_map(|entry| entry.ok())
                .filter(|path| path.is_file() && has_input_extension(path))
                .collect();
            debug!("Pattern '{}' matched {} files", input, matched.len());
            files.extend(matched);
        } else {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                path.display()
            )));
        }
    }

    files.sort();
    files.dedup();

    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No input files found (expected extensions: {})",
            INPUT_EXTENSIONS.join(", ")
        )));
    }

    info!("Resolved {} input files", files.len());
    Ok(files)
}

/// Discover input files in a directory tree
pub fn discover_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_input_extension(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    debug!("Discovered {} input files in {}", files.len(), dir.display());
    Ok(files)
}

/// Read and parse one input file
pub async fn load_input_file(path: &Path, default_source: Source) -> Result<Vec<NotamInput>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read input file {}", path.display()), e))?;

    parse_input_content(path, &content, default_source)
}

/// Read and parse every input file, preserving order
pub async fn load_inputs(paths: &[PathBuf], default_source: Source) -> Result<Vec<NotamInput>> {
    let mut inputs = Vec::new();
    for path in paths {
        let loaded = load_input_file(path, default_source).await?;
        debug!("Loaded {} NOTAMs from {}", loaded.len(), path.display());
        inputs.extend(loaded);
    }
    Ok(inputs)
}

/// Parse file content according to the file extension
pub fn parse_input_content(
    path: &Path,
    content: &str,
    default_source: Source,
) -> Result<Vec<NotamInput>> {
    let file = path.display().to_string();

    match extension(path).as_deref() {
        Some("json") => serde_json::from_str::<Vec<NotamInput>>(content)
            .map_err(|e| Error::input_format(file, format!("expected an array of NOTAM records: {}", e))),
        Some("jsonl") => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str::<NotamInput>(line).map_err(|e| {
                    Error::input_format(file.as_str(), format!("line {}: {}", index + 1, e))
                })
            })
            .collect(),
        Some("txt") => Ok(split_raw_notams(content)
            .into_iter()
            .map(|raw_text| NotamInput::new(raw_text, default_source))
            .collect()),
        _ => Err(Error::input_format(
            file,
            format!("unsupported extension (expected {})", INPUT_EXTENSIONS.join(", ")),
        )),
    }
}

/// Split plain text into NOTAMs at blank lines
pub fn split_raw_notams(content: &str) -> Vec<String> {
    let mut notams = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                notams.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        notams.push(current.join("\n"));
    }

    notams
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
}

fn has_input_extension(path: &Path) -> bool {
    extension(path).is_some_and(|ext| INPUT_EXTENSIONS.contains(&ext.as_str()))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}
