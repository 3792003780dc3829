//! Probing many files at once.
//!
//! Collects targets from the command line, reads each file once and
//! classifies it. Results are kept in input order no matter which worker
//! finished first.

use crate::classify::classify;
use crate::error::ProbeError;
use crate::types::{ImageFormat, MetadataValue};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// How command-line targets are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Each target is an image file.
    Files,
    /// Each target is a directory whose regular files are images.
    Dirs,
}

/// Options for a batch probe
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Drop invalid targets and unreadable images instead of failing
    pub skip_invalid: bool,
    /// Classify files on a rayon pool
    pub parallel: bool,
    /// Worker count when `parallel` is set
    pub thread_count: usize,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            skip_invalid: false,
            parallel: true,
            thread_count: std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4),
        }
    }
}

impl ProbeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    pub fn with_thread_count(mut self, threads: usize) -> Self {
        self.thread_count = threads.max(1);
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectedInputs {
    pub files: Vec<PathBuf>,
    /// Targets dropped because `skip_invalid` was set.
    pub rejected: Vec<PathBuf>,
}

/// Resolves targets into the ordered list of files to probe.
///
/// Directories are expanded one level deep, entries sorted by name;
/// subdirectories are ignored.
pub fn collect_inputs(
    targets: &[PathBuf],
    kind: InputKind,
    options: &ProbeOptions,
) -> Result<CollectedInputs, ProbeError> {
    if targets.is_empty() {
        return Err(ProbeError::NoInputs);
    }

    let mut collected = CollectedInputs::default();

    match kind {
        InputKind::Files => {
            for target in targets {
                match fs::metadata(target) {
                    Ok(meta) if !meta.is_dir() => collected.files.push(target.clone()),
                    _ => collected.rejected.push(target.clone()),
                }
            }
            if !options.skip_invalid && !collected.rejected.is_empty() {
                return Err(ProbeError::InvalidFiles(collected.rejected));
            }
        }
        InputKind::Dirs => {
            let mut dirs = Vec::with_capacity(targets.len());
            for target in targets {
                if target.is_dir() {
                    dirs.push(target);
                } else {
                    collected.rejected.push(target.clone());
                }
            }
            if !options.skip_invalid && !collected.rejected.is_empty() {
                return Err(ProbeError::InvalidDirs(collected.rejected));
            }
            for dir in dirs {
                collected.files.extend(list_dir_files(dir)?);
            }
        }
    }

    for path in &collected.rejected {
        tracing::warn!("Skipping invalid target: {}", path.display());
    }

    Ok(collected)
}

fn list_dir_files(dir: &Path) -> Result<Vec<PathBuf>, ProbeError> {
    let io_err = |error| ProbeError::Io {
        path: dir.to_path_buf(),
        error,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if entry.file_type().map_err(io_err)?.is_dir() {
            continue;
        }
        files.push(entry.path());
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Reads `path` fully and classifies it, labelling errors with the path.
pub fn classify_path(path: &Path) -> Result<MetadataValue, ProbeError> {
    let data = fs::read(path).map_err(|error| ProbeError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    Ok(classify(&data, &path.display().to_string())?)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbedImage {
    pub path: PathBuf,
    #[serde(flatten)]
    pub metadata: MetadataValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedInput {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub entries: Vec<ProbedImage>,
    pub skipped: Vec<SkippedInput>,
}

impl BatchReport {
    pub fn count(&self, format: ImageFormat) -> usize {
        self.entries
            .iter()
            .filter(|e| e.metadata.format() == format)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Classifies every path and returns results in the order given.
///
/// Without `skip_invalid`, the first failure in input order is returned.
pub fn probe_all(paths: &[PathBuf], options: &ProbeOptions) -> Result<BatchReport, ProbeError> {
    let start_time = Instant::now();
    tracing::info!("Probing {} files", paths.len());

    let results: Vec<Result<MetadataValue, ProbeError>> = if options.parallel {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.thread_count)
            .build()?;
        pool.install(|| paths.par_iter().map(|p| classify_path(p)).collect())
    } else {
        paths.iter().map(|p| classify_path(p)).collect()
    };

    let mut report = BatchReport::default();
    for (path, result) in paths.iter().zip(results) {
        match result {
            Ok(metadata) => report.entries.push(ProbedImage {
                path: path.clone(),
                metadata,
            }),
            Err(e) if options.skip_invalid => {
                tracing::warn!("Excluded {}: {}", path.display(), e);
                report.skipped.push(SkippedInput {
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!(
        "Probe complete: {} images, {} skipped in {:.2}s",
        report.entries.len(),
        report.skipped.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}
