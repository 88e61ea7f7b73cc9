//! Block extraction.
//!
//! A single pass over the input lines with one piece of state: whether the
//! scan is currently inside a capturable region. Lines inside a region are
//! copied verbatim (terminator included); marker lines and everything
//! outside a region are dropped.

use crate::fence::{FenceMarkers, LineKind};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for extraction operations
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to open input file {path}: {source}")]
    OpenInput { source: io::Error, path: PathBuf },

    #[error("Failed to create output file {path}: {source}")]
    CreateOutput { source: io::Error, path: PathBuf },

    #[error("Failed to read input file {path}: {source}")]
    Read { source: io::Error, path: PathBuf },

    #[error("Failed to write output file {path}: {source}")]
    Write { source: io::Error, path: PathBuf },
}

/// What a scan did
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct ExtractSummary {
    /// Number of regions opened
    pub blocks: usize,
    /// Number of lines copied to the output
    pub lines_written: usize,
    /// Input ended while inside a region
    pub unterminated: bool,
}

/// Failure inside [`extract_blocks`], tagged with the side that failed
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Read failed: {0}")]
    Read(#[source] io::Error),

    #[error("Write failed: {0}")]
    Write(#[source] io::Error),
}

/// Copy every line between an open and a close marker from `source` to `sink`.
///
/// An open marker seen inside a region is ordinary content. A region still
/// open at end of input is not an error; its lines have already been copied.
pub fn extract_blocks<R: BufRead, W: Write>(
    mut source: R,
    sink: &mut W,
    markers: &FenceMarkers,
) -> Result<ExtractSummary, ScanError> {
    let mut summary = ExtractSummary::default();
    let mut inside_block = false;
    let mut line = Vec::new();
    let mut line_num = 0usize;

    loop {
        line.clear();
        if source.read_until(b'\n', &mut line).map_err(ScanError::Read)? == 0 {
            break;
        }
        line_num += 1;

        match (inside_block, markers.classify(&line)) {
            (true, LineKind::Close) => {
                log::debug!("[mdcode] Block closed at line {line_num}");
                inside_block = false;
            }
            (true, _) => {
                sink.write_all(&line).map_err(ScanError::Write)?;
                summary.lines_written += 1;
            }
            (false, LineKind::Open) => {
                log::debug!("[mdcode] Block opened at line {line_num}");
                inside_block = true;
                summary.blocks += 1;
            }
            (false, _) => {}
        }
    }

    if inside_block {
        log::warn!(
            "[mdcode] Input ended inside a block; no closing '{}' found",
            markers.close()
        );
        summary.unterminated = true;
    }

    Ok(summary)
}

/// Extract `~~~~cpp` blocks from `input` into `output`.
///
/// # Errors
///
/// Returns an error if the output cannot be created, the input cannot be
/// opened, or reading or writing fails part way through.
pub fn extract(input: &Path, output: &Path) -> Result<ExtractSummary, ExtractError> {
    extract_with(input, output, &FenceMarkers::default())
}

/// Same as [`extract`] with explicit markers.
///
/// The output is created (and truncated) before the input is opened, so a
/// missing input still leaves an empty output file behind.
pub fn extract_with(input: &Path, output: &Path, markers: &FenceMarkers) -> Result<ExtractSummary, ExtractError> {
    let out_file = File::create(output).map_err(|source| ExtractError::CreateOutput {
        source,
        path: output.to_path_buf(),
    })?;
    let in_file = File::open(input).map_err(|source| ExtractError::OpenInput {
        source,
        path: input.to_path_buf(),
    })?;

    log::debug!(
        "[mdcode] Extracting '{}' blocks from {} into {}",
        markers.open(),
        input.display(),
        output.display()
    );

    let write_error = |source: io::Error| ExtractError::Write {
        source,
        path: output.to_path_buf(),
    };

    let mut writer = BufWriter::new(out_file);
    let summary = extract_blocks(BufReader::new(in_file), &mut writer, markers).map_err(|err| match err {
        ScanError::Read(source) => ExtractError::Read {
            source,
            path: input.to_path_buf(),
        },
        ScanError::Write(source) => write_error(source),
    })?;
    // BufWriter discards flush errors on drop
    writer.flush().map_err(write_error)?;

    Ok(summary)
}
