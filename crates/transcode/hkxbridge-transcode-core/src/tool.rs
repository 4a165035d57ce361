//! Runner for the opaque native converter tool.
//!
//! The converter is a blocking, one-shot subprocess: it either succeeds
//! producing a readable intermediate document, or fails with an exit code.
//! No retry, cancellation, or timeout logic lives here; scratch files are
//! removed on success and failure alike.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use hkxbridge_document::Document;

use crate::error::TranscodeError;

/// Target container layout of the packed file.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// 32-bit layout (legacy runtime).
    Win32,
    /// 64-bit layout.
    Amd64,
}

impl OutputFormat {
    fn arg(self) -> &'static str {
        match self {
            OutputFormat::Win32 => "WIN32",
            OutputFormat::Amd64 => "AMD64",
        }
    }
}

/// Handle to the converter executable.
#[derive(Clone, Debug)]
pub struct ConverterTool {
    exe: PathBuf,
}

impl ConverterTool {
    pub fn new(exe: impl Into<PathBuf>) -> Result<Self, TranscodeError> {
        let exe = exe.into();
        if !exe.exists() {
            return Err(TranscodeError::ExternalToolFailure {
                reason: format!("converter tool not found at {}", exe.display()),
            });
        }
        Ok(Self { exe })
    }

    /// Unpack a binary animation file into the intermediate document.
    /// `skeletons` carries the primary skeleton path and, for paired
    /// animations, the secondary one.
    pub fn unpack(&self, input: &Path, skeletons: &[&Path]) -> Result<Document, TranscodeError> {
        let scratch = scratch_file()?;

        let status = Command::new(&self.exe)
            .arg("unpack")
            .arg(input)
            .arg(scratch.path())
            .args(skeletons)
            .status()?;
        check_exit(status)?;

        let text = fs::read_to_string(scratch.path())?;
        Document::from_json_str(&text).map_err(|e| TranscodeError::ExternalToolFailure {
            reason: format!("intermediate document could not be read: {e}"),
        })
    }

    /// Pack a document into the binary animation file at `output`.
    pub fn pack(
        &self,
        doc: &Document,
        format: OutputFormat,
        output: &Path,
        skeletons: &[&Path],
    ) -> Result<(), TranscodeError> {
        let json = doc
            .to_json_string()
            .map_err(|e| TranscodeError::ExternalToolFailure {
                reason: format!("intermediate document could not be written: {e}"),
            })?;

        let scratch = scratch_file()?;
        fs::write(scratch.path(), json)?;

        let status = Command::new(&self.exe)
            .arg("pack")
            .arg(format.arg())
            .arg(scratch.path())
            .arg(output)
            .args(skeletons)
            .status()?;
        check_exit(status)
    }
}

// NamedTempFile removes the scratch file on drop, covering every error path.
fn scratch_file() -> Result<tempfile::NamedTempFile, TranscodeError> {
    Ok(tempfile::Builder::new()
        .prefix("hkxbridge-")
        .suffix(".tmp")
        .tempfile()?)
}

fn check_exit(status: std::process::ExitStatus) -> Result<(), TranscodeError> {
    if status.success() {
        Ok(())
    } else {
        Err(TranscodeError::ExternalToolFailure {
            reason: format!("converter exited with {status}"),
        })
    }
}
