//! Attachment encoding for file uploads.
//!
//! Converts local files into transport-ready attachment records: display
//! name, resolved MIME type, and the file bytes as a pure base64 payload.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::observability::{ATTACHMENT_ENCODE_ERRORS, ATTACHMENT_ENCODES};

/// Fallback MIME type when nothing better can be determined.
pub const GENERIC_BINARY: &str = "application/octet-stream";

/// A user-supplied file, encoded for transport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    /// Display name (the original filename).
    pub name: String,

    /// Resolved content type.
    pub mime_type: String,

    /// Base64 payload of the file bytes, with no data-URI header.
    pub data: String,
}

impl Attachment {
    /// Create an attachment from an already-encoded payload.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Create an attachment by reading a file.
    ///
    /// The file is read fully into memory and base64-encoded. The MIME type
    /// is guessed from the file extension; unrecognized extensions fall back
    /// to `application/octet-stream`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut file = File::open(path)
            .map_err(|err| Error::io(format!("failed to open {}", path.display()), err))?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)
            .map_err(|err| Error::io(format!("failed to read {}", path.display()), err))?;

        let data = base64::engine::general_purpose::STANDARD.encode(&buffer);
        let mime_type = mime_for_path(path);

        ATTACHMENT_ENCODES.click();
        Ok(Self {
            name,
            mime_type: mime_type.to_string(),
            data,
        })
    }

    /// Decode the base64 payload back to raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        base64::engine::general_purpose::STANDARD
            .decode(&self.data)
            .map_err(|err| {
                Error::encoding(
                    format!("invalid base64 payload for {}", self.name),
                    Some(Box::new(err)),
                )
            })
    }
}

/// Guess a MIME type from the file extension, falling back to
/// `application/octet-stream`.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => "text/csv",
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => {
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        }
        _ => GENERIC_BINARY,
    }
}

/// Returns true if the MIME type is one the composer accepts: images, PDF,
/// CSV, and common spreadsheet formats.
pub fn is_accepted_type(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
        || mime_type == "application/pdf"
        || mime_type == "text/csv"
        || mime_type == "application/vnd.ms-excel"
        || mime_type == "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
}

/// Encode a multi-file selection.
///
/// Files that fail to read are skipped and reported in the second element;
/// a failure never aborts encoding of the remaining files. An empty
/// selection yields an empty Vec.
pub fn encode_all<P: AsRef<Path>>(paths: &[P]) -> (Vec<Attachment>, Vec<(PathBuf, Error)>) {
    let mut attachments = Vec::new();
    let mut failures = Vec::new();
    for path in paths {
        match Attachment::from_path(path) {
            Ok(attachment) => attachments.push(attachment),
            Err(err) => {
                ATTACHMENT_ENCODE_ERRORS.click();
                failures.push((path.as_ref().to_path_buf(), err));
            }
        }
    }
    (attachments, failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"a,b").unwrap();
        drop(file);

        let attachment = Attachment::from_path(&path).unwrap();
        assert_eq!(attachment.name, "a.csv");
        assert_eq!(attachment.mime_type, "text/csv");
        assert_eq!(attachment.decode().unwrap(), b"a,b");
        // Pure payload, no data-URI header.
        assert!(!attachment.data.contains(','));
    }

    #[test]
    fn unknown_extension_falls_back_to_binary() {
        assert_eq!(mime_for_path(Path::new("notes.xyz")), GENERIC_BINARY);
        assert_eq!(mime_for_path(Path::new("noextension")), GENERIC_BINARY);
    }

    #[test]
    fn extension_case_insensitive() {
        assert_eq!(mime_for_path(Path::new("SCAN.PDF")), "application/pdf");
        assert_eq!(mime_for_path(Path::new("photo.JPG")), "image/jpeg");
    }

    #[test]
    fn accepted_types() {
        assert!(is_accepted_type("image/png"));
        assert!(is_accepted_type("application/pdf"));
        assert!(is_accepted_type("text/csv"));
        assert!(!is_accepted_type("application/zip"));
    }

    #[test]
    fn encode_all_skips_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("data.csv");
        std::fs::write(&good, b"x,y,z").unwrap();
        let missing = dir.path().join("missing.pdf");

        let (attachments, failures) = encode_all(&[good, missing.clone()]);
        assert_eq!(attachments.len(), 1);
        assert_eq!(attachments[0].name, "data.csv");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, missing);
    }

    #[test]
    fn empty_selection_yields_empty_vec() {
        let paths: &[&Path] = &[];
        let (attachments, failures) = encode_all(paths);
        assert!(attachments.is_empty());
        assert!(failures.is_empty());
    }
}
