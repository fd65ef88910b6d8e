// ── Attachment screening ──
//
// Size and type checks applied before a file is uploaded or attached
// to a record. Limits differ by kind: photos are capped tighter than
// documents.

use std::path::Path;

use crate::error::Error;

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;
pub const MAX_DOCUMENT_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Document,
}

impl AttachmentKind {
    /// Classify by file extension. Unrecognized extensions are
    /// treated as documents and get the looser limit.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp") => Self::Image,
            _ => Self::Document,
        }
    }

    #[must_use]
    pub fn max_bytes(self) -> u64 {
        match self {
            Self::Image => MAX_IMAGE_BYTES,
            Self::Document => MAX_DOCUMENT_BYTES,
        }
    }

    #[must_use]
    pub fn content_type(self, name: &str) -> &'static str {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);
        match ext.as_deref() {
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("webp") => "image/webp",
            Some("bmp") => "image/bmp",
            Some("pdf") => "application/pdf",
            _ => "application/octet-stream",
        }
    }
}

/// Reject an attachment that exceeds the limit for its kind.
pub fn check(name: &str, size: u64) -> Result<AttachmentKind, Error> {
    let kind = AttachmentKind::from_name(name);
    let max = kind.max_bytes();
    if size > max {
        let limit_mib = max / (1024 * 1024);
        return Err(Error::Attachment(format!(
            "{name} is {size} bytes, over the {limit_mib} MiB limit"
        )));
    }
    Ok(kind)
}
