use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// File formats the document-understanding service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Doc,
    Png,
    Jpeg,
    Gif,
    Webp,
}

impl DocumentKind {
    /// Map a file extension to a document kind. Case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "doc" => Some(Self::Doc),
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    /// Derive the kind from a filename's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Png | Self::Jpeg | Self::Gif | Self::Webp)
    }
}

/// A supporting document attached to the live review session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub id: Uuid,
    pub filename: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

impl UploadedDocument {
    pub fn new(filename: impl Into<String>, kind: DocumentKind, bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: filename.into(),
            kind,
            bytes,
        }
    }

    pub fn meta(&self) -> DocumentMeta {
        DocumentMeta {
            id: self.id,
            filename: self.filename.clone(),
            kind: self.kind,
            size: self.bytes.len(),
        }
    }
}

/// Document metadata safe to send to the frontend (no content).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DocumentMeta {
    pub id: Uuid,
    pub filename: String,
    pub kind: DocumentKind,
    pub size: usize,
}
