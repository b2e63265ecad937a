//! Conversion of uploaded documents into Converse content blocks.
//!
//! PDFs and Word files go as `DocumentBlock`s, which Bedrock parses
//! natively; scans and photos go as `ImageBlock`s.

use std::collections::HashSet;

use aws_sdk_bedrockruntime::types::{
    ContentBlock, DocumentBlock, DocumentFormat, DocumentSource, ImageBlock, ImageFormat,
    ImageSource,
};
use aws_smithy_types::Blob;
use certa_core::models::document::{DocumentKind, UploadedDocument};

use crate::error::BedrockError;

/// Converse accepts at most this many document blocks per message.
pub const MAX_DOCUMENTS: usize = 5;

/// Converse accepts at most this many image blocks per message.
pub const MAX_IMAGES: usize = 20;

/// Build one content block per uploaded document, in upload order.
pub fn content_blocks(documents: &[UploadedDocument]) -> Result<Vec<ContentBlock>, BedrockError> {
    if documents.is_empty() {
        return Err(BedrockError::NoDocuments);
    }
    check_limits(documents)?;

    let names = unique_document_names(documents);
    documents
        .iter()
        .zip(names)
        .map(|(doc, name)| content_block(doc, name))
        .collect()
}

fn check_limits(documents: &[UploadedDocument]) -> Result<(), BedrockError> {
    let images = documents.iter().filter(|d| d.kind.is_image()).count();
    let files = documents.len() - images;
    if files > MAX_DOCUMENTS {
        return Err(BedrockError::TooManyAttachments {
            kind: "document",
            count: files,
            limit: MAX_DOCUMENTS,
        });
    }
    if images > MAX_IMAGES {
        return Err(BedrockError::TooManyAttachments {
            kind: "image",
            count: images,
            limit: MAX_IMAGES,
        });
    }
    Ok(())
}

fn content_block(doc: &UploadedDocument, name: String) -> Result<ContentBlock, BedrockError> {
    let bytes = Blob::new(doc.bytes.clone());
    match doc.kind {
        DocumentKind::Pdf | DocumentKind::Docx | DocumentKind::Doc => {
            let format = match doc.kind {
                DocumentKind::Pdf => DocumentFormat::Pdf,
                DocumentKind::Docx => DocumentFormat::Docx,
                _ => DocumentFormat::Doc,
            };
            let block = DocumentBlock::builder()
                .format(format)
                .name(name)
                .source(DocumentSource::Bytes(bytes))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?;
            Ok(ContentBlock::Document(block))
        }
        DocumentKind::Png | DocumentKind::Jpeg | DocumentKind::Gif | DocumentKind::Webp => {
            let format = match doc.kind {
                DocumentKind::Png => ImageFormat::Png,
                DocumentKind::Jpeg => ImageFormat::Jpeg,
                DocumentKind::Gif => ImageFormat::Gif,
                _ => ImageFormat::Webp,
            };
            let block = ImageBlock::builder()
                .format(format)
                .source(ImageSource::Bytes(bytes))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?;
            Ok(ContentBlock::Image(block))
        }
    }
}

/// Sanitized, de-duplicated names for the document blocks. Bedrock rejects
/// a message in which two documents share a name.
pub fn unique_document_names(documents: &[UploadedDocument]) -> Vec<String> {
    let mut seen = HashSet::new();
    documents
        .iter()
        .enumerate()
        .map(|(index, doc)| {
            let stem = doc
                .filename
                .rsplit_once('.')
                .map(|(stem, _)| stem)
                .unwrap_or(&doc.filename);
            let mut name = sanitize_document_name(stem);
            if name.is_empty() {
                name = format!("document {}", index + 1);
            }
            let mut candidate = name.clone();
            let mut n = 2;
            while !seen.insert(candidate.clone()) {
                candidate = format!("{name} ({n})");
                n += 1;
            }
            candidate
        })
        .collect()
}

/// Sanitize a filename for use as a Bedrock `DocumentBlock` name.
///
/// The name field only allows alphanumeric characters, single whitespace,
/// hyphens, parentheses, and square brackets.
pub fn sanitize_document_name(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '(' || c == ')' || c == '[' || c == ']' {
                c
            } else {
                ' '
            }
        })
        .collect();

    sanitized.split_whitespace().collect::<Vec<_>>().join(" ")
}
