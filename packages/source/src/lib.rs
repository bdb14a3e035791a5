//! Design-link validation: turn a pasted URL into a file key and link
//! kind, or an error message the form can show inline.
//!
//! Pure string matching over a small fixed set of known path shapes. No
//! network I/O happens here; fetching the design file is a separate
//! concern.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LinkError {
    #[error("Not a recognized design file URL: {0}")]
    UnrecognizedUrl(String),

    #[error("Design file URL is missing a file key")]
    MissingKey,
}

/// Which kind of design URL was pasted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    File,
    Design,
    Prototype,
}

/// Validated design link: the file key plus its URL shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignLink {
    pub key: String,
    pub kind: LinkKind,
}

/// Validate a pasted URL against the known path shapes:
/// `figma.com/file/<key>`, `figma.com/design/<key>`,
/// `figma.com/proto/<key>`, with or without `www.` and trailing
/// path/query segments.
pub fn parse_design_url(url: &str) -> Result<DesignLink, LinkError> {
    let trimmed = url.trim();

    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| LinkError::UnrecognizedUrl(trimmed.to_string()))?;
    let rest = rest.strip_prefix("www.").unwrap_or(rest);
    let path = rest
        .strip_prefix("figma.com/")
        .ok_or_else(|| LinkError::UnrecognizedUrl(trimmed.to_string()))?;

    let (kind, remainder) = if let Some(remainder) = path.strip_prefix("file/") {
        (LinkKind::File, remainder)
    } else if let Some(remainder) = path.strip_prefix("design/") {
        (LinkKind::Design, remainder)
    } else if let Some(remainder) = path.strip_prefix("proto/") {
        (LinkKind::Prototype, remainder)
    } else {
        return Err(LinkError::UnrecognizedUrl(trimmed.to_string()));
    };

    let key = remainder
        .split(['/', '?', '#'])
        .next()
        .unwrap_or("");
    if key.is_empty() {
        return Err(LinkError::MissingKey);
    }

    Ok(DesignLink {
        key: key.to_string(),
        kind,
    })
}
