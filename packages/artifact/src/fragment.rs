use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of code representations a generation cycle can produce.
///
/// Each kind carries fixed metadata (display label, highlight language,
/// export extension) defined once at compile time and shared by all
/// callers without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FragmentKind {
    Jsx,
    Tsx,
    Css,
    CssAdvanced,
    #[serde(rename = "typescript")]
    TypeScript,
    Html,
}

impl FragmentKind {
    /// All kinds, in the order tabs are laid out
    pub const ALL: [FragmentKind; 6] = [
        FragmentKind::Jsx,
        FragmentKind::Tsx,
        FragmentKind::Css,
        FragmentKind::CssAdvanced,
        FragmentKind::TypeScript,
        FragmentKind::Html,
    ];

    /// Priority order used when picking the default tab. CssAdvanced is
    /// deliberately absent; it only wins as a last-resort fallback.
    pub(crate) const DEFAULT_PRIORITY: [FragmentKind; 5] = [
        FragmentKind::Tsx,
        FragmentKind::Jsx,
        FragmentKind::Css,
        FragmentKind::TypeScript,
        FragmentKind::Html,
    ];

    /// Stable string identifier used at the external (UI/CLI) boundary
    pub fn id(&self) -> &'static str {
        match self {
            FragmentKind::Jsx => "jsx",
            FragmentKind::Tsx => "tsx",
            FragmentKind::Css => "css",
            FragmentKind::CssAdvanced => "cssAdvanced",
            FragmentKind::TypeScript => "typescript",
            FragmentKind::Html => "html",
        }
    }

    /// Human-readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            FragmentKind::Jsx => "JSX",
            FragmentKind::Tsx => "TSX",
            FragmentKind::Css => "CSS",
            FragmentKind::CssAdvanced => "Advanced CSS",
            FragmentKind::TypeScript => "TypeScript",
            FragmentKind::Html => "HTML",
        }
    }

    /// Syntax-highlighting language tag
    pub fn language(&self) -> &'static str {
        match self {
            FragmentKind::Jsx => "jsx",
            FragmentKind::Tsx => "tsx",
            FragmentKind::Css | FragmentKind::CssAdvanced => "css",
            FragmentKind::TypeScript => "typescript",
            FragmentKind::Html => "html",
        }
    }

    /// File extension used when exporting, including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            FragmentKind::Jsx => ".jsx",
            FragmentKind::Tsx => ".tsx",
            FragmentKind::Css => ".css",
            FragmentKind::CssAdvanced => ".advanced.css",
            FragmentKind::TypeScript => ".d.ts",
            FragmentKind::Html => ".html",
        }
    }

    /// Parse an external string identifier. `None` is the "unknown tab"
    /// case downstream operations degrade on rather than fail.
    pub fn from_id(id: &str) -> Option<FragmentKind> {
        match id {
            "jsx" => Some(FragmentKind::Jsx),
            "tsx" => Some(FragmentKind::Tsx),
            "css" => Some(FragmentKind::Css),
            "cssAdvanced" => Some(FragmentKind::CssAdvanced),
            "typescript" => Some(FragmentKind::TypeScript),
            "html" => Some(FragmentKind::Html),
            _ => None,
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
