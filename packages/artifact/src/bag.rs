use crate::fragment::FragmentKind;
use serde::{Deserialize, Serialize};

/// Code fragments produced by one generation cycle, plus optional
/// metadata. One field per [`FragmentKind`]; `None` and whitespace-only
/// text both mean "not produced".
///
/// Logically immutable after creation: updates replace the whole value,
/// so readers never observe a partially edited bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentBag {
    pub jsx: Option<String>,
    pub tsx: Option<String>,
    pub css: Option<String>,
    pub css_advanced: Option<String>,
    pub typescript: Option<String>,
    pub html: Option<String>,

    /// Component name used for export file names; callers default it
    pub component_name: Option<String>,
}

impl ContentBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: FragmentKind) -> Option<&str> {
        match kind {
            FragmentKind::Jsx => self.jsx.as_deref(),
            FragmentKind::Tsx => self.tsx.as_deref(),
            FragmentKind::Css => self.css.as_deref(),
            FragmentKind::CssAdvanced => self.css_advanced.as_deref(),
            FragmentKind::TypeScript => self.typescript.as_deref(),
            FragmentKind::Html => self.html.as_deref(),
        }
    }

    pub fn set(&mut self, kind: FragmentKind, text: impl Into<String>) {
        let slot = match kind {
            FragmentKind::Jsx => &mut self.jsx,
            FragmentKind::Tsx => &mut self.tsx,
            FragmentKind::Css => &mut self.css,
            FragmentKind::CssAdvanced => &mut self.css_advanced,
            FragmentKind::TypeScript => &mut self.typescript,
            FragmentKind::Html => &mut self.html,
        };
        *slot = Some(text.into());
    }

    /// True when the fragment exists and is non-empty after trimming
    pub fn has_content(&self, kind: FragmentKind) -> bool {
        self.get(kind).is_some_and(|text| !text.trim().is_empty())
    }
}

/// User-editable fragments, limited to the three kinds the custom-code
/// form exposes. Owned by the UI and replaced wholesale on every edit,
/// never patched field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomCode {
    pub jsx: String,
    pub css: String,
    pub css_advanced: String,
}

impl CustomCode {
    pub fn is_empty(&self) -> bool {
        self.jsx.trim().is_empty()
            && self.css.trim().is_empty()
            && self.css_advanced.trim().is_empty()
    }
}

/// Merge design-derived fragments with user custom code into a fresh bag.
///
/// Custom JSX/CSS/advanced-CSS text is appended after the corresponding
/// design fragment, separated by one blank line, when non-empty after
/// trimming. Every other field passes through unchanged. The fragment
/// text is treated as opaque; no grammar is checked here.
pub fn merge(design: &ContentBag, custom: &CustomCode) -> ContentBag {
    let mut merged = design.clone();
    merged.jsx = append_fragment(design.get(FragmentKind::Jsx), &custom.jsx);
    merged.css = append_fragment(design.get(FragmentKind::Css), &custom.css);
    merged.css_advanced = append_fragment(design.get(FragmentKind::CssAdvanced), &custom.css_advanced);
    merged
}

fn append_fragment(design: Option<&str>, custom: &str) -> Option<String> {
    if custom.trim().is_empty() {
        return design.map(str::to_string);
    }
    match design {
        // A blank design fragment contributes nothing; the custom text
        // stands alone with no leading separator.
        Some(text) if !text.trim().is_empty() => Some(format!("{}\n\n{}", text, custom)),
        _ => Some(custom.to_string()),
    }
}
