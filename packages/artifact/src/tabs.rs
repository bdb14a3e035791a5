use crate::bag::ContentBag;
use crate::fragment::FragmentKind;
use serde::Serialize;

/// One presentable view over a single fragment kind. Derived on demand
/// from a [`ContentBag`]; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDescriptor {
    pub kind: FragmentKind,
    pub label: &'static str,
    pub language: &'static str,
    pub extension: &'static str,
    pub content: String,
    pub visible: bool,
}

/// Line/word/character counts for a tab's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabStats {
    pub lines: usize,
    pub words: usize,
    pub characters: usize,
}

/// Capability gate: JSX and TSX are mutually exclusive on the
/// TypeScript flag, independent of content. Every other kind passes.
fn passes_capability_gate(kind: FragmentKind, has_typescript: bool) -> bool {
    match kind {
        FragmentKind::Jsx => !has_typescript,
        FragmentKind::Tsx => has_typescript,
        _ => true,
    }
}

/// Describe a single tab. `visible` applies the capability gate first,
/// then the content-presence gate.
pub fn describe(bag: &ContentBag, kind: FragmentKind, has_typescript: bool) -> TabDescriptor {
    TabDescriptor {
        kind,
        label: kind.label(),
        language: kind.language(),
        extension: kind.extension(),
        content: bag.get(kind).unwrap_or("").to_string(),
        visible: passes_capability_gate(kind, has_typescript) && bag.has_content(kind),
    }
}

/// All visible tabs in [`FragmentKind::ALL`] order. An empty result is a
/// legitimate terminal state, not an error.
pub fn visible_tabs(bag: &ContentBag, has_typescript: bool) -> Vec<TabDescriptor> {
    FragmentKind::ALL
        .into_iter()
        .map(|kind| describe(bag, kind, has_typescript))
        .filter(|tab| tab.visible)
        .collect()
}

/// Pick the default active tab: first hit in the fixed priority order
/// (TSX, JSX, CSS, TypeScript, HTML), then the first visible tab, then
/// `None` when nothing is visible.
pub fn default_tab(bag: &ContentBag, has_typescript: bool) -> Option<FragmentKind> {
    let visible = visible_tabs(bag, has_typescript);
    for kind in FragmentKind::DEFAULT_PRIORITY {
        if visible.iter().any(|tab| tab.kind == kind) {
            return Some(kind);
        }
    }
    visible.first().map(|tab| tab.kind)
}

/// Fragment text for a tab, or `""` for an unknown or absent tab
pub fn content(bag: &ContentBag, kind: Option<FragmentKind>) -> &str {
    kind.and_then(|kind| bag.get(kind)).unwrap_or("")
}

/// Export file name for a tab: `component_name` plus the kind's fixed
/// extension, with `.txt` as the unknown-kind fallback
pub fn file_name(kind: Option<FragmentKind>, component_name: &str) -> String {
    match kind {
        Some(kind) => format!("{}{}", component_name, kind.extension()),
        None => format!("{}.txt", component_name),
    }
}

/// True iff the trimmed content for this kind is empty
pub fn is_empty(bag: &ContentBag, kind: FragmentKind) -> bool {
    !bag.has_content(kind)
}

/// Count lines, words and characters for display next to a tab.
///
/// Lines are newline-delimited segments, so even empty content counts as
/// one line. Characters include whitespace. Words are whitespace-split
/// non-empty tokens.
pub fn stats(text: &str) -> TabStats {
    TabStats {
        lines: text.split('\n').count(),
        words: text.split_whitespace().count(),
        characters: text.chars().count(),
    }
}
