//! End-to-end scenarios: one generation cycle from design fragments plus
//! custom code through merge and tab resolution.

use handoff_artifact::{
    content, default_tab, file_name, merge, stats, visible_tabs, ContentBag, CustomCode,
    FragmentKind,
};

fn design_fragments() -> ContentBag {
    let mut bag = ContentBag::new();
    bag.jsx = Some("const A = () => <div/>;".to_string());
    bag.css = Some("".to_string());
    bag
}

fn custom_note() -> CustomCode {
    CustomCode {
        jsx: "// note".to_string(),
        css: "".to_string(),
        css_advanced: "".to_string(),
    }
}

#[test]
fn cycle_without_typescript_shows_only_jsx() {
    let bag = merge(&design_fragments(), &custom_note());

    let tabs = visible_tabs(&bag, false);
    let kinds: Vec<_> = tabs.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![FragmentKind::Jsx]);

    assert_eq!(default_tab(&bag, false), Some(FragmentKind::Jsx));
    assert_eq!(
        content(&bag, Some(FragmentKind::Jsx)),
        "const A = () => <div/>;\n\n// note"
    );

    // the empty css fragment never becomes a tab
    assert!(!kinds.contains(&FragmentKind::Css));
}

#[test]
fn cycle_with_typescript_prefers_tsx() {
    let mut design = design_fragments();
    design.tsx = Some("const A = (): JSX.Element => <div/>;".to_string());

    let bag = merge(&design, &custom_note());
    let kinds: Vec<_> = visible_tabs(&bag, true).iter().map(|t| t.kind).collect();

    assert!(kinds.contains(&FragmentKind::Tsx));
    assert!(!kinds.contains(&FragmentKind::Jsx));
    assert_eq!(default_tab(&bag, true), Some(FragmentKind::Tsx));
}

#[test]
fn cycle_produces_export_names_and_stats() {
    let mut design = design_fragments();
    design.component_name = Some("Alert".to_string());
    design.css = Some(".alert { border: 1px solid; }".to_string());

    let bag = merge(&design, &CustomCode::default());
    let tabs = visible_tabs(&bag, false);

    for tab in &tabs {
        let name = file_name(Some(tab.kind), bag.component_name.as_deref().unwrap());
        assert!(name.starts_with("Alert."));

        let s = stats(&tab.content);
        assert!(s.lines >= 1);
        assert_eq!(s.characters, tab.content.chars().count());
    }
}

#[test]
fn replacing_custom_code_is_a_fresh_cycle() {
    let design = design_fragments();

    let first = merge(&design, &custom_note());
    let second = merge(
        &design,
        &CustomCode {
            jsx: "// revised".to_string(),
            ..Default::default()
        },
    );

    // each merge derives from the pristine design bag, not the prior merge
    assert_eq!(
        first.jsx.as_deref(),
        Some("const A = () => <div/>;\n\n// note")
    );
    assert_eq!(
        second.jsx.as_deref(),
        Some("const A = () => <div/>;\n\n// revised")
    );
}
