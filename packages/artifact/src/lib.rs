//! # Artifact - Content Model and Tab Resolution
//!
//! Assembles the exportable source bundle for one generation cycle.
//!
//! ## Purpose
//!
//! A generation cycle produces a [`ContentBag`]: zero or more code
//! fragments (JSX, TSX, CSS, advanced CSS, TypeScript typings, HTML)
//! derived from a design file, optionally extended with user-supplied
//! custom code via [`merge`]. The tab resolver then derives which
//! representations are presentable, what each is named on export, and
//! which one is active by default.
//!
//! ## Ownership
//!
//! A `ContentBag` is logically immutable after creation. Callers replace
//! it wholesale on every update; `merge` and every resolver operation
//! allocate fresh values and never alias or mutate their inputs. Nothing
//! here fails: absent fragments and unknown tab identifiers degrade to
//! documented fallbacks (empty content, `.txt` file name, hidden tab).
//!
//! ## Usage
//!
//! ```rust
//! use handoff_artifact::{default_tab, merge, visible_tabs, ContentBag, CustomCode};
//!
//! let mut design = ContentBag::new();
//! design.jsx = Some("const App = () => <div />;".to_string());
//!
//! let mut custom = CustomCode::default();
//! custom.css = ".app { margin: 0; }".to_string();
//!
//! let bag = merge(&design, &custom);
//! let tabs = visible_tabs(&bag, false);
//! let active = default_tab(&bag, false);
//! ```

pub mod bag;
pub mod fragment;
pub mod tabs;

pub use bag::*;
pub use fragment::*;
pub use tabs::*;
