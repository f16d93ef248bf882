//! # testmap-core
//!
//! Non-executing discovery engine for BDD-style test declarations.
//!
//! Test files declare suites, tests and hooks through a small DSL
//! (`describe`/`it`/`before`...). This crate swaps that DSL for a recorder:
//! suite bodies are run so that nesting can be observed, test and hook bodies
//! are never run, and every declaration is stored with its kind and the file
//! and line it came from.
//!
//! ## Architecture
//!
//! ```text
//!   loader (I/O, per file)
//!          │  DSL calls
//!          ▼
//!   ┌──────────────┐   resolve    ┌──────────────┐
//!   │   Recorder   │─────────────▶│ SiteResolver │
//!   │  (Route)     │              └──────────────┘
//!   └──────┬───────┘
//!          │ insert
//!          ▼
//!   ┌──────────────┐   finalize   ┌──────────────┐
//!   │ TreeAssembler│─────────────▶│  Inventory   │
//!   └──────────────┘              └──────────────┘
//! ```
//!
//! This crate does no file I/O. Loaders implement [`ModuleLoader`]; the
//! JavaScript one lives in `testmap-js`.

pub mod dsl;
pub mod error;
pub mod finalize;
pub mod kind;
pub mod loader;
pub mod recorder;
pub mod route;
pub mod site;
pub mod tree;

pub use dsl::{Declarations, Suite, SuiteBody, TestBody, suite_body};
pub use error::{DiscoveryError, LoadError, Result};
pub use finalize::{ExtendedNode, ExtendedTree, Inventory, SimpleNode, SimpleTree};
pub use kind::{DeclarationKind, HookKind, Variant};
pub use loader::{Discovery, LoadForm, ModuleLoader};
pub use recorder::Recorder;
pub use route::Route;
pub use site::{CallSite, Frame, SiteResolver, SourceLocation};
pub use tree::{DeclarationNode, Tree, TreeAssembler};
