//! Declaration kinds recorded for every suite, test and hook.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Plain, `.skip` or `.only` flavour of a suite or test entry point.
///
/// Discovery records the variant but never filters on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Plain,
    Skip,
    Only,
}

/// Lifecycle hook entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HookKind {
    Before,
    After,
    BeforeEach,
    AfterEach,
}

impl HookKind {
    /// The hook's DSL name, e.g. `beforeEach`.
    pub fn as_str(self) -> &'static str {
        match self {
            HookKind::Before => "before",
            HookKind::After => "after",
            HookKind::BeforeEach => "beforeEach",
            HookKind::AfterEach => "afterEach",
        }
    }

    /// Synthetic tree name for a hook: the hook name behind a `:` so it can
    /// never collide with a sibling suite or test.
    pub fn node_name(self) -> String {
        format!(":{}", self.as_str())
    }
}

/// Kind tag attached to every node of the extended tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationKind {
    #[serde(rename = "suite")]
    Suite,
    #[serde(rename = "suite-skip")]
    SuiteSkip,
    #[serde(rename = "suite-only")]
    SuiteOnly,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "test-skip")]
    TestSkip,
    #[serde(rename = "test-only")]
    TestOnly,
    #[serde(rename = "before")]
    Before,
    #[serde(rename = "after")]
    After,
    #[serde(rename = "beforeEach")]
    BeforeEach,
    #[serde(rename = "afterEach")]
    AfterEach,
}

impl DeclarationKind {
    pub fn suite(variant: Variant) -> Self {
        match variant {
            Variant::Plain => DeclarationKind::Suite,
            Variant::Skip => DeclarationKind::SuiteSkip,
            Variant::Only => DeclarationKind::SuiteOnly,
        }
    }

    pub fn test(variant: Variant) -> Self {
        match variant {
            Variant::Plain => DeclarationKind::Test,
            Variant::Skip => DeclarationKind::TestSkip,
            Variant::Only => DeclarationKind::TestOnly,
        }
    }

    /// True for the three suite variants.
    pub fn is_suite(self) -> bool {
        matches!(
            self,
            DeclarationKind::Suite | DeclarationKind::SuiteSkip | DeclarationKind::SuiteOnly
        )
    }

    /// True for tests and hooks, i.e. declarations whose body never nests.
    pub fn is_leaf(self) -> bool {
        !self.is_suite()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Suite => "suite",
            DeclarationKind::SuiteSkip => "suite-skip",
            DeclarationKind::SuiteOnly => "suite-only",
            DeclarationKind::Test => "test",
            DeclarationKind::TestSkip => "test-skip",
            DeclarationKind::TestOnly => "test-only",
            DeclarationKind::Before => "before",
            DeclarationKind::After => "after",
            DeclarationKind::BeforeEach => "beforeEach",
            DeclarationKind::AfterEach => "afterEach",
        }
    }
}

impl From<HookKind> for DeclarationKind {
    fn from(hook: HookKind) -> Self {
        match hook {
            HookKind::Before => DeclarationKind::Before,
            HookKind::After => DeclarationKind::After,
            HookKind::BeforeEach => DeclarationKind::BeforeEach,
            HookKind::AfterEach => DeclarationKind::AfterEach,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
