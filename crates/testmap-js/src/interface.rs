//! Mocha interface vocabularies.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use testmap_core::{HookKind, Variant};

/// Which mocha UI the test files are written against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interface {
    /// `describe` / `it` / `before` ...
    #[default]
    Bdd,
    /// `suite` / `test` / `suiteSetup` ...
    Tdd,
}

/// What a recognised callee declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Suite(Variant),
    Test(Variant),
    Hook(HookKind),
}

impl Interface {
    /// Classify `callee` or `callee.modifier`.
    ///
    /// `modifier` is the property of a member call such as `it.only`. Only
    /// `skip` and `only` are accepted, and only on plain suite/test names.
    pub fn classify(self, callee: &str, modifier: Option<&str>) -> Option<Entry> {
        let entry = match self {
            Interface::Bdd => bdd(callee),
            Interface::Tdd => tdd(callee),
        }?;

        match (entry, modifier) {
            (entry, None) => Some(entry),
            (Entry::Suite(Variant::Plain), Some(modifier)) => variant(modifier).map(Entry::Suite),
            (Entry::Test(Variant::Plain), Some(modifier)) => variant(modifier).map(Entry::Test),
            _ => None,
        }
    }
}

fn bdd(callee: &str) -> Option<Entry> {
    let entry = match callee {
        "describe" | "context" => Entry::Suite(Variant::Plain),
        "xdescribe" | "xcontext" => Entry::Suite(Variant::Skip),
        "it" | "specify" => Entry::Test(Variant::Plain),
        "xit" | "xspecify" => Entry::Test(Variant::Skip),
        "before" => Entry::Hook(HookKind::Before),
        "after" => Entry::Hook(HookKind::After),
        "beforeEach" => Entry::Hook(HookKind::BeforeEach),
        "afterEach" => Entry::Hook(HookKind::AfterEach),
        _ => return None,
    };
    Some(entry)
}

fn tdd(callee: &str) -> Option<Entry> {
    let entry = match callee {
        "suite" => Entry::Suite(Variant::Plain),
        "test" => Entry::Test(Variant::Plain),
        "suiteSetup" => Entry::Hook(HookKind::Before),
        "suiteTeardown" => Entry::Hook(HookKind::After),
        "setup" => Entry::Hook(HookKind::BeforeEach),
        "teardown" => Entry::Hook(HookKind::AfterEach),
        _ => return None,
    };
    Some(entry)
}

fn variant(modifier: &str) -> Option<Variant> {
    match modifier {
        "skip" => Some(Variant::Skip),
        "only" => Some(Variant::Only),
        _ => None,
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interface::Bdd => f.write_str("bdd"),
            Interface::Tdd => f.write_str("tdd"),
        }
    }
}

impl FromStr for Interface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bdd" => Ok(Interface::Bdd),
            "tdd" => Ok(Interface::Tdd),
            other => Err(format!("unknown interface '{other}' (expected 'bdd' or 'tdd')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bdd_aliases() {
        let ui = Interface::Bdd;
        assert_eq!(ui.classify("context", None), Some(Entry::Suite(Variant::Plain)));
        assert_eq!(ui.classify("xit", None), Some(Entry::Test(Variant::Skip)));
        assert_eq!(ui.classify("specify", Some("only")), Some(Entry::Test(Variant::Only)));
        assert_eq!(ui.classify("beforeEach", None), Some(Entry::Hook(HookKind::BeforeEach)));
    }

    #[test]
    fn test_modifiers_only_on_plain_entries() {
        let ui = Interface::Bdd;
        assert_eq!(ui.classify("describe", Some("skip")), Some(Entry::Suite(Variant::Skip)));
        assert_eq!(ui.classify("xdescribe", Some("only")), None);
        assert_eq!(ui.classify("before", Some("skip")), None);
        assert_eq!(ui.classify("it", Some("retries")), None);
    }

    #[test]
    fn test_tdd_is_separate_vocabulary() {
        assert_eq!(Interface::Bdd.classify("suite", None), None);
        assert_eq!(Interface::Tdd.classify("describe", None), None);
        assert_eq!(
            Interface::Tdd.classify("suiteSetup", None),
            Some(Entry::Hook(HookKind::Before))
        );
        assert_eq!(
            Interface::Tdd.classify("test", Some("skip")),
            Some(Entry::Test(Variant::Skip))
        );
    }

    #[test]
    fn test_parse_interface() {
        assert_eq!("TDD".parse::<Interface>(), Ok(Interface::Tdd));
        assert!("qunit".parse::<Interface>().is_err());
    }
}
