//! The declaration DSL.
//!
//! [`Declarations`] is the capability set behind `describe`/`it`/hooks. A test
//! runner would implement it by executing bodies; discovery implements it with
//! [`Recorder`](crate::recorder::Recorder), which runs suite bodies (that is how
//! nesting is found) and never runs test or hook bodies.
//!
//! [`Suite`] is the surface handed to suite bodies. Loaders that know their
//! call sites use the `*_at` methods; Rust callers use the `#[track_caller]`
//! shorthands.
//!
//! ```
//! use testmap_core::{Discovery, SiteResolver};
//!
//! let mut discovery = Discovery::new(SiteResolver::absolute());
//! discovery
//!     .declare(|root| {
//!         root.describe("math", |s| {
//!             s.timeout(2_000);
//!             s.it("adds", || unreachable!("never run"));
//!             Ok(())
//!         })
//!     })
//!     .unwrap();
//! let inventory = discovery.finish();
//! assert_eq!(inventory.tests, ["math.adds"]);
//! ```

use crate::error::LoadError;
use crate::kind::{HookKind, Variant};
use crate::site::CallSite;

/// Body of a suite, run synchronously with the nested scope.
pub type SuiteBody<'b> = Box<dyn FnOnce(&mut Suite<'_>) -> Result<(), LoadError> + 'b>;

/// Body of a test or hook. Discovery never calls it.
pub type TestBody<'b> = Box<dyn FnOnce() + 'b>;

/// Box a closure as a [`SuiteBody`].
///
/// Going through a bound gives closures the higher-ranked signature the boxed
/// type needs.
pub fn suite_body<'b, F>(body: F) -> SuiteBody<'b>
where
    F: FnOnce(&mut Suite<'_>) -> Result<(), LoadError> + 'b,
{
    Box::new(body)
}

/// Suite, test and hook entry points.
pub trait Declarations {
    fn declare_suite(
        &mut self,
        name: &str,
        variant: Variant,
        site: CallSite,
        body: SuiteBody<'_>,
    ) -> Result<(), LoadError>;

    /// `body` is `None` for pending tests.
    fn declare_test(&mut self, name: &str, variant: Variant, site: CallSite, body: Option<TestBody<'_>>);

    fn declare_hook(&mut self, hook: HookKind, site: CallSite, body: Option<TestBody<'_>>);
}

/// Scope available inside a suite body (and at the top level of a file).
pub struct Suite<'d> {
    dsl: &'d mut dyn Declarations,
}

impl<'d> Suite<'d> {
    pub fn new(dsl: &'d mut dyn Declarations) -> Self {
        Self { dsl }
    }

    pub fn suite_at(
        &mut self,
        name: &str,
        variant: Variant,
        site: CallSite,
        body: SuiteBody<'_>,
    ) -> Result<(), LoadError> {
        self.dsl.declare_suite(name, variant, site, body)
    }

    pub fn test_at(&mut self, name: &str, variant: Variant, site: CallSite, body: Option<TestBody<'_>>) {
        self.dsl.declare_test(name, variant, site, body);
    }

    pub fn hook_at(&mut self, hook: HookKind, site: CallSite, body: Option<TestBody<'_>>) {
        self.dsl.declare_hook(hook, site, body);
    }

    // Per-suite configuration. Accepted and ignored.

    pub fn timeout(&mut self, _ms: u64) -> &mut Self {
        self
    }

    pub fn slow(&mut self, _ms: u64) -> &mut Self {
        self
    }

    pub fn retries(&mut self, _count: u32) -> &mut Self {
        self
    }

    #[track_caller]
    pub fn describe<F>(&mut self, name: &str, body: F) -> Result<(), LoadError>
    where
        F: FnOnce(&mut Suite<'_>) -> Result<(), LoadError>,
    {
        self.suite_at(name, Variant::Plain, CallSite::caller(), suite_body(body))
    }

    #[track_caller]
    pub fn describe_skip<F>(&mut self, name: &str, body: F) -> Result<(), LoadError>
    where
        F: FnOnce(&mut Suite<'_>) -> Result<(), LoadError>,
    {
        self.suite_at(name, Variant::Skip, CallSite::caller(), suite_body(body))
    }

    #[track_caller]
    pub fn describe_only<F>(&mut self, name: &str, body: F) -> Result<(), LoadError>
    where
        F: FnOnce(&mut Suite<'_>) -> Result<(), LoadError>,
    {
        self.suite_at(name, Variant::Only, CallSite::caller(), suite_body(body))
    }

    #[track_caller]
    pub fn it<F: FnOnce()>(&mut self, name: &str, body: F) {
        self.test_at(name, Variant::Plain, CallSite::caller(), Some(Box::new(body)));
    }

    #[track_caller]
    pub fn it_skip<F: FnOnce()>(&mut self, name: &str, body: F) {
        self.test_at(name, Variant::Skip, CallSite::caller(), Some(Box::new(body)));
    }

    #[track_caller]
    pub fn it_only<F: FnOnce()>(&mut self, name: &str, body: F) {
        self.test_at(name, Variant::Only, CallSite::caller(), Some(Box::new(body)));
    }

    #[track_caller]
    pub fn before<F: FnOnce()>(&mut self, body: F) {
        self.hook_at(HookKind::Before, CallSite::caller(), Some(Box::new(body)));
    }

    #[track_caller]
    pub fn after<F: FnOnce()>(&mut self, body: F) {
        self.hook_at(HookKind::After, CallSite::caller(), Some(Box::new(body)));
    }

    #[track_caller]
    pub fn before_each<F: FnOnce()>(&mut self, body: F) {
        self.hook_at(HookKind::BeforeEach, CallSite::caller(), Some(Box::new(body)));
    }

    #[track_caller]
    pub fn after_each<F: FnOnce()>(&mut self, body: F) {
        self.hook_at(HookKind::AfterEach, CallSite::caller(), Some(Box::new(body)));
    }
}
