//! Non-executing implementation of the declaration DSL.

use tracing::trace;

use crate::dsl::{Declarations, Suite, SuiteBody, TestBody};
use crate::error::LoadError;
use crate::finalize::Inventory;
use crate::kind::{DeclarationKind, HookKind, Variant};
use crate::route::Route;
use crate::site::{CallSite, SiteResolver};
use crate::tree::TreeAssembler;

/// Records declarations into a tree instead of running them.
///
/// One recorder is one discovery run; all state lives here rather than in
/// process globals, so independent runs cannot see each other.
#[derive(Debug, Default)]
pub struct Recorder {
    route: Route,
    assembler: TreeAssembler,
    resolver: SiteResolver,
}

impl Recorder {
    pub fn new(resolver: SiteResolver) -> Self {
        Self {
            route: Route::new(),
            assembler: TreeAssembler::new(),
            resolver,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn assembler(&self) -> &TreeAssembler {
        &self.assembler
    }

    /// Top-level scope for loading one file.
    pub fn scope(&mut self) -> Suite<'_> {
        Suite::new(self)
    }

    pub fn finish(self) -> Inventory {
        Inventory::from_assembler(self.assembler)
    }

    fn record(&mut self, name: &str, kind: DeclarationKind, site: &CallSite) {
        let location = self.resolver.resolve(site);
        trace!(declaration = name, %kind, %location, depth = self.route.depth(), "recorded declaration");
        self.assembler
            .insert(self.route.segments(), name, kind, location);
    }
}

impl Declarations for Recorder {
    fn declare_suite(
        &mut self,
        name: &str,
        variant: Variant,
        site: CallSite,
        body: SuiteBody<'_>,
    ) -> Result<(), LoadError> {
        self.record(name, DeclarationKind::suite(variant), &site);

        self.route.push(name);
        self.assembler.add_suite(self.route.suite_path());
        let result = body(&mut Suite::new(self));
        self.route.pop();
        result
    }

    fn declare_test(&mut self, name: &str, variant: Variant, site: CallSite, _body: Option<TestBody<'_>>) {
        self.record(name, DeclarationKind::test(variant), &site);
        self.assembler.add_test(self.route.leaf_path(name));
    }

    fn declare_hook(&mut self, hook: HookKind, site: CallSite, _body: Option<TestBody<'_>>) {
        self.record(&hook.node_name(), hook.into(), &site);
    }
}
