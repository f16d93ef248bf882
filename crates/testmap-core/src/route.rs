//! Stack of currently open suites.

/// Names of the suites whose bodies are executing, outermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    segments: Vec<String>,
}

impl Route {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a suite body.
    pub fn push(&mut self, name: impl Into<String>) {
        self.segments.push(name.into());
    }

    /// Leave the innermost suite body.
    pub fn pop(&mut self) -> Option<String> {
        self.segments.pop()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Dotted path of the innermost open suite.
    pub fn suite_path(&self) -> String {
        self.segments.join(".")
    }

    /// Dotted path of a leaf declared at the current depth.
    ///
    /// A single leading dot (or, failing that, a single trailing dot) is
    /// stripped, so top-level leaves are named by themselves.
    pub fn leaf_path(&self, name: &str) -> String {
        let joined = format!("{}.{}", self.suite_path(), name);
        if let Some(stripped) = joined.strip_prefix('.') {
            stripped.to_string()
        } else if let Some(stripped) = joined.strip_suffix('.') {
            stripped.to_string()
        } else {
            joined
        }
    }
}
