//! Declaration-site resolution.
//!
//! Every recorded declaration carries the file and line of the user code that
//! invoked the DSL entry point. Loaders hand the recorder a [`CallSite`]: a
//! structured stack when they have one, raw V8-style stack text when that is
//! all the host exposes. [`SiteResolver`] turns either into a workspace-relative
//! [`SourceLocation`].
//!
//! Resolution never fails. Any capture or parse problem degrades to
//! [`SourceLocation::unknown`] so that losing provenance can never abort a run.

use regex::Regex;
use std::fmt;
use std::path::{MAIN_SEPARATOR, Path};
use std::sync::LazyLock;

/// Frame with a function name: `at describe (/abs/test/a.js:3:1)`.
static NAMED_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*at (?:async )?.+? \((.+):(\d+):(\d+)\)$").expect("valid frame pattern")
});

/// Anonymous frame: `at /abs/test/a.js:3:1`.
static BARE_FRAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*at (?:async )?(.+):(\d+):(\d+)$").expect("valid frame pattern")
});

const UNKNOWN_FILE: &str = "unknown";
const FILE_URL_PREFIX: &str = "file://";

/// Where a declaration was made.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    /// Workspace-relative path, or `"unknown"`.
    pub file: String,
    /// 1-based line, or 0 when unknown.
    pub line: u32,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Sentinel location used whenever provenance cannot be recovered.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_FILE, 0)
    }

    pub fn is_unknown(&self) -> bool {
        self.line == 0 && self.file == UNKNOWN_FILE
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// One entry of a structured call stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub function: Option<String>,
    /// Path or `file://` URL of the code running in this frame.
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Frame {
    pub fn new(function: Option<String>, file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            function,
            file: file.into(),
            line,
            column,
        }
    }

    fn is_internal(&self) -> bool {
        is_internal_file(&self.file)
    }
}

impl From<&std::panic::Location<'_>> for Frame {
    fn from(location: &std::panic::Location<'_>) -> Self {
        Frame::new(None, location.file(), location.line(), location.column())
    }
}

/// Call stack captured at a DSL entry point.
///
/// Stacks are anchored at the recording function: the first usable frame is
/// the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallSite {
    /// Innermost frame first.
    Frames(Vec<Frame>),
    /// Stack text as printed by V8 (`Error.stack`), header line included.
    Trace(String),
    /// Nothing could be captured.
    Unknown,
}

impl CallSite {
    /// Capture the caller of a `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Self {
        CallSite::Frames(vec![Frame::from(std::panic::Location::caller())])
    }
}

/// Maps call sites to workspace-relative source locations.
#[derive(Debug, Clone, Default)]
pub struct SiteResolver {
    cwd_prefix: Option<String>,
}

impl SiteResolver {
    /// Resolver that reports paths relative to `cwd`.
    pub fn new(cwd: impl AsRef<Path>) -> Self {
        let cwd = cwd.as_ref().to_string_lossy();
        let cwd_prefix = if cwd.is_empty() {
            None
        } else {
            Some(format!(
                "{}{}",
                cwd.trim_end_matches(MAIN_SEPARATOR),
                MAIN_SEPARATOR
            ))
        };
        Self { cwd_prefix }
    }

    /// Resolver that leaves paths untouched apart from URL stripping.
    pub fn absolute() -> Self {
        Self { cwd_prefix: None }
    }

    pub fn resolve(&self, site: &CallSite) -> SourceLocation {
        let resolved = match site {
            CallSite::Frames(frames) => frames
                .iter()
                .find(|frame| !frame.is_internal())
                .map(|frame| (frame.file.as_str(), frame.line)),
            CallSite::Trace(text) => parse_trace(text),
            CallSite::Unknown => None,
        };

        match resolved {
            Some((file, line)) if line > 0 && !file.is_empty() => {
                SourceLocation::new(self.relativize(file), line)
            }
            _ => SourceLocation::unknown(),
        }
    }

    fn relativize(&self, file: &str) -> String {
        let file = file.strip_prefix(FILE_URL_PREFIX).unwrap_or(file);
        match &self.cwd_prefix {
            Some(prefix) => file.strip_prefix(prefix.as_str()).unwrap_or(file),
            None => file,
        }
        .to_string()
    }
}

/// First user frame of a V8 stack trace as `(file, line)`.
fn parse_trace(text: &str) -> Option<(&str, u32)> {
    text.lines()
        .filter(|line| line.trim_start().starts_with("at "))
        .filter_map(parse_frame_line)
        .find(|(file, _)| !is_internal_file(file))
}

/// Parse one `at ...` line of a V8 stack trace.
pub fn parse_frame_line(line: &str) -> Option<(&str, u32)> {
    let captures = NAMED_FRAME
        .captures(line)
        .or_else(|| BARE_FRAME.captures(line))?;
    let file = captures.get(1)?.as_str();
    let line = captures.get(2)?.as_str().parse().ok()?;
    Some((file, line))
}

fn is_internal_file(file: &str) -> bool {
    file.starts_with("node:") || file.starts_with("internal/") || file == "native"
}
