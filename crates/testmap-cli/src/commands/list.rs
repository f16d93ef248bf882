use std::io::Write;
use std::path::PathBuf;

use testmap_js::find_suites_and_tests_with;
use testmap_js::testmap_core::Inventory;
use tracing::debug;

use crate::cli::Cli;
use crate::config::TestmapConfig;
use crate::error::{Result, ResultExt};

/// Discover the configured tests and print the inventory to stdout.
pub async fn list_execute(args: Cli) -> Result<()> {
    let cwd = resolve_cwd(args.cwd.as_ref())?;
    let config = TestmapConfig::load(&args, &cwd)?;
    debug!(?config, cwd = %cwd.display(), "resolved configuration");

    let options = config.discovery_options(&cwd);
    let inventory = find_suites_and_tests_with(&config.root, &options).await?;
    debug!(
        suites = inventory.suites.len(),
        tests = inventory.tests.len(),
        "discovery complete"
    );

    let output = render(&inventory, config.compact)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{output}")?;
    stdout.flush()?;
    Ok(())
}

/// Serialize an inventory, pretty-printed with two-space indentation unless
/// `compact`.
pub fn render(inventory: &Inventory, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(inventory)?
    } else {
        serde_json::to_string_pretty(inventory)?
    };
    Ok(json)
}

fn resolve_cwd(cwd: Option<&PathBuf>) -> Result<PathBuf> {
    let current = std::env::current_dir().context("Failed to read the working directory")?;
    Ok(match cwd {
        Some(dir) => path_clean::clean(current.join(dir)),
        None => current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pretty_and_compact() {
        let inventory = Inventory {
            suites: vec!["a".into()],
            tests: vec!["a.b".into()],
            ..Inventory::default()
        };
        let pretty = render(&inventory, false).unwrap();
        assert!(pretty.starts_with("{\n  \"suites\": [\n    \"a\"\n  ],"));
        assert!(pretty.contains("\"extendedTree\": {}"));

        let compact = render(&inventory, true).unwrap();
        assert_eq!(
            compact,
            r#"{"suites":["a"],"tests":["a.b"],"tree":{},"extendedTree":{}}"#
        );
    }

    #[test]
    fn test_relative_cwd_is_absolutized() {
        let resolved = resolve_cwd(Some(&PathBuf::from("sub/../other"))).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("other"));
    }
}
