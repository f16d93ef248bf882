#[cfg(test)]
mod tests {
    use crate::cli::{Cli, UiArg};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["testmap"]).unwrap();
        assert_eq!(cli.root, None);
        assert!(cli.extensions.is_empty());
        assert!(!cli.no_recursive);
        assert_eq!(cli.ui, None);
        assert!(!cli.compact);
        assert!(!cli.verbose && !cli.quiet && !cli.no_color);
    }

    #[test]
    fn test_positional_root_and_flags() {
        let cli = Cli::try_parse_from([
            "testmap",
            "spec/unit",
            "-e",
            "js",
            "--extension",
            "mjs,cjs",
            "--no-recursive",
            "--ui",
            "tdd",
            "--compact",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("spec/unit")));
        assert_eq!(cli.extensions, ["js", "mjs", "cjs"]);
        assert!(cli.no_recursive);
        assert_eq!(cli.ui, Some(UiArg::Tdd));
        assert!(cli.compact);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["testmap", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_unknown_ui_is_rejected() {
        assert!(Cli::try_parse_from(["testmap", "--ui", "qunit"]).is_err());
    }

    #[test]
    fn test_ui_enum_values() {
        use clap::ValueEnum;

        let values: Vec<_> = UiArg::value_variants()
            .iter()
            .map(|v| v.to_possible_value().unwrap().get_name().to_string())
            .collect();
        assert_eq!(values, vec!["bdd", "tdd"]);
    }

    #[test]
    fn test_help_is_a_display_request() {
        let err = Cli::try_parse_from(["testmap", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
