//! Tests for command-line interface parsing and path derivation

#[cfg(test)]
mod tests {
    use clap::Parser;
    use quadmosaic::io::cli::{Cli, derived_path};
    use quadmosaic::io::configuration::{
        DEFAULT_AREA_EXPONENT, DEFAULT_MIN_DIMENSION, DEFAULT_STEP_BUDGET,
    };
    use std::path::{Path, PathBuf};

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_parse_with_defaults() {
        let cli = Cli::try_parse_from(["quadmosaic", "input.png"]).expect("Parse should succeed");

        assert_eq!(cli.target, PathBuf::from("input.png"));
        assert_eq!(cli.iterations, DEFAULT_STEP_BUDGET);
        assert_eq!(cli.min_size, DEFAULT_MIN_DIMENSION);
        assert!((cli.area_power - DEFAULT_AREA_EXPONENT).abs() < f64::EPSILON);
        assert!(!cli.visualize);
        assert!(!cli.outline);
        assert!(!cli.quiet);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    #[test]
    fn test_parse_with_all_flags() {
        let cli = Cli::try_parse_from([
            "quadmosaic",
            "photos",
            "--iterations",
            "250",
            "--min-size",
            "8",
            "--area-power",
            "0.3",
            "--visualize",
            "--outline",
            "--quiet",
            "--no-skip",
        ])
        .expect("Parse should succeed");

        assert_eq!(cli.iterations, 250);
        assert_eq!(cli.min_size, 8);
        assert!((cli.area_power - 0.3).abs() < f64::EPSILON);
        assert!(cli.visualize);
        assert!(cli.outline);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    #[test]
    fn test_missing_target_fails_parsing() {
        assert!(Cli::try_parse_from(["quadmosaic"]).is_err());
    }

    // Tests that flags map one-to-one onto the engine configuration
    #[test]
    fn test_engine_config_mapping() {
        let cli = Cli::try_parse_from(["quadmosaic", "input.png", "-i", "42", "-m", "2"])
            .expect("Parse should succeed");

        let config = cli.engine_config();
        assert_eq!(config.step_budget, 42);
        assert_eq!(config.minimum_dimension, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_path_appends_suffix_in_place() {
        assert_eq!(
            derived_path(Path::new("photos/input.png"), "_mosaic", "png"),
            PathBuf::from("photos/input_mosaic.png")
        );
        assert_eq!(
            derived_path(Path::new("input.png"), "_steps", "gif"),
            PathBuf::from("input_steps.gif")
        );
    }
}
