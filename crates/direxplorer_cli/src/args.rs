use std::path::PathBuf;

use clap::Parser;

use direxplorer_base::ExplorerResult;
use direxplorer_engine::{ExplorerConfig, load_config, split_patterns};

/// Configuration file picked up from the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "direxplorer.toml";

/// Depth-first directory explorer: lists directories and the files matching the given patterns.
#[derive(Debug, Parser)]
#[command(name = "direxplorer", version)]
pub struct Args {
    /// Directory where the search starts [default: .]
    pub path: Option<String>,

    /// File name patterns, comma separated, e.g. "*.h,*.cpp" [default: *.*]
    #[arg(short, long, value_name = "LIST")]
    pub patterns: Vec<String>,

    /// Walk the directory tree recursively
    #[arg(short = 's', long)]
    pub recurse: bool,

    /// Only report directories containing at least one matching file
    #[arg(short = 'e', long)]
    pub hide_empty: bool,

    /// Once the item limit is reached, still show the rest of the current directory
    #[arg(short = 'a', long)]
    pub show_all: bool,

    /// Maximum number of files to show, 0 for no limit
    #[arg(short = 'n', long, value_name = "N")]
    pub max_items: Option<usize>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log what the explorer is doing to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(|| {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            default.is_file().then_some(default)
        })
    }

    /// Load the configuration file, if any, and layer the command line on top.
    ///
    /// The merged settings are validated, so patterns given with `-p` are checked
    /// before the search starts too.
    pub fn resolve_config(&self) -> ExplorerResult<ExplorerConfig> {
        let base = match self.config_path() {
            Some(path) => load_config(&path)?,
            None => ExplorerConfig::default(),
        };
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }

    /// Command line values win; flags can only switch options on.
    pub fn apply(&self, mut config: ExplorerConfig) -> ExplorerConfig {
        if let Some(path) = &self.path {
            config.path = path.clone();
        }
        let patterns: Vec<String> = self
            .patterns
            .iter()
            .flat_map(|list| split_patterns(list))
            .collect();
        if !patterns.is_empty() {
            config.patterns = patterns;
        }
        config.recurse |= self.recurse;
        config.hide_empty_directories |= self.hide_empty;
        config.show_all_in_current_directory |= self.show_all;
        if let Some(max_items) = self.max_items {
            config.max_items = max_items;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use direxplorer_base::ErrorKind;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("direxplorer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).apply(ExplorerConfig::default());
        assert_eq!(config, ExplorerConfig::default());
    }

    #[test]
    fn test_all_options() {
        let config = parse(&[
            "src", "-p", "*.h,*.cpp", "-p", "*.rs", "-s", "-e", "-a", "-n", "10",
        ])
        .apply(ExplorerConfig::default());

        assert_eq!(config.path, "src");
        assert_eq!(config.patterns, ["*.h", "*.cpp", "*.rs"]);
        assert!(config.recurse);
        assert!(config.hide_empty_directories);
        assert!(config.show_all_in_current_directory);
        assert_eq!(config.max_items, 10);
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file = ExplorerConfig {
            path: "from_file".to_string(),
            patterns: vec!["*.md".to_string()],
            recurse: true,
            max_items: 7,
            ..Default::default()
        };
        let config = parse(&["-p", "*.txt", "--max-items", "0"]).apply(file);

        assert_eq!(config.path, "from_file");
        assert_eq!(config.patterns, ["*.txt"]);
        assert!(config.recurse);
        assert_eq!(config.max_items, 0);
    }

    #[test]
    fn test_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "patterns = [\"*.rs\"]\nhide_empty_directories = true\n").unwrap();

        let config = parse(&["-c", path.to_str().unwrap(), "-s"])
            .resolve_config()
            .unwrap();
        assert_eq!(config.patterns, ["*.rs"]);
        assert!(config.hide_empty_directories);
        assert!(config.recurse);
    }

    #[test]
    fn test_missing_explicit_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(
            parse(&["--config", path.to_str().unwrap()])
                .resolve_config()
                .is_err()
        );
    }

    #[test]
    fn test_invalid_pattern_rejected_before_search() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "recurse = true\n").unwrap();

        let err = parse(&["-c", path.to_str().unwrap(), "-p", "*.rs,[x"])
            .resolve_config()
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidPattern { pattern, .. } if pattern == "[x"
        ));
    }

    #[test]
    fn test_negative_limit_rejected() {
        assert!(Args::try_parse_from(["direxplorer", "-n", "-3"]).is_err());
    }
}
