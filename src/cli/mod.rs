pub mod completions;
pub mod discover;
pub mod export;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::{FigmaClient, DEFAULT_API_BASE};
use crate::discovery::DiscoveryOptions;
use crate::error::{FigsliceError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, Printer};

/// figslice - Export Figma slices to image files
#[derive(Parser, Debug)]
#[command(name = "figslice")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print request details and resolved settings
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render slices and write them as images
    Export(export::ExportArgs),

    /// Find slices in the document and print them as JSON
    Discover(discover::DiscoverArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Export(_) => "export",
            Commands::Discover(_) => "discover",
            Commands::Completions(_) => "completions",
        }
    }
}

/// Access token, file key and manifest selection.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Figma personal access token
    #[arg(long, env = "FIGMA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Read the access token from the first line of stdin
    #[arg(long)]
    pub token_stdin: bool,

    /// Figma file key
    #[arg(long = "file", env = "FIGMA_FILE_KEY")]
    pub file_key: Option<String>,

    /// Figma API root
    #[arg(long, env = "FIGMA_API_BASE")]
    pub api_base: Option<String>,

    /// Project manifest (default: ./figslice.yaml when present)
    #[arg(long, env = "FIGSLICE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Everything a command needs to reach the file.
#[derive(Debug)]
pub struct Connection {
    pub client: FigmaClient,
    pub file_key: String,
    pub manifest: Manifest,
}

impl ConnectionArgs {
    /// Load the manifest and check that a token and file key are available.
    pub async fn connect(&self, printer: &Printer) -> Result<Connection> {
        let cwd = std::env::current_dir()?;
        let manifest = match Manifest::locate(self.config.as_deref(), &cwd)? {
            Some((path, manifest)) => {
                printer.verbose("Manifest", &display_path(&path));
                manifest
            }
            None => Manifest::default(),
        };

        let token = self.resolve_token().await?;
        let file_key = resolve_file_key(self.file_key.as_deref(), &manifest)?;

        let base = self
            .api_base
            .clone()
            .or_else(|| manifest.api_base.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        printer.verbose("API", &base);

        Ok(Connection {
            client: FigmaClient::with_base(token, base)?,
            file_key,
            manifest,
        })
    }

    async fn resolve_token(&self) -> Result<String> {
        let token = if self.token_stdin {
            let mut line = String::new();
            BufReader::new(tokio::io::stdin())
                .read_line(&mut line)
                .await?;
            Some(line.trim().to_string())
        } else {
            self.token.clone()
        };

        token.filter(|t| !t.is_empty()).ok_or_else(|| FigsliceError::Usage {
            message: "Missing FIGMA_TOKEN".to_string(),
            help: Some("Use --token, --token-stdin or set FIGMA_TOKEN".to_string()),
        })
    }
}

fn resolve_file_key(flag: Option<&str>, manifest: &Manifest) -> Result<String> {
    flag.or(manifest.file.as_deref())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .ok_or_else(|| FigsliceError::Usage {
            message: "Missing FIGMA_FILE_KEY".to_string(),
            help: Some(
                "Use --file, set FIGMA_FILE_KEY or add `file:` to figslice.yaml".to_string(),
            ),
        })
}

/// Discovery patterns.
#[derive(Args, Debug, Clone, Default)]
pub struct PatternArgs {
    /// Only walk pages whose name matches this regex
    #[arg(long, env = "FIGMA_PAGE_PATTERN")]
    pub page_pattern: Option<String>,

    /// Select nodes whose name matches this regex instead of nodes with export settings
    #[arg(long, env = "FIGMA_NAME_PATTERN")]
    pub name_pattern: Option<String>,
}

impl PatternArgs {
    /// Merge with manifest defaults.
    pub fn options(&self, manifest: &Manifest) -> DiscoveryOptions {
        DiscoveryOptions {
            page_pattern: self
                .page_pattern
                .clone()
                .or_else(|| manifest.page_pattern.clone()),
            name_pattern: self
                .name_pattern
                .clone()
                .or_else(|| manifest.name_pattern.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_file_key_flag_wins() {
        let manifest = Manifest {
            file: Some("FROM_MANIFEST".to_string()),
            ..Default::default()
        };
        assert_eq!(resolve_file_key(Some("FLAG"), &manifest).unwrap(), "FLAG");
        assert_eq!(resolve_file_key(None, &manifest).unwrap(), "FROM_MANIFEST");
    }

    #[test]
    fn test_missing_file_key_is_usage_error() {
        let err = resolve_file_key(None, &Manifest::default()).unwrap_err();
        assert!(err.is_usage());
        assert!(resolve_file_key(Some(""), &Manifest::default()).is_err());
    }

    #[tokio::test]
    async fn test_missing_token_is_usage_error() {
        let args = ConnectionArgs::default();
        let err = args.resolve_token().await.unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("FIGMA_TOKEN"));
    }

    #[test]
    fn test_patterns_merge_with_manifest() {
        let manifest = Manifest {
            page_pattern: Some("^Icons$".to_string()),
            name_pattern: Some("^icon".to_string()),
            ..Default::default()
        };
        let args = PatternArgs {
            page_pattern: None,
            name_pattern: Some("^btn".to_string()),
        };

        let options = args.options(&manifest);
        assert_eq!(options.page_pattern.as_deref(), Some("^Icons$"));
        assert_eq!(options.name_pattern.as_deref(), Some("^btn"));
    }

    #[test]
    fn test_parse_export_flags() {
        let cli = Cli::try_parse_from([
            "figslice",
            "export",
            "--token",
            "t",
            "--file",
            "KEY",
            "--slices",
            r#"[{"id":"1:2","name":"a"}]"#,
            "--scales",
            "1,2",
            "--format",
            "svg",
            "--out",
            "dist",
        ])
        .unwrap();

        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.connection.file_key.as_deref(), Some("KEY"));
                assert_eq!(args.scales.as_deref(), Some("1,2"));
                assert_eq!(args.format, Some(crate::types::ImageFormat::Svg));
                assert_eq!(args.out, Some(PathBuf::from("dist")));
            }
            other => panic!("unexpected command {}", other.name()),
        }
    }
}
