//! Discover command implementation.
//!
//! Prints the slices discovery would export, in the JSON form accepted by
//! `export --slices-file`.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::discover_slices;
use crate::error::{FigsliceError, Result};
use crate::output::{display_path, Printer};
use crate::types::{Slice, SliceList};

use super::{ConnectionArgs, PatternArgs};

/// Find slices in the document and print them as JSON
#[derive(Args, Debug)]
pub struct DiscoverArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Write the JSON to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: DiscoverArgs, printer: &Printer) -> Result<()> {
    let connection = args.connection.connect(printer).await?;
    let options = args.patterns.options(&connection.manifest);

    let slices =
        discover_slices(&connection.client, &connection.file_key, &options, printer).await?;
    let json = render_json(slices)?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &json)
                .await
                .map_err(|e| FigsliceError::Io {
                    path: path.clone(),
                    message: format!("Failed to write slices file: {}", e),
                })?;
            printer.status("Wrote", &display_path(path));
        }
        None => println!("{}", json.trim_end()),
    }

    Ok(())
}

fn render_json(slices: Vec<Slice>) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(&SliceList { slices }).map_err(|e| FigsliceError::Parse {
            message: format!("Failed to serialize slices: {}", e),
            help: None,
        })?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::parse_slices;

    #[test]
    fn test_render_json_round_trips_through_parser() {
        let slices = vec![Slice::new("1:1", "icon-a"), Slice::new("1:2", "icon-a-2")];

        let json = render_json(slices.clone()).unwrap();

        insta::assert_snapshot!(json.trim_end(), @r###"
        {
          "slices": [
            {
              "id": "1:1",
              "name": "icon-a"
            },
            {
              "id": "1:2",
              "name": "icon-a-2"
            }
          ]
        }
        "###);
        assert_eq!(parse_slices(&json).unwrap(), slices);
    }
}
