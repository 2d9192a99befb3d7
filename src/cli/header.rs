use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::cli::SamArgs;
use crate::core::header::AnnotatedTag;
use crate::parsing::sam::read_sam_text;
use crate::report::header_annotation::{annotate_header, HeaderReport};
use crate::utils::table::Table;

/// Maximum width of any column in the header table
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Message printed when the file has no header block
pub const NO_HEADERS_MESSAGE: &str = "No SAM headers found";

#[derive(Parser, Debug)]
#[command(name = "sam-header")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Describe the tags in a SAM header")]
#[command(
    long_about = "sam-header reads the header block at the top of a SAM file and prints every tag alongside its meaning from the SAM format specification.\n\nHeader scanning stops at the first line that does not start with '@'."
)]
pub struct HeaderCli {
    #[command(flatten)]
    pub args: SamArgs,
}

/// Render annotated tags as a Header/Tag/Value/Description table.
#[must_use]
pub fn header_table(tags: &[AnnotatedTag]) -> Table {
    let mut table =
        Table::new(["Header", "Tag", "Value", "Description"]).with_max_column_width(MAX_COLUMN_WIDTH);

    for tag in tags {
        table.add_row([
            format!("{}\n(line {})", tag.header_type, tag.line),
            tag.key.clone(),
            tag.value.clone(),
            tag.description.to_string(),
        ]);
    }

    table
}

/// Execute sam-header
///
/// # Errors
///
/// Returns an error if the file cannot be read, a header line has an unknown
/// type, or a tag is not `KEY:VALUE`.
pub fn run(args: &SamArgs) -> anyhow::Result<()> {
    let text = read_sam_text(&args.sam)
        .with_context(|| format!("Failed to read {}", args.sam.display()))?;

    let report = annotate_header(&text)
        .with_context(|| format!("Failed to parse header of {}", args.sam.display()))?;

    match report {
        HeaderReport::NoHeaders => {
            println!("{NO_HEADERS_MESSAGE}");
        }
        HeaderReport::Annotated(tags) => {
            let unknown = tags.iter().filter(|t| t.is_unknown()).count();
            info!(
                path = %args.sam.display(),
                tags = tags.len(),
                unknown,
                "Annotated header tags"
            );
            println!("{}", header_table(&tags));
        }
    }

    Ok(())
}
