use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::cli::SamArgs;
use crate::parsing::sam::read_sam_text;
use crate::report::flag_tally::FlagTally;
use crate::utils::table::{Align, Table, TableStyle};

#[derive(Parser, Debug)]
#[command(name = "sam-flags")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Count SAM records per FLAG bit")]
#[command(
    long_about = "sam-flags decodes the FLAG column of every alignment record in a SAM file and reports how many records have each bit set.\n\nTwo derived counts are added for paired reads that are themselves mapped:\n- SINGLETONS: the mate is unmapped\n- ITSELF_AND_MATE_MAPPED: the mate is mapped too"
)]
pub struct FlagsCli {
    #[command(flatten)]
    pub args: SamArgs,
}

/// Render a tally as a two-column FLAG/COUNT table.
#[must_use]
pub fn flag_table(tally: &FlagTally) -> Table {
    let mut table = Table::new(["FLAG", "COUNT"])
        .with_style(TableStyle::HeavyGrid)
        .with_alignment(1, Align::Right);

    for (category, count) in tally.rows() {
        table.add_row([category.name().to_string(), count.to_string()]);
    }

    table
}

/// Execute sam-flags
///
/// # Errors
///
/// Returns an error if the file cannot be read or any record has an invalid
/// FLAG field.
pub fn run(args: &SamArgs) -> anyhow::Result<()> {
    let text = read_sam_text(&args.sam)
        .with_context(|| format!("Failed to read {}", args.sam.display()))?;

    let tally = FlagTally::from_sam_text(&text)
        .with_context(|| format!("Failed to parse {}", args.sam.display()))?;

    info!(
        path = %args.sam.display(),
        records = tally.records(),
        "Counted FLAG bits"
    );

    println!("{}", flag_table(&tally));
    Ok(())
}
