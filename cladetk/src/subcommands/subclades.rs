use std::collections::BTreeSet;

use color_eyre::Result;
use itertools::Itertools;
use serde::Serialize;

use crate::args::StandardArgs;
use crate::io::{get_output, open_csv_writer, push_to_output};
use crate::read_matrix::read_matrix_to_collection;
use crate::structs::KitCollection;

/// One first-level candidate row of the report.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Subclade {
    pub snp: String,
    pub kits: usize,
    pub equivalents: BTreeSet<String>,
}

/// Run the inference and attach the positive kit count per candidate.
pub fn find_subclades(collection: &KitCollection) -> Vec<Subclade> {
    collection
        .subclade_candidates()
        .into_iter()
        .map(|(snp, equivalents)| {
            let kits = collection.filter(&snp).count();
            Subclade { snp, kits, equivalents }
        })
        .collect()
}

#[doc(hidden)]
#[tracing::instrument]
pub fn run(args: StandardArgs, json: bool) -> Result<()> {
    let collection = read_matrix_to_collection(&args.file)?;
    let subclades = find_subclades(&collection);

    tracing::info!(
        "Found {} first-level candidates among {} kits.",
        subclades.len(),
        collection.count()
    );

    if json {
        let mut output = args.output.clone();
        push_to_output(&args, &mut output, "subclades", "json");
        let writer = get_output(Some(output))?;
        serde_json::to_writer_pretty(writer, &subclades)?;
    } else {
        let mut output = args.output.clone();
        push_to_output(&args, &mut output, "subclades", "csv");
        let mut writer = open_csv_writer(output)?;
        writer.write_record(vec!["snp", "kits", "equivalents"])?;

        for subclade in subclades {
            writer.write_record(vec![
                subclade.snp,
                subclade.kits.to_string(),
                subclade.equivalents.iter().join(";"),
            ])?;
        }
    }

    Ok(())
}
