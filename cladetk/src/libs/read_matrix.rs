use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;

use crate::error::CladetkError::{MatrixHeaderError, PositionParseError, RowWidthError};
use crate::io::{get_input, get_matrix_reader};
use crate::structs::{CallMap, KitCollection};
use crate::utils::strip_kit_decoration;

/// Marker cells start here; columns 2 and 3 carry per-marker annotations
/// the classification does not use.
const FIRST_KIT_COLUMN: usize = 4;

/// Read a SNP spreadsheet into a [`KitCollection`].
///
/// The spreadsheet has one column per kit and one row per marker. The very
/// first row names the kits, the following rows are header noise down to
/// the `SNP Number` terminator row, and the data block ends at the first
/// row with fewer than two fields. Blank cells are not recorded at all,
/// which is what makes absence a confirmed negative downstream.
pub fn read_matrix_to_collection(path: &PathBuf) -> Result<KitCollection> {
    let input = get_input(Some(path.clone()))?;
    let mut rdr = get_matrix_reader(input);
    let mut records = rdr.records();

    let header = records
        .next()
        .ok_or_else(|| eyre!("Spreadsheet {path:?} is empty"))??;
    let kitnames: Vec<String> = header.iter().map(strip_kit_decoration).collect();

    loop {
        let record = records.next().ok_or_else(|| eyre!(MatrixHeaderError))??;
        if record.get(0) == Some("SNP Number") {
            break;
        }
    }

    let mut kits: BTreeMap<String, CallMap> = BTreeMap::new();
    let mut row_number: u64 = 0;

    for record in records {
        let record = record?;
        row_number += 1;

        if record.len() < 2 {
            break;
        }

        let position_field = record.get(0).unwrap_or_default();
        let position: u64 = position_field
            .parse()
            .wrap_err(eyre!(PositionParseError((row_number, position_field.into()))))?;

        let name = match record.get(1) {
            Some(name) if !name.is_empty() => name
                .split_whitespace()
                .next()
                .unwrap_or(name)
                .to_string(),
            _ => position.to_string(),
        };

        if record.len() > kitnames.len() {
            return Err(eyre!(RowWidthError((row_number, record.len(), kitnames.len()))));
        }

        for (pos, cell) in record.iter().enumerate().skip(FIRST_KIT_COLUMN) {
            if !cell.is_empty() {
                kits.entry(kitnames[pos].clone())
                    .or_default()
                    .insert(name.clone(), cell.to_string());
            }
        }
    }

    tracing::info!("Read {} kits from {path:?}", kits.len());

    let kits = kits
        .into_iter()
        .map(|(id, calls)| (id, Arc::new(calls)))
        .collect();

    Ok(KitCollection::new(kits))
}
