use std::path::PathBuf;

use color_eyre::Result;

use crate::read_matrix::read_matrix_to_collection;

#[doc(hidden)]
pub fn run(file: PathBuf) -> Result<()> {
    let collection = read_matrix_to_collection(&file)?;

    let mut ids: Vec<&String> = collection.kit_ids().collect();
    alphanumeric_sort::sort_str_slice(&mut ids);

    for id in ids {
        println!("{id}");
    }
    Ok(())
}
