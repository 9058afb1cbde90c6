use std::path::PathBuf;

use color_eyre::Result;

use crate::args::SnpSet;
use crate::read_matrix::read_matrix_to_collection;

#[doc(hidden)]
pub fn run(file: PathBuf, set: SnpSet) -> Result<()> {
    let collection = read_matrix_to_collection(&file)?;

    let snps = match set {
        SnpSet::All => collection.snps(),
        SnpSet::Consistent => collection.consistent_snps(),
        SnpSet::Inconsistent => collection.inconsistent_snps(),
        SnpSet::Uncertain => collection.uncertain_snps(),
    };

    for snp in snps {
        println!("{snp}");
    }
    Ok(())
}
