// CLADETK - Clade analysis toolkit
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

//! CLADETK - Clade analysis toolkit
//!
//! Classifies the SNP markers of a sequenced population from a genotype
//! spreadsheet alone: which markers are universally shared, which vary, and
//! which of the varying ones plausibly define first-level subclades of the
//! underlying (unknown) phylogenetic tree.
//!
//! CLADETK toolkit commands
//!
//! * Infer first-level subclade candidates and their equivalent markers
//! * List the marker sets of a spreadsheet (all, consistent, inconsistent, uncertain)
//! * List the kit identifiers of a spreadsheet
//! * Annotate a fixed variant list with per-sample calls from .vcf/.bed files
//!
//! To print the available commands use:
//! ```bash
//! cladetk --help
//! ```
//!
//! To find the first-level subclade candidates of a spreadsheet:
//! ```bash
//! cladetk subclades $file -o $outdir
//! ```

#[doc(hidden)]
pub mod args;

#[doc(hidden)]
pub mod io;

/// Functions for reading SNP spreadsheets into kit collections
pub mod read_matrix;

/// CLADETK structs
pub mod structs;

#[doc(hidden)]
pub mod utils;

#[doc(hidden)]
pub mod error;

#[cfg(feature = "clap")]
pub mod clap;
