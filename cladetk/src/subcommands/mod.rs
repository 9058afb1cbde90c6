/// First-level subclade candidate inference
pub mod subclades;

/// Shortcut to list spreadsheet kit ids
pub mod list_kits;

/// Output the marker sets of a spreadsheet
pub mod list_snps;

/// Annotate a variant list with per-sample .vcf/.bed calls
pub mod annotate;
