#[derive(Debug)]
pub enum CladetkError {
    MatrixHeaderError,
    PositionParseError((u64, String)),
    RowWidthError((u64, usize, usize)),
    VariantListParseError(String),
    VcfLineError(String),
    BedLineError(String),
}

impl std::fmt::Display for CladetkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MatrixHeaderError => write!(
                f,
                "The spreadsheet has no 'SNP Number' header terminator row. Check that the file is a SNP spreadsheet export."
            ),
            Self::PositionParseError((row, value)) => write!(
                f,
                "Position {value:?} on data row {row} is not an integer"
            ),
            Self::RowWidthError((row, width, kits)) => write!(
                f,
                "Data row {row} has {width} fields but the kit name row only names {kits} columns"
            ),
            Self::VariantListParseError(line) => write!(
                f,
                "Variant list line does not start with an integer position: {line:?}"
            ),
            Self::VcfLineError(line) => write!(f, "Too few fields on a chrY vcf line: {line:?}"),
            Self::BedLineError(line) => write!(f, "Failed to parse a chrY bed line: {line:?}"),
        }
    }
}
