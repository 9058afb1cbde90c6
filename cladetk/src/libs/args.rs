use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SnpSet {
    /// Every marker appearing in any kit
    #[default]
    All,
    /// Markers confirmed positive in every kit
    Consistent,
    /// Markers proven to vary over the kits
    Inconsistent,
    /// Markers with a no-call or boundary value in some kit
    Uncertain,
}

impl std::fmt::Display for SnpSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::All => write!(f, "all"),
            Self::Consistent => write!(f, "consistent"),
            Self::Inconsistent => write!(f, "inconsistent"),
            Self::Uncertain => write!(f, "uncertain"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct StandardArgs {
    /// The SNP spreadsheet to analyze
    pub file: PathBuf,

    /// Output directory
    #[cfg_attr(feature = "clap", arg(short = 'o', long="outdir", default_value_os_t = PathBuf::from("./"), value_hint = clap::ValueHint::DirPath))]
    pub output: PathBuf,

    /// Output filename prefix
    #[cfg_attr(feature = "clap", arg(short = 'p', long))]
    pub prefix: Option<String>,
}
