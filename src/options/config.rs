use serde::Deserialize;

/// The TOML config file.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Config {
    pub(crate) flags: Option<FlagConfig>,
}

/// Defaults for the command-line flags. Arguments always take precedence.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) struct FlagConfig {
    /// Paths to query when none are passed as arguments.
    pub(crate) paths: Option<Vec<String>>,
    pub(crate) file: Option<bool>,
    pub(crate) usage: Option<bool>,
    /// Extra free space, in bytes, a space check requires.
    pub(crate) reserve: Option<u64>,
}
