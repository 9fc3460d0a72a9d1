/// Config file location, relative to the user's config directory.
pub const DEFAULT_CONFIG_FILE_PATH: &str = "diskspace/diskspace.toml";

/// Queried when no paths are given and the config file lists none.
pub const DEFAULT_QUERY_PATH: &str = ".";
