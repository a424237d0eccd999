//! Parses config file

use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;

/// Defaults for arguments not given on the command line.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub version: Option<u16>,
    pub build: Option<u16>,
    pub offset: Option<usize>,
}

pub static CONFIG_FILE_NAME: &str = "qstpal.toml";

/// Parse `qstpal.toml` in the same folder as the binary, or the working directory.
///
/// No config file is the same as an empty one.
pub fn parse_config() -> eyre::Result<Config> {
    let path = match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    let path = if path.exists() {
        path
    } else {
        PathBuf::from(CONFIG_FILE_NAME)
    };

    if !path.exists() {
        debug!("no {CONFIG_FILE_NAME}, using defaults");
        return Ok(Config::default());
    }

    parse_config_from_file(path.as_path())
}

pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    let config = parse_config_from_str(&buffer)?;

    debug!("config from {}: {config:?}", path.display());

    Ok(config)
}

pub fn parse_config_from_str(s: &str) -> eyre::Result<Config> {
    Ok(toml::from_str(s)?)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_config() {
        let config = parse_config_from_str(
            "\
version = 0x250
build = 24
offset = 1024
",
        )
        .unwrap();

        assert_eq!(
            config,
            Config {
                version: Some(0x250),
                build: Some(24),
                offset: Some(1024),
            }
        );
    }

    #[test]
    fn empty_config() {
        assert_eq!(parse_config_from_str("").unwrap(), Config::default());
    }

    #[test]
    fn version_out_of_range() {
        assert!(parse_config_from_str("version = 70000").is_err());
    }
}
