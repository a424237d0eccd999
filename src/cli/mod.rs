use std::path::{Path, PathBuf};

use clap::Args;
use colordata::{ColorData, FormatVersion};
use eyre::eyre;
use log::debug;

use crate::config::{parse_config, Config};

use self::{cycles::Cycles, inspect::Inspect, names::Names, validate::Validate};

mod cycles;
mod inspect;
mod names;
mod validate;

pub enum CliRes {
    NoCli,
    Ok,
    Err,
}

pub trait Cli {
    fn name(&self) -> &'static str;
    fn about(&self) -> &'static str;
    /// Each module parses its own arguments, starting after the module name.
    fn cli(&self) -> CliRes;
}

// Add new modules here.
const MODULES: &[&dyn Cli] = &[&Inspect, &Names, &Cycles, &Validate];

pub fn help() {
    println!(
        "\
qstpal

Reads the palette section of a quest file.

Available modules:"
    );

    for module in MODULES {
        println!("    {:<10}{}", module.name(), module.about());
    }
}

/// Runs command-line options
pub fn cli() -> CliRes {
    let Some(command) = std::env::args().nth(1) else {
        return CliRes::NoCli;
    };

    match MODULES.iter().find(|module| module.name() == command) {
        Some(module) => module.cli(),
        None => {
            // In case nothing fits then prints this again.
            help();
            CliRes::Err
        }
    }
}

/// Arguments every module takes.
#[derive(Debug, Args)]
pub struct SectionArgs {
    /// Path to the file holding the palette section
    pub path: PathBuf,
    /// Quest format version, decimal or 0x prefixed
    #[arg(short, long, value_parser = parse_number)]
    pub version: Option<u16>,
    /// Quest build number
    #[arg(short, long, value_parser = parse_number)]
    pub build: Option<u16>,
    /// Byte offset of the palette section inside the file
    #[arg(short, long)]
    pub offset: Option<usize>,
}

fn parse_number(s: &str) -> Result<u16, String> {
    let res = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse::<u16>(),
    };

    res.map_err(|err| format!("`{s}` is not a 16-bit number: {err}"))
}

impl SectionArgs {
    /// Flags first, then the config file.
    pub fn format_version(&self, config: &Config) -> eyre::Result<FormatVersion> {
        let version = self.version.or(config.version);
        let build = self.build.or(config.build);

        match (version, build) {
            (Some(version), Some(build)) => Ok(FormatVersion::new(version, build)),
            _ => Err(eyre!(
                "Quest version and build are unknown. Pass --version and --build or set them in the config file."
            )),
        }
    }

    pub fn offset(&self, config: &Config) -> usize {
        self.offset.or(config.offset).unwrap_or(0)
    }

    /// Reads the file and decodes the section with the resolved version.
    pub fn open(&self) -> eyre::Result<ColorData> {
        let config = parse_config()?;
        let version = self.format_version(&config)?;
        let offset = self.offset(&config);

        debug!("{} at offset {offset}", self.path.display());

        Ok(ColorData::open_from_file(&self.path, offset, version)?)
    }
}

fn read_file(path: &Path) -> eyre::Result<Vec<u8>> {
    std::fs::read(path).map_err(|op| eyre!("Cannot read `{}`: {op}", path.display()))
}
