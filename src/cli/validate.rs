use clap::Parser;
use colordata::{section_at, validate_color_data};

use super::*;

#[derive(Debug, Parser)]
#[command(name = "validate", about = "Checks a palette section without keeping it")]
struct ValidateCli {
    #[command(flatten)]
    section: SectionArgs,
}

pub struct Validate;

impl Cli for Validate {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn about(&self) -> &'static str {
        "checks that the section decodes"
    }

    fn cli(&self) -> CliRes {
        let cli = ValidateCli::parse_from(std::env::args().skip(1));

        match validate(&cli.section) {
            Ok(remaining) => {
                println!("Palette section is valid. {remaining} bytes follow it.");
                CliRes::Ok
            }
            Err(err) => {
                println!("{}", err);
                CliRes::Err
            }
        }
    }
}

/// Bytes left in the file after the section.
fn validate(section: &SectionArgs) -> eyre::Result<usize> {
    let config = parse_config()?;
    let version = section.format_version(&config)?;
    let bytes = read_file(&section.path)?;

    let rest = validate_color_data(section_at(&bytes, section.offset(&config))?, version)?;

    Ok(rest.len())
}
