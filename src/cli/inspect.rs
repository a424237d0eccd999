use clap::Parser;
use colordata::{ColorData, ColorLayout, NameLayout};

use super::*;

#[derive(Debug, Parser)]
#[command(name = "inspect", about = "Summary of a palette section")]
struct InspectCli {
    #[command(flatten)]
    section: SectionArgs,
}

pub struct Inspect;

impl Cli for Inspect {
    fn name(&self) -> &'static str {
        "inspect"
    }

    fn about(&self) -> &'static str {
        "summary of the section layout and contents"
    }

    fn cli(&self) -> CliRes {
        let cli = InspectCli::parse_from(std::env::args().skip(1));

        match cli.section.open() {
            Ok(data) => {
                print!("{}", summary(&data));
                CliRes::Ok
            }
            Err(err) => {
                println!("{}", err);
                CliRes::Err
            }
        }
    }
}

fn summary(data: &ColorData) -> String {
    let header = match data.header {
        Some(header) => format!(
            "sub-version {}, {} bytes",
            header.sub_version, header.length
        ),
        None => "none".to_string(),
    };

    let colors = match data.layout.colors {
        ColorLayout::Legacy => "legacy (sprite csets moved, new slots zeroed)",
        ColorLayout::Extended => "extended (sprite csets moved)",
        ColorLayout::Newer => "newer",
    };

    let names = match data.layout.names {
        NameLayout::Reset => "not stored".to_string(),
        NameLayout::Stored { count } => format!("{count} stored"),
    };

    let cycles = if data.layout.cycles {
        format!("{} indices set", data.misc.cycles.populated().count())
    } else {
        "not stored".to_string()
    };

    format!(
        "\
header:  {header}
colors:  {colors}, {} csets
names:   {names}, {} named
cycles:  {cycles}
",
        data.store.colors.len(),
        data.store.names.named().count(),
    )
}
