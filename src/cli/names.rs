use clap::Parser;
use colordata::PaletteNames;

use super::*;

#[derive(Debug, Parser)]
#[command(name = "names", about = "Lists named level palettes")]
struct NamesCli {
    #[command(flatten)]
    section: SectionArgs,
}

pub struct Names;

impl Cli for Names {
    fn name(&self) -> &'static str {
        "names"
    }

    fn about(&self) -> &'static str {
        "level palettes that have a name"
    }

    fn cli(&self) -> CliRes {
        let cli = NamesCli::parse_from(std::env::args().skip(1));

        let data = match cli.section.open() {
            Ok(data) => data,
            Err(err) => {
                println!("{}", err);
                return CliRes::Err;
            }
        };

        let lines = name_lines(&data.store.names);

        if lines.is_empty() {
            println!("No palette has a name.");
        } else {
            lines.iter().for_each(|line| println!("{line}"));
        }

        CliRes::Ok
    }
}

fn name_lines(names: &PaletteNames) -> Vec<String> {
    names
        .named()
        .map(|(level, name)| format!("{level:>3}  {name}"))
        .collect()
}
