use clap::Parser;
use colordata::CycleTable;

use super::*;

#[derive(Debug, Parser)]
#[command(name = "cycles", about = "Lists color cycles")]
struct CyclesCli {
    #[command(flatten)]
    section: SectionArgs,
}

pub struct Cycles;

impl Cli for Cycles {
    fn name(&self) -> &'static str {
        "cycles"
    }

    fn about(&self) -> &'static str {
        "color cycle animations"
    }

    fn cli(&self) -> CliRes {
        let cli = CyclesCli::parse_from(std::env::args().skip(1));

        let data = match cli.section.open() {
            Ok(data) => data,
            Err(err) => {
                println!("{}", err);
                return CliRes::Err;
            }
        };

        if !data.layout.cycles {
            println!("Quests this old do not store color cycles.");
            return CliRes::Ok;
        }

        let lines = cycle_lines(&data.misc.cycles);

        if lines.is_empty() {
            println!("No color cycles.");
        } else {
            lines.iter().for_each(|line| println!("{line}"));
        }

        CliRes::Ok
    }
}

fn cycle_lines(cycles: &CycleTable) -> Vec<String> {
    cycles
        .populated()
        .flat_map(|(index, set)| {
            set.iter()
                .enumerate()
                .filter(|(_, cycle)| !cycle.is_empty())
                .map(move |(slot, cycle)| {
                    format!(
                        "{index:>3}.{slot}  first {:>3}  count {:>3}  speed {:>3}",
                        cycle.first, cycle.count, cycle.speed
                    )
                })
        })
        .collect()
}
