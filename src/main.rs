use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use restricted_array::{
    binary_search, length, print_array, reverse, search, sort, RestrictedArray, Report, Value,
};

mod cli;
mod logging;

use cli::display::print_report;
use cli::{Cli, Commands};

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Demo {
            capacity,
            seed,
            target,
            json,
        } => {
            let array = random_array(capacity, seed)?;
            emit_report(&array, target, json)
        }
        Commands::Inspect {
            values,
            capacity,
            target,
            json,
        } => {
            let array = load_array(&values, capacity)?;
            emit_report(&array, target, json)
        }
        Commands::Search {
            values,
            target,
            binary,
        } => {
            let mut array = load_array(&values, None)?;
            let n = length(&array);
            if binary {
                sort(&mut array, n);
                let found = binary_search(&array, n, target);
                println!("{}", if found { "found" } else { "not found" });
            } else {
                println!("{}", search(&array, n, target));
            }
            Ok(())
        }
        Commands::Sort { values, reverse: descending } => {
            let mut array = load_array(&values, None)?;
            let n = length(&array);
            sort(&mut array, n);
            if descending {
                reverse(&mut array, n);
            }
            print_array(&array);
            Ok(())
        }
    }
}

/// Build an array from CLI values. Capacity defaults to the value count.
fn load_array(values: &[Value], capacity: Option<usize>) -> Result<RestrictedArray> {
    let array = match capacity {
        Some(capacity) => RestrictedArray::from_values(capacity, values),
        None => RestrictedArray::from_slice(values),
    }
    .context("invalid array")?;

    debug!(capacity = array.capacity(), length = values.len(), "loaded array");
    Ok(array)
}

fn random_array(capacity: Option<usize>, seed: Option<u64>) -> Result<RestrictedArray> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(?seed, ?capacity, "building random array");

    match capacity {
        Some(capacity) => RestrictedArray::random_with_capacity(capacity, &mut rng)
            .context("invalid capacity"),
        None => Ok(RestrictedArray::random(&mut rng)),
    }
}

fn emit_report(array: &RestrictedArray, target: Option<Value>, json: bool) -> Result<()> {
    let mut report = Report::from_array(array);
    if let Some(value) = target {
        report = report.with_target(array, value);
    }

    if json {
        let serialized = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{}", serialized);
    } else {
        print_report(&report);
    }
    Ok(())
}
