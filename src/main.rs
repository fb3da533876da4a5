//! evo-search CLI - run the number or tour search demo.

use std::process;
use std::time::Instant;

use evo_search::{
    ga::{GaConfig, GaRunner},
    problems::{render_grid, NumberSearch, TourSearch},
    random::{create_rng, entropy_rng},
};

const DEFAULT_CITIES: usize = 20;
const DEFAULT_GRID: usize = 30;

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <number|tour> [args] [--seed <u64>] [--generations <n>]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  number [target]        Search for an integer (default: i32::MAX / 10000000)");
    eprintln!("  tour [cities] [grid]   Search for a short tour (default: {DEFAULT_CITIES} cities on a {DEFAULT_GRID}x{DEFAULT_GRID} grid)");
    eprintln!();
    eprintln!("Set RUST_LOG=debug to log every generation.");
}

/// Splits `--seed` and `--generations` out of the positional arguments.
fn parse_flags(args: &[String]) -> Result<(Vec<String>, Option<u64>, Option<usize>), String> {
    let mut positional = Vec::new();
    let mut seed = None;
    let mut generations = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                seed = Some(value.parse().map_err(|e| format!("invalid seed '{value}': {e}"))?);
            }
            "--generations" => {
                let value = iter.next().ok_or("--generations needs a value")?;
                generations = Some(
                    value
                        .parse()
                        .map_err(|e| format!("invalid generation count '{value}': {e}"))?,
                );
            }
            _ => positional.push(arg.clone()),
        }
    }

    Ok((positional, seed, generations))
}

fn parse_positional<T: std::str::FromStr>(
    args: &[String],
    index: usize,
    default: T,
) -> Result<T, String>
where
    T::Err: std::fmt::Display,
{
    match args.get(index) {
        Some(s) => s.parse().map_err(|e| format!("invalid argument '{s}': {e}")),
        None => Ok(default),
    }
}

fn run_number(args: &[String], config: GaConfig) -> Result<(), String> {
    let target = parse_positional(args, 0, NumberSearch::default_target().target())?;
    let problem = NumberSearch::new(target);

    println!("Number search");
    println!("=============");
    println!("Target: {target}");
    println!(
        "Population: {}, generations: {}",
        config.population_size, config.max_generations
    );
    println!();

    let start = Instant::now();
    let result = GaRunner::run(&problem, &config).map_err(|e| e.to_string())?;

    println!(
        "best guess: {} Best fitness: {}",
        result.best, result.best_fitness
    );
    println!("Time: {:.3}s", start.elapsed().as_secs_f32());
    Ok(())
}

fn run_tour(args: &[String], config: GaConfig) -> Result<(), String> {
    let cities = parse_positional(args, 0, DEFAULT_CITIES)?;
    let grid = parse_positional(args, 1, DEFAULT_GRID)?;

    let mut rng = match config.seed {
        Some(seed) => create_rng(seed),
        None => entropy_rng(),
    };
    let problem = TourSearch::random(cities, grid, &mut rng).map_err(|e| e.to_string())?;

    println!("Tour search");
    println!("===========");
    println!("Cities: {cities}, grid: {grid}x{grid}");
    println!(
        "Population: {}, generations: {}",
        config.population_size, config.max_generations
    );
    println!();

    let start = Instant::now();
    let result = GaRunner::run_with_rng(&problem, &config, &mut rng, None)
        .map_err(|e| e.to_string())?;

    print!("{}", render_grid(grid, &result.best, problem.locations()));
    println!();
    println!("Tour length: {:.3}", result.best_fitness);
    println!("Time: {:.3}s", start.elapsed().as_secs_f32());
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("evo-search", String::as_str);

    let (positional, seed, generations) = parse_flags(args.get(1..).unwrap_or_default())
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        });

    let Some((command, rest)) = positional.split_first() else {
        print_usage(program);
        process::exit(1);
    };

    let mut config = match command.as_str() {
        "number" => GaConfig::number_search(),
        "tour" => GaConfig::tour_search(),
        _ => {
            print_usage(program);
            process::exit(1);
        }
    };
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(generations) = generations {
        config = config.with_max_generations(generations);
    }

    let outcome = match command.as_str() {
        "number" => run_number(rest, config),
        _ => run_tour(rest, config),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
