#![warn(rust_2018_idioms)]

#[macro_use]
extern crate log;

use std::process;

use clap::{App, Arg};
use env_logger::Env;

use block_push_solver::config::{Bounds, HashKind};
use block_push_solver::{LoadLevel, Solve};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = App::new("block-push-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds the shortest sequence of whole-grid pushes that puts every block on its target")
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .value_name("W")
                .help("required width of every row (default: width of the first row)"),
        )
        .arg(
            Arg::with_name("max-rows")
                .long("max-rows")
                .takes_value(true)
                .default_value("16")
                .help("maximum number of rows"),
        )
        .arg(
            Arg::with_name("max-cols")
                .long("max-cols")
                .takes_value(true)
                .default_value("16")
                .help("maximum number of columns"),
        )
        .arg(
            Arg::with_name("hash")
                .long("hash")
                .takes_value(true)
                .possible_values(&["djb", "fnv"])
                .default_value("djb")
                .help("hash function of the visited set"),
        )
        .arg(
            Arg::with_name("steps")
                .long("steps")
                .help("print the grid after every move"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let hash: HashKind = parse_arg(&matches, "hash");
    let bounds = Bounds {
        max_rows: parse_arg(&matches, "max-rows"),
        max_cols: parse_arg(&matches, "max-cols"),
        width: matches.value_of("width").map(|_| parse_arg(&matches, "width")),
        ..Bounds::default()
    };
    // clap guarantees it's present
    let path = matches.value_of("file").unwrap();

    let level = path.load_level(&bounds).unwrap_or_else(|err| {
        eprintln!("{}", err);
        process::exit(1);
    });

    println!("Solving {}...", path);
    println!("{}", level);

    let solution = level.solve(hash, true).unwrap_or_else(|err| {
        eprintln!("Invalid level {}: {}", path, err);
        process::exit(1);
    });

    match solution.moves {
        None => println!("No solution"),
        Some(ref moves) => {
            if matches.is_present("steps") {
                print!("{}", level.solution(moves));
            }
            println!("Found solution:");
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
        }
    }
    info!("Done, expanded {} states", solution.stats.total_expanded());

    if matches.is_present("stats") {
        println!();
        print!("{}", solution.stats);
    }
}

fn parse_arg<T: std::str::FromStr>(matches: &clap::ArgMatches<'_>, name: &str) -> T
where
    T::Err: std::fmt::Display,
{
    // only called on args with a value or a default
    let value = matches.value_of(name).unwrap();
    value.parse().unwrap_or_else(|err| {
        eprintln!("Invalid value for --{}: {}: {}", name, value, err);
        process::exit(1);
    })
}
