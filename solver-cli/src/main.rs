mod config;

use clap::{App, Arg};
use config::{Config, InputFormat};
use allsat::{
    solvers::TimeLimitedSolver,
    Bruteforce, Formula, SATSolution, Solver, WatchedSolver,
    solvers::TimedSolver,
};
use itertools::Itertools;
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::process::exit;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn make_config() -> Result<Config, Box<dyn std::error::Error>> {
    let matches = App::new("allsat")
        .version("0.1")
        .author("Alex&Korbi&Radek inc.")
        .about("Finds every way to satisfy your desires (or proves there is none)")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .help("Input file"),
        )
        .arg(
            Arg::with_name("format")
                .long("format")
                .value_name("FORMAT")
                .help("Input format, guessed from the file extension if omitted")
                .takes_value(true)
                .possible_values(&["problem", "dimacs"]),
        )
        .arg(
            Arg::with_name("algorithm")
                .long("algorithm")
                .value_name("ALGORITHM")
                .help("Enumeration algorithm")
                .takes_value(true)
                .possible_values(&["dpll", "bruteforce"])
                .default_value("dpll"),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .value_name("SECONDS")
                .takes_value(true)
                .help("Give up after the given number of seconds"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("File name for the output"),
        )
        .arg(
            Arg::with_name("return_code")
                .long("return-code")
                .short("r")
                .help("Will return 1 if satisfiable and 0 if not (useful for scripting)")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Verbosity level (-v, -vv, -vvv)"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let timeout = match matches.value_of("timeout") {
        Some(seconds) => Some(Duration::from_secs(seconds.parse()?)),
        None => None,
    };

    let solver: Box<dyn Solver> = match (matches.value_of("algorithm"), timeout) {
        (Some("dpll"), None) => Box::new(WatchedSolver),
        (Some("dpll"), Some(limit)) => Box::new(TimeLimitedSolver::new(WatchedSolver, limit)),
        (Some("bruteforce"), None) => Box::new(Bruteforce::Bruteforce),
        (Some("bruteforce"), Some(limit)) => Box::new(TimeLimitedSolver::new(Bruteforce::Bruteforce, limit)),
        _ => unreachable!(), // already handled by clap
    };

    let input = matches.value_of("input").map(String::from);
    let format = match matches.value_of("format") {
        Some("problem") => InputFormat::Problem,
        Some("dimacs") => InputFormat::Dimacs,
        Some(_) => unreachable!(), // already handled by clap
        None => guess_format(input.as_deref()),
    };

    Ok(Config {
        input,
        format,
        return_code: matches.is_present("return_code"),
        solver,
        output: matches.value_of("output").map(PathBuf::from),
    })
}

fn init_logging(verbosity: u64) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(io::stderr)
        .init();
}

fn guess_format(input: Option<&str>) -> InputFormat {
    match input.and_then(|file| Path::new(file).extension()) {
        Some(extension) if extension == "cnf" => InputFormat::Dimacs,
        _ => InputFormat::Problem,
    }
}

fn get_input(handle: &mut impl Read) -> io::Result<String> {
    let mut buffer = String::new();
    handle.read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn render(formula: &Formula, result: &SATSolution) -> String {
    let solutions = formula.solutions(result);
    let mut out = format!("s {}\n", result.status());
    if result.is_sat() {
        out.push_str(&format!("c solutions {}\n", solutions.len()));
        out.push_str(&solutions.iter()
            .map(|solution| format!("v {}", solution))
            .join("\n"));
        out.push('\n');
    }
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = make_config()?;

    let input = match config.input {
        None => {
            eprintln!("No input file specified. Reading from standard input...");
            get_input(&mut io::stdin())
        }
        Some(ref file) => get_input(&mut File::open(file)?),
    }?;

    let formula = match config.format {
        InputFormat::Problem => Formula::from_problem(&input)?,
        InputFormat::Dimacs => Formula::from_dimacs(&input)?,
    };
    tracing::info!(variables = formula.num_variables(), clauses = formula.num_clauses(), "formula loaded");

    let solver = TimedSolver::new(config.solver);
    let (_, result) = solver.solve_timed(&formula.clauses());

    let output = render(&formula, &result);
    match config.output {
        Some(path) => std::fs::write(path, output)?,
        None => print!("{}", output),
    }

    if config.return_code {
        exit(if result.is_sat() { 1 } else { 0 })
    }
    if result.is_unknown() {
        exit(2)
    }
    Ok(())
}
