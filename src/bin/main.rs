use std::io::stdin;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};

use relp_tableau::algorithm::{OptimizationResult, Options};
use relp_tableau::algorithm::primal::primal;
use relp_tableau::algorithm::strategy::pivot_rule::{Bland, MostNegative};
use relp_tableau::io::{import, read};

/// An exact simplex tableau solver written in rust.
#[derive(Parser)]
#[command(version, author = "Bram van den Heuvel <bram@vandenheuvel.online>")]
struct Opts {
    /// File containing the tableau, standard input is read if left out
    problem_file: Option<PathBuf>,
    /// Rule deciding which variable enters the basis
    #[arg(long, value_enum, default_value_t = Rule::MostNegative)]
    pivot_rule: Rule,
    /// Give up after this many pivots
    #[arg(long)]
    max_iterations: Option<usize>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Rule {
    /// Most negative relative cost, lowest index on ties
    MostNegative,
    /// Bland's anti cycling rule
    Bland,
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let imported = match &opts.problem_file {
        Some(path) => import(path),
        None => read(stdin().lock()),
    };
    let mut tableau = match imported {
        Ok(tableau) => tableau,
        Err(error) => {
            eprintln!("Couldn't read the tableau: {}", error);
            exit(1);
        },
    };

    let options = Options { max_iterations: opts.max_iterations };
    let result = match opts.pivot_rule {
        Rule::MostNegative => primal::<_, MostNegative>(&mut tableau, &options),
        Rule::Bland => primal::<_, Bland>(&mut tableau, &options),
    };

    match result {
        Ok(OptimizationResult::FiniteOptimum(solution)) => print!("{}", solution),
        Ok(OptimizationResult::Unbounded) => println!("Problem is unbounded."),
        Err(error) => {
            eprintln!("{}", error);
            exit(2);
        },
    }
}
