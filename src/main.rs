use colored::Colorize;
use std::env;
use sudoku_propagator::{load_file, Puzzle, Status};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    let (dim, path) = match args.as_slice() {
        [dim, path] => (dim.parse().expect("Invalid block dimension."), path.as_str()),
        [path] => (3, path.as_str()),
        _ => {
            println!("{}", "Usage: sudoku-propagator [dim] <puzzle-file>".red());
            return;
        }
    };
    let mut puzzle = Puzzle::new(dim);
    if let Err(err) = load_file(&mut puzzle, path) {
        println!("{}", format!("{err}").red());
        return;
    }
    println!("Input:\n{puzzle}");
    match puzzle.solve() {
        Ok(steps) => match puzzle.status() {
            Status::Solved => {
                println!("Solved in {steps} forced assignments.\n{puzzle}");
            }
            Status::Stalled { unsolved } => {
                println!("Stalled with {unsolved} unresolved cells ({steps} forced assignments).\n{puzzle}");
            }
        },
        Err(err) => {
            println!("{}", format!("{err}").red());
        }
    }
}
