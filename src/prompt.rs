//! Console implementations of the interactive strategies.
//!
//! Everything stateful about the run is decided here, at the prompt, so
//! the gating engine stays free of terminal I/O. Invalid answers re-prompt
//! in place; the user can always bail out with `n`/`no`/`q`/`quit`.

use std::io::{self, Write};
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};

use crate::flowjo::TubeSample;
use crate::gating::{GatePath, StartLevelChooser};

/// Supplies each tube's total cell concentration before propagation runs.
pub trait ConcentrationSource {
    /// An exact decimal `>= 0`.
    fn cell_concentration(&mut self, tube: &str) -> BigDecimal;
}

/// Asks the user to pick the cascade's starting level, showing the
/// candidate path with a numbered ruler under its segments.
pub struct ConsoleStartChooser;

impl StartLevelChooser for ConsoleStartChooser {
    fn choose_start_level(&mut self, candidate: &GatePath) -> usize {
        let ruler = level_ruler(candidate.segments());
        loop {
            println!(
                "Which gate should the cell count calculation start with?\n{}\n{}",
                candidate, ruler
            );
            let answer = read_answer();
            match answer.parse::<usize>() {
                Ok(level) if (1..=candidate.depth()).contains(&level) => return level,
                Ok(_) => {
                    println!("This gate value wasn't one of the options.");
                    retry_or_quit();
                }
                Err(_) => {
                    println!("This isn't a number.");
                    retry_or_quit();
                }
            }
        }
    }
}

pub struct ConsoleConcentrations;

impl ConcentrationSource for ConsoleConcentrations {
    fn cell_concentration(&mut self, tube: &str) -> BigDecimal {
        loop {
            println!("What's the cell concentration (10e4) for {}?", tube);
            let answer = read_answer();
            match BigDecimal::from_str(&answer) {
                Ok(value) if value >= BigDecimal::zero() => return value,
                Ok(_) => {
                    println!("The concentration can't be negative.");
                    retry_or_quit();
                }
                Err(_) => {
                    println!("This isn't a number.");
                    retry_or_quit();
                }
            }
        }
    }
}

/// Label every tube with a group, show the full table, and loop until the
/// user confirms it; tubes are then ordered by group for output.
pub fn assign_groups(tubes: &mut [TubeSample]) {
    for tube in tubes.iter_mut() {
        tube.group = Some(ask_group(&tube.name));
    }

    loop {
        println!("Are all of the groups correctly set for the tubes?");
        println!("#\tTube Name\t\t\t\tGroup");
        for (i, tube) in tubes.iter().enumerate() {
            println!(
                "{}\t{}\t\t{}",
                i + 1,
                tube.name,
                tube.group.as_deref().unwrap_or("")
            );
        }
        let answer = read_answer().to_lowercase();
        if matches!(answer.as_str(), "yes" | "y") {
            break;
        }

        let number = loop {
            println!("Type the number for one of the incorrect tube(s).");
            let answer = read_answer();
            match answer.parse::<usize>() {
                Ok(n) if n >= 1 && n <= tubes.len() => break n,
                Ok(_) => {
                    println!("This isn't a number associated with a tube.");
                    retry_or_quit();
                }
                Err(_) => {
                    println!("This isn't a number.");
                    retry_or_quit();
                }
            }
        };
        let tube = &mut tubes[number - 1];
        tube.group = Some(ask_group(&tube.name));
    }

    tubes.sort_by(|a, b| a.group.cmp(&b.group));
}

fn ask_group(tube: &str) -> String {
    println!("What is the group for {}?", tube);
    read_answer()
}

fn retry_or_quit() {
    println!("Do you want to try again? Or quit?");
    let answer = read_answer().to_lowercase();
    if matches!(answer.as_str(), "n" | "no" | "quit" | "q") {
        std::process::exit(0);
    }
}

fn read_answer() -> String {
    print!("> ");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        // Closed stdin is treated like a quit.
        Ok(0) | Err(_) => std::process::exit(0),
        Ok(_) => line.trim().to_string(),
    }
}

/// Number each segment of the candidate path, centered under the segment
/// (biased left for even-width segments).
fn level_ruler(segments: &[String]) -> String {
    let mut ruler = String::new();
    for (i, segment) in segments.iter().enumerate() {
        let width = segment.chars().count();
        let right = width / 2;
        let left = if width % 2 == 0 { right - 1 } else { right };
        ruler.push_str(&" ".repeat(right));
        ruler.push_str(&(i + 1).to_string());
        ruler.push_str(&" ".repeat(left));
        ruler.push('/');
    }
    ruler
}
