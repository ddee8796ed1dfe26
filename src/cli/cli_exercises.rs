use super::cli_main::get_user_input;
use crate::Balancer::exercises::{Difficulty, exercise_pool};
use prettytable::{Cell, Row, Table};
use std::io::{self, Write};

pub fn exercises_menu() {
    loop {
        println!("\x1b[34m\n Balancing exercises \x1b[0m");
        println!("\x1b[33m1. Easy\x1b[0m");
        println!("\x1b[33m2. Medium\x1b[0m");
        println!("\x1b[33m3. Hard\x1b[0m");
        println!("\x1b[33m0. Back\x1b[0m");
        print!("\x1b[36mEnter your choice: \x1b[0m");
        io::stdout().flush().unwrap();
        let choice = get_user_input();

        let level = match choice.trim() {
            "1" => Difficulty::Easy,
            "2" => Difficulty::Medium,
            "3" => Difficulty::Hard,
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };
        print_pool(level);
    }
}

fn print_pool(level: Difficulty) {
    let exercises = match exercise_pool(level) {
        Ok(exercises) => exercises,
        Err(error) => {
            println!("\x1b[31m{}\x1b[0m", error);
            return;
        }
    };
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("#"),
        Cell::new("balance this"),
        Cell::new("answer"),
    ]));
    for (i, exercise) in exercises.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(&exercise.equation),
            Cell::new(&exercise.answer),
        ]));
    }
    table.printstd();
}
