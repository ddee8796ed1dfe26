use super::cli_main::get_user_input;
use crate::Balancer::balance_api::balance;
use crate::Balancer::equation_builder::build_equation;
use std::io::{self, Write};

pub fn balancer_menu() {
    loop {
        println!("\x1b[34m\n Equation balancer \x1b[0m");
        println!("\x1b[33m1. Balance an equation\x1b[0m");
        println!("\x1b[33m2. Balance and show the conservation matrix\x1b[0m");
        println!("\x1b[33m3. Balance and print the result as JSON\x1b[0m");
        println!("\x1b[33m0. Back\x1b[0m");
        print!("\x1b[36mEnter your choice: \x1b[0m");
        io::stdout().flush().unwrap();
        let choice = get_user_input();

        match choice.trim() {
            "1" => balance_once(false, false),
            "2" => balance_once(true, false),
            "3" => balance_once(false, true),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn balance_once(show_matrix: bool, as_json: bool) {
    print!("\x1b[36mEnter an equation (e.g. C3H8 + O2 -> CO2 + H2O): \x1b[0m");
    io::stdout().flush().unwrap();
    let equation = get_user_input();
    let equation = equation.trim();

    if show_matrix {
        match build_equation(equation) {
            Ok(parsed) => parsed.composition_table().printstd(),
            Err(error) => {
                println!("\x1b[31m{}\x1b[0m", error);
                return;
            }
        }
    }

    match balance(equation) {
        Ok(solved) => {
            if as_json {
                println!("{}", serde_json::to_string_pretty(&solved).unwrap());
            } else {
                println!("\x1b[32m{}\x1b[0m", solved);
            }
        }
        Err(error) => println!("\x1b[31m{}\x1b[0m", error),
    }
}
