use super::cli_balancer::balancer_menu;
use super::cli_exercises::exercises_menu;
use super::cli_molmass::molmass_menu;
use super::cli_stoichiometry::stoichiometry_menu;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => balancer_menu(),
            "2" => molmass_menu(),
            "3" => stoichiometry_menu(),
            "4" => exercises_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to ChemBalancer: balancing of chemical equations,\n
    molar masses, stoichiometric calculations and exercises \n \x1b[0m"
    );
    println!("\x1b[33m1. Balance a chemical equation\x1b[0m");
    println!("\x1b[33m2. Molar mass of a formula\x1b[0m");
    println!("\x1b[33m3. Stoichiometric calculator\x1b[0m");
    println!("\x1b[33m4. Balancing exercises\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    io::stdout().flush().unwrap();
}

pub fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}

/// Prompt for one number; decimal commas are accepted.
pub fn read_number(prompt: &str) -> Option<f64> {
    print!("\x1b[36m{}: \x1b[0m", prompt);
    io::stdout().flush().unwrap();
    let input = get_user_input();
    input.trim().replace(',', ".").parse::<f64>().ok()
}
