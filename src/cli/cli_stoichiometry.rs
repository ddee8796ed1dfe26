use super::cli_main::{get_user_input, read_number};
use crate::Balancer::stoichiometry::{AmountUnit, product_amounts};
use std::io::{self, Write};

/// Asks for the mole ratio a*R -> b*P of a balanced equation, both molar
/// masses and an amount of reactant, then prints the product amounts.
pub fn stoichiometry_menu() {
    println!("\x1b[34m\n Stoichiometric calculator (a*R -> b*P) \x1b[0m");

    let Some(coef_reactant) = read_number("Coefficient a of the reactant") else {
        println!("\x1b[31mNot a number\x1b[0m");
        return;
    };
    let Some(coef_product) = read_number("Coefficient b of the product") else {
        println!("\x1b[31mNot a number\x1b[0m");
        return;
    };
    let Some(molar_mass_reactant) = read_number("Molar mass of the reactant, g/mol") else {
        println!("\x1b[31mNot a number\x1b[0m");
        return;
    };
    let Some(molar_mass_product) = read_number("Molar mass of the product, g/mol") else {
        println!("\x1b[31mNot a number\x1b[0m");
        return;
    };
    let Some(amount) = read_number("Amount of reactant") else {
        println!("\x1b[31mNot a number\x1b[0m");
        return;
    };

    print!("\x1b[36mUnit of that amount (mol/g): \x1b[0m");
    io::stdout().flush().unwrap();
    let unit = match get_user_input().trim() {
        "g" => AmountUnit::Gram,
        _ => AmountUnit::Mol,
    };

    match product_amounts(
        coef_reactant,
        coef_product,
        molar_mass_reactant,
        molar_mass_product,
        amount,
        unit,
    ) {
        Ok(amounts) => {
            println!("\x1b[32mReactant used: {:.3} mol\x1b[0m", amounts.reactant_moles);
            println!("\x1b[32mProduct formed: {:.3} mol\x1b[0m", amounts.product_moles);
            println!("\x1b[32mProduct mass: {:.3} g\x1b[0m", amounts.product_mass);
        }
        Err(error) => println!("\x1b[31m{}\x1b[0m", error),
    }
}
