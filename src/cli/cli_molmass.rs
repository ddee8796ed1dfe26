use super::cli_main::get_user_input;
use crate::Balancer::molmass::calculate_molar_mass;
use prettytable::{Cell, Row, Table};
use std::io::{self, Write};

pub fn molmass_menu() {
    loop {
        print!("\x1b[36mEnter a formula (e.g. Mg3(PO4)2), or 0 to go back: \x1b[0m");
        io::stdout().flush().unwrap();
        let formula = get_user_input();
        let formula = formula.trim();
        if formula == "0" {
            break;
        }

        let (molar_mass, composition) = calculate_molar_mass(formula);
        if composition.is_empty() {
            println!("\x1b[31mNo atoms recognized in '{}'\x1b[0m", formula);
            continue;
        }

        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("element"), Cell::new("atoms")]));
        for (symbol, count) in composition.iter() {
            table.add_row(Row::new(vec![
                Cell::new(symbol),
                Cell::new(&count.to_string()),
            ]));
        }
        table.printstd();
        println!("\x1b[32mMolar mass of {}: {:.3} g/mol\x1b[0m", formula, molar_mass);
    }
}
