use crate::Balancer::formula_parser::{ElementCount, parse_formula};
use log::warn;

/// An element symbol with its standard atomic mass in g/mol
pub struct Element {
    symbol: &'static str,
    atomic_mass: f64,
}

/// Atomic masses of the elements a school-level equation is likely to contain
pub const ELEMENTS: &[Element] = &[
    Element {
        symbol: "H",
        atomic_mass: 1.008,
    },
    Element {
        symbol: "He",
        atomic_mass: 4.0026,
    },
    Element {
        symbol: "Li",
        atomic_mass: 6.94,
    },
    Element {
        symbol: "Be",
        atomic_mass: 9.0122,
    },
    Element {
        symbol: "B",
        atomic_mass: 10.81,
    },
    Element {
        symbol: "C",
        atomic_mass: 12.011,
    },
    Element {
        symbol: "N",
        atomic_mass: 14.007,
    },
    Element {
        symbol: "O",
        atomic_mass: 15.999,
    },
    Element {
        symbol: "F",
        atomic_mass: 18.998,
    },
    Element {
        symbol: "Ne",
        atomic_mass: 20.18,
    },
    Element {
        symbol: "Na",
        atomic_mass: 22.99,
    },
    Element {
        symbol: "Mg",
        atomic_mass: 24.305,
    },
    Element {
        symbol: "Al",
        atomic_mass: 26.98,
    },
    Element {
        symbol: "Si",
        atomic_mass: 28.085,
    },
    Element {
        symbol: "P",
        atomic_mass: 30.974,
    },
    Element {
        symbol: "S",
        atomic_mass: 32.065,
    },
    Element {
        symbol: "Cl",
        atomic_mass: 35.45,
    },
    Element {
        symbol: "Ar",
        atomic_mass: 39.948,
    },
    Element {
        symbol: "K",
        atomic_mass: 39.102,
    },
    Element {
        symbol: "Ca",
        atomic_mass: 40.08,
    },
    Element {
        symbol: "Sc",
        atomic_mass: 44.9559,
    },
    Element {
        symbol: "Ti",
        atomic_mass: 47.867,
    },
    Element {
        symbol: "V",
        atomic_mass: 50.9415,
    },
    Element {
        symbol: "Cr",
        atomic_mass: 51.9961,
    },
    Element {
        symbol: "Mn",
        atomic_mass: 54.938,
    },
    Element {
        symbol: "Fe",
        atomic_mass: 55.845,
    },
    Element {
        symbol: "Co",
        atomic_mass: 58.933,
    },
    Element {
        symbol: "Ni",
        atomic_mass: 58.69,
    },
    Element {
        symbol: "Cu",
        atomic_mass: 63.546,
    },
    Element {
        symbol: "Zn",
        atomic_mass: 65.38,
    },
    Element {
        symbol: "Ga",
        atomic_mass: 69.723,
    },
    Element {
        symbol: "Ge",
        atomic_mass: 72.64,
    },
    Element {
        symbol: "As",
        atomic_mass: 74.9216,
    },
    Element {
        symbol: "Se",
        atomic_mass: 78.96,
    },
    Element {
        symbol: "Br",
        atomic_mass: 79.904,
    },
    Element {
        symbol: "Kr",
        atomic_mass: 83.798,
    },
    Element {
        symbol: "Rb",
        atomic_mass: 85.4678,
    },
    Element {
        symbol: "Sr",
        atomic_mass: 87.62,
    },
    Element {
        symbol: "Y",
        atomic_mass: 88.9059,
    },
    Element {
        symbol: "Zr",
        atomic_mass: 91.224,
    },
    Element {
        symbol: "Nb",
        atomic_mass: 92.9064,
    },
    Element {
        symbol: "Mo",
        atomic_mass: 95.94,
    },
    Element {
        symbol: "Ag",
        atomic_mass: 107.868,
    },
    Element {
        symbol: "Sn",
        atomic_mass: 118.71,
    },
    Element {
        symbol: "I",
        atomic_mass: 126.904,
    },
    Element {
        symbol: "Xe",
        atomic_mass: 131.293,
    },
    Element {
        symbol: "Ba",
        atomic_mass: 137.327,
    },
    Element {
        symbol: "W",
        atomic_mass: 183.84,
    },
    Element {
        symbol: "Pt",
        atomic_mass: 195.084,
    },
    Element {
        symbol: "Au",
        atomic_mass: 196.967,
    },
    Element {
        symbol: "Hg",
        atomic_mass: 200.59,
    },
    Element {
        symbol: "Pb",
        atomic_mass: 207.2,
    },
    // Add more elements here...
];

/// Standard atomic mass of one element symbol, `None` if the symbol is not in
/// the table.
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ELEMENTS
        .iter()
        .find(|element| element.symbol == symbol)
        .map(|element| element.atomic_mass)
}

/// Formulae copied from thermodynamic tables may carry phase marks like
/// "H2O(g)" or "NaCl(s)"; the capitalized spellings would otherwise be read as
/// atoms, so all of them are stripped before parsing.
fn filter_phase_marks(formula: &str) -> String {
    let mut formula = formula.to_string();
    let phases = ["(C)", "(c)", "(L)", "(l)", "(G)", "(g)", "(S)", "(s)"];
    for phase in phases {
        formula = formula.replace(phase, "");
    }
    formula
}

/// Molar mass of a compound in g/mol together with its atomic composition.
/// Symbols missing from the mass table contribute zero and are logged.
pub fn calculate_molar_mass(formula: &str) -> (f64, ElementCount) {
    let counts = parse_formula(&filter_phase_marks(formula));
    let mut molar_mass = 0.0;
    for (symbol, count) in counts.iter() {
        match atomic_mass(symbol) {
            Some(mass) => molar_mass += mass * *count as f64,
            None => warn!("no atomic mass for element '{}' in '{}'", symbol, formula),
        }
    }
    (molar_mass, counts)
}

/// Molar masses for a batch of formulae, in input order.
pub fn molar_masses_of_compounds(formulae: &[&str]) -> Vec<f64> {
    formulae
        .iter()
        .map(|formula| calculate_molar_mass(formula).0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_molar_mass() {
        let (molar_mass, _) = calculate_molar_mass("H2O(g)");
        assert!((molar_mass - 18.015).abs() < 1e-2);

        let (molar_mass, _) = calculate_molar_mass("NaCl");
        assert!((molar_mass - 58.44).abs() < 1e-2);

        let (molar_mass, _) = calculate_molar_mass("C6H8O6");
        assert!((molar_mass - 176.12).abs() < 1e-2);

        let (molar_mass, composition) = calculate_molar_mass("Ca(NO3)2");
        assert!((molar_mass - 164.093).abs() < 1e-2);
        assert_eq!(composition.get("O"), Some(&6));
    }

    #[test]
    fn test_molar_masses_of_compounds() {
        let masses = molar_masses_of_compounds(&["H2O", "NaCl", "C6H8O6"]);
        let expected = [18.015, 58.443, 176.12];
        for (calculated, expected) in masses.iter().zip(expected.iter()) {
            assert!((calculated - expected).abs() < 1e-2);
        }
    }

    #[test]
    fn test_unknown_symbol_contributes_zero() {
        // Og is not in the table; the known part still counts
        let (molar_mass, composition) = calculate_molar_mass("OgH2");
        assert!((molar_mass - 2.016).abs() < 1e-3);
        assert_eq!(composition.get("Og"), Some(&1));
    }

    #[test]
    fn test_atomic_mass_lookup() {
        assert!(atomic_mass("Fe").is_some());
        assert!(atomic_mass("Xx").is_none());
    }
}
