use crate::Balancer::balance_api::BalanceError;
use crate::Balancer::formula_parser::{ElementCount, parse_formula};
use log::debug;
use nalgebra::DMatrix;
use prettytable::{Cell, Row, Table};
use regex::Regex;

/// A chemical equation split into compounds, with its element conservation matrix.
/// Rows of the matrix correspond to `elements` (first-seen order), columns to the
/// compounds in the order reactants then products. Reactant entries are positive,
/// product entries negative. Built once per balance request and not mutated after.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedEquation {
    pub reactants: Vec<String>,
    pub products: Vec<String>,
    pub elements: Vec<String>,
    pub matrix: DMatrix<f64>,
}

impl ParsedEquation {
    pub fn num_compounds(&self) -> usize {
        self.reactants.len() + self.products.len()
    }

    /// Conservation matrix as a terminal table, one row per element.
    pub fn composition_table(&self) -> Table {
        let mut table = Table::new();
        let mut header = vec![Cell::new("element")];
        for compound in self.reactants.iter().chain(self.products.iter()) {
            header.push(Cell::new(compound));
        }
        table.add_row(Row::new(header));
        for (i, element) in self.elements.iter().enumerate() {
            let mut row = vec![Cell::new(element)];
            for j in 0..self.num_compounds() {
                row.push(Cell::new(&format!("{}", self.matrix[(i, j)])));
            }
            table.add_row(Row::new(row));
        }
        table
    }
}

/// Parse an equation string like "C3H8 + O2 -> CO2 + H2O" into a ParsedEquation.
/// Whitespace is stripped everywhere; the arrow spellings "=>" and "⇒" are
/// normalized to "->". Exactly one arrow must remain, both sides must be
/// non-empty, and every compound must contain at least one recognizable atom
/// (otherwise its matrix column would be all zeros). Whether the resulting
/// system is solvable is not checked here.
pub fn build_equation(equation: &str) -> Result<ParsedEquation, BalanceError> {
    let whitespace = Regex::new(r"\s+").unwrap();
    let cleaned = whitespace.replace_all(equation, "").to_string();
    let cleaned = cleaned.replace("⇒", "->").replace("=>", "->");

    if cleaned.matches("->").count() != 1 {
        return Err(BalanceError::InvalidEquationFormat);
    }
    let (left_str, right_str) = cleaned.split_once("->").unwrap();
    if left_str.is_empty() || right_str.is_empty() {
        return Err(BalanceError::InvalidEquationFormat);
    }

    let reactants: Vec<String> = left_str.split('+').map(|s| s.to_string()).collect();
    let products: Vec<String> = right_str.split('+').map(|s| s.to_string()).collect();

    let mut elements: Vec<String> = Vec::new();
    let mut compositions: Vec<ElementCount> = Vec::new();
    for compound in reactants.iter().chain(products.iter()) {
        let counts = parse_formula(compound);
        if counts.is_empty() {
            debug!("compound '{}' contains no recognizable atoms", compound);
            return Err(BalanceError::InvalidEquationFormat);
        }
        for symbol in symbols_in_order(compound) {
            if !elements.contains(&symbol) {
                elements.push(symbol);
            }
        }
        compositions.push(counts);
    }

    let num_rows = elements.len();
    let num_cols = compositions.len();
    let mut matrix = DMatrix::zeros(num_rows, num_cols);
    for (j, counts) in compositions.iter().enumerate() {
        let sign = if j < reactants.len() { 1.0 } else { -1.0 };
        for (i, element) in elements.iter().enumerate() {
            if let Some(&count) = counts.get(element) {
                matrix[(i, j)] = sign * count as f64;
            }
        }
    }
    debug!(
        "built conservation matrix: {} elements x {} compounds",
        num_rows, num_cols
    );

    Ok(ParsedEquation {
        reactants,
        products,
        elements,
        matrix,
    })
}

/// Element symbols of one compound in order of first appearance in the text.
/// The count map loses that order, so the compound string is rescanned with the
/// same `[A-Z][a-z]?` symbol rule the parser uses.
fn symbols_in_order(compound: &str) -> Vec<String> {
    let chars: Vec<char> = compound.chars().collect();
    let mut order = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_uppercase() {
            let mut symbol = String::from(chars[i]);
            i += 1;
            if i < chars.len() && chars[i].is_ascii_lowercase() {
                symbol.push(chars[i]);
                i += 1;
            }
            if !order.contains(&symbol) {
                order.push(symbol);
            }
        } else {
            i += 1;
        }
    }
    order
}
