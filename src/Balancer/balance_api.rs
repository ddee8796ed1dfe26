use crate::Balancer::equation_builder::build_equation;
use crate::Balancer::solver::solve;
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// error types for equation balancing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BalanceError {
    #[error("Invalid equation. Use the format: H2 + O2 -> H2O")]
    InvalidEquationFormat,
    #[error("The equation is too simple or invalid for balancing")]
    TooFewCompounds,
    #[error("Balancing produced an invalid solution")]
    DegenerateSolution,
    #[error("This equation could not be balanced")]
    UnsolvableSystem,
}

/// A balanced equation: both sides formatted with their integer coefficients,
/// plus the raw coefficient vector in compound order (reactants then products).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BalancedEquation {
    pub left_side: String,
    pub right_side: String,
    pub coefficients: Vec<i64>,
}

impl fmt::Display for BalancedEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.left_side, self.right_side)
    }
}

/// Balance a chemical equation given as text, e.g. "C3H8 + O2 -> CO2 + H2O".
/// Pure function of its input: each call parses, builds the conservation
/// matrix, solves it and formats the result, with no shared state.
pub fn balance(equation: &str) -> Result<BalancedEquation, BalanceError> {
    let parsed = build_equation(equation)?;
    let coefficients = solve(&parsed.matrix)?;

    let left_side = format_side(&parsed.reactants, &coefficients[..parsed.reactants.len()]);
    let right_side = format_side(&parsed.products, &coefficients[parsed.reactants.len()..]);
    info!("balanced: {} → {}", left_side, right_side);

    Ok(BalancedEquation {
        left_side,
        right_side,
        coefficients,
    })
}

/// A coefficient of 1 is left invisible, any other is printed right before its
/// compound; compounds are joined by " + ".
fn format_side(compounds: &[String], coefficients: &[i64]) -> String {
    compounds
        .iter()
        .zip(coefficients.iter())
        .map(|(compound, &quantity)| {
            if quantity == 1 {
                compound.clone()
            } else {
                format!("{}{}", quantity, compound)
            }
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_formatting() {
        let solved = balance("H2 + O2 -> H2O").unwrap();
        assert_eq!(solved.coefficients, vec![2, 1, 2]);
        assert_eq!(solved.left_side, "2H2 + O2");
        assert_eq!(solved.right_side, "2H2O");
        assert_eq!(solved.to_string(), "2H2 + O2 → 2H2O");
    }

    #[test]
    fn test_unit_coefficients_are_invisible() {
        let solved = balance("C3H8 + O2 -> CO2 + H2O").unwrap();
        assert_eq!(solved.left_side, "C3H8 + 5O2");
        assert_eq!(solved.right_side, "3CO2 + 4H2O");
    }

    #[test]
    fn test_json_round_trip() {
        let solved = balance("Fe + O2 -> Fe2O3").unwrap();
        let json = serde_json::to_string(&solved).unwrap();
        let back: BalancedEquation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, solved);
    }

    #[test]
    fn test_error_messages_are_presentable() {
        let err = balance("H2 O2 H2O").unwrap_err();
        assert_eq!(err, BalanceError::InvalidEquationFormat);
        assert!(err.to_string().contains("H2 + O2 -> H2O"));
    }
}
