use crate::Balancer::balance_api::{BalanceError, balance};
use serde::{Deserialize, Serialize};

/// Difficulty levels of the exercise bank. Pools are cumulative: a harder
/// level always includes the easier pools too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One balancing exercise: the unbalanced equation to hand to a student and
/// the balanced answer produced by the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub equation: String,
    pub answer: String,
}

const EASY_POOL: &[&str] = &["H2 + O2 -> H2O", "Na + Cl2 -> NaCl", "N2 + H2 -> NH3"];

const MEDIUM_POOL: &[&str] = &[
    "Fe + O2 -> Fe2O3",
    "Al + O2 -> Al2O3",
    "C3H8 + O2 -> CO2 + H2O",
];

const HARD_POOL: &[&str] = &[
    "KMnO4 + HCl -> KCl + MnCl2 + H2O + Cl2",
    "Na3PO4 + MgCl2 -> NaCl + Mg3(PO4)2",
];

/// All exercises available at `level`, answers computed by the balancer so the
/// bank can never drift out of sync with the solver.
pub fn exercise_pool(level: Difficulty) -> Result<Vec<Exercise>, BalanceError> {
    let pools: &[&[&str]] = match level {
        Difficulty::Easy => &[EASY_POOL],
        Difficulty::Medium => &[EASY_POOL, MEDIUM_POOL],
        Difficulty::Hard => &[EASY_POOL, MEDIUM_POOL, HARD_POOL],
    };
    let mut exercises = Vec::new();
    for pool in pools {
        for equation in pool.iter() {
            let solved = balance(equation)?;
            exercises.push(Exercise {
                equation: equation.to_string(),
                answer: solved.to_string(),
            });
        }
    }
    Ok(exercises)
}

/// Check a student's coefficient list against the solver's answer.
pub fn check_answer(equation: &str, coefficients: &[i64]) -> Result<bool, BalanceError> {
    let solved = balance(equation)?;
    Ok(solved.coefficients == coefficients)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_are_cumulative() {
        let easy = exercise_pool(Difficulty::Easy).unwrap();
        let medium = exercise_pool(Difficulty::Medium).unwrap();
        let hard = exercise_pool(Difficulty::Hard).unwrap();
        assert_eq!(easy.len(), 3);
        assert_eq!(medium.len(), 6);
        assert_eq!(hard.len(), 8);
        assert_eq!(&medium[..3], &easy[..]);
        assert_eq!(&hard[..6], &medium[..]);
    }

    #[test]
    fn test_recorded_answers() {
        let expected = [
            ("H2 + O2 -> H2O", "2H2 + O2 → 2H2O"),
            ("Na + Cl2 -> NaCl", "2Na + Cl2 → 2NaCl"),
            ("N2 + H2 -> NH3", "N2 + 3H2 → 2NH3"),
            ("Fe + O2 -> Fe2O3", "4Fe + 3O2 → 2Fe2O3"),
            ("Al + O2 -> Al2O3", "4Al + 3O2 → 2Al2O3"),
            ("C3H8 + O2 -> CO2 + H2O", "C3H8 + 5O2 → 3CO2 + 4H2O"),
            (
                "KMnO4 + HCl -> KCl + MnCl2 + H2O + Cl2",
                "2KMnO4 + 16HCl → 2KCl + 2MnCl2 + 8H2O + 5Cl2",
            ),
            (
                "Na3PO4 + MgCl2 -> NaCl + Mg3(PO4)2",
                "2Na3PO4 + 3MgCl2 → 6NaCl + Mg3(PO4)2",
            ),
        ];
        let hard = exercise_pool(Difficulty::Hard).unwrap();
        assert_eq!(hard.len(), expected.len());
        for (exercise, (equation, answer)) in hard.iter().zip(expected.iter()) {
            assert_eq!(&exercise.equation, equation);
            assert_eq!(&exercise.answer, answer);
        }
    }

    #[test]
    fn test_check_answer() {
        assert!(check_answer("H2 + O2 -> H2O", &[2, 1, 2]).unwrap());
        assert!(!check_answer("H2 + O2 -> H2O", &[4, 2, 4]).unwrap());
        assert_eq!(
            check_answer("H2 O2 H2O", &[1]),
            Err(BalanceError::InvalidEquationFormat)
        );
    }
}
