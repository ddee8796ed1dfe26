use crate::Balancer::balance_api::BalanceError;
use log::debug;
use nalgebra::DMatrix;

/// pivots and leading entries below this magnitude are treated as zero
const ZERO_TOL: f64 = 1e-10;
/// real coefficients are scaled by this and rounded before gcd reduction
const INT_SCALE: f64 = 1000.0;

/// Solve matrix * coefficients = 0 for the smallest positive integer coefficients.
/// The conservation system is rank-deficient by exactly one degree of freedom, so
/// the last compound's coefficient is fixed to 1 and the reduced system
/// A * x = b is solved, with A = all columns but the last and b = the negated
/// last column. The real solution is then rescaled to integers.
pub fn solve(matrix: &DMatrix<f64>) -> Result<Vec<i64>, BalanceError> {
    let num_compounds = matrix.ncols();
    if num_compounds <= 1 {
        return Err(BalanceError::TooFewCompounds);
    }
    let m = matrix.nrows();
    let n = num_compounds - 1;

    // augmented [A | b]
    let mut augmented = DMatrix::<f64>::zeros(m, n + 1);
    for i in 0..m {
        for j in 0..n {
            augmented[(i, j)] = matrix[(i, j)];
        }
        augmented[(i, n)] = -matrix[(i, num_compounds - 1)];
    }

    let reduced = gaussian_solve(&mut augmented, m, n).ok_or(BalanceError::UnsolvableSystem)?;
    debug!("real solution of the reduced system: {:?}", reduced);

    // the fixed compound gets coefficient 1, then all values are scaled and
    // rounded to absorb floating point round-off
    let mut coefficients: Vec<i64> = reduced
        .iter()
        .chain(std::iter::once(&1.0))
        .map(|value| (value * INT_SCALE).round() as i64)
        .collect();
    if coefficients.len() != num_compounds {
        return Err(BalanceError::UnsolvableSystem);
    }

    let mut overall = 0;
    for value in coefficients.iter() {
        overall = gcd(overall, *value);
    }
    if overall == 0 {
        overall = 1;
    }
    for value in coefficients.iter_mut() {
        *value /= overall;
    }

    if coefficients.iter().any(|&value| value == 0) {
        return Err(BalanceError::DegenerateSolution);
    }
    // sign is a global degree of freedom of the homogeneous system,
    // canonicalized to all-positive
    if coefficients.iter().any(|&value| value < 0) {
        for value in coefficients.iter_mut() {
            *value = -*value;
        }
    }
    Ok(coefficients)
}

/// Forward elimination with partial pivoting followed by back-substitution on an
/// augmented matrix (last column holds the right-hand side). Columns whose best
/// pivot is below ZERO_TOL are skipped; rows with no leading entry are redundant
/// constraints and are skipped in back-substitution. Unknowns never assigned
/// stay 0 and are caught downstream as a degenerate solution.
fn gaussian_solve(augmented: &mut DMatrix<f64>, m: usize, n: usize) -> Option<Vec<f64>> {
    if m == 0 || n == 0 {
        return None;
    }

    let mut row = 0;
    for col in 0..n {
        if row >= m {
            break;
        }
        let mut pivot = row;
        for r in (row + 1)..m {
            if augmented[(r, col)].abs() > augmented[(pivot, col)].abs() {
                pivot = r;
            }
        }
        if augmented[(pivot, col)].abs() < ZERO_TOL {
            continue;
        }
        augmented.swap_rows(row, pivot);

        let pivot_value = augmented[(row, col)];
        for c in col..=n {
            augmented[(row, c)] /= pivot_value;
        }
        for r in (row + 1)..m {
            let factor = augmented[(r, col)];
            for c in col..=n {
                augmented[(r, c)] -= factor * augmented[(row, c)];
            }
        }
        row += 1;
    }

    let mut solution = vec![0.0; n];
    for r in (0..m).rev() {
        let lead = match (0..n).find(|&c| augmented[(r, c)].abs() > ZERO_TOL) {
            Some(lead) => lead,
            None => continue,
        };
        let mut sum = augmented[(r, n)];
        for c in (lead + 1)..n {
            sum -= augmented[(r, c)] * solution[c];
        }
        solution[lead] = sum / augmented[(r, lead)];
    }
    Some(solution)
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Balancer::equation_builder::build_equation;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_water() {
        let parsed = build_equation("H2 + O2 -> H2O").unwrap();
        assert_eq!(solve(&parsed.matrix).unwrap(), vec![2, 1, 2]);
    }

    #[test]
    fn test_rank_deficient_rows_are_skipped() {
        // 5 elements but only 3 unknowns: redundant rows must not break anything
        let parsed = build_equation("Na3PO4 + MgCl2 -> NaCl + Mg3(PO4)2").unwrap();
        assert_eq!(solve(&parsed.matrix).unwrap(), vec![2, 3, 6, 1]);
    }

    #[test]
    fn test_too_few_compounds() {
        let matrix = DMatrix::from_row_slice(1, 1, &[2.0]);
        assert_eq!(solve(&matrix), Err(BalanceError::TooFewCompounds));
    }

    #[test]
    fn test_degenerate_solution() {
        // C + O2 -> CO + CO2 is under-determined: one coefficient defaults to 0
        let parsed = build_equation("C + O2 -> CO + CO2").unwrap();
        assert_eq!(solve(&parsed.matrix), Err(BalanceError::DegenerateSolution));
    }

    #[test]
    fn test_solution_satisfies_conservation() {
        let parsed = build_equation("C3H8 + O2 -> CO2 + H2O").unwrap();
        let coefficients = solve(&parsed.matrix).unwrap();
        assert_eq!(coefficients, vec![1, 5, 3, 4]);
        for i in 0..parsed.matrix.nrows() {
            let mut balance = 0.0;
            for j in 0..parsed.matrix.ncols() {
                balance += parsed.matrix[(i, j)] * coefficients[j] as f64;
            }
            assert_abs_diff_eq!(balance, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_gcd_reduction() {
        // Fe + O2 -> Fe2O3 solves to the reals [2, 1.5, 1]; scaling and gcd
        // reduction must land on [4, 3, 2]
        let parsed = build_equation("Fe + O2 -> Fe2O3").unwrap();
        assert_eq!(solve(&parsed.matrix).unwrap(), vec![4, 3, 2]);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(gcd(0, 0), 0);
    }
}
