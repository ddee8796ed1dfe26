use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// particles per mol
pub const AVOGADRO: f64 = 6.022e23;
/// molar volume of an ideal gas at STP, L/mol
pub const MOLAR_VOLUME_STP: f64 = 22.4;

/// error types for stoichiometric calculations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoichError {
    #[error("Fill in every field with a positive numeric value")]
    NonPositiveInput,
}

/// Units an amount of substance can be given in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountUnit {
    Mol,
    Gram,
    Liter,
    Particles,
}

/// Convert an amount in `unit` to moles. Gram conversions use the compound's
/// molar mass, liter conversions assume an ideal gas at STP.
pub fn to_moles(value: f64, unit: AmountUnit, molar_mass: f64) -> f64 {
    match unit {
        AmountUnit::Mol => value,
        AmountUnit::Gram => value / molar_mass,
        AmountUnit::Liter => value / MOLAR_VOLUME_STP,
        AmountUnit::Particles => value / AVOGADRO,
    }
}

/// Convert moles back to an amount in `unit`.
pub fn from_moles(moles: f64, unit: AmountUnit, molar_mass: f64) -> f64 {
    match unit {
        AmountUnit::Mol => moles,
        AmountUnit::Gram => moles * molar_mass,
        AmountUnit::Liter => moles * MOLAR_VOLUME_STP,
        AmountUnit::Particles => moles * AVOGADRO,
    }
}

/// Result of a reactant -> product conversion along a balanced mole ratio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoichAmounts {
    pub reactant_moles: f64,
    pub product_moles: f64,
    pub product_mass: f64,
}

/// Given the mole ratio a*R -> b*P taken from a balanced equation, the molar
/// masses of R and P, and an amount of R, compute the moles of R consumed and
/// the moles and mass of P formed. Limiting-reagent logic across several
/// reactants is out of scope; the ratio relates exactly one reactant to one
/// product.
pub fn product_amounts(
    coef_reactant: f64,
    coef_product: f64,
    molar_mass_reactant: f64,
    molar_mass_product: f64,
    amount: f64,
    unit: AmountUnit,
) -> Result<StoichAmounts, StoichError> {
    let inputs = [
        coef_reactant,
        coef_product,
        molar_mass_reactant,
        molar_mass_product,
        amount,
    ];
    if inputs.iter().any(|value| !value.is_finite() || *value <= 0.0) {
        return Err(StoichError::NonPositiveInput);
    }

    let reactant_moles = to_moles(amount, unit, molar_mass_reactant);
    let product_moles = (coef_product / coef_reactant) * reactant_moles;
    let product_mass = product_moles * molar_mass_product;
    debug!(
        "stoichiometry {}R -> {}P: {} mol R gives {} mol P",
        coef_reactant, coef_product, reactant_moles, product_moles
    );

    Ok(StoichAmounts {
        reactant_moles,
        product_moles,
        product_mass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_conversions_round_trip() {
        let moles = to_moles(22.4, AmountUnit::Liter, 18.015);
        assert_relative_eq!(moles, 1.0, max_relative = 1e-12);
        assert_relative_eq!(
            from_moles(1.0, AmountUnit::Particles, 18.015),
            AVOGADRO,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            to_moles(from_moles(2.5, AmountUnit::Gram, 44.01), AmountUnit::Gram, 44.01),
            2.5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_water_formation_from_grams() {
        // 2H2 + O2 -> 2H2O: 4 g of H2 gives the same amount in moles of water
        let amounts = product_amounts(2.0, 2.0, 2.016, 18.015, 4.0, AmountUnit::Gram).unwrap();
        assert_relative_eq!(amounts.reactant_moles, 4.0 / 2.016, max_relative = 1e-12);
        assert_relative_eq!(amounts.product_moles, amounts.reactant_moles, max_relative = 1e-12);
        assert_relative_eq!(
            amounts.product_mass,
            amounts.product_moles * 18.015,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_ratio_is_applied() {
        // N2 + 3H2 -> 2NH3: 3 mol of H2 gives 2 mol of NH3
        let amounts = product_amounts(3.0, 2.0, 2.016, 17.031, 3.0, AmountUnit::Mol).unwrap();
        assert_relative_eq!(amounts.product_moles, 2.0, max_relative = 1e-12);
    }

    #[test]
    fn test_non_positive_input() {
        assert_eq!(
            product_amounts(0.0, 2.0, 2.016, 18.015, 1.0, AmountUnit::Mol),
            Err(StoichError::NonPositiveInput)
        );
        assert_eq!(
            product_amounts(1.0, 2.0, 2.016, 18.015, -3.0, AmountUnit::Gram),
            Err(StoichError::NonPositiveInput)
        );
        assert_eq!(
            product_amounts(1.0, f64::NAN, 2.016, 18.015, 3.0, AmountUnit::Gram),
            Err(StoichError::NonPositiveInput)
        );
    }
}
