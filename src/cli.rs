/// Interactive terminal menus: equation balancing, molar masses, stoichiometric
/// calculations and the exercise bank. Thin glue over the Balancer module.
pub mod cli_main;
pub mod cli_balancer;
pub mod cli_molmass;
pub mod cli_stoichiometry;
pub mod cli_exercises;
