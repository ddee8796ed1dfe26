/// The module parses a single chemical formula (possibly containing parenthesized
/// groups with multipliers) into a map of element symbols and atom counts.
/// Recursive descent over an explicit cursor, one pass, no backtracking.
///
///  # Examples
/// ```
/// use ChemBalancer::Balancer::formula_parser::parse_formula;
/// let composition = parse_formula("Mg3(PO4)2");
/// assert_eq!(composition.get("O"), Some(&8));
/// ```
pub mod formula_parser;
/// The module takes as input a chemical equation given as a String and produces the following data:
/// 1) an ordered vector of reactant compounds and an ordered vector of product compounds
/// 2) a vector of all element symbols in the order they are first encountered
/// 3) the element conservation matrix: one row per element, one column per compound,
/// reactant contributions positive, product contributions negative
///
///  # Examples
/// ```
/// use ChemBalancer::Balancer::equation_builder::build_equation;
/// let parsed = build_equation("H2 + O2 -> H2O").unwrap();
/// assert_eq!(parsed.elements, vec!["H".to_string(), "O".to_string()]);
/// assert_eq!(parsed.matrix.ncols(), 3);
/// ```
pub mod equation_builder;
/// The module solves the homogeneous system matrix * coefficients = 0: the last
/// coefficient is fixed to 1, the reduced system is solved by Gaussian elimination
/// with partial pivoting, and the real-valued solution is rescaled to the smallest
/// tuple of positive integers
pub mod solver;
/// Entry point for collaborators: balance an equation string and receive either a
/// formatted balanced equation or a typed error
///
///  # Examples
/// ```
/// use ChemBalancer::Balancer::balance_api::balance;
/// let solved = balance("C3H8 + O2 -> CO2 + H2O").unwrap();
/// assert_eq!(solved.coefficients, vec![1, 5, 3, 4]);
/// println!("{}", solved);
/// ```
pub mod balance_api;
/// Module to calculate the atomic composition and molar mass of a chemical formula
///
///  # Examples
/// ```
/// use ChemBalancer::Balancer::molmass::calculate_molar_mass;
/// let (molar_mass, composition) = calculate_molar_mass("C6H8O6");
/// println!("Element counts: {:?}", composition);
/// println!("Molar mass: {:?} g/mol", molar_mass);
/// ```
pub mod molmass;
/// Stoichiometric calculations on top of a balanced equation: given the mole ratio
/// between a reactant and a product and their molar masses, convert an amount of
/// reactant into moles and mass of product. Also unit conversions between
/// mol, gram, liter (STP) and number of particles
pub mod stoichiometry;
/// Bank of balancing exercises grouped by difficulty, answers produced by the solver
pub mod exercises;
