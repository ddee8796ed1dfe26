use std::collections::HashMap;

/// Atomic composition of one compound: element symbol -> number of atoms
pub type ElementCount = HashMap<String, usize>;

/// merge `add` into `base`, each count scaled by `factor`
pub fn merge_counts(base: &mut ElementCount, add: &ElementCount, factor: usize) {
    for (symbol, quantity) in add.iter() {
        *base.entry(symbol.clone()).or_insert(0) += quantity * factor;
    }
}

/// Parse a single compound formula like "Mg3(PO4)2" into its atomic composition.
/// The grammar is: element symbols `[A-Z][a-z]?` with an optional digit run as the
/// atom count (default 1), and parenthesized groups with an optional digit run as
/// a multiplier. Characters that fit neither (whitespace, stray symbols, digits
/// with nothing to attach to) are skipped. An unmatched '(' is closed silently at
/// the end of the string. Both leniencies are intentional and must not be
/// tightened: callers rely on strings like "2H2O" parsing as "H2O".
pub fn parse_formula(formula: &str) -> ElementCount {
    let chars: Vec<char> = formula.chars().collect();
    let mut position = 0;
    parse_group(&chars, &mut position)
}

/// One recursion level: parses until the matching ')' or the end of the string.
/// The cursor is threaded through recursive calls so the whole formula is
/// consumed in a single left-to-right pass.
fn parse_group(chars: &[char], position: &mut usize) -> ElementCount {
    let mut counts = ElementCount::new();
    while *position < chars.len() {
        let c = chars[*position];
        if c == '(' {
            *position += 1;
            let inner = parse_group(chars, position);
            let multiplier = read_digit_run(chars, position).unwrap_or(1);
            merge_counts(&mut counts, &inner, multiplier);
        } else if c == ')' {
            *position += 1;
            break;
        } else if c.is_ascii_uppercase() {
            let mut symbol = String::from(c);
            *position += 1;
            // two-letter element names continue with one lowercase letter
            if *position < chars.len() && chars[*position].is_ascii_lowercase() {
                symbol.push(chars[*position]);
                *position += 1;
            }
            let count = read_digit_run(chars, position).unwrap_or(1);
            *counts.entry(symbol).or_insert(0) += count;
        } else {
            *position += 1;
        }
    }
    counts
}

/// Consume a run of decimal digits at the cursor, `None` if there is none.
fn read_digit_run(chars: &[char], position: &mut usize) -> Option<usize> {
    let start = *position;
    while *position < chars.len() && chars[*position].is_ascii_digit() {
        *position += 1;
    }
    if start == *position {
        None
    } else {
        let run: String = chars[start..*position].iter().collect();
        Some(run.parse().unwrap())
    }
}
