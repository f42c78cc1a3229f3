//! Symbolic rate expressions
//!
//! Reaction networks carry their right-hand sides as strings over species
//! symbols (`s0`, `s1`, ...) and rate constant names. This module parses
//! those strings into a flattened polynomial form, substitutes symbol names
//! wholesale, and prints the result in the canonical order used by the
//! reference ODE systems, so that two equal systems render as equal strings.

mod parser;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("Unexpected character '{0}' in expression")]
    UnexpectedChar(char),
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("Malformed number '{0}'")]
    MalformedNumber(String),
    #[error("Exponent must be a non-negative integer, found '{0}'")]
    NonIntegerExponent(String),
    #[error("Cannot raise a multi-term expression to a power")]
    CompositePower,
    #[error("Division is only supported by numeric literals")]
    SymbolicDivisor,
    #[error("Division by zero")]
    ZeroDivisor,
}

/// Numeric coefficient of a term
///
/// Integer and floating-point coefficients are kept distinct because the
/// canonical printer treats them differently: `Int(1)` is omitted in front
/// of a product while `Float(1.0)` is always written out. Network compilers
/// emit float coefficients for the statistical factors of homomeric
/// reactions, and those must survive rewriting verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Coeff {
    Int(i64),
    Float(f64),
}

impl Coeff {
    pub fn as_f64(&self) -> f64 {
        match self {
            Coeff::Int(n) => *n as f64,
            Coeff::Float(f) => *f,
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Coeff::Int(n) => *n == 0,
            Coeff::Float(f) => *f == 0.0,
        }
    }

    fn is_negative(&self) -> bool {
        match self {
            Coeff::Int(n) => *n < 0,
            Coeff::Float(f) => *f < 0.0,
        }
    }

    fn neg(self) -> Self {
        match self {
            Coeff::Int(n) => Coeff::Int(-n),
            Coeff::Float(f) => Coeff::Float(-f),
        }
    }

    fn abs(self) -> Self {
        if self.is_negative() {
            self.neg()
        } else {
            self
        }
    }

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Coeff::Int(a), Coeff::Int(b)) => Coeff::Int(a * b),
            (a, b) => Coeff::Float(a.as_f64() * b.as_f64()),
        }
    }

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Coeff::Int(a), Coeff::Int(b)) => Coeff::Int(a + b),
            (a, b) => Coeff::Float(a.as_f64() + b.as_f64()),
        }
    }

    fn pow(self, exp: u32) -> Self {
        match self {
            Coeff::Int(n) => Coeff::Int(n.pow(exp)),
            Coeff::Float(f) => Coeff::Float(f.powi(exp as i32)),
        }
    }
}

impl fmt::Display for Coeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coeff::Int(n) => write!(f, "{}", n),
            // Shortest round-trip form: 0.25, 0.002, 5e-5
            Coeff::Float(x) => write!(f, "{:?}", x),
        }
    }
}

/// A single product term: coefficient times symbol powers
///
/// Factors are kept sorted by symbol name with merged exponents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    coeff: Coeff,
    factors: Vec<(String, u32)>,
}

impl Term {
    pub(crate) fn constant(coeff: Coeff) -> Self {
        Term {
            coeff,
            factors: Vec::new(),
        }
    }

    pub(crate) fn symbol(name: String) -> Self {
        Term {
            coeff: Coeff::Int(1),
            factors: vec![(name, 1)],
        }
    }

    pub fn coeff(&self) -> Coeff {
        self.coeff
    }

    pub fn factors(&self) -> &[(String, u32)] {
        &self.factors
    }

    fn normalized_factors(mut factors: Vec<(String, u32)>) -> Vec<(String, u32)> {
        factors.sort_by(|a, b| a.0.cmp(&b.0));
        let mut merged: Vec<(String, u32)> = Vec::with_capacity(factors.len());
        for (name, exp) in factors {
            match merged.last_mut() {
                Some((last, e)) if *last == name => *e += exp,
                _ => merged.push((name, exp)),
            }
        }
        merged
    }

    fn mul(&self, rhs: &Term) -> Term {
        let mut factors = self.factors.clone();
        factors.extend(rhs.factors.iter().cloned());
        Term {
            coeff: self.coeff.mul(rhs.coeff),
            factors: Self::normalized_factors(factors),
        }
    }

    fn pow(&self, exp: u32) -> Term {
        if exp == 0 {
            return Term::constant(Coeff::Int(1));
        }
        Term {
            coeff: self.coeff.pow(exp),
            factors: self
                .factors
                .iter()
                .map(|(name, e)| (name.clone(), e * exp))
                .collect(),
        }
    }

    fn exponent_vector(&self, generators: &[&str]) -> Vec<u32> {
        generators
            .iter()
            .map(|g| {
                self.factors
                    .iter()
                    .find(|(name, _)| name == g)
                    .map(|(_, e)| *e)
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// A rate expression in canonical polynomial form
///
/// Construction always normalizes: like terms are combined, zero terms are
/// dropped, and the terms are ordered by descending lexicographic comparison
/// of their exponent vectors over the expression's name-sorted symbol set.
/// [Display](std::fmt::Display) renders exactly that order, which makes
/// string equality of two rendered expressions meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expr {
    terms: Vec<Term>,
}

impl Expr {
    /// Parse a rate expression.
    ///
    /// The grammar covers sums and differences of products, unary minus,
    /// parentheses, `**` powers with non-negative integer exponents, and
    /// division by numeric literals. Rate laws of mass-action networks are
    /// polynomial, so anything beyond that is rejected.
    pub fn parse(input: &str) -> Result<Expr, ExprError> {
        parser::parse(input)
    }

    pub(crate) fn from_terms(terms: Vec<Term>) -> Expr {
        // Combine like terms, keyed by their normalized factor list
        let mut combined: BTreeMap<Vec<(String, u32)>, Coeff> = BTreeMap::new();
        for term in terms {
            match combined.entry(term.factors.clone()) {
                std::collections::btree_map::Entry::Occupied(mut e) => {
                    let sum = e.get().add(term.coeff);
                    *e.get_mut() = sum;
                }
                std::collections::btree_map::Entry::Vacant(e) => {
                    e.insert(term.coeff);
                }
            }
        }
        let terms: Vec<Term> = combined
            .into_iter()
            .filter(|(_, coeff)| !coeff.is_zero())
            .map(|(factors, coeff)| Term { coeff, factors })
            .collect();

        let generator_set: BTreeSet<&str> = terms
            .iter()
            .flat_map(|t| t.factors.iter().map(|(name, _)| name.as_str()))
            .collect();
        let generators: Vec<&str> = generator_set.into_iter().collect();

        let keys: Vec<Vec<u32>> = terms
            .iter()
            .map(|t| t.exponent_vector(&generators))
            .collect();
        let mut keyed: Vec<(Vec<u32>, Term)> = keys.into_iter().zip(terms).collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));

        Expr {
            terms: keyed.into_iter().map(|(_, t)| t).collect(),
        }
    }

    /// Replace whole symbols according to `table`, leaving unmapped symbols
    /// untouched, and renormalize.
    ///
    /// Substitution is simultaneous; a produced name is never itself looked
    /// up again, so applying the same table twice is a no-op once every key
    /// has been replaced.
    pub fn rename(&self, table: &HashMap<String, String>) -> Expr {
        let terms = self
            .terms
            .iter()
            .map(|term| Term {
                coeff: term.coeff,
                factors: Term::normalized_factors(
                    term.factors
                        .iter()
                        .map(|(name, exp)| {
                            let name = table.get(name).cloned().unwrap_or_else(|| name.clone());
                            (name, *exp)
                        })
                        .collect(),
                ),
            })
            .collect();
        Expr::from_terms(terms)
    }

    /// All distinct symbol names, in sorted order.
    pub fn symbols(&self) -> BTreeSet<&str> {
        self.terms
            .iter()
            .flat_map(|t| t.factors.iter().map(|(name, _)| name.as_str()))
            .collect()
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub(crate) fn add(&self, rhs: &Expr) -> Expr {
        let mut terms = self.terms.clone();
        terms.extend(rhs.terms.iter().cloned());
        Expr::from_terms(terms)
    }

    pub(crate) fn neg(&self) -> Expr {
        Expr {
            terms: self
                .terms
                .iter()
                .map(|t| Term {
                    coeff: t.coeff.neg(),
                    factors: t.factors.clone(),
                })
                .collect(),
        }
    }

    pub(crate) fn mul(&self, rhs: &Expr) -> Expr {
        let mut terms = Vec::with_capacity(self.terms.len() * rhs.terms.len());
        for a in &self.terms {
            for b in &rhs.terms {
                terms.push(a.mul(b));
            }
        }
        Expr::from_terms(terms)
    }

    pub(crate) fn div(&self, rhs: &Expr) -> Result<Expr, ExprError> {
        match rhs.terms.as_slice() {
            // Normalization reduces a zero divisor to the empty sum
            [] => Err(ExprError::ZeroDivisor),
            [term] if term.factors.is_empty() => {
                if term.coeff.is_zero() {
                    return Err(ExprError::ZeroDivisor);
                }
                let recip = Term::constant(Coeff::Float(1.0 / term.coeff.as_f64()));
                Ok(self.mul(&Expr { terms: vec![recip] }))
            }
            _ => Err(ExprError::SymbolicDivisor),
        }
    }

    pub(crate) fn pow(&self, exp: u32) -> Result<Expr, ExprError> {
        if exp == 0 {
            return Ok(Expr {
                terms: vec![Term::constant(Coeff::Int(1))],
            });
        }
        match self.terms.as_slice() {
            [] => Ok(Expr { terms: Vec::new() }),
            [term] => Ok(Expr::from_terms(vec![term.pow(exp)])),
            _ => Err(ExprError::CompositePower),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            let negative = term.coeff.is_negative();
            if i == 0 {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            let magnitude = term.coeff.abs();
            let unit_int = magnitude == Coeff::Int(1);
            if term.factors.is_empty() {
                write!(f, "{}", magnitude)?;
                continue;
            }
            if !unit_int {
                write!(f, "{}*", magnitude)?;
            }
            for (j, (name, exp)) in term.factors.iter().enumerate() {
                if j > 0 {
                    write!(f, "*")?;
                }
                if *exp == 1 {
                    write!(f, "{}", name)?;
                } else {
                    write!(f, "{}**{}", name, exp)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(input: &str) -> String {
        Expr::parse(input).unwrap().to_string()
    }

    #[test]
    fn canonical_form_is_stable() {
        let canonical = "AcBax*ActBcl2*k7 - Act*Bcl2*k5 + ActBcl2*k6";
        assert_eq!(roundtrip(canonical), canonical);
    }

    #[test]
    fn terms_order_by_descending_exponent_vectors() {
        // Highest power of the earliest-sorting symbol comes first
        assert_eq!(roundtrip("x + x**2"), "x**2 + x");
        assert_eq!(roundtrip("3 + x"), "x + 3");
        assert_eq!(roundtrip("b*a + c"), "a*b + c");
        assert_eq!(
            roundtrip("x*kon - x**2*koff"),
            "-koff*x**2 + kon*x"
        );
    }

    #[test]
    fn uppercase_sorts_before_lowercase_and_underscore() {
        assert_eq!(roundtrip("k1*Act + BH3*z - Bax*y"), "Act*k1 + BH3*z - Bax*y");
        assert_eq!(roundtrip("t_Bad_in*q + tBid*p"), "p*tBid + q*t_Bad_in");
    }

    #[test]
    fn like_terms_combine() {
        assert_eq!(roundtrip("x + x"), "2*x");
        assert_eq!(roundtrip("x - x"), "0");
        assert_eq!(roundtrip("2*x*y + y*x"), "3*x*y");
        assert_eq!(roundtrip("x*x*x"), "x**3");
    }

    #[test]
    fn cancelled_symbols_drop_out_of_the_ordering() {
        // b vanishes with its term, so the survivors order over {a, c} alone
        assert_eq!(roundtrip("c + a*b - b*a + a**2"), "a**2 + c");
        assert_eq!(roundtrip("s10*k1 + s4*k2 - s10*k1"), "k2*s4");
    }

    #[test]
    fn float_coefficients_print_verbatim() {
        assert_eq!(roundtrip("1.0*x**4"), "1.0*x**4");
        assert_eq!(roundtrip("0.25*x**4*k"), "0.25*k*x**4");
        assert_eq!(roundtrip("2e-3*x"), "0.002*x");
        assert_eq!(roundtrip("5e-5*y"), "5e-5*y");
    }

    #[test]
    fn integer_unit_coefficients_are_omitted() {
        assert_eq!(roundtrip("1*x"), "x");
        assert_eq!(roundtrip("-1*x"), "-x");
        assert_eq!(roundtrip("4*x"), "4*x");
    }

    #[test]
    fn float_and_integer_coefficients_stay_distinct() {
        // 1.0*x and x must not merge into the same rendering
        let float_form = Expr::parse("1.0*x").unwrap();
        let int_form = Expr::parse("x").unwrap();
        assert_ne!(float_form, int_form);
        assert_eq!(float_form.to_string(), "1.0*x");
        assert_eq!(int_form.to_string(), "x");
    }

    #[test]
    fn division_by_literal_folds_into_float() {
        assert_eq!(roundtrip("x/4"), "0.25*x");
        assert_eq!(roundtrip("x/0.5"), "2.0*x");
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert_eq!(Expr::parse("x/0"), Err(ExprError::ZeroDivisor));
        assert_eq!(Expr::parse("x/0.0"), Err(ExprError::ZeroDivisor));
        assert_eq!(Expr::parse("x/(2 - 2)"), Err(ExprError::ZeroDivisor));
    }

    #[test]
    fn unary_minus_and_parens() {
        assert_eq!(roundtrip("-(x - y)"), "-x + y");
        assert_eq!(roundtrip("-x*-y"), "x*y");
        assert_eq!(roundtrip("2*(x + y)"), "2*x + 2*y");
    }

    #[test]
    fn zero_parses_and_prints() {
        assert_eq!(roundtrip("0"), "0");
        assert_eq!(Expr::parse("0").unwrap().is_zero(), true);
    }

    #[test]
    fn rename_replaces_whole_symbols_only() {
        let table: HashMap<String, String> = [
            ("s3".to_string(), "X".to_string()),
            ("k1".to_string(), "kon".to_string()),
            ("k2".to_string(), "koff".to_string()),
        ]
        .into_iter()
        .collect();
        let expr = Expr::parse("s3*k1 - s3**2*k2").unwrap();
        let renamed = expr.rename(&table);
        assert_eq!(renamed.to_string(), "-X**2*koff + X*kon");
        // s30 shares a prefix with s3 but is a different symbol
        let expr = Expr::parse("s30*k1").unwrap();
        assert_eq!(expr.rename(&table).to_string(), "kon*s30");
    }

    #[test]
    fn rename_is_idempotent_once_applied() {
        let table: HashMap<String, String> = [
            ("s0".to_string(), "Act".to_string()),
            ("bind_kf".to_string(), "k5".to_string()),
        ]
        .into_iter()
        .collect();
        let expr = Expr::parse("-bind_kf*s0**2 + s0").unwrap();
        let once = expr.rename(&table);
        let twice = once.rename(&table);
        assert_eq!(once, twice);
        assert_eq!(once.to_string(), twice.to_string());
    }

    #[test]
    fn unmapped_symbols_pass_through() {
        let table: HashMap<String, String> =
            [("s1".to_string(), "Bax".to_string())].into_iter().collect();
        let expr = Expr::parse("s1*krypton").unwrap();
        assert_eq!(expr.rename(&table).to_string(), "Bax*krypton");
    }

    #[test]
    fn symbols_are_collected_sorted() {
        let expr = Expr::parse("z*a + Bcl2*k").unwrap();
        let symbols: Vec<&str> = expr.symbols().into_iter().collect();
        assert_eq!(symbols, vec!["Bcl2", "a", "k", "z"]);
    }

    #[test]
    fn rejects_unsupported_forms() {
        assert_eq!(Expr::parse("x/y"), Err(ExprError::SymbolicDivisor));
        assert_eq!(Expr::parse("(x + y)**2"), Err(ExprError::CompositePower));
        assert!(matches!(
            Expr::parse("x**y"),
            Err(ExprError::NonIntegerExponent(_))
        ));
        assert!(matches!(
            Expr::parse("x**-2"),
            Err(ExprError::NonIntegerExponent(_))
        ));
        assert_eq!(Expr::parse("x +"), Err(ExprError::UnexpectedEnd));
        assert!(matches!(Expr::parse("x @ y"), Err(ExprError::UnexpectedChar('@'))));
    }

    #[test]
    fn power_of_single_term_expands() {
        assert_eq!(roundtrip("(2*x)**2"), "4*x**2");
        assert_eq!(roundtrip("x**0"), "1");
    }
}
