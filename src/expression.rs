//! Sum-of-products assembly

use crate::grid::VariableCode;
use crate::term::ProductTerm;
use std::fmt;

/// The simplified function read off a map
///
/// Terms keep group-discovery order (largest groups first), not any canonical
/// ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// No group was accepted; renders as the empty string
    Empty,
    /// Some group covers the whole variable space; renders as `1`
    True,
    /// Product terms joined by ` + `
    Sum(Vec<ProductTerm>),
}

impl Expression {
    /// Join the terms of all accepted groups
    ///
    /// A tautological term makes the whole sum constant true, so it collapses
    /// the expression to [`Expression::True`] rather than being dropped.
    ///
    /// ```
    /// use kmap_vision::Expression;
    ///
    /// assert_eq!(Expression::from_terms(Vec::new()).to_string(), "");
    /// ```
    pub fn from_terms(terms: Vec<ProductTerm>) -> Expression {
        if terms.is_empty() {
            Expression::Empty
        } else if terms.iter().any(ProductTerm::is_tautology) {
            Expression::True
        } else {
            Expression::Sum(terms)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Expression::Empty)
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Expression::True)
    }

    /// The product terms of a [`Expression::Sum`], empty otherwise
    pub fn terms(&self) -> &[ProductTerm] {
        match self {
            Expression::Sum(terms) => terms,
            Expression::Empty | Expression::True => &[],
        }
    }

    /// Evaluate the function for the cell with `code`
    pub fn evaluate(&self, code: &VariableCode) -> bool {
        match self {
            Expression::Empty => false,
            Expression::True => true,
            Expression::Sum(terms) => terms.iter().any(|term| term.evaluate(code)),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Empty => Ok(()),
            Expression::True => write!(f, "1"),
            Expression::Sum(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", term)?;
                }
                Ok(())
            }
        }
    }
}
