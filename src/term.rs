//! Product-term reduction for accepted groups
//!
//! A group's term keeps one literal per variable whose bit is the same in
//! every member cell. Variables that change inside the group are eliminated.

use crate::grid::{Encoding, VariableCode};
use crate::search::Group;
use std::fmt;

/// A possibly negated variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Bit position of the variable within a [`VariableCode`]
    pub index: usize,
    pub name: &'static str,
    /// `false` for a complemented literal such as `B'`
    pub positive: bool,
}

impl Literal {
    /// Whether `code` satisfies this literal
    pub fn evaluate(&self, code: &VariableCode) -> bool {
        code.bit(self.index) == self.positive
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}'", self.name)
        }
    }
}

/// A conjunction of literals, rendered without separators (`AB'C`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ProductTerm {
    literals: Vec<Literal>,
}

impl ProductTerm {
    /// Reduce the member codes of one group to their common literals
    ///
    /// `variables` names the bits of the codes, in order. An empty `codes`
    /// slice yields the empty term.
    ///
    /// ```
    /// use kmap_vision::grid::VariableCode;
    /// use kmap_vision::term::ProductTerm;
    ///
    /// let codes = [VariableCode::new(0b100, 3), VariableCode::new(0b110, 3)];
    /// let term = ProductTerm::reduce(&codes, &["A", "B", "C"]);
    /// assert_eq!(term.to_string(), "AC'");
    /// ```
    pub fn reduce(codes: &[VariableCode], variables: &[&'static str]) -> ProductTerm {
        let Some((first, rest)) = codes.split_first() else {
            return ProductTerm::default();
        };

        let literals = variables
            .iter()
            .enumerate()
            .take(first.width())
            .filter(|&(k, _)| rest.iter().all(|code| code.bit(k) == first.bit(k)))
            .map(|(k, &name)| Literal {
                index: k,
                name,
                positive: first.bit(k),
            })
            .collect();

        ProductTerm { literals }
    }

    /// Reduce a group of cells using the grid's encoding
    pub fn for_group(group: &Group, encoding: &Encoding) -> ProductTerm {
        let codes: Vec<VariableCode> = group
            .cells()
            .map(|(row, col)| encoding.code(row, col))
            .collect();
        Self::reduce(&codes, encoding.variables())
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// True when every variable was eliminated, i.e. the term is constant 1
    pub fn is_tautology(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether the cell with `code` satisfies every literal
    pub fn evaluate(&self, code: &VariableCode) -> bool {
        self.literals.iter().all(|literal| literal.evaluate(code))
    }
}

impl fmt::Display for ProductTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for literal in &self.literals {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}
