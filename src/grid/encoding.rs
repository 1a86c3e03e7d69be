//! Gray-code variable assignment for grid cells
//!
//! Rows and columns are each addressed by a reflected binary Gray code, so any
//! two index-adjacent rows (or columns) differ in exactly one bit. A cell's
//! [`VariableCode`] is its row code followed by its column code, and the bits
//! are named from a fixed pool: row variables first, then column variables.

use super::{Grid, GridError};
use std::fmt;

/// Names given to the map variables, consumed in order
pub const VARIABLE_NAMES: [&str; 4] = ["A", "B", "C", "D"];

/// The `index`-th value of the reflected binary Gray code
///
/// ```
/// use kmap_vision::grid::encoding::gray_code;
///
/// let sequence: Vec<u32> = (0..4).map(gray_code).collect();
/// assert_eq!(sequence, vec![0b00, 0b01, 0b11, 0b10]);
/// ```
pub fn gray_code(index: u32) -> u32 {
    index ^ (index >> 1)
}

/// The full `bits`-wide Gray sequence, `2^bits` codes long
pub fn gray_codes(bits: u8) -> Vec<VariableCode> {
    debug_assert!(bits < 32);
    (0..1u32 << bits)
        .map(|i| VariableCode::new(gray_code(i), bits))
        .collect()
}

/// `log2(n)` when `n` is a power of two
pub fn exact_log2(n: usize) -> Option<u8> {
    if n.is_power_of_two() {
        Some(n.trailing_zeros() as u8)
    } else {
        None
    }
}

/// A fixed-width bit string, most significant bit first
///
/// Bit `0` is the leftmost character of the rendered string and corresponds to
/// the first variable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableCode {
    value: u32,
    width: u8,
}

impl VariableCode {
    pub fn new(value: u32, width: u8) -> Self {
        debug_assert!(width == 32 || value >> width == 0);
        VariableCode { value, width }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn width(&self) -> usize {
        usize::from(self.width)
    }

    /// The `k`-th bit counted from the left
    pub fn bit(&self, k: usize) -> bool {
        debug_assert!(k < self.width());
        (self.value >> (self.width() - 1 - k)) & 1 == 1
    }

    /// `self` followed by `other`
    pub fn concat(&self, other: &VariableCode) -> VariableCode {
        VariableCode::new(self.value << other.width | other.value, self.width + other.width)
    }

    /// Hamming distance between two codes of equal width
    pub fn distance(&self, other: &VariableCode) -> u32 {
        (self.value ^ other.value).count_ones()
    }

    /// The full product of literals this code satisfies, e.g. `A'B`
    pub fn minterm(&self, variables: &[&str]) -> String {
        let mut out = String::new();
        for (k, name) in variables.iter().enumerate().take(self.width()) {
            out.push_str(name);
            if !self.bit(k) {
                out.push('\'');
            }
        }
        out
    }
}

impl fmt::Display for VariableCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for k in 0..self.width() {
            write!(f, "{}", if self.bit(k) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Variable layout for a grid of a given size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding {
    row_codes: Vec<VariableCode>,
    col_codes: Vec<VariableCode>,
    variables: Vec<&'static str>,
    row_vars: usize,
}

impl Encoding {
    /// Build the encoding for a `rows x cols` map
    ///
    /// Fails when either dimension is not a power of two, or when the map
    /// needs more variables than [`VARIABLE_NAMES`] provides.
    ///
    /// ```
    /// use kmap_vision::grid::encoding::Encoding;
    ///
    /// let encoding = Encoding::new(2, 4).unwrap();
    /// assert_eq!(encoding.variables(), &["A", "B", "C"]);
    /// assert_eq!(encoding.code(1, 2).to_string(), "111");
    /// assert_eq!(encoding.minterm(1, 2), "ABC");
    /// ```
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let (row_vars, col_vars) = match (exact_log2(rows), exact_log2(cols)) {
            (Some(r), Some(c)) => (r, c),
            _ => return Err(GridError::MalformedGrid { rows, cols }),
        };

        let required = usize::from(row_vars) + usize::from(col_vars);
        let variables = VARIABLE_NAMES
            .get(..required)
            .ok_or(GridError::UnsupportedVariableCount {
                required,
                available: VARIABLE_NAMES.len(),
            })?
            .to_vec();

        Ok(Encoding {
            row_codes: gray_codes(row_vars),
            col_codes: gray_codes(col_vars),
            variables,
            row_vars: usize::from(row_vars),
        })
    }

    pub fn for_grid(grid: &Grid) -> Result<Self, GridError> {
        Self::new(grid.rows(), grid.cols())
    }

    /// Variable names in bit order
    pub fn variables(&self) -> &[&'static str] {
        &self.variables
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Variables addressing rows
    pub fn row_variables(&self) -> &[&'static str] {
        &self.variables[..self.row_vars]
    }

    /// Variables addressing columns
    pub fn col_variables(&self) -> &[&'static str] {
        &self.variables[self.row_vars..]
    }

    /// The code of the cell at `(row, col)`
    pub fn code(&self, row: usize, col: usize) -> VariableCode {
        self.row_codes[row].concat(&self.col_codes[col])
    }

    /// The minterm label of the cell at `(row, col)`
    pub fn minterm(&self, row: usize, col: usize) -> String {
        self.code(row, col).minterm(&self.variables)
    }
}
