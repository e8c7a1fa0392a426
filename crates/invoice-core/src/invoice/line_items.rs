//! Append-only expense line collection.
//!
//! The collection always holds at least one line. Lines are only ever added
//! blank at the end and are never removed or reordered, so a line index
//! handed out once stays valid for the life of the record.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::field::ExpenseField;
use super::model::ExpenseLine;

/// Ordered expense lines embedded in an [`super::InvoiceRecord`].
///
/// Deserializing an empty array fails, which makes a draft with no expense
/// lines malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ExpenseLine>", into = "Vec<ExpenseLine>")]
pub struct ExpenseLines(Vec<ExpenseLine>);

impl ExpenseLines {
    /// A collection holding a single blank line.
    pub fn new() -> Self {
        Self(vec![ExpenseLine::default()])
    }

    /// Adds a blank line at the end and returns its index.
    pub fn append(&mut self) -> usize {
        self.0.push(ExpenseLine::default());
        self.0.len() - 1
    }

    /// Writes one field of the line at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. Indices come from iterating the
    /// current collection, so an out-of-range index is a caller bug.
    pub fn set_field(&mut self, index: usize, field: ExpenseField, value: impl Into<String>) {
        let len = self.0.len();
        let Some(line) = self.0.get_mut(index) else {
            panic!("expense line index {index} out of bounds (len {len})");
        };
        *line.field_mut(field) = value.into();
    }

    pub fn get(&self, index: usize) -> Option<&ExpenseLine> {
        self.0.get(index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.0.len()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a record built through this crate.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseLine> {
        self.0.iter()
    }
}

impl Default for ExpenseLines {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for ExpenseLines {
    type Output = ExpenseLine;

    fn index(&self, index: usize) -> &ExpenseLine {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ExpenseLines {
    type Item = &'a ExpenseLine;
    type IntoIter = std::slice::Iter<'a, ExpenseLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<ExpenseLine>> for ExpenseLines {
    type Error = String;

    fn try_from(lines: Vec<ExpenseLine>) -> Result<Self, Self::Error> {
        if lines.is_empty() {
            return Err("expenses must contain at least one line".to_string());
        }
        Ok(Self(lines))
    }
}

impl From<ExpenseLines> for Vec<ExpenseLine> {
    fn from(lines: ExpenseLines) -> Self {
        lines.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_grows_by_one_blank_line() {
        let mut lines = ExpenseLines::new();
        for n in 1..=4 {
            let index = lines.append();
            assert_eq!(index, n);
        }
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(ExpenseLine::is_blank));
    }

    #[test]
    fn test_set_field_touches_only_the_addressed_line() {
        let mut lines = ExpenseLines::new();
        lines.append();
        lines.set_field(1, ExpenseField::Department, "Finance");

        assert!(lines[0].is_blank());
        assert_eq!(lines[1].department, "Finance");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_field_out_of_bounds_panics() {
        let mut lines = ExpenseLines::new();
        lines.set_field(1, ExpenseField::Amount, "10.00");
    }

    #[test]
    fn test_empty_array_is_rejected() {
        let result = serde_json::from_str::<ExpenseLines>("[]");
        assert!(result.is_err());
    }
}
