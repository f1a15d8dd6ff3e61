//! Age bracket configuration for divisions

use serde::{Deserialize, Serialize};

/// An age-bracketed division template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionBracket {
    pub id: String,
    pub name: String,
    pub min_age: u32,
    pub max_age: u32,
}

impl DivisionBracket {
    pub fn new(id: &str, name: &str, min_age: u32, max_age: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            min_age,
            max_age,
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        age >= self.min_age && age <= self.max_age
    }

    pub fn overlaps(&self, other: &DivisionBracket) -> bool {
        self.min_age <= other.max_age && other.min_age <= self.max_age
    }
}

/// The event's standard brackets, youngest first
pub fn standard_brackets() -> Vec<DivisionBracket> {
    vec![
        DivisionBracket::new("mazhalai", "Mazhalai", 1, 3),
        DivisionBracket::new("arumbu", "Arumbu", 4, 6),
        DivisionBracket::new("mottu", "Mottu", 7, 9),
        DivisionBracket::new("mugai", "Mugai", 10, 12),
        DivisionBracket::new("malar", "Malar", 13, 15),
    ]
}

/// First bracket whose range contains `age`
pub fn bracket_for_age(brackets: &[DivisionBracket], age: u32) -> Option<&DivisionBracket> {
    brackets.iter().find(|bracket| bracket.contains(age))
}
