//! Core type definitions for the entity graph

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four entity dimensions, in column order.
///
/// The order is fixed: group < category < year < author. Adjacency is only
/// ever recorded between dimensions exactly one apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Group,
    Category,
    Year,
    Author,
}

impl Dimension {
    /// All dimensions in column order
    pub const ALL: [Dimension; 4] = [
        Dimension::Group,
        Dimension::Category,
        Dimension::Year,
        Dimension::Author,
    ];

    /// 1-based ordinal (group = 1 ... author = 4)
    pub fn ordinal(&self) -> u8 {
        self.column() as u8 + 1
    }

    /// 0-based column index
    pub fn column(&self) -> usize {
        match self {
            Dimension::Group => 0,
            Dimension::Category => 1,
            Dimension::Year => 2,
            Dimension::Author => 3,
        }
    }

    pub fn from_column(column: usize) -> Option<Self> {
        Self::ALL.get(column).copied()
    }

    /// The dimension immediately to the left, if any
    pub fn left(&self) -> Option<Self> {
        self.column().checked_sub(1).and_then(Self::from_column)
    }

    /// The dimension immediately to the right, if any
    pub fn right(&self) -> Option<Self> {
        Self::from_column(self.column() + 1)
    }

    /// True when `other` is exactly one column away
    pub fn is_adjacent(&self, other: Dimension) -> bool {
        self.column().abs_diff(other.column()) == 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Group => "group",
            Dimension::Category => "category",
            Dimension::Year => "year",
            Dimension::Author => "author",
        }
    }

    /// Column header text
    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Group => "GROUP",
            Dimension::Category => "CATEGORY",
            Dimension::Year => "YEAR",
            Dimension::Author => "AUTHOR",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "group" | "groups" => Ok(Dimension::Group),
            "category" | "categories" => Ok(Dimension::Category),
            "year" | "years" => Ok(Dimension::Year),
            "author" | "authors" => Ok(Dimension::Author),
            other => Err(format!("unknown dimension '{}'", other)),
        }
    }
}

/// Identifies one entity: its dimension plus its index in that dimension's
/// sorted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EntityId {
    pub dimension: Dimension,
    pub index: usize,
}

impl EntityId {
    pub fn new(dimension: Dimension, index: usize) -> Self {
        EntityId { dimension, index }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.dimension, self.index)
    }
}

/// A rendered box is addressed by the entity it draws
pub type BoxId = EntityId;

/// A relation edge between adjacent dimensions, always stored left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeKey {
    pub from: EntityId,
    pub to: EntityId,
}

impl EdgeKey {
    /// Build a key, normalising so that `from` is the left-hand column
    pub fn new(a: EntityId, b: EntityId) -> Self {
        if a.dimension <= b.dimension {
            EdgeKey { from: a, to: b }
        } else {
            EdgeKey { from: b, to: a }
        }
    }

    pub fn touches(&self, id: EntityId) -> bool {
        self.from == id || self.to == id
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_order() {
        assert!(Dimension::Group < Dimension::Category);
        assert!(Dimension::Category < Dimension::Year);
        assert!(Dimension::Year < Dimension::Author);
        assert_eq!(Dimension::Group.ordinal(), 1);
        assert_eq!(Dimension::Author.ordinal(), 4);
    }

    #[test]
    fn test_dimension_neighbours() {
        assert_eq!(Dimension::Group.left(), None);
        assert_eq!(Dimension::Group.right(), Some(Dimension::Category));
        assert_eq!(Dimension::Year.left(), Some(Dimension::Category));
        assert_eq!(Dimension::Author.right(), None);
        assert!(Dimension::Year.is_adjacent(Dimension::Author));
        assert!(!Dimension::Group.is_adjacent(Dimension::Year));
        assert!(!Dimension::Group.is_adjacent(Dimension::Group));
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!("Author".parse::<Dimension>(), Ok(Dimension::Author));
        assert_eq!("categories".parse::<Dimension>(), Ok(Dimension::Category));
        assert!("title".parse::<Dimension>().is_err());
        assert_eq!(format!("{}", Dimension::Year), "year");
    }

    #[test]
    fn test_edge_key_normalises() {
        let a = EntityId::new(Dimension::Year, 2);
        let b = EntityId::new(Dimension::Category, 5);
        let key = EdgeKey::new(a, b);
        assert_eq!(key.from, b);
        assert_eq!(key.to, a);
        assert_eq!(key, EdgeKey::new(b, a));
        assert!(key.touches(a));
        assert_eq!(format!("{}", key), "category#5->year#2");
    }
}
