//! Transaction categories
//!
//! A fixed set of spending/income categories. Unlike a full budgeting
//! ledger there is no user-defined category tree; the set below covers
//! the tracker's reporting needs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Leisure,
    Utilities,
    Health,
    Shopping,
    Income,
    Savings,
    #[default]
    Others,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Leisure,
        Category::Utilities,
        Category::Health,
        Category::Shopping,
        Category::Income,
        Category::Savings,
        Category::Others,
    ];

    /// The lowercase name used in serialized data and CLI input
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Leisure => "leisure",
            Self::Utilities => "utilities",
            Self::Health => "health",
            Self::Shopping => "shopping",
            Self::Income => "income",
            Self::Savings => "savings",
            Self::Others => "others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Food => write!(f, "Food"),
            Self::Transport => write!(f, "Transport"),
            Self::Leisure => write!(f, "Leisure"),
            Self::Utilities => write!(f, "Utilities"),
            Self::Health => write!(f, "Health"),
            Self::Shopping => write!(f, "Shopping"),
            Self::Income => write!(f, "Income"),
            Self::Savings => write!(f, "Savings"),
            Self::Others => write!(f, "Others"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "leisure" => Ok(Self::Leisure),
            "utilities" => Ok(Self::Utilities),
            "health" => Ok(Self::Health),
            "shopping" => Ok(Self::Shopping),
            "income" => Ok(Self::Income),
            "savings" => Ok(Self::Savings),
            "others" => Ok(Self::Others),
            other => Err(format!(
                "Unknown category '{}'. Valid categories: food, transport, leisure, \
                 utilities, health, shopping, income, savings, others",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Category::Food.to_string(), "Food");
        assert_eq!(Category::Others.to_string(), "Others");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("  Savings ".parse::<Category>().unwrap(), Category::Savings);
        assert!("gambling".parse::<Category>().is_err());
    }

    #[test]
    fn test_serialization_is_lowercase() {
        let json = serde_json::to_string(&Category::Transport).unwrap();
        assert_eq!(json, "\"transport\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Transport);
    }

    #[test]
    fn test_default() {
        assert_eq!(Category::default(), Category::Others);
    }
}
