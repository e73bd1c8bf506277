use super::money::Money;
use std::fmt;
use std::str::FromStr;

/// Pricing category of a catalog item.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub enum Category {
    #[default]
    Apparel,
    Electronics,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Apparel => f.write_str("apparel"),
            Category::Electronics => f.write_str("electronics"),
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "apparel" => Ok(Category::Apparel),
            "electronics" => Ok(Category::Electronics),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// A purchasable product. Immutable once created.
#[derive(Debug, PartialEq, Clone)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Display label shown next to the name, e.g. "Boys" or "Girls".
    pub section: Option<String>,
    pub category: Category,
    pub base_price: Money,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, category: Category, base_price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            section: None,
            category,
            base_price,
        }
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }
}
