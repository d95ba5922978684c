// ABOUTME: Defines the Product record and Methodology enum for the catalog.
// ABOUTME: ValidatedProduct is the sanitized output of validation, typed but not yet stored.

use serde::{Deserialize, Serialize};

/// Delivery methodology for a product team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Methodology {
    Agile,
    Waterfall,
}

impl Methodology {
    /// Parse a wire-format methodology string. Only the two lowercase
    /// spellings are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "agile" => Some(Self::Agile),
            "waterfall" => Some(Self::Waterfall),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agile => "agile",
            Self::Waterfall => "waterfall",
        }
    }
}

impl std::fmt::Display for Methodology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked product: one team/project entry in the catalog.
/// Field names serialize in camelCase to match the durable file and the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub owner_name: String,
    pub developers: Vec<String>,
    pub start_date: String,
    pub scrum_master_name: String,
    pub methodology: Methodology,
    pub location: String,
}

/// The sanitized output of a successful validation. Carries only the
/// whitelisted fields of the candidate; `id` stays optional until the
/// store resolves it (caller-supplied or generated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedProduct {
    pub id: Option<u64>,
    pub name: String,
    pub owner_name: String,
    pub developers: Vec<String>,
    pub start_date: String,
    pub scrum_master_name: String,
    pub methodology: Methodology,
    pub location: String,
}

impl ValidatedProduct {
    /// Build the stored record under the resolved id.
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            owner_name: self.owner_name,
            developers: self.developers,
            start_date: self.start_date,
            scrum_master_name: self.scrum_master_name,
            methodology: self.methodology,
            location: self.location,
        }
    }
}
