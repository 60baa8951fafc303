use crate::Cp;
use serde::{Deserialize, Deserializer, Serialize};

/// Origin shown for perks whose source omits one
pub const UNKNOWN_ORIGIN: &str = "Unknown";

/// Description shown for perks whose source omits one
pub const NO_DESCRIPTION: &str = "No description available";

/// Name shown for sub-perks whose source omits one
pub const UNKNOWN_SUB_PERK: &str = "Unknown Sub-Perk";

/// A purchasable catalog entry.
///
/// Defaults are applied once while deserializing: a missing, `null` or empty `origin` becomes
/// [`UNKNOWN_ORIGIN`], a missing or `null` `cost` becomes 0, and a missing or empty
/// `description` becomes [`NO_DESCRIPTION`]. `name` is required.
///
/// `sub_perks` are display-only [`SubPerk`]s; they are never bought or costed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerkRecord {
    pub name: String,
    #[serde(default = "default_origin", deserialize_with = "origin_or_default")]
    pub origin: String,
    #[serde(default, deserialize_with = "cost_or_zero")]
    pub cost: Cp,
    #[serde(
        default = "default_description",
        deserialize_with = "description_or_default"
    )]
    pub description: String,
    #[serde(default, deserialize_with = "sub_perks_or_empty")]
    pub sub_perks: Vec<SubPerk>,
}

/// Export-only line item nested under a perk. Every field is optional in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubPerk {
    #[serde(
        default = "default_sub_perk_name",
        deserialize_with = "sub_perk_name_or_default"
    )]
    pub name: String,
    #[serde(default = "default_origin", deserialize_with = "origin_or_default")]
    pub origin: String,
    #[serde(default, deserialize_with = "cost_or_zero")]
    pub cost: Cp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SubPerk {
    pub fn new(name: impl Into<String>, origin: impl Into<String>, cost: Cp) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            cost,
            description: None,
        }
    }
}

impl PerkRecord {
    pub fn new(
        name: impl Into<String>,
        origin: impl Into<String>,
        cost: Cp,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            cost,
            description: description.into(),
            sub_perks: Vec::new(),
        }
    }

    pub fn with_sub_perks(mut self, sub_perks: Vec<SubPerk>) -> Self {
        self.sub_perks = sub_perks;
        self
    }

    /// Description cut to `max_chars` characters with a trailing `...`, as shown in offers.
    pub fn description_preview(&self, max_chars: usize) -> String {
        let mut preview: String = self.description.chars().take(max_chars).collect();
        preview.push_str("...");
        preview
    }
}

fn default_origin() -> String {
    UNKNOWN_ORIGIN.to_string()
}

fn default_sub_perk_name() -> String {
    UNKNOWN_SUB_PERK.to_string()
}

fn default_description() -> String {
    NO_DESCRIPTION.to_string()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn origin_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(non_empty(Option::deserialize(deserializer)?).unwrap_or_else(default_origin))
}

fn sub_perk_name_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(non_empty(Option::deserialize(deserializer)?).unwrap_or_else(default_sub_perk_name))
}

fn description_or_default<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    Ok(non_empty(Option::deserialize(deserializer)?).unwrap_or_else(default_description))
}

fn cost_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Cp, D::Error> {
    Ok(Option::<Cp>::deserialize(deserializer)?.unwrap_or(0))
}

fn sub_perks_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<SubPerk>, D::Error> {
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}
