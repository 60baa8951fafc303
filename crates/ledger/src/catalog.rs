use crate::error::CatalogError;
use crate::perk::PerkRecord;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// Read-only mapping of domain name to its ordered perk list.
///
/// Loaded once per process. A missing domain is an ordinary lookup miss, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerkCatalog {
    domains: BTreeMap<String, Vec<PerkRecord>>,
}

impl PerkCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_domains<I>(domains: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<PerkRecord>)>,
    {
        Self {
            domains: domains.into_iter().collect(),
        }
    }

    /// Parse a catalog document: a JSON object of `domain -> [perk, ...]`.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        Self::from_json_slice(raw.as_bytes())
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let domains: BTreeMap<String, Vec<PerkRecord>> = serde_json::from_slice(bytes)?;
        let catalog = Self { domains };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Try each candidate path in order; the first one that loads wins.
    ///
    /// Every failure is logged. When nothing loads the catalog is empty, and offer/selection
    /// operations report "nothing available" instead of failing.
    pub fn load_first_available(candidates: &[PathBuf]) -> Self {
        for path in candidates {
            match Self::load(path) {
                Ok(catalog) => {
                    log::info!(
                        "Perks data loaded from {} ({} domains, {} perks)",
                        path.display(),
                        catalog.len(),
                        catalog.perk_count()
                    );
                    return catalog;
                }
                Err(err) => {
                    log::warn!("Failed to load perks data from {}: {err}", path.display());
                }
            }
        }
        Self::empty()
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for (domain, perks) in &self.domains {
            if domain.trim().is_empty() {
                return Err(CatalogError::Invalid("empty domain name".to_string()));
            }
            let mut seen = HashSet::new();
            for perk in perks {
                if perk.name.trim().is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "perk with empty name in domain '{domain}'"
                    )));
                }
                if !seen.insert(perk.name.as_str()) {
                    // Lookups resolve to the first entry with the name.
                    log::warn!("Duplicate perk '{}' in domain '{domain}'", perk.name);
                }
            }
        }
        Ok(())
    }

    pub fn domain_names(&self) -> Vec<&str> {
        self.domains.keys().map(String::as_str).collect()
    }

    pub fn perks(&self, domain: &str) -> Option<&[PerkRecord]> {
        self.domains.get(domain).map(Vec::as_slice)
    }

    /// First perk in `domain` whose name matches exactly.
    pub fn find(&self, domain: &str, name: &str) -> Option<&PerkRecord> {
        self.perks(domain)?.iter().find(|perk| perk.name == name)
    }

    /// Number of domains
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn perk_count(&self) -> usize {
        self.domains.values().map(Vec::len).sum()
    }
}
