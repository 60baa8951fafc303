use crate::catalog::PerkCatalog;
use crate::cp_parser::CpParser;
use crate::error::{LedgerError, Result};
use crate::perk::PerkRecord;
use crate::selector::sample;
use crate::Cp;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default number of domains or perks in one offer
pub const DEFAULT_OFFER_SIZE: usize = 4;

/// The mutable ledger: balances plus the purchased sheet.
///
/// Serialized field names (`currentCP`, `totalCP`, `currentSheet`) are the persisted session
/// format. Each field falls back to its zero value when missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// Spendable balance
    #[serde(rename = "currentCP", default)]
    pub current_cp: Cp,
    /// Lifetime CP granted; spending and refunds never change it
    #[serde(rename = "totalCP", default)]
    pub total_cp: Cp,
    /// Purchases in selection order; the same perk may appear more than once
    #[serde(rename = "currentSheet", default)]
    pub selected_perks: Vec<PerkRecord>,
}

impl LedgerState {
    pub fn spent_cp(&self) -> Cp {
        self.selected_perks.iter().map(|perk| perk.cost).sum()
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            current_cp: self.current_cp,
            total_cp: self.total_cp,
            spent_cp: self.spent_cp(),
            perk_count: self.selected_perks.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub current_cp: Cp,
    pub total_cp: Cp,
    pub spent_cp: Cp,
    pub perk_count: usize,
}

/// Balance movement caused by a CP operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpChange {
    pub previous: Cp,
    pub current: Cp,
    pub total: Cp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainStats {
    pub total: usize,
    pub affordable: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub perk: PerkRecord,
    pub cost: Cp,
    pub remaining: Cp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refund {
    pub perk: PerkRecord,
    pub refunded: Cp,
    pub current: Cp,
}

/// Owns one session's [`LedgerState`] and is its only mutator.
///
/// Offers are drawn from the shared read-only catalog with the engine's own RNG.
#[derive(Debug, Clone)]
pub struct LedgerEngine {
    catalog: Arc<PerkCatalog>,
    state: LedgerState,
    rng: StdRng,
}

impl LedgerEngine {
    pub fn new(catalog: Arc<PerkCatalog>) -> Self {
        Self::from_state(catalog, LedgerState::default())
    }

    pub fn from_state(catalog: Arc<PerkCatalog>, state: LedgerState) -> Self {
        Self {
            catalog,
            state,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the RNG with a deterministic one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn catalog(&self) -> &PerkCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    pub fn into_state(self) -> LedgerState {
        self.state
    }

    pub fn current_cp(&self) -> Cp {
        self.state.current_cp
    }

    pub fn total_cp(&self) -> Cp {
        self.state.total_cp
    }

    pub fn sheet(&self) -> &[PerkRecord] {
        &self.state.selected_perks
    }

    /// Authoritative correction of the balance. Negative input clamps to 0; the lifetime total
    /// is left alone.
    pub fn set_cp(&mut self, value: i64) -> CpChange {
        let previous = self.state.current_cp;
        self.state.current_cp = Cp::try_from(value).unwrap_or(0);
        self.change_from(previous)
    }

    /// Grant CP: raises both the balance and the lifetime total.
    pub fn add_cp(&mut self, delta: i64) -> Result<CpChange> {
        let delta = Cp::try_from(delta).map_err(|_| LedgerError::NegativeGrant(delta))?;
        let previous = self.state.current_cp;
        self.state.current_cp = self.state.current_cp.saturating_add(delta);
        self.state.total_cp = self.state.total_cp.saturating_add(delta);
        Ok(self.change_from(previous))
    }

    /// Record a balance reported from outside. A rise counts as newly granted CP; a drop is
    /// taken as spending already reflected elsewhere and leaves the total unchanged.
    pub fn observe_cp(&mut self, value: Cp) -> CpChange {
        let previous = self.state.current_cp;
        self.state.current_cp = value;
        if value > previous {
            self.state.total_cp = self.state.total_cp.saturating_add(value - previous);
        }
        log::info!(
            "CP updated from {previous} to {value} (total: {})",
            self.state.total_cp
        );
        self.change_from(previous)
    }

    /// Parse `text` and, if it states a CP value, observe it.
    pub fn update_from_text(&mut self, parser: &CpParser, text: &str) -> Option<CpChange> {
        let value = parser.parse(text)?;
        Some(self.observe_cp(value))
    }

    /// Zero both balances. The sheet is kept.
    pub fn reset_cp(&mut self) {
        self.state.current_cp = 0;
        self.state.total_cp = 0;
    }

    /// Random offer of up to `offer_size` domain names, regardless of affordability.
    pub fn list_domains(&mut self, offer_size: usize) -> Vec<String> {
        let names = self.catalog.domain_names();
        sample(&names, offer_size, &mut self.rng)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn domain_stats(&self, domain: &str) -> Option<DomainStats> {
        let perks = self.catalog.perks(domain)?;
        Some(DomainStats {
            total: perks.len(),
            affordable: perks
                .iter()
                .filter(|perk| perk.cost <= self.state.current_cp)
                .count(),
        })
    }

    /// Random offer of up to `offer_size` perks from `domain` that the balance covers.
    /// An unknown domain yields an empty offer.
    pub fn list_affordable_perks(&mut self, domain: &str, offer_size: usize) -> Vec<PerkRecord> {
        let Some(perks) = self.catalog.perks(domain) else {
            return Vec::new();
        };
        let budget = self.state.current_cp;
        let affordable: Vec<&PerkRecord> =
            perks.iter().filter(|perk| perk.cost <= budget).collect();
        sample(&affordable, offer_size, &mut self.rng)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Buy the named perk from `domain`. Any catalog perk can be named, not only offered ones.
    pub fn select_perk(&mut self, domain: &str, perk_name: &str) -> Result<Purchase> {
        let perks = self
            .catalog
            .perks(domain)
            .ok_or_else(|| LedgerError::DomainNotFound(domain.to_string()))?;
        let perk = perks
            .iter()
            .find(|perk| perk.name == perk_name)
            .cloned()
            .ok_or_else(|| LedgerError::PerkNotFound(perk_name.to_string()))?;

        let cost = perk.cost;
        if cost > self.state.current_cp {
            return Err(LedgerError::InsufficientCp {
                need: cost,
                have: self.state.current_cp,
            });
        }

        self.state.current_cp -= cost;
        self.state.selected_perks.push(perk.clone());
        log::info!("Added perk \"{}\" for {cost} CP", perk.name);
        Ok(Purchase {
            perk,
            cost,
            remaining: self.state.current_cp,
        })
    }

    /// Remove the first sheet entry named `perk_name` and refund its cost.
    pub fn remove_perk(&mut self, perk_name: &str) -> Result<Refund> {
        let index = self
            .state
            .selected_perks
            .iter()
            .position(|perk| perk.name == perk_name)
            .ok_or_else(|| LedgerError::PerkNotFound(perk_name.to_string()))?;
        Ok(self.refund_at(index))
    }

    /// Remove the sheet entry at `index` (selection order) and refund its cost.
    pub fn remove_perk_at(&mut self, index: usize) -> Result<Refund> {
        let len = self.state.selected_perks.len();
        if index >= len {
            return Err(LedgerError::SheetIndexOutOfRange { index, len });
        }
        Ok(self.refund_at(index))
    }

    /// Empty the sheet and refund everything on it. Returns the refunded amount.
    pub fn clear_sheet(&mut self) -> Cp {
        let refund = self.state.spent_cp();
        self.state.current_cp = self.state.current_cp.saturating_add(refund);
        self.state.selected_perks.clear();
        refund
    }

    pub fn summary(&self) -> LedgerSummary {
        self.state.summary()
    }

    fn refund_at(&mut self, index: usize) -> Refund {
        let perk = self.state.selected_perks.remove(index);
        let refunded = perk.cost;
        self.state.current_cp = self.state.current_cp.saturating_add(refunded);
        log::info!("Removed perk \"{}\"", perk.name);
        Refund {
            perk,
            refunded,
            current: self.state.current_cp,
        }
    }

    fn change_from(&self, previous: Cp) -> CpChange {
        CpChange {
            previous,
            current: self.state.current_cp,
            total: self.state.total_cp,
        }
    }
}
