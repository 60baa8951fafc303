//! # Forge Ledger
//!
//! Choice Point (CP) bookkeeping for the Celestial Forge: a read-only perk catalog, a ledger of
//! spendable and lifetime CP, and the purchased-perk sheet.
//!
//! ## Architecture
//!
//! ```text
//! free text ──> CpParser ──────────────┐
//!                                      ▼
//! PerkCatalog ──> sample() ──> LedgerEngine ──> render_sheet()
//!                  (offers)    (CP + sheet)      (export text)
//! ```
//!
//! Both front ends (the MCP tool server and the panel CLI) own one [`LedgerEngine`] per session
//! and translate their requests into its operations. Nothing here performs I/O except
//! [`PerkCatalog::load`], which front ends call once at startup.
//!
//! ## Example
//!
//! ```rust
//! use forge_ledger::{CpParser, LedgerEngine, PerkCatalog, PerkRecord};
//! use std::sync::Arc;
//!
//! let catalog = PerkCatalog::from_domains([(
//!     "Crafting".to_string(),
//!     vec![PerkRecord::new("Forgeborn", "Smithing", 100, "Hammer and anvil.")],
//! )]);
//! let mut engine = LedgerEngine::new(Arc::new(catalog));
//!
//! let parser = CpParser::builtin();
//! engine.update_from_text(&parser, "You now have 150 CP remaining");
//! assert_eq!(engine.current_cp(), 150);
//!
//! let purchase = engine.select_perk("Crafting", "Forgeborn").unwrap();
//! assert_eq!(purchase.remaining, 50);
//! ```

mod catalog;
mod cp_parser;
mod error;
mod export;
mod ledger;
mod perk;
mod selector;

pub use catalog::PerkCatalog;
pub use cp_parser::{CpParser, CpPattern, BUILTIN_PATTERNS, PANEL_DEFAULT_PATTERNS};
pub use error::{CatalogError, LedgerError, PatternError, Result};
pub use export::{render_sheet, SHEET_RULE, SHEET_TITLE};
pub use ledger::{
    CpChange, DomainStats, LedgerEngine, LedgerState, LedgerSummary, Purchase, Refund,
    DEFAULT_OFFER_SIZE,
};
pub use perk::{PerkRecord, SubPerk, NO_DESCRIPTION, UNKNOWN_ORIGIN, UNKNOWN_SUB_PERK};
pub use selector::sample;

/// Choice Points. Balances never go negative.
pub type Cp = u64;
