//! Tool input schemas.

pub mod cp;
pub mod offers;
pub mod sheet;
