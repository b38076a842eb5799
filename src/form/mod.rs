//! Interactive form mode.
//!
//! A menu-driven loop over one [`SessionContext`]: choose an operation and
//! target database, edit or load the source text, generate, save.

mod action;
mod session;
mod ui;

pub use action::{FormAction, menu};
pub use session::FormSession;
