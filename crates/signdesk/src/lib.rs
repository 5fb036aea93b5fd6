//! `signdesk` - Internal knowledge base for a signage subcontractor
//!
//! This library provides the core functionality behind the `sigdesk` CLI:
//! a password-gated session over a fixed document catalog, a flashcard deck
//! for project-management SOP training, and a quick estimate calculator for
//! rough sign pricing.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod deck;
pub mod error;
pub mod estimate;
pub mod logging;
pub mod session;
pub mod storage;

pub use catalog::{Catalog, Category, DocKind, Document, FileKind, Icon};
pub use config::Config;
pub use deck::{Deck, DeckCursor, Flashcard};
pub use error::{Error, Result};
pub use estimate::{Estimate, Job, SignType};
pub use logging::init_logging;
pub use session::Session;
pub use storage::StateStore;
