//! rbridge-core: normalized transaction model, keyword taxonomy and categorizer

pub mod categorizer;
pub mod taxonomy;
pub mod transaction;

pub use categorizer::{Classification, categorize, classify, subcategorize};
pub use taxonomy::UNKNOWN;
pub use transaction::{Direction, NormalizedTransaction};
