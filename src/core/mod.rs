//! Core batch logic
//!
//! The batch runs as a straight pipeline over one account set:
//!
//! - [`indexer`] - Id to position lookup over the account slice
//! - [`filter`] - Drops zero-amount transactions unless configured otherwise
//! - [`applier`] - Applies each transaction and writes the apply log
//! - [`post_check`] - Sweeps every account for withdrawal-floor violations
//! - [`engine`] - Runs the stages in order and renders the report

pub mod applier;
pub mod engine;
pub mod filter;
pub mod indexer;
pub mod post_check;

pub use applier::Applier;
pub use engine::{process_batch, BatchProcessor, BatchReport};
pub use filter::{filter_transactions, FilteredBatch};
pub use indexer::AccountIndex;
pub use post_check::run_post_checks;
