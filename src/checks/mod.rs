//! Independent heuristic predicates that flag integrity risk conditions.
//!
//! Every check is advisory: checks return flags, never errors, and the
//! checks for one submission are all evaluated without short-circuiting
//! so every applicable flag is reported at once. These are deliberately
//! simple syntactic heuristics with known false positives; they are not
//! statistical tests and are not presented as ground truth.

pub mod claim;
pub mod hypothesis;
pub mod metric;

pub use claim::claim_warnings;
pub use hypothesis::hypothesis_flags;
pub use metric::metric_flags;
