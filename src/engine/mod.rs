mod errors;
mod reconciler;

pub use errors::ReconcileError;
pub use reconciler::{ImportSummary, Reconciler};
