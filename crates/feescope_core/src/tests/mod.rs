//! Unit tests for the orchestration core, organized by topic:
//! - `query` - query building and determinism
//! - `validate` - structural payload validation
//! - `series` - chart series derivation
//! - `interaction` - point events and label formatting
//! - `lifecycle` - request supersession and failure classification

mod interaction;
mod query;
mod series;
