pub mod rules;
pub mod types;

pub use rules::score_signals;
pub use types::{RiskLevel, RiskProfile};
