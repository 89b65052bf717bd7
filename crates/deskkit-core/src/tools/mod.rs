//! Stateless text and unit helpers, plus the pocket calculator.

mod calculator;
mod case;
pub mod ideas;
mod text_stats;
mod units;

pub use calculator::{format_number, Calculator, Key, Operator};
pub use case::CaseStyle;
pub use ideas::{Difficulty, Idea};
pub use text_stats::TextStats;
pub use units::{format_result, Unit, UnitCategory};
