use serde::{Deserialize, Serialize};

/// How individual handicaps combine into one team handicap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "percentages", rename_all = "snake_case")]
pub enum AllowanceMethod {
    /// No allowance; the team plays off scratch.
    None,
    /// Fixed weights by team size applied to the sorted handicaps.
    #[default]
    Usga,
    /// Combined handicap divided by twice the team size.
    Ambrose,
    /// Caller-supplied percentages (e.g. `35.0`), applied to the sorted
    /// handicaps lowest first.
    Percentage(Vec<f64>),
}
