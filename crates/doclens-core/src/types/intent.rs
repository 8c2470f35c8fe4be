//! Question intent.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// What kind of answer a question is looking for.
///
/// Inferred from question phrasing; decides how an answer is formatted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Intent {
    /// Dates and times.
    Date,
    /// Amounts, costs, prices, budgets.
    Money,
    /// People and contact details.
    Contact,
    /// A summary of the relevant passages.
    Summary,
    /// Deadlines and due dates.
    Deadline,
    /// Anything else.
    Generic,
}
