pub mod content;
pub mod logging;
pub mod scoring;
pub mod validate;

use serde::{Deserialize, Serialize};

/// Employee attributes captured by the entry form. One profile feeds one
/// scoring call; nothing is kept between calls.
///
/// `relationship` is collected by the form but never read by any scoring
/// rule. Known inert field; do not wire it in without a rule change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub age: i32,
    pub education: String,
    pub occupation: String,
    pub work_hours: i32,
    pub marital_status: String,
    pub relationship: String,
}
