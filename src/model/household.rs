use serde::{Deserialize, Serialize};

/// Household identifier as issued by the chore service
pub type HouseholdId = u64;

/// A group of users sharing one task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Household {
    pub id: HouseholdId,
    pub name: String,
}
