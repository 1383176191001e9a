use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::HouseholdId;

/// User identifier as issued by the chore service
pub type UserId = u64;

/// A household member and their brownie point ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Points earned, per household
    #[serde(default)]
    pub brownie_point_credit: HashMap<HouseholdId, f64>,
    /// Points spent, per household
    #[serde(default)]
    pub brownie_point_debit: HashMap<HouseholdId, f64>,
    /// Trailing-window score, when the server computes one
    #[serde(default)]
    pub rolling_brownie_points: Option<f64>,
}

impl User {
    /// Net balance in a household; missing entries count as zero
    pub fn score(&self, household: HouseholdId) -> f64 {
        let credit = self
            .brownie_point_credit
            .get(&household)
            .copied()
            .unwrap_or(0.0);
        let debit = self
            .brownie_point_debit
            .get(&household)
            .copied()
            .unwrap_or(0.0);
        credit - debit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_uses_household_entries() {
        let json = r#"{
            "id": 1,
            "username": "sam",
            "brownie_point_credit": {"1": 10.0, "2": 99.0},
            "brownie_point_debit": {"1": 2.5}
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.score(1), 7.5);
        assert_eq!(user.score(2), 99.0);
        assert_eq!(user.score(3), 0.0);
        assert!(user.rolling_brownie_points.is_none());
    }
}
