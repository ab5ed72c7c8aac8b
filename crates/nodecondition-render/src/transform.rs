use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use nodecondition_types::Condition;

/// Display fields of one condition
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionFields {
    pub status: String,
    pub message: String,
    pub last_transition_time: String,
}

impl From<&Condition> for ConditionFields {
    fn from(condition: &Condition) -> Self {
        Self {
            status: condition.status.clone(),
            message: condition.message.clone(),
            last_transition_time: condition.last_transition_time.clone(),
        }
    }
}

/// Condition reason -> display fields, for one node
pub type ConditionMap = BTreeMap<String, ConditionFields>;

/// Key a node's conditions by reason
///
/// Reasons are unique in the result: when the source repeats a reason, the
/// entry seen last in source order replaces the earlier one.
pub fn transform_conditions(conditions: &[Condition]) -> ConditionMap {
    let mut map = ConditionMap::new();
    for condition in conditions {
        if let Some(previous) = map.insert(condition.reason.clone(), condition.into()) {
            tracing::debug!(
                reason = %condition.reason,
                dropped_status = %previous.status,
                "Duplicate condition reason, keeping the later entry"
            );
        }
    }
    map
}
