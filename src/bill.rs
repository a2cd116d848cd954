// Bill - Payable obligation record
//
// "Bill id is IDENTITY (assigned once, never changes), name/amount/due date
// are VALUES (replaced wholesale by updates)"

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A tracked payable obligation.
///
/// Wire shape: `{"id": int, "name": string, "amount": number, "dueDate": "YYYY-MM-DD"}`.
/// The due date always serializes as an ISO calendar date string, independent
/// of locale or timezone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Registry-assigned identifier. Unique among stored bills, immutable.
    pub id: i64,

    /// Name or description of the bill. No uniqueness constraint.
    pub name: String,

    /// Amount due, held as fixed-point minor units internally.
    pub amount: Money,

    /// Due date for the bill
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,
}

/// Client-supplied bill payload for create and update requests.
///
/// Carries no `id` field: an id in the request body is ignored, because the
/// registry exclusively owns identifier assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillDraft {
    pub name: String,
    pub amount: Money,
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,
}

impl Bill {
    /// Materialize a draft under a registry-assigned id
    pub fn from_draft(id: i64, draft: BillDraft) -> Self {
        Bill {
            id,
            name: draft.name,
            amount: draft.amount,
            due_date: draft.due_date,
        }
    }

    /// Replace name, amount and due date in place. Id is untouched.
    pub fn apply(&mut self, draft: BillDraft) {
        self.name = draft.name;
        self.amount = draft.amount;
        self.due_date = draft.due_date;
    }
}

// ============================================================================
// TESTS
// ============================================================================
