// Bill Registry - In-memory store + identifier assignment
//
// Sole owner of Bill state. Holds all bills in insertion order behind one
// RwLock so that concurrent request handlers see linearizable operations,
// and assigns ids from an atomic counter that starts at 1 and never reuses
// a value, even after deletion. Process-local and non-persistent: all data
// is lost on restart.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::bill::{Bill, BillDraft};

/// Registry of all tracked bills.
pub struct BillRegistry {
    /// All live bills, in insertion order
    bills: RwLock<Vec<Bill>>,

    /// Next id to hand out. Monotonic, so ids can exceed the live count.
    next_id: AtomicI64,
}

impl BillRegistry {
    /// Create an empty registry. Ids start at 1.
    pub fn new() -> Self {
        BillRegistry {
            bills: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Snapshot of the current collection, in insertion order.
    /// No pagination, no filtering.
    pub fn list_all(&self) -> Vec<Bill> {
        self.bills.read().unwrap().clone()
    }

    /// Store a new bill under the next unused id and return it.
    /// Always succeeds.
    pub fn add(&self, draft: BillDraft) -> Bill {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let bill = Bill::from_draft(id, draft);

        self.bills.write().unwrap().push(bill.clone());
        bill
    }

    /// Look up a bill by id. Linear scan; fine at this scale.
    pub fn get_by_id(&self, id: i64) -> Option<Bill> {
        self.bills.read().unwrap().iter().find(|b| b.id == id).cloned()
    }

    /// Remove the bill with the given id. Returns whether anything was
    /// removed; an absent id is a normal outcome, not an error.
    pub fn delete(&self, id: i64) -> bool {
        let mut bills = self.bills.write().unwrap();
        let before = bills.len();
        bills.retain(|b| b.id != id);
        bills.len() < before
    }

    /// Overwrite name, amount and due date of the stored bill in place,
    /// leaving its id untouched. Returns the updated bill, or None when no
    /// bill with that id exists (in which case nothing is mutated).
    pub fn update(&self, id: i64, draft: BillDraft) -> Option<Bill> {
        let mut bills = self.bills.write().unwrap();
        let bill = bills.iter_mut().find(|b| b.id == id)?;

        bill.apply(draft);
        Some(bill.clone())
    }

    /// Number of live bills
    pub fn len(&self) -> usize {
        self.bills.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BillRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
