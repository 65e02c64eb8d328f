//! Record ordering.
//!
//! One ordering is shared by every view and export, so the rendered list,
//! the shared text and the exported files always agree.

use crate::record::VideoRecord;

/// Sort records ascending by `order`.
///
/// The sort is stable: records with equal `order` keep their extraction
/// order.
#[must_use]
pub fn sort_by_order(records: Vec<VideoRecord>) -> Vec<VideoRecord> {
    let mut records = records;
    records.sort_by_key(|record| record.order);
    records
}
