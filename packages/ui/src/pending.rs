//! In-flight bookkeeping for the dashboard's delete action.

use store::EntryId;

/// The entry whose delete request is outstanding, if any. At most one delete runs
/// at a time; further requests are refused until it finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingDelete(Option<EntryId>);

impl PendingDelete {
    /// Claim the slot for `id`. Returns `false` while another delete is outstanding.
    pub fn begin(&mut self, id: EntryId) -> bool {
        if self.0.is_some() {
            return false;
        }
        self.0 = Some(id);
        true
    }

    pub fn finish(&mut self) {
        self.0 = None;
    }

    pub fn is_busy(&self) -> bool {
        self.0.is_some()
    }

    /// Whether `id` is the entry being deleted.
    pub fn is_deleting(&self, id: EntryId) -> bool {
        self.0 == Some(id)
    }
}
