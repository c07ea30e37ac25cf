use crate::StateSyncStatus;

/// A cached derived value together with its freshness.
///
/// The owner marks the slot dirty when an input changes and calls
/// [`Memo::refresh`] with the recomputation. A clean slot ignores refreshes,
/// so recomputation only happens once per change.
#[derive(Debug, Clone, Default)]
pub struct Memo<T> {
    value: T,
    status: StateSyncStatus,
    revision: u64,
}

impl<T> Memo<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            status: StateSyncStatus::Init,
            revision: 0,
        }
    }

    /// The last computed value. May be stale if read before a refresh.
    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn status(&self) -> StateSyncStatus {
        self.status
    }

    pub fn is_stale(&self) -> bool {
        self.status.is_stale()
    }

    /// How many times the value has been recomputed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn mark_dirty(&mut self) {
        if self.status == StateSyncStatus::Clean {
            self.status = StateSyncStatus::Dirty;
        }
    }

    /// Recomputes the value if stale. Returns whether a recomputation ran.
    pub fn refresh(&mut self, compute: impl FnOnce() -> T) -> bool {
        if !self.is_stale() {
            return false;
        }
        self.value = compute();
        self.status = StateSyncStatus::Clean;
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_memo_starts_stale() {
        let memo = Memo::new(0_u32);
        assert_eq!(memo.status(), StateSyncStatus::Init);
        assert!(memo.is_stale());
        assert_eq!(memo.revision(), 0);
    }

    #[test]
    fn refresh_only_runs_when_stale() {
        let mut memo = Memo::new(Vec::<u32>::new());

        assert!(memo.refresh(|| vec![1, 2]));
        assert_eq!(memo.get(), &[1, 2]);
        assert_eq!(memo.status(), StateSyncStatus::Clean);

        assert!(!memo.refresh(|| vec![9]));
        assert_eq!(memo.get(), &[1, 2]);
        assert_eq!(memo.revision(), 1);
    }

    #[test]
    fn dirty_memo_recomputes_once() {
        let mut memo = Memo::new(1_u32);
        memo.refresh(|| 2);

        memo.mark_dirty();
        assert_eq!(memo.status(), StateSyncStatus::Dirty);
        assert!(memo.refresh(|| 3));
        assert!(!memo.refresh(|| 4));
        assert_eq!(*memo.get(), 3);
        assert_eq!(memo.revision(), 2);
    }

    #[test]
    fn marking_uncomputed_memo_keeps_init() {
        let mut memo = Memo::new(0_u8);
        memo.mark_dirty();
        assert_eq!(memo.status(), StateSyncStatus::Init);
    }
}
