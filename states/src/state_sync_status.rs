/// Freshness of a derived slot relative to its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateSyncStatus {
    /// Never computed.
    #[default]
    Init,
    /// An upstream input changed since the last computation.
    Dirty,
    Clean,
}

impl StateSyncStatus {
    pub fn is_stale(self) -> bool {
        !matches!(self, Self::Clean)
    }
}
