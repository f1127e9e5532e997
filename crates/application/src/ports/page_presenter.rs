use umbra_domain::Verdict;

/// Port for the document-side presentation of a verdict.
///
/// `present` is synchronous — it is a pair of in-memory document writes;
/// only the settings store does I/O. Implementations must be idempotent:
/// re-presenting an identical verdict must not touch the document again.
pub trait PagePresenter: Send + Sync {
    fn present(&self, verdict: &Verdict);
}
