/// Rejections raised by the in-memory project store.
///
/// The UI treats every variant as a silent no-op; they exist so callers can
/// tell a rejected action from an applied one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("project name must not be blank")]
    BlankName,
    #[error("project not found: {0}")]
    NotFound(String),
    #[error("project store is no longer available")]
    Unavailable,
}
