#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum NotifyError {
    #[error("notification channel closed")]
    Closed,

    #[error("notification rejected: {reason}")]
    Rejected { reason: String },
}
