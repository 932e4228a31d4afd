use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanelError {
    /// The bound value's shape does not support the requested control kind,
    /// e.g. color options on a non-array binding. Raised at factory time so
    /// a broken control is never constructed.
    #[error("invalid widget binding for {title:?}: {reason}")]
    InvalidWidgetBinding { title: String, reason: String },

    /// A persisted panel document failed to parse. In-memory control state
    /// is left untouched.
    #[error("malformed panel state document: {0}")]
    PersistenceFormat(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
