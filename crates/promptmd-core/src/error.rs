use thiserror::Error;

/// Error type returned by composite render functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// A composite node's render function failed. The whole conversion is abandoned.
    #[error("component `{name}` failed to render: {source}")]
    Component {
        name: String,
        #[source]
        source: BoxError,
    },
}

pub type Result<T> = std::result::Result<T, ConvertError>;
