use thiserror::Error;

/// Everything that can go wrong while building or writing a drawing
#[derive(Debug, Error)]
pub enum Error {
    /// A coordinate or length was missing, unparseable, non-finite or (for sizes) negative
    #[error("invalid dimension `{name}`: {value:?}")]
    InvalidDimension { name: &'static str, value: String },

    /// A paint token was empty or malformed
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Segmented rings need at least a triangle's worth of segments
    #[error("a segmented ring needs at least 3 segments, got {0}")]
    InvalidSegmentCount(usize),

    /// The ring's thickness doesn't fit inside its radius
    #[error("ring thickness {thickness} must be in (0, {radius}]")]
    InvalidRing { radius: f32, thickness: f32 },

    /// A bowl profile couldn't be deserialized
    #[error("invalid profile config: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading a profile or writing a sketch failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
