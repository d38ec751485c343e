//! Error type for pose validation and configuration

/// Everything that can go wrong before a pose reaches the classifier
#[derive(Debug, thiserror::Error)]
pub enum GestureError {
    #[error("Invalid landmark count: {found} (expected {expected})")]
    LandmarkCount { expected: usize, found: usize },

    #[error("Landmark {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("Landmark {index} out of range: ({x}, {y}) not in [0, 1]")]
    CoordinateOutOfRange { index: usize, x: f32, y: f32 },

    #[error("Invalid frame length: {found} floats (expected {expected})")]
    FrameLength { expected: usize, found: usize },

    #[error("Hand count {num_hands} overflows the frame buffer size")]
    HandCountOverflow { num_hands: usize },

    #[error("Hand id {id} appears twice in one frame")]
    DuplicateHandId { id: u32 },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
