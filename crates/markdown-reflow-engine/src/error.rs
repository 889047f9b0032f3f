use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    #[error("Invalid wrap width {width}: width must be at least 1")]
    InvalidWidth { width: usize },
}
