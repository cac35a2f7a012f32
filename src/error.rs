//! Error types for layout and simulation operations.

use core::fmt;

use crate::item::ItemIndex;

/// Broad classification of a [`LayoutError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected input; nothing was created or changed.
    InvalidParameter,
    /// No spring exists for the requested item. Usually means the item has
    /// not been laid out yet and the caller should `prepare` again.
    NotFound,
}

/// Errors that can occur while preparing or querying a layout.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Damping ratio must be in (0, 1].
    InvalidDamping(f64),
    /// Frequency must be positive and finite.
    InvalidFrequency(f64),
    /// Column width and row height must be positive and finite.
    InvalidCellSize { width: f64, height: f64 },
    /// Line and interitem spacing must be finite and non-negative.
    InvalidSpacing,
    /// Section insets must be finite and non-negative.
    InvalidInsets,
    /// Available width must be finite and non-negative.
    InvalidAvailableWidth(f64),
    /// Resistance scale must be positive and finite.
    InvalidResistanceScale(f64),
    /// The grid config cannot change while springs are live.
    ConfigLocked,
    /// No spring exists for this item.
    NotFound { index: ItemIndex },
}

impl LayoutError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LayoutError::NotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::InvalidParameter,
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidDamping(d) => write!(f, "damping must be in (0, 1], got {}", d),
            LayoutError::InvalidFrequency(hz) => {
                write!(f, "frequency must be positive, got {}", hz)
            }
            LayoutError::InvalidCellSize { width, height } => {
                write!(f, "cell size must be positive, got {}x{}", width, height)
            }
            LayoutError::InvalidSpacing => write!(f, "spacing must be non-negative"),
            LayoutError::InvalidInsets => write!(f, "section insets must be non-negative"),
            LayoutError::InvalidAvailableWidth(w) => {
                write!(f, "available width must be non-negative, got {}", w)
            }
            LayoutError::InvalidResistanceScale(s) => {
                write!(f, "resistance scale must be positive, got {}", s)
            }
            LayoutError::ConfigLocked => {
                write!(f, "grid config is fixed while the layout is active; tear down first")
            }
            LayoutError::NotFound { index } => write!(f, "no spring for item {}", index),
        }
    }
}

impl core::error::Error for LayoutError {}
