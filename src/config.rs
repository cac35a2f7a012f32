//! Configuration types for grid geometry, springs and scroll response.

use crate::error::LayoutError;
use crate::geometry::{EdgeInsets, Size};

/// Divisor turning touch distance into resistance. Larger values mean items
/// far from the touch lag less.
pub const DEFAULT_RESISTANCE_SCALE: f64 = 1500.0;

/// Uniform grid geometry.
///
/// # Builder Pattern
/// ```
/// use springy::config::GridConfig;
/// use springy::geometry::EdgeInsets;
///
/// let config = GridConfig::new()
///     .with_cell_size(120.0, 80.0)
///     .with_line_spacing(12.0)
///     .with_section_insets(EdgeInsets::new(8.0, 8.0, 8.0, 8.0))
///     .with_available_width(400.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Width of every cell. Default: 300.
    pub column_width: f64,
    /// Height of every cell. Default: 150.
    pub row_height: f64,
    /// Vertical gap between rows. Default: 25.
    pub line_spacing: f64,
    /// Minimum horizontal gap between cells in a row. Default: 10.
    pub interitem_spacing: f64,
    /// Padding around each section. Default: top 10, others 0.
    pub section_insets: EdgeInsets,
    /// Width of the host's content area. Zero lays items out in a single
    /// column. Default: 0.
    pub available_width: f64,
}

impl GridConfig {
    pub fn new() -> Self {
        GridConfig {
            column_width: 300.0,
            row_height: 150.0,
            line_spacing: 25.0,
            interitem_spacing: 10.0,
            section_insets: EdgeInsets::new(10.0, 0.0, 0.0, 0.0),
            available_width: 0.0,
        }
    }

    /// Set the column width and row height of every cell.
    pub fn with_cell_size(mut self, column_width: f64, row_height: f64) -> Self {
        self.column_width = column_width;
        self.row_height = row_height;
        self
    }

    /// Set the vertical gap between rows.
    pub fn with_line_spacing(mut self, spacing: f64) -> Self {
        self.line_spacing = spacing;
        self
    }

    /// Set the minimum horizontal gap between cells.
    pub fn with_interitem_spacing(mut self, spacing: f64) -> Self {
        self.interitem_spacing = spacing;
        self
    }

    /// Set the padding around each section.
    pub fn with_section_insets(mut self, insets: EdgeInsets) -> Self {
        self.section_insets = insets;
        self
    }

    /// Set the width of the host's content area.
    pub fn with_available_width(mut self, width: f64) -> Self {
        self.available_width = width;
        self
    }

    pub fn item_size(&self) -> Size { Size::new(self.column_width, self.row_height) }

    /// Number of cells that fit side by side; never less than one.
    pub fn columns(&self) -> usize {
        let usable = self.available_width - self.section_insets.horizontal() + self.interitem_spacing;
        let fit = libm::floor(usable / (self.column_width + self.interitem_spacing));
        if fit >= 1.0 { fit as usize } else { 1 }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;

        if !positive(self.column_width) || !positive(self.row_height) {
            return Err(LayoutError::InvalidCellSize {
                width: self.column_width,
                height: self.row_height,
            });
        }
        if !non_negative(self.line_spacing) || !non_negative(self.interitem_spacing) {
            return Err(LayoutError::InvalidSpacing);
        }
        if !self.section_insets.is_valid() {
            return Err(LayoutError::InvalidInsets);
        }
        if !non_negative(self.available_width) {
            return Err(LayoutError::InvalidAvailableWidth(self.available_width));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Oscillator parameters shared by every spring in a layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpringParams {
    /// Damping ratio in (0, 1]. 1.0 is critically damped. Default: 0.8.
    pub damping: f64,
    /// Natural frequency in Hz. Default: 1.0.
    pub frequency: f64,
}

impl SpringParams {
    pub fn new() -> Self {
        SpringParams { damping: 0.8, frequency: 1.0 }
    }

    /// Set the damping ratio.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the natural frequency in Hz.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        // NaN fails both comparisons.
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(LayoutError::InvalidDamping(self.damping));
        }
        if !(self.frequency > 0.0 && self.frequency.is_finite()) {
            return Err(LayoutError::InvalidFrequency(self.frequency));
        }
        Ok(())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::new()
    }
}

/// What a bounds change does to each spring.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BoundsResponse {
    /// Move the spring's anchor to the displaced position.
    #[default]
    Retarget,
    /// Move the item itself and leave the anchor in place, so the spring
    /// pulls it back to its grid position.
    Displace,
}

/// How scroll events perturb the springs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Default: [`DEFAULT_RESISTANCE_SCALE`].
    pub resistance_scale: f64,
    /// Default: [`BoundsResponse::Retarget`].
    pub response: BoundsResponse,
}

impl ScrollConfig {
    pub fn new() -> Self {
        ScrollConfig {
            resistance_scale: DEFAULT_RESISTANCE_SCALE,
            response: BoundsResponse::default(),
        }
    }

    /// Set the divisor applied to touch distance.
    pub fn with_resistance_scale(mut self, scale: f64) -> Self {
        self.resistance_scale = scale;
        self
    }

    /// Set how springs react to a bounds change.
    pub fn with_response(mut self, response: BoundsResponse) -> Self {
        self.response = response;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.resistance_scale > 0.0 && self.resistance_scale.is_finite()) {
            return Err(LayoutError::InvalidResistanceScale(self.resistance_scale));
        }
        Ok(())
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self::new()
    }
}
