//! Deterministic placement of tree nodes on a 2-D plane.
//!
//! The root sits at the origin. Every other node is placed one fixed step below
//! its parent and shifted sideways by an amount that halves with each level:
//!
//! ```text
//!                    (0, 0)
//!           /                   \
//!      (-2, -1.2)             (2, -1.2)
//!       /      \               /      \
//! (-3, -2.4) (-1, -2.4)  (1, -2.4)  (3, -2.4)
//! ```
//!
//! This keeps the subtrees of a reasonably balanced tree apart. A skewed tree
//! (strictly increasing input, say) gets geometrically shrinking offsets under a
//! constant vertical step, so deep nodes crowd together. That is the documented
//! behavior; no minimum spacing is enforced.
//!
//! # Examples
//!
//! ```
//! use bst_layout::layout::Layout;
//! use bst_layout::tree::Side;
//! use kurbo::Point;
//!
//! let layout = Layout::default();
//! let root = layout.root_position();
//! assert_eq!(root, Point::ORIGIN);
//!
//! let left = layout.child_position(root, Side::Left, 0);
//! assert_eq!(left, Point::new(-2.0, -1.2));
//! ```

use kurbo::{Point, Vec2};
use thiserror::Error;

use crate::tree::Side;

/// Horizontal offset of the root's children.
pub const BASE_SPAN: f64 = 2.0;

/// Downward step between a parent and its children.
pub const VERTICAL_SPACING: f64 = 1.2;

/// Rejected layout constants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The constant was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Which constant was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The constant was zero or negative.
    #[error("{name} must be greater than zero, got {value}")]
    NonPositive {
        /// Which constant was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// The spacing constants of the layout. Positions are a pure function of these
/// constants, a parent's position, the side and the parent's depth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLayout")
)]
pub struct Layout {
    base_span: f64,
    vertical_spacing: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            base_span: BASE_SPAN,
            vertical_spacing: VERTICAL_SPACING,
        }
    }
}

impl Layout {
    /// Builds a layout from custom spacing constants. Both must be finite and positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_layout::layout::{Layout, LayoutError};
    ///
    /// assert!(Layout::new(4.0, 1.0).is_ok());
    /// assert!(matches!(
    ///     Layout::new(0.0, 1.0),
    ///     Err(LayoutError::NonPositive { name: "base_span", .. })
    /// ));
    /// ```
    pub fn new(base_span: f64, vertical_spacing: f64) -> Result<Self, LayoutError> {
        Ok(Self {
            base_span: validate("base_span", base_span)?,
            vertical_spacing: validate("vertical_spacing", vertical_spacing)?,
        })
    }

    /// Horizontal offset of the root's children.
    pub fn base_span(&self) -> f64 {
        self.base_span
    }

    /// Downward step between a parent and its children.
    pub fn vertical_spacing(&self) -> f64 {
        self.vertical_spacing
    }

    /// Where the root goes. Always the origin.
    pub fn root_position(&self) -> Point {
        Point::ORIGIN
    }

    /// Sideways offset of the children of a node at `parent_depth`:
    /// `base_span / 2^parent_depth`.
    ///
    /// Parents deep enough for the divisor to overflow get `0.0`. The result is
    /// always finite, but adding it to a parent position near `f64::MAX` can
    /// still overflow to infinity in [`child_position`][Layout::child_position].
    pub fn horizontal_spacing(&self, parent_depth: usize) -> f64 {
        let exponent = i32::try_from(parent_depth).unwrap_or(i32::MAX);
        self.base_span / 2f64.powi(exponent)
    }

    /// Position of a new child on `side` of a parent at `parent_position` whose
    /// depth is `parent_depth`.
    pub fn child_position(&self, parent_position: Point, side: Side, parent_depth: usize) -> Point {
        let dx = self.horizontal_spacing(parent_depth);
        let dx = match side {
            Side::Left => -dx,
            Side::Right => dx,
        };
        parent_position + Vec2::new(dx, -self.vertical_spacing)
    }
}

/// Unchecked form of [`Layout`] read by serde before validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLayout {
    base_span: f64,
    vertical_spacing: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLayout> for Layout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Self::new(raw.base_span, raw.vertical_spacing)
    }
}

fn validate(name: &'static str, value: f64) -> Result<f64, LayoutError> {
    if !value.is_finite() {
        Err(LayoutError::NonFinite { name, value })
    } else if value <= 0.0 {
        Err(LayoutError::NonPositive { name, value })
    } else {
        Ok(value)
    }
}
