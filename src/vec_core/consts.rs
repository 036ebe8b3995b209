// =============================================================================
// PRECISION
// =============================================================================

/// Decimal digits kept for every stored component.
///
/// Applied once at construction, so all results of arithmetic, normalization
/// and rotation carry at most this many digits.
pub const DECIMAL_PLACES: usize = 2;

/// Tolerance for comparing derived, unrounded quantities (lengths, dot
/// products) in tests and callers.
pub const EPSILON: f64 = 1e-9;

/// Tolerance for comparing stored components after a chain of operations,
/// each of which may shift a component by half of the last kept digit.
pub const COMPONENT_EPSILON: f64 = 0.015;

// =============================================================================
// REFERENCE AXES
// =============================================================================

/// Components of the unit vector along the y-axis, the reference direction
/// of `angle_from_y_axis`.
pub const Y_AXIS: (f64, f64) = (0.0, 1.0);
