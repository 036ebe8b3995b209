//! Immutable 2D vector with components kept at two decimal places.
//!
//! ```
//! use vector2d::Vector2D;
//!
//! let v = Vector2D::from_two_points((1.0, 1.0), (4.0, 5.0));
//! assert_eq!(v.length(), 5.0);
//! assert_eq!(v * 2.0, Vector2D::new(6.0, 8.0));
//! assert_eq!(v * Vector2D::new(1.0, 0.0), 3.0);
//! assert_eq!(Vector2D::new(1.0, 0.0).angle_from_y_axis(), Ok(90));
//! ```

#![deny(clippy::all)]
#![forbid(unsafe_code)]

pub mod vec_core;

pub use vec_core::error::VectorError;
pub use vec_core::vector::Vector2D;
