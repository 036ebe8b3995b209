pub mod consts;
pub mod error;
pub mod round;
pub mod vector;
