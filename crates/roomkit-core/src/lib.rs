//! # RoomKit Core
//!
//! Core value types and error handling shared by the RoomKit crates.
//! Provides the coordinate types used by the scene model, element
//! identity, and the error taxonomy surfaced to host applications.

pub mod error;
pub mod types;

pub use error::{DocumentError, Error, Result};
pub use types::{new_element_id, ElementId, ElementKind, Point2D, Point3D};
