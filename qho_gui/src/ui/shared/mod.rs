//! Shared UI components
//!
//! Components used across multiple panels:
//! - `surface` - 3D surface plot rendering on the Iced canvas

pub mod surface;
