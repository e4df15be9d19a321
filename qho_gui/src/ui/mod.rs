//! UI module for the Oscillo GUI
//!
//! # Panel Structure
//! - `header` - Centered application title and theme toggle
//! - `controls` - Quantum-number spin controls and the Show! button
//! - `plots` - Two stacked 3D surface canvases (amplitude, density)
//! - `info_tabs` - Explanatory tabs: Wave function, Probability, Report
//! - `status_bar` - Bottom status messages and peak readout
//!
//! # Shared Components
//! - `shared/surface` - Canvas drawing for 3D surface plots

pub mod controls;
pub mod header;
pub mod info_tabs;
pub mod plots;
pub mod status_bar;

pub mod shared;
