//! # qho_core - 2D Quantum Harmonic Oscillator Engine
//!
//! `qho_core` is the computational heart of Oscillo, evaluating the separable
//! eigenfunctions of the two-dimensional quantum harmonic oscillator on a
//! spatial grid. All inputs and outputs are plain data: the GUI hands in a
//! pair of quantum numbers and a grid description, and gets back the sampled
//! amplitude field ready for rendering.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-Friendly**: Parameter types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use qho_core::{evaluate, GridSpec, QuantumNumbers};
//!
//! let numbers = QuantumNumbers::new(0, 0).unwrap();
//! let field = evaluate(&numbers, &GridSpec::default()).unwrap();
//!
//! // Ground state peaks at 1/sqrt(pi) in the middle of the grid
//! assert!((field.peak().value - 0.5642).abs() < 1e-3);
//! ```
//!
//! ## Modules
//!
//! - [`grid`] - Spatial grid description, sampling, and mesh expansion
//! - [`hermite`] - Hermite polynomials and normalized oscillator functions
//! - [`wavefunction`] - Quantum numbers and the 2D amplitude field
//! - [`errors`] - Structured error types

pub mod errors;
pub mod grid;
pub mod hermite;
pub mod wavefunction;

// Re-export commonly used types at crate root for convenience
pub use errors::{QhoError, QhoResult};
pub use grid::GridSpec;
pub use wavefunction::{evaluate, QuantumNumbers, WaveField, MAX_QUANTUM_NUMBER};
