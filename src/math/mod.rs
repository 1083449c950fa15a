//! Mathematical utilities for the renderer

/// Linear interpolation and gradient parameterisation
pub mod interpolation;
/// Error function and Gaussian coverage used for glow effects
pub mod probability;
