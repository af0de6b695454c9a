//! Stateless arithmetic backend.
//!
//! [`MathBackend`] evaluates the supported operations given explicit
//! operands. The exponentiation function and the circle constant are plain
//! fields with builder-style overrides, so an alternative numeric backend
//! can be injected at construction time instead of being baked into call
//! sites.

use crate::error::CalcError;

fn default_pow(base: f64, exp: f64) -> f64 {
    base.powf(exp)
}

/// Arithmetic backend with injectable exponentiation and circle constant.
///
/// The backend holds no computation state. All methods take operands
/// explicitly and return the result; only [`divide`](MathBackend::divide)
/// can fail.
#[derive(Debug, Clone, Copy)]
pub struct MathBackend {
    /// Exponentiation function used by [`power`](MathBackend::power).
    pow: fn(f64, f64) -> f64,
    /// Circle constant used by [`circle_area`](MathBackend::circle_area).
    pi: f64,
}

impl Default for MathBackend {
    fn default() -> Self {
        Self {
            pow: default_pow,
            pi: std::f64::consts::PI,
        }
    }
}

impl MathBackend {
    /// Creates a backend with the default exponentiation and pi.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the exponentiation function.
    pub fn with_pow(mut self, pow: fn(f64, f64) -> f64) -> Self {
        self.pow = pow;
        self
    }

    /// Overrides the circle constant.
    pub fn with_pi(mut self, pi: f64) -> Self {
        self.pi = pi;
        self
    }

    /// Adds two numbers.
    pub fn add(&self, x: f64, y: f64) -> f64 {
        x + y
    }

    /// Subtracts `y` from `x`.
    pub fn subtract(&self, x: f64, y: f64) -> f64 {
        x - y
    }

    /// Multiplies two numbers.
    pub fn multiply(&self, x: f64, y: f64) -> f64 {
        x * y
    }

    /// Divides `x` by `y`.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when `y` is zero.
    pub fn divide(&self, x: f64, y: f64) -> Result<f64, CalcError> {
        if y == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(x / y)
    }

    /// Raises `x` to the power `y` using the configured exponentiation
    /// function.
    pub fn power(&self, x: f64, y: f64) -> f64 {
        (self.pow)(x, y)
    }

    /// Computes the area of a circle with the given radius using the
    /// configured circle constant.
    ///
    /// The radius is not validated: a negative radius is accepted and
    /// yields the same numeric area as its absolute value.
    pub fn circle_area(&self, radius: f64) -> f64 {
        self.pi * radius * radius
    }
}
