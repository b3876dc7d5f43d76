//! Positional parameter storage
//!
//! [`ParameterVector`] keeps the current values of an element's parameters in
//! a fixed-size array, parallel to the element type's static
//! [`ParameterSpec`] table. Bounds are enforced at every point of mutation,
//! so reading values (and therefore evaluating an element) never has to
//! re-check them.
//!
//! [`ParameterAccess`] is the object-safe view over any vector size, used by
//! the element trait and by callers that address parameters by name.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::parameters::parameter::ParameterSpec;
use crate::parameters::validation::ValidationError;

/// Bounds-checked, ordered parameter values for one element instance
///
/// # Examples
///
/// ```
/// use zmodel_rs::parameters::{ParameterSpec, ParameterVector};
///
/// static SPECS: [ParameterSpec; 2] = [
///     ParameterSpec::new("R", "Ohm", 0.01, 1e-4, 1e4),
///     ParameterSpec::new("tau", "s", 1.0, 1e-6, 1e3),
/// ];
///
/// let mut params = ParameterVector::new(&SPECS, &[1.0, 0.5]).unwrap();
/// assert_eq!(params.get(1), 0.5);
///
/// params.set(0, 2.0).unwrap();
/// assert_eq!(params.get(0), 2.0);
///
/// // Out of bounds: the stored value is left untouched
/// assert!(params.set(0, 1e5).is_err());
/// assert_eq!(params.get(0), 2.0);
/// ```
#[derive(Clone, PartialEq)]
pub struct ParameterVector<const N: usize> {
    specs: &'static [ParameterSpec; N],
    values: [f64; N],
}

impl<const N: usize> ParameterVector<N> {
    /// Create a parameter vector from explicit values
    ///
    /// # Arguments
    ///
    /// * `specs` - The element type's static parameter table
    /// * `values` - One value per table entry, in table order
    ///
    /// # Returns
    ///
    /// The vector, or [`ValidationError::LengthMismatch`] if the number of
    /// values differs from the table length, or
    /// [`ValidationError::OutOfBounds`] for the first value outside its bounds
    pub fn new(
        specs: &'static [ParameterSpec; N],
        values: &[f64],
    ) -> Result<Self, ValidationError> {
        let values = Self::check_all(specs, values)?;
        Ok(Self { specs, values })
    }

    /// Create a parameter vector holding the table defaults
    pub fn with_defaults(specs: &'static [ParameterSpec; N]) -> Self {
        Self {
            specs,
            values: std::array::from_fn(|i| specs[i].default),
        }
    }

    /// Validate a full value list against a table without storing it
    fn check_all(
        specs: &'static [ParameterSpec; N],
        values: &[f64],
    ) -> Result<[f64; N], ValidationError> {
        if values.len() != N {
            return Err(ValidationError::LengthMismatch {
                expected: N,
                found: values.len(),
            });
        }

        let mut checked = [0.0; N];
        for (slot, (spec, &value)) in checked.iter_mut().zip(specs.iter().zip(values)) {
            *slot = spec.validate(value)?;
        }

        Ok(checked)
    }

    /// Get the value at a fixed position
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`. Indices come from the owning element type,
    /// so an out-of-range index is a programming error.
    pub fn get(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Replace the value at a fixed position
    ///
    /// # Returns
    ///
    /// `Ok(())` if the value was stored, or [`ValidationError::OutOfBounds`]
    /// if it lies outside `[min, max]`, in which case nothing changes
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), ValidationError> {
        self.values[index] = self.specs[index].validate(value)?;
        Ok(())
    }

    /// Replace every value at once
    ///
    /// All values are validated before any is written, so a failed update
    /// leaves the vector unchanged.
    pub fn set_all(&mut self, values: &[f64]) -> Result<(), ValidationError> {
        self.values = Self::check_all(self.specs, values)?;
        Ok(())
    }

    /// Restore the table defaults
    pub fn reset(&mut self) {
        self.values = std::array::from_fn(|i| self.specs[i].default);
    }

    /// Current values in table order
    pub fn values(&self) -> &[f64; N] {
        &self.values
    }

    /// The static table backing this vector
    pub fn specs(&self) -> &'static [ParameterSpec; N] {
        self.specs
    }

    /// Number of parameters
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the vector holds no parameters
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Iterate over `(name, value)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.specs
            .iter()
            .zip(self.values.iter())
            .map(|(spec, &value)| (spec.name, value))
    }
}

impl<const N: usize> fmt::Debug for ParameterVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<const N: usize> Serialize for ParameterVector<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(N))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

/// Object-safe access to an element's parameters, independent of their count
pub trait ParameterAccess: fmt::Debug + Send + Sync {
    /// The static table describing each parameter
    fn specs(&self) -> &'static [ParameterSpec];

    /// Current values in table order
    fn values(&self) -> &[f64];

    /// Replace the value at a fixed position, enforcing its bounds
    fn set(&mut self, index: usize, value: f64) -> Result<(), ValidationError>;

    /// Replace every value at once; all-or-nothing
    fn set_all(&mut self, values: &[f64]) -> Result<(), ValidationError>;

    /// Restore the table defaults
    fn reset(&mut self);

    /// Number of parameters
    fn len(&self) -> usize {
        self.values().len()
    }

    /// Whether there are no parameters
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value at a fixed position; panics if out of range
    fn get(&self, index: usize) -> f64 {
        self.values()[index]
    }

    /// Position of the parameter with the given name
    fn index_of(&self, name: &str) -> Option<usize> {
        self.specs().iter().position(|spec| spec.name == name)
    }

    /// Value of the parameter with the given name
    fn get_named(&self, name: &str) -> Option<f64> {
        self.index_of(name).map(|index| self.get(index))
    }

    /// Set the parameter with the given name
    ///
    /// # Returns
    ///
    /// [`ValidationError::UnknownParameter`] if no parameter carries that
    /// name, otherwise the result of the positional `set`
    fn set_named(&mut self, name: &str, value: f64) -> Result<(), ValidationError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| ValidationError::UnknownParameter {
                name: name.to_string(),
            })?;
        self.set(index, value)
    }

    /// Lower bounds in table order
    fn lower_bounds(&self) -> Vec<f64> {
        self.specs().iter().map(|spec| spec.min()).collect()
    }

    /// Upper bounds in table order
    fn upper_bounds(&self) -> Vec<f64> {
        self.specs().iter().map(|spec| spec.max()).collect()
    }
}

impl<const N: usize> ParameterAccess for ParameterVector<N> {
    fn specs(&self) -> &'static [ParameterSpec] {
        self.specs
    }

    fn values(&self) -> &[f64] {
        &self.values
    }

    fn set(&mut self, index: usize, value: f64) -> Result<(), ValidationError> {
        ParameterVector::set(self, index, value)
    }

    fn set_all(&mut self, values: &[f64]) -> Result<(), ValidationError> {
        ParameterVector::set_all(self, values)
    }

    fn reset(&mut self) {
        ParameterVector::reset(self)
    }
}
