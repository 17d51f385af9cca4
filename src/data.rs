use nalgebra::DVector;
use num::{Float, NumCast, ToPrimitive};

/// Name under which node labels are stored in the point data of a written file.
pub const LABEL_ARRAY_NAME: &str = "tag";

/// A `ScalarField` is a named list of per-node values together with an exponent that is applied
/// to every value before it is stored. The exponent makes it easy to switch between quantities
/// that scale differently, e.g. storing a radius-like value as a volume-like one (`power = 3`) or
/// the other way around (`power = 1/3`).
///
/// # Example
///
/// ````rust
/// use vtk_graph::prelude::*;
///
/// // radii of three particles, stored as radius^3
/// let volume = ScalarField::new("volume", vec![0.5f64, 1.0, 2.0]).with_power(3.0);
/// assert_eq!(volume.transformed().as_slice(), &[0.125f32, 1.0, 8.0]);
/// ````
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField<T> {
    pub name: String,
    pub values: Vec<T>,
    pub power: T,
}

impl<T: Float> ScalarField<T> {
    /// Creates a new scalar field with the identity exponent `1`.
    pub fn new(name: impl Into<String>, values: Vec<T>) -> Self {
        ScalarField {
            name: name.into(),
            values,
            power: T::one(),
        }
    }

    /// Sets the exponent that is applied element-wise before storage.
    pub fn with_power(mut self, power: T) -> Self {
        self.power = power;
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `values[i]^power` for every entry, cast to the single precision type the field is
    /// stored as. Values that cannot be represented end up as `NaN`.
    pub fn transformed(&self) -> DVector<f32> {
        let out = DVector::from_iterator(
            self.values.len(),
            self.values.iter()
                .map(|&v| <f32 as NumCast>::from(v.powf(self.power)).unwrap_or(f32::NAN)),
        );
        let non_finite = out.iter().filter(|v| !v.is_finite()).count();
        if non_finite > 0 {
            log::warn!(
                "scalar field '{}' has {non_finite} non-finite values after applying power {:?}",
                self.name,
                self.power.to_f64(),
            );
        }
        out
    }
}

/// Per-node labels. Labels are stored as they are, without any transformation, under the fixed
/// name [`LABEL_ARRAY_NAME`].
#[derive(Clone, Debug, PartialEq)]
pub struct LabelField {
    pub values: DVector<f32>,
}

impl LabelField {
    pub fn new<T, I>(values: I) -> Self
    where
        T: ToPrimitive,
        I: IntoIterator<Item = T>,
    {
        let values: Vec<f32> = values.into_iter()
            .map(|v| v.to_f32().unwrap_or(f32::NAN))
            .collect();
        LabelField {
            values: DVector::from_vec(values),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A single component point data array, ready to be written.
#[derive(Clone, Debug, PartialEq)]
pub struct PointArray {
    pub name: String,
    pub values: DVector<f32>,
}

impl PointArray {
    pub fn new(name: String, values: DVector<f32>) -> Self {
        PointArray {
            name,
            values,
        }
    }
}

impl<T: Float> From<&ScalarField<T>> for PointArray {
    fn from(value: &ScalarField<T>) -> Self {
        PointArray::new(value.name.clone(), value.transformed())
    }
}

impl From<LabelField> for PointArray {
    fn from(value: LabelField) -> Self {
        PointArray::new(LABEL_ARRAY_NAME.to_owned(), value.values)
    }
}
