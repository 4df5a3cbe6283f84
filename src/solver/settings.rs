use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Settings for the successive projection solvers.
///
/// Construct with [`SpaSettingsBuilder`], e.g.
///
/// ```
/// use rspa::solver::SpaSettingsBuilder;
///
/// let settings = SpaSettingsBuilder::<f64>::default()
///     .tol(1e-8)
///     .max_iter(5000)
///     .build()
///     .unwrap();
/// assert!(!settings.verbose);
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpaSettings<T: FloatT> {
    ///maximum number of full sweeps over the constraint rows
    #[builder(default = "1000")]
    pub max_iter: u32,

    ///convergence tolerance on the largest scaled row correction
    #[builder(default = "(1e-2).as_T()")]
    pub tol: T,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,
}

impl<T> Default for SpaSettings<T>
where
    T: FloatT,
{
    fn default() -> SpaSettings<T> {
        SpaSettings {
            max_iter: 1000,
            tol: (1e-2).as_T(),
            verbose: false,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An illegal value in one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

impl<T> SpaSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.  The tolerance must be a
    /// nonnegative number, possibly infinite.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_tol(self.tol)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SpaSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SpaSettingsBuilderError::ValidationError(e.to_string())
    }
}

impl<T> SpaSettingsBuilder<T>
where
    T: FloatT,
{
    /// check the builder fields that have been set
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tol) = self.tol {
            validate_tol(tol)?;
        }
        Ok(())
    }
}

fn validate_tol<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    // NaN fails this comparison too
    if tol >= T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("tol"))
    }
}
