//! Taxpayer identifier validation
//!
//! Validation is two-staged: a local format check that must pass, then an
//! optional call to a [`TaxIdVerifier`]. A verifier failure is not fatal; the
//! validator degrades to an unverified result with status `Pending`.

use crate::core::traits::TaxIdVerifier;
use crate::types::{RegistrationStatus, TaxError, TaxId, Verification};
use tracing::{info, warn};

/// Name reported when the verifier could not be reached
pub const FALLBACK_TAXPAYER_NAME: &str = "Tax ID Format Valid - Name Unavailable";

/// Offline verifier that confirms every well-formed identifier
///
/// Stands in for the remote authority when no verification service is
/// configured. The name is derived from the identifier so results are
/// reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockVerifier;

impl TaxIdVerifier for MockVerifier {
    fn verify(&self, tax_id: &TaxId) -> Result<String, TaxError> {
        Ok(format!("VERIFIED TAXPAYER {}", tax_id.suffix()))
    }
}

/// Validates identifiers, optionally confirming them with a verifier
#[derive(Debug, Clone, Default)]
pub struct TaxIdValidator<V> {
    verifier: Option<V>,
}

impl<V: TaxIdVerifier> TaxIdValidator<V> {
    /// Validator that also consults `verifier`
    pub fn new(verifier: V) -> Self {
        Self {
            verifier: Some(verifier),
        }
    }

    /// Validator that only checks the format
    pub fn format_only() -> Self {
        Self { verifier: None }
    }

    /// Validate a raw identifier
    ///
    /// # Errors
    ///
    /// Returns `TaxError::MissingTaxId` for blank input and
    /// `TaxError::InvalidTaxId` when neither format matches. Verifier errors
    /// are logged and replaced by the fallback result.
    pub fn validate(&self, raw: &str) -> Result<Verification, TaxError> {
        let tax_id = TaxId::parse(raw)?;

        let Some(verifier) = &self.verifier else {
            return Ok(Verification {
                tax_id,
                valid: true,
                verified: false,
                taxpayer_name: None,
                status: RegistrationStatus::Pending,
            });
        };

        match verifier.verify(&tax_id) {
            Ok(name) => {
                info!(tax_id = %tax_id, "tax id verified");
                Ok(Verification {
                    tax_id,
                    valid: true,
                    verified: true,
                    taxpayer_name: Some(name),
                    status: RegistrationStatus::Active,
                })
            }
            Err(e) => {
                warn!(tax_id = %tax_id, error = %e, "verification unavailable, using format check only");
                Ok(Verification {
                    tax_id,
                    valid: true,
                    verified: false,
                    taxpayer_name: Some(FALLBACK_TAXPAYER_NAME.to_string()),
                    status: RegistrationStatus::Pending,
                })
            }
        }
    }
}
