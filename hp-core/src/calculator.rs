//! Fingerprint Calculator
//!
//! Turns hardware facts into a fingerprint:
//!
//! 1. every selected provider is queried in canonical order
//! 2. each provider's values are concatenated and hashed on their own
//! 3. the per-provider hashes are concatenated and hashed again
//! 4. the outer digest is beautified (`XXXXX-XXXXX-...`)
//!
//! Optional providers (processor, BIOS, base board, video driver) that have no
//! data are skipped. The system disk and the network adapter are mandatory:
//! missing data there aborts the computation.

use std::path::{Path, PathBuf};
use std::thread;

use hp_error::{FingerprintError, Result};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::hash::{self, sha1_hex, FingerprintHash, FormattedFingerprint};
use crate::provider::{ProviderKind, ProviderSet};
use crate::source::{system_root_path, HardwareInfoSource};

// ============================================================================
// Results
// ============================================================================

/// What a single provider added to the fingerprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderContribution {
    pub kind: ProviderKind,
    /// SHA-1 hex of the provider's values, `None` when it contributed nothing
    pub hash: Option<String>,
}

/// Fingerprint together with the per-provider breakdown it was built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FingerprintReport {
    pub fingerprint: FormattedFingerprint,
    /// One entry per selected provider, in canonical order
    pub contributions: Vec<ProviderContribution>,
}

impl FingerprintReport {
    fn assemble(contributions: Vec<ProviderContribution>) -> Result<Self> {
        let accumulator: String = contributions
            .iter()
            .filter_map(|c| c.hash.as_deref())
            .collect();

        if accumulator.is_empty() {
            return Err(FingerprintError::NoProviderData);
        }

        Ok(Self {
            fingerprint: FormattedFingerprint::from_hash(&FingerprintHash::of(&accumulator)),
            contributions,
        })
    }

    /// Providers that actually contributed data
    pub fn contributing(&self) -> impl Iterator<Item = ProviderKind> + '_ {
        self.contributions
            .iter()
            .filter(|c| c.hash.is_some())
            .map(|c| c.kind)
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// Computes host fingerprints from a hardware inventory source.
///
/// Holds no state between calls; the same source on an unchanged host
/// always yields the same fingerprint.
pub struct FingerprintCalculator<S> {
    source: S,
    system_root: PathBuf,
}

impl<S: HardwareInfoSource> FingerprintCalculator<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            system_root: system_root_path(),
        }
    }

    /// Override the OS root path used to locate the system disk
    pub fn with_system_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.system_root = root.into();
        self
    }

    pub fn system_root(&self) -> &Path {
        &self.system_root
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fingerprint over the selected providers
    pub fn compute(&self, providers: ProviderSet) -> Result<FormattedFingerprint> {
        Ok(self.compute_report(providers)?.fingerprint)
    }

    /// Fingerprint over the selected providers, with the per-provider breakdown
    pub fn compute_report(&self, providers: ProviderSet) -> Result<FingerprintReport> {
        debug!(providers = %providers, "Computing fingerprint");

        let contributions = providers
            .iter()
            .map(|kind| {
                Ok(ProviderContribution {
                    kind,
                    hash: self.provider_hash(kind)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        FingerprintReport::assemble(contributions)
    }

    /// Salted fingerprint. Always recomputes the base over every provider.
    pub fn compute_with_salt(&self, salt: &str) -> Result<FormattedFingerprint> {
        let base = self.compute(ProviderSet::all())?;
        Ok(hash::saltify(base.as_str(), salt))
    }

    /// Salt a previously computed fingerprint or hash string
    pub fn saltify(&self, prior: &str, salt: &str) -> FormattedFingerprint {
        hash::saltify(prior, salt)
    }

    /// Hash contributed by one provider, `None` if an optional provider is empty
    fn provider_hash(&self, kind: ProviderKind) -> Result<Option<String>> {
        match kind {
            ProviderKind::SystemDisk => self.system_disk_hash().map(Some),
            ProviderKind::FirstEnabledNicMac => self.nic_mac_hash().map(Some),
            _ => Ok(self.optional_hash(kind)),
        }
    }

    fn optional_hash(&self, kind: ProviderKind) -> Option<String> {
        let (class, properties) = kind.property_query()?;

        let bundle = match self.source.query_properties(class, properties) {
            Ok(bundle) => bundle,
            Err(e) => {
                warn!(provider = %kind, class, error = %e, "Hardware query failed, provider skipped");
                return None;
            }
        };

        let raw = bundle.concat();
        if raw.is_empty() {
            debug!(provider = %kind, class, "Provider returned no data, skipped");
            return None;
        }

        trace!(provider = %kind, values = bundle.len(), "Provider data collected");
        Some(sha1_hex(&raw))
    }

    fn system_disk_hash(&self) -> Result<String> {
        let serial = self
            .source
            .query_system_disk_serial(&self.system_root)?
            .ok_or_else(|| FingerprintError::DiskNotFound {
                root: self.system_root.clone(),
            })?;

        let serial = serial.trim();
        if serial.is_empty() {
            return Err(FingerprintError::DiskSerialEmpty {
                root: self.system_root.clone(),
            });
        }

        Ok(sha1_hex(serial))
    }

    fn nic_mac_hash(&self) -> Result<String> {
        let mac = self
            .source
            .query_ip_enabled_mac()?
            .filter(|mac| !mac.is_empty())
            .ok_or(FingerprintError::NoActiveAdapter)?;

        Ok(sha1_hex(&mac))
    }
}

impl<S: HardwareInfoSource + Sync> FingerprintCalculator<S> {
    /// Same value as [`compute`](Self::compute), querying providers concurrently
    pub fn compute_parallel(&self, providers: ProviderSet) -> Result<FormattedFingerprint> {
        Ok(self.compute_report_parallel(providers)?.fingerprint)
    }

    /// Same value as [`compute_report`](Self::compute_report), querying
    /// providers concurrently.
    ///
    /// Results are reassembled in canonical order, never completion order.
    /// When several providers fail, the first failure in canonical order wins.
    pub fn compute_report_parallel(&self, providers: ProviderSet) -> Result<FingerprintReport> {
        debug!(providers = %providers, "Computing fingerprint (parallel)");

        let results: Vec<(ProviderKind, Result<Option<String>>)> = thread::scope(|scope| {
            let handles: Vec<_> = providers
                .iter()
                .map(|kind| (kind, scope.spawn(move || self.provider_hash(kind))))
                .collect();

            handles
                .into_iter()
                .map(|(kind, handle)| {
                    let result = handle.join().unwrap_or_else(|_| {
                        Err(FingerprintError::hardware_query(kind.name(), "provider query panicked"))
                    });
                    (kind, result)
                })
                .collect()
        });

        let contributions = results
            .into_iter()
            .map(|(kind, result)| result.map(|hash| ProviderContribution { kind, hash }))
            .collect::<Result<Vec<_>>>()?;

        FingerprintReport::assemble(contributions)
    }
}
