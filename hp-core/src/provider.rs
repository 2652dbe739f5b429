//! Fingerprint providers
//!
//! A provider is one hardware category that contributes data to the
//! fingerprint. Providers are always evaluated in the canonical order of
//! [`ProviderKind::ALL`]; that order is part of the fingerprint value.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use hp_error::{FingerprintError, Result};
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::{chains, class};

/// One hardware category contributing to the fingerprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Processor,
    Bios,
    BaseBoard,
    SystemDisk,
    VideoCardDriver,
    FirstEnabledNicMac,
}

impl ProviderKind {
    /// Every provider, in canonical evaluation order
    pub const ALL: [ProviderKind; 6] = [
        ProviderKind::Processor,
        ProviderKind::Bios,
        ProviderKind::BaseBoard,
        ProviderKind::SystemDisk,
        ProviderKind::VideoCardDriver,
        ProviderKind::FirstEnabledNicMac,
    ];

    /// Stable snake_case name used on the command line and in reports
    pub fn name(self) -> &'static str {
        match self {
            Self::Processor => "processor",
            Self::Bios => "bios",
            Self::BaseBoard => "base_board",
            Self::SystemDisk => "system_disk",
            Self::VideoCardDriver => "video_card_driver",
            Self::FirstEnabledNicMac => "first_enabled_nic_mac",
        }
    }

    /// Device class and property chain queried for optional providers.
    ///
    /// Mandatory providers use dedicated backend queries and return `None`.
    pub fn property_query(self) -> Option<(&'static str, &'static [&'static str])> {
        match self {
            Self::Processor => Some((class::PROCESSOR, chains::PROCESSOR)),
            Self::Bios => Some((class::BIOS, chains::BIOS)),
            Self::BaseBoard => Some((class::BASE_BOARD, chains::BASE_BOARD)),
            Self::VideoCardDriver => Some((class::VIDEO_CONTROLLER, chains::VIDEO_CONTROLLER)),
            Self::SystemDisk | Self::FirstEnabledNicMac => None,
        }
    }

    /// Mandatory providers fail the whole computation when they have no data.
    pub fn is_mandatory(self) -> bool {
        matches!(self, Self::SystemDisk | Self::FirstEnabledNicMac)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| FingerprintError::UnknownProvider(s.trim().to_string()))
    }
}

/// A set of providers with membership tests and canonical-order iteration
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderSet {
    bits: u8,
}

impl ProviderSet {
    /// The empty set. Legal to build, rejected by the calculator.
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Every provider
    pub const fn all() -> Self {
        Self { bits: 0b11_1111 }
    }

    /// A set holding a single provider
    pub fn only(kind: ProviderKind) -> Self {
        Self { bits: kind.bit() }
    }

    pub fn contains(&self, kind: ProviderKind) -> bool {
        self.bits & kind.bit() != 0
    }

    pub fn insert(&mut self, kind: ProviderKind) {
        self.bits |= kind.bit();
    }

    pub fn remove(&mut self, kind: ProviderKind) {
        self.bits &= !kind.bit();
    }

    /// Copy of this set without `kind`
    pub fn without(mut self, kind: ProviderKind) -> Self {
        self.remove(kind);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn is_all(&self) -> bool {
        *self == Self::all()
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Members in canonical order, independent of insertion order
    pub fn iter(&self) -> impl Iterator<Item = ProviderKind> + '_ {
        ProviderKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }

    /// Parse a comma-separated list of provider names.
    ///
    /// `all` selects every provider. Empty segments are ignored, so an empty
    /// string yields the empty set.
    pub fn parse_list(list: &str) -> Result<Self> {
        let mut set = Self::empty();
        for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            if part.eq_ignore_ascii_case("all") {
                set = Self::all();
            } else {
                set.insert(part.parse()?);
            }
        }
        Ok(set)
    }
}

impl Default for ProviderSet {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for ProviderSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(ProviderKind::name).collect();
        f.write_str(&names.join(","))
    }
}

impl FromStr for ProviderSet {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_list(s)
    }
}

impl Serialize for ProviderSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl From<ProviderKind> for ProviderSet {
    fn from(kind: ProviderKind) -> Self {
        Self::only(kind)
    }
}

impl FromIterator<ProviderKind> for ProviderSet {
    fn from_iter<I: IntoIterator<Item = ProviderKind>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

impl Extend<ProviderKind> for ProviderSet {
    fn extend<I: IntoIterator<Item = ProviderKind>>(&mut self, iter: I) {
        for kind in iter {
            self.insert(kind);
        }
    }
}

impl BitOr for ProviderSet {
    type Output = ProviderSet;

    fn bitor(self, rhs: ProviderSet) -> ProviderSet {
        ProviderSet { bits: self.bits | rhs.bits }
    }
}

impl BitOr<ProviderKind> for ProviderSet {
    type Output = ProviderSet;

    fn bitor(mut self, rhs: ProviderKind) -> ProviderSet {
        self.insert(rhs);
        self
    }
}

impl BitOr for ProviderKind {
    type Output = ProviderSet;

    fn bitor(self, rhs: ProviderKind) -> ProviderSet {
        ProviderSet::only(self) | rhs
    }
}

impl BitOrAssign<ProviderKind> for ProviderSet {
    fn bitor_assign(&mut self, rhs: ProviderKind) {
        self.insert(rhs);
    }
}
