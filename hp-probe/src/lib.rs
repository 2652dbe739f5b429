//! hostprint Linux probe
//!
//! A [`HardwareInfoSource`] backed by sysfs and procfs. Every path is
//! resolved below a configurable filesystem root, so the same code reads
//! the live host (`/`) or a captured tree in tests.
//!
//! # Module Structure
//!
//! - `cpu` - processors from `/proc/cpuinfo` and cpufreq
//! - `dmi` - BIOS and base board from `/sys/class/dmi/id`
//! - `drm` - video controllers from `/sys/class/drm`
//! - `net` - first IP-enabled adapter from `/sys/class/net`
//! - `disk` - system disk serial via `/proc/mounts` and `/sys/block`

pub mod constants;

mod cpu;
mod disk;
mod dmi;
mod drm;
mod net;
mod sysfs;

use std::path::{Path, PathBuf};

use hp_core::constants::class;
use hp_core::HardwareInfoSource;
use hp_error::Result;
use tracing::debug;

use sysfs::Instance;

/// Hardware inventory read from a Linux sysfs/procfs tree
#[derive(Debug, Clone)]
pub struct SysfsSource {
    root: PathBuf,
}

impl SysfsSource {
    /// Source reading the live host
    pub fn new() -> Self {
        Self::with_root("/")
    }

    /// Source reading a tree mounted or captured under `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn instances(&self, class_name: &str) -> Option<Vec<Instance>> {
        let instances = match class_name {
            class::PROCESSOR => cpu::processors(&self.root),
            class::BIOS => dmi::bios(&self.root),
            class::BASE_BOARD => dmi::base_board(&self.root),
            class::VIDEO_CONTROLLER => drm::video_controllers(&self.root),
            _ => return None,
        };
        Some(instances)
    }
}

impl Default for SysfsSource {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareInfoSource for SysfsSource {
    fn query_properties(&self, class_name: &str, properties: &[&'static str]) -> Result<Vec<String>> {
        let Some(instances) = self.instances(class_name) else {
            debug!(class = class_name, "Unknown hardware class");
            return Ok(Vec::new());
        };

        let values: Vec<String> = instances
            .iter()
            .flat_map(|instance| properties.iter().filter_map(|p| instance.get(p).cloned()))
            .collect();

        debug!(
            class = class_name,
            instances = instances.len(),
            values = values.len(),
            "Queried hardware class"
        );
        Ok(values)
    }

    fn query_ip_enabled_mac(&self) -> Result<Option<String>> {
        Ok(net::first_ip_enabled_mac(&self.root))
    }

    fn query_system_disk_serial(&self, system_root: &Path) -> Result<Option<String>> {
        disk::system_disk_serial(&self.root, system_root)
    }
}
