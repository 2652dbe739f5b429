//! Probe-related constants
//!
//! Paths are relative so they can be resolved under any filesystem root.

/// Per-CPU information exported by the kernel
pub const CPUINFO_PATH: &str = "proc/cpuinfo";

/// Board model on device-tree platforms (NUL terminated)
pub const DEVICE_TREE_MODEL_PATH: &str = "proc/device-tree/model";

/// Per-CPU sysfs directories (`cpuN/cpufreq/...`)
pub const CPU_SYSFS_PATH: &str = "sys/devices/system/cpu";

/// DMI/SMBIOS identifiers
pub const DMI_ID_PATH: &str = "sys/class/dmi/id";

/// Path to DRM (Direct Rendering Manager) devices
pub const DRM_PATH: &str = "sys/class/drm";

/// Loaded kernel modules
pub const MODULE_PATH: &str = "sys/module";

/// Running kernel release, used as the version of in-tree drivers
pub const OSRELEASE_PATH: &str = "proc/sys/kernel/osrelease";

/// Network interfaces
pub const NET_PATH: &str = "sys/class/net";

/// Mount table of the current namespace
pub const MOUNTS_PATH: &str = "proc/mounts";

/// Whole block devices; partitions appear as subdirectories
pub const BLOCK_PATH: &str = "sys/block";

/// cpufreq reports kHz
pub const KHZ_PER_MHZ: u64 = 1000;

/// Header bytes preceding the ASCII serial in a SCSI VPD page 0x80
pub const VPD_PG80_HEADER_LEN: usize = 4;

/// Limit on device-mapper slave chains (dm on dm on partition ...)
pub const MAX_SLAVE_DEPTH: usize = 8;

/// Address reported by interfaces without a hardware address
pub const NULL_MAC: &str = "00:00:00:00:00:00";
