/*
 * Test utilities and fixtures for hostprint
 *
 * Builds fake sysfs/procfs trees on disk so the whole pipeline can run
 * against a known machine.
 */

#[cfg(test)]
pub mod test_utils {
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    pub const LAPTOP_MOUNTS: &str = "\
sysfs /sys sysfs rw,nosuid,nodev,noexec,relatime 0 0
proc /proc proc rw,nosuid,nodev,noexec,relatime 0 0
/dev/nvme0n1p2 / ext4 rw,relatime 0 0
/dev/nvme0n1p1 /boot/efi vfat rw,relatime 0 0
";

    pub const LAPTOP_CPUINFO: &str = "\
processor\t: 0
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 158
model name\t: Intel(R) Core(TM) i7-9750H CPU @ 2.60GHz
stepping\t: 10
physical id\t: 0

processor\t: 1
vendor_id\t: GenuineIntel
cpu family\t: 6
model\t\t: 158
model name\t: Intel(R) Core(TM) i7-9750H CPU @ 2.60GHz
stepping\t: 10
physical id\t: 0
";

    pub const LAPTOP_FINGERPRINT: &str = "04AB6-2B545-C3819-D54AC-87577-E30C8-EE808-68A28";

    /// [`LAPTOP_FINGERPRINT`] salted with the default salt
    pub const LAPTOP_SALTED: &str = "EA454-08C48-65841-DEB1E-BB13E-A67B5-B2C87-0B98A";

    /// A machine laid out under a temporary directory
    pub struct FakeHost {
        dir: TempDir,
    }

    impl FakeHost {
        pub fn empty() -> Self {
            Self {
                dir: TempDir::new().expect("Failed to create temp dir"),
            }
        }

        /// A laptop with every provider populated.
        ///
        /// Fingerprint over all providers: [`LAPTOP_FINGERPRINT`].
        pub fn laptop() -> Self {
            let host = Self::empty();
            host.write("proc/cpuinfo", LAPTOP_CPUINFO);
            host.write("sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq", "4500000\n");

            host.write("sys/class/dmi/id/bios_vendor", "LENOVO\n");
            host.write("sys/class/dmi/id/bios_version", "N2HET60W (1.43 )\n");
            host.write("sys/class/dmi/id/product_serial", "PF1ABCDE\n");
            host.write("sys/class/dmi/id/bios_date", "01/02/2023\n");
            host.write("sys/class/dmi/id/bios_release", "1.43\n");
            host.write("sys/class/dmi/id/board_vendor", "LENOVO\n");
            host.write("sys/class/dmi/id/board_name", "20QDCTO1WW\n");
            host.write("sys/class/dmi/id/board_version", "SDK0J40697 WIN\n");
            host.write("sys/class/dmi/id/board_serial", "L1HF12345\n");

            host.write("sys/class/drm/card0/device/uevent", "DRIVER=i915\nPCI_ID=8086:3E9B\n");
            host.write("proc/sys/kernel/osrelease", "6.8.0-45-generic\n");

            host.write("sys/class/net/wlp0s20f3/operstate", "up\n");
            host.write("sys/class/net/wlp0s20f3/address", "aa:bb:cc:dd:ee:ff\n");
            fs::create_dir_all(host.root().join("sys/class/net/wlp0s20f3/device"))
                .expect("Failed to create device dir");

            host.write("proc/mounts", LAPTOP_MOUNTS);
            host.write("sys/block/nvme0n1/device/serial", "  S4EWNX0R123456  \n");
            host.write("sys/block/nvme0n1/nvme0n1p1/partition", "1\n");
            host.write("sys/block/nvme0n1/nvme0n1p2/partition", "2\n");
            host
        }

        pub fn root(&self) -> &Path {
            self.dir.path()
        }

        /// Write `contents` to `rel`, creating parent directories
        pub fn write(&self, rel: &str, contents: &str) {
            let path = self.root().join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create parent dir");
            }
            fs::write(&path, contents).expect("Failed to write fixture file");
        }

        /// Leave only pseudo filesystems in the mount table
        pub fn remove_root_mount(&self) {
            let mounts: String = LAPTOP_MOUNTS
                .lines()
                .filter(|line| !line.starts_with("/dev/"))
                .map(|line| format!("{}\n", line))
                .collect();
            self.write("proc/mounts", &mounts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_utils::*;

    #[test]
    fn test_fake_host_layout() {
        let host = FakeHost::laptop();
        assert!(host.root().join("proc/cpuinfo").is_file());
        assert!(host.root().join("sys/block/nvme0n1/nvme0n1p2/partition").is_file());

        host.remove_root_mount();
        let mounts = std::fs::read_to_string(host.root().join("proc/mounts")).unwrap();
        assert!(!mounts.contains("/dev/"));
        assert!(mounts.contains("sysfs /sys"));
    }
}
