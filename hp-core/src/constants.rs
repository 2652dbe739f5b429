//! Constants for the fingerprint engine
//!
//! Device class and property names understood by every `HardwareInfoSource`,
//! plus the canonical formatting parameters. Changing any value here changes
//! the fingerprint of every host.

/// Formatting of fingerprint strings
pub mod format {
    /// Characters per group in a beautified fingerprint
    pub const GROUP_SIZE: usize = 5;

    /// Delimiter inserted between groups
    pub const DELIMITER: &str = "-";

    /// Separator used between byte pairs in the raw digest display form
    pub const PAIR_SEPARATOR: char = '-';

    /// Length of a SHA-1 digest rendered as hex without separators
    pub const DIGEST_HEX_LEN: usize = 40;
}

/// Device classes queried through `HardwareInfoSource::query_properties`
pub mod class {
    pub const PROCESSOR: &str = "processor";
    pub const BIOS: &str = "bios";
    pub const BASE_BOARD: &str = "base_board";
    pub const VIDEO_CONTROLLER: &str = "video_controller";
}

/// Property names, grouped by device class
pub mod property {
    pub const UNIQUE_ID: &str = "unique_id";
    pub const PROCESSOR_ID: &str = "processor_id";
    pub const NAME: &str = "name";
    pub const MANUFACTURER: &str = "manufacturer";
    pub const MAX_CLOCK_SPEED: &str = "max_clock_speed";

    pub const FIRMWARE_VERSION: &str = "firmware_version";
    pub const IDENTIFICATION_CODE: &str = "identification_code";
    pub const SERIAL_NUMBER: &str = "serial_number";
    pub const RELEASE_DATE: &str = "release_date";
    pub const VERSION: &str = "version";

    pub const MODEL: &str = "model";

    pub const DRIVER_VERSION: &str = "driver_version";
}

/// Property chains, in preference order, for each optional provider
pub mod chains {
    use super::property::*;

    pub const PROCESSOR: &[&str] = &[UNIQUE_ID, PROCESSOR_ID, NAME, MANUFACTURER, MAX_CLOCK_SPEED];

    pub const BIOS: &[&str] = &[
        MANUFACTURER,
        FIRMWARE_VERSION,
        IDENTIFICATION_CODE,
        SERIAL_NUMBER,
        RELEASE_DATE,
        VERSION,
    ];

    pub const BASE_BOARD: &[&str] = &[MODEL, MANUFACTURER, NAME, SERIAL_NUMBER];

    pub const VIDEO_CONTROLLER: &[&str] = &[DRIVER_VERSION, NAME];
}
