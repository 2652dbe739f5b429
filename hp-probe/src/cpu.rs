//! Processor instances read from /proc/cpuinfo
//!
//! One instance per physical package: the first core block seen for each
//! `physical id`. Blocks without a numeric `processor` entry (the trailing
//! `Hardware`/`Serial` block on ARM boards) hold values shared by all cores.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use hp_core::constants::property;
use tracing::debug;

use crate::constants::{CPUINFO_PATH, CPU_SYSFS_PATH, DEVICE_TREE_MODEL_PATH, KHZ_PER_MHZ};
use crate::sysfs::{read_attr, set, Instance};

type Block = HashMap<String, String>;

/// Descriptive `Processor : ARMv7 ...` lines are kept apart from the core index
const PROCESSOR_NAME_KEY: &str = "processor name";

pub(crate) fn processors(root: &Path) -> Vec<Instance> {
    let path = root.join(CPUINFO_PATH);
    let text = fs::read_to_string(&path).unwrap_or_else(|e| {
        debug!(path = %path.display(), error = %e, "cpuinfo not readable");
        String::new()
    });

    let (cores, shared) = parse_cpuinfo(&text);

    let mut packages: Vec<String> = Vec::new();
    let mut out = Vec::new();
    for core in &cores {
        let package = core.get("physical id").cloned().unwrap_or_default();
        if packages.contains(&package) {
            continue;
        }
        packages.push(package);
        out.push(processor_instance(root, core, &shared));
    }

    if out.is_empty() {
        let instance = processor_instance(root, &Block::new(), &shared);
        if !instance.is_empty() {
            out.push(instance);
        }
    }
    out
}

fn parse_cpuinfo(text: &str) -> (Vec<Block>, Block) {
    let mut cores = Vec::new();
    let mut shared = Block::new();
    let mut current = Block::new();

    for line in text.lines().chain(std::iter::once("")) {
        if line.trim().is_empty() {
            let block = std::mem::take(&mut current);
            if block.contains_key("processor") {
                cores.push(block);
            } else {
                for (k, v) in block {
                    shared.entry(k).or_insert(v);
                }
            }
            continue;
        }

        let Some((k, v)) = line.split_once(':') else { continue };
        let mut key = k.trim().to_ascii_lowercase();
        let val = v.trim();
        if val.is_empty() {
            continue;
        }
        if key == "processor" && !val.chars().all(|c| c.is_ascii_digit()) {
            key = PROCESSOR_NAME_KEY.to_string();
        }
        current.entry(key).or_insert_with(|| val.to_string());
    }

    (cores, shared)
}

fn processor_instance(root: &Path, core: &Block, shared: &Block) -> Instance {
    let get = |key: &str| core.get(key).or_else(|| shared.get(key)).cloned();

    let processor_id = match (get("vendor_id"), get("cpu family"), get("model"), get("stepping")) {
        (Some(vendor), Some(family), Some(model), Some(stepping)) => {
            Some(format!("{}-{}-{}-{}", vendor, family, model, stepping))
        }
        _ => None,
    };

    let name = get("model name")
        .or_else(|| get("hardware"))
        .or_else(|| get(PROCESSOR_NAME_KEY))
        .or_else(|| read_attr(&root.join(DEVICE_TREE_MODEL_PATH)));

    let manufacturer = get("vendor_id").or_else(|| get("cpu implementer"));

    let cpu_index = core.get("processor").map(String::as_str).unwrap_or("0");

    let mut instance = Instance::new();
    set(&mut instance, property::UNIQUE_ID, get("serial"));
    set(&mut instance, property::PROCESSOR_ID, processor_id);
    set(&mut instance, property::NAME, name);
    set(&mut instance, property::MANUFACTURER, manufacturer);
    set(&mut instance, property::MAX_CLOCK_SPEED, max_clock_mhz(root, cpu_index));
    instance
}

fn max_clock_mhz(root: &Path, cpu_index: &str) -> Option<String> {
    let path = root
        .join(CPU_SYSFS_PATH)
        .join(format!("cpu{}", cpu_index))
        .join("cpufreq/cpuinfo_max_freq");
    let khz: u64 = read_attr(&path)?.parse().ok()?;
    Some((khz / KHZ_PER_MHZ).to_string())
}
