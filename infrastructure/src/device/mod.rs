//! Hardware adapters for the hybrid mode feature and capability probe.

mod legion;
mod sysfs;

pub use legion::{SysfsCapabilityProbe, SysfsHybridModeFeature};
