//! String dictionary view of the live device info.
//!
//! The field list is declared statically. Each entry reads one field and
//! either renders it through [`LosslessString`] or marks it opaque; opaque
//! and absent fields are left out of the dictionary.

use std::collections::BTreeMap;

use super::live::LiveDeviceInfo;
use super::types::{InterfaceIdiom, ThermalState};

/// Types whose string form parses back to an equal value.
pub trait LosslessString {
    fn to_lossless_string(&self) -> String;
}

impl LosslessString for str {
    fn to_lossless_string(&self) -> String {
        self.to_string()
    }
}

impl LosslessString for String {
    fn to_lossless_string(&self) -> String {
        self.clone()
    }
}

macro_rules! lossless_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl LosslessString for $ty {
                fn to_lossless_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

lossless_via_display!(bool, u8, u16, u32, u64, usize, i32, i64, ThermalState, InterfaceIdiom);

/// Value read from one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Optional field with no value on this platform.
    Absent,
    /// Field without a lossless string form.
    Opaque,
}

impl FieldValue {
    fn lossless<T: LosslessString + ?Sized>(value: &T) -> Self {
        FieldValue::Text(value.to_lossless_string())
    }

    fn optional<T: LosslessString + ?Sized>(value: Option<&T>) -> Self {
        value.map_or(FieldValue::Absent, FieldValue::lossless::<T>)
    }
}

/// One named field of [`LiveDeviceInfo`].
pub struct Field {
    pub name: &'static str,
    read: fn(&LiveDeviceInfo) -> FieldValue,
}

impl Field {
    pub fn read(&self, device: &LiveDeviceInfo) -> FieldValue {
        (self.read)(device)
    }
}

/// Every data-model field of the live device info, in declaration order.
pub const LIVE_FIELDS: &[Field] = &[
    Field {
        name: "name",
        read: |d| FieldValue::lossless(d.name()),
    },
    Field {
        name: "userName",
        read: |d| FieldValue::optional(d.user_name()),
    },
    Field {
        name: "fullUserName",
        read: |d| FieldValue::optional(d.full_user_name()),
    },
    Field {
        name: "model",
        read: |d| FieldValue::lossless(d.model()),
    },
    Field {
        name: "systemName",
        read: |d| FieldValue::lossless(d.system_name()),
    },
    Field {
        name: "systemVersion",
        read: |d| FieldValue::lossless(d.system_version()),
    },
    Field {
        name: "operatingSystemVersion",
        read: |_| FieldValue::Opaque,
    },
    Field {
        name: "operatingSystemVersionString",
        read: |d| FieldValue::lossless(&d.operating_system_version_string()),
    },
    Field {
        name: "processorCount",
        read: |d| FieldValue::lossless(&d.processor_count()),
    },
    Field {
        name: "activeProcessorCount",
        read: |d| FieldValue::lossless(&d.active_processor_count()),
    },
    Field {
        name: "interfaceIdiom",
        read: |d| FieldValue::lossless(&d.interface_idiom()),
    },
    Field {
        name: "thermalState",
        read: |d| FieldValue::lossless(&d.thermal_state()),
    },
    Field {
        name: "systemUptime",
        read: |_| FieldValue::Opaque,
    },
    Field {
        name: "environment",
        read: |_| FieldValue::Opaque,
    },
    Field {
        name: "battery",
        read: |_| FieldValue::Opaque,
    },
];

/// Collect every field with a lossless string form.
pub fn collect(device: &LiveDeviceInfo) -> BTreeMap<String, String> {
    LIVE_FIELDS
        .iter()
        .filter_map(|field| match field.read(device) {
            FieldValue::Text(value) => Some((field.name.to_string(), value)),
            FieldValue::Absent | FieldValue::Opaque => None,
        })
        .collect()
}
