//! Radio Records
//!
//! Fixed-size parameter and descriptor records exchanged with the platform
//! Bluetooth service. Like their Win32 counterparts, each record declares its
//! own size in its first field; the constructors here always fill it in.

use crate::domain::address::BluetoothAddress;
use std::mem::size_of;

/// Width of the radio display name field, in UTF-16 code units
pub const RADIO_NAME_LEN: usize = 248;

/// A record whose first field carries its own size
pub trait VersionedRecord {
    /// Size the platform expects to find in the size field
    const SIZE: u32;

    /// Size currently stored in the record
    fn declared_size(&self) -> u32;

    fn has_valid_size(&self) -> bool {
        self.declared_size() == Self::SIZE
    }
}

/// Options for the first-radio search (`BLUETOOTH_FIND_RADIO_PARAMS`)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindRadioParams {
    size: u32,
}

impl FindRadioParams {
    pub fn new() -> Self {
        Self { size: Self::SIZE }
    }
}

impl Default for FindRadioParams {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionedRecord for FindRadioParams {
    const SIZE: u32 = size_of::<Self>() as u32;

    fn declared_size(&self) -> u32 {
        self.size
    }
}

/// Radio descriptor (`BLUETOOTH_RADIO_INFO`)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioInfoRecord {
    size: u32,
    pub address: u64,
    /// NUL-terminated UTF-16 display name
    pub name: [u16; RADIO_NAME_LEN],
    pub class_of_device: u32,
    pub lmp_subversion: u16,
    pub manufacturer: u16,
}

impl RadioInfoRecord {
    pub fn new() -> Self {
        Self {
            size: Self::SIZE,
            address: 0,
            name: [0; RADIO_NAME_LEN],
            class_of_device: 0,
            lmp_subversion: 0,
            manufacturer: 0,
        }
    }

    /// Store `name` in the fixed-width field, truncating so a terminator always fits
    pub fn set_name(&mut self, name: &str) {
        self.name = [0; RADIO_NAME_LEN];
        for (slot, unit) in self
            .name
            .iter_mut()
            .take(RADIO_NAME_LEN - 1)
            .zip(name.encode_utf16())
        {
            *slot = unit;
        }
    }

    /// The display name up to the first NUL
    pub fn name(&self) -> String {
        let end = self
            .name
            .iter()
            .position(|&unit| unit == 0)
            .unwrap_or(RADIO_NAME_LEN);
        String::from_utf16_lossy(&self.name[..end])
    }

    #[cfg(test)]
    pub(crate) fn with_declared_size(size: u32) -> Self {
        Self {
            size,
            ..Self::new()
        }
    }
}

impl Default for RadioInfoRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionedRecord for RadioInfoRecord {
    const SIZE: u32 = size_of::<Self>() as u32;

    fn declared_size(&self) -> u32 {
        self.size
    }
}

/// Decoded view of a filled [`RadioInfoRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioInfo {
    pub name: String,
    pub address: BluetoothAddress,
    pub class_of_device: u32,
    pub lmp_subversion: u16,
    pub manufacturer: u16,
}

impl From<&RadioInfoRecord> for RadioInfo {
    fn from(record: &RadioInfoRecord) -> Self {
        Self {
            name: record.name(),
            address: BluetoothAddress::new(record.address),
            class_of_device: record.class_of_device,
            lmp_subversion: record.lmp_subversion,
            manufacturer: record.manufacturer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_size() {
        assert_eq!(FindRadioParams::new().declared_size(), 4);
        assert!(FindRadioParams::default().has_valid_size());

        let record = RadioInfoRecord::new();
        assert_eq!(record.declared_size(), RadioInfoRecord::SIZE);
        assert!(record.has_valid_size());
    }

    #[test]
    fn test_radio_info_record_layout() {
        // size + padding, u64 address, 248 UTF-16 units, u32, u16, u16
        assert_eq!(RadioInfoRecord::SIZE, 520);
    }

    #[test]
    fn test_mismatched_size_is_invalid() {
        assert!(!RadioInfoRecord::with_declared_size(0).has_valid_size());
        assert!(!RadioInfoRecord::with_declared_size(RadioInfoRecord::SIZE - 8).has_valid_size());
    }

    #[test]
    fn test_name_stops_at_nul() {
        let mut record = RadioInfoRecord::new();
        record.set_name("DESKTOP-RADIO");
        assert_eq!(record.name(), "DESKTOP-RADIO");

        record.name[7] = 0;
        assert_eq!(record.name(), "DESKTOP");
    }

    #[test]
    fn test_name_without_terminator_uses_full_width() {
        let mut record = RadioInfoRecord::new();
        record.name = [u16::from(b'x'); RADIO_NAME_LEN];
        assert_eq!(record.name().len(), RADIO_NAME_LEN);
    }

    #[test]
    fn test_set_name_truncates() {
        let mut record = RadioInfoRecord::new();
        record.set_name(&"n".repeat(RADIO_NAME_LEN + 10));
        assert_eq!(record.name().len(), RADIO_NAME_LEN - 1);
        assert_eq!(record.name[RADIO_NAME_LEN - 1], 0);
    }

    #[test]
    fn test_non_ascii_name() {
        let mut record = RadioInfoRecord::new();
        record.set_name("Bürо ПК");
        assert_eq!(record.name(), "Bürо ПК");
    }

    #[test]
    fn test_radio_info_from_record() {
        let mut record = RadioInfoRecord::new();
        record.set_name("radio");
        record.address = 0x0000_1A2B_3C4D_5E6F;
        record.class_of_device = 0x1c010c;
        record.lmp_subversion = 0x2312;
        record.manufacturer = 2;

        let info = RadioInfo::from(&record);
        assert_eq!(info.name, "radio");
        assert_eq!(info.address.colon_notation(), "1A:2B:3C:4D:5E:6F");
        assert_eq!(info.class_of_device, 0x1c010c);
        assert_eq!(info.lmp_subversion, 0x2312);
        assert_eq!(info.manufacturer, 2);
    }
}
