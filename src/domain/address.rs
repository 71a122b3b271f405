//! Bluetooth Address
//!
//! A 48-bit Bluetooth address stored in a 64-bit container. Only the low six
//! bytes are significant; the upper two are never read.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of significant bytes in a Bluetooth address
pub const ADDRESS_LEN: usize = 6;

const ADDRESS_MASK: u64 = 0x0000_FFFF_FFFF_FFFF;

/// A Bluetooth address held in a 64-bit container.
///
/// Any `u64` is accepted. Byte `i` of the address is byte `i` of the
/// little-endian layout of the container, matching the `rgBytes` view of
/// the Win32 `BLUETOOTH_ADDRESS` union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BluetoothAddress(u64);

impl BluetoothAddress {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Rebuild an address from its six bytes in index order
    pub fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        let mut raw = [0u8; 8];
        raw[..ADDRESS_LEN].copy_from_slice(&bytes);
        Self(u64::from_le_bytes(raw))
    }

    /// The six significant bytes, index 0 being the least significant
    pub fn bytes(&self) -> [u8; ADDRESS_LEN] {
        let raw = self.0.to_le_bytes();
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&raw[..ADDRESS_LEN]);
        bytes
    }

    /// The low 48 bits of the container
    pub fn as_u64(&self) -> u64 {
        self.0 & ADDRESS_MASK
    }

    /// Convert to a string like 01:23:45:67:89:AB (most significant byte first)
    pub fn colon_notation(&self) -> String {
        let mut bytes = self.bytes();
        bytes.reverse();

        bytes
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<String>>()
            .join(":")
    }
}

impl From<u64> for BluetoothAddress {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for BluetoothAddress {
    /// `[ef, cd, ab, 89, 67, 45]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bytes();
        write!(
            f,
            "[{:02x}, {:02x}, {:02x}, {:02x}, {:02x}, {:02x}]",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressParseError {
    #[error("address is empty")]
    Empty,
    #[error("invalid hex digits in address: {0}")]
    InvalidHex(String),
    #[error("colon notation needs 6 octets, got {0}")]
    OctetCount(usize),
    #[error("address does not fit in 64 bits: {0}")]
    TooLong(String),
}

impl FromStr for BluetoothAddress {
    type Err = AddressParseError;

    /// Accepts `0x0123456789ABCDEF`, `0123456789abcdef` or `45:67:89:AB:CD:EF`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AddressParseError::Empty);
        }

        if s.contains(':') {
            let octets: Vec<&str> = s.split(':').collect();
            if octets.len() != ADDRESS_LEN {
                return Err(AddressParseError::OctetCount(octets.len()));
            }

            let mut bytes = [0u8; ADDRESS_LEN];
            // Colon notation lists the most significant byte first
            for (slot, octet) in bytes.iter_mut().rev().zip(octets) {
                if octet.len() != 2 {
                    return Err(AddressParseError::InvalidHex(octet.to_string()));
                }
                *slot = u8::from_str_radix(octet, 16)
                    .map_err(|_| AddressParseError::InvalidHex(octet.to_string()))?;
            }
            return Ok(Self::from_bytes(bytes));
        }

        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AddressParseError::InvalidHex(s.to_string()));
        }
        if digits.len() > 16 {
            return Err(AddressParseError::TooLong(s.to_string()));
        }

        u64::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| AddressParseError::InvalidHex(s.to_string()))
    }
}
