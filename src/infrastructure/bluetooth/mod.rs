//! Bluetooth Module
//!
//! Binding to the host's Bluetooth radio management service.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  RadioApi                     │
//! │  find_first_radio ──► (Search, Radio) tokens  │
//! │  radio_info(&Radio) ──► RadioInfoRecord       │
//! └───────────────┬──────────────────────────────┘
//!                 │
//!         ┌───────┴────────┐
//!         ▼                ▼
//!   ┌───────────┐   ┌─────────────┐
//!   │  win32    │   │ unsupported │
//!   │ (Windows) │   │ (elsewhere) │
//!   └───────────┘   └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`win32`] - `BluetoothFindFirstRadio` / `BluetoothGetRadioInfo` backend
//! - [`unsupported`] - Backend for hosts without a platform binding

#[cfg(test)]
pub mod fake;
#[cfg(not(windows))]
pub mod unsupported;
#[cfg(windows)]
pub mod win32;

use crate::domain::records::{FindRadioParams, RadioInfoRecord};
use crate::error::RadioError;

/// The two radio operations offered by the platform.
///
/// Both handle types own a platform resource and release it when dropped,
/// so every exit path closes whatever was opened.
pub trait RadioApi {
    /// Enumeration handle returned alongside the first radio
    type Search;
    /// Handle to a single radio
    type Radio;

    /// Find the first available radio
    fn find_first_radio(
        &self,
        params: &FindRadioParams,
    ) -> Result<(Self::Search, Self::Radio), RadioError>;

    /// Fill `record` with the radio's descriptor
    fn radio_info(&self, radio: &Self::Radio, record: &mut RadioInfoRecord)
        -> Result<(), RadioError>;
}

#[cfg(windows)]
pub type PlatformRadioApi = win32::Win32RadioApi;

#[cfg(not(windows))]
pub type PlatformRadioApi = unsupported::UnsupportedRadioApi;
