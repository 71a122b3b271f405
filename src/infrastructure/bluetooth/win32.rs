//! Win32 Radio Backend
//!
//! Wraps the classic Bluetooth APIs from `bthprops`.

use crate::domain::records::{FindRadioParams, RadioInfoRecord, VersionedRecord};
use crate::error::RadioError;
use crate::infrastructure::bluetooth::RadioApi;
use tracing::{debug, info, warn};
use windows::Win32::Devices::Bluetooth::{
    BluetoothFindFirstRadio, BluetoothFindRadioClose, BluetoothGetRadioInfo,
    BLUETOOTH_FIND_RADIO_PARAMS, BLUETOOTH_RADIO_INFO, HBLUETOOTH_RADIO_FIND,
};
use windows::Win32::Foundation::{CloseHandle, ERROR_SUCCESS, HANDLE, WIN32_ERROR};

/// Radio enumeration handle, closed with `BluetoothFindRadioClose`
pub struct RadioSearch(HBLUETOOTH_RADIO_FIND);

impl Drop for RadioSearch {
    fn drop(&mut self) {
        debug!("Closing radio search");
        if let Err(e) = unsafe { BluetoothFindRadioClose(self.0) } {
            warn!("Failed to close radio search: {}", e);
        }
    }
}

/// Radio handle, closed with `CloseHandle`
pub struct RadioHandle(HANDLE);

impl Drop for RadioHandle {
    fn drop(&mut self) {
        debug!("Closing radio handle");
        if let Err(e) = unsafe { CloseHandle(self.0) } {
            warn!("Failed to close radio handle: {}", e);
        }
    }
}

#[derive(Debug, Default)]
pub struct Win32RadioApi;

impl RadioApi for Win32RadioApi {
    type Search = RadioSearch;
    type Radio = RadioHandle;

    fn find_first_radio(
        &self,
        params: &FindRadioParams,
    ) -> Result<(RadioSearch, RadioHandle), RadioError> {
        if !params.has_valid_size() {
            return Err(RadioError::InvalidRecordSize {
                expected: FindRadioParams::SIZE,
                actual: params.declared_size(),
            });
        }

        let find_params = BLUETOOTH_FIND_RADIO_PARAMS {
            dwSize: std::mem::size_of::<BLUETOOTH_FIND_RADIO_PARAMS>() as u32,
        };
        let mut radio = HANDLE::default();

        info!("Searching for first Bluetooth radio");
        match unsafe { BluetoothFindFirstRadio(&find_params, &mut radio) } {
            Ok(search) => Ok((RadioSearch(search), RadioHandle(radio))),
            Err(e) => {
                let code = WIN32_ERROR::from_error(&e)
                    .map(|c| c.0)
                    .unwrap_or(e.code().0 as u32);
                debug!("BluetoothFindFirstRadio failed: {} ({})", code, e);
                Err(RadioError::from_search_code(code))
            }
        }
    }

    fn radio_info(
        &self,
        radio: &RadioHandle,
        record: &mut RadioInfoRecord,
    ) -> Result<(), RadioError> {
        if !record.has_valid_size() {
            return Err(RadioError::InvalidRecordSize {
                expected: RadioInfoRecord::SIZE,
                actual: record.declared_size(),
            });
        }

        let mut info = BLUETOOTH_RADIO_INFO {
            dwSize: std::mem::size_of::<BLUETOOTH_RADIO_INFO>() as u32,
            ..Default::default()
        };

        info!("Querying radio info");
        let res = unsafe { BluetoothGetRadioInfo(radio.0, &mut info) };
        if res != ERROR_SUCCESS.0 {
            debug!("BluetoothGetRadioInfo failed: {}", res);
            return Err(RadioError::InfoQuery(res));
        }

        record.address = unsafe { info.address.Anonymous.ullLong };
        record.name = info.szName;
        record.class_of_device = info.ulClassofDevice;
        record.lmp_subversion = info.lmpSubversion;
        record.manufacturer = info.manufacturer;

        Ok(())
    }
}
