//! Radio Report
//!
//! Decodes an address, finds the first radio and prints its descriptor.

use crate::domain::address::BluetoothAddress;
use crate::domain::records::{FindRadioParams, RadioInfo, RadioInfoRecord};
use crate::error::RadioError;
use crate::infrastructure::bluetooth::RadioApi;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, warn};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Address decoded when none is given on the command line
pub const DEFAULT_ADDRESS: BluetoothAddress = BluetoothAddress::new(0x0123456789ABCDEF);

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub address: BluetoothAddress,
    /// Print address, class and vendor fields after the name
    pub details: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            details: false,
        }
    }
}

/// Run the report against `api`, writing to `out`. Returns the exit status.
pub fn run<A: RadioApi, W: Write>(api: &A, options: &RunOptions, out: &mut W) -> Result<u8> {
    writeln!(out, "{}", options.address)?;

    let (_search, radio) = match api.find_first_radio(&FindRadioParams::new()) {
        Ok(handles) => handles,
        Err(e) => {
            warn!("Radio search failed: {}", e);
            report_search_error(&e, out)?;
            return Ok(EXIT_FAILURE);
        }
    };
    writeln!(out, "Found a radio.")?;

    let mut record = RadioInfoRecord::new();
    if let Err(e) = api.radio_info(&radio, &mut record) {
        warn!("Radio info query failed: {}", e);
        match e.code() {
            Some(code) => writeln!(out, "Error {} getting radio info.", code)?,
            None => writeln!(out, "Error getting radio info: {}.", e)?,
        }
        return Ok(EXIT_FAILURE);
    }

    let radio_info = RadioInfo::from(&record);
    info!("Got radio info for {:?}", radio_info.name);
    writeln!(out, "Got radio info.")?;
    write!(out, "Radio name: {}", radio_info.name)?;

    if options.details {
        writeln!(out)?;
        write_details(&radio_info, out)?;
    }

    debug!("Releasing radio handles");
    Ok(EXIT_SUCCESS)
}

fn report_search_error<W: Write>(error: &RadioError, out: &mut W) -> Result<()> {
    match error {
        RadioError::NotFound => writeln!(out, "No Bluetooth radios found on this device.")?,
        RadioError::Platform(code) => writeln!(out, "Error {} finding radios.", code)?,
        RadioError::Unsupported => {
            writeln!(out, "Bluetooth radios are not supported on this platform.")?
        }
        other => writeln!(out, "Error finding radios: {}.", other)?,
    }
    Ok(())
}

fn write_details<W: Write>(info: &RadioInfo, out: &mut W) -> Result<()> {
    writeln!(out, "Radio address: {}", info.address.colon_notation())?;
    writeln!(out, "Class of device: {:#08x}", info.class_of_device)?;
    writeln!(out, "Manufacturer: {}", info.manufacturer)?;
    writeln!(out, "LMP subversion: {}", info.lmp_subversion)?;
    Ok(())
}
