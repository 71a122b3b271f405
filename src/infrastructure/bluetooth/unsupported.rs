//! Backend for hosts without a Bluetooth radio binding.

use crate::domain::records::{FindRadioParams, RadioInfoRecord};
use crate::error::RadioError;
use crate::infrastructure::bluetooth::RadioApi;
use std::convert::Infallible;
use tracing::warn;

#[derive(Debug, Default)]
pub struct UnsupportedRadioApi;

impl RadioApi for UnsupportedRadioApi {
    type Search = Infallible;
    type Radio = Infallible;

    fn find_first_radio(
        &self,
        _params: &FindRadioParams,
    ) -> Result<(Infallible, Infallible), RadioError> {
        warn!("No Bluetooth radio binding for this platform");
        Err(RadioError::Unsupported)
    }

    fn radio_info(
        &self,
        radio: &Infallible,
        _record: &mut RadioInfoRecord,
    ) -> Result<(), RadioError> {
        match *radio {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_unsupported() {
        let api = UnsupportedRadioApi;
        assert!(matches!(
            api.find_first_radio(&FindRadioParams::new()),
            Err(RadioError::Unsupported)
        ));
    }
}
