//! Scripted in-memory radio service for tests.

use crate::domain::records::{FindRadioParams, RadioInfoRecord, VersionedRecord};
use crate::error::RadioError;
use crate::infrastructure::bluetooth::RadioApi;
use std::cell::Cell;
use std::rc::Rc;

/// Open/close bookkeeping shared between the fake and its handles
#[derive(Debug, Default)]
pub struct HandleLedger {
    pub opened: Cell<usize>,
    pub closed: Cell<usize>,
}

impl HandleLedger {
    pub fn open_count(&self) -> usize {
        self.opened.get() - self.closed.get()
    }
}

pub struct FakeHandle {
    ledger: Rc<HandleLedger>,
}

impl FakeHandle {
    fn open(ledger: &Rc<HandleLedger>) -> Self {
        ledger.opened.set(ledger.opened.get() + 1);
        Self {
            ledger: Rc::clone(ledger),
        }
    }
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.ledger.closed.set(self.ledger.closed.get() + 1);
    }
}

pub struct FakeRadioApi {
    search: Result<(), RadioError>,
    info: Result<RadioInfoRecord, RadioError>,
    pub searches: Rc<HandleLedger>,
    pub radios: Rc<HandleLedger>,
    pub info_calls: Cell<usize>,
}

impl FakeRadioApi {
    /// One radio whose info query succeeds
    pub fn with_radio(record: RadioInfoRecord) -> Self {
        Self {
            search: Ok(()),
            info: Ok(record),
            searches: Rc::default(),
            radios: Rc::default(),
            info_calls: Cell::new(0),
        }
    }

    pub fn named(name: &str) -> Self {
        let mut record = RadioInfoRecord::new();
        record.set_name(name);
        Self::with_radio(record)
    }

    pub fn no_radios() -> Self {
        Self::search_error(RadioError::NotFound)
    }

    pub fn search_error(error: RadioError) -> Self {
        Self {
            search: Err(error),
            ..Self::named("")
        }
    }

    pub fn info_error(code: u32) -> Self {
        Self {
            info: Err(RadioError::InfoQuery(code)),
            ..Self::named("")
        }
    }

    pub fn open_handles(&self) -> usize {
        self.searches.open_count() + self.radios.open_count()
    }
}

impl RadioApi for FakeRadioApi {
    type Search = FakeHandle;
    type Radio = FakeHandle;

    fn find_first_radio(
        &self,
        params: &FindRadioParams,
    ) -> Result<(FakeHandle, FakeHandle), RadioError> {
        if !params.has_valid_size() {
            return Err(RadioError::InvalidRecordSize {
                expected: FindRadioParams::SIZE,
                actual: params.declared_size(),
            });
        }
        self.search.clone()?;
        Ok((FakeHandle::open(&self.searches), FakeHandle::open(&self.radios)))
    }

    fn radio_info(
        &self,
        _radio: &FakeHandle,
        record: &mut RadioInfoRecord,
    ) -> Result<(), RadioError> {
        self.info_calls.set(self.info_calls.get() + 1);
        if !record.has_valid_size() {
            return Err(RadioError::InvalidRecordSize {
                expected: RadioInfoRecord::SIZE,
                actual: record.declared_size(),
            });
        }
        *record = self.info.clone()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_size_record() {
        let api = FakeRadioApi::named("radio");
        let (_search, radio) = api.find_first_radio(&FindRadioParams::new()).unwrap();

        let mut record = RadioInfoRecord::with_declared_size(0);
        assert_eq!(
            api.radio_info(&radio, &mut record),
            Err(RadioError::InvalidRecordSize {
                expected: RadioInfoRecord::SIZE,
                actual: 0
            })
        );
    }

    #[test]
    fn test_rejects_mismatched_size_record() {
        let api = FakeRadioApi::named("radio");
        let (_search, radio) = api.find_first_radio(&FindRadioParams::new()).unwrap();

        let mut record = RadioInfoRecord::with_declared_size(RadioInfoRecord::SIZE + 4);
        assert!(matches!(
            api.radio_info(&radio, &mut record),
            Err(RadioError::InvalidRecordSize { .. })
        ));
    }

    #[test]
    fn test_accepts_constructed_record() {
        let api = FakeRadioApi::named("radio");
        let (_search, radio) = api.find_first_radio(&FindRadioParams::new()).unwrap();

        let mut record = RadioInfoRecord::new();
        api.radio_info(&radio, &mut record).unwrap();
        assert_eq!(record.name(), "radio");
        assert!(record.has_valid_size());
    }

    #[test]
    fn test_handles_close_on_drop() {
        let api = FakeRadioApi::named("radio");
        {
            let _handles = api.find_first_radio(&FindRadioParams::new()).unwrap();
            assert_eq!(api.open_handles(), 2);
        }
        assert_eq!(api.open_handles(), 0);
        assert_eq!(api.searches.closed.get(), 1);
        assert_eq!(api.radios.closed.get(), 1);
    }
}
