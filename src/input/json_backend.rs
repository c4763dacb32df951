use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::input::{InputError, LedgerBackend, LedgerData};
use crate::types::LedgerSequence;

/// Replay backend serving decoded ledgers from a local file, one
/// JSON-encoded ledger per line, keyed by sequence number.
pub struct JsonFileBackend {
    ledgers: HashMap<LedgerSequence, LedgerData>,
}

impl JsonFileBackend {
    pub fn open(path: &Path) -> Result<Self, InputError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut ledgers = HashMap::new();

        for line in reader.lines() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            let ledger: LedgerData = serde_json::from_str(&line)?;
            ledgers.insert(ledger.header.sequence, ledger);
        }

        Ok(Self { ledgers })
    }
}

impl LedgerBackend for JsonFileBackend {
    fn prepare_range(&self, start: LedgerSequence, end: LedgerSequence) -> Result<(), InputError> {
        if start > end {
            return Err(InputError::InvalidRange { start, end });
        }

        for sequence in start..=end {
            if !self.ledgers.contains_key(&sequence) {
                return Err(InputError::MissingLedger { sequence });
            }
        }

        Ok(())
    }

    fn get_ledger(&self, sequence: LedgerSequence) -> Result<LedgerData, InputError> {
        self.ledgers
            .get(&sequence)
            .cloned()
            .ok_or(InputError::MissingLedger { sequence })
    }
}
