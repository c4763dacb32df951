use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{JoinHandle, spawn_blocking};
use tracing::{debug, warn};

use crate::input::{InputError, LedgerBackend, LedgerTransformInput, read_ledger_range};
use crate::transform::{OperationRecord, transform_operation};
use crate::types::LedgerSequence;

/// Export pipeline: reads decoded ledgers off the backend on a blocking
/// task and transforms their operations into records on the async side.
pub struct ExportEngine<B: LedgerBackend> {
    backend: Arc<B>,
    backpressure: usize,
}

impl<B: LedgerBackend> ExportEngine<B> {
    /// Creates a new engine instance over the provided backend.
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            backpressure: 256,
        }
    }

    /// Exports one record per operation for every ledger in [start, end],
    /// in ledger-then-transaction-then-operation order.
    ///
    /// Backend failures abort the whole range; individual operations that
    /// fail to transform are logged and skipped.
    pub async fn run(
        &self,
        start: LedgerSequence,
        end: LedgerSequence,
        limit: i64,
    ) -> anyhow::Result<Vec<OperationRecord>> {
        let (sender, receiver) = mpsc::channel::<LedgerTransformInput>(self.backpressure);
        let reader_handle = self.spawn_ledger_reader(start, end, limit, sender);
        let records = self.transform_stream(receiver).await;

        // A half-read range must not look like a complete export.
        reader_handle.await??;

        Ok(records)
    }

    fn spawn_ledger_reader(
        &self,
        start: LedgerSequence,
        end: LedgerSequence,
        limit: i64,
        sender: mpsc::Sender<LedgerTransformInput>,
    ) -> JoinHandle<Result<(), InputError>> {
        let backend = self.backend.clone();

        spawn_blocking(move || {
            let inputs = read_ledger_range(backend.as_ref(), start, end, limit)?;

            for input in inputs {
                if sender.blocking_send(input).is_err() {
                    break;
                }
            }

            Ok(())
        })
    }

    async fn transform_stream(
        &self,
        mut receiver: mpsc::Receiver<LedgerTransformInput>,
    ) -> Vec<OperationRecord> {
        let mut records = Vec::new();

        while let Some(input) = receiver.recv().await {
            for (index, operation) in input.transaction.operations.iter().enumerate() {
                let order = index as i32 + 1;

                match transform_operation(operation, order, &input.transaction) {
                    Ok(record) => {
                        debug!(
                            "Transformed operation {order} of a transaction in ledger {}",
                            input.header.sequence
                        );
                        records.push(record);
                    }
                    Err(error) => {
                        warn!(
                            "Skipping operation {order} in ledger {}: {error}",
                            input.header.sequence
                        );
                    }
                }
            }
        }

        records
    }
}
