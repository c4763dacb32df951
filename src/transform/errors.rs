use thiserror::Error;

use crate::types::ApplicationOrder;

/// The two ways transforming an operation can fail. Both point at a
/// defect in the input data itself; neither is transient, so there is
/// nothing to retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("The operation type ({kind_code}) is negative for operation {application_order}")]
    MalformedOperation {
        application_order: ApplicationOrder,
        kind_code: i32,
    },
    #[error("Unknown operation type: {kind_code}")]
    UnsupportedOperationKind { kind_code: i32 },
}

impl TransformError {
    pub fn malformed_operation(application_order: ApplicationOrder, kind_code: i32) -> Self {
        Self::MalformedOperation {
            application_order,
            kind_code,
        }
    }

    pub fn unsupported_operation_kind(kind_code: i32) -> Self {
        Self::UnsupportedOperationKind { kind_code }
    }
}
