mod errors;
mod flags;
mod operation;
mod record;

pub use errors::TransformError;
pub use flags::decode_account_flags;
pub use operation::{resolve_inner_result, transform_operation};
pub use record::{AssetRecord, OperationDetails, OperationRecord, PriceRecord};
