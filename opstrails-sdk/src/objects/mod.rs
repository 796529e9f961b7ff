pub mod event;
pub mod response;

pub use event::{CloudEvent, InvalidSeverity, SPEC_VERSION, Severity, TIME_PLACEHOLDER};
pub use response::{ApiResponse, EventReceipt};
