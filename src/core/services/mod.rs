pub mod balance_service;
pub mod payment_service;
pub mod status_service;

pub use balance_service::{BalanceBreakdown, BalanceEngine, BalancePhase};
pub use payment_service::PaymentService;
pub use status_service::StatusGate;

use crate::errors::CoreError;

pub type ServiceResult<T> = Result<T, CoreError>;
