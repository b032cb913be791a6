#![doc(test(attr(deny(warnings))))]

//! Boleta Core offers the balance, deadline, and lifecycle primitives that
//! power municipal traffic-ticket workflows and their host forms.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod time;
pub mod utils;

pub use crate::config::Tariff;
pub use crate::core::lookup::LookupCache;
pub use crate::core::services::{
    BalanceBreakdown, BalanceEngine, BalancePhase, PaymentService, StatusGate,
};
pub use crate::domain::{RoleSet, Ticket, TicketStatus};
pub use crate::errors::CoreError;
pub use crate::time::{add_business_days, is_business_day, Clock, SystemClock};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Boleta Core tracing initialized.");
    });
}
