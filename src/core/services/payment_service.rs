//! The payment-recorded operation, the only path into `Pagada`.

use chrono::NaiveDate;

use crate::core::services::ServiceResult;
use crate::domain::{Ticket, TicketStatus};
use crate::errors::CoreError;

/// Records payments against boletas in a collectable state.
pub struct PaymentService;

impl PaymentService {
    /// Only boletas under verification or pending payment accept a payment.
    pub fn eligible(status: TicketStatus) -> bool {
        matches!(
            status,
            TicketStatus::Verificacion | TicketStatus::PendientePago
        )
    }

    /// Marks `ticket` as paid. All checks run before the first write, so a
    /// failed call leaves the ticket untouched.
    pub fn record(
        ticket: &mut Ticket,
        receipt_id: &str,
        payment_date: NaiveDate,
    ) -> ServiceResult<()> {
        if !Self::eligible(ticket.status) {
            return Err(CoreError::IllegalTransition {
                from: ticket.status,
                to: TicketStatus::Pagada,
            });
        }
        let receipt = receipt_id.trim();
        if receipt.is_empty() {
            return Err(CoreError::InvalidInput("receipt id is empty".into()));
        }
        ticket.status = TicketStatus::Pagada;
        ticket.payment_date = Some(payment_date);
        ticket.receipt_id = Some(receipt.to_string());
        ticket.computed_balance = Some(0.0);
        Ok(())
    }
}
