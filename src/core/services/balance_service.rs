//! Balance computation for boletas: discount window, grace gap, interest
//! accrual.

use chrono::NaiveDate;

use crate::config::Tariff;
use crate::core::services::ServiceResult;
use crate::domain::Ticket;
use crate::errors::CoreError;
use crate::time::{add_business_days, Clock};

const DAYS_PER_YEAR: f64 = 365.0;

/// Phase of the balance timeline an evaluation date falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalancePhase {
    Discount,
    Grace,
    Accrual,
}

/// Computed balance plus the deadlines that produced it, for host display.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceBreakdown {
    pub phase: BalancePhase,
    pub discount_deadline: NaiveDate,
    pub accrual_start: NaiveDate,
    pub amount: f64,
}

/// Computes the amount owed on a boleta under a tariff policy.
#[derive(Debug, Clone, Default)]
pub struct BalanceEngine {
    tariff: Tariff,
}

impl BalanceEngine {
    pub fn new(tariff: Tariff) -> Self {
        Self { tariff }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Last date on which the early-payment discount still applies.
    pub fn discount_deadline(&self, infraction_date: NaiveDate) -> NaiveDate {
        add_business_days(infraction_date, self.tariff.discount_window_days)
    }

    /// Date after which interest starts to accrue.
    pub fn accrual_start(&self, infraction_date: NaiveDate) -> NaiveDate {
        add_business_days(infraction_date, self.tariff.grace_window_days)
    }

    /// Returns the amount owed on `evaluation_date`, rounded to the cent.
    ///
    /// Without an infraction date no deadline can be computed, so the full
    /// fine is due with neither discount nor interest.
    pub fn compute(
        &self,
        base_fine: f64,
        infraction_date: Option<NaiveDate>,
        evaluation_date: NaiveDate,
    ) -> ServiceResult<f64> {
        let fine = validate_fine(base_fine)?;
        if fine == 0.0 {
            return Ok(0.0);
        }
        let Some(infraction_date) = infraction_date else {
            return Ok(round_cents(fine));
        };
        let (_, amount) = self.amount_for(fine, infraction_date, evaluation_date);
        Ok(amount)
    }

    /// [`BalanceEngine::compute`] evaluated at the clock's current date.
    pub fn compute_today(
        &self,
        base_fine: f64,
        infraction_date: Option<NaiveDate>,
        clock: &dyn Clock,
    ) -> ServiceResult<f64> {
        self.compute(base_fine, infraction_date, clock.today())
    }

    /// Like [`BalanceEngine::compute`], but also reports the phase and
    /// both deadlines.
    pub fn breakdown(
        &self,
        base_fine: f64,
        infraction_date: NaiveDate,
        evaluation_date: NaiveDate,
    ) -> ServiceResult<BalanceBreakdown> {
        let fine = validate_fine(base_fine)?;
        let (phase, amount) = self.amount_for(fine, infraction_date, evaluation_date);
        Ok(BalanceBreakdown {
            phase,
            discount_deadline: self.discount_deadline(infraction_date),
            accrual_start: self.accrual_start(infraction_date),
            amount,
        })
    }

    fn amount_for(
        &self,
        fine: f64,
        infraction_date: NaiveDate,
        evaluation_date: NaiveDate,
    ) -> (BalancePhase, f64) {
        let discount_deadline = self.discount_deadline(infraction_date);
        let accrual_start = self.accrual_start(infraction_date);

        if evaluation_date <= discount_deadline {
            let amount = fine * (1.0 - self.tariff.discount_rate);
            return (BalancePhase::Discount, round_cents(amount));
        }
        if evaluation_date > accrual_start {
            let elapsed_days = (evaluation_date - accrual_start).num_days().max(0);
            let interest =
                fine * self.tariff.interest_rate * (elapsed_days as f64 / DAYS_PER_YEAR);
            return (BalancePhase::Accrual, round_cents(fine + interest));
        }
        (BalancePhase::Grace, round_cents(fine))
    }

    /// Daily batch recalculation over open boletas.
    ///
    /// Terminal states keep their last balance, and rows without a
    /// positive fine and an infraction date are left alone. Returns the
    /// number of tickets updated.
    pub fn refresh_open_tickets(&self, tickets: &mut [Ticket], clock: &dyn Clock) -> usize {
        let today = clock.today();
        let mut updated = 0;
        for ticket in tickets.iter_mut() {
            if ticket.status.is_terminal() {
                continue;
            }
            if ticket.base_fine <= 0.0 || ticket.infraction_date.is_none() {
                continue;
            }
            match self.compute(ticket.base_fine, ticket.infraction_date, today) {
                Ok(balance) => {
                    ticket.computed_balance = Some(balance);
                    updated += 1;
                }
                Err(error) => {
                    tracing::warn!(
                        ticket = %ticket.ticket_number,
                        %error,
                        "skipping boleta with invalid data"
                    );
                }
            }
        }
        tracing::info!(updated, total = tickets.len(), "refreshed boleta balances");
        updated
    }
}

fn validate_fine(base_fine: f64) -> ServiceResult<f64> {
    if !base_fine.is_finite() {
        return Err(CoreError::InvalidInput(format!(
            "base fine {} is not a number",
            base_fine
        )));
    }
    if base_fine < 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "base fine {} is negative",
            base_fine
        )));
    }
    Ok(base_fine)
}

/// Rounds to 2 decimal places, half away from zero.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
