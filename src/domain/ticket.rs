use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::errors::CoreError;

/// Lifecycle states of a boleta, spelled the way the external store
/// persists them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    #[serde(rename = "DISPONIBLE")]
    Disponible,
    #[serde(rename = "VERIFICACION")]
    Verificacion,
    #[serde(rename = "PENDIENTE-PAGO")]
    PendientePago,
    #[serde(rename = "DISPUTA")]
    Disputa,
    #[serde(rename = "ANULADA-AGENTE")]
    AnuladaAgente,
    #[serde(rename = "ANULADA-JUZGADO")]
    AnuladaJuzgado,
    #[serde(rename = "PAGADA")]
    Pagada,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 7] = [
        TicketStatus::Disponible,
        TicketStatus::Verificacion,
        TicketStatus::PendientePago,
        TicketStatus::Disputa,
        TicketStatus::AnuladaAgente,
        TicketStatus::AnuladaJuzgado,
        TicketStatus::Pagada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Disponible => "DISPONIBLE",
            TicketStatus::Verificacion => "VERIFICACION",
            TicketStatus::PendientePago => "PENDIENTE-PAGO",
            TicketStatus::Disputa => "DISPUTA",
            TicketStatus::AnuladaAgente => "ANULADA-AGENTE",
            TicketStatus::AnuladaJuzgado => "ANULADA-JUZGADO",
            TicketStatus::Pagada => "PAGADA",
        }
    }

    /// Terminal states accept no further transitions and no field edits.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TicketStatus::Pagada | TicketStatus::AnuladaJuzgado)
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Disponible
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DISPONIBLE" => Ok(TicketStatus::Disponible),
            "VERIFICACION" => Ok(TicketStatus::Verificacion),
            "PENDIENTE-PAGO" => Ok(TicketStatus::PendientePago),
            "DISPUTA" => Ok(TicketStatus::Disputa),
            "ANULADA-AGENTE" => Ok(TicketStatus::AnuladaAgente),
            "ANULADA-JUZGADO" => Ok(TicketStatus::AnuladaJuzgado),
            "PAGADA" => Ok(TicketStatus::Pagada),
            other => Err(CoreError::InvalidInput(format!(
                "unknown boleta status `{}`",
                other
            ))),
        }
    }
}

/// A traffic-ticket record as consumed from the external store.
///
/// `computed_balance` is a derived view over `(base_fine, infraction_date,
/// evaluation date)` and never a second source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub ticket_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_code: Option<String>,
    pub base_fine: f64,
    pub infraction_date: Option<NaiveDate>,
    pub status: TicketStatus,
    #[serde(default)]
    pub computed_balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
}

impl Ticket {
    pub fn new(ticket_number: impl Into<String>, base_fine: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            ticket_number: ticket_number.into(),
            book_id: None,
            assigned_agent: None,
            vehicle_plate: None,
            article_code: None,
            base_fine,
            infraction_date: None,
            status: TicketStatus::Disponible,
            computed_balance: None,
            payment_date: None,
            receipt_id: None,
        }
    }

    pub fn with_infraction_date(mut self, date: NaiveDate) -> Self {
        self.infraction_date = Some(date);
        self
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = status;
        self
    }
}

impl Identifiable for Ticket {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Ticket {
    fn display_label(&self) -> String {
        format!("boleta:{} [{}]", self.ticket_number, self.status)
    }
}
