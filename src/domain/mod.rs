pub mod actor;
pub mod common;
pub mod ticket;

pub use actor::{RoleSet, ROLE_ADMIN, ROLE_AGENT, ROLE_COURT};
pub use common::{Displayable, Identifiable};
pub use ticket::{Ticket, TicketStatus};
