//! Transition rules for the boleta lifecycle.

use crate::core::services::ServiceResult;
use crate::domain::{RoleSet, TicketStatus, ROLE_ADMIN, ROLE_AGENT, ROLE_COURT};
use crate::errors::CoreError;

/// Presets an authorized actor may select manually on the form. `Pagada`
/// is absent on purpose: payment is recorded through its own operation.
const MANUAL_PRESETS: [TicketStatus; 5] = [
    TicketStatus::Verificacion,
    TicketStatus::PendientePago,
    TicketStatus::Disputa,
    TicketStatus::AnuladaAgente,
    TicketStatus::AnuladaJuzgado,
];

/// Guards boleta status changes. Holds no state; every answer is a pure
/// function of its inputs.
pub struct StatusGate;

impl StatusGate {
    /// True when `target` may be persisted over `current` by an actor
    /// holding `roles`.
    pub fn can_transition(current: TicketStatus, target: TicketStatus, roles: &RoleSet) -> bool {
        if current.is_terminal() || current == target {
            return false;
        }
        if !MANUAL_PRESETS.contains(&target) {
            return false;
        }
        Self::role_allows(target, roles)
    }

    /// Fails with [`CoreError::IllegalTransition`] instead of returning
    /// false. The gate mutates nothing; persisting the new status is the
    /// caller's step after this check passes.
    pub fn assert_transition(
        current: TicketStatus,
        target: TicketStatus,
        roles: &RoleSet,
    ) -> ServiceResult<()> {
        if Self::can_transition(current, target, roles) {
            Ok(())
        } else {
            Err(CoreError::IllegalTransition {
                from: current,
                to: target,
            })
        }
    }

    /// Core fields (assigned agent, vehicle, infraction date, article
    /// code) stay editable only before the boleta enters collection.
    pub fn can_edit(status: TicketStatus) -> bool {
        matches!(status, TicketStatus::Disponible | TicketStatus::Verificacion)
    }

    /// The presets the gate would accept, for wiring form buttons.
    pub fn allowed_presets(current: TicketStatus, roles: &RoleSet) -> Vec<TicketStatus> {
        MANUAL_PRESETS
            .iter()
            .copied()
            .filter(|target| Self::can_transition(current, *target, roles))
            .collect()
    }

    fn role_allows(target: TicketStatus, roles: &RoleSet) -> bool {
        if roles.contains(ROLE_ADMIN) {
            return true;
        }
        match target {
            TicketStatus::AnuladaJuzgado => roles.contains(ROLE_COURT),
            TicketStatus::AnuladaAgente => roles.contains(ROLE_AGENT),
            _ => roles.has_known_role(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> RoleSet {
        [ROLE_AGENT].into_iter().collect()
    }

    fn court() -> RoleSet {
        [ROLE_COURT].into_iter().collect()
    }

    fn admin() -> RoleSet {
        [ROLE_ADMIN].into_iter().collect()
    }

    #[test]
    fn terminal_states_reject_everything() {
        for terminal in [TicketStatus::Pagada, TicketStatus::AnuladaJuzgado] {
            for target in TicketStatus::ALL {
                assert!(!StatusGate::can_transition(terminal, target, &admin()));
            }
        }
    }

    #[test]
    fn paid_is_never_a_generic_target() {
        for current in TicketStatus::ALL {
            assert!(!StatusGate::can_transition(
                current,
                TicketStatus::Pagada,
                &admin()
            ));
        }
    }

    #[test]
    fn available_moves_to_verification() {
        assert!(StatusGate::can_transition(
            TicketStatus::Disponible,
            TicketStatus::Verificacion,
            &agent()
        ));
    }

    #[test]
    fn available_is_not_a_preset() {
        assert!(!StatusGate::can_transition(
            TicketStatus::Verificacion,
            TicketStatus::Disponible,
            &admin()
        ));
    }

    #[test]
    fn self_transition_is_rejected() {
        let err = StatusGate::assert_transition(
            TicketStatus::Verificacion,
            TicketStatus::Verificacion,
            &admin(),
        )
        .expect_err("same-state selection is not a transition");
        assert!(matches!(err, CoreError::IllegalTransition { .. }));
    }

    #[test]
    fn court_annulment_requires_the_court_role() {
        assert!(!StatusGate::can_transition(
            TicketStatus::Disputa,
            TicketStatus::AnuladaJuzgado,
            &agent()
        ));
        assert!(StatusGate::can_transition(
            TicketStatus::Disputa,
            TicketStatus::AnuladaJuzgado,
            &court()
        ));
        assert!(StatusGate::can_transition(
            TicketStatus::Disputa,
            TicketStatus::AnuladaJuzgado,
            &admin()
        ));
    }

    #[test]
    fn agent_annulment_requires_the_agent_role() {
        assert!(!StatusGate::can_transition(
            TicketStatus::Disponible,
            TicketStatus::AnuladaAgente,
            &court()
        ));
        assert!(StatusGate::can_transition(
            TicketStatus::Disponible,
            TicketStatus::AnuladaAgente,
            &agent()
        ));
    }

    #[test]
    fn empty_role_set_can_transition_nothing() {
        let roles = RoleSet::new();
        for current in TicketStatus::ALL {
            assert!(StatusGate::allowed_presets(current, &roles).is_empty());
        }
    }

    #[test]
    fn editing_locks_once_collection_starts() {
        assert!(StatusGate::can_edit(TicketStatus::Disponible));
        assert!(StatusGate::can_edit(TicketStatus::Verificacion));
        assert!(!StatusGate::can_edit(TicketStatus::PendientePago));
        assert!(!StatusGate::can_edit(TicketStatus::Disputa));
        assert!(!StatusGate::can_edit(TicketStatus::Pagada));
    }

    #[test]
    fn preset_list_reflects_the_role() {
        let presets = StatusGate::allowed_presets(TicketStatus::Disponible, &admin());
        assert_eq!(presets.len(), 5);
        assert!(!presets.contains(&TicketStatus::Pagada));

        let agent_presets = StatusGate::allowed_presets(TicketStatus::Disponible, &agent());
        assert!(agent_presets.contains(&TicketStatus::AnuladaAgente));
        assert!(!agent_presets.contains(&TicketStatus::AnuladaJuzgado));

        let current_excluded = StatusGate::allowed_presets(TicketStatus::Verificacion, &admin());
        assert!(!current_excluded.contains(&TicketStatus::Verificacion));
        assert_eq!(current_excluded.len(), 4);
    }
}
