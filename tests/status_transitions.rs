use boleta_core::domain::{ROLE_ADMIN, ROLE_AGENT, ROLE_COURT};
use boleta_core::{CoreError, RoleSet, StatusGate, TicketStatus};

fn roles(names: &[&str]) -> RoleSet {
    names.iter().copied().collect()
}

#[test]
fn paid_tickets_reject_every_transition() {
    let all_roles = roles(&[ROLE_AGENT, ROLE_COURT, ROLE_ADMIN]);
    for target in TicketStatus::ALL {
        assert!(!StatusGate::can_transition(
            TicketStatus::Pagada,
            target,
            &all_roles
        ));
        let err = StatusGate::assert_transition(TicketStatus::Pagada, target, &all_roles)
            .expect_err("terminal state must reject");
        assert!(matches!(err, CoreError::IllegalTransition { .. }));
    }
}

#[test]
fn paid_is_unreachable_from_every_non_terminal_state() {
    let all_roles = roles(&[ROLE_AGENT, ROLE_COURT, ROLE_ADMIN]);
    for current in TicketStatus::ALL.into_iter().filter(|s| !s.is_terminal()) {
        assert!(
            !StatusGate::can_transition(current, TicketStatus::Pagada, &all_roles),
            "generic transition into PAGADA from {} must be blocked",
            current
        );
    }
}

#[test]
fn non_terminal_states_form_a_near_complete_graph_for_admins() {
    let admin = roles(&[ROLE_ADMIN]);
    let presets = [
        TicketStatus::Verificacion,
        TicketStatus::PendientePago,
        TicketStatus::Disputa,
        TicketStatus::AnuladaAgente,
        TicketStatus::AnuladaJuzgado,
    ];
    for current in TicketStatus::ALL.into_iter().filter(|s| !s.is_terminal()) {
        for target in presets {
            if target == current {
                continue;
            }
            assert!(
                StatusGate::can_transition(current, target, &admin),
                "{} -> {} should be open to administrators",
                current,
                target
            );
        }
    }
}

#[test]
fn annulment_presets_are_role_gated() {
    assert!(!StatusGate::can_transition(
        TicketStatus::Disputa,
        TicketStatus::AnuladaJuzgado,
        &roles(&[ROLE_AGENT])
    ));
    assert!(StatusGate::can_transition(
        TicketStatus::Disputa,
        TicketStatus::AnuladaJuzgado,
        &roles(&[ROLE_COURT])
    ));
    assert!(!StatusGate::can_transition(
        TicketStatus::Verificacion,
        TicketStatus::AnuladaAgente,
        &roles(&[ROLE_COURT])
    ));
    assert!(StatusGate::can_transition(
        TicketStatus::Verificacion,
        TicketStatus::AnuladaAgente,
        &roles(&[ROLE_AGENT])
    ));
}

#[test]
fn unknown_roles_get_no_presets() {
    let outsider = roles(&["Accounts User"]);
    for current in TicketStatus::ALL {
        assert!(StatusGate::allowed_presets(current, &outsider).is_empty());
    }
}

#[test]
fn core_fields_lock_outside_available_and_verification() {
    for status in TicketStatus::ALL {
        let expected = matches!(
            status,
            TicketStatus::Disponible | TicketStatus::Verificacion
        );
        assert_eq!(StatusGate::can_edit(status), expected, "status {}", status);
    }
}
