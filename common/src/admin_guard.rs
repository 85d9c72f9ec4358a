//! Decides what an admin-only route shows for the current authentication flags.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthFlags {
    pub is_authenticated: bool,
    pub is_admin: bool,
    pub is_loading: bool,
    pub is_verifying: bool,
}

/// Ways out of the access-denied notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardExit {
    /// Clear the session and go to login as someone else.
    ReAuthenticate,
    ReturnHome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminGuardState {
    Loading,
    Unauthenticated { return_to: String },
    AuthenticatedNonAdmin { exits: [GuardExit; 2] },
    AuthenticatedAdmin,
}

/// Stateless: evaluated again on every render from the latest flags.
pub fn evaluate_admin_guard(flags: &AuthFlags, intended_destination: &str) -> AdminGuardState {
    if flags.is_loading || flags.is_verifying {
        return AdminGuardState::Loading;
    }
    if !flags.is_authenticated {
        return AdminGuardState::Unauthenticated { return_to: intended_destination.to_string() };
    }
    if !flags.is_admin {
        return AdminGuardState::AuthenticatedNonAdmin { exits: [GuardExit::ReAuthenticate, GuardExit::ReturnHome] };
    }
    AdminGuardState::AuthenticatedAdmin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(is_authenticated: bool, is_admin: bool, is_loading: bool, is_verifying: bool) -> AuthFlags {
        AuthFlags { is_authenticated, is_admin, is_loading, is_verifying }
    }

    #[test]
    fn loading_wins_over_everything() {
        for (auth, admin) in [(false, false), (true, false), (true, true)] {
            assert_eq!(evaluate_admin_guard(&flags(auth, admin, true, false), "/admin"), AdminGuardState::Loading);
            assert_eq!(evaluate_admin_guard(&flags(auth, admin, false, true), "/admin"), AdminGuardState::Loading);
        }
    }

    #[test]
    fn unauthenticated_remembers_destination() {
        let state = evaluate_admin_guard(&flags(false, false, false, false), "/admin/experience/12");
        assert_eq!(state, AdminGuardState::Unauthenticated { return_to: "/admin/experience/12".to_string() });
    }

    #[test]
    fn admin_flag_without_login_is_still_unauthenticated() {
        let state = evaluate_admin_guard(&flags(false, true, false, false), "/admin");
        assert!(matches!(state, AdminGuardState::Unauthenticated { .. }));
    }

    #[test]
    fn non_admin_gets_both_exits() {
        let state = evaluate_admin_guard(&flags(true, false, false, false), "/admin");
        let AdminGuardState::AuthenticatedNonAdmin { exits } = state else {
            panic!("expected access denied, got {:?}", state);
        };
        assert!(exits.contains(&GuardExit::ReAuthenticate));
        assert!(exits.contains(&GuardExit::ReturnHome));
    }

    #[test]
    fn admin_sees_content() {
        assert_eq!(evaluate_admin_guard(&flags(true, true, false, false), "/admin"), AdminGuardState::AuthenticatedAdmin);
    }
}
