//! The session's lifecycle phase.

/// Where the local player stands with the server.
///
/// ```text
/// Unauthenticated → Authenticating → Lobby → InHand ⇄ AwaitingMyAction
///                                               ↓ ↑
///                                       AwaitingMyResponse
///
///              (any) ──(transport closed)──→ Disconnected
/// ```
///
/// - **Unauthenticated**: No nickname submitted yet.
/// - **Authenticating**: `LOGIN` produced, waiting for `LOGIN_SUCCESS`.
/// - **Lobby**: Logged in. No snapshot has arrived.
/// - **InHand**: A hand is being played and another seat holds the turn.
/// - **AwaitingMyAction**: The local player holds the turn and may play a
///   tile.
/// - **AwaitingMyResponse**: The server asked the local player to claim or
///   skip. Takes precedence over the turn.
/// - **Disconnected**: The transport ended. Terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Unauthenticated,
    Authenticating,
    Lobby,
    InHand,
    AwaitingMyAction,
    AwaitingMyResponse,
    Disconnected,
}

impl Phase {
    /// Returns `true` once the server has accepted the login.
    pub fn is_logged_in(self) -> bool {
        matches!(
            self,
            Self::Lobby | Self::InHand | Self::AwaitingMyAction | Self::AwaitingMyResponse
        )
    }

    /// Returns `true` if no transition leaves this phase.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Disconnected)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "Unauthenticated"),
            Self::Authenticating => write!(f, "Authenticating"),
            Self::Lobby => write!(f, "Lobby"),
            Self::InHand => write!(f, "InHand"),
            Self::AwaitingMyAction => write!(f, "AwaitingMyAction"),
            Self::AwaitingMyResponse => write!(f, "AwaitingMyResponse"),
            Self::Disconnected => write!(f, "Disconnected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_is_logged_in() {
        assert!(!Phase::Unauthenticated.is_logged_in());
        assert!(!Phase::Authenticating.is_logged_in());
        assert!(Phase::Lobby.is_logged_in());
        assert!(Phase::InHand.is_logged_in());
        assert!(Phase::AwaitingMyAction.is_logged_in());
        assert!(Phase::AwaitingMyResponse.is_logged_in());
        assert!(!Phase::Disconnected.is_logged_in());
    }

    #[test]
    fn test_only_disconnected_is_terminal() {
        assert!(Phase::Disconnected.is_terminal());
        assert!(!Phase::AwaitingMyResponse.is_terminal());
        assert!(!Phase::Unauthenticated.is_terminal());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::AwaitingMyAction.to_string(), "AwaitingMyAction");
        assert_eq!(Phase::Disconnected.to_string(), "Disconnected");
    }
}
