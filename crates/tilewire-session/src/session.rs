//! The client session: one player's view of one server connection.

use tilewire_protocol::{
    ActionKind, ActionRequest, ClientCommand, GameUpdate, ServerCommand, Snapshot, Tile,
    UpdateEvent,
};
use tilewire_view::{ActionPrompt, Intent, Presenter, TableView};

use crate::{Phase, SessionError};

/// The phases the session moves through on its own. The turn and
/// response phases are layered on top of these by [`Session::phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Unauthenticated,
    Authenticating,
    Lobby,
    InHand,
    Disconnected,
}

/// Client-side session state.
///
/// Holds the last snapshot the server sent and any pending claim prompt.
/// The snapshot is only ever replaced, never patched, and nothing the
/// player does changes it: a played tile shows up once the server sends
/// the next snapshot.
#[derive(Debug)]
pub struct Session {
    stage: Stage,
    nickname: Option<String>,
    snapshot: Option<Snapshot>,
    pending: Option<ActionPrompt>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            stage: Stage::Unauthenticated,
            nickname: None,
            snapshot: None,
            pending: None,
        }
    }

    /// The current phase.
    ///
    /// A pending claim prompt outranks the turn, so resolving the prompt
    /// falls back to whatever the snapshot says.
    pub fn phase(&self) -> Phase {
        match self.stage {
            Stage::Unauthenticated => Phase::Unauthenticated,
            Stage::Authenticating => Phase::Authenticating,
            Stage::Disconnected => Phase::Disconnected,
            Stage::Lobby | Stage::InHand if self.pending.is_some() => Phase::AwaitingMyResponse,
            Stage::Lobby => Phase::Lobby,
            Stage::InHand if self.is_my_turn() => Phase::AwaitingMyAction,
            Stage::InHand => Phase::InHand,
        }
    }

    pub fn nickname(&self) -> Option<&str> {
        self.nickname.as_deref()
    }

    /// The last snapshot received, if any.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    /// The claim prompt awaiting an answer, if any.
    pub fn pending_prompt(&self) -> Option<&ActionPrompt> {
        self.pending.as_ref()
    }

    pub fn is_disconnected(&self) -> bool {
        self.stage == Stage::Disconnected
    }

    /// Returns `true` if a `PLAY_CARD` would be sent right now.
    pub fn can_play(&self) -> bool {
        self.phase() == Phase::AwaitingMyAction
    }

    fn is_my_turn(&self) -> bool {
        self.snapshot.as_ref().is_some_and(Snapshot::is_my_turn)
    }

    // -----------------------------------------------------------------------
    // Login
    // -----------------------------------------------------------------------

    /// Validates `nickname` and produces the `LOGIN` command.
    ///
    /// Surrounding whitespace is trimmed. On error the session is left
    /// unchanged and nothing should be sent.
    pub fn submit_nickname(&mut self, nickname: &str) -> Result<ClientCommand, SessionError> {
        if self.is_disconnected() {
            return Err(SessionError::Disconnected);
        }
        if let Some(existing) = &self.nickname {
            return Err(SessionError::AlreadySubmitted(existing.clone()));
        }

        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(SessionError::EmptyNickname);
        }

        self.nickname = Some(nickname.to_owned());
        self.stage = Stage::Authenticating;
        tracing::debug!(nickname, "login submitted");

        Ok(ClientCommand::Login {
            nickname: nickname.to_owned(),
        })
    }

    // -----------------------------------------------------------------------
    // Inbound
    // -----------------------------------------------------------------------

    /// Applies one command from the server.
    pub fn handle<P: Presenter>(&mut self, command: ServerCommand, presenter: &mut P) {
        if self.is_disconnected() {
            tracing::debug!(command = %command.kind(), "ignoring command after disconnect");
            return;
        }

        match command {
            ServerCommand::LoginSuccess => self.on_login_success(presenter),
            ServerCommand::GameStart => {
                tracing::info!("game started");
                presenter.log("Game started.");
            }
            ServerCommand::GameUpdate(update) => self.on_game_update(update, presenter),
            ServerCommand::ActionRequest(request) => self.on_action_request(request, presenter),
            ServerCommand::GameOver { message } => {
                tracing::info!(?message, "game over");
                presenter.log(message.as_deref().unwrap_or("Game over."));
            }
            ServerCommand::Error { message } => {
                let message = message.as_deref().unwrap_or("unknown error");
                tracing::warn!(message, "server reported an error");
                presenter.log(&format!("Error: {message}"));
            }
        }
    }

    fn on_login_success<P: Presenter>(&mut self, presenter: &mut P) {
        if self.stage != Stage::Authenticating {
            tracing::warn!(phase = %self.phase(), "unexpected LOGIN_SUCCESS");
            return;
        }

        self.stage = Stage::Lobby;
        let nickname = self.nickname.as_deref().unwrap_or_default();
        tracing::info!(nickname, "logged in");
        presenter.log(&format!(
            "Welcome {nickname}! Waiting for other players..."
        ));
    }

    fn on_game_update<P: Presenter>(&mut self, update: GameUpdate, presenter: &mut P) {
        if let Some(message) = &update.message {
            presenter.log(message);
        }

        match update.event {
            UpdateEvent::None => {}
            UpdateEvent::StateUpdate(snapshot) => self.on_snapshot(snapshot, presenter),
            UpdateEvent::Draw(tile) => {
                tracing::debug!(%tile, "drew tile");
                presenter.log(&format!("You drew: {tile}"));
            }
            UpdateEvent::Unrecognized(action) => {
                tracing::debug!(%action, "unrecognized GAME_UPDATE action");
            }
        }
    }

    fn on_snapshot<P: Presenter>(&mut self, snapshot: Snapshot, presenter: &mut P) {
        if !matches!(self.stage, Stage::Lobby | Stage::InHand) {
            tracing::warn!(phase = %self.phase(), "ignoring STATE_UPDATE before login");
            return;
        }

        tracing::debug!(
            my_index = %snapshot.my_index,
            turn_index = %snapshot.turn_index,
            "snapshot received"
        );
        self.stage = Stage::InHand;
        self.snapshot = Some(snapshot);
        self.render(presenter);
    }

    fn on_action_request<P: Presenter>(&mut self, request: ActionRequest, presenter: &mut P) {
        // Claims only make sense once seated. A request before LOGIN_SUCCESS
        // is dropped instead of moving the session to AwaitingMyResponse.
        if !matches!(self.stage, Stage::Lobby | Stage::InHand) {
            tracing::warn!(phase = %self.phase(), "ignoring ACTION_REQUEST before login");
            return;
        }

        if self.pending.take().is_some() {
            tracing::debug!("replacing unanswered action request");
            presenter.retract_prompt();
        }

        let prompt = ActionPrompt::from_request(&request);
        presenter.show_prompt(&prompt);
        self.pending = Some(prompt);
        self.render(presenter);
    }

    // -----------------------------------------------------------------------
    // Outbound
    // -----------------------------------------------------------------------

    /// Produces `PLAY_CARD` if the local player holds the turn and no claim
    /// prompt is pending. Otherwise the click is dropped.
    pub fn play_tile(&mut self, tile: Tile) -> Option<ClientCommand> {
        if !self.can_play() {
            tracing::debug!(%tile, phase = %self.phase(), "tile click ignored");
            return None;
        }
        Some(ClientCommand::PlayCard { tile })
    }

    /// Answers the pending claim prompt.
    ///
    /// `kind` must be one of the options on the prompt. Answering clears the
    /// prompt, retracts it from the presenter, and redraws the table.
    pub fn choose_action<P: Presenter>(
        &mut self,
        kind: ActionKind,
        presenter: &mut P,
    ) -> Option<ClientCommand> {
        if self.is_disconnected() {
            tracing::debug!(%kind, "action ignored after disconnect");
            return None;
        }
        match &self.pending {
            Some(prompt) if prompt.offers(&kind) => {}
            Some(_) => {
                tracing::debug!(%kind, "action not offered");
                return None;
            }
            None => {
                tracing::debug!(%kind, "no action request pending");
                return None;
            }
        }

        self.pending = None;
        presenter.retract_prompt();
        self.render(presenter);
        Some(ClientCommand::Action { kind })
    }

    /// Routes a presenter intent to [`play_tile`](Self::play_tile) or
    /// [`choose_action`](Self::choose_action).
    pub fn intent<P: Presenter>(
        &mut self,
        intent: Intent,
        presenter: &mut P,
    ) -> Option<ClientCommand> {
        match intent {
            Intent::TilePlayed(tile) => self.play_tile(tile),
            Intent::ActionChosen(kind) => self.choose_action(kind, presenter),
        }
    }

    // -----------------------------------------------------------------------
    // Transport
    // -----------------------------------------------------------------------

    /// Marks the session as disconnected. Terminal: every later command and
    /// intent is ignored.
    pub fn on_transport_closed<P: Presenter>(&mut self, reason: Option<&str>, presenter: &mut P) {
        if self.is_disconnected() {
            return;
        }

        tracing::info!(phase = %self.phase(), ?reason, "connection closed");
        if self.pending.take().is_some() {
            presenter.retract_prompt();
        }
        self.stage = Stage::Disconnected;

        match reason {
            Some(reason) => presenter.log(&format!("Connection closed: {reason}")),
            None => presenter.log("Connection closed"),
        }
    }

    /// Redraws the table from the held snapshot. Nothing is drawn before
    /// the first snapshot arrives.
    fn render<P: Presenter>(&self, presenter: &mut P) {
        if let Some(snapshot) = &self.snapshot {
            let view = TableView::build(snapshot, self.can_play(), self.pending.clone());
            presenter.render(&view);
        }
    }
}
