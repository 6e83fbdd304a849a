//! `TileClient` builder and client loop.
//!
//! This is the entry point for playing from one seat. It ties together all
//! the layers: transport → protocol → session → presenter.

use tilewire_protocol::{Codec, JsonCodec};
use tilewire_session::Session;
use tilewire_transport::{Connection, Connector, WebSocketConnector};
use tilewire_view::{Intent, Presenter};
use tokio::sync::mpsc;

use crate::handler::{dispatch_frame, send_command};
use crate::{ClientConfig, TilewireError};

/// Builder for configuring a [`TileClient`].
///
/// # Example
///
/// ```rust,ignore
/// let client = TileClient::builder()
///     .endpoint("ws://localhost:8888")
///     .nickname("Alice")
///     .build(my_presenter);
/// ```
pub struct TileClientBuilder<C: Codec = JsonCodec> {
    config: ClientConfig,
    codec: C,
}

impl TileClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
            codec: JsonCodec,
        }
    }
}

impl Default for TileClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Codec> TileClientBuilder<C> {
    /// Sets the server URL.
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.config.endpoint = endpoint.to_string();
        self
    }

    /// Sets the nickname to log in with.
    pub fn nickname(mut self, nickname: &str) -> Self {
        self.config.nickname = nickname.to_string();
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Swaps the wire codec.
    pub fn codec<C2: Codec>(self, codec: C2) -> TileClientBuilder<C2> {
        TileClientBuilder {
            config: self.config,
            codec,
        }
    }

    /// Builds the client. Nothing is validated or dialled until
    /// [`run()`](TileClient::run).
    pub fn build<P: Presenter>(self, presenter: P) -> TileClient<P, C> {
        TileClient {
            config: self.config,
            codec: self.codec,
            session: Session::new(),
            presenter,
        }
    }
}

/// A client for one seat at one table.
///
/// Call [`run()`](Self::run) to connect and play.
pub struct TileClient<P: Presenter, C: Codec = JsonCodec> {
    config: ClientConfig,
    codec: C,
    session: Session,
    presenter: P,
}

impl TileClient<()> {
    /// Creates a new builder.
    pub fn builder() -> TileClientBuilder {
        TileClientBuilder::new()
    }
}

impl<P: Presenter, C: Codec> TileClient<P, C> {
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consumes the client, returning its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Runs the client loop. A client runs at most once.
    ///
    /// Validates the nickname, connects, and sends `LOGIN`. After that it
    /// handles one event at a time: a frame from the server, the connection
    /// ending, or an intent from `intents`.
    ///
    /// Returns `Ok(())` when the server closes the connection or `intents`
    /// is closed. Returns an error if the nickname is rejected locally or
    /// the transport fails; in the latter case the session is left
    /// disconnected and the presenter has been told.
    pub async fn run(&mut self, mut intents: mpsc::Receiver<Intent>) -> Result<(), TilewireError> {
        let login = self.session.submit_nickname(&self.config.nickname)?;

        let conn = match WebSocketConnector.connect(&self.config.endpoint).await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(endpoint = %self.config.endpoint, error = %e, "connect failed");
                self.session
                    .on_transport_closed(Some(&e.to_string()), &mut self.presenter);
                return Err(e.into());
            }
        };
        let conn_id = conn.id();
        tracing::info!(%conn_id, endpoint = %self.config.endpoint, "Tilewire client running");

        if let Err(e) = send_command(&conn, &self.codec, &login).await {
            self.session
                .on_transport_closed(Some(&e.to_string()), &mut self.presenter);
            return Err(e);
        }

        loop {
            tokio::select! {
                frame = conn.recv() => match frame {
                    Ok(Some(frame)) => {
                        dispatch_frame(
                            conn_id,
                            &frame,
                            &self.codec,
                            &mut self.session,
                            &mut self.presenter,
                        );
                    }
                    Ok(None) => {
                        tracing::info!(%conn_id, "server closed the connection");
                        self.session.on_transport_closed(None, &mut self.presenter);
                        return Ok(());
                    }
                    Err(e) => {
                        tracing::warn!(%conn_id, error = %e, "recv error");
                        self.session
                            .on_transport_closed(Some(&e.to_string()), &mut self.presenter);
                        return Err(e.into());
                    }
                },
                intent = intents.recv() => match intent {
                    Some(intent) => {
                        let Some(command) = self.session.intent(intent, &mut self.presenter) else {
                            continue;
                        };
                        if let Err(e) = send_command(&conn, &self.codec, &command).await {
                            tracing::warn!(%conn_id, error = %e, "send failed");
                            self.session
                                .on_transport_closed(Some(&e.to_string()), &mut self.presenter);
                            return Err(e);
                        }
                    }
                    None => {
                        tracing::info!(%conn_id, "intent channel closed, leaving");
                        let closed = conn.close().await;
                        self.session.on_transport_closed(None, &mut self.presenter);
                        return closed.map_err(TilewireError::from);
                    }
                },
            }
        }
    }
}
