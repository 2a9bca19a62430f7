use crate::auth::{AuthRequest, AuthService};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    Authenticate(AuthRequest),
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a, S: AuthService> {
    state: &'a Arc<Mutex<State>>,
    auth: &'a S,
}

impl<'a, S: AuthService> Handler<'a, S> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, auth: &'a S) -> Self {
        Handler { state, auth }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::Authenticate(request) => self.authenticate(request).await?,
        }
        Ok(())
    }

    /// Send the request to the auth service and report the result to the
    /// form that produced it. The state lock is held only to apply the result.
    ///
    async fn authenticate(&mut self, request: AuthRequest) -> Result<()> {
        let mode = request.mode();
        let result = self.auth.send(&request).await;
        if let Err(e) = &result {
            warn!("{} request failed: {}", mode.title(), e);
        }
        let mut state = self.state.lock().await;
        state.complete_auth(mode, result);
        Ok(())
    }
}
