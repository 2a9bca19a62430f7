use crate::app::NetworkEventSender;
use crate::auth::AuthError;
use crate::events::network::Event as NetworkEvent;
use log::*;
use ratatui::layout::Rect;
use std::time::Instant;

use super::auth_form::{AuthForm, AuthMode, AuthOutcome};
use super::dashboard::DashboardState;
use super::navigation::View;
use super::sidebar::{column_to_pixels, PIXELS_PER_COLUMN};
use super::tagline::TaglineRotator;
use super::theme_store::ThemeStore;
use super::StateError;

/// Log entries kept for the log panel.
///
const MAX_LOG_ENTRIES: usize = 500;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    terminal_size: Rect,
    view: View,
    theme: ThemeStore,
    auth_form: Option<AuthForm>, // Present while the modal is open
    tagline: TaglineRotator,     // Runs while the landing view is mounted
    dashboard: DashboardState,   // Recreated on every dashboard mount
    log_visible: bool,
    log_entries: Vec<String>,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            terminal_size: Rect::default(),
            view: View::Landing,
            theme: ThemeStore::default(),
            auth_form: None,
            tagline: TaglineRotator::default(),
            dashboard: DashboardState::default(),
            log_visible: false,
            log_entries: vec![],
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, theme: ThemeStore) -> Self {
        State {
            net_sender: Some(net_sender),
            theme,
            ..State::default()
        }
    }

    /// Return the theme store.
    ///
    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeStore {
        &mut self.theme
    }

    pub fn toggle_theme(&mut self) -> &mut Self {
        self.theme.toggle();
        self
    }

    pub fn get_terminal_size(&self) -> &Rect {
        &self.terminal_size
    }

    /// Sets the terminal size and the viewport width seen by the sidebar.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self.dashboard
            .resize_mut()
            .set_viewport_width(size.width.saturating_mul(PIXELS_PER_COLUMN));
        self
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    /// Unmount the current view and mount `view`. Unmounting cancels the
    /// tagline timer, discards the auth modal and releases any drag.
    ///
    pub fn navigate(&mut self, view: View, now: Instant) -> &mut Self {
        debug!("Navigating to {}", view.path());
        self.unmount();
        self.view = view;
        self.mount(now);
        self
    }

    fn unmount(&mut self) {
        match self.view {
            View::Landing => {
                self.tagline.cancel();
                self.auth_form = None;
            }
            View::Dashboard => self.dashboard.resize_mut().dispose(),
        }
    }

    fn mount(&mut self, now: Instant) {
        match self.view {
            View::Landing => self.tagline.start(now),
            View::Dashboard => {
                self.dashboard = DashboardState::default();
                let size = self.terminal_size;
                self.set_terminal_size(size);
            }
        }
    }

    /// Advance timers. Returns whether anything visible changed.
    ///
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.tagline.poll(now)
    }

    pub fn tagline(&self) -> &TaglineRotator {
        &self.tagline
    }

    pub fn auth_form(&self) -> Option<&AuthForm> {
        self.auth_form.as_ref()
    }

    pub fn auth_form_mut(&mut self) -> Option<&mut AuthForm> {
        self.auth_form.as_mut()
    }

    pub fn has_auth_modal(&self) -> bool {
        self.auth_form.is_some()
    }

    /// Open the auth modal with a fresh form in `mode`.
    ///
    pub fn open_auth_modal(&mut self, mode: AuthMode) -> &mut Self {
        if self.view == View::Landing {
            debug!("Opening auth modal in {} mode", mode.title());
            self.auth_form = Some(AuthForm::open(mode));
        }
        self
    }

    pub fn close_auth_modal(&mut self) -> &mut Self {
        self.auth_form = None;
        self
    }

    pub fn switch_auth_mode(&mut self, mode: AuthMode) -> &mut Self {
        if let Some(form) = self.auth_form.as_mut() {
            form.switch_mode(mode);
        }
        self
    }

    /// Validate the open form and dispatch its request to the network thread.
    ///
    pub fn submit_auth_form(&mut self) -> &mut Self {
        let request = match self.auth_form.as_mut().and_then(AuthForm::submit) {
            Some(request) => request,
            None => return self,
        };
        let mode = request.mode();
        let sent = match &self.net_sender {
            Some(sender) => sender.send(NetworkEvent::Authenticate(request)).is_ok(),
            None => false,
        };
        if !sent {
            let reason = StateError::NetworkUnavailable.to_string();
            error!("Failed to dispatch auth request: {}", reason);
            self.complete_auth(mode, Err(AuthError::RequestFailed { reason }));
        }
        self
    }

    /// Apply the result of an auth request sent from `mode`. Ignored if the
    /// modal was dismissed in the meantime.
    ///
    pub fn complete_auth(&mut self, mode: AuthMode, result: Result<(), AuthError>) -> &mut Self {
        let form = match self.auth_form.as_mut() {
            Some(form) => form,
            None => {
                debug!("Auth modal closed before {} request completed", mode.title());
                return self;
            }
        };
        if form.complete(mode, result) == AuthOutcome::Close {
            info!("{} succeeded.", mode.title());
            self.auth_form = None;
        }
        self
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut DashboardState {
        &mut self.dashboard
    }

    /// Start a sidebar resize if the pointer is on the drag handle. Returns
    /// whether a gesture started.
    ///
    pub fn begin_sidebar_drag(&mut self, column: u16, row: u16) -> bool {
        if self.view != View::Dashboard || !self.dashboard.is_on_handle(column, row) {
            return false;
        }
        let started = self
            .dashboard
            .resize_mut()
            .begin_drag(column_to_pixels(column));
        if started {
            debug!("Started sidebar resize at column {}", column);
        }
        started
    }

    pub fn is_sidebar_dragging(&self) -> bool {
        self.view == View::Dashboard && self.dashboard.resize().is_dragging()
    }

    pub fn drag_sidebar(&mut self, column: u16) -> &mut Self {
        self.dashboard
            .resize_mut()
            .drag_to(column_to_pixels(column));
        self
    }

    pub fn end_sidebar_drag(&mut self) -> &mut Self {
        self.dashboard.resize_mut().end_drag();
        debug!(
            "Finished sidebar resize at {}px",
            self.dashboard.resize().width()
        );
        self
    }

    pub fn request_new_section(&mut self) -> &mut Self {
        info!("Adding sections is not available yet.");
        self
    }

    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    pub fn log_entries(&self) -> &[String] {
        &self.log_entries
    }

    pub fn push_log_entry(&mut self, entry: String) -> &mut Self {
        self.log_entries.push(entry);
        if self.log_entries.len() > MAX_LOG_ENTRIES {
            let excess = self.log_entries.len() - MAX_LOG_ENTRIES;
            self.log_entries.drain(..excess);
        }
        self
    }
}
