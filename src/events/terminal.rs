use crate::state::{AuthMode, State, View};
use anyhow::Result;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event {
    Input(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match poll_next(tick_rate) {
                    Ok(Some(event)) => {
                        if tx_clone.send(event).is_err() {
                            break;
                        }
                    }
                    Ok(None) => (),
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        let event = self.rx.recv()?;
        Ok(handle_event(event, state))
    }
}

fn poll_next(timeout: Duration) -> std::io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let next = match event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Input(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    };
    Ok(next)
}

/// Apply a single terminal event to state. Returns false if exit was
/// requested.
///
pub fn handle_event(event: Event, state: &mut State) -> bool {
    match event {
        Event::Input(key) => handle_key(key, state),
        Event::Mouse(mouse) => {
            handle_mouse(mouse, state);
            true
        }
        Event::Resize(width, height) => {
            debug!("Terminal resized to {}x{}", width, height);
            let mut size = *state.get_terminal_size();
            size.width = width;
            size.height = height;
            state.set_terminal_size(size);
            true
        }
        Event::Tick => {
            state.on_tick(Instant::now());
            true
        }
    }
}

fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }
    if state.has_auth_modal() {
        handle_modal_key(key, state);
        return true;
    }
    match (state.current_view(), key.code) {
        (_, KeyCode::Char('q')) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (_, KeyCode::Char('g')) => {
            state.toggle_log();
        }
        (View::Landing, KeyCode::Char('l')) => {
            state.open_auth_modal(AuthMode::Login);
        }
        (View::Landing, KeyCode::Char('s')) => {
            state.open_auth_modal(AuthMode::Signup);
        }
        (View::Landing, KeyCode::Char('t')) => {
            state.toggle_theme();
        }
        (View::Landing, KeyCode::Char('d')) => {
            state.navigate(View::Dashboard, Instant::now());
        }
        (View::Dashboard, KeyCode::Esc) => {
            state.navigate(View::Landing, Instant::now());
        }
        (View::Dashboard, KeyCode::Char('j') | KeyCode::Down) => {
            state.dashboard_mut().next_section();
        }
        (View::Dashboard, KeyCode::Char('k') | KeyCode::Up) => {
            state.dashboard_mut().previous_section();
        }
        (View::Dashboard, KeyCode::Char('a')) => {
            state.request_new_section();
        }
        _ => (),
    }
    true
}

fn handle_modal_key(key: KeyEvent, state: &mut State) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('l') => {
                state.switch_auth_mode(AuthMode::Login);
            }
            KeyCode::Char('s') => {
                state.switch_auth_mode(AuthMode::Signup);
            }
            KeyCode::Char('f') => {
                state.switch_auth_mode(AuthMode::ForgotPassword);
            }
            _ => (),
        }
        return;
    }
    match key.code {
        KeyCode::Esc => {
            debug!("Closing auth modal");
            state.close_auth_modal();
        }
        KeyCode::Enter => {
            state.submit_auth_form();
        }
        KeyCode::Tab | KeyCode::Down => {
            if let Some(form) = state.auth_form_mut() {
                form.focus_next();
            }
        }
        KeyCode::BackTab | KeyCode::Up => {
            if let Some(form) = state.auth_form_mut() {
                form.focus_prev();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = state.auth_form_mut() {
                form.pop_char();
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = state.auth_form_mut() {
                form.push_char(c);
            }
        }
        _ => (),
    }
}

/// Pointer moves and releases only reach the sidebar while a resize gesture
/// is active.
///
fn handle_mouse(mouse: MouseEvent, state: &mut State) {
    if state.is_sidebar_dragging() {
        match mouse.kind {
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                state.drag_sidebar(mouse.column);
            }
            MouseEventKind::Up(_) => {
                state.end_sidebar_drag();
            }
            _ => (),
        }
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || state.has_auth_modal() {
        return;
    }
    if state.current_view() != View::Dashboard {
        return;
    }
    if state.begin_sidebar_drag(mouse.column, mouse.row) {
        return;
    }
    if state.dashboard().is_on_add_section(mouse.column, mouse.row) {
        state.request_new_section();
    } else if let Some(index) = state.dashboard().section_at(mouse.column, mouse.row) {
        state.dashboard_mut().select_section(index);
    }
}
