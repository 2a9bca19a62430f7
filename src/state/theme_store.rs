//! Single source of truth for the active theme.
//!
//! The store is owned by `State` and handed by reference to every renderer.
//! Consumers that need to react to changes subscribe for a channel receiver.

use crate::error::AppResult;
use crate::ui::{Palette, ThemeFlag};
use log::*;
use std::sync::mpsc::{self, Receiver, Sender};

/// Persistence seam for the theme flag.
///
pub trait ThemeStorage: Send {
    /// Return the stored value, if any.
    fn load_theme(&self) -> Option<String>;

    fn save_theme(&mut self, value: &str) -> AppResult<()>;
}

pub struct ThemeStore {
    flag: ThemeFlag,
    storage: Option<Box<dyn ThemeStorage>>,
    subscribers: Vec<Sender<ThemeFlag>>,
}

impl Default for ThemeStore {
    /// Dark store without persistence.
    ///
    fn default() -> Self {
        ThemeStore {
            flag: ThemeFlag::default(),
            storage: None,
            subscribers: vec![],
        }
    }
}

impl ThemeStore {
    /// Return a store initialized from storage, dark if nothing is stored.
    ///
    pub fn new(storage: Box<dyn ThemeStorage>) -> Self {
        let flag = storage
            .load_theme()
            .map(|value| ThemeFlag::from_stored(&value))
            .unwrap_or_default();
        debug!("Loaded {} theme.", flag.as_str());
        ThemeStore {
            flag,
            storage: Some(storage),
            subscribers: vec![],
        }
    }

    pub fn flag(&self) -> ThemeFlag {
        self.flag
    }

    pub fn is_dark(&self) -> bool {
        self.flag == ThemeFlag::Dark
    }

    pub fn palette(&self) -> &'static Palette {
        self.flag.palette()
    }

    /// Return a receiver that gets every new flag after a toggle.
    ///
    pub fn subscribe(&mut self) -> Receiver<ThemeFlag> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Flip the flag, persist it and notify subscribers. A failed write is
    /// logged; the in-memory flag flips regardless.
    ///
    pub fn toggle(&mut self) -> ThemeFlag {
        self.flag = self.flag.toggled();
        info!("Switched to {} theme.", self.flag.as_str());
        if let Some(storage) = self.storage.as_mut() {
            if let Err(e) = storage.save_theme(self.flag.as_str()) {
                error!("Failed to persist theme: {}", e);
            }
        }
        let flag = self.flag;
        self.subscribers.retain(|tx| tx.send(flag).is_ok());
        flag
    }
}
