use log::debug;
use log::warn;

use crate::alert::Alert;
use crate::alert::AlertColor;
use crate::channel::AlertChannel;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetAlert(Alert),
    ClearAlert,
    Navigate(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub alert: AlertChannel,
    pub location: String,
}

impl Default for State {
    fn default() -> Self {
        State {
            alert: AlertChannel::new(),
            location: "/".to_string(),
        }
    }
}

pub fn reduce(state: &mut State, action: Action) {
    match action {
        Action::SetAlert(alert) => state.alert.set_alert(alert),
        Action::ClearAlert => state.alert.clear_alert(),
        Action::Navigate(path) => state.location = path,
    }
}

/// Anything producers can write actions through.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

pub type Listener = Box<dyn FnMut(&State) + Send>;

pub struct Store {
    state: State,
    listeners: Vec<Listener>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(State::default())
    }
}

impl Store {
    pub fn new(state: State) -> Self {
        Store {
            state,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.state.alert.current()
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        match &action {
            Action::SetAlert(alert) => {
                if let AlertColor::Custom(name) = &alert.color {
                    warn!("unrecognised alert color {:?}, shown as neutral", name);
                }
                debug!(
                    "set alert [{}] {:?}",
                    alert.color,
                    alert.title.as_deref().unwrap_or("")
                )
            }
            Action::ClearAlert => debug!("clear alert"),
            Action::Navigate(path) => debug!("navigate to {}", path),
        }
        reduce(&mut self.state, action);
        for listener in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}
