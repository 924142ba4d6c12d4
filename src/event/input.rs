use std::thread;
use std::time::Duration;

use crossterm::event::{self, poll, Event, KeyCode, KeyEvent, KeyModifiers};
use log::error;
use tokio::sync::mpsc::Sender;
use tokio::task;
use tokio::time::interval;
use tokio::time::MissedTickBehavior;

use crate::alert::Alert;

pub const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Quit,
    Startup,
    /// Alert produced off the event loop (async completions).
    Notify(Alert),
    DismissAlert,
    Navigate(String),
    ExecCommand(String),
    Login,
    SaveParcel,
    RotateTheme,
    ShowHelp,
}

pub type EventSender = Sender<AppEvent>;

pub fn start(event_sender: EventSender) {
    thread::spawn(move || {
        if event_sender.blocking_send(AppEvent::Startup).is_err() {
            return;
        }
        loop {
            let event = match poll(TICK_RATE) {
                Ok(true) => match event::read() {
                    // handle global keys
                    Ok(Event::Key(key)) => match (key.modifiers, key.code) {
                        (KeyModifiers::CONTROL, KeyCode::Char('c')) => AppEvent::Quit,
                        _ => AppEvent::Input(key),
                    },
                    Ok(_) => continue,
                    Err(e) => {
                        error!("could not read terminal event: {}", e);
                        AppEvent::Quit
                    }
                },
                Ok(false) => continue,
                Err(e) => {
                    error!("could not poll terminal: {}", e);
                    AppEvent::Quit
                }
            };

            // receiver gone, the app has shut down
            if event_sender.blocking_send(event).is_err() {
                return;
            }
        }
    });
}

/// Sends `Tick` every `period` regardless of terminal input.
pub fn start_ticker(event_sender: EventSender, period: Duration) -> task::JoinHandle<()> {
    task::spawn(async move {
        let mut ticks = interval(period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticks.tick().await;
            if event_sender.send(AppEvent::Tick).await.is_err() {
                return;
            }
        }
    })
}
