use std::fmt::Display;
use std::io;
use std::time::Duration;
use std::time::Instant;

use crossterm::event::Event;
use crossterm::event::KeyCode;
use log::info;
use log::trace;
use log::warn;
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;
use tokio::task;
use tokio::time::sleep;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::alert::AlertColor;
use crate::breadcrumbs::breadcrumbs;
use crate::breadcrumbs::default_labels;
use crate::breadcrumbs::format_crumbs;
use crate::breadcrumbs::Labels;
use crate::config::Config;
use crate::event::input::AppEvent;
use crate::event::Outbox;
use crate::form::submit_phone;
use crate::notify::notify;
use crate::notify::notify_error;
use crate::notify::notify_success;
use crate::notify::notify_warning;
use crate::notify::AlertOptions;
use crate::store::Action;
use crate::store::Dispatch;
use crate::store::State;
use crate::store::Store;
use crate::theme::Scheme;
use crate::theme::Theme;
use crate::view::alert::AlertView;
use crate::view::help::HelpView;
use crate::view::layout::LayoutView;
use crate::view::page::PageView;
use crate::view::View;

/// Simulated round trip of the backend calls behind login and save.
const BACKEND_LATENCY: Duration = Duration::from_millis(400);

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum InputMode {
    Normal,
    Command,
}

impl Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum CurrentView {
    Page,
    Help,
}

pub struct App {
    pub config: Config,
    pub store: Store,
    pub labels: Labels,
    pub input_mode: InputMode,
    pub command_input: Input,
    pub view_current: CurrentView,
    pub theme: Theme,
    receiver: Receiver<AppEvent>,
    sender: Sender<AppEvent>,
    quit: bool,
}

impl App {
    pub fn new(config: Config, receiver: Receiver<AppEvent>, sender: Sender<AppEvent>) -> App {
        let state = State {
            location: config.start_path.clone(),
            ..State::default()
        };
        let mut store = Store::new(state);
        store.subscribe(Box::new(|state| {
            trace!(
                "alert {} at {}",
                match state.alert.current() {
                    Some(alert) => format!("{:?}", alert.title),
                    None => "empty".to_string(),
                },
                state.location
            );
        }));
        App {
            theme: config.theme,
            config,
            store,
            labels: default_labels(),
            input_mode: InputMode::Normal,
            command_input: Input::default(),
            view_current: CurrentView::Page,
            receiver,
            sender,
            quit: false,
        }
    }

    pub fn theme(&self) -> Scheme {
        self.theme.scheme()
    }

    pub fn location(&self) -> &str {
        &self.store.state().location
    }

    /// Producer defaults shared by every alert the dashboard raises itself.
    fn alert_options(&self) -> AlertOptions {
        AlertOptions::default().duration(self.config.alert_duration)
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<(), anyhow::Error> {
        loop {
            let event = match self.receiver.recv().await {
                Some(event) => event,
                None => return Ok(()),
            };

            self.handle_event(event).await?;

            if self.quit {
                return Ok(());
            }

            terminal.autoresize()?;
            terminal.draw(|frame| {
                let area = frame.area();
                LayoutView::draw(self, frame, area);
            })?;
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent) -> Result<(), anyhow::Error> {
        self.expire_alert(Instant::now());

        let event = match self.input_mode {
            InputMode::Command => match event {
                AppEvent::Input(e) => {
                    self.handle_command_input(e.code, e).await?;
                    return Ok(());
                }
                other => other,
            },
            InputMode::Normal => match event {
                AppEvent::Input(e) => match self.route_input(AppEvent::Input(e)) {
                    Some(event) => event,
                    None => return Ok(()),
                },
                other => other,
            },
        };

        match event {
            AppEvent::Quit => self.quit = true,
            // expiry already ran above, the tick only wakes the loop
            AppEvent::Tick => (),
            AppEvent::Notify(alert) => self.store.dispatch(Action::SetAlert(alert)),
            AppEvent::DismissAlert => self.store.dispatch(Action::ClearAlert),
            AppEvent::Navigate(path) => self.navigate(path),
            AppEvent::ExecCommand(cmd) => self.exec_command(&cmd).await?,
            AppEvent::Login => self.login(),
            AppEvent::SaveParcel => self.save_parcel(),
            AppEvent::RotateTheme => self.theme = self.theme.next(),
            AppEvent::ShowHelp => self.view_current = CurrentView::Help,
            AppEvent::Startup => info!("dashboard started at {}", self.location()),
            AppEvent::Input(_) => (),
        }
        Ok(())
    }

    /// Clears the alert once its duration is up. Runs ahead of every event so a
    /// stream of key presses cannot hold an expired alert on screen.
    fn expire_alert(&mut self, now: Instant) {
        if self.config.auto_dismiss && self.store.state().alert.is_expired(now) {
            self.store.dispatch(Action::ClearAlert);
        }
    }

    /// Offers a key press to the alert box first, then to the current view,
    /// then to the global key map.
    fn route_input(&mut self, event: AppEvent) -> Option<AppEvent> {
        if let Some(event) = AlertView::handle(self, event.clone()) {
            return Some(event);
        }
        let handled = match self.view_current {
            CurrentView::Help => HelpView::handle(self, event.clone()),
            CurrentView::Page => PageView::handle(self, event.clone()),
        };
        if handled.is_some() {
            return handled;
        }

        let code = match event {
            AppEvent::Input(e) => e.code,
            other => return Some(other),
        };
        match code {
            KeyCode::Char(':') => {
                self.input_mode = InputMode::Command;
                None
            }
            KeyCode::Char('q') => Some(AppEvent::Quit),
            KeyCode::Char('t') => Some(AppEvent::RotateTheme),
            KeyCode::Char('?') => Some(AppEvent::ShowHelp),
            KeyCode::Char('l') => Some(AppEvent::Login),
            KeyCode::Char('s') => Some(AppEvent::SaveParcel),
            _ => None,
        }
    }

    async fn handle_command_input(
        &mut self,
        code: KeyCode,
        e: crossterm::event::KeyEvent,
    ) -> Result<(), anyhow::Error> {
        match code {
            // escape back to normal mode
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.command_input.reset();
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                let cmd = self.command_input.value().to_string();
                self.command_input.reset();
                self.sender.send(AppEvent::ExecCommand(cmd)).await?;
            }
            // delegate keys to command input
            _ => {
                self.command_input.handle_event(&Event::Key(e));
            }
        }
        Ok(())
    }

    fn navigate(&mut self, path: String) {
        self.view_current = CurrentView::Page;
        if path == self.location() {
            return;
        }
        info!("{}", format_crumbs(&breadcrumbs(&path, &self.labels)));
        self.store.dispatch(Action::Navigate(path));
        self.store.dispatch(Action::ClearAlert);
    }

    async fn exec_command(&mut self, cmd: &str) -> Result<(), anyhow::Error> {
        let cmd = cmd.trim();
        let (name, rest) = cmd.split_once(' ').unwrap_or((cmd, ""));
        let rest = rest.trim();
        match name {
            "" => (),
            "q" | "quit" => self.sender.send(AppEvent::Quit).await?,
            "clear" => self.store.dispatch(Action::ClearAlert),
            "go" => {
                let path = if rest.starts_with('/') {
                    rest.to_string()
                } else {
                    format!("/{}", rest)
                };
                self.navigate(path);
            }
            "phone" => {
                submit_phone(&mut self.store, rest);
            }
            "notify" => {
                let (color, text) = rest.split_once(' ').unwrap_or((rest, ""));
                let (title, message) = text.split_once('|').unwrap_or((text, ""));
                let mut options = self.alert_options().color(AlertColor::parse(color));
                if !title.trim().is_empty() {
                    options = options.title(title.trim());
                }
                if !message.trim().is_empty() {
                    options = options.message(message.trim());
                }
                notify(&mut self.store, options);
            }
            _ => {
                let options = self
                    .alert_options()
                    .title("Unknown command")
                    .message(format!("\"{}\" is not a command, press ? for help", name));
                notify_warning(&mut self.store, options);
            }
        }
        Ok(())
    }

    fn login(&mut self) {
        let sender = self.sender.clone();
        let options = self.alert_options();
        task::spawn(async move {
            sleep(BACKEND_LATENCY).await;
            let mut outbox = Outbox::default();
            notify_error(
                &mut outbox,
                options
                    .title("Unauthorized")
                    .message("The username or password you entered is incorrect"),
            );
            if let Err(e) = outbox.flush(&sender).await {
                warn!("login result not delivered: {}", e);
            }
        });
    }

    fn save_parcel(&mut self) {
        let sender = self.sender.clone();
        let options = self.alert_options();
        task::spawn(async move {
            sleep(BACKEND_LATENCY).await;
            let mut outbox = Outbox::default();
            notify_success(&mut outbox, options.message("Parcel details saved"));
            if let Err(e) = outbox.flush(&sender).await {
                warn!("save result not delivered: {}", e);
            }
        });
    }
}
