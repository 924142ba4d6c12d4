pub mod input;

use tokio::sync::mpsc::error::SendError;

use crate::store::Action;
use crate::store::Dispatch;
use input::AppEvent;
use input::EventSender;

/// Collects the actions of a producer running outside the app loop so they can
/// be delivered with `flush`, which waits for queue space instead of dropping.
#[derive(Debug, Default)]
pub struct Outbox {
    actions: Vec<Action>,
}

impl Dispatch for Outbox {
    fn dispatch(&mut self, action: Action) {
        self.actions.push(action);
    }
}

impl Outbox {
    /// Queues every collected action as an event, in dispatch order. Only
    /// fails once the app loop has shut down.
    pub async fn flush(self, sender: &EventSender) -> Result<(), SendError<AppEvent>> {
        for action in self.actions {
            sender.send(event_for(action)).await?;
        }
        Ok(())
    }
}

fn event_for(action: Action) -> AppEvent {
    match action {
        Action::SetAlert(alert) => AppEvent::Notify(alert),
        Action::ClearAlert => AppEvent::DismissAlert,
        Action::Navigate(path) => AppEvent::Navigate(path),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alert::AlertColor;
    use crate::notify::notify_error;
    use anyhow::Result;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_outbox_forwards_alerts_as_events() -> Result<()> {
        let (sender, mut receiver) = mpsc::channel::<AppEvent>(4);
        let mut outbox = Outbox::default();
        notify_error(&mut outbox, "Timeout");
        outbox.dispatch(Action::ClearAlert);
        outbox.flush(&sender).await?;

        match receiver.recv().await {
            Some(AppEvent::Notify(alert)) => {
                assert_eq!(Some("Timeout".to_string()), alert.title);
                assert_eq!(AlertColor::Danger, alert.color);
            }
            other => panic!("expected notify event, got {:?}", other),
        }
        assert_eq!(Some(AppEvent::DismissAlert), receiver.recv().await);
        Ok(())
    }

    #[tokio::test]
    async fn test_full_queue_delays_but_keeps_alert() -> Result<()> {
        let (sender, mut receiver) = mpsc::channel::<AppEvent>(1);
        sender.send(AppEvent::Tick).await?;

        let mut outbox = Outbox::default();
        notify_error(&mut outbox, "Unauthorized");
        let producer = {
            let sender = sender.clone();
            tokio::spawn(async move { outbox.flush(&sender).await })
        };

        assert_eq!(Some(AppEvent::Tick), receiver.recv().await);
        match receiver.recv().await {
            Some(AppEvent::Notify(alert)) => {
                assert_eq!(Some("Unauthorized".to_string()), alert.title)
            }
            other => panic!("expected notify event, got {:?}", other),
        }
        producer.await??;
        Ok(())
    }

    #[tokio::test]
    async fn test_flush_fails_once_loop_is_gone() {
        let (sender, receiver) = mpsc::channel::<AppEvent>(1);
        drop(receiver);
        let mut outbox = Outbox::default();
        notify_error(&mut outbox, "Lost");
        assert_eq!(true, outbox.flush(&sender).await.is_err());
    }
}
