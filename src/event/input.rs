use super::Event;
use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Translate a crossterm event into an application event
///
/// Key releases and repeats (reported on some platforms) are dropped so a
/// single keystroke never fires twice.
fn translate(raw: CrosstermEvent) -> Option<Event> {
    match raw {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

/// Interval between input polls for a tick rate in ticks per second
///
/// Rates below one tick per second are clamped to one.
pub fn poll_interval(tick_rate: f64) -> Duration {
    Duration::from_secs_f64(1.0 / tick_rate.max(1.0))
}

/// Listen for terminal input events with graceful shutdown support
pub async fn listen(tx: mpsc::Sender<Event>, cancel: CancellationToken, interval: Duration) {
    loop {
        tokio::select! {
            // Check for cancellation signal
            () = cancel.cancelled() => {
                tracing::debug!("Input listener cancelled");
                break;
            }
            // Poll for input with timeout
            () = tokio::time::sleep(interval) => {
                // Drain everything already queued so bursts don't lag behind
                while event::poll(Duration::ZERO).unwrap_or(false) {
                    let Ok(raw) = event::read() else {
                        break;
                    };
                    if let Some(event) = translate(raw) {
                        if tx.send(event).await.is_err() {
                            // Channel closed, exit
                            return;
                        }
                    }
                }
            }
        }
    }
}
