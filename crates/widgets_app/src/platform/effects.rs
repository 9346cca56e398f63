use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use widget_logging::{widget_debug, widget_info};
use widgets_core::Effect;

use super::app::ShellEvent;

/// Receiver of the effects returned by `update`.
pub(crate) trait EffectSink {
    fn enqueue(&mut self, effects: Vec<Effect>);
}

/// Owns the background ticker that samples the stopwatch while it runs.
pub(crate) struct EffectRunner {
    ticking: Arc<AtomicBool>,
}

impl EffectRunner {
    pub(crate) fn new(interval: Duration, event_tx: mpsc::Sender<ShellEvent>) -> Self {
        let ticking = Arc::new(AtomicBool::new(false));
        let flag = ticking.clone();
        thread::spawn(move || loop {
            thread::sleep(interval);
            if flag.load(Ordering::Relaxed) && event_tx.send(ShellEvent::Tick).is_err() {
                break;
            }
        });
        Self { ticking }
    }
}

impl EffectSink for EffectRunner {
    fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            let start = matches!(effect, Effect::StartTicking);
            let was = self.ticking.swap(start, Ordering::Relaxed);
            if was != start {
                widget_info!("Ticker {}", if start { "started" } else { "stopped" });
            } else {
                widget_debug!("Ticker already in requested state: {:?}", effect);
            }
        }
    }
}

#[cfg(test)]
impl EffectSink for Vec<Effect> {
    fn enqueue(&mut self, effects: Vec<Effect>) {
        self.extend(effects);
    }
}
