use std::time::Duration;

use crate::view_model::{AppViewModel, CalculatorView, StopwatchView};
use crate::{format_elapsed, Calculator, Stopwatch, StopwatchPhase, Timestamp};

/// Both widgets plus the last sampled stopwatch reading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    calculator: Calculator,
    stopwatch: Stopwatch,
    shown_elapsed: Duration,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn view(&self) -> AppViewModel {
        let phase = self.stopwatch.phase();
        let toggle_label = match phase {
            StopwatchPhase::Running => "Pause",
            StopwatchPhase::Paused => "Resume",
            StopwatchPhase::Idle => "Start",
        };
        AppViewModel {
            calculator: CalculatorView {
                expression: self.calculator.expression(),
                display: self.calculator.display_text(),
                has_error: self.calculator.has_error(),
            },
            stopwatch: StopwatchView {
                elapsed: format_elapsed(self.shown_elapsed),
                phase,
                toggle_label,
                reset_enabled: phase == StopwatchPhase::Paused,
            },
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn calculator_mut(&mut self) -> &mut Calculator {
        &mut self.calculator
    }

    pub(crate) fn stopwatch_mut(&mut self) -> &mut Stopwatch {
        &mut self.stopwatch
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Re-samples the stopwatch; marks dirty only when the reading moved.
    pub(crate) fn refresh_elapsed(&mut self, now: Timestamp) {
        let sampled = self.stopwatch.sample(now);
        if sampled != self.shown_elapsed {
            self.shown_elapsed = sampled;
            self.dirty = true;
        }
    }
}
