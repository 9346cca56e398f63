use crate::StopwatchPhase;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalculatorView {
    /// Pending expression preview, e.g. `12 +`.
    pub expression: String,
    pub display: String,
    pub has_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopwatchView {
    /// `HH:MM:SS.CC`
    pub elapsed: String,
    pub phase: StopwatchPhase,
    pub toggle_label: &'static str,
    pub reset_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub calculator: CalculatorView,
    pub stopwatch: StopwatchView,
    pub dirty: bool,
}
