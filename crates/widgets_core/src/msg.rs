use crate::{Digit, Operator, Timestamp};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Key or button press on the calculator.
    Calculator(CalculatorMsg),
    /// Stopwatch control, stamped with the time it happened.
    Stopwatch { event: StopwatchEvent, at: Timestamp },
    /// Periodic sample request while the stopwatch is ticking.
    Tick { at: Timestamp },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorMsg {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Clear,
    Backspace,
    ToggleSign,
    Percent,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwatchEvent {
    Start,
    Pause,
    /// Start/Pause on a single control (space bar).
    Toggle,
    Reset,
    /// Host stopped delivering ticks, e.g. the view was hidden.
    Suspend,
    /// Host delivers ticks again.
    Resume,
}
