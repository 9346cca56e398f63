//! Widget core: pure calculator and stopwatch state machines plus view-model helpers.
mod calculator;
mod clock;
mod effect;
mod entry;
mod error;
mod keymap;
mod msg;
mod number;
mod operator;
mod state;
mod stopwatch;
mod update;
mod view_model;

pub use calculator::Calculator;
pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use effect::Effect;
pub use entry::{Entry, ParseEntryError};
pub use error::{ArithmeticError, InvalidDigit};
pub use keymap::{
    calculator_button, calculator_key, stopwatch_button, stopwatch_key,
};
pub use msg::{CalculatorMsg, Msg, StopwatchEvent};
pub use number::{format_number, round_for_display, Digit, ERROR_TEXT};
pub use operator::Operator;
pub use state::AppState;
pub use stopwatch::{format_elapsed, Stopwatch, StopwatchPhase};
pub use update::update;
pub use view_model::{AppViewModel, CalculatorView, StopwatchView};
