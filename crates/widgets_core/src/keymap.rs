//! Keyboard and button bindings for both widgets.
//!
//! Key names follow the browser's `KeyboardEvent.key` values so a host can
//! forward them untouched.
use crate::{CalculatorMsg, Digit, Operator, StopwatchEvent};

pub fn calculator_key(key: &str) -> Option<CalculatorMsg> {
    match key {
        "." => Some(CalculatorMsg::Decimal),
        "Enter" | "=" => Some(CalculatorMsg::Equals),
        "Backspace" | "Delete" => Some(CalculatorMsg::Backspace),
        "Escape" => Some(CalculatorMsg::Clear),
        _ => {
            let mut chars = key.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            if let Ok(digit) = Digit::try_from(c) {
                return Some(CalculatorMsg::Digit(digit));
            }
            Operator::from_symbol(c).map(CalculatorMsg::Operator)
        }
    }
}

/// Maps the calculator's named command buttons.
pub fn calculator_button(name: &str) -> Option<CalculatorMsg> {
    match name {
        "dot" => Some(CalculatorMsg::Decimal),
        "clear" => Some(CalculatorMsg::Clear),
        "backspace" => Some(CalculatorMsg::Backspace),
        "sign" => Some(CalculatorMsg::ToggleSign),
        "percent" => Some(CalculatorMsg::Percent),
        "equals" => Some(CalculatorMsg::Equals),
        _ => None,
    }
}

pub fn stopwatch_key(key: &str) -> Option<StopwatchEvent> {
    match key {
        " " | "Space" => Some(StopwatchEvent::Toggle),
        "r" | "R" => Some(StopwatchEvent::Reset),
        _ => None,
    }
}

pub fn stopwatch_button(name: &str) -> Option<StopwatchEvent> {
    match name {
        "toggle" => Some(StopwatchEvent::Toggle),
        "reset" => Some(StopwatchEvent::Reset),
        _ => None,
    }
}
