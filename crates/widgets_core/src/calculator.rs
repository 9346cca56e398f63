use widget_logging::widget_debug;

use crate::{format_number, ArithmeticError, Digit, Entry, Operator, ERROR_TEXT};

#[derive(Debug, Clone, PartialEq)]
enum Readout {
    Entry(Entry),
    /// Sticky until a clear or a fresh digit/decimal entry.
    Error,
}

/// Four-function calculator with immediate operator chaining and
/// repeated-equals semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    first_operand: Option<f64>,
    second_operand: Option<f64>,
    operator: Option<Operator>,
    readout: Readout,
    last_action_was_equals: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            first_operand: None,
            second_operand: None,
            operator: None,
            readout: Readout::Entry(Entry::zero()),
            last_action_was_equals: false,
        }
    }

    pub fn has_error(&self) -> bool {
        matches!(self.readout, Readout::Error)
    }

    pub fn first_operand(&self) -> Option<f64> {
        self.first_operand
    }

    pub fn second_operand(&self) -> Option<f64> {
        self.second_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn last_action_was_equals(&self) -> bool {
        self.last_action_was_equals
    }

    pub fn display_text(&self) -> String {
        match &self.readout {
            Readout::Entry(entry) => entry.to_string(),
            Readout::Error => ERROR_TEXT.to_string(),
        }
    }

    /// Preview of the pending expression, e.g. `12 + 3`. Never mutates state.
    pub fn expression(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        if let Some(first) = self.first_operand {
            parts.push(format_operand(first));
        }
        if let Some(op) = self.operator {
            parts.push(op.to_string());
        }
        if let Some(second) = self.second_operand {
            if !self.last_action_was_equals {
                parts.push(format_operand(second));
            }
        }
        parts.join(" ")
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn input_digit(&mut self, digit: Digit) {
        self.discard_stale_state();
        if let Readout::Entry(entry) = &mut self.readout {
            entry.push_digit(digit);
        }
    }

    pub fn input_decimal(&mut self) {
        self.discard_stale_state();
        if let Readout::Entry(entry) = &mut self.readout {
            entry.push_decimal();
        }
    }

    pub fn invert_sign(&mut self) {
        if let Readout::Entry(entry) = &mut self.readout {
            entry.toggle_sign();
        }
    }

    pub fn convert_to_percent(&mut self) {
        let Readout::Entry(entry) = &self.readout else {
            return;
        };
        match Entry::from_number(entry.value() / 100.0) {
            Ok(percent) => self.readout = Readout::Entry(percent),
            Err(err) => {
                widget_debug!("Percent conversion failed: {}", err);
                self.readout = Readout::Error;
            }
        }
    }

    pub fn delete_last_char(&mut self) {
        if self.last_action_was_equals {
            return;
        }
        if let Readout::Entry(entry) = &mut self.readout {
            entry.pop();
        }
    }

    pub fn select_operator(&mut self, op: Operator) {
        let Readout::Entry(entry) = &self.readout else {
            return;
        };
        let input = entry.value();
        let has_new_input = !entry.is_zero_literal();

        // The repeat operand of `=` goes stale; the shown result counts as
        // new input for the pending operator.
        if self.last_action_was_equals {
            self.last_action_was_equals = false;
            self.second_operand = None;
        }

        let Some(first) = self.first_operand else {
            self.first_operand = Some(input);
            self.operator = Some(op);
            self.readout = Readout::Entry(Entry::zero());
            return;
        };

        match self.operator {
            Some(pending) if has_new_input => match pending.apply(first, input) {
                Ok(result) => {
                    self.first_operand = Some(result);
                    self.second_operand = None;
                    self.operator = Some(op);
                    self.readout = Readout::Entry(Entry::zero());
                }
                Err(err) => self.fail(err),
            },
            _ => self.operator = Some(op),
        }
    }

    pub fn calculate_result(&mut self) {
        let Readout::Entry(entry) = &self.readout else {
            return;
        };
        let (Some(first), Some(op)) = (self.first_operand, self.operator) else {
            return;
        };
        let input = entry.value();
        let operand = if self.last_action_was_equals {
            self.second_operand.unwrap_or(input)
        } else {
            input
        };

        let outcome = op
            .apply(first, operand)
            .and_then(|result| Entry::from_number(result).map(|shown| (result, shown)));
        match outcome {
            Ok((result, shown)) => {
                self.second_operand = Some(operand);
                self.first_operand = Some(result);
                self.readout = Readout::Entry(shown);
                self.last_action_was_equals = true;
            }
            Err(err) => self.fail(err),
        }
    }

    /// New input after an error or a result starts over from `0`.
    fn discard_stale_state(&mut self) {
        if self.has_error() || self.last_action_was_equals {
            *self = Self::new();
        }
    }

    fn fail(&mut self, err: ArithmeticError) {
        widget_debug!("Calculator entering error state: {}", err);
        self.first_operand = None;
        self.second_operand = None;
        self.operator = None;
        self.readout = Readout::Error;
    }
}

fn format_operand(value: f64) -> String {
    format_number(value).unwrap_or_else(|_| ERROR_TEXT.to_string())
}
