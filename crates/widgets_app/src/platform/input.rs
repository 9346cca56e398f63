//! Turns stdin lines into widget commands.
//!
//! Tokens are whitespace separated. A token is a shell command (`:calc`,
//! `:watch`, `:hide`, `:show`, `:quit`), a key name (`Enter`, `Escape`,
//! `Space`, ...), a button name (`sign`, `percent`, `reset`, ...), or else a
//! run of single-character keys such as `12+3=`.
use widget_logging::widget_warn;
use widgets_core::{
    calculator_button, calculator_key, stopwatch_button, stopwatch_key, CalculatorMsg,
    StopwatchEvent,
};

use super::config::Focus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Calculator(CalculatorMsg),
    Stopwatch(StopwatchEvent),
    Focus(Focus),
    Quit,
}

/// Parses one line. Focus changes apply to the tokens that follow them.
pub(crate) fn parse_line(line: &str, mut focus: Focus) -> Vec<Command> {
    let mut commands = Vec::new();
    for token in line.split_whitespace() {
        if let Some(command) = shell_command(token) {
            if let Command::Focus(next) = command {
                focus = next;
            }
            commands.push(command);
            continue;
        }
        match focus {
            Focus::Calculator => parse_calculator_token(token, &mut commands),
            Focus::Stopwatch => parse_stopwatch_token(token, &mut commands),
        }
    }
    commands
}

fn shell_command(token: &str) -> Option<Command> {
    match token {
        ":calc" => Some(Command::Focus(Focus::Calculator)),
        ":watch" => Some(Command::Focus(Focus::Stopwatch)),
        ":hide" => Some(Command::Stopwatch(StopwatchEvent::Suspend)),
        ":show" => Some(Command::Stopwatch(StopwatchEvent::Resume)),
        ":quit" | ":q" => Some(Command::Quit),
        _ => None,
    }
}

fn parse_calculator_token(token: &str, commands: &mut Vec<Command>) {
    if let Some(msg) = calculator_key(token).or_else(|| calculator_button(token)) {
        commands.push(Command::Calculator(msg));
        return;
    }
    for c in token.chars() {
        match calculator_key(c.encode_utf8(&mut [0; 4])) {
            Some(msg) => commands.push(Command::Calculator(msg)),
            None => widget_warn!("Ignoring unbound calculator key {:?}", c),
        }
    }
}

fn parse_stopwatch_token(token: &str, commands: &mut Vec<Command>) {
    if let Some(event) = stopwatch_key(token).or_else(|| stopwatch_button(token)) {
        commands.push(Command::Stopwatch(event));
        return;
    }
    for c in token.chars() {
        match stopwatch_key(c.encode_utf8(&mut [0; 4])) {
            Some(event) => commands.push(Command::Stopwatch(event)),
            None => widget_warn!("Ignoring unbound stopwatch key {:?}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgets_core::{Digit, Operator};

    fn digit(d: u8) -> Command {
        Command::Calculator(CalculatorMsg::Digit(Digit::new(d).unwrap()))
    }

    #[test]
    fn runs_of_keys_are_split_into_presses() {
        let commands = parse_line("12+3=", Focus::Calculator);
        assert_eq!(
            commands,
            vec![
                digit(1),
                digit(2),
                Command::Calculator(CalculatorMsg::Operator(Operator::Add)),
                digit(3),
                Command::Calculator(CalculatorMsg::Equals),
            ]
        );
    }

    #[test]
    fn named_keys_and_buttons() {
        let commands = parse_line("7 sign Escape percent", Focus::Calculator);
        assert_eq!(
            commands,
            vec![
                digit(7),
                Command::Calculator(CalculatorMsg::ToggleSign),
                Command::Calculator(CalculatorMsg::Clear),
                Command::Calculator(CalculatorMsg::Percent),
            ]
        );
    }

    #[test]
    fn focus_switch_applies_to_later_tokens() {
        let commands = parse_line("5 :watch Space r :calc 5", Focus::Calculator);
        assert_eq!(
            commands,
            vec![
                digit(5),
                Command::Focus(Focus::Stopwatch),
                Command::Stopwatch(StopwatchEvent::Toggle),
                Command::Stopwatch(StopwatchEvent::Reset),
                Command::Focus(Focus::Calculator),
                digit(5),
            ]
        );
    }

    #[test]
    fn visibility_commands_ignore_focus() {
        assert_eq!(
            parse_line(":hide :show :q", Focus::Calculator),
            vec![
                Command::Stopwatch(StopwatchEvent::Suspend),
                Command::Stopwatch(StopwatchEvent::Resume),
                Command::Quit,
            ]
        );
    }

    #[test]
    fn unbound_keys_are_dropped() {
        assert!(parse_line("abc", Focus::Calculator).is_empty());
        assert!(parse_line("xyz", Focus::Stopwatch).is_empty());
    }
}
