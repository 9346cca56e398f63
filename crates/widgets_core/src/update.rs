use widget_logging::widget_trace;

use crate::{AppState, CalculatorMsg, Effect, Msg, StopwatchEvent, StopwatchPhase, Timestamp};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Calculator(msg) => {
            let before = state.calculator().clone();
            apply_calculator(&mut state, msg);
            if *state.calculator() != before {
                state.mark_dirty();
            } else {
                widget_trace!("Calculator ignored {:?}", msg);
            }
            Vec::new()
        }
        Msg::Stopwatch { event, at } => apply_stopwatch(&mut state, event, at),
        Msg::Tick { at } => {
            if state.stopwatch().is_running() {
                state.refresh_elapsed(at);
            }
            Vec::new()
        }
    };

    (state, effects)
}

fn apply_calculator(state: &mut AppState, msg: CalculatorMsg) {
    let calculator = state.calculator_mut();
    match msg {
        CalculatorMsg::Digit(digit) => calculator.input_digit(digit),
        CalculatorMsg::Decimal => calculator.input_decimal(),
        CalculatorMsg::Operator(op) => calculator.select_operator(op),
        CalculatorMsg::Clear => calculator.clear(),
        CalculatorMsg::Backspace => calculator.delete_last_char(),
        CalculatorMsg::ToggleSign => calculator.invert_sign(),
        CalculatorMsg::Percent => calculator.convert_to_percent(),
        CalculatorMsg::Equals => calculator.calculate_result(),
    }
}

fn apply_stopwatch(state: &mut AppState, event: StopwatchEvent, at: Timestamp) -> Vec<Effect> {
    let watch = state.stopwatch_mut();
    let (changed, effect) = match event {
        StopwatchEvent::Start => {
            let started = watch.start(at);
            (started, started.then_some(Effect::StartTicking))
        }
        StopwatchEvent::Pause => {
            let paused = watch.pause(at);
            (paused, paused.then_some(Effect::StopTicking))
        }
        StopwatchEvent::Toggle => match watch.toggle(at) {
            StopwatchPhase::Running => (true, Some(Effect::StartTicking)),
            StopwatchPhase::Paused | StopwatchPhase::Idle => (true, Some(Effect::StopTicking)),
        },
        StopwatchEvent::Reset => (watch.reset(), None),
        StopwatchEvent::Suspend => {
            let suspended = watch.suspend(at);
            (suspended, suspended.then_some(Effect::StopTicking))
        }
        StopwatchEvent::Resume => {
            let resumed = watch.resume(at);
            (resumed, resumed.then_some(Effect::StartTicking))
        }
    };

    if changed {
        // Phase changes move the toggle label even when the reading does not.
        state.mark_dirty();
    } else {
        widget_trace!("Stopwatch ignored {:?}", event);
    }
    state.refresh_elapsed(at);
    effect.into_iter().collect()
}
