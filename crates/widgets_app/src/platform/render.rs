use widgets_core::{AppViewModel, CalculatorView, StopwatchView};

use super::config::Focus;

/// Renders one frame: a line per widget, the focused one marked with `>`.
pub(crate) fn render(view: &AppViewModel, focus: Focus) -> String {
    let marker = |widget: Focus| if widget == focus { '>' } else { ' ' };
    format!(
        "{} calculator  {}\n{} stopwatch   {}\n",
        marker(Focus::Calculator),
        calculator_line(&view.calculator),
        marker(Focus::Stopwatch),
        stopwatch_line(&view.stopwatch),
    )
}

fn calculator_line(view: &CalculatorView) -> String {
    if view.expression.is_empty() {
        format!("[{}]", view.display)
    } else {
        format!("{} [{}]", view.expression, view.display)
    }
}

fn stopwatch_line(view: &StopwatchView) -> String {
    let reset = if view.reset_enabled { "<Reset>" } else { "(reset)" };
    format!("{}  <{}> {}", view.elapsed, view.toggle_label, reset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgets_core::{calculator_key, update, AppState, Msg};

    #[test]
    fn initial_frame() {
        let view = AppState::new().view();
        assert_eq!(
            render(&view, Focus::Calculator),
            "> calculator  [0]\n  stopwatch   00:00:00.00  <Start> (reset)\n"
        );
    }

    #[test]
    fn pending_expression_and_focus_marker() {
        let state = "12+3".chars().fold(AppState::new(), |state, c| {
            let msg = calculator_key(&c.to_string()).unwrap();
            update(state, Msg::Calculator(msg)).0
        });
        let frame = render(&state.view(), Focus::Stopwatch);
        assert_eq!(
            frame,
            "  calculator  12 + [3]\n> stopwatch   00:00:00.00  <Start> (reset)\n"
        );
    }
}
