use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use widget_logging::{widget_info, widget_warn, LevelFilter};
use widgets_core::{update, AppState, Clock, Msg, SystemClock};

use super::config::{self, AppConfig, Focus};
use super::effects::{EffectRunner, EffectSink};
use super::input::{parse_line, Command};
use super::render::render;

/// Everything the dispatch loop reacts to.
pub(crate) enum ShellEvent {
    Line(String),
    Tick,
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("resolving working directory")?;
    let loaded = config::load_config(&cwd);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    widget_logging::initialize(config.log_destination(), LevelFilter::Info);
    if let Err(err) = &loaded {
        widget_warn!("{}; using defaults", err);
    }
    widget_info!(
        "Starting widgets shell: tick {} ms, focus {:?}",
        config.tick_interval_ms,
        config.start_focus
    );

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    spawn_stdin_reader(event_tx.clone());
    let runner = EffectRunner::new(tick_interval(&config), event_tx);

    let mut shell = Shell::new(SystemClock::new(), runner, io::stdout(), config.start_focus);
    shell.render_frame()?;

    for event in event_rx {
        let keep_going = match event {
            ShellEvent::Line(line) => shell.handle_line(&line)?,
            ShellEvent::Tick => {
                shell.dispatch(Msg::Tick {
                    at: shell.clock.now(),
                })?;
                true
            }
            ShellEvent::InputClosed => false,
        };
        if !keep_going {
            break;
        }
    }

    widget_info!("Widgets shell exiting");
    Ok(())
}

fn tick_interval(config: &AppConfig) -> Duration {
    Duration::from_millis(config.tick_interval_ms.max(1))
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if event_tx.send(ShellEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    widget_warn!("Failed to read stdin: {}", err);
                    break;
                }
            }
        }
        let _ = event_tx.send(ShellEvent::InputClosed);
    });
}

/// Owns the widget state and routes commands through `update`.
pub(crate) struct Shell<C, S, W> {
    state: AppState,
    focus: Focus,
    clock: C,
    effects: S,
    out: W,
}

impl<C: Clock, S: EffectSink, W: Write> Shell<C, S, W> {
    pub(crate) fn new(clock: C, effects: S, out: W, focus: Focus) -> Self {
        Self {
            state: AppState::new(),
            focus,
            clock,
            effects,
            out,
        }
    }

    /// Returns false once the user asked to quit.
    pub(crate) fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        for command in parse_line(line, self.focus) {
            match command {
                Command::Calculator(msg) => self.dispatch(Msg::Calculator(msg))?,
                Command::Stopwatch(event) => {
                    let at = self.clock.now();
                    self.dispatch(Msg::Stopwatch { event, at })?;
                }
                Command::Focus(focus) => {
                    if self.focus != focus {
                        self.focus = focus;
                        self.render_frame()?;
                    }
                }
                Command::Quit => return Ok(false),
            }
        }
        Ok(true)
    }

    pub(crate) fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if !effects.is_empty() {
            self.effects.enqueue(effects);
        }
        if was_dirty {
            self.render_frame()?;
        }
        Ok(())
    }

    pub(crate) fn render_frame(&mut self) -> io::Result<()> {
        let frame = render(&self.state.view(), self.focus);
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgets_core::{Effect, ManualClock};

    type TestShell<'a> = Shell<&'a ManualClock, Vec<Effect>, Vec<u8>>;

    fn shell(clock: &ManualClock) -> TestShell<'_> {
        Shell::new(clock, Vec::new(), Vec::new(), Focus::Calculator)
    }

    fn last_frame(shell: &TestShell<'_>) -> String {
        let text = String::from_utf8(shell.out.clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        lines[lines.len().saturating_sub(2)..].join("\n")
    }

    #[test]
    fn calculator_line_renders_result() {
        let clock = ManualClock::new();
        let mut shell = shell(&clock);
        assert!(shell.handle_line("4+5*2=").unwrap());
        assert!(last_frame(&shell).starts_with("> calculator  18 * [18]"));
    }

    #[test]
    fn ignored_input_does_not_render() {
        let clock = ManualClock::new();
        let mut shell = shell(&clock);
        shell.handle_line("sign").unwrap();
        assert!(shell.out.is_empty());
    }

    #[test]
    fn stopwatch_commands_use_the_clock_and_forward_effects() {
        let clock = ManualClock::new();
        let mut shell = shell(&clock);
        shell.handle_line(":watch Space").unwrap();
        clock.advance(Duration::from_millis(1_000));
        shell.handle_line(":hide").unwrap();
        clock.advance(Duration::from_millis(4_000));
        shell.handle_line(":show").unwrap();
        clock.advance(Duration::from_millis(200));
        shell.handle_line("Space").unwrap();

        assert_eq!(
            shell.effects,
            vec![
                Effect::StartTicking,
                Effect::StopTicking,
                Effect::StartTicking,
                Effect::StopTicking,
            ]
        );
        assert!(last_frame(&shell).ends_with("00:00:01.20  <Resume> <Reset>"));
    }

    #[test]
    fn ticks_refresh_running_stopwatch() {
        let clock = ManualClock::new();
        let mut shell = shell(&clock);
        shell.handle_line(":watch Space").unwrap();
        clock.advance(Duration::from_millis(2_340));
        shell.dispatch(Msg::Tick { at: clock.now() }).unwrap();
        assert!(last_frame(&shell).ends_with("00:00:02.34  <Pause> (reset)"));
    }

    #[test]
    fn quit_stops_processing() {
        let clock = ManualClock::new();
        let mut shell = shell(&clock);
        assert!(!shell.handle_line("1 :quit 2").unwrap());
        assert!(last_frame(&shell).starts_with("> calculator  [1]"));
    }
}
