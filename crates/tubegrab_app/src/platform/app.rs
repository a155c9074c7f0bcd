use std::io::{self, BufRead};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use tubegrab_core::{update, AppState, Msg};
use tubegrab_engine::EngineHandle;
use tubegrab_logging::{grab_info, grab_warn, LogDestination};

use super::config;
use super::effects::EffectRunner;
use super::opener::{LinkOpener, PrintOnlyOpener, SystemOpener};
use super::ui::input::{parse_command, route, Routed, UserCommand};
use super::ui::{layout, render};

/// How long the loop waits for user input before polling the engine again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Slack on top of the engine deadline when waiting for in-flight calls.
const GRACE: Duration = Duration::from_secs(1);

pub fn run_app() -> anyhow::Result<()> {
    let config_path = config::config_path();
    let config = config::load_config(&config_path)?;
    let destination = if config.log_to_file {
        LogDestination::File
    } else {
        LogDestination::Terminal
    };
    tubegrab_logging::initialize(destination, config.log_level()?);
    grab_info!("Starting with config {:?}", config);

    let settings = config.service_settings();
    let engine =
        EngineHandle::from_settings(&settings).context("failed to start the service engine")?;
    let opener: Box<dyn LinkOpener> = if config.open_links {
        Box::new(SystemOpener)
    } else {
        Box::new(PrintOnlyOpener)
    };
    let runner = EffectRunner::new(engine, opener);

    let (cmd_tx, cmd_rx) = mpsc::channel::<UserCommand>();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if cmd_tx.send(parse_command(&line)).is_err() {
                return;
            }
        }
        // Dropping the sender tells the loop that input is exhausted.
    });

    print_lines(layout::banner());
    let mut state = AppState::new();
    print_lines(render::render(&state.view()));

    loop {
        while let Some(msg) = runner.poll() {
            state = dispatch(state, msg, &runner);
        }
        render_if_dirty(&mut state);

        let command = match cmd_rx.recv_timeout(POLL_INTERVAL) {
            Ok(command) => command,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => {
                grab_info!("End of input");
                finish_in_flight(state, &runner, settings.response_deadline + GRACE);
                break;
            }
        };

        match route(command, &state.view()) {
            Routed::Forward(msgs) => {
                for msg in msgs {
                    state = dispatch(state, msg, &runner);
                }
                render_if_dirty(&mut state);
            }
            Routed::Refuse(reason) => println!("{reason}"),
            Routed::Help => print_lines(layout::help_lines()),
            Routed::Quit => break,
            Routed::Ignore => {}
        }
    }

    grab_info!("Exiting");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (state, effects) = update(state, msg);
    runner.run(effects);
    state
}

/// Waits until no call is in flight, so every started operation reports its
/// outcome before the app exits. Gives up after `limit`.
fn finish_in_flight(mut state: AppState, runner: &EffectRunner, limit: Duration) -> AppState {
    let give_up_at = Instant::now() + limit;
    while state.status().is_busy() {
        let now = Instant::now();
        if now >= give_up_at {
            grab_warn!("Exiting with {:?} still in flight", state.status());
            break;
        }
        if let Some(msg) = runner.wait(POLL_INTERVAL.min(give_up_at - now)) {
            state = dispatch(state, msg, runner);
            render_if_dirty(&mut state);
        }
    }
    state
}

fn render_if_dirty(state: &mut AppState) {
    if state.consume_dirty() {
        print_lines(render::render(&state.view()));
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
