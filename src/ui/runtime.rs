use crate::config::Config;
use crate::generation::GenerationService;
use crate::shutdown::{wait_for_signal, ShutdownHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::form::FormState;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the form until the user quits or a shutdown signal arrives.
///
/// The loop owns all form state; the service call runs on `runtime` and
/// reports back through the event channel.
pub fn run<S: GenerationService>(
    config: &Config,
    initial: FormState,
    service: Arc<S>,
    runtime: Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let shutdown = ShutdownHandle::new();
    let events = EventHandler::new(tick_rate, shutdown.clone());

    let signal_tx = events.sender();
    let signal_shutdown = shutdown.clone();
    runtime.spawn(async move {
        wait_for_signal().await;
        signal_shutdown.signal();
        let _ = signal_tx.send(AppEvent::Shutdown);
    });

    let mut app = App::new(
        initial,
        service,
        config.service.endpoint(),
        runtime,
        events.sender(),
    );
    tracing::info!(endpoint = app.endpoint(), "Form ready");

    loop {
        terminal.draw(|frame| draw(frame, app.form_state(), app.endpoint()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Generation(outcome)) => app.on_generation(outcome),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    tracing::info!("Form closed");
    Ok(())
}
