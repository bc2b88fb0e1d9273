//! simplist-tui - a single-screen terminal task list
//!
//! This is the main entry point. It uses the Component Architecture
//! pattern from ratatui: events become Actions, Actions drive state.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod store;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::store::{DataProvider, JsonStore};
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use std::time::Duration;

fn main() -> Result<()> {
    // Config is optional; defaults put the store under ~/.simplist-tui.
    // First run writes the defaults out so they are there to edit.
    let config = match Config::load() {
        Some(config) => config,
        None => {
            let config = Config::default();
            let _ = config.save();
            config
        }
    };
    let data_path = config
        .resolved_data_path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let store = JsonStore::open(data_path, config.use_12_hour_clock);

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Create app state with the store injected
    let mut app = App::new(store);
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Run the main application loop
fn run_app<P: DataProvider>(tui: &mut Tui, app: &mut App<P>) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                eprintln!("Draw error: {}", e);
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action; an action might produce a follow-up
            if let Some(action) = action {
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
