//! dsa-tui - a terminal playground for data structures and algorithms
//!
//! Entry point: sets up the terminal, runs the event loop, and restores
//! the terminal on exit.

mod action;
mod app;
mod component;
mod components;
mod config;
mod model;
mod tui;

use anyhow::Result;
use app::App;
use crossterm::event::Event;
use tui::Tui;

fn main() -> Result<()> {
    let mut tui = Tui::new()?;
    tui.enter()?;

    let result = run(&mut tui);

    tui.exit()?;
    result
}

fn run(tui: &mut Tui) -> Result<()> {
    let mut app = App::new();
    app.init()?;

    while !app.should_quit() {
        tui.draw(|frame| app.render(frame))?;

        match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Resize(width, height)) => app.handle_resize(width, height)?,
            // No event within the poll timeout: advance animations
            _ => app.tick()?,
        }
    }

    Ok(())
}
