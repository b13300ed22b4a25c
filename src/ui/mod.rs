pub mod components;
pub mod theme;
pub mod view;

use crate::app::{AppState, event::handle_event};
use anyhow::{Result, bail};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Named display surfaces a view can be mounted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountSurface {
    /// Full screen, on the terminal's alternate screen
    Root,
    /// A fixed number of rows below the shell prompt
    Inline,
}

impl fmt::Display for MountSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountSurface::Root => write!(f, "root"),
            MountSurface::Inline => write!(f, "inline"),
        }
    }
}

impl FromStr for MountSurface {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "root" => Ok(MountSurface::Root),
            "inline" => Ok(MountSurface::Inline),
            _ => bail!("Unknown mount surface '{}' (expected 'root' or 'inline')", s),
        }
    }
}

struct TerminalGuard {
    surface: MountSurface,
    keyboard_enhancement: bool,
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        if self.keyboard_enhancement {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout, DisableMouseCapture);
        let _ = disable_raw_mode();
        if self.surface == MountSurface::Root {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = stdout.flush();
    }
}

/// Attach the app to the surface named `surface_id` and run until the user
/// quits. The terminal is restored on every exit path.
pub fn mount(surface_id: &str, inline_height: u16, mut state: AppState) -> Result<()> {
    let surface: MountSurface = surface_id.parse()?;
    info!(%surface, "mounting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if surface == MountSurface::Root {
        execute!(stdout, EnterAlternateScreen)?;
    }

    let supports_keyboard_enhancement = execute!(
        stdout,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok();

    let _guard = TerminalGuard {
        surface,
        keyboard_enhancement: supports_keyboard_enhancement,
    };

    execute!(stdout, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let viewport = match surface {
        MountSurface::Root => Viewport::Fullscreen,
        MountSurface::Inline => Viewport::Inline(inline_height.max(1)),
    };
    let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })?;

    let result = run_app(&mut terminal, &mut state);
    state.release_clipboard();
    terminal.show_cursor()?;

    info!("unmounted");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        state.clear_expired_status_message();

        let mut button_area = None;
        terminal.draw(|f| {
            button_area = components::render(f, state);
        })?;
        state.button_area = button_area;

        if event::poll(Duration::from_millis(100))? {
            handle_event(event::read()?, state);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
