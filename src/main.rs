use anyhow::{Result, bail};
use clap::Parser;
use copy_button::app::AppState;
use copy_button::cli::{Cli, Commands};
use copy_button::clipboard::{ClipboardBackend, open_clipboard, open_persistent_clipboard};
use copy_button::config::Config;
use copy_button::control::{CopyControl, CopyStatus};
use copy_button::demo::{DemoHost, SAMPLE_CODE};
use copy_button::keybindings::KeybindingCache;
use copy_button::logging;
use copy_button::ui::{self, theme::Theme};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_or_warn();
    let config = Config::load()?;

    let backend = cli.clipboard.unwrap_or(config.clipboard);
    info!(version = env!("CARGO_PKG_VERSION"), %backend, "starting copybtn");

    match cli.command {
        Some(Commands::Copy { text }) => {
            handle_copy(text, backend)?;
        }
        Some(Commands::Show) => {
            handle_show();
        }
        None => {
            let surface = cli.mount.unwrap_or_else(|| config.mount.clone());
            let state = AppState::new(
                DemoHost::new(),
                open_clipboard(backend),
                Theme::from_config(&config),
                KeybindingCache::from_config(&config.keybindings),
                config.status_timeout(),
            );

            ui::mount(&surface, config.inline_height, state)?;
        }
    }

    Ok(())
}

fn handle_copy(text: Option<String>, backend: ClipboardBackend) -> Result<()> {
    let mut control = CopyControl::new(text.unwrap_or_else(|| SAMPLE_CODE.to_string()));
    let mut clipboard = open_persistent_clipboard(backend);

    let status = control.activate(clipboard.as_mut());
    if status == CopyStatus::Failed {
        bail!("{} (see ~/.copy-button/copybtn.log)", status.message());
    }

    println!("✓ {}", status.message());

    Ok(())
}

fn handle_show() {
    println!("{}", DemoHost::new().render().to_plain_text());
}
