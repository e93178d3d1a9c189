mod bootstrap;

use std::io::IsTerminal;

use anyhow::Result;
use desk_core::queue::PatientQueue;
use desk_core::settings::Settings;
use desk_core::stack::RecordStack;
use desk_runtime::session::SessionController;
use desk_ui::console::Console;
use desk_ui::themes::Theme;
use tokio::io::BufReader;

/// Exit status used when the operator interrupts with Ctrl+C.
const INTERRUPTED_EXIT_CODE: i32 = 130;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Hospital desk v{} starting", env!("CARGO_PKG_VERSION"));

    let use_color = settings.use_color(std::io::stdout().is_terminal());
    tracing::debug!(theme = %settings.theme, use_color, "resolved theme");

    let console = Console::new(tokio::io::stdout(), Theme::from_color_flag(use_color));
    let input = BufReader::new(tokio::io::stdin());
    let mut session =
        SessionController::new(PatientQueue::new(), RecordStack::new(), input, console);

    // Ctrl+C stops the session between or during prompts. A pending stdin
    // read cannot be cancelled, so the process exits directly afterwards.
    tokio::select! {
        result = session.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; ending session");
            let mut console =
                Console::new(tokio::io::stdout(), Theme::from_color_flag(use_color));
            console.farewell().await?;
            std::process::exit(INTERRUPTED_EXIT_CODE);
        }
    }

    Ok(())
}
