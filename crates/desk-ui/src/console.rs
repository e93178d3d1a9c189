//! Terminal presentation for the intake desk.
//!
//! [`Console`] owns the output stream and the [`Theme`]. Every message the
//! session shows to the operator goes through one of its methods, so the
//! controller never formats text itself.

use desk_core::error::{DeskError, Result};
use desk_core::formatting::or_placeholder;
use desk_core::models::Patient;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::themes::Theme;

/// Menu entries in display order; the number typed selects the entry.
pub const MENU_ITEMS: [&str; 7] = [
    "1. See next patient",
    "2. Attend patient",
    "3. Show queue",
    "4. Show records",
    "5. Search patient in records",
    "6. Restart simulation",
    "7. Exit",
];

pub const EMPTY_QUEUE_FRONT: &str = "Empty queue";
pub const EMPTY_QUEUE_LISTING: &str = "Empty";
pub const EMPTY_RECORDS_LISTING: &str = "None";

/// Writes prompts and status lines to an async output stream.
pub struct Console<W> {
    out: W,
    theme: Theme,
}

impl<W: AsyncWrite + Unpin> Console<W> {
    pub fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    /// Borrow the underlying writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // ── Prompts ───────────────────────────────────────────────────────────────

    pub async fn banner(&mut self) -> Result<()> {
        let line = self.theme.paint(self.theme.banner, "🏥 Hospital intake simulation");
        self.line(&line).await
    }

    /// Print `question` followed by a space, without a newline, and flush so
    /// the operator sees it before typing.
    pub async fn prompt(&mut self, question: &str) -> Result<()> {
        let text = self.theme.paint(self.theme.prompt, question);
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b" ").await?;
        self.flush().await
    }

    pub async fn ask_count(&mut self) -> Result<()> {
        self.prompt("How many patients do you want to add?").await
    }

    /// `index` is 1-based.
    pub async fn ask_patient_name(&mut self, index: usize) -> Result<()> {
        self.prompt(&format!("Enter the name of patient {index}:")).await
    }

    pub async fn ask_search_name(&mut self) -> Result<()> {
        self.prompt("Enter the name of the patient to search:").await
    }

    /// Show the numbered menu followed by the choice prompt.
    pub async fn menu(&mut self) -> Result<()> {
        self.line("").await?;
        let header = self.theme.paint(self.theme.menu_header, "📋 Menu:");
        self.line(&header).await?;
        for item in MENU_ITEMS {
            let painted = self.theme.paint(self.theme.menu_item, item);
            self.line(&painted).await?;
        }
        self.prompt("Choose an option:").await
    }

    // ── Session outcomes ──────────────────────────────────────────────────────

    pub async fn next_patient(&mut self, front: Option<&Patient>) -> Result<()> {
        let name = front.map_or(EMPTY_QUEUE_FRONT, Patient::name);
        let text = format!("➡️ Next patient: {name}");
        self.styled(self.theme.info, &text).await
    }

    pub async fn nothing_to_attend(&mut self) -> Result<()> {
        self.styled(self.theme.warning, "⚠️ Queue is empty. Nobody to attend.")
            .await
    }

    pub async fn attended(&mut self, patient: &Patient) -> Result<()> {
        let text = format!("✅ Patient attended: {patient}");
        self.styled(self.theme.success, &text).await
    }

    pub async fn queue_listing(&mut self, listing: Option<String>) -> Result<()> {
        let text = format!(
            "📋 Current queue: {}",
            or_placeholder(listing, EMPTY_QUEUE_LISTING)
        );
        self.styled(self.theme.info, &text).await
    }

    pub async fn records_listing(&mut self, listing: Option<String>) -> Result<()> {
        let text = format!(
            "📁 Stacked records: {}",
            or_placeholder(listing, EMPTY_RECORDS_LISTING)
        );
        self.styled(self.theme.info, &text).await
    }

    pub async fn search_result(&mut self, name: &str, found: bool) -> Result<()> {
        if found {
            let text = format!("🔍 {name} is in the records.");
            self.styled(self.theme.success, &text).await
        } else {
            let text = format!("❌ {name} not found in the records.");
            self.styled(self.theme.error, &text).await
        }
    }

    pub async fn restarting(&mut self) -> Result<()> {
        self.styled(self.theme.info, "🔄 Restarting simulation...")
            .await?;
        self.line("").await
    }

    pub async fn invalid_option(&mut self) -> Result<()> {
        self.styled(self.theme.error, "❌ Invalid option.").await
    }

    pub async fn farewell(&mut self) -> Result<()> {
        self.styled(self.theme.info, "🏁 Ending simulation...").await
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    async fn styled(&mut self, style: crossterm::style::ContentStyle, text: &str) -> Result<()> {
        let painted = self.theme.paint(style, text);
        self.line(&painted).await
    }

    async fn line(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.flush().await
    }

    async fn flush(&mut self) -> Result<()> {
        self.out
            .flush()
            .await
            .map_err(|e| DeskError::Terminal(format!("failed to flush output: {e}")))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
