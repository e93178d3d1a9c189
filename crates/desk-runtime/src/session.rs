//! Interactive intake-desk session.
//!
//! [`SessionController`] owns one [`PatientQueue`] and one [`RecordStack`]
//! and walks the operator through the intake phase and the menu loop,
//! reading one line of input per prompt. All I/O goes through the injected
//! line source and [`Console`], so a scripted byte slice drives it in tests
//! exactly as stdin does in the binary.

use desk_core::error::Result;
use desk_core::models::{parse_count, Patient};
use desk_core::queue::PatientQueue;
use desk_core::stack::RecordStack;
use desk_ui::console::Console;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite};

use crate::menu::MenuAction;

// ── SessionState ──────────────────────────────────────────────────────────────

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Asking for a patient count and then that many names.
    Intake,
    /// Showing the menu and waiting for a choice.
    Menu,
    /// Waiting for the name to look up in the records.
    SearchPrompt,
    /// Finished; nothing more is read.
    Terminated,
}

// ── SessionController ─────────────────────────────────────────────────────────

/// Drives the desk's state machine over an async line source.
pub struct SessionController<R, W> {
    queue: PatientQueue,
    records: RecordStack,
    input: R,
    console: Console<W>,
    state: SessionState,
}

impl<R, W> SessionController<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a controller that starts in [`SessionState::Intake`].
    pub fn new(queue: PatientQueue, records: RecordStack, input: R, console: Console<W>) -> Self {
        Self {
            queue,
            records,
            input,
            console,
            state: SessionState::Intake,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn queue(&self) -> &PatientQueue {
        &self.queue
    }

    pub fn records(&self) -> &RecordStack {
        &self.records
    }

    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Print the banner and run until the session is terminated, either by
    /// the exit option or by the input stream closing.
    pub async fn run(&mut self) -> Result<()> {
        self.console.banner().await?;
        while self.state != SessionState::Terminated {
            self.step().await?;
        }
        tracing::info!(
            waiting = self.queue.len(),
            treated = self.records.len(),
            "session terminated"
        );
        Ok(())
    }

    /// Run the current state once and move to the state it leads to.
    pub async fn step(&mut self) -> Result<SessionState> {
        let next = match self.state {
            SessionState::Intake => self.intake().await?,
            SessionState::Menu => self.menu().await?,
            SessionState::SearchPrompt => self.search().await?,
            SessionState::Terminated => SessionState::Terminated,
        };
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, "session state change");
        }
        self.state = next;
        Ok(next)
    }

    /// Carry out one menu action and return the state it leads to.
    pub async fn dispatch(&mut self, action: MenuAction) -> Result<SessionState> {
        tracing::debug!(?action, "menu action");
        match action {
            MenuAction::PeekNext => {
                self.console.next_patient(self.queue.front()).await?;
            }
            MenuAction::Attend => match self.queue.dequeue() {
                Some(patient) => {
                    tracing::info!(patient = %patient, "patient attended");
                    self.console.attended(&patient).await?;
                    self.records.push(patient);
                }
                None => {
                    self.console.nothing_to_attend().await?;
                }
            },
            MenuAction::ShowQueue => {
                self.console.queue_listing(self.queue.render()).await?;
            }
            MenuAction::ShowRecords => {
                self.console.records_listing(self.records.render()).await?;
            }
            MenuAction::Search => return Ok(SessionState::SearchPrompt),
            MenuAction::Restart => {
                tracing::info!(
                    discarded_waiting = self.queue.len(),
                    discarded_records = self.records.len(),
                    "restarting simulation"
                );
                self.console.restarting().await?;
                self.queue.clear();
                self.records.clear();
                return Ok(SessionState::Intake);
            }
            MenuAction::Exit => {
                self.console.farewell().await?;
                return Ok(SessionState::Terminated);
            }
            MenuAction::Invalid(input) => {
                tracing::debug!(input, "invalid menu option");
                self.console.invalid_option().await?;
            }
        }
        Ok(SessionState::Menu)
    }

    // ── Private implementation ────────────────────────────────────────────

    async fn intake(&mut self) -> Result<SessionState> {
        self.console.ask_count().await?;
        let Some(answer) = self.read_line().await? else {
            return self.end_of_input().await;
        };

        let total = parse_count(&answer);
        tracing::debug!(total, "collecting patients");

        for index in 1..=total {
            self.console.ask_patient_name(index).await?;
            let Some(name) = self.read_line().await? else {
                return self.end_of_input().await;
            };
            self.queue.enqueue(Patient::from(name));
        }

        Ok(SessionState::Menu)
    }

    async fn menu(&mut self) -> Result<SessionState> {
        self.console.menu().await?;
        match self.read_line().await? {
            Some(choice) => self.dispatch(MenuAction::parse(&choice)).await,
            None => self.end_of_input().await,
        }
    }

    async fn search(&mut self) -> Result<SessionState> {
        self.console.ask_search_name().await?;
        let Some(name) = self.read_line().await? else {
            return self.end_of_input().await;
        };

        let found = self.records.contains(&name);
        tracing::debug!(name, found, "record search");
        self.console.search_result(&name, found).await?;
        Ok(SessionState::Menu)
    }

    /// Read one line without its `\n` / `\r\n` terminator. Bytes that are not
    /// valid UTF-8 are replaced rather than rejected. `None` at end of input.
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// The input stream closed mid-prompt: end the session as if exit was chosen.
    async fn end_of_input(&mut self) -> Result<SessionState> {
        tracing::info!("input closed; ending session");
        self.console.farewell().await?;
        Ok(SessionState::Terminated)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
