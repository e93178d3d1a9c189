//! Menu choices understood by the session controller.

/// One operator choice from the numbered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// 1 – show who is next without removing them.
    PeekNext,
    /// 2 – move the front patient from the queue onto the records stack.
    Attend,
    /// 3 – list the waiting queue.
    ShowQueue,
    /// 4 – list the treated records.
    ShowRecords,
    /// 5 – ask for a name and look it up in the records.
    Search,
    /// 6 – empty both structures and go back to intake.
    Restart,
    /// 7 – end the session.
    Exit,
    /// Anything else, kept verbatim for logging.
    Invalid(String),
}

impl MenuAction {
    /// Map a typed line to an action. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => Self::PeekNext,
            "2" => Self::Attend,
            "3" => Self::ShowQueue,
            "4" => Self::ShowRecords,
            "5" => Self::Search,
            "6" => Self::Restart,
            "7" => Self::Exit,
            _ => Self::Invalid(input.to_string()),
        }
    }
}
