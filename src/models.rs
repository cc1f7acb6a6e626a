use std::collections::HashSet;

/// One left/right vocabulary pair with the file line it came from and the
/// optional `$ context $` group it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabEntry {
    pub left: String,
    pub right: String,
    pub line_number: usize,
    pub context: Option<String>,
}

/// Which side of the current entry is shown as the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// Translation mode selected by the user. `Mixed` flips a fresh coin for the
/// direction on every pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    LeftToRight,
    RightToLeft,
    Mixed,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::LeftToRight => "left-to-right",
            Mode::RightToLeft => "right-to-left",
            Mode::Mixed => "mixed",
        }
    }
}

/// What a `pick_next` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickOutcome {
    Picked,
    /// No file loaded yet.
    NotLoaded,
    /// Every entry is blocked; submission stays disabled until the blocklist
    /// is cleared.
    Exhausted,
}

/// Result of scoring a submitted answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerReport {
    pub accuracy: f64,
    pub correct_answer: String,
}

/// What the result area of the practice screen is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultDisplay {
    #[default]
    Empty,
    Hint(String),
    Score(AnswerReport),
    NoWordSelected,
}

#[derive(Debug)]
pub struct PracticeSession {
    pub entries: Vec<VocabEntry>,
    /// Display labels from the first file line, e.g. ("English", "Polish").
    pub labels: (String, String),
    /// Line numbers that could not be parsed, kept for diagnostics.
    pub failed_lines: Vec<usize>,
    pub list_name: String,
    pub mode: Mode,
    pub blocked_lines: HashSet<usize>,
    pub block_repeats: bool,
    pub current: Option<VocabEntry>,
    pub current_direction: Direction,
    pub hint_shown: bool,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub result: ResultDisplay,
    /// Set when the selection pool ran dry; answer submission is disabled
    /// until the blocklist is cleared.
    pub exhausted: bool,
    pub show_context: bool,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Practice,
    QuitConfirm,
}
