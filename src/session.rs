use crate::logger;
use crate::models::{
    AnswerReport, AppState, Direction, Mode, PickOutcome, PracticeSession, ResultDisplay,
    VocabEntry,
};
use crate::scoring::calculate_accuracy;
use crate::utils::char_to_byte_index;
use crate::vocab::WordList;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

impl PracticeSession {
    /// Builds a fresh session for a newly loaded word list. The blocklist
    /// and all per-word state start empty.
    pub fn new(list_name: String, word_list: WordList, show_context: bool) -> Self {
        PracticeSession {
            entries: word_list.entries,
            labels: word_list.labels,
            failed_lines: word_list.failed_lines,
            list_name,
            mode: Mode::Mixed,
            blocked_lines: HashSet::new(),
            block_repeats: false,
            current: None,
            current_direction: Direction::LeftToRight,
            hint_shown: false,
            input_buffer: String::new(),
            cursor_position: 0,
            result: ResultDisplay::Empty,
            exhausted: false,
            show_context,
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries still selectable under the blocklist.
    pub fn remaining_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !self.blocked_lines.contains(&e.line_number))
            .count()
    }

    /// The side of the current entry shown as the prompt.
    pub fn prompt_text(&self) -> Option<&str> {
        self.current.as_ref().map(|entry| match self.current_direction {
            Direction::LeftToRight => entry.left.as_str(),
            Direction::RightToLeft => entry.right.as_str(),
        })
    }

    /// The side the user is asked to type.
    pub fn answer_text(&self) -> Option<&str> {
        self.current.as_ref().map(|entry| match self.current_direction {
            Direction::LeftToRight => entry.right.as_str(),
            Direction::RightToLeft => entry.left.as_str(),
        })
    }

    pub fn pick_next(&mut self) -> PickOutcome {
        self.pick_next_with(&mut rand::thread_rng())
    }

    /// Selects the next prompt: uniform over the unblocked pool, direction
    /// re-flipped per pick in mixed mode. The chosen line number goes into
    /// the blocklist right away when blocking is on, whatever the mode.
    pub fn pick_next_with<R: Rng>(&mut self, rng: &mut R) -> PickOutcome {
        if self.entries.is_empty() {
            logger::log("Action blocked - [PickNext]: no words loaded");
            return PickOutcome::NotLoaded;
        }

        self.hint_shown = false;

        let pool: Vec<&VocabEntry> = if self.block_repeats {
            self.entries
                .iter()
                .filter(|e| !self.blocked_lines.contains(&e.line_number))
                .collect()
        } else {
            self.entries.iter().collect()
        };

        let chosen = match pool.choose(rng) {
            Some(entry) => (*entry).clone(),
            None => {
                logger::log("No available words to display");
                self.exhausted = true;
                return PickOutcome::Exhausted;
            }
        };

        if self.block_repeats {
            self.blocked_lines.insert(chosen.line_number);
        }

        self.current_direction = match self.mode {
            Mode::LeftToRight => Direction::LeftToRight,
            Mode::RightToLeft => Direction::RightToLeft,
            Mode::Mixed => {
                if rng.gen_bool(0.5) {
                    Direction::LeftToRight
                } else {
                    Direction::RightToLeft
                }
            }
        };

        logger::log(&format!(
            "Next word: {} - {} (line {}, {})",
            chosen.left,
            chosen.right,
            chosen.line_number,
            self.current_direction_label()
        ));

        self.current = Some(chosen);
        self.exhausted = false;
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.result = ResultDisplay::Empty;

        PickOutcome::Picked
    }

    fn current_direction_label(&self) -> &'static str {
        match self.current_direction {
            Direction::LeftToRight => "left-to-right",
            Direction::RightToLeft => "right-to-left",
        }
    }

    /// Reveals the first three characters of the answer side, once per pick.
    /// Repeated calls are no-ops until the next word.
    pub fn reveal_hint(&mut self) -> Option<String> {
        if self.hint_shown || self.exhausted {
            return None;
        }
        let answer = self.answer_text()?;
        let mut hint: String = answer.chars().take(3).collect();
        hint.push_str("...");
        self.hint_shown = true;
        self.result = ResultDisplay::Hint(hint.clone());
        Some(hint)
    }

    /// Scores the entry buffer against the answer side of the current word.
    pub fn check_answer(&mut self) -> Option<AnswerReport> {
        if self.entries.is_empty() || self.exhausted {
            logger::log("Action blocked - [CheckAnswer]");
            return None;
        }
        let correct_answer = match self.answer_text() {
            Some(answer) => answer.to_string(),
            None => {
                self.result = ResultDisplay::NoWordSelected;
                return None;
            }
        };

        let accuracy = calculate_accuracy(&correct_answer, &self.input_buffer);
        logger::log(&format!(
            "Checked '{}' against '{}': {:.2}%",
            self.input_buffer, correct_answer, accuracy
        ));

        let report = AnswerReport {
            accuracy,
            correct_answer,
        };
        self.result = ResultDisplay::Score(report.clone());
        Some(report)
    }

    pub fn skip_word(&mut self) -> PickOutcome {
        if self.entries.is_empty() {
            logger::log("Action blocked - [SkipWord]");
            return PickOutcome::NotLoaded;
        }
        self.pick_next()
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.pick_next();
    }

    pub fn cycle_mode(&mut self) {
        let next = match self.mode {
            Mode::LeftToRight => Mode::RightToLeft,
            Mode::RightToLeft => Mode::Mixed,
            Mode::Mixed => Mode::LeftToRight,
        };
        self.set_mode(next);
    }

    pub fn toggle_block_repeats(&mut self) {
        self.block_repeats = !self.block_repeats;
        if self.block_repeats {
            logger::log("Blocking repeated questions enabled");
        } else {
            logger::log("Blocking repeated questions disabled");
        }
    }

    /// Empties the blocklist and immediately picks a fresh word, re-enabling
    /// submission. Reported no-op when nothing is loaded.
    pub fn clear_blocklist(&mut self) -> bool {
        if self.entries.is_empty() {
            logger::log("Action blocked - [ClearBlockList]");
            return false;
        }
        logger::log(&format!("Clearing blocked lines: {:?}", self.blocked_lines));
        self.blocked_lines.clear();
        self.exhausted = false;
        self.pick_next();
        true
    }

    /// Dumps session state to the debug log.
    pub fn log_status(&self) {
        logger::log("=== Vocabulary status ===");
        logger::log(&format!("Loaded words: {}", self.loaded_count()));
        if self.block_repeats {
            logger::log(&format!("Words remaining: {}", self.remaining_count()));
        }
        if !self.failed_lines.is_empty() {
            logger::log(&format!("Failed lines: {:?}", self.failed_lines));
        }
        logger::log(&format!("Current word: {:?}", self.current));
        logger::log(&format!("Mode: {}", self.mode.label()));
        logger::log(&format!("Hint shown: {}", self.hint_shown));
        logger::log(&format!("Blocked lines: {:?}", self.blocked_lines));
    }

    fn cursor_byte_index(&self) -> usize {
        char_to_byte_index(&self.input_buffer, self.cursor_position)
    }

    fn input_char_count(&self) -> usize {
        self.input_buffer.chars().count()
    }
}

/// Key handling for the practice screen. Plain characters edit the entry
/// buffer; Ctrl combinations drive the engine. Ctrl+C (exit) is handled by
/// the caller before dispatching here.
pub fn handle_practice_input(
    session: &mut PracticeSession,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('r') => {
                session.reveal_hint();
            }
            KeyCode::Char('n') => {
                session.skip_word();
            }
            KeyCode::Char('b') => session.toggle_block_repeats(),
            KeyCode::Char('k') => {
                session.clear_blocklist();
            }
            KeyCode::Char('t') => session.cycle_mode(),
            KeyCode::Char('g') => session.show_context = !session.show_context,
            KeyCode::Char('d') => session.log_status(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            *app_state = AppState::QuitConfirm;
        }
        KeyCode::Enter => {
            session.check_answer();
        }
        KeyCode::Tab => {
            session.skip_word();
        }
        KeyCode::Left => {
            if session.cursor_position > 0 {
                session.cursor_position -= 1;
            }
            session.cursor_position = session.cursor_position.min(session.input_char_count());
        }
        KeyCode::Right => {
            if session.cursor_position < session.input_char_count() {
                session.cursor_position += 1;
            }
        }
        KeyCode::Backspace => {
            if session.cursor_position > 0 {
                session.cursor_position -= 1;
                let at = session.cursor_byte_index();
                session.input_buffer.remove(at);
            }
        }
        KeyCode::Char(c) => {
            let at = session.cursor_byte_index();
            session.input_buffer.insert(at, c);
            session.cursor_position += 1;
        }
        _ => {}
    }
}
