pub mod logger;
pub mod models;
pub mod scoring;
pub mod session;
pub mod settings;
pub mod translation;
pub mod ui;
pub mod utils;
pub mod vocab;

// Re-exports for convenience
pub use models::{
    AnswerReport, AppState, Direction, Mode, PickOutcome, PracticeSession, ResultDisplay,
    VocabEntry,
};
pub use scoring::{calculate_accuracy, sequence_ratio};
pub use session::handle_practice_input;
pub use settings::{load_settings, AppSettings, SettingsStatus, SETTINGS_FILE};
pub use translation::Translator;
pub use ui::{draw_menu, draw_practice, draw_quit_confirmation};
pub use vocab::{get_txt_files, load_word_list, parse_word_list, WordList};
