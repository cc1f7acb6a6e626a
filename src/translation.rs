//! Display-string lookup keyed by dot-separated paths, e.g.
//! `t("practice.result.percent")`. English is the default table; Polish is
//! selected with `"Language": "pl"` in the settings file. A missing path
//! returns the placeholder `"[path]"` so a typo never panics mid-session.

use crate::logger;
use serde_json::{json, Value};

lazy_static::lazy_static! {
    static ref TRANSLATIONS_EN: Value = json!({
        "menu": {
            "title": "Vocabulary Practice",
            "select_list": "Select a word list",
            "no_files": "No .txt files found",
            "help": {
                "navigate": " Navigate  ",
                "select": " Select  ",
                "quit": " Quit"
            }
        },
        "practice": {
            "question": {
                "default": "Load a file to start",
                "file_error": "The file is empty or invalid!",
                "translate_it": "Translate it:",
                "no_words": "No available words to display!",
                "not_loaded": "No words loaded!"
            },
            "line_info": "Randomly selected line from the file:",
            "context": "Context:",
            "entry_placeholder": "Enter the translation here",
            "result": {
                "default": "Result will appear here",
                "percent": "Accuracy percentage:",
                "correct": "Correct answer:",
                "no_word": "No word to check!",
                "hint": "Hint:"
            },
            "loaded": "Loaded:",
            "remaining": "Remaining:",
            "blocking_on": "blocking repeats",
            "mode": "Mode:"
        },
        "quit_confirm": {
            "title": "Quit to Menu",
            "message": "Return to the word-list menu?"
        }
    });

    static ref TRANSLATIONS_PL: Value = json!({
        "menu": {
            "title": "Nauka słówek",
            "select_list": "Wybierz listę słówek",
            "no_files": "Nie znaleziono plików .txt",
            "help": {
                "navigate": " Nawigacja  ",
                "select": " Wybierz  ",
                "quit": " Zakończ"
            }
        },
        "practice": {
            "question": {
                "default": "Załaduj plik, aby rozpocząć",
                "file_error": "Plik jest pusty lub niewłaściwy!",
                "translate_it": "Przetłumacz to:",
                "no_words": "Brak dostępnych słówek do wyświetlenia!",
                "not_loaded": "Brak załadowanych słówek!"
            },
            "line_info": "Losowo wybrana linia pliku:",
            "context": "Kontekst:",
            "entry_placeholder": "Wpisz tutaj tłumaczenie",
            "result": {
                "default": "Tu będzie wynik",
                "percent": "Procent poprawności:",
                "correct": "Poprawna odpowiedź:",
                "no_word": "Brak słowa do sprawdzenia!",
                "hint": "Podpowiedź:"
            },
            "loaded": "Załadowano:",
            "remaining": "Pozostało:",
            "blocking_on": "blokada powtórzeń",
            "mode": "Tryb:"
        },
        "quit_confirm": {
            "title": "Powrót do menu",
            "message": "Wrócić do menu wyboru listy?"
        }
    });
}

#[derive(Debug, Clone, Copy)]
pub struct Translator {
    language: &'static str,
}

impl Translator {
    /// Unrecognized codes fall back to English.
    pub fn new(language_code: &str) -> Self {
        let language = match language_code {
            "pl" => "pl",
            _ => "en",
        };
        Translator { language }
    }

    fn table(&self) -> &'static Value {
        match self.language {
            "pl" => &TRANSLATIONS_PL,
            _ => &TRANSLATIONS_EN,
        }
    }

    /// Looks up a display string by dot-separated path. Returns `"[path]"`
    /// on a miss.
    pub fn t(&self, path: &str) -> String {
        let mut value = self.table();
        for key in path.split('.') {
            match value.get(key) {
                Some(next) => value = next,
                None => {
                    logger::log(&format!("Translation not found for path: {}", path));
                    return format!("[{}]", path);
                }
            }
        }
        match value.as_str() {
            Some(s) => s.to_string(),
            None => {
                logger::log(&format!("Translation path is not a string: {}", path));
                format!("[{}]", path)
            }
        }
    }
}
