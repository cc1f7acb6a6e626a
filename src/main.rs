use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use vocab_practice::{
    draw_menu, draw_practice, draw_quit_confirmation, handle_practice_input, load_settings,
    load_word_list, logger, ui, AppState, PracticeSession, Translator, SETTINGS_FILE,
};

fn list_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn main() -> io::Result<()> {
    logger::init();

    let (settings_status, settings) = load_settings(Path::new(SETTINGS_FILE));
    let tr = Translator::new(&settings.language);
    let accent = ui::accent_color(&settings.accent_color);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::Menu;
    let txt_files: Vec<PathBuf> = vocab_practice::get_txt_files(Path::new(&settings.wordlist_dir));
    let mut selected_file_index: usize = 0;
    let mut load_error = false;
    let mut session: Option<PracticeSession> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(
                f,
                &settings.title,
                &txt_files,
                selected_file_index,
                load_error,
                &settings_status,
                &tr,
                accent,
            ),
            AppState::Practice => {
                if let Some(session) = &session {
                    draw_practice(f, session, &tr, accent);
                }
            }
            AppState::QuitConfirm => draw_quit_confirmation(f, &tr, accent),
        })?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        // Ctrl+C exits from any screen.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            break;
        }

        match app_state {
            AppState::Menu => match key.code {
                KeyCode::Up => {
                    if selected_file_index > 0 {
                        selected_file_index -= 1;
                    }
                }
                KeyCode::Down => {
                    if selected_file_index < txt_files.len().saturating_sub(1) {
                        selected_file_index += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(path) = txt_files.get(selected_file_index) {
                        let word_list = load_word_list(path);
                        if word_list.entries.is_empty() {
                            logger::log(&format!(
                                "File {} is empty or invalid",
                                path.display()
                            ));
                            load_error = true;
                        } else {
                            load_error = false;
                            let mut new_session = PracticeSession::new(
                                list_name(path),
                                word_list,
                                settings.show_context,
                            );
                            new_session.pick_next();
                            session = Some(new_session);
                            app_state = AppState::Practice;
                        }
                    }
                }
                KeyCode::Char('q') => break,
                _ => {}
            },
            AppState::Practice => {
                if let Some(session) = &mut session {
                    handle_practice_input(session, key, &mut app_state);
                }
            }
            AppState::QuitConfirm => match key.code {
                KeyCode::Char('y') => {
                    session = None;
                    app_state = AppState::Menu;
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    app_state = AppState::Practice;
                }
                _ => {}
            },
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
