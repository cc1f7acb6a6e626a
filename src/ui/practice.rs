use crate::models::{Direction, PracticeSession, ResultDisplay};
use crate::translation::Translator;
use crate::ui::layout::calculate_practice_chunks;
use crate::utils::cursor_display_column;
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn direction_arrow(session: &PracticeSession) -> String {
    let (left, right) = &session.labels;
    match session.current_direction {
        Direction::LeftToRight => format!("{} ► {}", left, right),
        Direction::RightToLeft => format!("{} ► {}", right, left),
    }
}

fn header_text(session: &PracticeSession, tr: &Translator) -> String {
    let mut text = format!(
        "{} - {} {}",
        session.list_name,
        tr.t("practice.loaded"),
        session.loaded_count()
    );
    if session.block_repeats {
        text.push_str(&format!(
            " | {} {} ({})",
            tr.t("practice.remaining"),
            session.remaining_count(),
            tr.t("practice.blocking_on")
        ));
    }
    text.push_str(&format!(
        " | {} {}",
        tr.t("practice.mode"),
        session.mode.label()
    ));
    text
}

pub fn draw_practice(f: &mut Frame, session: &PracticeSession, tr: &Translator, accent: Color) {
    let layout = calculate_practice_chunks(f.area());

    let header = Paragraph::new(header_text(session, tr))
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let mut question = Text::default();
    if session.exhausted {
        question.push_line(Line::from(Span::styled(
            tr.t("practice.question.no_words"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    } else if let Some(prompt) = session.prompt_text() {
        question.push_line(Line::from(vec![
            Span::from(format!("{} ", tr.t("practice.question.translate_it"))),
            Span::styled(
                prompt.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        question.push_line(Line::from(Span::styled(
            direction_arrow(session),
            Style::default().fg(Color::DarkGray),
        )));
        if session.show_context {
            if let Some(context) = session.current.as_ref().and_then(|e| e.context.as_deref()) {
                question.push_line(Line::from(Span::styled(
                    format!("{} {}", tr.t("practice.context"), context),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }
        if let Some(entry) = &session.current {
            question.push_line(Line::from(Span::styled(
                format!("{} {}", tr.t("practice.line_info"), entry.line_number),
                Style::default().fg(Color::DarkGray),
            )));
        }
    } else {
        question.push_line(Line::from(tr.t("practice.question.not_loaded")));
    }

    let question_widget = Paragraph::new(question)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(question_widget, layout.question_area);

    let input_text = if session.input_buffer.is_empty() {
        Text::from(Span::styled(
            tr.t("practice.entry_placeholder"),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(session.input_buffer.as_str())
    };
    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(input, layout.input_area);

    if !session.exhausted {
        let cursor_x = layout.input_area.x
            + 1
            + cursor_display_column(&session.input_buffer, session.cursor_position) as u16;
        let cursor_y = layout.input_area.y + 1;
        f.set_cursor_position((cursor_x, cursor_y));
    }

    let result_text = match &session.result {
        ResultDisplay::Empty => Text::from(Span::styled(
            tr.t("practice.result.default"),
            Style::default().fg(Color::DarkGray),
        )),
        ResultDisplay::Hint(hint) => Text::from(Line::from(vec![
            Span::styled(
                format!("{} ", tr.t("practice.result.hint")),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(hint.as_str()),
        ])),
        ResultDisplay::Score(report) => {
            let mut text = Text::default();
            text.push_line(Line::from(vec![
                Span::from(format!("{} ", tr.t("practice.result.percent"))),
                Span::styled(
                    format!("{:.2}%", report.accuracy),
                    Style::default()
                        .fg(if report.accuracy >= 100.0 {
                            Color::Green
                        } else {
                            Color::Yellow
                        })
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            text.push_line(Line::from(vec![
                Span::from(format!("{} ", tr.t("practice.result.correct"))),
                Span::styled(
                    report.correct_answer.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            text
        }
        ResultDisplay::NoWordSelected => Text::from(Span::styled(
            tr.t("practice.result.no_word"),
            Style::default().fg(Color::Red),
        )),
    };
    let result = Paragraph::new(result_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(result, layout.result_area);

    let key_style = Style::default().fg(accent).add_modifier(Modifier::BOLD);
    let help_text = vec![
        Line::from(vec![
            Span::styled("Enter", key_style),
            Span::from(" Check  "),
            Span::styled("Tab", key_style),
            Span::from(" Skip  "),
            Span::styled("Ctrl+R", key_style),
            Span::from(" Hint  "),
            Span::styled("Ctrl+T", key_style),
            Span::from(" Mode  "),
            Span::styled("Esc", key_style),
            Span::from(" Menu"),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+B", key_style),
            Span::from(" Block repeats  "),
            Span::styled("Ctrl+K", key_style),
            Span::from(" Clear blocklist  "),
            Span::styled("Ctrl+G", key_style),
            Span::from(" Context  "),
            Span::styled("Ctrl+C", key_style),
            Span::from(" Exit"),
        ]),
    ];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_quit_confirmation(f: &mut Frame, tr: &Translator, accent: Color) {
    let chunks = Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new(tr.t("quit_confirm.title"))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new(tr.t("quit_confirm.message"))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No  "),
        Span::styled(
            "Ctrl+C",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::parse_word_list;

    fn session() -> PracticeSession {
        let mut s = PracticeSession::new(
            "animals".to_string(),
            parse_word_list("English - Polish\ncat - kot"),
            true,
        );
        s.mode = crate::models::Mode::LeftToRight;
        s.pick_next();
        s
    }

    #[test]
    fn test_direction_arrow_follows_direction() {
        let mut s = session();
        s.current_direction = Direction::LeftToRight;
        assert_eq!(direction_arrow(&s), "English ► Polish");
        s.current_direction = Direction::RightToLeft;
        assert_eq!(direction_arrow(&s), "Polish ► English");
    }

    #[test]
    fn test_header_shows_remaining_only_when_blocking() {
        let tr = Translator::new("en");
        let mut s = session();
        assert!(!header_text(&s, &tr).contains("Remaining"));
        s.block_repeats = true;
        let text = header_text(&s, &tr);
        assert!(text.contains("Remaining: 1"));
        assert!(text.contains("Loaded: 1"));
    }
}
