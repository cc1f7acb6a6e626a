use crate::settings::SettingsStatus;
use crate::translation::Translator;
use crate::utils::truncate_string;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use std::path::PathBuf;

fn format_settings_status(status: &SettingsStatus) -> Option<String> {
    match status {
        SettingsStatus::Loaded => None,
        SettingsStatus::VersionIgnored { found } => {
            Some(format!("settings version {} (mismatch ignored)", found))
        }
        SettingsStatus::VersionMismatch { found } => {
            Some(format!("settings version {} rejected, using defaults", found))
        }
        SettingsStatus::FileNotFound => Some("settings file not found, using defaults".to_string()),
        SettingsStatus::DecodeError(_) => {
            Some("settings file unreadable, using defaults".to_string())
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn draw_menu(
    f: &mut Frame,
    title: &str,
    txt_files: &[PathBuf],
    selected_index: usize,
    load_error: bool,
    settings_status: &SettingsStatus,
    tr: &Translator,
    accent: Color,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(f.area());

    let header = Paragraph::new(title)
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = if txt_files.is_empty() {
        vec![ListItem::new(tr.t("menu.no_files")).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        txt_files
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                let style = if i == selected_index {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(truncate_string(&name, 60)).style(style)
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(tr.t("menu.select_list")),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(list, chunks[1]);

    let mut help_spans = vec![
        Span::styled(
            "↑/↓",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::from(tr.t("menu.help.navigate")),
        Span::styled(
            "Enter",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::from(tr.t("menu.help.select")),
        Span::styled(
            "q",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::from(tr.t("menu.help.quit")),
    ];
    if load_error {
        help_spans.push(Span::from("  "));
        help_spans.push(Span::styled(
            tr.t("practice.question.file_error"),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(status) = format_settings_status(settings_status) {
        help_spans.push(Span::from("  "));
        help_spans.push(Span::styled(status, Style::default().fg(Color::DarkGray)));
    }

    let help = Paragraph::new(vec![Line::from(help_spans)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
