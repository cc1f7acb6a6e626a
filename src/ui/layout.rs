use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct PracticeLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub input_area: Rect,
    pub result_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_practice_chunks(area: Rect) -> PracticeLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(4),
        ])
        .split(area);

    PracticeLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        input_area: chunks[2],
        result_area: chunks[3],
        help_area: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_practice_layout_heights() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = calculate_practice_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.result_area.height, 5);
        assert_eq!(layout.help_area.height, 4);
        assert!(layout.question_area.height >= 5);
    }

    #[test]
    fn test_practice_layout_small_terminal() {
        let area = Rect::new(0, 0, 40, 12);
        let layout = calculate_practice_chunks(area);
        // Just verify the split does not panic and areas stay in bounds.
        assert!(layout.help_area.bottom() <= area.bottom());
    }
}
