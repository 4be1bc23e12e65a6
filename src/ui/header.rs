use crate::ui::sequencer::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, OMNITRIX_GREEN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    screen: Screen,
    alien: Option<&'a str>,
    transitioning: bool,
}

impl<'a> Header<'a> {
    pub fn new(screen: Screen, alien: Option<&'a str>, transitioning: bool) -> Self {
        Self {
            screen,
            alien,
            transitioning,
        }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let brand_style = Style::default()
            .fg(OMNITRIX_GREEN)
            .add_modifier(Modifier::BOLD);

        let location = match self.screen {
            Screen::Selection => "Alien Selection",
            Screen::Detail => self.alien.unwrap_or("Alien"),
            Screen::Special => "Classified",
        };
        let status = if self.transitioning { "⟳ TRANSFORMING" } else { "● ACTIVE" };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("⌚ OMNITRIX", brand_style),
            Span::styled("  │  ", separator_style),
            Span::styled(location.to_string(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(OMNITRIX_GREEN)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
