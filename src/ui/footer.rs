use crate::ui::sequencer::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, OMNITRIX_GREEN};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    screen: Screen,
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(screen: Screen, notice: Option<&'a str>) -> Self {
        Self { screen, notice }
    }

    fn hints(&self) -> &'static str {
        match self.screen {
            Screen::Selection => {
                " ↑↓/Wheel: Scroll │ Enter: Transform │ 1-9: Pick │ X: Alien X │ Q: Quit"
            }
            Screen::Detail => " B: Back │ T: Transform Back │ L: Learn More │ Q: Quit",
            Screen::Special => " B: Back │ Q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let (left, left_style) = match self.notice {
            Some(notice) => (
                format!(" {notice}"),
                Style::default().fg(OMNITRIX_GREEN),
            ),
            None => (self.hints().to_string(), text_style),
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let left_width = left.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(left_width)
            .saturating_sub(version_width);

        let line = Line::from(vec![
            Span::styled(left, left_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
