use crate::content::Icon;
use crate::ui::app::Focus;
use crate::ui::layout::truncate_to_width;
use crate::ui::theme::{Theme, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const NAV_HINTS: &str =
    " 1-4: Pages │ a/r/s/d: Links │ Enter: Action │ Tab: Form │ ↑↓: Scroll │ q: Quit";
const FORM_HINTS: &str =
    " Tab/Shift+Tab: Field │ ←→: Service │ Enter: Submit │ Esc: Back";

/// Key hints, transient status and the floating call shortcut.
pub struct Footer<'a> {
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn widget(&self, area: Rect, focus: Focus, status: Option<&str>) -> Paragraph<'static> {
        Paragraph::new(self.line(area, focus, status))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }

    fn line(&self, area: Rect, focus: Focus, status: Option<&str>) -> Line<'static> {
        let hints = match (status, focus) {
            (Some(message), _) => format!(" {message}"),
            (None, Focus::Nav) => NAV_HINTS.to_string(),
            (None, Focus::Form) => FORM_HINTS.to_string(),
        };
        let call = format!(" {} c: Call ", Icon::Phone.glyph());
        let version = format!(" v{} ", VERSION);

        // Hints are clipped first; the call button and version are kept whole.
        let content_width = usize::from(area.width.saturating_sub(2));
        let reserved = call.width() + 1 + version.width();
        let hints = truncate_to_width(&hints, content_width.saturating_sub(reserved));
        let padding = content_width
            .saturating_sub(hints.width())
            .saturating_sub(reserved);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(
                call,
                Style::default().bg(self.theme.brand_blue).fg(HEADER_TEXT),
            ),
            Span::raw(" "),
            Span::styled(version, text_style),
        ])
    }
}
