use crate::content::{Icon, BRAND_LOCALITY, BRAND_NAME, NAV_ITEMS, PHONE_DISPLAY};
use crate::site::Page;
use crate::ui::theme::{Theme, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// How much of the header fits, widest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Density {
    Full,
    NoLocality,
    CompactNav,
    IconPhone,
    NoNav,
}

const DENSITIES: [Density; 5] = [
    Density::Full,
    Density::NoLocality,
    Density::CompactNav,
    Density::IconPhone,
    Density::NoNav,
];

/// Brand, navigation and the two call-to-action buttons.
///
/// On narrow terminals the locality goes first, then the nav labels, then
/// the phone digits. The call and quote buttons stay.
pub struct Header<'a> {
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    pub fn widget(&self, current: Page, width: u16) -> Paragraph<'static> {
        let width = usize::from(width);
        let line = DENSITIES
            .iter()
            .map(|density| self.line(current, *density))
            .find(|line| line.width() <= width)
            .unwrap_or_else(|| self.line(current, Density::NoNav));

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }

    fn line(&self, current: Page, density: Density) -> Line<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let brand_red = self.theme.brand_red;

        let mut spans = vec![
            Span::styled(" ", text_style),
            Span::styled(Icon::DoorOpen.glyph(), Style::default().fg(brand_red)),
            Span::styled(
                format!(" {}", BRAND_NAME.to_uppercase()),
                text_style.add_modifier(Modifier::BOLD),
            ),
        ];
        if density == Density::Full {
            spans.push(Span::styled(
                format!(" {}", BRAND_LOCALITY.to_uppercase()),
                Style::default().fg(brand_red),
            ));
        }

        if density != Density::NoNav {
            spans.push(Span::styled(" │", separator_style));
            let compact = matches!(density, Density::CompactNav | Density::IconPhone);
            for (idx, item) in NAV_ITEMS.iter().enumerate() {
                let active = item.page == current;
                let style = if active {
                    Style::default().fg(brand_red).add_modifier(Modifier::BOLD)
                } else {
                    text_style
                };
                if compact && !active {
                    spans.push(Span::styled(format!(" {}", idx + 1), style));
                } else {
                    spans.push(Span::styled(format!(" {}:", idx + 1), separator_style));
                    spans.push(Span::styled(item.label, style));
                }
            }
        }

        spans.push(Span::styled(" │ ", separator_style));
        let phone = match density {
            Density::IconPhone | Density::NoNav => format!(" {} c ", Icon::Phone.glyph()),
            _ => format!(" {} {} ", Icon::Phone.glyph(), PHONE_DISPLAY),
        };
        spans.push(Span::styled(
            phone,
            Style::default().bg(self.theme.brand_blue).fg(HEADER_TEXT),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            " g: Free Quote ",
            Style::default()
                .bg(brand_red)
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ));

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn wide_terminal_shows_everything() {
        let theme = Theme::default();
        let line = Header::new(&theme).line(Page::Home, Density::Full);
        let text = text(&line);
        assert!(text.contains("CORAL SPRINGS"));
        assert!(text.contains("Services"));
        assert!(text.contains(PHONE_DISPLAY));
    }

    #[test]
    fn densities_shrink_monotonically() {
        let theme = Theme::default();
        let header = Header::new(&theme);
        let widths: Vec<usize> = DENSITIES
            .iter()
            .map(|density| header.line(Page::Contact, *density).width())
            .collect();
        assert!(widths.windows(2).all(|pair| pair[0] > pair[1]), "{widths:?}");
    }

    #[test]
    fn compact_nav_keeps_active_label_and_buttons() {
        let theme = Theme::default();
        let line = Header::new(&theme).line(Page::Contact, Density::CompactNav);
        let text = text(&line);
        assert!(text.contains("4:Contact"));
        assert!(!text.contains("Services"));
        assert!(text.contains("Free Quote"));
        assert!(line.width() <= 80);
    }
}
