//! Terminal rendering of page sections.
//!
//! Sections are laid out as pre-wrapped lines so the body height is known
//! before drawing; scrolling and section offsets depend on it.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{self, about, contact, footer, hero, Icon};
use crate::site::Section;
use crate::ui::contact::{ContactFormState, FormField};
use crate::ui::layout::wrap_text;
use crate::ui::theme::{Theme, HEADER_TEXT, MUTED_TEXT, STAR_AMBER, STATUS_OK};
use crate::ui::view::ViewState;

const INDENT: &str = "  ";

/// Body content of one frame.
#[derive(Debug, Clone, Default)]
pub struct BodyLayout {
    pub lines: Vec<Line<'static>>,
    /// First line of every composed section, in render order.
    pub offsets: Vec<(Section, usize)>,
}

impl BodyLayout {
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn offset_of(&self, section: Section) -> Option<usize> {
        self.offsets
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, offset)| *offset)
    }

    /// Order in which sections were laid out.
    pub fn section_order(&self) -> Vec<Section> {
        self.offsets.iter().map(|(s, _)| *s).collect()
    }
}

/// Lay out the active page followed by the site footer.
///
/// `form_focus` is the focused form field when the form owns the keyboard.
pub fn body_layout(
    view: &ViewState,
    form: &ContactFormState,
    form_focus: Option<FormField>,
    theme: &Theme,
    width: u16,
) -> BodyLayout {
    let width = usize::from(width.max(1)).saturating_sub(INDENT.len() * 2).max(10);
    let mut layout = BodyLayout::default();

    for section in view.sections() {
        layout.offsets.push((*section, layout.lines.len()));
        let lines = match section {
            Section::Hero => hero_lines(theme, width),
            Section::TrustBar => trust_bar_lines(theme, width),
            Section::ServicesGrid => services_lines(theme, width),
            Section::Testimonials => testimonial_lines(width),
            Section::ContactForm => contact_lines(form, form_focus, theme, width),
            Section::About => about_lines(theme, width),
        };
        layout.lines.extend(lines);
        layout.lines.push(Line::default());
    }

    layout.lines.extend(site_footer_lines(theme, width));
    layout
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("{INDENT}{text}"),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn paragraph(text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(format!("{INDENT}{line}"), style)))
        .collect()
}

fn muted() -> Style {
    Style::default().fg(MUTED_TEXT)
}

fn stars(count: usize) -> Span<'static> {
    Span::styled(
        Icon::Star.glyph().repeat(count),
        Style::default().fg(STAR_AMBER),
    )
}

fn icon_row(
    icon: Icon,
    title: &str,
    desc: &str,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::raw(INDENT),
        Span::styled(icon.glyph(), Style::default().fg(theme.brand_red)),
        Span::raw(" "),
        Span::styled(
            title.to_string(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.extend(
        wrap_text(desc, width.saturating_sub(3))
            .into_iter()
            .map(|line| Line::from(Span::styled(format!("{INDENT}   {line}"), muted()))),
    );
    lines
}

fn hero_lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("{} {}", Icon::Verified.glyph(), hero::BADGE.to_uppercase()),
                Style::default().fg(theme.brand_red).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
    ];
    lines.extend(
        wrap_text(hero::HEADLINE, width)
            .into_iter()
            .map(|line| heading(&line)),
    );
    lines.push(Line::default());
    lines.extend(paragraph(hero::PITCH, muted(), width));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            " [Enter] Get Free Quote ",
            Style::default().bg(theme.brand_red).fg(HEADER_TEXT),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" [c] {} Call Now ", Icon::Phone.glyph()),
            Style::default().bg(theme.brand_blue).fg(HEADER_TEXT),
        ),
    ]));
    lines.push(Line::default());

    // Two stats per row.
    for (row_idx, row) in hero::STATS.chunks(2).enumerate() {
        let mut stats = vec![Span::raw(INDENT)];
        for (idx, stat) in row.iter().enumerate() {
            if idx > 0 {
                stats.push(Span::styled("  │  ", muted()));
            }
            stats.push(Span::styled(
                stat.value,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ));
            if row_idx == 0 && idx == 0 {
                stats.push(Span::raw(" "));
                stats.push(stars(5));
            }
            stats.push(Span::styled(format!(" {}", stat.label.to_uppercase()), muted()));
        }
        lines.push(Line::from(stats));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(Icon::ShieldCheck.glyph(), Style::default().fg(STATUS_OK)),
        Span::styled(format!(" {}: ", hero::ACTIVE_AREA_LABEL.to_uppercase()), muted()),
        Span::styled(
            hero::ACTIVE_AREA,
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

fn trust_bar_lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for marker in content::TRUST_MARKERS {
        lines.extend(icon_row(marker.icon, marker.title, marker.desc, theme, width));
    }
    lines
}

fn services_lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(), heading(content::SERVICES_TITLE)];
    lines.extend(paragraph(content::SERVICES_SUBTITLE, muted(), width));
    for service in content::SERVICES {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(service.icon.glyph(), Style::default().fg(theme.brand_red)),
            Span::raw(" "),
            Span::styled(
                service.title,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.extend(paragraph(service.desc, muted(), width));
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                "Get Quote ›",
                Style::default().fg(theme.brand_red).add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines
}

fn testimonial_lines(width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(), heading(content::TESTIMONIALS_TITLE)];
    lines.extend(paragraph(content::TESTIMONIALS_SUBTITLE, muted(), width));
    for review in content::TESTIMONIALS {
        lines.push(Line::default());
        lines.push(Line::from(vec![Span::raw(INDENT), stars(5)]));
        lines.extend(paragraph(
            review.text,
            muted().add_modifier(Modifier::ITALIC),
            width,
        ));
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!("({}) ", review.initials()), muted()),
            Span::styled(
                review.name,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    ", {}, {}",
                    review.location.to_uppercase(),
                    content::BRAND_LOCALITY.to_uppercase()
                ),
                muted(),
            ),
        ]));
    }
    lines
}

fn field_label(field: FormField, focused: bool, theme: &Theme) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled(marker, Style::default().fg(theme.brand_red)),
        Span::styled(
            field.label().to_uppercase(),
            muted().add_modifier(Modifier::BOLD),
        ),
    ])
}

fn input_box(value: &str, placeholder: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let (text, style) = if value.is_empty() {
        (placeholder.to_string(), muted().add_modifier(Modifier::DIM))
    } else {
        (value.to_string(), Style::default().fg(HEADER_TEXT))
    };
    let cursor = if focused { "▏" } else { "" };
    let bracket = if focused {
        Style::default().fg(theme.brand_red)
    } else {
        muted()
    };
    Line::from(vec![
        Span::raw(INDENT),
        Span::styled("  [ ", bracket),
        Span::styled(text, style),
        Span::styled(cursor, Style::default().fg(theme.brand_red)),
        Span::styled(" ]", bracket),
    ])
}

fn contact_lines(
    form: &ContactFormState,
    focus: Option<FormField>,
    theme: &Theme,
    width: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(), heading(contact::TITLE)];
    lines.extend(paragraph(contact::SUBTITLE, muted(), width));
    lines.push(Line::default());

    if form.is_submitted() {
        let ok = Style::default().fg(STATUS_OK);
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                format!("{} {}", Icon::ShieldCheck.glyph(), contact::ACK_TITLE),
                ok.add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.extend(paragraph(contact::ACK_BODY, ok, width));
    } else {
        let fields = &form.fields;
        let is = |field: FormField| focus == Some(field);

        for (field, value, placeholder) in [
            (FormField::Name, fields.name.as_str(), contact::NAME_PLACEHOLDER),
            (FormField::Phone, fields.phone.as_str(), contact::PHONE_PLACEHOLDER),
        ] {
            lines.push(field_label(field, is(field), theme));
            lines.push(input_box(value, placeholder, is(field), theme));
            if form.rejected == Some(field) {
                lines.push(Line::from(Span::styled(
                    format!("{INDENT}    ! {}", contact::REQUIRED_HINT),
                    Style::default().fg(theme.brand_red),
                )));
            }
        }

        lines.push(field_label(FormField::Service, is(FormField::Service), theme));
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled("  ◀ ", muted()),
            Span::styled(fields.service_label(), Style::default().fg(HEADER_TEXT)),
            Span::styled(" ▶", muted()),
        ]));

        lines.push(field_label(FormField::Message, is(FormField::Message), theme));
        if fields.message.is_empty() {
            lines.push(input_box("", contact::MESSAGE_PLACEHOLDER, is(FormField::Message), theme));
        } else {
            for line in fields.message.split('\n') {
                lines.push(input_box(line, "", is(FormField::Message), theme));
            }
        }

        lines.push(Line::default());
        let submit_style = if is(FormField::Submit) {
            Style::default()
                .bg(theme.brand_red)
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
                .bg(theme.brand_red)
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(format!(" {} ", contact::SUBMIT_LABEL), submit_style),
        ]));
    }

    lines.push(Line::default());
    lines.push(heading(contact::AREA_TITLE));
    for detail in contact::DETAILS {
        lines.extend(icon_row(detail.icon, detail.label, detail.value, theme, width));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(Icon::MapPin.glyph(), Style::default().fg(theme.brand_red)),
        Span::styled(format!(" {}", contact::MAP_CAPTION.to_uppercase()), muted()),
    ]));
    lines
}

fn about_lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default(), heading(about::TITLE), Line::default()];
    lines.extend(paragraph(about::INTRO, Style::default().fg(HEADER_TEXT), width));
    for (title, body) in about::PILLARS {
        lines.push(Line::default());
        lines.push(heading(title));
        lines.extend(paragraph(body, muted(), width));
    }
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!(" [Enter] {} ", about::CTA_LABEL),
            Style::default()
                .bg(theme.brand_red)
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines
}

fn site_footer_lines(theme: &Theme, width: usize) -> Vec<Line<'static>> {
    let column = |title: &str| {
        Line::from(Span::styled(
            format!("{INDENT}{}", title.to_uppercase()),
            muted().add_modifier(Modifier::BOLD),
        ))
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{INDENT}{}", "─".repeat(width)),
            muted(),
        )),
        Line::from(vec![
            Span::raw(INDENT),
            Span::styled(Icon::DoorOpen.glyph(), Style::default().fg(theme.brand_red)),
            Span::styled(
                format!(" {}", content::BRAND_NAME.to_uppercase()),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    lines.extend(paragraph(footer::BLURB, muted(), width));
    let social: Vec<&str> = footer::SOCIAL.iter().map(|icon| icon.glyph()).collect();
    lines.push(Line::from(Span::styled(
        format!("{INDENT}{}", social.join("  ")),
        muted(),
    )));

    lines.push(Line::default());
    lines.push(column("Services"));
    for service in footer::SERVICES {
        lines.push(Line::from(Span::styled(format!("{INDENT}· {service}"), muted())));
    }

    lines.push(Line::default());
    lines.push(column("Quick Links"));
    for link in footer::QUICK_LINKS {
        lines.push(Line::from(Span::styled(
            format!("{INDENT}[{}] {} → {}", link.hotkey, link.label, link.target().label()),
            muted(),
        )));
    }

    lines.push(Line::default());
    lines.push(column("Service Area"));
    lines.extend(paragraph(footer::SERVICE_AREA, muted(), width));
    lines.push(Line::from(vec![
        Span::raw(INDENT),
        Span::styled(
            format!(
                "{} {}",
                Icon::ShieldCheck.glyph(),
                footer::CERTIFICATION.to_uppercase()
            ),
            Style::default().fg(theme.brand_red),
        ),
    ]));

    lines.push(Line::default());
    lines.extend(paragraph(footer::COPYRIGHT, muted(), width));
    lines.push(Line::from(Span::styled(
        format!("{INDENT}{}", footer::LEGAL.join("   ")),
        muted(),
    )));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::Page;

    fn text_of(layout: &BodyLayout) -> String {
        layout
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn layout_for(page: Page, form: &ContactFormState) -> BodyLayout {
        let view = ViewState { page, scroll: 0 };
        body_layout(&view, form, None, &Theme::default(), 80)
    }

    #[test]
    fn offsets_follow_composition_order() {
        let layout = layout_for(Page::Home, &ContactFormState::default());
        assert_eq!(layout.section_order(), view_sections(Page::Home));
        let offsets: Vec<usize> = layout.offsets.iter().map(|(_, o)| *o).collect();
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
    }

    fn view_sections(page: Page) -> Vec<Section> {
        ViewState { page, scroll: 0 }.sections().to_vec()
    }

    #[test]
    fn acknowledgment_replaces_form() {
        let submitted = ContactFormState {
            submitted: true,
            generation: 1,
            ..ContactFormState::default()
        };
        let text = text_of(&layout_for(Page::Contact, &submitted));
        assert!(text.contains(contact::ACK_TITLE));
        assert!(!text.contains(contact::SUBMIT_LABEL));
    }

    #[test]
    fn rejected_field_shows_required_hint() {
        let form = ContactFormState {
            rejected: Some(FormField::Phone),
            ..ContactFormState::default()
        };
        let text = text_of(&layout_for(Page::Contact, &form));
        assert!(text.contains(contact::REQUIRED_HINT));
    }

    #[test]
    fn body_lines_fit_a_standard_terminal() {
        for page in Page::ALL {
            let view = ViewState { page, scroll: 0 };
            let layout = body_layout(&view, &ContactFormState::default(), None, &Theme::default(), 80);
            for line in &layout.lines {
                assert!(line.width() <= 80, "{page:?}: {line:?}");
            }
        }
    }

    #[test]
    fn footer_follows_every_page() {
        for page in Page::ALL {
            let text = text_of(&layout_for(page, &ContactFormState::default()));
            assert!(text.contains(footer::COPYRIGHT), "{page:?} lacks footer");
        }
    }
}
