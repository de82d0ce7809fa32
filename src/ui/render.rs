use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.theme());
    frame.render_widget(header_widget.widget(app.page(), header.width), header);

    frame.render_widget(Clear, body);
    let layout = app.body_layout();
    frame.render_widget(
        Paragraph::new(layout.lines).scroll((app.scroll(), 0)),
        body,
    );

    let footer_widget = Footer::new(app.theme());
    frame.render_widget(
        footer_widget.widget(footer, app.focus(), app.status_message()),
        footer,
    );
}
