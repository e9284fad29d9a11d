use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{render_confirmation, render_form};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    let form = app.form();

    frame.render_widget(Header::new().widget(form), header);
    frame.render_widget(Clear, body);
    if body.width > 0 && body.height > 0 {
        render_form(frame, body, form);
    }
    frame.render_widget(Footer::new().widget(footer, form), footer);

    render_confirmation(frame, form);
}
