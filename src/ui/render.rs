use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::{body_split, layout_regions};
use crate::ui::list::render_list;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(&app.config().api.base_url, app.last_load_ok());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let (form_area, list_area) = body_split(body);
    render_form(frame, form_area, app.form(), app.focus() == Focus::Form);
    render_list(
        frame,
        list_area,
        &app.list_view(),
        app.selection(),
        app.focus() == Focus::List,
    );

    let footer_widget = Footer::new(app.focus());
    frame.render_widget(footer_widget.widget(footer), footer);
}
