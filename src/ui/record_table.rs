use iced::widget::{column, container, row, scrollable, text, Column};
use iced::{Element, Fill, Length, Padding};

use crate::app::Message;
use crate::search::Rendered;
use crate::ui::theme;

/// Build the area below the input: the error line, the record table, or nothing.
pub fn view<'a>(rendered: Rendered<'a>) -> Element<'a, Message> {
    match rendered {
        Rendered::Nothing => column![].into(),
        Rendered::Error(message) => container(text(message).size(16).style(theme::error_text))
            .center_x(Fill)
            .into(),
        Rendered::Table(rows) => table(rows),
    }
}

fn table<'a>(rows: Vec<(String, String)>) -> Element<'a, Message> {
    let rows: Vec<Element<'a, Message>> = rows
        .into_iter()
        .map(|(name, value)| {
            row![
                cell(name, Length::FillPortion(2), theme::key_cell),
                cell(value, Length::FillPortion(3), theme::value_cell),
            ]
            .into()
        })
        .collect();

    let body = container(Column::from_vec(rows))
        .padding(Padding::new(16.0))
        .width(Fill)
        .style(theme::table);

    scrollable(body).height(Fill).into()
}

fn cell<'a>(
    content: String,
    width: Length,
    style: fn(&iced::Theme) -> container::Style,
) -> Element<'a, Message> {
    container(text(content).size(14))
        .padding(Padding::from([10, 16]))
        .center_x(width)
        .style(style)
        .into()
}
