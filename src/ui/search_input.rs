use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::config::LabelsConfig;
use crate::ui::theme;

/// The search input ID for focus management
pub const SEARCH_INPUT_ID: &str = "edc-lookup-search-input";

/// Serial number input with the search button beside it.
/// Enter in the input behaves like pressing the button.
pub fn view<'a>(query: &'a str, labels: &'a LabelsConfig) -> Element<'a, Message> {
    let input = text_input(&labels.placeholder, query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::SearchPressed)
        .id(SEARCH_INPUT_ID)
        .padding(12)
        .size(18)
        .width(Fill)
        .style(theme::search_input);

    let search = button(text(&labels.button).size(16))
        .on_press(Message::SearchPressed)
        .padding(Padding::from([12, 24]))
        .style(theme::search_button);

    row![input, search]
        .spacing(12)
        .align_y(Alignment::Center)
        .into()
}
