use std::sync::Arc;

use iced::task;
use iced::widget::{column, container, text};
use iced::window;
use iced::{Color, Element, Fill, Padding, Size, Subscription, Task, Theme};

use crate::config::Config;
use crate::lookup::{Lookup, LookupError, LookupResult};
use crate::search::{Effect, LookupRequest, SearchWidget, Ticket};
use crate::ui::{record_table, search_input, theme};

pub struct State {
    config: Config,
    widget: SearchWidget,
    lookup: Arc<dyn Lookup>,

    /// The form window
    window_id: Option<window::Id>,
    /// Abort handle of the scheduled debounce timer
    debounce: Option<task::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    WindowOpened(window::Id),
    WindowClosed(window::Id),
    QueryChanged(String),
    SearchPressed,
    DebounceElapsed(Ticket),
    LookupFinished {
        seq: u64,
        outcome: Result<LookupResult, LookupError>,
    },
}

impl State {
    pub fn new(config: Config, lookup: Arc<dyn Lookup>) -> (Self, Task<Message>) {
        let (_id, open_task) = window::open(window::Settings {
            size: Size::new(config.window.width, config.window.height),
            position: window::Position::Centered,
            ..window::Settings::default()
        });

        let state = Self {
            widget: SearchWidget::new(&config.search),
            config,
            lookup,
            window_id: None,
            debounce: None,
        };

        (state, open_task.map(Message::WindowOpened))
    }

    pub fn title(&self, _window: window::Id) -> String {
        self.config.labels.title.clone()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::WindowOpened(id) => {
                self.window_id = Some(id);
                Task::batch([
                    window::gain_focus(id),
                    iced::widget::operation::focus(search_input::SEARCH_INPUT_ID),
                ])
            }
            Message::WindowClosed(id) => {
                if self.window_id != Some(id) {
                    return Task::none();
                }
                tracing::info!("Window closed, exiting");
                self.window_id = None;
                self.cancel_debounce();
                iced::exit()
            }
            Message::QueryChanged(query) => {
                let effect = self.widget.on_query_change(query);
                if self.widget.pending_timer().is_none() {
                    self.cancel_debounce();
                }
                self.run(effect)
            }
            Message::SearchPressed => {
                self.cancel_debounce();
                let effect = self.widget.on_search_pressed();
                self.run(effect)
            }
            Message::DebounceElapsed(ticket) => {
                if self.widget.pending_timer() == Some(ticket) {
                    self.debounce = None;
                }
                let effect = self.widget.on_debounce_elapsed(ticket);
                self.run(effect)
            }
            Message::LookupFinished { seq, outcome } => {
                if let Err(LookupError::ServerReported(message)) = &outcome {
                    tracing::debug!("Lookup #{} rejected by endpoint: {}", seq, message);
                }
                self.widget.on_lookup_finished(seq, outcome);
                Task::none()
            }
        }
    }

    pub fn view(&self, _window: window::Id) -> Element<'_, Message> {
        let labels = &self.config.labels;

        let heading = container(text(&labels.heading).size(26).style(theme::heading)).center_x(Fill);
        let input = search_input::view(self.widget.query(), labels);
        let results = record_table::view(self.widget.render());

        let card = container(column![heading, input, results].spacing(24))
            .padding(Padding::new(36.0))
            .max_width(760.0)
            .style(theme::card);

        container(card)
            .padding(Padding::new(24.0))
            .center(Fill)
            .style(theme::page)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        window::close_events().map(Message::WindowClosed)
    }

    pub fn theme(&self, _window: window::Id) -> Theme {
        Theme::Light
    }

    pub fn style(&self, _theme: &Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: theme::BACKGROUND,
            text_color: Color::BLACK,
        }
    }

    fn cancel_debounce(&mut self) {
        if let Some(handle) = self.debounce.take() {
            handle.abort();
        }
    }

    /// Turn a widget effect into a task
    fn run(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Schedule { ticket, delay } => {
                let (timer, handle) = Task::perform(tokio::time::sleep(delay), move |_| {
                    Message::DebounceElapsed(ticket)
                })
                .abortable();
                self.cancel_debounce();
                self.debounce = Some(handle);
                timer
            }
            Effect::Lookup(LookupRequest { seq, query }) => {
                tracing::info!("Looking up '{}' (#{})", query, seq);
                Task::perform(self.lookup.fetch(&query), move |outcome| {
                    Message::LookupFinished { seq, outcome }
                })
            }
        }
    }
}
