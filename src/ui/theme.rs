use iced::widget::{button, container, text, text_input};
use iced::{Border, Color, Shadow, Theme};

/// Page background behind the form card
pub const BACKGROUND: Color = Color {
    r: 0.95,
    g: 0.96,
    b: 0.96,
    a: 1.0,
};

/// Form card surface
const CARD: Color = Color::WHITE;

/// Input field and table background
const SURFACE: Color = Color {
    r: 0.98,
    g: 0.98,
    b: 0.98,
    a: 1.0,
};

const OUTLINE: Color = Color {
    r: 0.82,
    g: 0.84,
    b: 0.86,
    a: 1.0,
};

/// Focus ring and button tint
const ACCENT: Color = Color {
    r: 0.75,
    g: 0.52,
    b: 0.99,
    a: 1.0,
};

const ACCENT_SOFT: Color = Color {
    r: 0.95,
    g: 0.91,
    b: 1.0,
    a: 1.0,
};

const TEXT_PRIMARY: Color = Color {
    r: 0.12,
    g: 0.16,
    b: 0.22,
    a: 1.0,
};

const TEXT_SECONDARY: Color = Color {
    r: 0.29,
    g: 0.33,
    b: 0.39,
    a: 1.0,
};

const TEXT_ERROR: Color = Color {
    r: 0.86,
    g: 0.15,
    b: 0.15,
    a: 1.0,
};

pub fn page(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// The white card holding heading, input and results
pub fn card(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(CARD.into()),
        border: Border {
            color: OUTLINE,
            width: 1.0,
            radius: 24.0.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.18,
                ..Color::BLACK
            },
            offset: iced::Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

pub fn heading(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let _ = theme;
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: SURFACE.into(),
        border: Border {
            color: if focused { ACCENT } else { OUTLINE },
            width: if focused { 2.0 } else { 1.0 },
            radius: 12.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        value: TEXT_PRIMARY,
        selection: Color {
            a: 0.3,
            ..ACCENT
        },
    }
}

pub fn search_button(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color {
            a: 0.35,
            ..ACCENT
        },
        _ => ACCENT_SOFT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: TEXT_PRIMARY,
        border: Border {
            color: OUTLINE,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..button::Style::default()
    }
}

pub fn error_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_ERROR),
    }
}

/// Frame around the record table
pub fn table(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(SURFACE.into()),
        border: Border {
            color: OUTLINE,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Field name cell
pub fn key_cell(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        text_color: Some(TEXT_SECONDARY),
        border: Border {
            color: OUTLINE,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}

/// Field value cell
pub fn value_cell(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        text_color: Some(TEXT_PRIMARY),
        border: Border {
            color: OUTLINE,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..container::Style::default()
    }
}
