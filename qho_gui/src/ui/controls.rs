//! Quantum-number controls
//!
//! Two bounded spin controls for n and m plus the Show! trigger button.
//! Values are clamped to `0..=MAX_QUANTUM_NUMBER` before they ever reach the
//! evaluator, so overflow in the normalization factor is prevented at this
//! boundary rather than guarded downstream.

use iced::widget::{button, column, container, row, text, text_input, tooltip, Space};
use iced::{Alignment, Element, Length, Padding};

use qho_core::MAX_QUANTUM_NUMBER;

use crate::{App, Message};

/// Render the controls panel
pub fn view(app: &App) -> Element<'_, Message> {
    let n_control = spin_control(
        "Quantum number n:",
        &app.n_input,
        Message::NChanged,
        Message::BumpN(-1),
        Message::BumpN(1),
    );
    let n_control = with_tooltip(
        n_control,
        "Alters the quantum number of the wavefunction component along x.",
    );

    let m_control = spin_control(
        "Quantum number m:",
        &app.m_input,
        Message::MChanged,
        Message::BumpM(-1),
        Message::BumpM(1),
    );
    let m_control = with_tooltip(
        m_control,
        "Alters the quantum number of the wavefunction component along y.",
    );

    let show_button = button(text("Show!").size(13))
        .on_press(Message::Show)
        .padding(Padding::from([6, 18]))
        .style(button::primary);
    let show_button = with_tooltip(
        show_button.into(),
        "Displays the wavefunction and the probability distribution plot.",
    );

    let panel = column![
        n_control,
        m_control,
        Space::new().height(4),
        row![
            show_button,
            Space::new().width(Length::Fill),
            text(format!("range 0..={MAX_QUANTUM_NUMBER}")).size(10).color([0.5, 0.5, 0.5]),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(6);

    container(panel)
        .width(Length::Fill)
        .style(container::bordered_box)
        .padding(8)
        .into()
}

/// A labeled integer input with decrement/increment buttons.
fn spin_control<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
    on_down: Message,
    on_up: Message,
) -> Element<'a, Message> {
    row![
        text(label).size(12).width(Length::Fixed(130.0)),
        text_input("0", value)
            .on_input(on_change)
            .on_submit(Message::Show)
            .width(Length::Fixed(60.0))
            .padding(4)
            .size(12),
        button(text("-").size(11))
            .on_press(on_down)
            .padding(Padding::from([2, 8]))
            .style(button::secondary),
        button(text("+").size(11))
            .on_press(on_up)
            .padding(Padding::from([2, 8]))
            .style(button::secondary),
    ]
    .spacing(4)
    .align_y(Alignment::Center)
    .into()
}

/// Wrap a control with a hover tooltip.
fn with_tooltip<'a>(content: Element<'a, Message>, tip: &'a str) -> Element<'a, Message> {
    tooltip(
        content,
        container(text(tip).size(10)).padding(6).style(container::bordered_box),
        tooltip::Position::Bottom,
    )
    .into()
}
