//! Information tabs
//!
//! Three tabs of explanatory text: the wave function, the probability
//! distribution, and the bundled report with its launcher button. Iced has
//! no tab widget, so the tab strip is a row of buttons with the active one
//! highlighted, above a shared content container.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Element, Length, Padding};

use crate::{App, InfoTab, Message};

const WAVE_FUNCTION_TEXT: &str = "The wave function of the two-dimensional quantum harmonic \
oscillator comes from solving the time-independent Schrodinger equation for a harmonic \
potential. Solved for a single positional coordinate, this gives a one-dimensional wave \
function with a single quantum number n. The two-dimensional wave function is the product of \
two such one-dimensional solutions that differ only in their positional variable and quantum \
number, giving a state labeled by n and m in the x-y plane. Changing the quantum numbers \
changes which eigenstate is sampled, as shown in the first plot.";

const PROBABILITY_TEXT: &str = "The two-dimensional wave function determines the probability \
distribution of the particle: the wave function multiplied by its complex conjugate. With no \
time dependence the wave function here is real, so the density is simply its square at every \
point. As the quantum numbers grow, the density develops a lattice of nodes and lobes across \
the plane. This is displayed in the second plot.";

const REPORT_TEXT: &str = "A bundled report goes into more detail about the physics behind \
the oscillator and how the surfaces are computed. The button below opens it with your \
system's default viewer.";

/// Render the tab strip and the active tab's content
pub fn view(app: &App) -> Element<'_, Message> {
    let strip = row![
        tab_button("Wave function", InfoTab::WaveFunction, app.active_tab),
        tab_button("Probability", InfoTab::Probability, app.active_tab),
        tab_button("Report", InfoTab::Report, app.active_tab),
    ]
    .spacing(2);

    let body: Element<'_, Message> = match app.active_tab {
        InfoTab::WaveFunction => text(WAVE_FUNCTION_TEXT).size(12).into(),
        InfoTab::Probability => text(PROBABILITY_TEXT).size(12).into(),
        InfoTab::Report => column![
            text(REPORT_TEXT).size(12),
            Space::new().height(10),
            button(text("View report").size(12))
                .on_press(Message::OpenReport)
                .padding(Padding::from([6, 12]))
                .style(button::primary),
        ]
        .into(),
    };

    let content = container(scrollable(container(body).padding(8)))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(container::bordered_box);

    column![strip, content]
        .height(Length::Fill)
        .into()
}

fn tab_button(label: &str, tab: InfoTab, active: InfoTab) -> Element<'static, Message> {
    let style = if tab == active {
        button::primary
    } else {
        button::secondary
    };

    button(text(label.to_string()).size(11))
        .on_press(Message::TabSelected(tab))
        .padding(Padding::from([4, 10]))
        .style(style)
        .into()
}
