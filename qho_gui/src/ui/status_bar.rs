//! Status Bar (Bottom)
//!
//! Displays:
//! - The quantum numbers of the plotted state (or "no plot yet")
//! - Status messages from the last action

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::{App, Message};

/// Render the status bar
pub fn view(app: &App) -> Element<'_, Message> {
    let state_info = match &app.plots {
        Some(job) => format!(
            "Showing psi_{{{},{}}} | peak |psi| = {:.4} at ({:.2}, {:.2})",
            job.numbers.n, job.numbers.m, job.peak.value, job.peak.x, job.peak.y,
        ),
        None => "No plot yet".to_string(),
    };

    row![
        text(state_info).size(10),
        Space::new().width(Length::Fill),
        text(&app.status).size(10),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
