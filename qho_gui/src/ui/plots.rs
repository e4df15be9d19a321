//! Plots panel
//!
//! Two independently labeled 3D surface canvases stacked vertically: the
//! amplitude field on top, the probability density below. Before the first
//! Show! both canvases draw only their axis boxes and titles.

use iced::widget::{column, container, Canvas};
use iced::{Element, Length};

use crate::{App, Message};
use super::shared::surface::SurfacePlot;

/// Render the plots panel
pub fn view(app: &App) -> Element<'_, Message> {
    let amplitude = SurfacePlot {
        title: "Wavefunction of psi_{n,m}",
        x_label: "Position of psi_n",
        y_label: "Position of psi_m",
        z_label: "psi_{n,m}",
        data: app.plots.as_ref().map(|job| &job.amplitude),
    };

    let density = SurfacePlot {
        title: "Probability distribution of psi_{n,m}",
        x_label: "Position of psi_n",
        y_label: "Position of psi_m",
        z_label: "|psi_{n,m}|^2",
        data: app.plots.as_ref().map(|job| &job.density),
    };

    let amplitude_canvas: Element<'_, Message> = Canvas::new(amplitude)
        .width(Length::Fill)
        .height(Length::FillPortion(1))
        .into();

    let density_canvas: Element<'_, Message> = Canvas::new(density)
        .width(Length::Fill)
        .height(Length::FillPortion(1))
        .into();

    container(column![amplitude_canvas, density_canvas].spacing(6))
        .width(Length::FillPortion(62))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}
