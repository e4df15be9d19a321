//! # Oscillo GUI Application
//!
//! Desktop visualizer for the two-dimensional quantum harmonic oscillator.
//! Built with Iced: pick a pair of quantum numbers, press Show!, and the
//! amplitude and probability-density surfaces are evaluated by `qho_core`
//! and rendered on two stacked 3D canvases.
//!
//! All work happens synchronously inside `update`; the 200x200 evaluation is
//! cheap enough that no background task is warranted.

use iced::widget::{column, row};
use iced::{Element, Length, Theme};

use qho_core::{evaluate, GridSpec, QuantumNumbers, MAX_QUANTUM_NUMBER};

mod report;
mod ui;

use ui::shared::surface::SurfaceData;

fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view)
        .title("2D Quantum Harmonic Oscillator Simulator")
        .theme(App::theme)
        .window_size((1150.0, 840.0))
        .run()
}

/// Which explanatory tab is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTab {
    WaveFunction,
    Probability,
    Report,
}

/// The plot data produced by one press of Show!
///
/// Both surfaces come from a single evaluation: the density is derived from
/// the amplitude field, not recomputed.
pub struct PlotJob {
    pub numbers: QuantumNumbers,
    pub amplitude: SurfaceData,
    pub density: SurfaceData,
    pub peak: qho_core::wavefunction::Peak,
}

#[derive(Debug, Clone)]
pub enum Message {
    NChanged(String),
    MChanged(String),
    BumpN(i32),
    BumpM(i32),
    Show,
    TabSelected(InfoTab),
    OpenReport,
    ToggleDarkMode,
}

pub struct App {
    /// Text buffers backing the two spin controls
    pub n_input: String,
    pub m_input: String,
    /// Last computed surfaces; None until the first trigger
    pub plots: Option<PlotJob>,
    pub active_tab: InfoTab,
    pub dark_mode: bool,
    /// Status-bar message line
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        App {
            n_input: "0".to_string(),
            m_input: "0".to_string(),
            plots: None,
            active_tab: InfoTab::WaveFunction,
            dark_mode: true,
            status: "Choose quantum numbers n and m, then press Show!".to_string(),
        }
    }
}

impl App {
    pub fn update(&mut self, message: Message) {
        match message {
            Message::NChanged(value) => {
                self.n_input = sanitize_digits(&value);
            }
            Message::MChanged(value) => {
                self.m_input = sanitize_digits(&value);
            }
            Message::BumpN(delta) => {
                self.n_input = bump(&self.n_input, delta).to_string();
            }
            Message::BumpM(delta) => {
                self.m_input = bump(&self.m_input, delta).to_string();
            }
            Message::Show => self.replot(),
            Message::TabSelected(tab) => {
                self.active_tab = tab;
            }
            Message::OpenReport => match report::open_report() {
                Ok(path) => {
                    self.status = format!("Opened report: {}", path.display());
                }
                Err(e) => {
                    // Non-fatal: plotting keeps working without the report
                    self.status = e.to_string();
                }
            },
            Message::ToggleDarkMode => {
                self.dark_mode = !self.dark_mode;
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let side_panel = column![
            ui::controls::view(self),
            ui::info_tabs::view(self),
        ]
        .spacing(10)
        .width(Length::FillPortion(38));

        let content = row![
            ui::plots::view(self),
            side_panel,
        ]
        .spacing(10)
        .height(Length::Fill);

        column![
            ui::header::view(self.dark_mode),
            content,
            ui::status_bar::view(self),
        ]
        .spacing(8)
        .padding(10)
        .into()
    }

    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// The Show! handler: read n and m, evaluate once, replace both surfaces.
    ///
    /// Replacing the `SurfaceData` is the clear-and-redraw of the original
    /// contract: the canvases render only the current job, and re-emit their
    /// titles and axis labels on every frame. On error the previous plots
    /// stay visible and the status line carries the message.
    fn replot(&mut self) {
        let numbers = QuantumNumbers::clamped(parse_quantum(&self.n_input), parse_quantum(&self.m_input));
        self.n_input = numbers.n.to_string();
        self.m_input = numbers.m.to_string();

        match evaluate(&numbers, &GridSpec::default()) {
            Ok(field) => {
                let peak = field.peak();
                let amplitude = SurfaceData::from_grid(&field.psi, GridSpec::default());
                let density = SurfaceData::from_grid(&field.probability_density(), GridSpec::default());
                self.status = format!(
                    "Plotted psi_{{{},{}}} - peak |psi| = {:.4} near ({:.2}, {:.2})",
                    numbers.n, numbers.m, peak.value, peak.x, peak.y,
                );
                self.plots = Some(PlotJob {
                    numbers,
                    amplitude,
                    density,
                    peak,
                });
            }
            Err(e) => {
                self.status = format!("Evaluation failed: {e}");
            }
        }
    }
}

/// Keep only digits so the buffers never hold an unparseable value.
fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse a spin-control buffer; empty or overlong input falls back safely.
fn parse_quantum(raw: &str) -> u32 {
    raw.parse::<u32>().unwrap_or(0).min(MAX_QUANTUM_NUMBER)
}

/// Step a spin-control value, clamped to the supported range.
fn bump(raw: &str, delta: i32) -> u32 {
    let current = parse_quantum(raw) as i64;
    (current + delta as i64).clamp(0, MAX_QUANTUM_NUMBER as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_digits() {
        assert_eq!(sanitize_digits("12"), "12");
        assert_eq!(sanitize_digits("1a2-"), "12");
        assert_eq!(sanitize_digits(""), "");
    }

    #[test]
    fn test_parse_quantum_clamps() {
        assert_eq!(parse_quantum("3"), 3);
        assert_eq!(parse_quantum(""), 0);
        assert_eq!(parse_quantum("9999"), MAX_QUANTUM_NUMBER);
    }

    #[test]
    fn test_bump_clamps_at_bounds() {
        assert_eq!(bump("0", -1), 0);
        assert_eq!(bump("0", 1), 1);
        assert_eq!(bump(&MAX_QUANTUM_NUMBER.to_string(), 1), MAX_QUANTUM_NUMBER);
    }

    #[test]
    fn test_replot_replaces_previous_job() {
        let mut app = App::default();
        assert!(app.plots.is_none());

        app.update(Message::Show);
        let first = app.plots.as_ref().unwrap().amplitude.values.clone();

        app.update(Message::NChanged("1".to_string()));
        app.update(Message::MChanged("2".to_string()));
        app.update(Message::Show);
        let second = &app.plots.as_ref().unwrap().amplitude.values;

        assert_ne!(&first, second);
        assert_eq!(app.plots.as_ref().unwrap().numbers, QuantumNumbers { n: 1, m: 2 });
    }

    #[test]
    fn test_show_clamps_oversized_input() {
        let mut app = App::default();
        app.update(Message::NChanged("500".to_string()));
        app.update(Message::Show);
        assert_eq!(app.n_input, MAX_QUANTUM_NUMBER.to_string());
        assert_eq!(app.plots.as_ref().unwrap().numbers.n, MAX_QUANTUM_NUMBER);
    }
}
