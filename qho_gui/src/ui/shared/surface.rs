//! Canvas drawing for 3D surface plots
//!
//! Renders a height field as an isometric surface: each grid cell becomes a
//! projected quad, filled with a viridis-style colormap and painted back to
//! front. Titles and axis labels are drawn on every frame, so they survive
//! any replacement of the underlying data.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::{Color, Point, Rectangle, Renderer, Theme};
use ndarray::Array2;

use qho_core::GridSpec;

use crate::Message;

/// Downsampled height field ready for the canvas.
///
/// The evaluator's 200x200 field carries more quads than the canvas needs;
/// sampling it down keeps the per-frame tessellation cheap without visibly
/// changing the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceData {
    /// Row-major heights, `values[row][col]`
    pub values: Vec<Vec<f32>>,
    /// Domain bounds (the grid is square, both axes share them)
    pub min: f64,
    pub max: f64,
    pub z_min: f32,
    pub z_max: f32,
}

impl SurfaceData {
    /// Upper bound on samples per axis after downsampling
    pub const MAX_SAMPLES: usize = 72;

    /// Build plot data from an evaluated field.
    pub fn from_grid(field: &Array2<f64>, spec: GridSpec) -> Self {
        let (rows, cols) = field.dim();
        let row_stride = rows.div_ceil(Self::MAX_SAMPLES).max(1);
        let col_stride = cols.div_ceil(Self::MAX_SAMPLES).max(1);

        let values: Vec<Vec<f32>> = (0..rows)
            .step_by(row_stride)
            .map(|i| {
                (0..cols)
                    .step_by(col_stride)
                    .map(|j| field[[i, j]] as f32)
                    .collect()
            })
            .collect();

        let mut z_min = f32::INFINITY;
        let mut z_max = f32::NEG_INFINITY;
        for row in &values {
            for &v in row {
                z_min = z_min.min(v);
                z_max = z_max.max(v);
            }
        }

        SurfaceData {
            values,
            min: spec.min,
            max: spec.max,
            z_min,
            z_max,
        }
    }

    fn normalized(&self, v: f32) -> f32 {
        let span = self.z_max - self.z_min;
        if span <= f32::EPSILON {
            0.5
        } else {
            (v - self.z_min) / span
        }
    }
}

/// Canvas program for one 3D surface plot
pub struct SurfacePlot<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub z_label: &'a str,
    /// None until the first trigger: axes and labels only
    pub data: Option<&'a SurfaceData>,
}

/// Projection scales for an isometric view inside a plot rectangle.
struct ProjectionBox {
    center_x: f32,
    center_y: f32,
    spread_x: f32,
    spread_y: f32,
    height: f32,
}

impl ProjectionBox {
    fn fit(bounds: &Rectangle) -> Self {
        ProjectionBox {
            center_x: bounds.width / 2.0,
            center_y: bounds.height * 0.55,
            spread_x: bounds.width * 0.40,
            spread_y: bounds.height * 0.22,
            height: bounds.height * 0.30,
        }
    }

    /// Map grid coordinates `(u, v)` in `[0, 1]^2` and a normalized height
    /// `h` in `[0, 1]` to a screen point.
    fn project(&self, u: f32, v: f32, h: f32) -> Point {
        let a = u - 0.5;
        let b = v - 0.5;
        Point::new(
            self.center_x + (a - b) * self.spread_x,
            self.center_y + (a + b) * self.spread_y - (h - 0.5) * self.height,
        )
    }
}

/// Piecewise-linear approximation of matplotlib's viridis colormap.
fn viridis(t: f32) -> Color {
    const ANCHORS: [(f32, f32, f32); 5] = [
        (0.267, 0.005, 0.329),
        (0.229, 0.322, 0.546),
        (0.128, 0.567, 0.551),
        (0.369, 0.789, 0.383),
        (0.993, 0.906, 0.144),
    ];

    let t = t.clamp(0.0, 1.0);
    let scaled = t * (ANCHORS.len() - 1) as f32;
    let idx = (scaled.floor() as usize).min(ANCHORS.len() - 2);
    let frac = scaled - idx as f32;

    let (r0, g0, b0) = ANCHORS[idx];
    let (r1, g1, b1) = ANCHORS[idx + 1];
    Color::from_rgb(
        r0 + (r1 - r0) * frac,
        g0 + (g1 - g0) * frac,
        b0 + (b1 - b0) * frac,
    )
}

impl SurfacePlot<'_> {
    fn draw_axes(&self, frame: &mut Frame, proj: &ProjectionBox, color: Color) {
        // Base outline at h = 0
        let base = Path::new(|builder| {
            builder.move_to(proj.project(0.0, 0.0, 0.0));
            builder.line_to(proj.project(1.0, 0.0, 0.0));
            builder.line_to(proj.project(1.0, 1.0, 0.0));
            builder.line_to(proj.project(0.0, 1.0, 0.0));
            builder.close();
        });
        frame.stroke(&base, Stroke::default().with_color(color).with_width(1.0));

        // Vertical axis at the back corner
        let vertical = Path::line(proj.project(0.0, 0.0, 0.0), proj.project(0.0, 0.0, 1.0));
        frame.stroke(&vertical, Stroke::default().with_color(color).with_width(1.0));

        // Axis labels at the midpoints of the two front base edges
        let x_anchor = proj.project(0.5, 1.0, 0.0);
        frame.fill_text(Text {
            content: self.x_label.to_string(),
            position: Point::new(x_anchor.x + 30.0, x_anchor.y + 14.0),
            color,
            size: iced::Pixels(10.0),
            ..Text::default()
        });

        let y_anchor = proj.project(1.0, 0.5, 0.0);
        frame.fill_text(Text {
            content: self.y_label.to_string(),
            position: Point::new(y_anchor.x - 100.0, y_anchor.y + 14.0),
            color,
            size: iced::Pixels(10.0),
            ..Text::default()
        });

        let z_anchor = proj.project(0.0, 0.0, 1.0);
        frame.fill_text(Text {
            content: self.z_label.to_string(),
            position: Point::new(z_anchor.x - 8.0, z_anchor.y - 14.0),
            color,
            size: iced::Pixels(10.0),
            ..Text::default()
        });
    }

    fn draw_surface(&self, frame: &mut Frame, proj: &ProjectionBox, data: &SurfaceData) {
        let rows = data.values.len();
        let cols = data.values[0].len();
        if rows < 2 || cols < 2 {
            return;
        }

        let u = |j: usize| j as f32 / (cols - 1) as f32;
        let v = |i: usize| i as f32 / (rows - 1) as f32;

        // Painter's order: cells farther from the viewer have smaller u + v,
        // so walking the anti-diagonals in ascending order paints back to
        // front.
        for s in 0..(rows - 1) + (cols - 1) {
            for i in 0..rows - 1 {
                let Some(j) = s.checked_sub(i) else { continue };
                if j >= cols - 1 {
                    continue;
                }

                let h00 = data.normalized(data.values[i][j]);
                let h01 = data.normalized(data.values[i][j + 1]);
                let h11 = data.normalized(data.values[i + 1][j + 1]);
                let h10 = data.normalized(data.values[i + 1][j]);

                let quad = Path::new(|builder| {
                    builder.move_to(proj.project(u(j), v(i), h00));
                    builder.line_to(proj.project(u(j + 1), v(i), h01));
                    builder.line_to(proj.project(u(j + 1), v(i + 1), h11));
                    builder.line_to(proj.project(u(j), v(i + 1), h10));
                    builder.close();
                });

                let mean = (h00 + h01 + h11 + h10) / 4.0;
                frame.fill(&quad, viridis(mean));
            }
        }
    }
}

impl canvas::Program<Message> for SurfacePlot<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let proj = ProjectionBox::fit(&bounds);
        let foreground = theme.extended_palette().background.base.text;

        // Title, re-drawn every frame
        frame.fill_text(Text {
            content: self.title.to_string(),
            position: Point::new(bounds.width / 2.0, 8.0),
            color: foreground,
            size: iced::Pixels(13.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });

        if let Some(data) = self.data {
            self.draw_surface(&mut frame, &proj, data);
        }

        let axis_color = Color {
            a: 0.6,
            ..foreground
        };
        self.draw_axes(&mut frame, &proj, axis_color);

        // Domain annotation under the base
        let extent = self
            .data
            .map(|d| format!("{:.0}..{:.0}", d.min, d.max))
            .unwrap_or_else(|| "-5..5".to_string());
        frame.fill_text(Text {
            content: extent,
            position: Point::new(8.0, bounds.height - 16.0),
            color: axis_color,
            size: iced::Pixels(9.0),
            ..Text::default()
        });

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downsampling_keeps_bounds() {
        let field = Array2::from_shape_fn((200, 200), |(i, j)| (i + j) as f64);
        let data = SurfaceData::from_grid(&field, GridSpec::default());

        assert!(data.values.len() <= SurfaceData::MAX_SAMPLES + 1);
        assert!(data.values[0].len() <= SurfaceData::MAX_SAMPLES + 1);
        // First sample always survives downsampling
        assert_eq!(data.values[0][0], 0.0);
        assert_eq!(data.z_min, 0.0);
        assert!(data.z_max > 0.0);
    }

    #[test]
    fn test_normalization_handles_flat_fields() {
        let flat = Array2::from_elem((10, 10), 3.0);
        let data = SurfaceData::from_grid(&flat, GridSpec::default());
        assert_eq!(data.normalized(3.0), 0.5);
    }

    #[test]
    fn test_viridis_endpoints() {
        let low = viridis(0.0);
        let high = viridis(1.0);
        // Dark purple at the bottom, yellow at the top
        assert!(low.b > low.g);
        assert!(high.r > 0.9 && high.g > 0.85 && high.b < 0.3);
        // Out-of-range input clamps instead of extrapolating
        assert_eq!(viridis(-1.0), viridis(0.0));
        assert_eq!(viridis(2.0), viridis(1.0));
    }

    #[test]
    fn test_projection_is_centered() {
        let bounds = Rectangle {
            x: 0.0,
            y: 0.0,
            width: 400.0,
            height: 300.0,
        };
        let proj = ProjectionBox::fit(&bounds);
        let mid = proj.project(0.5, 0.5, 0.5);
        assert!((mid.x - 200.0).abs() < 1e-3);

        // Raising a point moves it up the screen
        let lifted = proj.project(0.5, 0.5, 1.0);
        assert!(lifted.y < mid.y);
    }
}
