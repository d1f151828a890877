use crate::Message;
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
    Color, Point, Rectangle, Renderer, Size, Theme,
};
use wavecore::plot::{Bounds, DrawStyle, Figure, SeriesColor};

const MARGIN: f32 = 18.0;
const MARKER_RADIUS: f32 = 2.2;
const LINE_WIDTH: f32 = 2.0;

pub fn series_color(color: SeriesColor) -> Color {
    let [r, g, b] = color.rgb();
    Color::from_rgb(r, g, b)
}

/// Maps data coordinates into the inset plotting area of a canvas.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    bounds: Bounds,
    area: Size,
}

impl Viewport {
    pub fn new(bounds: Bounds, canvas: Size) -> Self {
        let area = Size::new(
            (canvas.width - 2.0 * MARGIN).max(1.0),
            (canvas.height - 2.0 * MARGIN).max(1.0),
        );
        Self { bounds, area }
    }

    pub fn point(&self, x: f64, y: f64) -> Point {
        let (px, py) = self.bounds.project(x, y, self.area.width, self.area.height);
        Point::new(px + MARGIN, py + MARGIN)
    }
}

/// Canvas program drawing every series of a figure on one plane.
pub struct Chart<'a> {
    pub figure: &'a Figure,
    pub bounds: Bounds,
}

impl Chart<'_> {
    fn draw_axes(&self, frame: &mut Frame, viewport: &Viewport) {
        let b = self.bounds;
        let axes = Path::new(|builder| {
            if b.contains_y(0.0) {
                builder.move_to(viewport.point(b.x_min, 0.0));
                builder.line_to(viewport.point(b.x_max, 0.0));
            }
            if b.contains_x(0.0) {
                builder.move_to(viewport.point(0.0, b.y_min));
                builder.line_to(viewport.point(0.0, b.y_max));
            }
        });
        frame.stroke(
            &axes,
            Stroke::default()
                .with_color(Color::from_rgb(0.35, 0.35, 0.45))
                .with_width(1.0),
        );
    }
}

impl canvas::Program<Message> for Chart<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let viewport = Viewport::new(self.bounds, bounds.size());
        self.draw_axes(&mut frame, &viewport);

        for series in &self.figure.series {
            let color = series_color(series.color);
            match series.style {
                DrawStyle::Points => {
                    let markers = Path::new(|builder| {
                        for (x, y) in series.points() {
                            builder.circle(viewport.point(x, y), MARKER_RADIUS);
                        }
                    });
                    frame.fill(&markers, color);
                }
                DrawStyle::Line => {
                    if series.x.len() < 2 {
                        continue;
                    }
                    let line = Path::new(|builder| {
                        for (i, (x, y)) in series.points().enumerate() {
                            if i == 0 {
                                builder.move_to(viewport.point(x, y));
                            } else {
                                builder.line_to(viewport.point(x, y));
                            }
                        }
                    });
                    frame.stroke(
                        &line,
                        Stroke::default().with_width(LINE_WIDTH).with_color(color),
                    );
                }
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_keeps_points_inside_margin() {
        let bounds = Bounds {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -2.0,
            y_max: 2.0,
        };
        let viewport = Viewport::new(bounds, Size::new(236.0, 136.0));
        assert_eq!(viewport.point(-1.0, 2.0), Point::new(MARGIN, MARGIN));
        assert_eq!(viewport.point(1.0, -2.0), Point::new(218.0, 118.0));
    }

    #[test]
    fn tiny_canvas_still_has_positive_area() {
        let bounds = Bounds::enclosing([(0.0, 0.0), (1.0, 1.0)]);
        let viewport = Viewport::new(bounds, Size::new(4.0, 4.0));
        let p = viewport.point(1.0, 0.0);
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn series_colors_map_to_distinct_rgb() {
        let yellow = series_color(SeriesColor::Yellow);
        let blue = series_color(SeriesColor::Blue);
        assert!(yellow.r > blue.r);
        assert!(blue.b > yellow.b);
    }
}
