use crate::chart::{series_color, Chart};
use crate::Message;
use iced::{
    widget::{canvas::Canvas, column, text, Container, Row},
    Element, Length, Task, Theme,
};
use wavecore::plot::{Bounds, Figure};
use wavecore::PlotBackend;

/// Shows the figure in a native window and blocks until it is closed.
pub struct WindowBackend;

impl PlotBackend for WindowBackend {
    type Error = iced::Error;

    fn display(&mut self, figure: Figure) -> Result<(), Self::Error> {
        log::info!("opening plot window with {} series", figure.series.len());
        iced::application(
            move || Viewer::boot(figure.clone()),
            Viewer::update,
            Viewer::view,
        )
        .title(Viewer::title)
        .theme(Viewer::theme)
        .run()
    }
}

#[derive(Debug)]
struct Viewer {
    figure: Figure,
    bounds: Bounds,
}

impl Viewer {
    fn boot(figure: Figure) -> (Self, Task<Message>) {
        let bounds = figure.bounds();
        (Viewer { figure, bounds }, Task::none())
    }

    fn title(state: &Self) -> String {
        state.figure.title.clone()
    }

    fn theme(_: &Self) -> Theme {
        Theme::Dark
    }

    fn update(_state: &mut Self, message: Message) -> Task<Message> {
        match message {}
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let chart = Canvas::new(Chart {
            figure: &state.figure,
            bounds: state.bounds,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let legend = state
            .figure
            .series
            .iter()
            .fold(Row::new().spacing(18), |row, series| {
                row.push(
                    text(format!("{} ({:?})", series.label, series.style).to_lowercase())
                        .size(14)
                        .color(series_color(series.color)),
                )
            });

        let layout = column![chart, legend].spacing(10).padding(16);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
