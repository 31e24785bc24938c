use iced::widget::container;
use iced::{window, Element, Length, Task, Theme};
use tracing::{debug, info};

mod config;
mod error;
mod source;
mod state;
mod ui;

use config::GalleryConfig;
use state::data::{GalleryState, ImageRef};
use state::library::Library;
use ui::detail::FullImageView;
use ui::grid::ThumbnailGrid;
use ui::style::Stylesheet;

/// Main application state
struct Gallery {
    /// Images found by the startup scan, never rescanned
    library: Library,
    /// Which screen is showing
    state: GalleryState,
    /// Grid built on the last transition to `Grid`
    grid: ThumbnailGrid,
    stylesheet: Stylesheet,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked a thumbnail
    ThumbnailSelected(ImageRef),
    /// User pressed "Back to Thumbnails"
    BackToGrid,
}

impl Gallery {
    /// Scan the image folder and show the grid
    fn new(config: &GalleryConfig) -> Self {
        let library = Library::load(&config.image_dir);
        let stylesheet = Stylesheet::load();
        let grid = ThumbnailGrid::build(&library);

        if library.is_empty() {
            info!("no images to show in {}", library.directory().display());
        }

        info!(
            "Gallery initialized with {} images ({} shown)",
            library.len(),
            grid.tiles().len()
        );

        Gallery {
            library,
            state: GalleryState::default(),
            grid,
            stylesheet,
        }
    }

    /// Startup: build the state, then switch the window to fullscreen
    fn boot(config: GalleryConfig) -> (Self, Task<Message>) {
        let gallery = Self::new(&config);

        let task = if config.fullscreen {
            window::get_oldest()
                .and_then(|id| window::change_mode(id, window::Mode::Fullscreen))
        } else {
            Task::none()
        };

        (gallery, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailSelected(image) => {
                if let Some(previous) = self.state.selected() {
                    debug!(previous = %previous, "replacing selection");
                }
                info!(image = %image, "showing full image");
                self.state.select(image);
            }
            Message::BackToGrid => {
                if self.state.back() {
                    // Never cached: resolve the library again on every visit
                    self.grid = ThumbnailGrid::build(&self.library);
                    info!(shown = self.grid.tiles().len(), "back to thumbnails");
                } else {
                    debug!("already on the thumbnail grid");
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content = match &self.state {
            GalleryState::Grid => self.grid.view(&self.stylesheet),
            GalleryState::Detail(image) => {
                FullImageView::new(image.clone()).view(&self.stylesheet)
            }
        };

        let root = self.stylesheet.root;

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| root.container_style())
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = GalleryConfig::default();
    info!(directory = %config.image_dir.display(), "Gallery starting");

    iced::application(config.title, Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .window_size(config.window_size)
        .centered()
        .run_with(move || Gallery::boot(config))
}
