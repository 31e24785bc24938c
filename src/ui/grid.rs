use iced::widget::{container, image, mouse_area, scrollable, text, tooltip};
use iced::{mouse, ContentFit, Element, Length, Padding, Pixels, Theme};
use iced_aw::Wrap;
use tracing::warn;

use crate::source::thumbnail;
use crate::state::data::ImageRef;
use crate::state::library::Library;
use crate::ui::style::Stylesheet;
use crate::Message;

/// Edge length of the square thumbnail box
pub const THUMBNAIL_SIZE: f32 = 150.0;

/// Gap between thumbnails, horizontally and vertically
const GAP: f32 = 20.0;

/// Padding around the whole grid
const PADDING: f32 = 20.0;

/// A thumbnail that resolved and can be drawn
#[derive(Debug, Clone)]
pub struct Thumbnail {
    image: ImageRef,
    handle: image::Handle,
}

impl Thumbnail {
    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}

/// The thumbnail grid for one visit to the grid screen
///
/// Built fresh from the library each time the grid is shown.
#[derive(Debug, Clone)]
pub struct ThumbnailGrid {
    tiles: Vec<Thumbnail>,
    directory: String,
}

impl ThumbnailGrid {
    /// Resolve every image in the library, skipping the ones that fail
    pub fn build(library: &Library) -> Self {
        let tiles = library
            .images()
            .iter()
            .filter_map(|image| match thumbnail::resolve(image) {
                Ok(handle) => Some(Thumbnail {
                    image: image.clone(),
                    handle,
                }),
                Err(err) => {
                    warn!("{err}");
                    None
                }
            })
            .collect();

        ThumbnailGrid {
            tiles,
            directory: library.directory().display().to_string(),
        }
    }

    /// The thumbnails that will be drawn, in library order
    pub fn tiles(&self) -> &[Thumbnail] {
        &self.tiles
    }

    pub fn view<'a>(&'a self, style: &'a Stylesheet) -> Element<'a, Message> {
        if self.tiles.is_empty() {
            return container(text(format!("No images found in {}", self.directory)))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }

        let thumbnails: Vec<Element<'a, Message>> = self
            .tiles
            .iter()
            .map(|tile| {
                let picture = image(tile.handle.clone())
                    .width(Length::Fixed(THUMBNAIL_SIZE))
                    .height(Length::Fixed(THUMBNAIL_SIZE))
                    .content_fit(ContentFit::Contain);

                let framed = container(picture)
                    .style(move |_theme: &Theme| style.thumbnail.container_style());

                let clickable = mouse_area(framed)
                    .on_press(Message::ThumbnailSelected(tile.image().clone()))
                    .interaction(mouse::Interaction::Pointer);

                tooltip(
                    clickable,
                    text(tile.image().file_name()),
                    tooltip::Position::Bottom,
                )
                .into()
            })
            .collect();

        let grid = Wrap::with_elements(thumbnails)
            .spacing(Pixels(GAP))
            .line_spacing(Pixels(GAP))
            .padding(Padding::new(PADDING));

        // Scrollbars only appear when the grid overflows the viewport
        scrollable(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
