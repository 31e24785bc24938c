use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, ContentFit, Element, Length, Theme};

use crate::source::thumbnail;
use crate::state::data::ImageRef;
use crate::ui::style::Stylesheet;
use crate::Message;

/// Bounding box the full image is scaled to fit
pub const FULL_IMAGE_WIDTH: f32 = 600.0;
pub const FULL_IMAGE_HEIGHT: f32 = 400.0;

const BUTTON_BOX_PADDING: f32 = 20.0;

/// Label of the only control on the detail screen
pub const BACK_LABEL: &str = "Back to Thumbnails";

/// One image shown full-size, with a way back to the grid
#[derive(Debug, Clone)]
pub struct FullImageView {
    image: ImageRef,
    handle: image::Handle,
}

impl FullImageView {
    pub fn new(image: ImageRef) -> Self {
        let handle = thumbnail::handle_for(&image);
        FullImageView { image, handle }
    }

    /// The image being shown
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn view<'a>(&self, style: &'a Stylesheet) -> Element<'a, Message> {
        let picture = image(self.handle.clone())
            .width(Length::Fixed(FULL_IMAGE_WIDTH))
            .height(Length::Fixed(FULL_IMAGE_HEIGHT))
            .content_fit(ContentFit::Contain);

        let framed = container(picture)
            .style(move |_theme: &Theme| style.full_image.container_style());

        let back = button(text(BACK_LABEL))
            .on_press(Message::BackToGrid)
            .padding(10)
            .style(move |theme: &Theme, status| style.nav_button.button_style(theme, status));

        let controls = row![back, text(self.image().file_name())]
            .spacing(20)
            .align_y(Alignment::Center);

        let button_box = container(controls)
            .padding(BUTTON_BOX_PADDING)
            .width(Length::Fill)
            .style(move |_theme: &Theme| style.button_box.container_style());

        column![
            container(framed)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            button_box,
        ]
        .into()
    }
}
