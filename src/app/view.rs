// src/app/view.rs
//! Application view rendering

use iced::time::Instant;
use iced::widget::container;
use iced::{Element, Length};

use super::App;
use super::message::Message;
use crate::ui::primitives::Pressable;
use crate::ui::theme;
use crate::ui::widgets::animated_button;

impl App {
    /// Build the window view: the decorated button centered on the background
    pub fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();

        let row_width = self.glyph_row_width();
        let glyphs = self.button.glyphs(row_width / 2.0, now);
        let content = animated_button::view(glyphs, row_width);

        let decorated = self.press.view(content, self.control_size(), now);

        let control = Pressable::new(decorated)
            .on_press_change(Message::PressChanged)
            .on_tap(Message::Tapped);

        container(control)
            .center(Length::Fill)
            .style(theme::window_container)
            .into()
    }
}
