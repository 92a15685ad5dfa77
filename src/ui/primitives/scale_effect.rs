//! Uniform scale transform primitive
//!
//! Draws its content scaled about the center of its bounds. Layout and hit
//! testing are unaffected: the content keeps its unscaled footprint, like a
//! render-only transform.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::{Element, Length, Point, Rectangle, Size, Transformation, mouse};

/// Transformation scaling by `scale` while keeping `center` fixed
pub fn scale_about(center: Point, scale: f32) -> Transformation {
    Transformation::translate(center.x, center.y)
        * Transformation::scale(scale)
        * Transformation::translate(-center.x, -center.y)
}

/// Wraps an element and draws it scaled
pub struct ScaleEffect<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    scale: f32,
}

impl<'a, Message, Theme, Renderer> ScaleEffect<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>, scale: f32) -> Self {
        Self {
            content: content.into(),
            scale,
        }
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for ScaleEffect<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(std::slice::from_ref(&self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let transformation = scale_about(layout.bounds().center(), self.scale);

        renderer.with_transformation(transformation, |renderer| {
            self.content.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                layout,
                cursor,
                viewport,
            );
        });
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content
            .as_widget()
            .mouse_interaction(&tree.children[0], layout, cursor, viewport, renderer)
    }
}

impl<'a, Message, Theme, Renderer> From<ScaleEffect<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(effect: ScaleEffect<'a, Message, Theme, Renderer>) -> Self {
        Element::new(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_fixed() {
        let center = Point::new(35.0, 35.0);
        let moved = center * scale_about(center, 0.86);
        assert!((moved.x - 35.0).abs() < 1e-4);
        assert!((moved.y - 35.0).abs() < 1e-4);
    }

    #[test]
    fn test_corner_moves_towards_center() {
        let center = Point::new(35.0, 35.0);
        let corner = Point::ORIGIN * scale_about(center, 0.86);
        // 35 * (1 - 0.86)
        assert!((corner.x - 4.9).abs() < 1e-3);
        assert!((corner.y - 4.9).abs() < 1e-3);
    }

    #[test]
    fn test_identity_scale() {
        let point = Point::new(12.0, 50.0);
        let same = point * scale_about(Point::new(35.0, 35.0), 1.0);
        assert!((same.x - 12.0).abs() < 1e-4);
        assert!((same.y - 50.0).abs() < 1e-4);
    }
}
