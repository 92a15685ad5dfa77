//! Press-tracking wrapper primitive
//!
//! Wraps any element and reports the low-level press state of a button:
//! press-down, release (a tap when it ends over the content) and cancel.
//! Unlike `iced::widget::button`, the pressed state is published to the
//! application so it can drive its own animations.

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::event::Event;
use iced::{Element, Length, Rectangle, Size, mouse, touch};

/// Pointer input relevant to press tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Down,
    Up,
    Moved,
    Lost,
}

/// Press state change produced by an [`Input`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Pressed,
    /// Released while pressed; `tap` when the pointer was still over the content
    Released { tap: bool },
    Cancelled,
}

/// Internal press state, kept in the widget tree
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    is_pressed: bool,
}

impl State {
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Apply an input, given whether the pointer is over the content
    pub fn handle(&mut self, input: Input, is_over: bool) -> Option<Signal> {
        match (input, self.is_pressed) {
            (Input::Down, false) if is_over => {
                self.is_pressed = true;
                Some(Signal::Pressed)
            }
            (Input::Up, true) => {
                self.is_pressed = false;
                Some(Signal::Released { tap: is_over })
            }
            (Input::Moved, true) if !is_over => {
                self.is_pressed = false;
                Some(Signal::Cancelled)
            }
            (Input::Lost, true) => {
                self.is_pressed = false;
                Some(Signal::Cancelled)
            }
            _ => None,
        }
    }
}

/// An element that publishes press-state changes and taps
pub struct Pressable<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    on_press_change: Option<Box<dyn Fn(bool) -> Message + 'a>>,
    on_tap: Option<Message>,
}

impl<'a, Message, Theme, Renderer> Pressable<'a, Message, Theme, Renderer> {
    pub fn new(content: impl Into<Element<'a, Message, Theme, Renderer>>) -> Self {
        Self {
            content: content.into(),
            on_press_change: None,
            on_tap: None,
        }
    }

    /// Message produced with the new pressed state on every change
    pub fn on_press_change(mut self, f: impl Fn(bool) -> Message + 'a) -> Self {
        self.on_press_change = Some(Box::new(f));
        self
    }

    /// Message produced when a press is released over the content
    pub fn on_tap(mut self, message: Message) -> Self {
        self.on_tap = Some(message);
        self
    }
}

impl<'a, Message, Theme, Renderer> Pressable<'a, Message, Theme, Renderer>
where
    Message: Clone,
{
    fn publish(&self, signal: Signal, shell: &mut Shell<'_, Message>) {
        let pressed = matches!(signal, Signal::Pressed);
        if let Some(on_press_change) = &self.on_press_change {
            shell.publish(on_press_change(pressed));
        }
        if let (Signal::Released { tap: true }, Some(on_tap)) = (signal, &self.on_tap) {
            shell.publish(on_tap.clone());
        }
    }
}

/// Map a raw event onto press input
fn input_for(event: &Event) -> Option<Input> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerPressed { .. }) => Some(Input::Down),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Touch(touch::Event::FingerLifted { .. }) => Some(Input::Up),
        Event::Mouse(mouse::Event::CursorMoved { .. })
        | Event::Touch(touch::Event::FingerMoved { .. }) => Some(Input::Moved),
        Event::Mouse(mouse::Event::CursorLeft) | Event::Touch(touch::Event::FingerLost { .. }) => {
            Some(Input::Lost)
        }
        _ => None,
    }
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Pressable<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
    Message: Clone,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<State>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(State::default())
    }

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

        if shell.is_event_captured() {
            return;
        }

        let Some(input) = input_for(event) else {
            return;
        };

        let state = tree.state.downcast_mut::<State>();
        let is_over = cursor.is_over(layout.bounds());

        if let Some(signal) = state.handle(input, is_over) {
            self.publish(signal, shell);
            if input != Input::Moved {
                shell.capture_event();
            }
        }
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
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();

        if state.is_pressed() || cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            self.content.as_widget().mouse_interaction(
                &tree.children[0],
                layout,
                cursor,
                viewport,
                renderer,
            )
        }
    }
}

impl<'a, Message, Theme, Renderer> From<Pressable<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(pressable: Pressable<'a, Message, Theme, Renderer>) -> Self {
        Element::new(pressable)
    }
}
