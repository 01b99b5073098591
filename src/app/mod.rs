// SPDX-License-Identifier: MPL-2.0
//! Application root state and the bridge between Iced and the effects layer.
//!
//! The `App` struct owns the effects [`Controller`], localization and the
//! resolved theme. It translates Iced messages into controller events and
//! controller effects into Iced tasks. Anchor scrolls are animated here,
//! since only the view layer can move the scrollable.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};
pub use subscription::FRAME_INTERVAL;

use crate::config::{self, Config};
use crate::domain::smooth_scroll::ScrollAnimation;
use crate::effects::{Controller, Effect, Event, HeroText, PageLayout, ViewHandle};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Kind, NotificationMessage};
use crate::ui::page;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    controller: Controller,
    theme: Theme,
    window_size: Size,
    /// Latest raw page offset, the origin for anchor scroll animations.
    page_offset: f32,
    smooth_scroll: Option<ScrollAnimation>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("window_size", &self.window_size)
            .field("page_offset", &self.page_offset)
            .field("menu_open", &self.controller.menu().is_open())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir.clone());

    // iced 0.14 requires an `Fn` boot closure.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(None, &Config::default())
    }
}

impl App {
    /// Loads settings, activates the page and surfaces a config warning.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(flags.lang, &config);

        if let Some(key) = config_warning {
            app.controller.notify(Kind::Error, &key);
        }

        (app, Task::none())
    }

    fn with_config(lang: Option<String>, config: &Config) -> Self {
        let i18n = I18n::new(lang, config);
        let mut controller = Controller::new(
            PageLayout::portfolio(),
            config.effects_settings(),
            crate::domain::clock::SystemClock,
        );
        let window_size = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);

        controller.handle(Event::Activate {
            hero: HeroText {
                lead_in: i18n.tr("hero-lead-in"),
                name: i18n.tr("hero-name"),
            },
            viewport_height: window_size.height,
        });

        Self {
            i18n,
            controller,
            theme: config.general.theme_mode.iced_theme(),
            window_size,
            page_offset: 0.0,
            smooth_scroll: None,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.controller.needs_tick() || self.smooth_scroll.is_some(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(message) => {
                let task = self.dispatch(Event::Click(message.handle()));
                if self.controller.menu().scroll_locked() && self.smooth_scroll.take().is_some() {
                    tracing::debug!("anchor scroll stopped by the open menu");
                }
                task
            }
            Message::Page(message) => {
                if let page::Message::Scrolled { offset_y, .. } = message {
                    self.page_offset = offset_y;
                }
                self.dispatch(message.into_event())
            }
            Message::Notification(NotificationMessage::Dismiss(id)) => {
                self.dispatch(Event::Click(ViewHandle::ToastClose(id)))
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                self.dispatch(Event::Resized {
                    viewport_height: size.height,
                })
            }
            Message::WheelScrolled => {
                if !self.controller.menu().scroll_locked() && self.smooth_scroll.take().is_some() {
                    tracing::debug!("anchor scroll interrupted");
                }
                Task::none()
            }
            Message::Tick(_) => {
                self.controller.handle(Event::Tick);
                self.step_smooth_scroll()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            controller: &self.controller,
            window_size: self.window_size,
        })
    }

    /// Hands an event to the controller and starts any requested scroll.
    fn dispatch(&mut self, event: Event) -> Task<Message> {
        match self.controller.handle(event) {
            Some(Effect::ScrollTo { offset_y }) => {
                let now = self.controller.now();
                self.smooth_scroll = Some(ScrollAnimation::new(self.page_offset, offset_y, now));
                self.step_smooth_scroll()
            }
            Some(Effect::HoldAt { offset_y }) => {
                self.page_offset = offset_y as f32;
                operation::scroll_to(
                    Id::new(page::SCROLLABLE_ID),
                    AbsoluteOffset {
                        x: 0.0,
                        y: self.page_offset,
                    },
                )
            }
            Some(Effect::CopyToClipboard(text)) => iced::clipboard::write(text.to_string()),
            None => Task::none(),
        }
    }

    /// Moves the page one frame along the running anchor scroll.
    fn step_smooth_scroll(&mut self) -> Task<Message> {
        let Some(animation) = self.smooth_scroll else {
            return Task::none();
        };

        let now = self.controller.now();
        let offset = animation.offset_at(now);
        if animation.is_finished(now) {
            self.smooth_scroll = None;
        }

        operation::scroll_to(
            Id::new(page::SCROLLABLE_ID),
            AbsoluteOffset { x: 0.0, y: offset },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::Field;
    use crate::effects::layout;
    use crate::ui::navbar;
    use crate::ui::notifications::Phase;

    #[test]
    fn default_app_activates_the_page() {
        let app = App::default();
        assert!(app.controller.typewriter().is_some());
        assert!(app.controller.needs_tick());
        assert!(app.smooth_scroll.is_none());
    }

    #[test]
    fn navbar_toggle_opens_and_outside_press_closes() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.controller.menu().is_open());
        assert!(app.controller.menu().scroll_locked());

        let _ = app.update(Message::Page(page::Message::Pressed));
        assert!(!app.controller.menu().is_open());
    }

    #[test]
    fn scrollbar_drag_is_pulled_back_while_menu_is_open() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::Scrolled {
            offset_y: 300.0,
            viewport_height: 800.0,
        }));
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        let held = app.controller.scroll_state().offset_y;
        assert_eq!(held, 300);

        let _ = app.update(Message::Page(page::Message::Scrolled {
            offset_y: 900.0,
            viewport_height: 800.0,
        }));
        let _ = app.update(Message::Tick(app.controller.now()));

        assert_eq!(app.controller.scroll_state().offset_y, held);
        assert_eq!(app.page_offset, held as f32);
    }

    #[test]
    fn opening_the_menu_stops_anchor_scroll() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::HeroButton(layout::BLOG.to_string())));
        assert!(app.smooth_scroll.is_some());

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.smooth_scroll.is_none());
    }

    #[test]
    fn social_link_press_shows_copied_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::SocialLink(0)));

        let toast = app.controller.notifications().visible().expect("copied toast");
        assert_eq!(toast.kind(), Kind::Info);
        assert_eq!(toast.message_key(), crate::effects::LINK_COPIED_KEY);
        assert_eq!(
            toast.message_args(),
            &[("name".to_string(), "GitHub".to_string())]
        );
    }

    #[test]
    fn nav_link_starts_anchor_scroll() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::GoTo(layout::CONTACT.to_string())));

        let animation = app.smooth_scroll.expect("anchor scroll");
        let contact_top = app
            .controller
            .layout()
            .section(layout::CONTACT)
            .map(|section| section.top_offset)
            .expect("contact section");
        assert_eq!(animation.target(), (contact_top - 70) as f32);
    }

    #[test]
    fn unknown_anchor_does_not_scroll() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::GoTo("missing".to_string())));
        assert!(app.smooth_scroll.is_none());
    }

    #[test]
    fn wheel_interrupts_anchor_scroll() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::HeroButton(layout::BLOG.to_string())));
        assert!(app.smooth_scroll.is_some());

        let _ = app.update(Message::WheelScrolled);
        assert!(app.smooth_scroll.is_none());
    }

    #[test]
    fn scroll_messages_track_page_offset() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::Scrolled {
            offset_y: 420.0,
            viewport_height: 800.0,
        }));
        assert_eq!(app.page_offset, 420.0);
    }

    #[test]
    fn edits_reach_the_contact_form() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::Edit(Field::Name, "Ada".into())));
        assert_eq!(app.controller.submission().form().name, "Ada");
    }

    #[test]
    fn window_resize_is_recorded() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(Size::new(600.0, 700.0)));
        assert_eq!(app.window_size, Size::new(600.0, 700.0));
    }

    #[test]
    fn toast_close_dismisses_visible_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Page(page::Message::Submit));
        let id = app
            .controller
            .notifications()
            .visible()
            .map(|toast| toast.id())
            .expect("validation toast");

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        let notifications = app.controller.notifications();
        let toast = notifications.visible().expect("leaving toast");
        assert_eq!(
            toast.phase(app.controller.now(), notifications.timing()),
            Phase::Leaving
        );
    }
}
