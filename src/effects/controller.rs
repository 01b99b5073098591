// SPDX-License-Identifier: MPL-2.0
//! The UI effects controller.
//!
//! Owns every piece of page state and reacts to [`Event`]s one at a time.
//! Time comes from the injected [`Clock`]; deadlines are only acted on when a
//! [`Event::Tick`] arrives, so the caller decides how often to poll via
//! [`Controller::needs_tick`].

use super::event::{Effect, Event, HeroText, ViewHandle};
use super::layout::PageLayout;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::contact::{self, SubmitOutcome, Submission};
use crate::domain::navigation::MenuState;
use crate::domain::rate_limit::RateLimiter;
use crate::domain::reveal::{RevealTracker, SkillPulse};
use crate::domain::scroll::{self, ScrollDerived, ScrollState, ScrollThresholds};
use crate::domain::typewriter::{Typewriter, TypewriterTiming};
use crate::ui::notifications::{Kind, Manager, Notification, Timing};
use std::time::{Duration, Instant};

/// Default scroll rate-limit interval, about one frame at 60 Hz.
pub const DEFAULT_RATE_LIMIT: Duration = Duration::from_millis(16);

pub const CONTACT_SUCCESS_KEY: &str = "notification-contact-success";
pub const LINK_COPIED_KEY: &str = "notification-link-copied";

/// Tunable timings and thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub thresholds: ScrollThresholds,
    pub rate_limit: Duration,
    pub toast: Timing,
    pub typewriter: TypewriterTiming,
    pub submit_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            thresholds: ScrollThresholds::default(),
            rate_limit: DEFAULT_RATE_LIMIT,
            toast: Timing::default(),
            typewriter: TypewriterTiming::default(),
            submit_delay: contact::DEFAULT_SUBMIT_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollSample {
    offset_y: f32,
    viewport_height: f32,
}

pub struct Controller<C: Clock = SystemClock> {
    clock: C,
    layout: PageLayout,
    settings: Settings,
    menu: MenuState,
    scroll_limiter: RateLimiter<ScrollSample>,
    scroll_state: ScrollState,
    viewport_height: u32,
    derived: ScrollDerived,
    notifications: Manager,
    typewriter: Option<Typewriter>,
    submission: Submission,
    reveal: RevealTracker,
    skill_pulse: SkillPulse,
    activated: bool,
}

impl<C: Clock> Controller<C> {
    #[must_use]
    pub fn new(layout: PageLayout, settings: Settings, clock: C) -> Self {
        let reveal = RevealTracker::new(layout.reveal_targets.clone());
        let skill_pulse = SkillPulse::new(layout.skill_tags);
        Self {
            clock,
            settings,
            menu: MenuState::new(),
            scroll_limiter: RateLimiter::throttle(settings.rate_limit),
            scroll_state: ScrollState::default(),
            viewport_height: 0,
            derived: ScrollDerived::default(),
            notifications: Manager::with_timing(settings.toast),
            typewriter: None,
            submission: Submission::new(settings.submit_delay),
            reveal,
            skill_pulse,
            activated: false,
            layout,
        }
    }

    /// Applies one event and returns what the view must do in response.
    pub fn handle(&mut self, event: Event) -> Option<Effect> {
        let now = self.clock.now();
        match event {
            Event::Activate {
                hero,
                viewport_height,
            } => {
                self.activate(hero, viewport_height, now);
                None
            }
            Event::Click(handle) => self.click(handle, now),
            Event::Scrolled {
                offset_y,
                viewport_height,
            } => {
                if self.menu.scroll_locked() {
                    return self.hold_scroll(offset_y);
                }
                self.scroll_limiter.push(
                    ScrollSample {
                        offset_y,
                        viewport_height,
                    },
                    now,
                );
                None
            }
            Event::Resized { viewport_height } => {
                self.viewport_height = pixels(viewport_height);
                self.reveal
                    .observe(self.scroll_state.offset_y, self.viewport_height, now);
                None
            }
            Event::Edit(field, value) => {
                if self.layout.has_contact_form {
                    self.submission.edit(field, value);
                }
                None
            }
            Event::Submit => {
                self.submit(now);
                None
            }
            Event::Tick => {
                self.tick(now);
                None
            }
        }
    }

    /// Shows a toast that did not come from a page event.
    pub fn notify(&mut self, kind: Kind, message_key: &str) {
        let now = self.clock.now();
        self.notifications
            .emit(Notification::new(kind, message_key, now));
    }

    fn activate(&mut self, hero: HeroText, viewport_height: f32, now: Instant) {
        if self.activated {
            return;
        }
        self.activated = true;
        self.viewport_height = pixels(viewport_height);

        if self.layout.has_hero_title {
            let mut typewriter = Typewriter::new(hero.lead_in, hero.name, self.settings.typewriter);
            typewriter.start(now);
            self.typewriter = Some(typewriter);
        }
        self.skill_pulse.start(now);
        self.apply_scroll(self.scroll_state, now);
        tracing::debug!(viewport_height = self.viewport_height, "page activated");
    }

    fn click(&mut self, handle: ViewHandle, now: Instant) -> Option<Effect> {
        if self.menu.handle_click(handle.click_region()) {
            tracing::debug!(open = self.menu.is_open(), "menu toggled");
            // Settle on the latest offset before it freezes.
            if self.menu.scroll_locked() {
                if let Some(sample) = self.scroll_limiter.flush() {
                    self.viewport_height = pixels(sample.viewport_height);
                    self.apply_scroll(ScrollState::from_raw(sample.offset_y), now);
                }
            }
        }
        match handle {
            ViewHandle::NavLink(target) | ViewHandle::HeroButton(target) => {
                self.anchor_scroll(&target)
            }
            ViewHandle::BackToTop if self.layout.has_back_to_top => {
                Some(Effect::ScrollTo { offset_y: 0 })
            }
            ViewHandle::ToastClose(id) => {
                self.notifications.dismiss(id, now);
                None
            }
            ViewHandle::SocialLink(index) => self.copy_social_link(index, now),
            ViewHandle::BackToTop
            | ViewHandle::MenuToggle
            | ViewHandle::MenuPanel
            | ViewHandle::Page => None,
        }
    }

    /// Scroll notification received while the menu holds the page still.
    fn hold_scroll(&self, offset_y: f32) -> Option<Effect> {
        let held = self.scroll_state.offset_y;
        if pixels(offset_y) == held {
            return None;
        }
        tracing::trace!(requested = offset_y, held, "scroll locked");
        Some(Effect::HoldAt { offset_y: held })
    }

    /// Copies a social profile URL and confirms with a toast.
    fn copy_social_link(&mut self, index: usize, now: Instant) -> Option<Effect> {
        let link = self.layout.social_links.get(index)?;
        self.notifications
            .emit(Notification::info(LINK_COPIED_KEY, now).with_arg("name", link.name));
        Some(Effect::CopyToClipboard(link.url))
    }

    /// Scroll target for an in-page anchor; unknown anchors do nothing.
    fn anchor_scroll(&self, target: &str) -> Option<Effect> {
        let Some(section) = self.layout.section(target) else {
            tracing::debug!(anchor = target, "ignoring unknown anchor");
            return None;
        };
        Some(Effect::ScrollTo {
            offset_y: section.anchor_target(self.settings.thresholds.anchor),
        })
    }

    fn submit(&mut self, now: Instant) {
        if !self.layout.has_contact_form {
            return;
        }
        match self.submission.submit(now) {
            SubmitOutcome::Rejected(error) => {
                tracing::debug!(%error, "contact form rejected");
                self.notifications
                    .emit(Notification::error(error.i18n_key(), now));
            }
            SubmitOutcome::Started => tracing::info!("contact form submitting"),
            SubmitOutcome::Busy => {}
        }
    }

    fn tick(&mut self, now: Instant) {
        if let Some(sample) = self.scroll_limiter.poll(now) {
            self.viewport_height = pixels(sample.viewport_height);
            self.apply_scroll(ScrollState::from_raw(sample.offset_y), now);
        }

        self.notifications.tick(now);

        if let Some(typewriter) = self.typewriter.as_mut() {
            let was_done = typewriter.is_done();
            typewriter.poll(now);
            if !was_done && typewriter.is_done() {
                tracing::debug!("typewriter finished");
            }
        }

        if self.submission.poll(now) {
            tracing::info!("contact form sent");
            self.notifications
                .emit(Notification::success(CONTACT_SUCCESS_KEY, now));
        }
    }

    fn apply_scroll(&mut self, state: ScrollState, now: Instant) {
        self.scroll_state = state;
        let derived = scroll::derive(state, &self.layout.sections, &self.settings.thresholds);
        if derived.active_section != self.derived.active_section {
            tracing::debug!(section = ?derived.active_section, "active section changed");
        }
        self.derived = derived;

        let revealed = self.reveal.observe(state.offset_y, self.viewport_height, now);
        if !revealed.is_empty() {
            tracing::trace!(?revealed, "revealed");
        }
    }

    /// Whether something is pending that needs periodic ticks.
    #[must_use]
    pub fn needs_tick(&self) -> bool {
        let now = self.clock.now();
        self.scroll_limiter.is_pending()
            || self.notifications.has_notifications()
            || self.typewriter.as_ref().is_some_and(Typewriter::is_running)
            || self.submission.is_submitting()
            || self.reveal.is_animating(now)
            || self.skill_pulse.is_active(now)
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    #[must_use]
    pub fn derived(&self) -> &ScrollDerived {
        &self.derived
    }

    /// Hero background displacement for the current offset.
    #[must_use]
    pub fn parallax_offset(&self) -> f32 {
        scroll::parallax_offset(self.scroll_state.offset_y)
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.as_ref()
    }

    #[must_use]
    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    #[must_use]
    pub fn skill_pulse(&self) -> &SkillPulse {
        &self.skill_pulse
    }
}

/// Rounds a logical pixel length, clamping negatives to zero.
fn pixels(raw: f32) -> u32 {
    ScrollState::from_raw(raw).offset_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::domain::contact::{Field, ValidationError};
    use crate::domain::scroll::NavSection;
    use crate::effects::layout::{self, targets};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn hero() -> HeroText {
        HeroText {
            lead_in: "Hi, I'm ".into(),
            name: "Al".into(),
        }
    }

    fn portfolio(clock: &ManualClock) -> Controller<ManualClock> {
        let mut controller =
            Controller::new(PageLayout::portfolio(), Settings::default(), clock.clone());
        controller.handle(Event::Activate {
            hero: hero(),
            viewport_height: 800.0,
        });
        controller
    }

    fn scroll_to(controller: &mut Controller<ManualClock>, clock: &ManualClock, offset: f32) {
        controller.handle(Event::Scrolled {
            offset_y: offset,
            viewport_height: 800.0,
        });
        clock.advance(DEFAULT_RATE_LIMIT);
        controller.handle(Event::Tick);
    }

    fn fill_form(controller: &mut Controller<ManualClock>, message: &str) {
        controller.handle(Event::Edit(Field::Name, "Ada".into()));
        controller.handle(Event::Edit(Field::Email, "ada@example.com".into()));
        controller.handle(Event::Edit(Field::Message, message.into()));
    }

    #[test]
    fn toggle_locks_scroll_and_outside_click_unlocks() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);

        controller.handle(Event::Click(ViewHandle::MenuToggle));
        assert!(controller.menu().scroll_locked());

        controller.handle(Event::Click(ViewHandle::MenuPanel));
        assert!(controller.menu().is_open());

        controller.handle(Event::Click(ViewHandle::Page));
        assert!(!controller.menu().scroll_locked());
    }

    #[test]
    fn open_menu_holds_the_page_against_scrollbar_drags() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        scroll_to(&mut controller, &clock, 200.0);
        controller.handle(Event::Click(ViewHandle::MenuToggle));

        let effect = controller.handle(Event::Scrolled {
            offset_y: 900.0,
            viewport_height: 800.0,
        });
        assert_eq!(effect, Some(Effect::HoldAt { offset_y: 200 }));

        clock.advance(DEFAULT_RATE_LIMIT);
        controller.handle(Event::Tick);
        assert!(controller.menu().scroll_locked());
        assert_eq!(controller.scroll_state().offset_y, 200);
        assert!(!controller.reveal().is_revealed("blog-header"));

        // The restored offset echoes back unchanged.
        let echo = controller.handle(Event::Scrolled {
            offset_y: 200.0,
            viewport_height: 800.0,
        });
        assert_eq!(echo, None);

        controller.handle(Event::Click(ViewHandle::Page));
        scroll_to(&mut controller, &clock, 900.0);
        assert_eq!(controller.scroll_state().offset_y, 900);
    }

    #[test]
    fn opening_menu_settles_a_pending_scroll_first() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);

        controller.handle(Event::Scrolled {
            offset_y: 450.0,
            viewport_height: 800.0,
        });
        assert_eq!(controller.scroll_state().offset_y, 0);

        controller.handle(Event::Click(ViewHandle::MenuToggle));
        assert_eq!(controller.scroll_state().offset_y, 450);
        assert!(controller.derived().navbar_scrolled);
    }

    #[test]
    fn social_link_copies_url_and_confirms() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        let link = layout::SOCIAL_LINKS[1];

        let effect = controller.handle(Event::Click(ViewHandle::SocialLink(1)));
        assert_eq!(effect, Some(Effect::CopyToClipboard(link.url)));

        let toast = controller.notifications().visible().expect("copied toast");
        assert_eq!(toast.kind(), Kind::Info);
        assert_eq!(toast.message_key(), LINK_COPIED_KEY);
        assert_eq!(
            toast.message_args(),
            &[("name".to_string(), link.name.to_string())]
        );
    }

    #[test]
    fn social_link_out_of_range_is_ignored() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        assert_eq!(controller.handle(Event::Click(ViewHandle::SocialLink(7))), None);

        let mut bare = Controller::new(PageLayout::bare(Vec::new()), Settings::default(), clock);
        assert_eq!(bare.handle(Event::Click(ViewHandle::SocialLink(0))), None);
        assert!(!bare.notifications().has_notifications());
    }

    #[test]
    fn nav_link_closes_menu_and_scrolls_below_navbar() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        controller.handle(Event::Click(ViewHandle::MenuToggle));

        let effect = controller.handle(Event::Click(ViewHandle::NavLink(layout::ABOUT.into())));
        assert_eq!(effect, Some(Effect::ScrollTo { offset_y: 720 - 70 }));
        assert!(!controller.menu().is_open());
    }

    #[test]
    fn anchor_to_first_section_clamps_at_zero() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        let effect = controller.handle(Event::Click(ViewHandle::NavLink(layout::HOME.into())));
        assert_eq!(effect, Some(Effect::ScrollTo { offset_y: 0 }));
    }

    #[test]
    fn unknown_anchor_is_ignored() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        let effect = controller.handle(Event::Click(ViewHandle::HeroButton("nowhere".into())));
        assert_eq!(effect, None);
    }

    #[test]
    fn back_to_top_scrolls_to_zero_when_present() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        assert_eq!(
            controller.handle(Event::Click(ViewHandle::BackToTop)),
            Some(Effect::ScrollTo { offset_y: 0 })
        );

        let mut bare = Controller::new(PageLayout::bare(Vec::new()), Settings::default(), clock);
        assert_eq!(bare.handle(Event::Click(ViewHandle::BackToTop)), None);
    }

    #[test]
    fn scroll_updates_are_rate_limited() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);

        controller.handle(Event::Scrolled {
            offset_y: 40.0,
            viewport_height: 800.0,
        });
        controller.handle(Event::Scrolled {
            offset_y: 400.0,
            viewport_height: 800.0,
        });
        controller.handle(Event::Tick);
        assert_eq!(controller.scroll_state().offset_y, 0);
        assert!(controller.needs_tick());

        clock.advance(DEFAULT_RATE_LIMIT);
        controller.handle(Event::Tick);
        assert_eq!(controller.scroll_state().offset_y, 400);
        assert!(controller.derived().navbar_scrolled);
        assert!(controller.derived().back_to_top_visible);
    }

    #[test]
    fn active_section_follows_scroll() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);

        scroll_to(&mut controller, &clock, 0.0);
        assert_eq!(controller.derived().active_section.as_deref(), Some("home"));

        scroll_to(&mut controller, &clock, 620.0);
        assert_eq!(controller.derived().active_section.as_deref(), Some("about"));
        assert_eq!(controller.parallax_offset(), 310.0);
    }

    #[test]
    fn negative_overscroll_clamps_to_zero() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        scroll_to(&mut controller, &clock, -35.0);
        assert_eq!(controller.scroll_state().offset_y, 0);
        assert!(!controller.derived().navbar_scrolled);
    }

    #[test]
    fn sections_reveal_once_scrolled_into_view() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        assert!(!controller.reveal().is_revealed("blog-header"));

        scroll_to(&mut controller, &clock, 700.0);
        scroll_to(&mut controller, &clock, 1400.0);
        assert!(controller.reveal().is_revealed("blog-header"));
        assert!(controller.reveal().is_revealed(targets::ABOUT_TEXT));

        scroll_to(&mut controller, &clock, 0.0);
        assert!(controller.reveal().is_revealed("blog-header"));
    }

    #[test]
    fn typewriter_runs_after_activation() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);

        clock.advance(ms(1900));
        controller.handle(Event::Tick);
        let typewriter = controller.typewriter().expect("hero title present");
        assert_eq!(typewriter.frame().plain_text(), "Hi, I'm Al");
        assert_eq!(typewriter.frame().name, "Al");
        assert!(typewriter.frame().cursor);

        clock.advance(ms(1000));
        controller.handle(Event::Tick);
        let typewriter = controller.typewriter().expect("hero title present");
        assert!(typewriter.is_done());
        assert!(!typewriter.frame().cursor);
    }

    #[test]
    fn second_activation_is_ignored() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        clock.advance(ms(1200));
        controller.handle(Event::Tick);
        let revealed = controller.typewriter().map(Typewriter::revealed_count);

        controller.handle(Event::Activate {
            hero: hero(),
            viewport_height: 800.0,
        });
        assert_eq!(controller.typewriter().map(Typewriter::revealed_count), revealed);
    }

    #[test]
    fn missing_hero_title_means_no_typewriter() {
        let clock = ManualClock::new();
        let mut controller = Controller::new(
            PageLayout::bare(vec![NavSection::new("home", 0, 500)]),
            Settings::default(),
            clock,
        );
        controller.handle(Event::Activate {
            hero: hero(),
            viewport_height: 800.0,
        });
        assert!(controller.typewriter().is_none());
    }

    #[test]
    fn invalid_submission_emits_error_and_keeps_form() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        fill_form(&mut controller, "");

        controller.handle(Event::Submit);
        let toast = controller.notifications().visible().expect("error toast");
        assert_eq!(toast.kind(), Kind::Error);
        assert_eq!(toast.message_key(), ValidationError::MissingFields.i18n_key());
        assert_eq!(controller.submission().form().name, "Ada");
        assert!(!controller.submission().is_submitting());
    }

    #[test]
    fn valid_submission_completes_after_delay() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        fill_form(&mut controller, "Hello");

        controller.handle(Event::Submit);
        assert!(controller.submission().is_submitting());
        assert!(controller.notifications().visible().is_none());

        clock.advance(ms(2000));
        controller.handle(Event::Tick);
        let toast = controller.notifications().visible().expect("success toast");
        assert_eq!(toast.kind(), Kind::Success);
        assert_eq!(toast.message_key(), CONTACT_SUCCESS_KEY);
        assert!(controller.submission().form().name.is_empty());
    }

    #[test]
    fn submit_without_contact_form_is_ignored() {
        let clock = ManualClock::new();
        let mut controller =
            Controller::new(PageLayout::bare(Vec::new()), Settings::default(), clock);
        controller.handle(Event::Submit);
        assert!(!controller.notifications().has_notifications());
    }

    #[test]
    fn toast_close_dismisses_and_detaches() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        controller.handle(Event::Submit);
        let id = controller
            .notifications()
            .visible()
            .map(Notification::id)
            .expect("error toast");

        controller.handle(Event::Click(ViewHandle::ToastClose(id)));
        clock.advance(ms(300));
        controller.handle(Event::Tick);
        assert!(!controller.notifications().has_notifications());
    }

    #[test]
    fn idle_page_stops_ticking() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);
        assert!(controller.needs_tick());

        clock.advance(ms(10_000));
        controller.handle(Event::Tick);
        assert!(!controller.needs_tick());
    }

    #[test]
    fn notify_replaces_the_visible_toast() {
        let clock = ManualClock::new();
        let mut controller = portfolio(&clock);

        controller.handle(Event::Submit);
        controller.notify(Kind::Info, "notification-config-load-error");

        let visible = controller.notifications().visible().expect("toast");
        assert_eq!(visible.kind(), Kind::Info);
        assert_eq!(visible.message_key(), "notification-config-load-error");
        assert!(controller.notifications().has_notifications());
    }
}
