use crate::clipboard::Dialer;
use crate::config::Config;
use crate::content::{QuickLink, PHONE_DISPLAY, PHONE_TEL};
use crate::site::{contains_contact_form, Page, Section};
use crate::ui::contact::{ContactFormState, ContactIntent, ContactReducer, FormField, ResetTimer};
use crate::ui::events::AppEvent;
use crate::ui::input::handle_key;
use crate::ui::layout::body_rect;
use crate::ui::mvi::Reducer;
use crate::ui::sections::{body_layout, BodyLayout};
use crate::ui::theme::Theme;
use crate::ui::view::{ViewIntent, ViewReducer, ViewState};
use ratatui::layout::Rect;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;

const STATUS_TTL: Duration = Duration::from_secs(4);

/// Who receives typed keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Nav,
    Form,
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    expires_at: Instant,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Root state holder. Owns every feature state and is the only writer.
pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Body viewport (cols, rows).
    size: Option<(u16, u16)>,
    theme: Theme,
    view: ViewState,
    contact: ContactFormState,
    reset_timer: ResetTimer,
    reset_delay: Duration,
    events: mpsc::Sender<AppEvent>,
    dialer: Box<dyn Dialer>,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(
        config: &Config,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
        dialer: Box<dyn Dialer>,
    ) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Nav,
            size: None,
            theme: Theme::from_config(&config.theme),
            view: ViewState::default(),
            contact: ContactFormState::default(),
            reset_timer: ResetTimer::new(runtime),
            reset_delay: config.form.reset_delay(),
            events,
            dialer,
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn page(&self) -> Page {
        self.view.page
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    pub fn scroll(&self) -> u16 {
        self.view.scroll
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_timer.is_pending()
    }

    /// Focused form field, when the form owns the keyboard.
    pub fn form_focus(&self) -> Option<FormField> {
        match self.focus {
            Focus::Form => Some(self.contact.focus),
            Focus::Nav => None,
        }
    }

    /// Body lines for the current state at the current viewport width.
    pub fn body_layout(&self) -> BodyLayout {
        let width = self.size.map(|(cols, _)| cols).unwrap_or(80);
        body_layout(
            &self.view,
            &self.contact,
            self.form_focus(),
            &self.theme,
            width,
        )
    }

    /// Apply one event from the loop.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Tick => self.on_tick(),
            AppEvent::Resize(cols, rows) => self.on_terminal_resize(cols, rows),
            AppEvent::ContactReset { generation } => self.on_contact_reset(generation),
        }
    }

    pub fn on_tick(&mut self) {
        if self
            .status
            .as_ref()
            .is_some_and(|status| Instant::now() >= status.expires_at)
        {
            self.status = None;
        }
    }

    /// Terminal resized to `cols` x `rows`; the body gets what the chrome leaves.
    pub fn on_terminal_resize(&mut self, cols: u16, rows: u16) {
        let body = body_rect(Rect::new(0, 0, cols, rows));
        self.on_resize(body.width.max(1), body.height.max(1));
    }

    /// Body viewport resized.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let max = self.max_scroll();
        if self.view.scroll > max {
            dispatch_mvi!(self, view, ViewReducer, ViewIntent::ScrollToTop);
            self.scroll_down(max);
        }
    }

    /// Show `page`, scrolled to the top.
    ///
    /// Leaving a page unmounts its contact form: typed values and any pending
    /// reset are discarded.
    pub fn set_page(&mut self, page: Page) {
        let previous = self.view.page;
        dispatch_mvi!(self, view, ViewReducer, ViewIntent::SetPage(page));
        if previous != page {
            self.remount_contact();
            self.focus = Focus::Nav;
            tracing::info!(from = ?previous, to = ?page, "Page changed");
        }
    }

    fn remount_contact(&mut self) {
        self.reset_timer.cancel();
        self.contact = ContactFormState {
            generation: self.contact.generation,
            ..ContactFormState::default()
        };
    }

    /// Primary call-to-action of the visible page.
    pub fn activate_page_action(&mut self) {
        match self.view.page {
            Page::Home | Page::Services | Page::About => self.set_page(Page::Contact),
            Page::Contact => {
                self.focus_form();
            }
        }
    }

    /// Follow a footer quick link.
    pub fn open_quick_link(&mut self, link: &QuickLink) {
        tracing::debug!(link = link.label, "Quick link opened");
        self.set_page(link.target());
    }

    /// Move keyboard focus into the contact form if one is visible.
    pub fn focus_form(&mut self) -> bool {
        if !contains_contact_form(self.view.page) || !self.contact.shows_form() {
            return false;
        }
        self.focus = Focus::Form;
        self.scroll_to_section(Section::ContactForm);
        true
    }

    pub fn focus_nav(&mut self) {
        self.focus = Focus::Nav;
    }

    pub fn dispatch_contact(&mut self, intent: ContactIntent) {
        dispatch_mvi!(self, contact, ContactReducer, intent);
    }

    /// Fire the form's submit action.
    pub fn submit_contact(&mut self) {
        let before = self.contact.generation;
        self.dispatch_contact(ContactIntent::Submit);

        if self.contact.generation == before {
            tracing::debug!(missing = ?self.contact.rejected, "Estimate request blocked");
            return;
        }

        let generation = self.contact.generation;
        let events = self.events.clone();
        self.reset_timer.schedule(self.reset_delay, move || {
            let _ = events.send(AppEvent::ContactReset { generation });
        });
        self.focus = Focus::Nav;
        tracing::info!(generation, "Estimate request acknowledged");
    }

    pub fn on_contact_reset(&mut self, generation: u64) {
        let was_submitted = self.contact.submitted;
        self.dispatch_contact(ContactIntent::Reset { generation });
        if was_submitted && !self.contact.submitted {
            tracing::debug!(generation, "Contact form restored");
        }
    }

    /// Hand the business number off to the host.
    pub fn call_now(&mut self) {
        let text = match self.dialer.dial(PHONE_TEL) {
            Ok(()) => {
                tracing::info!("Phone link handed off");
                format!("Copied {PHONE_TEL} to clipboard")
            }
            Err(err) => {
                tracing::warn!(error = %err, "Phone hand-off failed");
                format!("Call us: {PHONE_DISPLAY}")
            }
        };
        self.status = Some(StatusMessage {
            text,
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    fn max_scroll(&self) -> u16 {
        let rows = self.size.map(|(_, rows)| rows).unwrap_or(0) as usize;
        let height = self.body_layout().height();
        u16::try_from(height.saturating_sub(rows)).unwrap_or(u16::MAX)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        dispatch_mvi!(self, view, ViewReducer, ViewIntent::ScrollUp { lines });
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = self.max_scroll();
        dispatch_mvi!(self, view, ViewReducer, ViewIntent::ScrollDown { lines, max });
    }

    pub fn scroll_to_top(&mut self) {
        dispatch_mvi!(self, view, ViewReducer, ViewIntent::ScrollToTop);
    }

    fn scroll_to_section(&mut self, section: Section) {
        let Some(offset) = self.body_layout().offset_of(section) else {
            return;
        };
        let target = u16::try_from(offset).unwrap_or(u16::MAX);
        self.scroll_to_top();
        self.scroll_down(target);
    }

    /// Body viewport height, used for page-wise scrolling.
    pub fn page_height(&self) -> u16 {
        self.size.map(|(_, rows)| rows).unwrap_or(1).max(1)
    }
}
