//! Shared test harness: an `App` on a paused tokio clock with a spy dialer.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use garagefront::clipboard::Dialer;
use garagefront::config::Config;
use garagefront::ui::app::App;
use garagefront::ui::events::AppEvent;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Records every `tel:` hand-off; fails when `fail` is set.
#[derive(Clone, Default)]
pub struct SpyDialer {
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl Dialer for SpyDialer {
    fn dial(&mut self, tel_uri: &str) -> Result<(), String> {
        self.calls.lock().unwrap().push(tel_uri.to_string());
        if self.fail {
            Err("no clipboard".to_string())
        } else {
            Ok(())
        }
    }
}

/// Fields drop in order: the app (and its timer) before the runtime.
pub struct Harness {
    pub app: App,
    pub events: Receiver<AppEvent>,
    pub dialer: SpyDialer,
    pub runtime: Runtime,
}

pub fn paused_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .expect("build test runtime")
}

pub fn harness() -> Harness {
    harness_with(Config::default(), SpyDialer::default())
}

pub fn harness_with(config: Config, dialer: SpyDialer) -> Harness {
    let runtime = paused_runtime();
    let (tx, rx) = mpsc::channel();
    let app = App::new(&config, runtime.handle().clone(), tx, Box::new(dialer.clone()));
    Harness {
        app,
        events: rx,
        dialer,
        runtime,
    }
}

impl Harness {
    /// Let the paused clock run forward, then apply whatever the timers sent.
    pub fn advance(&mut self, by: Duration) {
        self.runtime.block_on(async move { tokio::time::sleep(by).await });
        while let Ok(event) = self.events.try_recv() {
            self.app.handle_event(event);
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.app.handle_event(AppEvent::Key(key(code)));
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}
