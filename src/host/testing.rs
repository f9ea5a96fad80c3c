//! Recording host for unit tests

use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};

use super::{Host, MessageBox, RuntimeInfo, Session, Window};
use crate::action::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Restore(u64),
    Send(u64, Action),
    DevTools(u64),
    ClearCache(u64),
    OpenUrl(String),
    Dialog(MessageBox),
}

#[derive(Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
}

impl Recorder {
    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

pub struct RecordingSession {
    window_id: u64,
    recorder: Arc<Recorder>,
    deferred: bool,
    pending: Mutex<Vec<Box<dyn FnOnce() + Send>>>,
}

impl Session for RecordingSession {
    fn clear_cache(&self, on_done: Box<dyn FnOnce() + Send>) {
        self.recorder.push(Event::ClearCache(self.window_id));
        if self.deferred {
            self.pending.lock().unwrap().push(on_done);
        } else {
            on_done();
        }
    }
}

pub struct RecordingWindow {
    id: u64,
    recorder: Arc<Recorder>,
    session: Arc<RecordingSession>,
}

impl Window for RecordingWindow {
    fn id(&self) -> u64 {
        self.id
    }

    fn restore(&self) {
        self.recorder.push(Event::Restore(self.id));
    }

    fn send(&self, action: Action) {
        self.recorder.push(Event::Send(self.id, action));
    }

    fn toggle_dev_tools(&self) {
        self.recorder.push(Event::DevTools(self.id));
    }

    fn session(&self) -> Arc<dyn Session> {
        self.session.clone()
    }
}

pub struct RecordingHost {
    recorder: Arc<Recorder>,
    windows: Mutex<Vec<Arc<RecordingWindow>>>,
    deferred_purges: bool,
    fail_open: bool,
}

impl RecordingHost {
    /// Host with one window whose cache purges complete immediately
    pub fn new() -> Arc<Self> {
        Self::build(false, false)
    }

    /// Host whose cache purges wait for `complete_purges`
    pub fn deferred() -> Arc<Self> {
        Self::build(true, false)
    }

    /// Host whose `open_external` always fails
    pub fn failing_open() -> Arc<Self> {
        Self::build(false, true)
    }

    fn build(deferred_purges: bool, fail_open: bool) -> Arc<Self> {
        let host = Self {
            recorder: Arc::new(Recorder::default()),
            windows: Mutex::new(Vec::new()),
            deferred_purges,
            fail_open,
        };
        host.open_window(1);
        Arc::new(host)
    }

    /// Append a window to the registry
    pub fn open_window(&self, id: u64) -> Arc<RecordingWindow> {
        let window = Arc::new(RecordingWindow {
            id,
            recorder: self.recorder.clone(),
            session: Arc::new(RecordingSession {
                window_id: id,
                recorder: self.recorder.clone(),
                deferred: self.deferred_purges,
                pending: Mutex::new(Vec::new()),
            }),
        });
        self.windows.lock().unwrap().push(window.clone());
        window
    }

    /// Put a window at the front of the registry
    pub fn open_window_first(&self, id: u64) -> Arc<RecordingWindow> {
        let window = self.open_window(id);
        self.windows.lock().unwrap().rotate_right(1);
        window
    }

    pub fn close_all(&self) {
        self.windows.lock().unwrap().clear();
    }

    pub fn window(&self, id: u64) -> Arc<RecordingWindow> {
        self.windows
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.id == id)
            .cloned()
            .unwrap()
    }

    /// Run every deferred purge callback, returns how many ran
    pub fn complete_purges(&self) -> usize {
        let sessions: Vec<Arc<RecordingSession>> = self
            .windows
            .lock()
            .unwrap()
            .iter()
            .map(|w| w.session.clone())
            .collect();
        let mut ran = 0;
        for session in sessions {
            let pending: Vec<_> = session.pending.lock().unwrap().drain(..).collect();
            for on_done in pending {
                on_done();
                ran += 1;
            }
        }
        ran
    }

    pub fn events(&self) -> Vec<Event> {
        self.recorder.events.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<(u64, Action)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Send(id, action) => Some((id, action)),
                _ => None,
            })
            .collect()
    }

    pub fn dialogs(&self) -> Vec<MessageBox> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Dialog(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::OpenUrl(url) => Some(url),
                _ => None,
            })
            .collect()
    }
}

impl Host for RecordingHost {
    fn windows(&self) -> Vec<Arc<dyn Window>> {
        self.windows
            .lock()
            .unwrap()
            .iter()
            .map(|w| w.clone() as Arc<dyn Window>)
            .collect()
    }

    fn open_external(&self, url: &str) -> Result<()> {
        self.recorder.push(Event::OpenUrl(url.to_string()));
        if self.fail_open {
            bail!("no handler for {}", url);
        }
        Ok(())
    }

    fn show_message_box(&self, message_box: MessageBox) {
        self.recorder.push(Event::Dialog(message_box));
    }

    fn runtime(&self) -> RuntimeInfo {
        RuntimeInfo {
            name: "Electron".to_string(),
            version: "1.6.11".to_string(),
        }
    }
}
