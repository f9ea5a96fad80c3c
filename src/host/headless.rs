//! Headless host used by the command-line binary
//!
//! Windows are plain records that log what they receive. The session cache
//! is a directory on disk, purged on the shared tokio runtime.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tokio::task::JoinHandle;

use super::{Host, MessageBox, RuntimeInfo, Session, Window};
use crate::action::Action;
use crate::async_runtime;

type Pending = Arc<Mutex<Vec<JoinHandle<()>>>>;

pub struct HeadlessSession {
    cache_dir: PathBuf,
    pending: Pending,
}

impl Session for HeadlessSession {
    /// Purge failures are logged only, `on_done` runs either way
    fn clear_cache(&self, on_done: Box<dyn FnOnce() + Send>) {
        let dir = self.cache_dir.clone();
        let task = async_runtime::spawn(async move {
            if let Err(e) = purge_dir(&dir).await {
                log::error!("Cache purge failed: {:#}", e);
            }
            on_done();
        });

        match task {
            Ok(handle) => self.pending.lock().unwrap_or_else(|e| e.into_inner()).push(handle),
            Err(e) => log::error!("Cannot start cache purge: {:#}", e),
        }
    }
}

/// Empty `dir`, leaving the directory itself in place
async fn purge_dir(dir: &Path) -> Result<()> {
    if tokio::fs::try_exists(dir).await.unwrap_or(false) {
        tokio::fs::remove_dir_all(dir)
            .await
            .with_context(|| format!("Failed to remove {}", dir.display()))?;
    }
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to recreate {}", dir.display()))?;
    log::debug!("Purged {}", dir.display());
    Ok(())
}

pub struct HeadlessWindow {
    id: u64,
    session: Arc<HeadlessSession>,
}

impl Window for HeadlessWindow {
    fn id(&self) -> u64 {
        self.id
    }

    fn restore(&self) {
        log::debug!("Window {} restored", self.id);
    }

    fn send(&self, action: Action) {
        log::info!("Window {} <- '{}'", self.id, action);
        println!("window {} <- {}", self.id, action);
    }

    fn toggle_dev_tools(&self) {
        log::info!("Window {} toggled devtools", self.id);
        println!("window {} devtools toggled", self.id);
    }

    fn session(&self) -> Arc<dyn Session> {
        self.session.clone()
    }
}

pub struct HeadlessHost {
    windows: Vec<Arc<HeadlessWindow>>,
    runtime: RuntimeInfo,
    open_links: bool,
    pending: Pending,
}

impl HeadlessHost {
    /// Host with a single main window
    ///
    /// With `open_links` false, external URLs are printed instead of opened.
    pub fn new(runtime: RuntimeInfo, cache_dir: PathBuf, open_links: bool) -> Self {
        let pending: Pending = Arc::new(Mutex::new(Vec::new()));
        let window = Arc::new(HeadlessWindow {
            id: 1,
            session: Arc::new(HeadlessSession {
                cache_dir,
                pending: pending.clone(),
            }),
        });
        Self {
            windows: vec![window],
            runtime,
            open_links,
            pending,
        }
    }

    /// Default cache location under the system temp directory
    pub fn default_cache_dir() -> PathBuf {
        std::env::temp_dir().join("zulip-menu-cache")
    }

    /// Block until every background task (cache purges) has finished
    pub fn wait_idle(&self) -> Result<()> {
        loop {
            let handles: Vec<JoinHandle<()>> = self
                .pending
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .drain(..)
                .collect();
            if handles.is_empty() {
                return Ok(());
            }
            let runtime = async_runtime::runtime()?;
            for handle in handles {
                runtime
                    .block_on(handle)
                    .context("Background task panicked")?;
            }
        }
    }
}

impl Host for HeadlessHost {
    fn windows(&self) -> Vec<Arc<dyn Window>> {
        self.windows
            .iter()
            .map(|w| w.clone() as Arc<dyn Window>)
            .collect()
    }

    fn open_external(&self, url: &str) -> Result<()> {
        if self.open_links {
            open::that(url).with_context(|| format!("Failed to open {}", url))
        } else {
            println!("open {}", url);
            Ok(())
        }
    }

    fn show_message_box(&self, message_box: MessageBox) {
        log::info!("Dialog ({:?}): {}", message_box.kind, message_box.message);
        println!("[{:?}] {}", message_box.kind, message_box.message);
    }

    fn runtime(&self) -> RuntimeInfo {
        self.runtime.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn runtime_info() -> RuntimeInfo {
        RuntimeInfo {
            name: "Electron".to_string(),
            version: "1.6.11".to_string(),
        }
    }

    #[test]
    fn test_single_main_window() {
        let host = HeadlessHost::new(runtime_info(), HeadlessHost::default_cache_dir(), false);
        let windows = host.windows();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].id(), 1);
        assert_eq!(host.runtime().to_string(), "Electron 1.6.11");
    }

    #[test]
    fn test_clear_cache_empties_directory_then_calls_back() {
        async_runtime::init().unwrap();

        let dir = std::env::temp_dir().join(format!("zulip-menu-cache-test-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("entries")).unwrap();
        std::fs::write(dir.join("entries").join("blob"), b"cached").unwrap();

        let host = HeadlessHost::new(runtime_info(), dir.clone(), false);
        let done = Arc::new(AtomicUsize::new(0));
        let counter = done.clone();
        host.windows()[0].session().clear_cache(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        host.wait_idle().unwrap();

        assert_eq!(done.load(Ordering::SeqCst), 1);
        assert!(dir.exists());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_failed_purge_still_calls_back() {
        async_runtime::init().unwrap();

        let blocker = std::env::temp_dir().join(format!("zulip-menu-blocker-{}", std::process::id()));
        std::fs::write(&blocker, b"not a directory").unwrap();

        let host = HeadlessHost::new(runtime_info(), blocker.join("cache"), false);
        let done = Arc::new(AtomicUsize::new(0));
        let counter = done.clone();
        host.windows()[0].session().clear_cache(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        host.wait_idle().unwrap();

        assert_eq!(done.load(Ordering::SeqCst), 1);
        std::fs::remove_file(&blocker).ok();
    }

    #[test]
    fn test_printed_links_succeed() {
        let host = HeadlessHost::new(runtime_info(), HeadlessHost::default_cache_dir(), false);
        assert!(host.open_external("https://zulipchat.com/help/").is_ok());
    }
}
