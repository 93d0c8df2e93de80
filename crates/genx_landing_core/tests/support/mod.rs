//! Shared fake capabilities for dispatcher-level tests.
#![allow(dead_code)]

use genx_landing_core::{
    ActionControl, ArtifactError, ArtifactSink, BannerSink, Clipboard, ClipboardError, Dispatcher,
    NavigationError, PageConfig, PlatformHandles, Severity, ShareRequest, ShareSheet,
    ShareSheetError, UrlOpener,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Banner probe; clones share the same record store.
#[derive(Clone, Default)]
pub struct BannerProbe {
    shown: Arc<Mutex<Vec<(String, &'static str)>>>,
    hides: Arc<Mutex<u32>>,
}

impl BannerProbe {
    pub fn shown(&self) -> Vec<(String, &'static str)> {
        self.shown.lock().expect("banner lock").clone()
    }

    pub fn last(&self) -> Option<(String, &'static str)> {
        self.shown().last().cloned()
    }

    pub fn hide_count(&self) -> u32 {
        *self.hides.lock().expect("banner lock")
    }
}

impl BannerSink for BannerProbe {
    fn display(&mut self, message: &str, severity: Severity) {
        self.shown
            .lock()
            .expect("banner lock")
            .push((message.to_string(), severity.as_str()));
    }

    fn hide(&mut self) {
        *self.hides.lock().expect("banner lock") += 1;
    }
}

/// Opener with scriptable outcomes; clones share call records.
#[derive(Clone, Default)]
pub struct ScriptedOpener {
    pub block_open: bool,
    pub fail_redirect: bool,
    opens: Arc<Mutex<Vec<String>>>,
    redirects: Arc<Mutex<Vec<String>>>,
}

impl ScriptedOpener {
    pub fn blocking() -> Self {
        Self {
            block_open: true,
            ..Self::default()
        }
    }

    pub fn dead() -> Self {
        Self {
            block_open: true,
            fail_redirect: true,
            ..Self::default()
        }
    }

    pub fn opens(&self) -> Vec<String> {
        self.opens.lock().expect("opener lock").clone()
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.lock().expect("opener lock").clone()
    }

    pub fn navigation_count(&self) -> usize {
        self.opens().len() + self.redirects().len()
    }
}

impl UrlOpener for ScriptedOpener {
    fn open_new(&mut self, url: &str) -> Result<(), NavigationError> {
        self.opens.lock().expect("opener lock").push(url.to_string());
        if self.block_open {
            return Err(NavigationError::Blocked("scripted block".to_string()));
        }
        Ok(())
    }

    fn redirect_current(&mut self, url: &str) -> Result<(), NavigationError> {
        self.redirects
            .lock()
            .expect("opener lock")
            .push(url.to_string());
        if self.fail_redirect {
            return Err(NavigationError::RedirectFailed("scripted failure".to_string()));
        }
        Ok(())
    }
}

/// Clipboard fake; clones share the write record.
#[derive(Clone)]
pub struct FakeClipboard {
    pub available: bool,
    pub fail_write: bool,
    writes: Arc<Mutex<Vec<String>>>,
}

impl Default for FakeClipboard {
    fn default() -> Self {
        Self {
            available: true,
            fail_write: false,
            writes: Arc::default(),
        }
    }
}

impl FakeClipboard {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_write: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("clipboard lock").clone()
    }
}

impl Clipboard for FakeClipboard {
    fn supports_write(&self) -> bool {
        self.available
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !self.available {
            return Err(ClipboardError::Unavailable);
        }
        if self.fail_write {
            return Err(ClipboardError::WriteFailed("scripted failure".to_string()));
        }
        self.writes
            .lock()
            .expect("clipboard lock")
            .push(text.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum SheetBehavior {
    Unsupported,
    Accept,
    Dismiss,
}

/// Share-sheet fake; clones share presented requests.
#[derive(Clone)]
pub struct FakeSheet {
    pub behavior: SheetBehavior,
    requests: Arc<Mutex<Vec<ShareRequest>>>,
}

impl FakeSheet {
    pub fn new(behavior: SheetBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<ShareRequest> {
        self.requests.lock().expect("sheet lock").clone()
    }
}

impl ShareSheet for FakeSheet {
    fn is_supported(&self) -> bool {
        self.behavior != SheetBehavior::Unsupported
    }

    fn present(&mut self, request: &ShareRequest) -> Result<(), ShareSheetError> {
        self.requests
            .lock()
            .expect("sheet lock")
            .push(request.clone());
        match self.behavior {
            SheetBehavior::Unsupported => Err(ShareSheetError::Unsupported),
            SheetBehavior::Accept => Ok(()),
            SheetBehavior::Dismiss => Err(ShareSheetError::Dismissed),
        }
    }
}

/// In-memory artifact sink; clones share saved artifacts.
#[derive(Clone, Default)]
pub struct MemorySink {
    pub fail: bool,
    saves: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl MemorySink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn saves(&self) -> Vec<(String, Vec<u8>)> {
        self.saves.lock().expect("sink lock").clone()
    }
}

impl ArtifactSink for MemorySink {
    fn save(&mut self, filename: &str, contents: &[u8]) -> Result<PathBuf, ArtifactError> {
        if self.fail {
            return Err(ArtifactError::SaveFailed("scripted failure".to_string()));
        }
        self.saves
            .lock()
            .expect("sink lock")
            .push((filename.to_string(), contents.to_vec()));
        Ok(PathBuf::from(filename))
    }
}

/// Enable/disable flag standing in for a page control.
#[derive(Clone)]
pub struct FlagControl {
    enabled: Arc<AtomicBool>,
}

impl Default for FlagControl {
    fn default() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl FlagControl {
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }
}

impl ActionControl for FlagControl {
    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }
}

pub struct TestRig {
    pub dispatcher: Dispatcher,
    pub banner: BannerProbe,
    pub opener: ScriptedOpener,
    pub clipboard: FakeClipboard,
    pub sheet: FakeSheet,
    pub sink: MemorySink,
}

/// Builds a dispatcher over shared-probe fakes and the Genesis-X defaults.
pub fn rig(
    opener: ScriptedOpener,
    clipboard: FakeClipboard,
    sheet: FakeSheet,
    sink: MemorySink,
) -> TestRig {
    let banner = BannerProbe::default();
    let handles = PlatformHandles {
        banner: Box::new(banner.clone()),
        opener: Box::new(opener.clone()),
        clipboard: Box::new(clipboard.clone()),
        sheet: Box::new(sheet.clone()),
        artifacts: Box::new(sink.clone()),
    };
    let dispatcher = Dispatcher::new(&PageConfig::genesis_x(), None, handles)
        .expect("default config should build a dispatcher");
    TestRig {
        dispatcher,
        banner,
        opener,
        clipboard,
        sheet,
        sink,
    }
}

/// Rig with every capability in its happy default state and no native sheet.
pub fn default_rig() -> TestRig {
    rig(
        ScriptedOpener::default(),
        FakeClipboard::default(),
        FakeSheet::new(SheetBehavior::Unsupported),
        MemorySink::default(),
    )
}
