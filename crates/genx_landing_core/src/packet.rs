//! Architecture packet generation and download.
//!
//! # Responsibility
//! - Render the downloadable Markdown packet from the project record.
//! - Trigger the save and guard the control against duplicate activation.
//!
//! # Invariants
//! - `build_architecture_packet` is a pure function of `ProjectInfo`.
//! - The activated control is re-enabled at the re-arm deadline on every
//!   path, including save failure.

use crate::model::project::ProjectInfo;
use crate::notify::notifier::{Notifier, Severity};
use crate::platform::capability::ArtifactSink;
use log::{info, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Fixed download filename.
pub const ARCHITECTURE_PACKET_FILENAME: &str = "Genesis-X_Architecture_Packet.md";
/// Media type of the generated artifact.
pub const ARCHITECTURE_PACKET_MEDIA_TYPE: &str = "text/markdown";

/// Shown after the packet is saved.
pub const PACKET_DOWNLOADED_MESSAGE: &str = "Architecture packet downloaded.";
/// Shown when the save fails.
pub const PACKET_FAILED_MESSAGE: &str = "Packet download failed. Try again.";

/// Renders the architecture packet Markdown.
///
/// Pure: identical `ProjectInfo` yields byte-identical output, containing
/// the literal `name` and `tagline`.
pub fn build_architecture_packet(project: &ProjectInfo) -> String {
    format!(
        "# {name} (Architecture Packet)\n\
         \n\
         > {tagline}\n\
         \n\
         Developed by Within Us AI (2026)\n\
         \n\
         ## Overview\n\
         Genesis-X is a theoretical + architectural framework for fast knowledge injection \
         via spectral grafting and analytic weight steering on CPU.\n\
         \n\
         ## Core Innovation\n\
         **Spectral Grafting**: a zero-gradient weight modification concept intended to encode \
         high-level semantic concepts as preferred activation-space directions.\n\
         \n\
         ## Components\n\
         1. Omni-Parser: universal ingestion (50+ formats)\n\
         2. Knowledge Graph: structure + normalization\n\
         3. Singularity Core: analytic steering / graft synthesis\n\
         4. LLM Model: quantized runtime with adapters\n\
         \n\
         ## Claimed Properties (as presented)\n\
         - Training time reduction vs traditional finetuning\n\
         - Permanent retention (conceptual goal)\n\
         - CPU-only operation (no GPU requirement)\n\
         - Broad format support (documents, tabular, scientific, multimedia, geospatial, databases)\n\
         \n\
         ## Implementation Notes\n\
         - UI: NiceGUI (as listed)\n\
         - Runtime: llama.cpp / llama-cpp-python\n\
         - Data: docling, pandas, numpy, scipy, openpyxl, etc.\n\
         \n\
         ---\n\
         Generated from the {name} landing page.\n",
        name = project.name,
        tagline = project.tagline,
    )
}

/// Enable/disable seam for the activated control.
///
/// Implementations use interior mutability so a handle can be held past the
/// activation that produced it.
pub trait ActionControl {
    fn set_enabled(&self, enabled: bool);
}

/// A control waiting to be re-enabled.
pub struct PendingRearm {
    control: Arc<dyn ActionControl>,
    deadline: Instant,
}

impl PendingRearm {
    /// Re-enables the control when the deadline has elapsed.
    ///
    /// Returns whether the re-arm fired on this call.
    pub fn poll_at(&self, now: Instant) -> bool {
        if self.deadline <= now {
            self.control.set_enabled(true);
            return true;
        }
        false
    }

    /// Deadline at which the control re-enables.
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// Generates the packet and saves it through `sink`.
///
/// The activated control is disabled immediately and a re-arm is scheduled
/// at `now + rearm_delay` whether or not the save succeeds; the caller owns
/// polling the returned latch.
pub fn download_packet(
    project: &ProjectInfo,
    sink: &mut dyn ArtifactSink,
    notifier: &mut Notifier,
    control: Option<Arc<dyn ActionControl>>,
    rearm_delay: Duration,
    now: Instant,
) -> Option<PendingRearm> {
    if let Some(control) = &control {
        control.set_enabled(false);
    }

    let markdown = build_architecture_packet(project);
    match sink.save(ARCHITECTURE_PACKET_FILENAME, markdown.as_bytes()) {
        Ok(path) => {
            info!(
                "event=packet_downloaded module=packet status=ok path={}",
                path.display()
            );
            notifier.show_at(PACKET_DOWNLOADED_MESSAGE, Severity::Success, now);
        }
        Err(err) => {
            warn!("event=packet_downloaded module=packet status=error detail={err}");
            notifier.show_at(PACKET_FAILED_MESSAGE, Severity::Warning, now);
        }
    }

    control.map(|control| PendingRearm {
        control,
        deadline: now + rearm_delay,
    })
}
