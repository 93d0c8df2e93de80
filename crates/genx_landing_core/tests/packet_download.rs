mod support;

use genx_landing_core::{
    build_architecture_packet, ActionId, DispatchOutcome, PageConfig, ProjectInfo,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use support::{default_rig, rig, FakeClipboard, FakeSheet, FlagControl, MemorySink, ScriptedOpener, SheetBehavior};

#[test]
fn download_saves_the_packet_under_the_fixed_filename() {
    let mut rig = default_rig();
    let outcome = rig
        .dispatcher
        .dispatch_at("download-packet", None, Instant::now());
    assert_eq!(outcome, DispatchOutcome::Handled(ActionId::DownloadPacket));

    let saves = rig.sink.saves();
    assert_eq!(saves.len(), 1);
    assert_eq!(saves[0].0, "Genesis-X_Architecture_Packet.md");

    let expected = build_architecture_packet(&ProjectInfo::resolve(&PageConfig::genesis_x(), None));
    assert_eq!(saves[0].1, expected.as_bytes());
    assert_eq!(
        rig.banner.last(),
        Some(("Architecture packet downloaded.".to_string(), "success"))
    );
}

#[test]
fn repeated_downloads_are_byte_identical() {
    let mut rig = default_rig();
    let start = Instant::now();
    rig.dispatcher.dispatch_at("download-packet", None, start);
    rig.dispatcher
        .dispatch_at("download-packet", None, start + Duration::from_secs(1));

    let saves = rig.sink.saves();
    assert_eq!(saves.len(), 2);
    assert_eq!(saves[0].1, saves[1].1);
}

#[test]
fn control_is_disabled_immediately_and_rearmed_at_the_deadline() {
    let mut rig = default_rig();
    let control = FlagControl::default();
    let start = Instant::now();

    rig.dispatcher
        .dispatch_at("download-packet", Some(Arc::new(control.clone())), start);
    assert!(!control.is_enabled(), "control must disable immediately");

    rig.dispatcher
        .poll_timers_at(start + Duration::from_millis(349));
    assert!(!control.is_enabled(), "re-arm must not fire early");

    rig.dispatcher
        .poll_timers_at(start + Duration::from_millis(350));
    assert!(control.is_enabled(), "re-arm must fire at the deadline");
}

#[test]
fn control_rearms_even_when_the_save_fails() {
    let mut rig = rig(
        ScriptedOpener::default(),
        FakeClipboard::default(),
        FakeSheet::new(SheetBehavior::Unsupported),
        MemorySink::failing(),
    );
    let control = FlagControl::default();
    let start = Instant::now();

    rig.dispatcher
        .dispatch_at("download-packet", Some(Arc::new(control.clone())), start);
    assert!(!control.is_enabled());
    assert_eq!(
        rig.banner.last(),
        Some(("Packet download failed. Try again.".to_string(), "warning"))
    );

    rig.dispatcher
        .poll_timers_at(start + Duration::from_millis(350));
    assert!(control.is_enabled(), "failure path must still re-arm");
}

#[test]
fn rearm_deadline_is_visible_to_the_binding_layer() {
    let mut rig = default_rig();
    let control = FlagControl::default();
    let start = Instant::now();

    rig.dispatcher
        .dispatch_at("download-packet", Some(Arc::new(control)), start);

    // Notification hide is at +3000ms, re-arm at +350ms; the earliest wins.
    assert_eq!(
        rig.dispatcher.next_deadline(),
        Some(start + Duration::from_millis(350))
    );
}
