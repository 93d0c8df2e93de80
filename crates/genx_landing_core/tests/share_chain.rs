mod support;

use genx_landing_core::{ActionId, DispatchOutcome};
use std::time::Instant;
use support::{rig, FakeClipboard, FakeSheet, MemorySink, ScriptedOpener, SheetBehavior};

fn share_rig(sheet: SheetBehavior, opener: ScriptedOpener) -> support::TestRig {
    rig(
        opener,
        FakeClipboard::default(),
        FakeSheet::new(sheet),
        MemorySink::default(),
    )
}

#[test]
fn accepted_native_share_short_circuits_the_link_strategy() {
    let mut rig = share_rig(SheetBehavior::Accept, ScriptedOpener::default());
    let outcome = rig.dispatcher.dispatch_at("share-x", None, Instant::now());
    assert_eq!(outcome, DispatchOutcome::Handled(ActionId::ShareX));

    let requests = rig.sheet.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].title, "Genesis-X: GPU-Free LLM Injection");
    assert_eq!(requests[0].url, "https://gss1147.github.io/Genesis_X/");

    // No link navigation happened.
    assert_eq!(rig.opener.navigation_count(), 0);
    assert_eq!(
        rig.banner.last(),
        Some(("Opened system share sheet.".to_string(), "info"))
    );
}

#[test]
fn dismissed_native_share_falls_through_to_the_link() {
    let mut rig = share_rig(SheetBehavior::Dismiss, ScriptedOpener::default());
    rig.dispatcher
        .dispatch_at("share-linkedin", None, Instant::now());

    assert_eq!(rig.sheet.requests().len(), 1);
    let opens = rig.opener.opens();
    assert_eq!(opens.len(), 1);
    assert!(opens[0].starts_with("https://www.linkedin.com/sharing/share-offsite/?url="));
    assert_eq!(
        rig.banner.last(),
        Some(("Opened LinkedIn share dialog.".to_string(), "info"))
    );
}

#[test]
fn unsupported_sheet_goes_straight_to_the_link() {
    let mut rig = share_rig(SheetBehavior::Unsupported, ScriptedOpener::default());
    rig.dispatcher
        .dispatch_at("share-reddit", None, Instant::now());

    assert!(rig.sheet.requests().is_empty());
    let opens = rig.opener.opens();
    assert_eq!(opens.len(), 1);
    assert!(opens[0].starts_with("https://www.reddit.com/submit?url="));
    assert_eq!(
        rig.banner.last(),
        Some(("Opened Reddit submission page.".to_string(), "info"))
    );
}

#[test]
fn x_retries_the_legacy_endpoint_exactly_once_when_blocked() {
    let mut rig = share_rig(SheetBehavior::Unsupported, ScriptedOpener::dead());
    rig.dispatcher.dispatch_at("share-x", None, Instant::now());

    let opens = rig.opener.opens();
    assert_eq!(opens.len(), 2);
    assert!(opens[0].starts_with("https://x.com/intent/post?"));
    assert!(opens[1].starts_with("https://twitter.com/intent/tweet?"));

    // Every navigation was blocked; the user gets guidance, not success text.
    assert_eq!(
        rig.banner.last(),
        Some(("Share blocked. Try Copy Link.".to_string(), "warning"))
    );
}

#[test]
fn x_does_not_retry_when_the_primary_navigation_succeeds() {
    let mut rig = share_rig(SheetBehavior::Unsupported, ScriptedOpener::default());
    rig.dispatcher.dispatch_at("share-x", None, Instant::now());

    let opens = rig.opener.opens();
    assert_eq!(opens.len(), 1);
    assert!(opens[0].starts_with("https://x.com/intent/post?"));
    assert_eq!(
        rig.banner.last(),
        Some(("Opened share composer.".to_string(), "info"))
    );
}

#[test]
fn blocked_linkedin_share_has_no_legacy_endpoint() {
    let mut rig = share_rig(SheetBehavior::Unsupported, ScriptedOpener::dead());
    rig.dispatcher
        .dispatch_at("share-linkedin", None, Instant::now());

    assert_eq!(rig.opener.opens().len(), 1);
    assert_eq!(
        rig.banner.last(),
        Some(("Share blocked. Try Copy Link.".to_string(), "warning"))
    );
}
