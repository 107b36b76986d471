// Host-side tests for the overlay markup.

#![allow(dead_code)]
mod panels {
    include!("../src/panels.rs");
}

use panels::*;
use room_core::Panel;

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn every_panel_has_exactly_one_close_button() {
    for panel in Panel::ALL {
        let html = panel_markup(panel);
        assert_eq!(count(&html, "menu-close-btn"), 1, "{}", panel.name());
    }
}

#[test]
fn only_paper_panels_carry_navigation_arrows() {
    for panel in Panel::ALL {
        let html = panel_markup(panel);
        let arrows = count(&html, "menu-nav-arrow");
        if panel.is_paper() {
            assert_eq!(arrows, 2, "{}", panel.name());
        } else {
            assert_eq!(arrows, 0, "{}", panel.name());
        }
    }
}

#[test]
fn arrow_targets_follow_the_ring() {
    let html = panel_markup(Panel::Documentation);
    let left = format!(
        r#"nav-arrow-left" data-target="{}""#,
        Panel::Tokenomics.element_id()
    );
    let right = format!(
        r#"nav-arrow-right" data-target="{}""#,
        Panel::Team.element_id()
    );
    assert!(html.contains(&left));
    assert!(html.contains(&right));
}

#[test]
fn selection_offers_the_three_papers() {
    let html = panel_markup(Panel::Selection);
    assert_eq!(count(&html, "selection-option"), 3);
    for (target, _, _) in SELECTION_OPTIONS {
        assert!(target.is_paper());
        assert!(html.contains(&format!(r#"data-target="{}""#, target.element_id())));
    }
}

#[test]
fn data_targets_resolve_back_to_panels() {
    for panel in Panel::ALL {
        assert_eq!(panel_for_id(panel.element_id()), Some(panel));
    }
    assert_eq!(panel_for_id("nope-menu"), None);
}

#[test]
fn typewriter_body_starts_empty() {
    let html = panel_markup(Panel::Typewriter);
    assert!(html.contains(r#"<div id="typewriter-content" class="typewriter-content"></div>"#));
}

#[test]
fn text_is_escaped() {
    assert_eq!(escape_html(r#"a & <b> "c" 'd'"#), "a &amp; &lt;b&gt; &quot;c&quot; &#39;d&#39;");
    // "Pages & databases" must not leak a raw ampersand
    let docs = panel_markup(Panel::Documentation);
    assert!(docs.contains("Unindexed pages &amp; databases"));
}
