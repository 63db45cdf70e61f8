//! Active-section derivation from the scroll offset.
//!
//! Everything here is a pure function of its inputs. Scroll events can be
//! coalesced or dropped by the host, so every sample recomputes the answer
//! from scratch instead of patching the previous one.

use crate::config::NavigationConfig;
use crate::section::{SectionId, SectionLayout};

fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Section whose range holds the probe point, or the configured end sentinel.
///
/// The probe sits `probe_fraction` of the way down the viewport so a section
/// lights up slightly before it reaches the middle of the screen. The first
/// section is active for the whole first viewport height no matter how tall
/// it measures. Near the bottom of the document `config.end_sentinel` wins:
/// either the probe is inside the trailing margin of the last section, or the
/// viewport's bottom edge is. The second case covers short final sections the
/// probe can never reach.
pub fn compute_active_section(
    scroll_y: f32,
    viewport_height: f32,
    layout: &SectionLayout,
    config: &NavigationConfig,
) -> Option<SectionId> {
    let scroll_y = sanitize(scroll_y);
    let viewport_height = sanitize(viewport_height);

    if scroll_y < viewport_height {
        return Some(layout.first().id);
    }

    let trailing_edge = layout.last().end_offset - config.trailing_margin_px;
    let probe = scroll_y + viewport_height * config.probe_fraction;
    if probe >= trailing_edge || scroll_y + viewport_height >= trailing_edge {
        return config.end_sentinel.section();
    }

    layout
        .sections()
        .iter()
        .find(|section| section.contains(probe))
        .map(|section| section.id)
}

/// Percentage of the scrollable distance already covered, in `[0, 100]`.
pub fn scroll_progress(scroll_y: f32, document_end: f32, viewport_height: f32) -> f32 {
    let scrollable = sanitize(document_end) - sanitize(viewport_height);
    if scrollable <= 0.0 {
        return 0.0;
    }
    (sanitize(scroll_y) / scrollable * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndSentinel;

    fn portfolio_layout() -> SectionLayout {
        SectionLayout::from_heights(&[
            (SectionId::Home, 800.0),
            (SectionId::Work, 1200.0),
            (SectionId::Education, 1200.0),
            (SectionId::Projects, 1800.0),
        ])
        .expect("layout")
    }

    #[test]
    fn probe_one_third_down_selects_work() {
        let layout = portfolio_layout();
        let config = NavigationConfig::default();
        // probe = 1500 + 300 = 1800, inside work's [800, 2000).
        assert_eq!(
            compute_active_section(1500.0, 900.0, &layout, &config),
            Some(SectionId::Work)
        );
    }

    #[test]
    fn trailing_margin_reports_none_sentinel() {
        let layout = portfolio_layout();
        let config = NavigationConfig::default();
        // probe = 4950 + 300 = 5250, past 5000 - 100.
        assert_eq!(compute_active_section(4950.0, 900.0, &layout, &config), None);
        // probe = 3900 + 300 = 4200 and the viewport ends at 4800: still projects.
        assert_eq!(
            compute_active_section(3900.0, 900.0, &layout, &config),
            Some(SectionId::Projects)
        );
    }

    #[test]
    fn bottom_of_viewport_reaching_document_end_reports_sentinel() {
        // A short last section the probe cannot reach before scrolling stops.
        let layout = SectionLayout::from_heights(&[
            (SectionId::Home, 900.0),
            (SectionId::Work, 1200.0),
            (SectionId::Projects, 200.0),
        ])
        .expect("layout");
        let max_scroll = layout.max_scroll(900.0);
        assert_eq!(max_scroll, 1400.0);
        let none = NavigationConfig::default();
        let contact = NavigationConfig {
            end_sentinel: EndSentinel::Contact,
            ..NavigationConfig::default()
        };

        // probe = 1700 is inside work, but the viewport touches the document end.
        assert_eq!(compute_active_section(max_scroll, 900.0, &layout, &none), None);
        assert_eq!(
            compute_active_section(max_scroll, 900.0, &layout, &contact),
            Some(SectionId::Contact)
        );
        // Viewport ends at 2190, short of 2300 - 100.
        assert_eq!(
            compute_active_section(1290.0, 900.0, &layout, &none),
            Some(SectionId::Work)
        );
    }

    #[test]
    fn trailing_margin_reports_contact_when_configured() {
        let layout = portfolio_layout();
        let config = NavigationConfig {
            end_sentinel: EndSentinel::Contact,
            ..NavigationConfig::default()
        };
        assert_eq!(
            compute_active_section(4950.0, 900.0, &layout, &config),
            Some(SectionId::Contact)
        );
    }

    #[test]
    fn first_viewport_height_is_always_home() {
        // Home measures only 100px, yet stays active for a full viewport.
        let layout = SectionLayout::from_heights(&[
            (SectionId::Home, 100.0),
            (SectionId::Work, 3000.0),
            (SectionId::Projects, 3000.0),
        ])
        .expect("layout");
        let config = NavigationConfig::default();
        for scroll in [0.0, 150.0, 450.0, 899.0] {
            assert_eq!(
                compute_active_section(scroll, 900.0, &layout, &config),
                Some(SectionId::Home),
                "scroll {scroll}"
            );
        }
        assert_eq!(
            compute_active_section(900.0, 900.0, &layout, &config),
            Some(SectionId::Work)
        );
    }

    #[test]
    fn exactly_one_section_matches_each_probe() {
        let layout = portfolio_layout();
        let config = NavigationConfig {
            trailing_margin_px: 0.0,
            ..NavigationConfig::default()
        };
        let viewport = 900.0;
        let mut scroll = viewport;
        while scroll + viewport < layout.document_end() {
            let probe = scroll + viewport * config.probe_fraction;
            let matches = layout
                .sections()
                .iter()
                .filter(|section| section.contains(probe))
                .count();
            assert_eq!(matches, 1, "probe {probe}");
            let active = compute_active_section(scroll, viewport, &layout, &config);
            assert!(active.is_some(), "scroll {scroll}");
            scroll += 37.0;
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let layout = portfolio_layout();
        let config = NavigationConfig::default();
        let first = compute_active_section(2600.0, 900.0, &layout, &config);
        for _ in 0..10 {
            assert_eq!(compute_active_section(2600.0, 900.0, &layout, &config), first);
        }
        assert_eq!(first, Some(SectionId::Education));
    }

    #[test]
    fn garbage_scroll_offsets_count_as_top() {
        let layout = portfolio_layout();
        let config = NavigationConfig::default();
        assert_eq!(
            compute_active_section(f32::NAN, 900.0, &layout, &config),
            Some(SectionId::Home)
        );
        assert_eq!(
            compute_active_section(-250.0, 900.0, &layout, &config),
            Some(SectionId::Home)
        );
    }

    #[test]
    fn progress_covers_scrollable_range() {
        assert_eq!(scroll_progress(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 5000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(9000.0, 5000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(10.0, 500.0, 1000.0), 0.0);
    }
}
