use proptest::prelude::*;

use launch_dash::controller::{derive_chart, ChartId};
use launch_dash::models::{
    LaunchRecord, LaunchSite, Outcome, PayloadRange, SelectionState, SiteSelection,
};
use launch_dash::services::{proportion_chart, scatter_chart};

const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
const CATEGORIES: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

fn record_strategy() -> impl Strategy<Value = LaunchRecord> {
    (
        prop::sample::select(SITES.to_vec()),
        0.0f64..10_000.0,
        any::<bool>(),
        prop::sample::select(CATEGORIES.to_vec()),
    )
        .prop_map(|(site, payload, success, category)| {
            let outcome = if success {
                Outcome::Success
            } else {
                Outcome::Failure
            };
            LaunchRecord::new(site, payload.round(), outcome, category)
        })
}

fn site_strategy() -> impl Strategy<Value = SiteSelection> {
    prop_oneof![
        Just(SiteSelection::AllSites),
        Just(SiteSelection::Site(LaunchSite::CcafsLc40)),
        Just(SiteSelection::Site(LaunchSite::CcafsSlc40)),
        Just(SiteSelection::Site(LaunchSite::KscLc39a)),
        Just(SiteSelection::Site(LaunchSite::VafbSlc4e)),
    ]
}

fn range_strategy() -> impl Strategy<Value = PayloadRange> {
    (0.0f64..10_000.0, 0.0f64..10_000.0).prop_map(|(a, b)| {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        PayloadRange::new(low, high).unwrap()
    })
}

proptest! {
    #[test]
    fn prop_pie_total_matches_selection(
        records in prop::collection::vec(record_strategy(), 0..60),
        site in site_strategy(),
    ) {
        let pie = proportion_chart(&records, &site);
        let expected = if site.is_all() {
            records.iter().filter(|r| r.is_success()).count()
        } else {
            records.iter().filter(|r| site.matches(r)).count()
        };
        prop_assert_eq!(pie.total(), expected);
    }

    #[test]
    fn prop_scatter_points_lie_strictly_inside_range(
        records in prop::collection::vec(record_strategy(), 0..60),
        site in site_strategy(),
        range in range_strategy(),
    ) {
        let chart = scatter_chart(&records, &site, &range);
        for point in &chart.points {
            prop_assert!(point.x > range.low() && point.x < range.high());
            prop_assert!(point.y <= 1);
        }
        let expected = records
            .iter()
            .filter(|r| site.matches(r))
            .filter(|r| r.payload_kg() > range.low() && r.payload_kg() < range.high())
            .count();
        prop_assert_eq!(chart.points.len(), expected);
    }

    #[test]
    fn prop_collapsed_range_is_empty(
        records in prop::collection::vec(record_strategy(), 0..60),
        site in site_strategy(),
        bound in 0.0f64..10_000.0,
    ) {
        let range = PayloadRange::new(bound, bound).unwrap();
        prop_assert!(scatter_chart(&records, &site, &range).is_empty());
    }

    #[test]
    fn prop_derivation_is_idempotent(
        records in prop::collection::vec(record_strategy(), 0..40),
        site in site_strategy(),
        range in range_strategy(),
    ) {
        let selection = SelectionState::new(site, range);
        for chart in ChartId::ALL {
            prop_assert_eq!(
                derive_chart(chart, &records, &selection),
                derive_chart(chart, &records, &selection)
            );
        }
    }
}
