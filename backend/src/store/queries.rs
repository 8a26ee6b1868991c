//! Read-only queries over the launch record set.
//!
//! Every query takes the records by reference and returns borrowed rows in
//! input order, so filters compose without copying:
//!
//! ```ignore
//! let at_site = filter_by_site(store.records(), &selection.site);
//! let in_range = filter_by_payload_range(at_site, 1000.0, 6000.0);
//! ```

use crate::models::{LaunchRecord, Outcome, SiteSelection};

/// Ordered `(label, count)` pairs produced by [`count_by_outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelCounts(Vec<(String, usize)>);

impl LabelCounts {
    pub fn get(&self, label: &str) -> Option<usize> {
        self.0
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(label, count)| (label.as_str(), *count))
    }

    fn increment(&mut self, label: &str, by: usize) {
        match self.0.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += by,
            None => self.0.push((label.to_string(), by)),
        }
    }
}

impl IntoIterator for LabelCounts {
    type Item = (String, usize);
    type IntoIter = std::vec::IntoIter<(String, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Keep records launched from the selected site. The all-sites sentinel keeps
/// everything.
pub fn filter_by_site<'a, I>(records: I, site: &SiteSelection) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|record| site.matches(record))
        .collect()
}

/// Keep records whose payload lies strictly between `low` and `high`.
///
/// Both ends are exclusive, so `low == high` (or `low > high`) admits nothing.
pub fn filter_by_payload_range<'a, I>(records: I, low: f64, high: f64) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|record| {
            let payload = record.payload_kg();
            payload > low && payload < high
        })
        .collect()
}

/// Counts backing the proportion chart.
///
/// - All sites: one entry per site (first appearance order) holding that
///   site's number of successful launches. Sites with no success still get a
///   zero entry.
/// - A specific site: one entry per outcome that occurs at the site, labelled
///   `Success` / `Failure`. A site with no records yields no entries.
pub fn count_by_outcome<'a, I>(records: I, site: &SiteSelection) -> LabelCounts
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    let mut counts = LabelCounts::default();

    if site.is_all() {
        for record in records {
            counts.increment(&record.launch_site, usize::from(record.is_success()));
        }
        return counts;
    }

    let mut successes = 0usize;
    let mut failures = 0usize;
    for record in filter_by_site(records, site) {
        match record.outcome {
            Outcome::Success => successes += 1,
            Outcome::Failure => failures += 1,
        }
    }
    for (outcome, count) in [(Outcome::Success, successes), (Outcome::Failure, failures)] {
        if count > 0 {
            counts.increment(outcome.label(), count);
        }
    }
    counts
}
