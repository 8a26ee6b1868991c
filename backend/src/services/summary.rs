//! Payload and outcome summary over the whole record set.

use crate::models::LaunchRecord;
use crate::routes::summary::{PayloadStats, PayloadSummary, SiteSummary};

/// Compute statistics for a set of payload masses.
/// Calculates count, mean, median, min and max; all zero for an empty input.
fn compute_stats(values: &[f64]) -> PayloadStats {
    if values.is_empty() {
        return PayloadStats {
            count: 0,
            mean: 0.0,
            median: 0.0,
            min: 0.0,
            max: 0.0,
        };
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if count.is_multiple_of(2) {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    PayloadStats {
        count,
        mean,
        median,
        min: sorted.first().copied().unwrap_or(0.0),
        max: sorted.last().copied().unwrap_or(0.0),
    }
}

fn success_rate(successes: usize, launches: usize) -> f64 {
    if launches == 0 {
        0.0
    } else {
        successes as f64 / launches as f64
    }
}

/// Summarize launches and payloads overall and per site (first appearance order).
pub fn summarize(records: &[LaunchRecord]) -> PayloadSummary {
    let mut sites: Vec<(&str, Vec<&LaunchRecord>)> = Vec::new();
    for record in records {
        match sites.iter_mut().find(|(site, _)| *site == record.launch_site) {
            Some((_, rows)) => rows.push(record),
            None => sites.push((record.launch_site.as_str(), vec![record])),
        }
    }

    let site_summaries = sites
        .into_iter()
        .map(|(site, rows)| {
            let payloads: Vec<f64> = rows.iter().map(|r| r.payload_kg()).collect();
            let successes = rows.iter().filter(|r| r.is_success()).count();
            SiteSummary {
                site: site.to_string(),
                launches: rows.len(),
                successes,
                success_rate: success_rate(successes, rows.len()),
                payload: compute_stats(&payloads),
            }
        })
        .collect();

    let payloads: Vec<f64> = records.iter().map(LaunchRecord::payload_kg).collect();
    let total_successes = records.iter().filter(|r| r.is_success()).count();

    PayloadSummary {
        total_launches: records.len(),
        total_successes,
        success_rate: success_rate(total_successes, records.len()),
        payload: compute_stats(&payloads),
        sites: site_summaries,
    }
}
