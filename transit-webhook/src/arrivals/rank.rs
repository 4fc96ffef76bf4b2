//! Filtering and ordering of arrival predictions.

use std::cmp::Ordering;

use crate::domain::{Arrival, RouteFilter};

/// How many arrivals a reply mentions.
pub const MAX_ARRIVALS: usize = 3;

/// Why ranking produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyBoard {
    /// The stop had no predictions at all.
    NoArrivals,
    /// There were predictions, but none on the requested route.
    NoMatchingRoute,
}

/// Sort arrivals soonest first.
///
/// The sort is stable, so arrivals due at the same moment keep upstream
/// order. Arrivals without a time go last.
pub fn sort_by_eta(arrivals: &mut [Arrival]) {
    arrivals.sort_by(|a, b| compare_eta(a.seconds_to_arrival, b.seconds_to_arrival));
}

fn compare_eta(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Filter by route, sort by imminence, and keep the first `limit`.
///
/// Distinguishes an empty stop from a route that doesn't appear in a
/// non-empty set of predictions.
pub fn rank_arrivals(
    arrivals: Vec<Arrival>,
    route: Option<&RouteFilter>,
    limit: usize,
) -> Result<Vec<Arrival>, EmptyBoard> {
    if arrivals.is_empty() {
        return Err(EmptyBoard::NoArrivals);
    }

    let mut kept: Vec<Arrival> = match route {
        Some(route) => arrivals.into_iter().filter(|a| route.matches(a)).collect(),
        None => arrivals,
    };

    if kept.is_empty() {
        return Err(EmptyBoard::NoMatchingRoute);
    }

    sort_by_eta(&mut kept);
    kept.truncate(limit);

    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrival(line: &str, secs: Option<i64>) -> Arrival {
        let arrival = Arrival::new(line, line.to_lowercase());
        match secs {
            Some(s) => arrival.with_seconds(s),
            None => arrival,
        }
    }

    fn lines_and_times(arrivals: &[Arrival]) -> Vec<(&str, Option<i64>)> {
        arrivals
            .iter()
            .map(|a| (a.line_name.as_str(), a.seconds_to_arrival))
            .collect()
    }

    fn sample() -> Vec<Arrival> {
        vec![
            arrival("25", Some(45)),
            arrival("25", Some(190)),
            arrival("N25", Some(30)),
        ]
    }

    #[test]
    fn unfiltered_sorted_ascending() {
        let ranked = rank_arrivals(sample(), None, MAX_ARRIVALS).unwrap();

        assert_eq!(
            lines_and_times(&ranked),
            vec![("N25", Some(30)), ("25", Some(45)), ("25", Some(190))]
        );
    }

    #[test]
    fn route_filter_is_exact() {
        let route = RouteFilter::new("25").unwrap();
        let ranked = rank_arrivals(sample(), Some(&route), MAX_ARRIVALS).unwrap();

        assert_eq!(
            lines_and_times(&ranked),
            vec![("25", Some(45)), ("25", Some(190))]
        );
    }

    #[test]
    fn empty_stop() {
        assert_eq!(
            rank_arrivals(Vec::new(), None, MAX_ARRIVALS),
            Err(EmptyBoard::NoArrivals)
        );

        // A filter doesn't change the reason
        let route = RouteFilter::new("25").unwrap();
        assert_eq!(
            rank_arrivals(Vec::new(), Some(&route), MAX_ARRIVALS),
            Err(EmptyBoard::NoArrivals)
        );
    }

    #[test]
    fn route_not_present() {
        let route = RouteFilter::new("D8").unwrap();
        assert_eq!(
            rank_arrivals(sample(), Some(&route), MAX_ARRIVALS),
            Err(EmptyBoard::NoMatchingRoute)
        );
    }

    #[test]
    fn truncates_to_limit() {
        let arrivals = (0..10).map(|i| arrival("25", Some(600 - i * 60))).collect();
        let ranked = rank_arrivals(arrivals, None, MAX_ARRIVALS).unwrap();

        assert_eq!(
            lines_and_times(&ranked),
            vec![("25", Some(60)), ("25", Some(120)), ("25", Some(180))]
        );
    }

    #[test]
    fn missing_times_sort_last() {
        let mut arrivals = vec![
            arrival("A", None),
            arrival("B", Some(300)),
            arrival("C", None),
            arrival("D", Some(-20)),
        ];
        sort_by_eta(&mut arrivals);

        assert_eq!(
            lines_and_times(&arrivals),
            vec![("D", Some(-20)), ("B", Some(300)), ("A", None), ("C", None)]
        );
    }

    #[test]
    fn ties_keep_upstream_order() {
        let mut arrivals = vec![
            arrival("first", Some(60)),
            arrival("second", Some(60)),
            arrival("third", Some(60)),
        ];
        sort_by_eta(&mut arrivals);

        let lines: Vec<_> = arrivals.iter().map(|a| a.line_name.as_str()).collect();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }
}
