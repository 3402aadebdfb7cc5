//! Domain List Processor
//!
//! Turns the stored collection plus a filter and sort directive into the
//! ordered view shown to the user. Pure and synchronous; persistence stays in
//! the services.

mod filter;
mod sort;

pub use filter::matches;
pub use sort::compare;

use crate::types::{DomainRecord, ListQuery};

/// Filters then stably sorts `records`.
///
/// An empty input, or a filter nothing passes, yields an empty list.
pub fn process(records: &[DomainRecord], query: &ListQuery) -> Vec<DomainRecord> {
    let mut view: Vec<DomainRecord> = records
        .iter()
        .filter(|r| matches(&query.filter, r))
        .cloned()
        .collect();
    view.sort_by(|a, b| compare(a, b, query.sort));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{default_portfolio, domain};
    use crate::types::{DomainFilter, DomainStatus, SortDirection, SortField, SortSpec};

    fn names(records: &[DomainRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    fn sorted(field: SortField, direction: SortDirection) -> ListQuery {
        ListQuery {
            filter: DomainFilter::All,
            sort: SortSpec::new(field, direction),
        }
    }

    #[test]
    fn empty_collection_gives_empty_view() {
        assert!(process(&[], &ListQuery::default()).is_empty());
    }

    #[test]
    fn all_filter_keeps_every_record() {
        let records = default_portfolio();
        let view = process(&records, &ListQuery::default());
        assert_eq!(view.len(), records.len());
    }

    #[test]
    fn status_partitions_cover_collection_without_overlap() {
        let records = default_portfolio();
        let mut seen = Vec::new();
        for status in DomainStatus::ALL {
            let query = ListQuery {
                filter: DomainFilter::Status {
                    value: status.label().to_string(),
                },
                ..Default::default()
            };
            let part = process(&records, &query);
            assert!(part.iter().all(|r| r.status == status));
            seen.extend(part.into_iter().map(|r| r.id));
        }
        seen.sort_unstable();
        let mut all: Vec<u64> = records.iter().map(|r| r.id).collect();
        all.sort_unstable();
        assert_eq!(seen, all);
    }

    #[test]
    fn renewal_sort_puts_none_then_unit_priority() {
        let mut a = domain(1, "a.com");
        a.renewal_period = "30天".to_string();
        let mut b = domain(2, "b.com");
        b.renewal_period = "1年".to_string();
        let mut c = domain(3, "c.com");
        c.renewal_period = "无".to_string();

        let view = process(&[a, b, c], &sorted(SortField::RenewalPeriod, SortDirection::Asc));
        let periods: Vec<&str> = view.iter().map(|r| r.renewal_period.as_str()).collect();
        assert_eq!(periods, vec!["无", "30天", "1年"]);
    }

    #[test]
    fn renewal_sort_desc_keeps_none_first() {
        let records = default_portfolio();
        let view = process(&records, &sorted(SortField::RenewalPeriod, SortDirection::Desc));
        assert_eq!(view[0].renewal_period, "无");
    }

    #[test]
    fn renewal_sort_over_default_portfolio() {
        let records = default_portfolio();
        let view = process(&records, &sorted(SortField::RenewalPeriod, SortDirection::Asc));
        let periods: Vec<&str> = view.iter().map(|r| r.renewal_period.as_str()).collect();
        assert_eq!(periods, vec!["无", "6个月", "30天", "1年", "2年"]);
    }

    #[test]
    fn permanent_last_when_sorting_by_expiry_either_way() {
        let records = default_portfolio();
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let view = process(&records, &sorted(SortField::Expiry, direction));
            assert!(view.last().is_some_and(|r| r.is_permanent));
        }
    }

    #[test]
    fn expiry_desc_orders_dated_records_newest_first() {
        let records = default_portfolio();
        let view = process(&records, &sorted(SortField::Expiry, SortDirection::Desc));
        assert_eq!(
            names(&view),
            vec![
                "techblog.io",
                "example.com",
                "dev-tools.net",
                "webstore.shop",
                "ai-solutions.tech"
            ]
        );
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let records = vec![domain(1, "Zeta.io"), domain(2, "alpha.io"), domain(3, "Beta.io")];
        let view = process(&records, &sorted(SortField::Name, SortDirection::Asc));
        assert_eq!(names(&view), vec!["alpha.io", "Beta.io", "Zeta.io"]);
    }

    #[test]
    fn provider_filter_then_display_order() {
        let records = default_portfolio();
        let query = ListQuery {
            filter: DomainFilter::Provider {
                value: "NAMECHEAP".to_string(),
            },
            sort: SortSpec::new(SortField::DisplayOrder, SortDirection::Desc),
        };
        assert_eq!(names(&process(&records, &query)), vec!["dev-tools.net", "example.com"]);
    }

    #[test]
    fn no_match_gives_empty_view() {
        let query = ListQuery {
            filter: DomainFilter::Renewal {
                value: "9年".to_string(),
            },
            ..Default::default()
        };
        assert!(process(&default_portfolio(), &query).is_empty());
    }
}
