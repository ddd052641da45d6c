/// Keyword matching for record contexts
///
/// The keyword list is fixed and ordered. Matching is a plain case-sensitive
/// substring test, so `IRD` also hits inside `THIRD`.

use crate::core::record::Record;

/// Keywords searched for in every record context, in report order
pub const KEYWORDS: [&str; 5] = ["GST", "IRD", "Inland", "Invoice", "Transaction"];

/// A record paired with one keyword found in its context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub keyword: &'static str,
    pub record: &'a Record,
}

/// Keywords contained in `context`, in `KEYWORDS` order
pub fn matching_keywords(context: &str) -> impl Iterator<Item = &'static str> + '_ {
    KEYWORDS
        .iter()
        .copied()
        .filter(move |keyword| context.contains(keyword))
}

/// Every (record, keyword) hit, ordered by record and then by keyword
pub fn find_matches(records: &[Record]) -> Vec<Match<'_>> {
    records
        .iter()
        .flat_map(|record| {
            matching_keywords(record.context()).map(move |keyword| Match { keyword, record })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_come_back_in_list_order() {
        let found: Vec<_> = matching_keywords("Transaction for IRD Invoice").collect();
        assert_eq!(found, ["IRD", "Invoice", "Transaction"]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(matching_keywords("gst ird inland invoice").count(), 0);
        assert_eq!(matching_keywords("GST").collect::<Vec<_>>(), ["GST"]);
    }

    #[test]
    fn test_matching_is_substring_not_word() {
        let found: Vec<_> = matching_keywords("THIRD party GSTIN").collect();
        assert_eq!(found, ["GST", "IRD"]);
    }

    #[test]
    fn test_find_matches_orders_by_record_then_keyword() {
        let records = vec![
            Record::new("1", "a", "Inland Revenue GST"),
            Record::new("2", "b", "nothing to see"),
            Record::new("3", "c", "Invoice"),
        ];
        let matches = find_matches(&records);
        let summary: Vec<_> = matches
            .iter()
            .map(|m| (m.record.location(), m.keyword))
            .collect();
        assert_eq!(summary, [("1", "GST"), ("1", "Inland"), ("3", "Invoice")]);
    }
}
