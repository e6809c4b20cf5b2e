//! Interest ranking aggregation.
//!
//! Survey interests are free text, so raw tallies from the store are
//! normalized into a fixed set of official categories before display.
//! Anything unmatched lands in the "기타" (other) bucket, which also keeps
//! the distinct raw names it absorbed.

use serde::{Deserialize, Serialize};

use crate::post::RankingItem;

/// The eight official display categories, ranking-page order.
pub const OFFICIAL_CATEGORIES: [&str; 8] = [
    "브랜드 디자인",
    "편집/출판 디자인",
    "UI/UX 디자인",
    "그래픽/일러스트레이션",
    "모션/영상 디자인",
    "3D/제품 비주얼라이제이션 디자인",
    "레터링/활자 디자인",
    "기타",
];

/// The catch-all category.
pub const OTHER_CATEGORY: &str = "기타";

/// One aggregated category with its total and, for the other bucket, the
/// raw interest names it collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub category: String,
    pub count: u32,
    pub details: Vec<String>,
}

/// Map a raw interest name onto an official category.
///
/// Matching strips whitespace and slashes, lowercases, and checks keyword
/// substrings in the ranking page's original priority order.
#[must_use]
pub fn classify(interest: &str) -> &'static str {
    let clean: String = interest
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '/')
        .collect::<String>()
        .to_lowercase();

    if clean.contains("브랜드") {
        "브랜드 디자인"
    } else if clean.contains("편집") || clean.contains("출판") {
        "편집/출판 디자인"
    } else if clean.contains("ui") || clean.contains("ux") {
        "UI/UX 디자인"
    } else if clean.contains("그래픽") || clean.contains("일러스트") || clean.contains("캐릭터") {
        "그래픽/일러스트레이션"
    } else if clean.contains("모션") || clean.contains("영상") {
        "모션/영상 디자인"
    } else if clean.contains("3d") || clean.contains("제품") || clean.contains("비주얼") {
        "3D/제품 비주얼라이제이션 디자인"
    } else if clean.contains("레터링") || clean.contains("활자") {
        "레터링/활자 디자인"
    } else {
        OTHER_CATEGORY
    }
}

/// Aggregate raw tallies into per-category totals, drop empty categories,
/// and sort by count descending (ties keep category order).
#[must_use]
pub fn aggregate(items: &[RankingItem]) -> Vec<RankedCategory> {
    let mut ranked: Vec<RankedCategory> = OFFICIAL_CATEGORIES
        .iter()
        .map(|&category| RankedCategory {
            category: category.to_string(),
            count: 0,
            details: Vec::new(),
        })
        .collect();

    for item in items {
        let category = classify(&item.interest);
        if let Some(entry) = ranked.iter_mut().find(|r| r.category == category) {
            entry.count += item.count;
            if category == OTHER_CATEGORY && !entry.details.contains(&item.interest) {
                entry.details.push(item.interest.clone());
            }
        }
    }

    ranked.retain(|r| r.count > 0);
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("브랜드 디자인", "브랜드 디자인")]
    #[case("편집디자인", "편집/출판 디자인")]
    #[case("UI/UX 디자인", "UI/UX 디자인")]
    #[case("UIUX 디자인", "UI/UX 디자인")]
    #[case("캐릭터 디자인", "그래픽/일러스트레이션")]
    #[case("영상 디자인", "모션/영상 디자인")]
    #[case("3D 디자인", "3D/제품 비주얼라이제이션 디자인")]
    #[case("타이포그래피", "기타")]
    #[case("패키지 디자인", "기타")]
    fn classify_matches_official_categories(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(classify(raw), expected);
    }

    #[test]
    fn aggregate_sums_and_sorts_descending() {
        let items = vec![
            RankingItem { interest: "브랜드 디자인".into(), count: 2 },
            RankingItem { interest: "브랜드".into(), count: 3 },
            RankingItem { interest: "영상 디자인".into(), count: 4 },
        ];
        let ranked = aggregate(&items);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].category, "브랜드 디자인");
        assert_eq!(ranked[0].count, 5);
        assert_eq!(ranked[1].category, "모션/영상 디자인");
        assert_eq!(ranked[1].count, 4);
    }

    #[test]
    fn other_bucket_collects_distinct_raw_names() {
        let items = vec![
            RankingItem { interest: "타이포그래피".into(), count: 1 },
            RankingItem { interest: "타이포그래피".into(), count: 2 },
            RankingItem { interest: "패키지 디자인".into(), count: 1 },
        ];
        let ranked = aggregate(&items);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].category, OTHER_CATEGORY);
        assert_eq!(ranked[0].count, 4);
        assert_eq!(
            ranked[0].details,
            vec!["타이포그래피".to_string(), "패키지 디자인".to_string()]
        );
    }

    #[test]
    fn zero_count_categories_are_dropped() {
        assert!(aggregate(&[]).is_empty());
    }
}
