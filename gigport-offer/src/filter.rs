use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::Offer;

/// Optional, AND-combined listing predicates. Absent parameters impose no
/// constraint. Filtering runs before ordering and pagination.
#[derive(Debug, Clone, Default)]
pub struct OfferFilters {
    pub creator_id: Option<Uuid>,
    /// Matches offers whose cheapest tier costs at least this much.
    pub min_price: Option<Decimal>,
    /// Matches offers where *any* tier delivers within this many days; the
    /// predicate applies per detail, not to the aggregate minimum.
    pub max_delivery_time: Option<i32>,
    /// Case-insensitive substring search over title and description.
    pub search: Option<String>,
}

impl OfferFilters {
    pub fn matches(&self, offer: &Offer) -> bool {
        if let Some(creator) = self.creator_id {
            if offer.user_id != creator {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            match offer.min_price() {
                Some(price) if price >= min => {}
                _ => return false,
            }
        }
        if let Some(max) = self.max_delivery_time {
            if !offer.details.iter().any(|d| d.delivery_time_in_days <= max) {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let term = term.to_lowercase();
            if !offer.title.to_lowercase().contains(&term)
                && !offer.description.to_lowercase().contains(&term)
            {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, offers: Vec<Offer>) -> Vec<Offer> {
        offers.into_iter().filter(|o| self.matches(o)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OfferType;
    use crate::validate::DetailDraft;

    fn draft(price: &str, days: i32) -> DetailDraft {
        DetailDraft {
            title: "Tier".to_owned(),
            revisions: 1,
            delivery_time_in_days: days,
            price: price.parse().unwrap(),
            features: vec!["Feature".to_owned()],
            offer_type: OfferType::Basic,
        }
    }

    fn offer(title: &str, description: &str, drafts: Vec<DetailDraft>) -> Offer {
        Offer::new(Uuid::new_v4(), title.to_owned(), description.to_owned(), None, drafts)
    }

    #[test]
    fn test_max_delivery_time_matches_any_detail() {
        // One tier at 3 days matches even though the 7-day tier does not.
        let offer = offer("Webseite", "", vec![draft("50.00", 3), draft("150.00", 7)]);
        let filters = OfferFilters {
            max_delivery_time: Some(5),
            ..Default::default()
        };
        assert!(filters.matches(&offer));

        let filters = OfferFilters {
            max_delivery_time: Some(2),
            ..Default::default()
        };
        assert!(!filters.matches(&offer));
    }

    #[test]
    fn test_min_price_filters_on_aggregate() {
        let cheap = offer("Billig", "", vec![draft("5.00", 3), draft("80.00", 1)]);
        let pricey = offer("Teuer", "", vec![draft("60.00", 3)]);
        let filters = OfferFilters {
            min_price: Some("50.00".parse().unwrap()),
            ..Default::default()
        };
        let kept = filters.apply(vec![cheap, pricey]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title, "Teuer");
    }

    #[test]
    fn test_detail_less_offer_fails_min_price() {
        let empty = offer("Leer", "", vec![]);
        let filters = OfferFilters {
            min_price: Some("1.00".parse().unwrap()),
            ..Default::default()
        };
        assert!(!filters.matches(&empty));
    }

    #[test]
    fn test_creator_filter() {
        let offer = offer("Von mir", "", vec![draft("10.00", 2)]);
        let mine = OfferFilters {
            creator_id: Some(offer.user_id),
            ..Default::default()
        };
        let other = OfferFilters {
            creator_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        assert!(mine.matches(&offer));
        assert!(!other.matches(&offer));
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_description() {
        let offer = offer("Logo-Paket", "Professionelles Webdesign inklusive", vec![]);
        let by_title = OfferFilters {
            search: Some("logo".to_owned()),
            ..Default::default()
        };
        let by_description = OfferFilters {
            search: Some("WEBDESIGN".to_owned()),
            ..Default::default()
        };
        let miss = OfferFilters {
            search: Some("fotografie".to_owned()),
            ..Default::default()
        };
        assert!(by_title.matches(&offer));
        assert!(by_description.matches(&offer));
        assert!(!miss.matches(&offer));
    }

    #[test]
    fn test_absent_filters_match_everything() {
        let offer = offer("Irgendwas", "", vec![]);
        assert!(OfferFilters::default().matches(&offer));
    }
}
