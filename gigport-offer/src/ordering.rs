use std::cmp::Reverse;

use rust_decimal::Decimal;

use crate::models::Offer;

/// Sort order for offer listings, resolved from a client-supplied token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferOrdering {
    CreatedAtAsc,
    CreatedAtDesc,
    MinPriceAsc,
    MinPriceDesc,
    UpdatedAtAsc,
    UpdatedAtDesc,
}

impl OfferOrdering {
    /// Maps a sort token to an ordering. Anything outside the vocabulary,
    /// including an absent token, resolves to most-recently-updated first.
    ///
    /// The `updated_at` pair is inverted relative to the other pairs: the
    /// un-prefixed token sorts descending and the `-`-prefixed token
    /// ascending. Existing clients paginate against exactly this mapping,
    /// so it is kept as-is.
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            Some("created_at") => OfferOrdering::CreatedAtAsc,
            Some("-created_at") => OfferOrdering::CreatedAtDesc,
            Some("min_price") => OfferOrdering::MinPriceAsc,
            Some("-min_price") => OfferOrdering::MinPriceDesc,
            Some("-updated_at") => OfferOrdering::UpdatedAtAsc,
            _ => OfferOrdering::UpdatedAtDesc,
        }
    }

    /// Stable sort, so ties within identical keys keep their relative order.
    pub fn sort(self, offers: &mut [Offer]) {
        match self {
            OfferOrdering::CreatedAtAsc => offers.sort_by_key(|o| o.created_at),
            OfferOrdering::CreatedAtDesc => offers.sort_by_key(|o| Reverse(o.created_at)),
            OfferOrdering::MinPriceAsc => offers.sort_by_key(price_key),
            OfferOrdering::MinPriceDesc => offers.sort_by_key(|o| Reverse(price_key(o))),
            OfferOrdering::UpdatedAtAsc => offers.sort_by_key(|o| o.updated_at),
            OfferOrdering::UpdatedAtDesc => offers.sort_by_key(|o| Reverse(o.updated_at)),
        }
    }
}

// Detail-less offers sort after every priced one ascending and before them
// descending, the NULLS LAST / NULLS FIRST behavior of the backing store.
fn price_key(offer: &Offer) -> (bool, Decimal) {
    match offer.min_price() {
        Some(price) => (false, price),
        None => (true, Decimal::ZERO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OfferType;
    use crate::validate::DetailDraft;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn offer(title: &str, price: Option<&str>, age_minutes: i64) -> Offer {
        let drafts = price
            .map(|p| {
                vec![DetailDraft {
                    title: "Basic".to_owned(),
                    revisions: 1,
                    delivery_time_in_days: 3,
                    price: p.parse().unwrap(),
                    features: vec!["Design".to_owned()],
                    offer_type: OfferType::Basic,
                }]
            })
            .unwrap_or_default();
        let mut offer = Offer::new(Uuid::new_v4(), title.to_owned(), String::new(), None, drafts);
        offer.created_at = Utc::now() - Duration::minutes(age_minutes);
        offer.updated_at = offer.created_at;
        offer
    }

    #[test]
    fn test_bogus_and_absent_tokens_resolve_to_updated_desc() {
        assert_eq!(OfferOrdering::parse(Some("bogus")), OfferOrdering::UpdatedAtDesc);
        assert_eq!(OfferOrdering::parse(None), OfferOrdering::UpdatedAtDesc);
        assert_eq!(OfferOrdering::parse(Some("")), OfferOrdering::UpdatedAtDesc);
    }

    #[test]
    fn test_updated_at_pair_is_inverted() {
        assert_eq!(OfferOrdering::parse(Some("updated_at")), OfferOrdering::UpdatedAtDesc);
        assert_eq!(OfferOrdering::parse(Some("-updated_at")), OfferOrdering::UpdatedAtAsc);
    }

    #[test]
    fn test_created_at_and_min_price_pairs_are_straight() {
        assert_eq!(OfferOrdering::parse(Some("created_at")), OfferOrdering::CreatedAtAsc);
        assert_eq!(OfferOrdering::parse(Some("-created_at")), OfferOrdering::CreatedAtDesc);
        assert_eq!(OfferOrdering::parse(Some("min_price")), OfferOrdering::MinPriceAsc);
        assert_eq!(OfferOrdering::parse(Some("-min_price")), OfferOrdering::MinPriceDesc);
    }

    #[test]
    fn test_default_ordering_puts_most_recently_updated_first() {
        let mut offers = vec![offer("alt", Some("10.00"), 60), offer("neu", Some("20.00"), 5)];
        OfferOrdering::parse(None).sort(&mut offers);
        assert_eq!(offers[0].title, "neu");
    }

    #[test]
    fn test_min_price_ascending_with_detail_less_offer_last() {
        let mut offers = vec![
            offer("leer", None, 0),
            offer("teuer", Some("99.00"), 0),
            offer("billig", Some("5.00"), 0),
        ];
        OfferOrdering::MinPriceAsc.sort(&mut offers);
        let titles: Vec<&str> = offers.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["billig", "teuer", "leer"]);
    }
}
