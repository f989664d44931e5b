//! Order reference resolution from free text and extracted entities.

use std::sync::LazyLock;

use regex::Regex;

use shopclerk_core::OrderId;

use crate::nlu::EntityMap;

/// Matches "order 123", "order#123", "#123", and also any bare digit run.
///
/// The whole prefix is optional, so an unrelated number anywhere in the
/// message resolves as an order reference. That permissiveness is the
/// established behavior callers rely on; tightening it changes which
/// messages get an order lookup versus a "please provide your order
/// number" prompt.
static ORDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:order\s*#?|#)?(\d+)").expect("order pattern is valid")
});

/// Entity category the language service uses for numbers.
const CARDINAL: &str = "CARDINAL";

/// Extract an order reference from a raw message or its entity map.
///
/// The raw (non-normalized) message is searched first; if the pattern finds
/// nothing, a `CARDINAL` entity is parsed as a fallback. A `CARDINAL` that
/// fails integer parsing is treated as absent, not as an error. `None` is a
/// normal outcome the responder turns into a prompt for the order number.
#[must_use]
pub fn extract_order_id(message: &str, entities: &EntityMap) -> Option<OrderId> {
    if let Some(captures) = ORDER_PATTERN.captures(message) {
        if let Some(digits) = captures.get(1) {
            if let Ok(id) = digits.as_str().parse::<i64>() {
                return Some(OrderId::new(id));
            }
        }
    }

    entities
        .get(CARDINAL)
        .and_then(|value| value.parse::<i64>().ok())
        .map(OrderId::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(pairs: &[(&str, &str)]) -> EntityMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_order_number_phrase() {
        assert_eq!(
            extract_order_id("I want to return my laptop order number 1", &EntityMap::new()),
            Some(OrderId::new(1))
        );
    }

    #[test]
    fn test_order_hash_forms() {
        assert_eq!(
            extract_order_id("order#123 please", &EntityMap::new()),
            Some(OrderId::new(123))
        );
        assert_eq!(
            extract_order_id("status of #456", &EntityMap::new()),
            Some(OrderId::new(456))
        );
        assert_eq!(
            extract_order_id("my ORDER 78 is late", &EntityMap::new()),
            Some(OrderId::new(78))
        );
    }

    #[test]
    fn test_bare_digits_match() {
        // The prefix is optional, so a bare digit run anywhere resolves.
        assert_eq!(
            extract_order_id("call me at 555", &EntityMap::new()),
            Some(OrderId::new(555))
        );
    }

    #[test]
    fn test_first_digit_run_wins() {
        assert_eq!(
            extract_order_id("order 2 not order 9", &EntityMap::new()),
            Some(OrderId::new(2))
        );
    }

    #[test]
    fn test_cardinal_entity_fallback() {
        assert_eq!(
            extract_order_id("no digits here", &entities(&[("CARDINAL", "5")])),
            Some(OrderId::new(5))
        );
    }

    #[test]
    fn test_unparseable_cardinal_is_absent() {
        assert_eq!(
            extract_order_id("no digits here", &entities(&[("CARDINAL", "five")])),
            None
        );
    }

    #[test]
    fn test_nothing_numeric() {
        assert_eq!(extract_order_id("nothing numeric", &EntityMap::new()), None);
    }
}
