use super::{SearchError, SearchIndex, SearchResult};
use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::FoodOrder;
use std::collections::HashSet;

/// In-memory token index
///
/// Every order is stored as a set of lowercase tokens, each value both bare
/// (`7`) and field-qualified (`ticketid:7`). Query terms are OR-combined; a
/// trailing `*` turns a term into a prefix match. A blank query or a lone
/// `*` matches everything.
#[derive(Debug, Default)]
pub struct MemorySearchIndex {
    docs: DashMap<i64, HashSet<String>>,
}

impl MemorySearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn tokens(order: &FoodOrder, id: i64) -> HashSet<String> {
        let mut tokens = HashSet::new();
        let mut field = |name: &str, value: String| {
            tokens.insert(format!("{name}:{value}"));
            tokens.insert(value);
        };

        field("id", id.to_string());
        if let Some(food_id) = order.food_id {
            field("foodid", food_id.to_string());
        }
        field("quantity", order.quantity.to_string());
        field("unitprice", order.unit_price.normalize().to_string());
        if let Some(ticket_id) = order.ticket_id {
            field("ticketid", ticket_id.to_string());
        }
        if let Some(note) = &order.note {
            for word in note
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| !w.is_empty())
            {
                field("note", word.to_lowercase());
            }
        }
        tokens
    }

    fn matches(tokens: &HashSet<String>, term: &str) -> bool {
        match term.strip_suffix('*') {
            Some(prefix) => tokens.iter().any(|t| t.starts_with(prefix)),
            None => tokens.contains(term),
        }
    }
}

#[async_trait]
impl SearchIndex for MemorySearchIndex {
    async fn index(&self, order: &FoodOrder) -> SearchResult<()> {
        let id = order.id.ok_or(SearchError::MissingId)?;
        self.docs.insert(id, Self::tokens(order, id));
        Ok(())
    }

    async fn remove(&self, id: i64) -> SearchResult<()> {
        self.docs.remove(&id);
        Ok(())
    }

    async fn search(&self, query: &str) -> SearchResult<Vec<i64>> {
        let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
        let match_all = terms.is_empty() || terms.iter().all(|t| t == "*");

        let mut ids: Vec<i64> = self
            .docs
            .iter()
            .filter(|doc| match_all || terms.iter().any(|t| Self::matches(doc.value(), t)))
            .map(|doc| *doc.key())
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn order(id: i64, food_id: i64, note: Option<&str>, ticket_id: Option<i64>) -> FoodOrder {
        FoodOrder {
            id: Some(id),
            food_id: Some(food_id),
            quantity: 2,
            unit_price: Decimal::new(1250, 2),
            note: note.map(str::to_string),
            ticket_id,
        }
    }

    async fn seeded() -> MemorySearchIndex {
        let index = MemorySearchIndex::new();
        index.index(&order(1, 10, Some("Extra spicy, no onion"), None)).await.unwrap();
        index.index(&order(2, 11, Some("mild"), Some(5))).await.unwrap();
        index.index(&order(3, 10, None, Some(5))).await.unwrap();
        index
    }

    #[tokio::test]
    async fn test_note_words_are_case_insensitive() {
        let index = seeded().await;
        assert_eq!(index.search("SPICY").await.unwrap(), vec![1]);
        assert_eq!(index.search("onion").await.unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_terms_are_or_combined() {
        let index = seeded().await;
        assert_eq!(index.search("spicy mild").await.unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_field_qualified_terms() {
        let index = seeded().await;
        assert_eq!(index.search("ticketid:5").await.unwrap(), vec![2, 3]);
        assert_eq!(index.search("foodid:10").await.unwrap(), vec![1, 3]);
        assert_eq!(index.search("unitprice:12.5").await.unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_prefix_and_match_all() {
        let index = seeded().await;
        assert_eq!(index.search("spi*").await.unwrap(), vec![1]);
        assert_eq!(index.search("*").await.unwrap(), vec![1, 2, 3]);
        assert_eq!(index.search("   ").await.unwrap(), vec![1, 2, 3]);
        assert!(index.search("pizza").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reindex_and_remove() {
        let index = seeded().await;
        index.index(&order(2, 11, Some("spicy"), Some(5))).await.unwrap();
        assert_eq!(index.search("mild").await.unwrap(), Vec::<i64>::new());
        assert_eq!(index.search("spicy").await.unwrap(), vec![1, 2]);

        index.remove(1).await.unwrap();
        assert_eq!(index.search("spicy").await.unwrap(), vec![2]);
    }

    #[tokio::test]
    async fn test_unsaved_order_is_rejected() {
        let index = MemorySearchIndex::new();
        let mut o = order(1, 1, None, None);
        o.id = None;
        assert!(matches!(index.index(&o).await, Err(SearchError::MissingId)));
    }
}
