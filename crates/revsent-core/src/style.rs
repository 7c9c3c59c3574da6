//! Text and style-class derivation for rendered values

use crate::{ReviewRow, TableCell, TableRow};

/// Base class of the overall sentiment label
pub const SENTIMENT_LABEL_CLASS: &str = "sentiment-label";
pub const PRODUCT_RELATED_CLASS: &str = "product-related";
pub const NON_PRODUCT_RELATED_CLASS: &str = "non-product-related";
pub const REVIEW_SUMMARY_CLASS: &str = "review-summary";

/// Label shown when the score is present but no sentiment label is
pub const FALLBACK_SENTIMENT: &str = "Neutral";

/// Class for the overall sentiment label.
///
/// Lower-cases and replaces only the first space, so "A B C" becomes "a-b c".
/// Table cells use [`sentiment_cell_class`], which keeps spaces.
pub fn label_class(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}

/// Class for a per-review sentiment cell
pub fn sentiment_cell_class(sentiment: &str) -> String {
    format!("{}-sentiment", sentiment.to_lowercase())
}

/// Rating cell text, e.g. `4 ★` or `3.5 ★`
pub fn rating_text(rating: f64) -> String {
    format!("{} ★", rating)
}

/// Text and class of the relation cell
pub fn relation_cell(product_related: bool) -> (&'static str, &'static str) {
    if product_related {
        ("Yes", PRODUCT_RELATED_CLASS)
    } else {
        ("No", NON_PRODUCT_RELATED_CLASS)
    }
}

/// Build the four cells of a table row for one review
pub fn review_table_row(review: &ReviewRow) -> TableRow {
    let (relation_text, relation_class) = relation_cell(review.product_related);

    TableRow {
        rating: TableCell::plain(rating_text(review.rating)),
        sentiment: TableCell::styled(
            review.sentiment.clone(),
            sentiment_cell_class(&review.sentiment),
        ),
        relation: TableCell::styled(relation_text, relation_class),
        summary: TableCell::styled(review.summary.clone(), REVIEW_SUMMARY_CLASS),
    }
}
