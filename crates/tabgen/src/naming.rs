//! Table names derived from record names.

/// Derive a table name from a record name.
///
/// Any trailing character found in `suffix` is trimmed (the suffix is a
/// character set), then the rest is converted to snake_case. A name made only
/// of suffix characters is kept whole.
///
/// ```
/// use tabgen::table_name;
/// assert_eq!(table_name("UserModel", "Model"), "user");
/// assert_eq!(table_name("OrderItemModel", "Model"), "order_item");
/// assert_eq!(table_name("ArticleModel", "Model"), "artic");
/// assert_eq!(table_name("ArticleModel", ""), "article_model");
/// ```
pub fn table_name(record_name: &str, suffix: &str) -> String {
    let trimmed = record_name.trim_end_matches(|c: char| suffix.contains(c));
    if trimmed.is_empty() {
        snake_case(record_name)
    } else {
        snake_case(trimmed)
    }
}

/// `OrderItem` -> `order_item`. Every ASCII capital after the first
/// character starts a new word, so `UserID` becomes `user_i_d`.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.char_indices() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(snake_case("User"), "user");
        assert_eq!(snake_case("OrderItem"), "order_item");
        assert_eq!(snake_case("order_item"), "order_item");
        assert_eq!(snake_case("UserID"), "user_i_d");
        assert_eq!(snake_case("Ünicode"), "Ünicode");
        assert_eq!(snake_case(""), "");
    }

    #[test]
    fn test_suffix_is_a_character_set() {
        assert_eq!(table_name("UserModel", "Model"), "user");
        // trailing 'e' and 'l' belong to the set as well
        assert_eq!(table_name("ProfileModel", "Model"), "profi");
        assert_eq!(table_name("User", "Model"), "user");
        assert_eq!(table_name("PaintEntity", "Entity"), "pa");
    }

    #[test]
    fn test_empty_suffix_keeps_name() {
        assert_eq!(table_name("UserModel", ""), "user_model");
    }

    #[test]
    fn test_fully_trimmed_name_falls_back() {
        assert_eq!(table_name("Model", "Model"), "model");
        assert_eq!(table_name("Mode", "Model"), "mode");
    }
}
