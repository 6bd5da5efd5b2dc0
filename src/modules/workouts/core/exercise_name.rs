/// Trims surrounding whitespace and title-cases the rest.
///
/// A character is lower-cased when the one before it is cased (has an upper
/// and lower form) and title-cased otherwise, so `"pull-up"` becomes
/// `"Pull-Up"` and `"中a"` becomes `"中A"`.
pub fn normalize_exercise_name(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut previous_is_cased = false;
    for c in raw.trim().chars() {
        if previous_is_cased {
            normalized.extend(c.to_lowercase());
        } else {
            push_title_case(&mut normalized, c);
        }
        previous_is_cased = is_cased(c);
    }
    normalized
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase() || c.to_lowercase().next() != Some(c)
}

/// Upper-cases the first character of the mapping and lower-cases the rest,
/// so `ß` becomes `Ss` rather than `SS`.
fn push_title_case(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        out.push(first);
    }
    for rest in upper {
        out.extend(rest.to_lowercase());
    }
}
