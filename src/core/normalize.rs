use crate::domain::model::FieldValue;
use scraper::ElementRef;

/// Normalize a raw label value. Strips non-breaking spaces, the ",-"
/// currency tail, the m² unit and the BRA area qualifiers, then tries
/// to read the remainder (minus a trailing "kr" and thousand-separator
/// spaces) as an integer. Anything that does not parse stays a string.
pub fn clean_value(raw: &str) -> FieldValue {
    let text = raw
        .replace('\u{a0}', " ")
        .replace(",-", "")
        .replace(" m²", "")
        .replace(" (BRA-i)", "")
        .replace(" (BRA-e)", "");

    let candidate = text.strip_suffix("kr").unwrap_or(&text).replace(' ', "");
    match candidate.parse::<i64>() {
        Ok(number) => FieldValue::Integer(number),
        Err(_) => FieldValue::Text(text),
    }
}

/// Element text with whitespace collapsed, the way headless renderers
/// report it. Nested tags contribute their text fragments in order.
pub(crate) fn element_text(el: &ElementRef) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
