use crate::core::normalize::{clean_value, element_text};
use crate::domain::model::FieldValue;
use indexmap::IndexMap;
use scraper::{Html, Selector};

/// Labels that show up in `<dl>` blocks but carry nothing we want:
/// broker contact rows and the weekday headers of the open-house
/// widget, which happens to share the same markup.
const SKIP_LABELS: [&str; 10] = [
    "Mobil", "Fax", "", "Man.", "Tir.", "Ons.", "Tors.", "Fre", "Lør.", "Søn.",
];

/// Collect every label/value pair from the listing's `<dl>` blocks.
/// Pairs are read in document order and duplicate labels are
/// last-wins. A block with an odd number of entries drops its trailing
/// unmatched label.
pub fn parse_label_pairs(document: &Html) -> IndexMap<String, FieldValue> {
    let block_sel = Selector::parse("dl").unwrap();
    let entry_sel = Selector::parse("dt, dd").unwrap();

    let mut data = IndexMap::new();
    for block in document.select(&block_sel) {
        let entries: Vec<_> = block.select(&entry_sel).collect();
        for pair in entries.chunks_exact(2) {
            let label = element_text(&pair[0]);
            if SKIP_LABELS.contains(&label.as_str()) {
                continue;
            }
            data.insert(label, clean_value(&element_text(&pair[1])));
        }
    }

    data
}
