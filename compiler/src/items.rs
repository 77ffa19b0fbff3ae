use crate::utils::slugify;
use schemaform_schema::ChoiceItem;
use serde_json::Value;

/// Normalizes raw `enum`/`oneOf`/`anyOf` entries into choice items, keeping order.
pub fn parse_items(entries: &[Value]) -> Vec<ChoiceItem> {
    entries.iter().map(ChoiceItem::from_entry).collect()
}

/// Returns a mapper over `(index, item)` pairs that assigns group names and refs.
///
/// With a field name, every item gets `ref = "<name>-<index>"`. In radio mode
/// all items share the field name as their `name`; otherwise an item keeps a
/// name it already has, or gets `"<name>-<slug(label)>"`. Without a field name
/// items are named by their slugged label and get no ref.
pub fn set_item_name<'a>(
    name: Option<&'a str>,
    is_radio: bool,
) -> impl Fn((usize, ChoiceItem)) -> ChoiceItem + 'a {
    move |(index, mut item)| {
        match name {
            Some(name) => {
                if is_radio {
                    item.name = Some(name.to_owned());
                } else if item.name.is_none() {
                    item.name = Some(format!("{}-{}", name, slugify(&item.label)));
                }
                item.ref_ = Some(format!("{}-{}", name, index));
            }
            None => {
                if item.name.is_none() {
                    item.name = Some(slugify(&item.label));
                }
            }
        }
        item
    }
}

/// Applies [`set_item_name`] to every item in order.
pub fn name_items(items: Vec<ChoiceItem>, name: Option<&str>, is_radio: bool) -> Vec<ChoiceItem> {
    items.into_iter().enumerate().map(set_item_name(name, is_radio)).collect()
}
