use schemaform_schema::ChoiceItem;
use serde_json::Value;

/// One slot per item: the item's value when checked, `None` otherwise.
pub fn array_ordered_values(items: &[ChoiceItem]) -> Vec<Option<Value>> {
    items
        .iter()
        .map(|item| item.checked.is_on().then(|| item.value.clone()))
        .collect()
}

/// Values of every checked or selected item, in item order.
pub fn array_unordered_values(items: &[ChoiceItem]) -> Vec<Value> {
    items
        .iter()
        .filter(|item| item.checked.is_on() || item.selected.is_on())
        .map(|item| item.value.clone())
        .collect()
}

/// Value of the last checked item. `selected` is not considered.
pub fn single_value(items: &[ChoiceItem]) -> Option<Value> {
    items
        .iter()
        .rev()
        .find(|item| item.checked.is_on())
        .map(|item| item.value.clone())
}
