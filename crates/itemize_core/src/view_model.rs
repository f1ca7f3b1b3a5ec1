use crate::{AppState, ExtractedItem, ItemField};

/// Placeholder rendered for absent or blank fields in read-only mode.
pub const MISSING_FIELD: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub invoice_text: String,
    pub loading: bool,
    pub error: Option<String>,
    pub edit_mode: bool,
    pub results: ResultsView,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultsView {
    /// Nothing parsed yet, or the last submit failed.
    #[default]
    NotParsed,
    /// A successful parse returned zero items.
    Empty,
    /// One row per extracted item, in parse order.
    Items(Vec<ItemRowView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRowView {
    pub index: usize,
    pub fields: Vec<FieldSlot>,
}

/// One labeled field of one row, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSlot {
    pub field: ItemField,
    pub label: &'static str,
    /// Read-only text; `MISSING_FIELD` when the value is absent or blank.
    pub display: String,
    /// Raw text for the edit input; empty when the value is absent.
    pub edit_text: String,
}

impl AppViewModel {
    pub(crate) fn from_state(state: &AppState) -> Self {
        // Rows come from the draft while editing, from the authoritative
        // result otherwise.
        let source = if state.is_edit_mode() {
            state.draft_items()
        } else {
            state.items()
        };
        let results = match source {
            None => ResultsView::NotParsed,
            Some([]) => ResultsView::Empty,
            Some(items) => ResultsView::Items(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| ItemRowView {
                        index,
                        fields: field_slots(item),
                    })
                    .collect(),
            ),
        };

        Self {
            invoice_text: state.invoice_text().to_string(),
            loading: state.is_loading(),
            error: state.error().map(ToOwned::to_owned),
            edit_mode: state.is_edit_mode(),
            results,
        }
    }
}

fn field_slots(item: &ExtractedItem) -> Vec<FieldSlot> {
    ItemField::ALL
        .iter()
        .map(|&field| {
            let value = item.get(field);
            let display = match value {
                Some(value) if !value.is_blank() => value.to_string(),
                _ => MISSING_FIELD.to_string(),
            };
            let edit_text = value.map(ToString::to_string).unwrap_or_default();
            FieldSlot {
                field,
                label: field.label(),
                display,
                edit_text,
            }
        })
        .collect()
}
