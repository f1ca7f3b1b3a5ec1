use crate::{ExtractedItem, ItemField, RequestId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the invoice text box.
    InputChanged(String),
    /// User submitted the current text for parsing.
    ParseClicked,
    /// A parse request came back with extracted line items.
    ParseSucceeded {
        request_id: RequestId,
        items: Vec<ExtractedItem>,
    },
    /// A parse request failed; `message` is shown to the user as-is.
    ParseFailed {
        request_id: RequestId,
        message: String,
    },
    /// User clicked Edit on the result list.
    EditClicked,
    /// User changed one field of one item in the draft copy.
    FieldEdited {
        index: usize,
        field: ItemField,
        value: String,
    },
    /// User clicked Save; commits the draft as the authoritative result.
    SaveClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
