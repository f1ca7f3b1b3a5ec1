use crate::view_model::AppViewModel;
use crate::{ExtractedItem, FieldValue, ItemField};

/// Correlation id for outbound parse requests. Carried through effects and
/// completion messages for log correlation; completions are applied
/// regardless of id (overlapping submits are not cancelled).
pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    invoice_text: String,
    parsed: Option<Vec<ExtractedItem>>,
    draft: Option<Vec<ExtractedItem>>,
    error: Option<String>,
    loading: bool,
    edit_mode: bool,
    last_request_id: RequestId,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::from_state(self)
    }

    pub fn invoice_text(&self) -> &str {
        &self.invoice_text
    }

    /// The authoritative result list; `None` until a parse succeeds.
    pub fn items(&self) -> Option<&[ExtractedItem]> {
        self.parsed.as_deref()
    }

    /// The editable copy; mirrors `items` until edited.
    pub fn draft_items(&self) -> Option<&[ExtractedItem]> {
        self.draft.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Edit mode is only reachable while there is a non-empty result.
    pub fn can_edit(&self) -> bool {
        self.parsed.as_ref().is_some_and(|items| !items.is_empty())
    }

    pub(crate) fn set_invoice_text(&mut self, text: String) {
        self.invoice_text = text;
    }

    /// Resets every result slot for a fresh request and hands out the next
    /// request id. The input text keeps its own lifecycle.
    pub(crate) fn begin_submit(&mut self) -> RequestId {
        self.error = None;
        self.parsed = None;
        self.draft = None;
        self.edit_mode = false;
        self.loading = true;
        self.last_request_id += 1;
        self.last_request_id
    }

    pub(crate) fn complete_parse(&mut self, items: Vec<ExtractedItem>) {
        self.loading = false;
        self.install_parsed(items);
    }

    pub(crate) fn fail_parse(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub(crate) fn enter_edit(&mut self) {
        self.edit_mode = true;
    }

    /// Replaces one field of one draft item with raw input text. Out of
    /// bounds indices and a missing draft are ignored.
    pub(crate) fn edit_field(&mut self, index: usize, field: ItemField, value: String) {
        if let Some(item) = self.draft.as_mut().and_then(|items| items.get_mut(index)) {
            item.set(field, FieldValue::Text(value));
        }
    }

    /// Commits the draft as the authoritative result and leaves edit mode.
    /// There is no discard: a new submit is the only other way out.
    pub(crate) fn commit_draft(&mut self) {
        if let Some(draft) = self.draft.clone() {
            self.install_parsed(draft);
            self.edit_mode = false;
        }
    }

    /// The only place the authoritative result changes. The draft mirror is
    /// re-derived here, never anywhere else.
    fn install_parsed(&mut self, items: Vec<ExtractedItem>) {
        self.parsed = Some(items);
        self.draft = self.parsed.clone();
    }
}
