use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_invoice_text(text);
            Vec::new()
        }
        Msg::ParseClicked => {
            // Empty text is submitted as-is; the endpoint decides what it
            // means.
            let request_id = state.begin_submit();
            let content = state.invoice_text().to_string();
            vec![Effect::SubmitParse {
                request_id,
                content,
            }]
        }
        Msg::ParseSucceeded { items, .. } => {
            // In-flight requests are never cancelled, so completions apply
            // unconditionally: whichever resolves last wins.
            state.complete_parse(items);
            Vec::new()
        }
        Msg::ParseFailed { message, .. } => {
            state.fail_parse(message);
            Vec::new()
        }
        Msg::EditClicked => {
            if state.can_edit() {
                state.enter_edit();
            }
            Vec::new()
        }
        Msg::FieldEdited {
            index,
            field,
            value,
        } => {
            state.edit_field(index, field, value);
            Vec::new()
        }
        Msg::SaveClicked => {
            state.commit_draft();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
