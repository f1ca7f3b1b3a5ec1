use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the invoice text to the parse endpoint.
    SubmitParse {
        request_id: RequestId,
        content: String,
    },
}
