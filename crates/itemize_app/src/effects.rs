use engine_logging::{engine_info, engine_warn};
use itemize_core::{Effect, ExtractedItem, FieldValue, Msg};
use itemize_engine::{ClientSettings, EngineEvent, EngineHandle, ItemValue, ParsedItem};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self {
            engine: EngineHandle::new(ClientSettings::default()),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitParse {
                    request_id,
                    content,
                } => {
                    engine_info!(
                        "SubmitParse request_id={} content_len={}",
                        request_id,
                        content.len()
                    );
                    self.engine.submit(request_id, content);
                }
            }
        }
    }

    /// Drains engine completions into core messages.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::ParseCompleted { request_id, result } => match result {
                    Ok(items) => {
                        engine_info!(
                            "parse request {} succeeded with {} items",
                            request_id,
                            items.len()
                        );
                        inbox.push(Msg::ParseSucceeded {
                            request_id,
                            items: items.into_iter().map(item_from_wire).collect(),
                        });
                    }
                    Err(err) => {
                        engine_warn!("parse request {} failed: {}", request_id, err.kind);
                        inbox.push(Msg::ParseFailed {
                            request_id,
                            message: err.message,
                        });
                    }
                },
            }
        }
        inbox
    }
}

fn item_from_wire(item: ParsedItem) -> ExtractedItem {
    ExtractedItem {
        product_name: item.product_name.map(value_from_wire),
        quantity: item.quantity.map(value_from_wire),
        unit: item.unit.map(value_from_wire),
        price: item.price.map(value_from_wire),
        unit_price: item.unit_price.map(value_from_wire),
    }
}

fn value_from_wire(value: ItemValue) -> FieldValue {
    match value {
        ItemValue::Text(text) => FieldValue::Text(text),
        ItemValue::Number(number) => FieldValue::Number(number),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_items_map_field_for_field() {
        let item = ParsedItem {
            product_name: Some(ItemValue::Text("Widget".to_string())),
            quantity: Some(ItemValue::Number(3.0)),
            ..ParsedItem::default()
        };

        let mapped = item_from_wire(item);

        assert_eq!(
            mapped.product_name,
            Some(FieldValue::Text("Widget".to_string()))
        );
        assert_eq!(mapped.quantity, Some(FieldValue::Number(3.0)));
        assert_eq!(mapped.unit, None);
        assert_eq!(mapped.price, None);
        assert_eq!(mapped.unit_price, None);
    }
}
