use std::fmt;

/// One field payload of a parsed line.
///
/// The parse endpoint returns numbers for quantity/price fields and strings
/// for names and units, while edits store whatever text the input control
/// yielded, with no coercion. Both shapes live side by side in the result
/// list.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// True for text values with nothing to show.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            // Whole numbers render without a fractional part (3, not 3.0).
            FieldValue::Number(number) => {
                if number.is_finite() && number.fract() == 0.0 && number.abs() < 1e15 {
                    write!(f, "{}", *number as i64)
                } else {
                    write!(f, "{number}")
                }
            }
        }
    }
}

/// One parsed invoice line. Every field is independently optional; items have
/// no identity beyond their position in the result list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedItem {
    pub product_name: Option<FieldValue>,
    pub quantity: Option<FieldValue>,
    pub unit: Option<FieldValue>,
    pub price: Option<FieldValue>,
    pub unit_price: Option<FieldValue>,
}

impl ExtractedItem {
    pub fn get(&self, field: ItemField) -> Option<&FieldValue> {
        match field {
            ItemField::ProductName => self.product_name.as_ref(),
            ItemField::Quantity => self.quantity.as_ref(),
            ItemField::Unit => self.unit.as_ref(),
            ItemField::Price => self.price.as_ref(),
            ItemField::UnitPrice => self.unit_price.as_ref(),
        }
    }

    pub fn set(&mut self, field: ItemField, value: FieldValue) {
        let slot = match field {
            ItemField::ProductName => &mut self.product_name,
            ItemField::Quantity => &mut self.quantity,
            ItemField::Unit => &mut self.unit,
            ItemField::Price => &mut self.price,
            ItemField::UnitPrice => &mut self.unit_price,
        };
        *slot = Some(value);
    }
}

/// The five recognized fields of an item, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    ProductName,
    Quantity,
    Unit,
    Price,
    UnitPrice,
}

impl ItemField {
    pub const ALL: [ItemField; 5] = [
        ItemField::ProductName,
        ItemField::Quantity,
        ItemField::Unit,
        ItemField::Price,
        ItemField::UnitPrice,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ItemField::ProductName => "Product Name",
            ItemField::Quantity => "Quantity",
            ItemField::Unit => "Unit",
            ItemField::Price => "Price",
            ItemField::UnitPrice => "Unit Price",
        }
    }
}
