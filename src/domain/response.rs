#[derive(Debug, Clone, PartialEq, Eq)]
/// Account details returned by a successful login.
pub struct LoginInfo {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Full receipt record returned by the detail lookup.
///
/// This is the `document.receipt` object of the wire response, flattened. All
/// monetary fields (`*_sum`, `price`, `nds10`) are integers in minor currency
/// units (kopecks); the service never sends floating-point money.
pub struct ReceiptDetail {
    pub operation_type: i32,
    pub fiscal_sign: i64,
    pub date_time: String,
    pub raw_data: String,
    /// Receipt total in kopecks.
    pub total_sum: i64,
    /// Portion of the total paid in cash, kopecks.
    pub cash_total_sum: i64,
    /// Portion of the total paid electronically, kopecks.
    pub ecash_total_sum: i64,
    /// VAT charged at the 10% rate, kopecks.
    pub nds10: i64,
    pub taxation_type: i32,
    pub user: String,
    pub user_inn: String,
    pub operator: String,
    pub kkt_reg_id: String,
    pub fiscal_drive_number: String,
    pub fiscal_document_number: i64,
    pub receipt_code: i32,
    pub request_number: i64,
    pub shift_number: i64,
    pub retail_place_address: String,
    /// Line items in receipt order.
    pub items: Vec<ReceiptItem>,
    /// Free-form key/value properties attached by the issuer.
    pub properties: Vec<ReceiptProperty>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One line item of a receipt. `sum` and `price` are kopecks.
pub struct ReceiptItem {
    pub sum: i64,
    pub price: i64,
    pub name: String,
    pub quantity: i64,
    pub nds10: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptProperty {
    pub key: String,
    pub value: String,
}
