use serde::Deserialize;

use crate::domain::{ReceiptDetail, ReceiptItem, ReceiptProperty, ReceiptRef, TotalAmount};

/// Fixed timestamp the existence-check endpoint expects in its `date`
/// parameter. The service validates the receipt against the `sum` value and
/// ignores this field, but rejects requests without it.
const BILL_CHECK_DATE: &str = "2018-05-17T17:57:00";

/// Relative URL for `GET`-ing a receipt existence check.
///
/// The `*` path segments are literal wildcards in the service's route table,
/// not placeholders to substitute.
pub fn bill_check_path(receipt: &ReceiptRef, total: TotalAmount) -> String {
    format!(
        "v1/ofds/*/inns/*/fss/{}/operations/1/tickets/{}?fiscalSign={}&date={}&sum={}",
        receipt.fiscal_number().as_str(),
        receipt.fiscal_document().as_str(),
        receipt.fiscal_sign().as_str(),
        BILL_CHECK_DATE,
        total.to_wire(),
    )
}

/// Relative URL for `GET`-ing full receipt details.
pub fn bill_detail_path(receipt: &ReceiptRef) -> String {
    format!(
        "v1/inns/*/kkts/*/fss/{}/tickets/{}?fiscalSign={}&sendToEmail=no",
        receipt.fiscal_number().as_str(),
        receipt.fiscal_document().as_str(),
        receipt.fiscal_sign().as_str(),
    )
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ReceiptJsonResponse {
    document: DocumentJson,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DocumentJson {
    receipt: ReceiptJson,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ReceiptJson {
    operation_type: i32,
    fiscal_sign: i64,
    date_time: String,
    raw_data: String,
    total_sum: i64,
    cash_total_sum: i64,
    ecash_total_sum: i64,
    nds10: i64,
    taxation_type: i32,
    user: String,
    user_inn: String,
    operator: String,
    kkt_reg_id: String,
    fiscal_drive_number: String,
    fiscal_document_number: i64,
    receipt_code: i32,
    request_number: i64,
    shift_number: i64,
    retail_place_address: String,
    items: Vec<ItemJson>,
    properties: Vec<PropertyJson>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ItemJson {
    sum: i64,
    price: i64,
    name: String,
    quantity: i64,
    nds10: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PropertyJson {
    key: String,
    value: String,
}

/// Decode the detail-lookup response body into a [`ReceiptDetail`].
///
/// Absent fields decode as zero values and unknown fields are ignored (real
/// receipts differ a lot between issuers); item order is preserved. Malformed
/// JSON and type mismatches are errors.
pub fn decode_receipt_json(body: &[u8]) -> Result<ReceiptDetail, serde_json::Error> {
    let parsed: ReceiptJsonResponse = serde_json::from_slice(body)?;
    let receipt = parsed.document.receipt;

    Ok(ReceiptDetail {
        operation_type: receipt.operation_type,
        fiscal_sign: receipt.fiscal_sign,
        date_time: receipt.date_time,
        raw_data: receipt.raw_data,
        total_sum: receipt.total_sum,
        cash_total_sum: receipt.cash_total_sum,
        ecash_total_sum: receipt.ecash_total_sum,
        nds10: receipt.nds10,
        taxation_type: receipt.taxation_type,
        user: receipt.user,
        user_inn: receipt.user_inn,
        operator: receipt.operator,
        kkt_reg_id: receipt.kkt_reg_id,
        fiscal_drive_number: receipt.fiscal_drive_number,
        fiscal_document_number: receipt.fiscal_document_number,
        receipt_code: receipt.receipt_code,
        request_number: receipt.request_number,
        shift_number: receipt.shift_number,
        retail_place_address: receipt.retail_place_address,
        items: receipt
            .items
            .into_iter()
            .map(|item| ReceiptItem {
                sum: item.sum,
                price: item.price,
                name: item.name,
                quantity: item.quantity,
                nds10: item.nds10,
            })
            .collect(),
        properties: receipt
            .properties
            .into_iter()
            .map(|property| ReceiptProperty {
                key: property.key,
                value: property.value,
            })
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use crate::domain::{FiscalDocument, FiscalNumber, FiscalSign};

    use super::*;

    fn receipt_ref() -> ReceiptRef {
        ReceiptRef::new(
            FiscalNumber::new("1234567890").unwrap(),
            FiscalDocument::new("42").unwrap(),
            FiscalSign::new("999888777").unwrap(),
        )
    }

    #[test]
    fn bill_check_path_matches_the_service_template() {
        let path = bill_check_path(&receipt_ref(), TotalAmount::new(150.50).unwrap());
        assert_eq!(
            path,
            "v1/ofds/*/inns/*/fss/1234567890/operations/1/tickets/42?fiscalSign=999888777&date=2018-05-17T17:57:00&sum=150.500000"
        );
    }

    #[test]
    fn bill_detail_path_matches_the_service_template() {
        let path = bill_detail_path(&receipt_ref());
        assert_eq!(
            path,
            "v1/inns/*/kkts/*/fss/1234567890/tickets/42?fiscalSign=999888777&sendToEmail=no"
        );
    }

    #[test]
    fn decode_full_receipt() {
        let json = r#"
        {
          "document": {
            "receipt": {
              "operationType": 1,
              "fiscalSign": 1128712512,
              "dateTime": "2018-05-17T17:57:00",
              "rawData": "AwA...",
              "totalSum": 15050,
              "cashTotalSum": 5050,
              "ecashTotalSum": 10000,
              "nds10": 459,
              "taxationType": 1,
              "user": "ООО Ромашка",
              "userInn": "7707083893",
              "operator": "Иванова И.И.",
              "kktRegId": "0001455428019418",
              "fiscalDriveNumber": "8710000100518392",
              "fiscalDocumentNumber": 42,
              "receiptCode": 3,
              "requestNumber": 96,
              "shiftNumber": 143,
              "retailPlaceAddress": "г. Москва, ул. Тверская, 1",
              "items": [
                {"sum": 5050, "price": 5050, "name": "Молоко", "quantity": 1, "nds10": 459},
                {"sum": 10000, "price": 5000, "name": "Хлеб", "quantity": 2, "nds10": 0}
              ],
              "properties": [
                {"key": "terminal", "value": "00314871"}
              ]
            }
          }
        }
        "#
        .as_bytes();

        let detail = decode_receipt_json(json).unwrap();
        assert_eq!(detail.operation_type, 1);
        assert_eq!(detail.fiscal_sign, 1_128_712_512);
        assert_eq!(detail.date_time, "2018-05-17T17:57:00");
        assert_eq!(detail.total_sum, 15050);
        assert_eq!(detail.cash_total_sum, 5050);
        assert_eq!(detail.ecash_total_sum, 10000);
        assert_eq!(detail.nds10, 459);
        assert_eq!(detail.user_inn, "7707083893");
        assert_eq!(detail.kkt_reg_id, "0001455428019418");
        assert_eq!(detail.fiscal_drive_number, "8710000100518392");
        assert_eq!(detail.items.len(), 2);
        assert_eq!(
            detail.items[0],
            ReceiptItem {
                sum: 5050,
                price: 5050,
                name: "Молоко".to_owned(),
                quantity: 1,
                nds10: 459,
            }
        );
        assert_eq!(detail.items[1].name, "Хлеб");
        assert_eq!(detail.items[1].quantity, 2);
        assert_eq!(
            detail.properties,
            vec![ReceiptProperty {
                key: "terminal".to_owned(),
                value: "00314871".to_owned(),
            }]
        );
    }

    #[test]
    fn decode_preserves_item_count_and_order() {
        let items = (0..7)
            .map(|idx| format!(r#"{{"sum": {0}, "price": {0}, "name": "item {0}", "quantity": 1, "nds10": 0}}"#, idx))
            .collect::<Vec<_>>()
            .join(",");
        let json = format!(r#"{{"document": {{"receipt": {{"items": [{items}]}}}}}}"#);

        let detail = decode_receipt_json(json.as_bytes()).unwrap();
        assert_eq!(detail.items.len(), 7);
        for (idx, item) in detail.items.iter().enumerate() {
            assert_eq!(item.sum, idx as i64);
            assert_eq!(item.name, format!("item {idx}"));
        }
    }

    #[test]
    fn decode_zero_fills_missing_fields() {
        let detail = decode_receipt_json(br#"{"document": {"receipt": {}}}"#).unwrap();
        assert_eq!(detail.total_sum, 0);
        assert_eq!(detail.date_time, "");
        assert!(detail.items.is_empty());
        assert!(detail.properties.is_empty());

        let detail = decode_receipt_json(b"{}").unwrap();
        assert_eq!(detail.fiscal_document_number, 0);
    }

    #[test]
    fn decode_rejects_malformed_bodies() {
        assert!(decode_receipt_json(b"").is_err());
        assert!(decode_receipt_json(b"<html>502</html>").is_err());
        assert!(
            decode_receipt_json(br#"{"document": {"receipt": {"totalSum": "15050"}}}"#).is_err()
        );
    }
}
