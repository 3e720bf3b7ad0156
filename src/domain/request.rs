use crate::domain::value::{FiscalDocument, FiscalNumber, FiscalSign};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// The identifier triple printed on a cash receipt, used by both receipt
/// operations (existence check and detail lookup).
pub struct ReceiptRef {
    fiscal_number: FiscalNumber,
    fiscal_document: FiscalDocument,
    fiscal_sign: FiscalSign,
}

impl ReceiptRef {
    pub fn new(
        fiscal_number: FiscalNumber,
        fiscal_document: FiscalDocument,
        fiscal_sign: FiscalSign,
    ) -> Self {
        Self {
            fiscal_number,
            fiscal_document,
            fiscal_sign,
        }
    }

    /// Fiscal drive number (ФН).
    pub fn fiscal_number(&self) -> &FiscalNumber {
        &self.fiscal_number
    }

    /// Fiscal document number (ФД).
    pub fn fiscal_document(&self) -> &FiscalDocument {
        &self.fiscal_document
    }

    /// Fiscal sign (ФП).
    pub fn fiscal_sign(&self) -> &FiscalSign {
        &self.fiscal_sign
    }
}
