//! `/v2/customers/my`: balance and invoices.

use super::ListQuery;
use crate::errors::DoError;
use crate::models::{Balance, InvoiceItemsResponse, InvoicesResponse};

request_builder!(
    /// `/v2/customers`
    CustomersRequestBuilder
);

impl CustomersRequestBuilder {
    child!(
        /// The customer the token belongs to.
        my, "my" => MyRequestBuilder
    );
}

request_builder!(
    /// `/v2/customers/my`
    MyRequestBuilder
);

impl MyRequestBuilder {
    child!(balance, "balance" => BalanceRequestBuilder);
    child!(invoices, "invoices" => InvoicesRequestBuilder);
}

request_builder!(
    /// `/v2/customers/my/balance`
    BalanceRequestBuilder
);

impl BalanceRequestBuilder {
    pub async fn get(&self) -> Result<Balance, DoError> {
        self.inner.get().await
    }
}

request_builder!(
    /// `/v2/customers/my/invoices`
    InvoicesRequestBuilder
);

impl InvoicesRequestBuilder {
    item!(by_invoice_uuid(invoice_uuid: &str) => InvoiceItemRequestBuilder);

    pub async fn get(&self) -> Result<InvoicesResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<InvoicesResponse, DoError> {
        self.inner.get_with(query).await
    }
}

request_builder!(
    /// `/v2/customers/my/invoices/{invoice_uuid}`
    InvoiceItemRequestBuilder
);

impl InvoiceItemRequestBuilder {
    child!(pdf, "pdf" => InvoicePdfRequestBuilder);
    child!(csv, "csv" => InvoiceCsvRequestBuilder);

    /// Line items of the invoice.
    pub async fn get(&self) -> Result<InvoiceItemsResponse, DoError> {
        self.inner.get().await
    }

    pub async fn get_with(&self, query: &ListQuery) -> Result<InvoiceItemsResponse, DoError> {
        self.inner.get_with(query).await
    }
}

request_builder!(
    /// `/v2/customers/my/invoices/{invoice_uuid}/pdf`
    InvoicePdfRequestBuilder
);

impl InvoicePdfRequestBuilder {
    /// Download the invoice as PDF bytes.
    pub async fn get(&self) -> Result<Vec<u8>, DoError> {
        self.inner.get_bytes("application/pdf").await
    }
}

request_builder!(
    /// `/v2/customers/my/invoices/{invoice_uuid}/csv`
    InvoiceCsvRequestBuilder
);

impl InvoiceCsvRequestBuilder {
    pub async fn get(&self) -> Result<Vec<u8>, DoError> {
        self.inner.get_bytes("text/csv").await
    }
}
