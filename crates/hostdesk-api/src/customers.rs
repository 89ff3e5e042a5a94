// Customer (lead) endpoints
//
// Leads and customers share one backing resource: `/api/v1/customer`.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{CustomerCreate, CustomerResponse, Envelope};

impl ApiClient {
    /// List all customers.
    ///
    /// `GET /api/v1/customer` → `message.data: Customer[]`
    pub async fn list_customers(&self) -> Result<Vec<CustomerResponse>, Error> {
        let url = self.api_url("customer")?;
        debug!("listing customers");
        self.get(url, Envelope::MessageData).await
    }

    /// Create a customer (lead).
    ///
    /// `POST /api/v1/customer`. The record is read from `data` when the
    /// server wraps it, otherwise from the whole response body.
    pub async fn create_customer(&self, body: &CustomerCreate) -> Result<CustomerResponse, Error> {
        let url = self.api_url("customer")?;
        debug!(company = %body.company_name, "creating customer");
        self.post(url, body, Envelope::DataOrBody).await
    }
}
