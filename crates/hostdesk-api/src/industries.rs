// Industry endpoints
//
// `/api/v1/industry` serves both the list and the create call.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Envelope, IndustryCreate, IndustryResponse};

impl ApiClient {
    /// List all industries.
    ///
    /// `GET /api/v1/industry` → `data: Industry[]`
    pub async fn list_industries(&self) -> Result<Vec<IndustryResponse>, Error> {
        let url = self.api_url("industry")?;
        debug!("listing industries");
        self.get(url, Envelope::Data).await
    }

    /// Create an industry.
    ///
    /// `POST /api/v1/industry` with `{industry_name, description}`. The
    /// created record is read from `data`, or from the bare body when the
    /// server skips the envelope.
    pub async fn create_industry(&self, body: &IndustryCreate) -> Result<IndustryResponse, Error> {
        let url = self.api_url("industry")?;
        debug!(name = %body.industry_name, "creating industry");
        self.post(url, body, Envelope::DataOrBody).await
    }
}
