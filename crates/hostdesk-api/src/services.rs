// Service and service-category endpoints

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Envelope, ServiceCategoryResponse, ServiceCreate, ServiceResponse};

/// First page requested by the services listing.
pub const DEFAULT_SERVICES_PAGE: u32 = 1;
/// Page size requested by the services listing.
pub const DEFAULT_SERVICES_LIMIT: u32 = 2;

impl ApiClient {
    /// List service categories.
    ///
    /// `GET /api/v1/service/categories` → `data: ServiceCategory[]`
    pub async fn list_service_categories(&self) -> Result<Vec<ServiceCategoryResponse>, Error> {
        let url = self.api_url("service/categories")?;
        debug!("listing service categories");
        self.get(url, Envelope::Data).await
    }

    /// Create a service.
    ///
    /// `POST /api/v1/services` → `data: Service`
    pub async fn create_service(&self, body: &ServiceCreate) -> Result<ServiceResponse, Error> {
        let url = self.api_url("services")?;
        debug!(name = %body.name, category_id = body.category_id, "creating service");
        self.post(url, body, Envelope::Data).await
    }

    /// List one page of services.
    ///
    /// `GET /api/v1/services?page={page}&limit={limit}` → `message.data: Service[]`
    pub async fn list_services(&self, page: u32, limit: u32) -> Result<Vec<ServiceResponse>, Error> {
        let mut url = self.api_url("services")?;
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());
        debug!(page, limit, "listing services");
        self.get(url, Envelope::MessageData).await
    }
}
