// Station endpoints
//
// Stations carry the deepest nesting (equipment, utilities, safety
// gear, layout areas) and the photo-upload sub-resource. Upload size
// and type validation happens in forecourt-core before bytes reach
// this module.

use tracing::debug;

use crate::Error;
use crate::client::ApiClient;
use crate::types::{PhotoUploadResponse, StationCreateUpdate, StationResponse};

impl ApiClient {
    /// `GET /api/stations`
    pub async fn list_stations(&self, search: &str) -> Result<Vec<StationResponse>, Error> {
        self.get_with_query("api/stations", &[], &[("search", search)])
            .await
    }

    /// `GET /api/stations/:id`
    pub async fn get_station(&self, id: &str) -> Result<StationResponse, Error> {
        self.get("api/stations/:id", &[("id", id)]).await
    }

    /// `POST /api/stations`
    pub async fn create_station(
        &self,
        body: &StationCreateUpdate,
    ) -> Result<StationResponse, Error> {
        self.post("api/stations", &[], body).await
    }

    /// `PUT /api/stations/:id`
    pub async fn update_station(
        &self,
        id: &str,
        body: &StationCreateUpdate,
    ) -> Result<StationResponse, Error> {
        self.put("api/stations/:id", &[("id", id)], body).await
    }

    /// `DELETE /api/stations/:id`
    pub async fn delete_station(&self, id: &str) -> Result<(), Error> {
        self.delete("api/stations/:id", &[("id", id)]).await
    }

    /// `POST /api/stations/:id/photos`
    ///
    /// Raw body upload, no chunking or resumability. A failed upload is
    /// simply failed; the caller re-submits the whole file.
    pub async fn upload_station_photo(
        &self,
        id: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<PhotoUploadResponse, Error> {
        debug!(station = id, size = bytes.len(), "uploading station photo");
        self.post_bytes("api/stations/:id/photos", &[("id", id)], content_type, bytes)
            .await
    }
}
