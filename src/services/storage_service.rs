use crate::error::Result;
use reqwest::Client;
use url::Url;

/// Thin adapter over the Supabase storage REST API. Uploads return the
/// public URL for the object; removals are bulk by bucket-relative path.
#[derive(Clone)]
pub struct StorageService {
    client: Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

impl StorageService {
    pub fn new(base_url: String, service_key: String, bucket: String, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            bucket,
        }
    }

    pub async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<String> {
        let upload_url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url, self.bucket, path
        );

        let res = self
            .client
            .post(&upload_url)
            .bearer_auth(&self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Storage upload failed {}: {}", status, text).into());
        }

        Ok(self.public_url(path))
    }

    pub async fn remove(&self, paths: &[String]) -> Result<()> {
        let delete_url = format!("{}/storage/v1/object/{}", self.base_url, self.bucket);

        let res = self
            .client
            .delete(&delete_url)
            .bearer_auth(&self.service_key)
            .json(&serde_json::json!({ "prefixes": paths }))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Storage removal failed {}: {}", status, text).into());
        }

        Ok(())
    }

    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    /// Derives the bucket-relative object path from a public URL. Returns
    /// `None` when the URL does not point into this bucket, so callers can
    /// skip foreign URLs instead of failing deletion.
    pub fn object_path_from_url(&self, image_url: &str) -> Option<String> {
        let url = Url::parse(image_url).ok()?;
        let marker = format!("/{}/", self.bucket);
        let (_, object_path) = url.path().split_once(&marker)?;
        if object_path.is_empty() {
            return None;
        }
        Some(object_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> StorageService {
        StorageService::new(
            "https://project.supabase.co".to_string(),
            "service-key".to_string(),
            "car-images".to_string(),
            Client::new(),
        )
    }

    #[test]
    fn public_url_points_into_bucket() {
        let url = service().public_url("cars/abc/image-1-0.png");
        assert_eq!(
            url,
            "https://project.supabase.co/storage/v1/object/public/car-images/cars/abc/image-1-0.png"
        );
    }

    #[test]
    fn round_trips_object_path_through_public_url() {
        let svc = service();
        let url = svc.public_url("cars/abc/image-1-0.png");
        assert_eq!(
            svc.object_path_from_url(&url).as_deref(),
            Some("cars/abc/image-1-0.png")
        );
    }

    #[test]
    fn foreign_urls_yield_no_path() {
        let svc = service();
        assert!(svc.object_path_from_url("https://cdn.example.com/cars/a.png").is_none());
        assert!(svc
            .object_path_from_url("https://project.supabase.co/storage/v1/object/public/avatars/a.png")
            .is_none());
        assert!(svc.object_path_from_url("not a url").is_none());
    }

    #[test]
    fn bucket_prefix_without_object_yields_no_path() {
        let svc = service();
        assert!(svc
            .object_path_from_url("https://project.supabase.co/storage/v1/object/public/car-images/")
            .is_none());
    }
}
