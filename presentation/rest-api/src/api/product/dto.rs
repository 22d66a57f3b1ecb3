use chrono::{DateTime, Utc};
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};

use business::domain::product::model::{Product, ProductSummary};
use business::domain::product::value_objects::ImageUpload;

/// Multipart form used to create or update a product.
#[derive(Multipart)]
pub struct ProductForm {
    /// Product title (at least 5 characters)
    pub title: Option<String>,
    /// Product description (at least 5 characters)
    pub description: Option<String>,
    /// Product image (jpeg, png, bmp, gif, svg or webp)
    pub image: Option<Upload>,
}

/// Reads an uploaded file fully into memory.
pub async fn read_upload(upload: Upload) -> std::io::Result<ImageUpload> {
    let file_name = upload.file_name().map(str::to_string);
    let content_type = upload.content_type().map(str::to_string);
    let data = upload.into_vec().await?;

    Ok(ImageUpload {
        file_name,
        content_type,
        data,
    })
}

#[derive(Debug, Clone, Object)]
pub struct ProductSummaryResponse {
    /// Product unique identifier
    pub id: String,
    /// Product title
    pub title: String,
    /// Product description
    pub description: String,
    /// Stored image name, null when the product has no image
    pub image: Option<String>,
}

impl From<ProductSummary> for ProductSummaryResponse {
    fn from(summary: ProductSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title,
            description: summary.description,
            image: summary.image,
        }
    }
}

/// Product fields as shown by `GET /products/:id`.
///
/// Every field is optional: an unknown id yields an empty object.
#[derive(Debug, Clone, Default, Object)]
pub struct ProductDetailResponse {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub title: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub created_at: Option<DateTime<Utc>>,
    #[oai(skip_serializing_if_is_none)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Product> for ProductDetailResponse {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id.to_string()),
            title: Some(product.title),
            description: Some(product.description),
            image: product.image,
            created_at: Some(product.created_at),
            updated_at: Some(product.updated_at),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ShowProductResponse {
    pub product: ProductDetailResponse,
}

impl From<Option<Product>> for ShowProductResponse {
    fn from(product: Option<Product>) -> Self {
        Self {
            product: product.map(Into::into).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
