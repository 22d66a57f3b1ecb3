use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::validation::ProductDetails;
use super::value_objects::{ImageName, image_path};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The exact set of fields a new product is built from.
pub struct NewProductProps {
    pub details: ProductDetails,
    pub image: ImageName,
}

/// Listing projection of a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Self {
        let (title, description) = props.details.into_parts();
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            image: Some(props.image.into_inner()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        title: String,
        description: String,
        image: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            description,
            image: image.filter(|name| !name.is_empty()),
            created_at,
            updated_at,
        }
    }

    pub fn update_details(&mut self, details: ProductDetails) {
        let (title, description) = details.into_parts();
        self.title = title;
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Points the product at a new image, returning the previous name.
    pub fn replace_image(&mut self, image: ImageName) -> Option<String> {
        self.updated_at = Utc::now();
        self.image.replace(image.into_inner())
    }

    /// Blob path of the current image, if the product has one.
    pub fn image_path(&self) -> Option<String> {
        self.image
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(image_path)
    }

    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::validation::ProductInput;

    fn details(title: &str, description: &str) -> ProductDetails {
        ProductInput {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            image: None,
        }
        .validate_changes()
        .unwrap()
        .details
    }

    fn props() -> NewProductProps {
        NewProductProps {
            details: details("Red Shoes", "Comfortable running shoes"),
            image: ImageName::generate("png"),
        }
    }

    #[test]
    fn should_create_product_with_given_image_name() {
        let image = ImageName::generate("png");
        let expected = image.as_str().to_string();

        let product = Product::new(NewProductProps {
            details: details("Red Shoes", "Comfortable running shoes"),
            image,
        });

        assert_eq!(product.title, "Red Shoes");
        assert_eq!(product.image.as_deref(), Some(expected.as_str()));
        assert_eq!(product.image_path(), Some(format!("product/image/{}", expected)));
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn should_normalize_empty_image_from_repository() {
        let now = Utc::now();
        let product = Product::from_repository(
            Uuid::new_v4(),
            "Red Shoes".to_string(),
            "Comfortable running shoes".to_string(),
            Some(String::new()),
            now,
            now,
        );

        assert!(product.image.is_none());
        assert!(product.image_path().is_none());
    }

    #[test]
    fn should_replace_image_and_return_previous() {
        let mut product = Product::new(props());
        let old = product.image.clone();
        let new_image = ImageName::generate("jpg");
        let new_name = new_image.as_str().to_string();

        let previous = product.replace_image(new_image);

        assert_eq!(previous, old);
        assert_eq!(product.image, Some(new_name));
    }

    #[test]
    fn should_apply_new_details() {
        let mut product = Product::new(props());

        product.update_details(details("Blue Shoes", "Lightweight trail shoes"));

        assert_eq!(product.title, "Blue Shoes");
        assert_eq!(product.description, "Lightweight trail shoes");
        assert!(product.updated_at >= product.created_at);
    }

    #[test]
    fn should_project_summary() {
        let product = Product::new(props());
        let summary = product.summary();

        assert_eq!(summary.id, product.id);
        assert_eq!(summary.title, product.title);
        assert_eq!(summary.image, product.image);
    }
}
