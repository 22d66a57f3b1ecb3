use super::value_objects::{ImageFile, ImageUpload};

pub const MIN_TEXT_LENGTH: usize = 5;

pub const REQUIRED: &str = "validation.required";
pub const MIN_LENGTH: &str = "validation.min_length";
pub const IMAGE: &str = "validation.image";

/// Messages collected for one request field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

/// Field-level validation failures, in field order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: &str) {
        match self.fields.iter_mut().find(|f| f.field == field) {
            Some(existing) => existing.messages.push(message.to_string()),
            None => self.fields.push(FieldError {
                field: field.to_string(),
                messages: vec![message.to_string()],
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.fields
    }

    pub fn messages_for(&self, field: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.messages.as_slice())
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields.iter().map(|e| e.field.as_str()).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Raw product fields as submitted by a client.
#[derive(Debug, Clone, Default)]
pub struct ProductInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Title and description that passed validation, trimmed.
///
/// Only built by validation, so a product holding these needs no further
/// checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    title: String,
    description: String,
}

impl ProductDetails {
    fn collect(
        errors: &mut ValidationErrors,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Option<Self> {
        let title = check_text(errors, "title", title);
        let description = check_text(errors, "description", description);
        Some(Self {
            title: title?,
            description: description?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.description)
    }
}

/// Everything needed to create a product.
#[derive(Debug, Clone)]
pub struct NewProductInput {
    pub details: ProductDetails,
    pub image: ImageFile,
}

/// Accepted changes to an existing product; without an image nothing is
/// applied.
#[derive(Debug, Clone)]
pub struct ProductChanges {
    pub details: ProductDetails,
    pub image: Option<ImageFile>,
}

/// Checks a text field and returns it trimmed when it passes.
fn check_text(errors: &mut ValidationErrors, field: &str, value: Option<&str>) -> Option<String> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        errors.add(field, REQUIRED);
        None
    } else if value.chars().count() < MIN_TEXT_LENGTH {
        errors.add(field, MIN_LENGTH);
        None
    } else {
        Some(value.to_string())
    }
}

fn check_image(errors: &mut ValidationErrors, upload: ImageUpload) -> Option<ImageFile> {
    let file = upload.into_image_file();
    if file.is_none() {
        errors.add("image", IMAGE);
    }
    file
}

impl ProductInput {
    /// Validates a creation request; the image is required.
    pub fn validate_new(self) -> Result<NewProductInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let details =
            ProductDetails::collect(&mut errors, self.title.as_deref(), self.description.as_deref());
        let image = match self.image {
            Some(upload) => check_image(&mut errors, upload),
            None => {
                errors.add("image", REQUIRED);
                None
            }
        };

        match (details, image) {
            (Some(details), Some(image)) if errors.is_empty() => {
                Ok(NewProductInput { details, image })
            }
            _ => Err(errors),
        }
    }

    /// Validates an update request; the image is optional.
    pub fn validate_changes(self) -> Result<ProductChanges, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let details =
            ProductDetails::collect(&mut errors, self.title.as_deref(), self.description.as_deref());
        let image = self.image.and_then(|upload| check_image(&mut errors, upload));

        match details {
            Some(details) if errors.is_empty() => Ok(ProductChanges { details, image }),
            _ => Err(errors),
        }
    }
}
