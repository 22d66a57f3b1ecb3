use rand::Rng;
use rand::distr::Alphanumeric;

/// Logical directory holding product images inside the blob store.
pub const PRODUCT_IMAGE_DIR: &str = "product/image";

const IMAGE_NAME_LENGTH: usize = 16;

/// Accepted image formats and the extension stored for each when the
/// client file name does not carry a matching one.
const IMAGE_FORMATS: [(&str, &str); 6] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/bmp", "bmp"),
    ("image/svg+xml", "svg"),
    ("image/webp", "webp"),
];

/// Bytes scanned for an `<svg` root element.
const SVG_SNIFF_LENGTH: usize = 1024;

/// Blob path of a product image, relative to the blob store root.
pub fn image_path(image: &str) -> String {
    format!("{}/{}", PRODUCT_IMAGE_DIR, image)
}

/// Detects an accepted image format from the leading bytes of a file.
pub fn detect_image_type(data: &[u8]) -> Option<&'static str> {
    match data {
        [0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some("image/png"),
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some("image/gif"),
        [b'B', b'M', _, _, _, _, 0, 0, 0, 0, ..] => Some("image/bmp"),
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some("image/webp"),
        _ if looks_like_svg(data) => Some("image/svg+xml"),
        _ => None,
    }
}

fn looks_like_svg(data: &[u8]) -> bool {
    let head = String::from_utf8_lossy(&data[..data.len().min(SVG_SNIFF_LENGTH)]);
    let head = head.trim_start_matches('\u{feff}').trim_start();
    head.starts_with('<') && head.to_ascii_lowercase().contains("<svg")
}

fn canonical_extension(mime: &str) -> Option<&'static str> {
    IMAGE_FORMATS
        .iter()
        .find(|(known, _)| *known == mime)
        .map(|(_, ext)| *ext)
}

/// Name under which a product image is stored, e.g. `Xr4e0PqL2mZt9aBc.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageName(String);

impl ImageName {
    /// Generates a random name preserving the given extension.
    pub fn generate(extension: &str) -> Self {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(IMAGE_NAME_LENGTH)
            .map(char::from)
            .collect();
        Self(format!("{}.{}", token, extension.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ImageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An uploaded file as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// File name reported by the client, if any.
    pub file_name: Option<String>,
    /// Content type reported by the client, if any.
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

/// An upload whose contents were recognized as an accepted image.
#[derive(Debug, Clone)]
pub struct ImageFile {
    extension: String,
    data: Vec<u8>,
}

impl ImageFile {
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl ImageUpload {
    /// Extension of the client file name, lower-cased.
    pub fn client_extension(&self) -> Option<String> {
        let name = self.file_name.as_deref()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Image type read from the file contents.
    pub fn detected_type(&self) -> Option<&'static str> {
        detect_image_type(&self.data)
    }

    /// Extension used when storing the upload. The client's extension is
    /// kept when it names the detected format, otherwise the format's
    /// canonical extension is used.
    pub fn extension(&self) -> Option<String> {
        if let Some(declared) = self.content_type.as_deref()
            && !declared.trim().to_ascii_lowercase().starts_with("image/")
        {
            return None;
        }

        let detected = self.detected_type()?;
        let client = self.client_extension().filter(|ext| {
            mime_guess::from_ext(ext)
                .iter()
                .any(|mime| mime.essence_str() == detected)
        });
        client.or_else(|| canonical_extension(detected).map(str::to_string))
    }

    pub fn is_image(&self) -> bool {
        self.extension().is_some()
    }

    /// Accepts the upload as an image file, or `None` when its contents are
    /// not an accepted image.
    pub fn into_image_file(self) -> Option<ImageFile> {
        let extension = self.extension()?;
        Some(ImageFile {
            extension,
            data: self.data,
        })
    }
}
