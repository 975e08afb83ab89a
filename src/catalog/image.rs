//! Image CDN URL composition.

/// CDN prefix for catalog images.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Returned when a movie has no artwork.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-movie.jpg";

/// Image width variants served by the CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageSize {
    W185,
    W342,
    #[default]
    W500,
    W780,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W185 => "w185",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::Original => "original",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "w185" => Some(ImageSize::W185),
            "w342" => Some(ImageSize::W342),
            "w500" => Some(ImageSize::W500),
            "w780" => Some(ImageSize::W780),
            "original" => Some(ImageSize::Original),
            _ => None,
        }
    }
}

/// Build the CDN URL for an image path such as `/abc.jpg`.
///
/// A missing or empty path yields [`PLACEHOLDER_IMAGE`].
pub fn image_url(path: Option<&str>, size: ImageSize) -> String {
    match path {
        Some(path) if !path.is_empty() => format!("{}{}{}", IMAGE_BASE_URL, size.as_str(), path),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Full-resolution variant of [`image_url`].
pub fn full_image_url(path: Option<&str>) -> String {
    image_url(path, ImageSize::Original)
}
