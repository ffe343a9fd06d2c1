use std::fmt::{self, Display, Formatter};

/// Where a card image came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetOrigin {
    /// Downloaded from a community provider, keyed by the URL that answered.
    Provider(String),
    /// Drawn by the built-in renderer.
    Rendered,
}

impl Display for AssetOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(url) => write!(f, "{url}"),
            Self::Rendered => write!(f, "rendered"),
        }
    }
}

/// A ready-to-send card image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAsset {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub origin: AssetOrigin,
}

impl CardAsset {
    #[must_use]
    pub fn rendered(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: String::from("image/png"),
            origin: AssetOrigin::Rendered,
        }
    }

    #[must_use]
    pub fn fetched(bytes: Vec<u8>, content_type: String, provider_url: String) -> Self {
        Self {
            bytes,
            content_type,
            origin: AssetOrigin::Provider(provider_url),
        }
    }
}

/// A finished post as it goes out to the submitter and the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Post {
    Photo {
        asset: CardAsset,
        caption: String,
        file_name: String,
    },
    Text {
        body: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_assets_are_png() {
        let asset = CardAsset::rendered(vec![1, 2, 3]);

        assert_eq!(asset.content_type, "image/png");
        assert_eq!(asset.origin, AssetOrigin::Rendered);
    }

    #[test]
    fn test_fetched_assets_remember_their_provider() {
        let asset = CardAsset::fetched(
            vec![9],
            String::from("image/jpeg"),
            String::from("https://sltbot.com/api/image/2PP"),
        );

        assert_eq!(asset.origin.to_string(), "https://sltbot.com/api/image/2PP");
    }

    #[test]
    fn test_rendered_origin_displays_as_rendered() {
        assert_eq!(AssetOrigin::Rendered.to_string(), "rendered");
    }
}
