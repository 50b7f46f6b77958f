use std::path::PathBuf;

use async_trait::async_trait;
use axum::body::Bytes;
use storage::dto::battle_card::BattleCardData;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Battle card image not found at {}", .0.display())]
    MissingImage(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub content_type: &'static str,
    pub bytes: Bytes,
}

/// Turns a battle card snapshot into a shareable image.
#[async_trait]
pub trait CardRenderer: Send + Sync {
    async fn render(&self, card: &BattleCardData) -> Result<RenderedImage, RenderError>;
}

/// Serves one pre-rendered PNG from disk for every card.
pub struct StaticImageRenderer {
    path: PathBuf,
}

impl StaticImageRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CardRenderer for StaticImageRenderer {
    async fn render(&self, card: &BattleCardData) -> Result<RenderedImage, RenderError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RenderError::MissingImage(self.path.clone())
            } else {
                RenderError::Io(e)
            }
        })?;

        tracing::debug!(
            battle_id = %card.battle_id,
            card_number = card.card_number,
            size = bytes.len(),
            "Serving static battle card image"
        );

        Ok(RenderedImage {
            content_type: "image/png",
            bytes: Bytes::from(bytes),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use storage::dto::battle_card::CreatorSnapshot;

    use super::*;

    fn card() -> BattleCardData {
        let creator = |handle: &str| CreatorSnapshot {
            username: handle.to_string(),
            display_name: handle.to_string(),
            avatar: None,
            handle: handle.to_string(),
        };
        BattleCardData {
            battle_id: "c1".to_string(),
            creator_one: creator("a"),
            creator_two: creator("b"),
            card_number: 7,
        }
    }

    #[tokio::test]
    async fn test_reads_image_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG fake").unwrap();

        let image = StaticImageRenderer::new(file.path())
            .render(&card())
            .await
            .unwrap();

        assert_eq!(image.content_type, "image/png");
        assert_eq!(&image.bytes[..], b"\x89PNG fake");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("battle-card.png");

        let err = StaticImageRenderer::new(&path)
            .render(&card())
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::MissingImage(p) if p == path));
    }
}
