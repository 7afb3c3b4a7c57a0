use std::fs;
use std::path::Path;

use anyhow::Context;
use face_shape::ClassifierConfig;

pub fn load_classifier_config(path: Option<&Path>) -> anyhow::Result<ClassifierConfig> {
    let Some(path) = path else {
        return Ok(ClassifierConfig::default());
    };

    let bytes = fs::read(path)
        .with_context(|| format!("failed to read classifier config {}", path.display()))?;
    let config = serde_json::from_slice::<ClassifierConfig>(&bytes)
        .with_context(|| format!("invalid classifier config {}", path.display()))?;
    tracing::info!("loaded classifier config from {}: {:?}", path.display(), config);
    Ok(config)
}
