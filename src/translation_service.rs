use log::{debug, info};
use std::sync::Arc;

use crate::errors::GatewayError;
use crate::providers::TranslationGateway;
use crate::subtitle_processor::SubtitleEntry;

// @module: Translation orchestration for subtitle entries

// @struct: Walks a cue sequence and translates each entry through the gateway
#[derive(Debug, Clone)]
pub struct TranslationService {
    // @field: Gateway backing all remote calls
    gateway: Arc<dyn TranslationGateway>,
}

impl TranslationService {
    // @creates: Service bound to one gateway
    pub fn new(gateway: Arc<dyn TranslationGateway>) -> Self {
        TranslationService { gateway }
    }

    /// Translate every entry, strictly in sequence order.
    ///
    /// One gateway call per entry; each call waits for the previous one
    /// to complete. A new sequence is produced with sequence numbers and
    /// timing copied verbatim and only the text replaced. The first
    /// failure aborts the remaining entries and propagates; entries
    /// already translated are discarded so no partial result escapes.
    pub async fn translate_entries(
        &self,
        entries: &[SubtitleEntry],
    ) -> Result<Vec<SubtitleEntry>, GatewayError> {
        let mut translated = Vec::with_capacity(entries.len());

        info!(
            "Translating {} subtitle entries via {}",
            entries.len(),
            self.gateway.name()
        );

        for entry in entries {
            debug!("Translating entry {}", entry.seq_num);
            let text = self.gateway.translate(&entry.text).await?;
            translated.push(entry.with_text(text));
        }

        Ok(translated)
    }
}
