use serde::{Deserialize, Serialize};

use crate::constants::{CAPTURE_BACKGROUND, CAPTURE_SCALE, CAPTURE_WIDTH, PROJECT_NAME, TOKEN_SYMBOL};
use crate::error::ExportError;
use crate::share::{preview_document, share_intent_url, share_text};
use crate::state::CalculationOutcome;
use crate::utils::{format_percentage, format_tokens};

/**
 * Image-export port and the share flow built on top of it
 *
 * Capture is the one operation in the crate that may fail, and the one that
 * may suspend (it is external rendering work). Its failure is never surfaced:
 * the share flow logs the cause and degrades to the text-only payload, so the
 * user is never blocked because an image could not be produced.
 */

/// One row of the rendered results card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRow {
    /// Display label of the group
    pub group_name: String,
    /// Formatted token amount, e.g. `"25,000,000 $PROVE"`
    pub tokens_label: String,
    /// Formatted share, e.g. `"25.0%"`
    pub percentage_label: String,
    /// Formatted headcount, e.g. `"25,000 users"`, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users_label: Option<String>,
}

/**
 * Description of the fully laid-out results card handed to the exporter
 *
 * Always built fresh from a calculation outcome at the fixed target width,
 * never from the on-screen (possibly scrolled or cropped) copy, so the
 * capture covers the complete results regardless of viewport state.
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderView {
    /// Target width of the card, in pixels
    pub width: u32,
    /// Pixel-density multiplier
    pub scale: u32,
    /// Background color behind the card
    pub background: String,
    /// Card heading
    pub title: String,
    /// One row per group result, in configuration order
    pub rows: Vec<RenderRow>,
}

impl RenderView {
    pub fn from_outcome(outcome: &CalculationOutcome) -> Self {
        let rows = outcome
            .results
            .iter()
            .map(|result| RenderRow {
                group_name: result.group_name.clone(),
                tokens_label: format!("{} {}", format_tokens(result.total_tokens), TOKEN_SYMBOL),
                percentage_label: format!("{}%", format_percentage(result.percentage, 1)),
                users_label: result
                    .user_count
                    .map(|count| format!("{} users", format_tokens(count as f64))),
            })
            .collect();

        Self {
            width: CAPTURE_WIDTH,
            scale: CAPTURE_SCALE,
            background: CAPTURE_BACKGROUND.to_string(),
            title: format!("{PROJECT_NAME} Airdrop Allocation"),
            rows,
        }
    }
}

/// Image produced by a capture backend, as a PNG data URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedImage {
    pub data_url: String,
}

/// Capture capability of the runtime
///
/// A backend renders a view description to an image and may fail. Hosts
/// without any capture capability simply provide no exporter.
pub trait ImageExporter {
    fn capture(&self, view: &RenderView) -> Result<CapturedImage, ExportError>;
}

/// Everything the host needs to run the share flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePayload {
    /// Textual summary of the outcome
    pub text: String,
    /// Compose-flow URL carrying the encoded text
    pub intent_url: String,
    /// Captured results image, when capture succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<CapturedImage>,
    /// Link-preview document embedding the image, when capture succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_document: Option<String>,
}

/**
 * Packages an outcome into a shareable payload
 *
 * @param outcome - The most recent calculation outcome
 * @param exporter - Capture capability of the runtime, if any
 *
 * The text and intent URL are always produced. The image and preview
 * document are attached only when an exporter is present and capture
 * succeeds; any capture failure is logged and silently degrades to the
 * text-only payload. This function never fails.
 */
pub fn share(outcome: &CalculationOutcome, exporter: Option<&dyn ImageExporter>) -> SharePayload {
    let text = share_text(outcome);
    let intent_url = share_intent_url(&text);

    let image = match exporter {
        None => {
            log::debug!("no capture capability present, sharing text only");
            None
        }
        Some(exporter) => match exporter.capture(&RenderView::from_outcome(outcome)) {
            Ok(image) => Some(image),
            Err(err) => {
                log::warn!("image capture failed, falling back to text-only share: {err}");
                None
            }
        },
    };

    let preview = image
        .as_ref()
        .map(|image| preview_document(image, &intent_url));

    SharePayload {
        text,
        intent_url,
        image,
        preview_document: preview,
    }
}
