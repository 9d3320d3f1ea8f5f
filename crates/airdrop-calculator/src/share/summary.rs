use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::constants::{PROJECT_NAME, SHARE_HASHTAGS, SHARE_INTENT_URL, TOKEN_SYMBOL};
use crate::share::CapturedImage;
use crate::state::CalculationOutcome;
use crate::utils::{format_percentage, format_tokens};

/// Characters left verbatim in a URL query component.
/// Matches the unreserved set of `encodeURIComponent`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/**
 * Builds the textual share summary for an outcome
 *
 * Layout: a header line with the overall reserved percentage, an intro
 * sentence, one bullet line per group with a non-zero share
 * (`• Name: p% (tokens SYMBOL)`), and the hashtag footer. Groups with a zero
 * share are omitted from the text (they still appear in the rendered
 * results).
 */
pub fn share_text(outcome: &CalculationOutcome) -> String {
    let allocation_lines: Vec<String> = outcome
        .results
        .iter()
        .filter(|result| result.percentage > 0.0)
        .map(|result| {
            format!(
                "• {}: {}% ({} {})",
                result.group_name,
                format_percentage(result.percentage, 1),
                format_tokens(result.total_tokens),
                TOKEN_SYMBOL,
            )
        })
        .collect();

    format!(
        "{}% of the total supply is allocated for airdrop.\n\n\
         According to me, the {} airdrop will be distributed like this:\n\n\
         {}\n\n{}",
        format_percentage(outcome.airdrop_percentage, 1),
        PROJECT_NAME,
        allocation_lines.join("\n"),
        SHARE_HASHTAGS,
    )
}

/// Builds the platform share-intent URL carrying the percent-encoded text
pub fn share_intent_url(text: &str) -> String {
    format!(
        "{}?text={}",
        SHARE_INTENT_URL,
        utf8_percent_encode(text, QUERY_COMPONENT)
    )
}

/**
 * Builds a standalone link-preview document for a captured image
 *
 * The document embeds the image inline and carries `twitter:*` and `og:*`
 * metadata tags so the platform's link preview picks the image up, plus a
 * link into the share-intent compose flow.
 */
pub fn preview_document(image: &CapturedImage, intent_url: &str) -> String {
    let title = format!("{PROJECT_NAME} Airdrop Distribution");
    let description = format!("Check out my {PROJECT_NAME} airdrop allocation predictions!");
    let data_url = &image.data_url;
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <title>{title}</title>\n\
         <meta name=\"twitter:card\" content=\"summary_large_image\">\n\
         <meta name=\"twitter:title\" content=\"{title}\">\n\
         <meta name=\"twitter:description\" content=\"{description}\">\n\
         <meta name=\"twitter:image\" content=\"{data_url}\">\n\
         <meta property=\"og:title\" content=\"{title}\">\n\
         <meta property=\"og:description\" content=\"{description}\">\n\
         <meta property=\"og:image\" content=\"{data_url}\">\n\
         <meta property=\"og:type\" content=\"website\">\n\
         </head>\n\
         <body>\n\
         <img src=\"{data_url}\" alt=\"Airdrop Results\">\n\
         <a href=\"{intent_url}\" target=\"_blank\">Share</a>\n\
         </body>\n\
         </html>\n"
    )
}
