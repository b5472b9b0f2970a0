// ABOUTME: Inbound request/response protocol between the popup and the page-side extractor.
// ABOUTME: One action tag in; a profile payload, a not-a-profile payload, or a failure payload out.

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::extractor::ProfileExtractor;
use crate::page::PageSource;
use crate::record::{ExtractionOutcome, ProfileRecord};

/// Action tag requesting profile data.
pub const GET_PROFILE_DATA: &str = "getProfileData";

/// Guidance shown when the active page is not a profile.
pub const NOT_PROFILE_PAGE_MESSAGE: &str =
    "Not a LinkedIn profile page. Please navigate to a LinkedIn profile and try again.";

/// Message sent by the popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRequest {
    pub action: String,
}

impl ExtensionRequest {
    pub fn get_profile_data() -> Self {
        Self {
            action: GET_PROFILE_DATA.to_string(),
        }
    }
}

/// Error payload of a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailurePayload {
    pub error: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub not_profile_page: bool,
    pub message: String,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Reply to an [`ExtensionRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionResponse {
    Failure(FailurePayload),
    Profile(ProfileRecord),
}

impl ExtensionResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, ExtensionResponse::Failure(_))
    }

    pub fn profile(&self) -> Option<&ProfileRecord> {
        match self {
            ExtensionResponse::Profile(record) => Some(record),
            ExtensionResponse::Failure(_) => None,
        }
    }
}

impl From<ExtractionOutcome> for ExtensionResponse {
    fn from(outcome: ExtractionOutcome) -> Self {
        match outcome {
            Ok(record) => ExtensionResponse::Profile(record),
            Err(ExtractError::NotProfilePage { .. }) => ExtensionResponse::Failure(FailurePayload {
                error: true,
                not_profile_page: true,
                message: NOT_PROFILE_PAGE_MESSAGE.to_string(),
            }),
            Err(ExtractError::ExtractionFailed { message }) => {
                ExtensionResponse::Failure(FailurePayload {
                    error: true,
                    not_profile_page: false,
                    message: format!("Failed to extract profile data: {}", message),
                })
            }
        }
    }
}

impl ProfileExtractor {
    /// Answers a popup request against the given page.
    ///
    /// Returns `None` for actions this handler does not know. Non-profile
    /// pages are answered immediately; otherwise the handler waits the
    /// configured settle delay, then reads the page and extracts.
    pub async fn handle_request<P>(
        &self,
        request: &ExtensionRequest,
        page: &P,
    ) -> Option<ExtensionResponse>
    where
        P: PageSource + ?Sized,
    {
        if request.action != GET_PROFILE_DATA {
            return None;
        }

        let url = match page.url() {
            Ok(url) => url,
            Err(err) => {
                self.diagnostics()
                    .error(format_args!("Could not read page URL: {:#}", err));
                let outcome: ExtractionOutcome =
                    Err(ExtractError::failed(format_args!("{:#}", err)));
                return Some(outcome.into());
            }
        };

        if !self.is_target_profile_page(&url) {
            let outcome: ExtractionOutcome = Err(ExtractError::not_profile_page(url));
            return Some(outcome.into());
        }

        self.diagnostics().log("Received request for profile data");

        let delay = self.options().settle_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let outcome: ExtractionOutcome = match page.html() {
            Ok(html) => self.extract_html(&html, &url),
            Err(err) => {
                self.diagnostics()
                    .error(format_args!("Exception during extraction: {:#}", err));
                Err(ExtractError::failed(format_args!("{:#}", err)))
            }
        };

        Some(outcome.into())
    }
}
