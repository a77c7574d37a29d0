use crate::error::DetectError;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, IntoStaticStr};

pub const TIMEOUT_MESSAGE: &str =
    "Request timed out. The detection service did not respond in time, please try again.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "An error occurred while contacting the detection service. Please try again.";

/// Body returned by the detection service.
///
/// Older deployments report the score as `cosine_similarity`, newer ones as
/// `similarity_score`; both are kept and read through [`similarity`].
///
/// [`similarity`]: DetectionResult::similarity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub is_likely_deepfake: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cosine_similarity: Option<f64>,
    #[serde(default)]
    pub message: String,
}

impl DetectionResult {
    /// Record shown in place of a real answer when the attempt failed.
    pub fn fallback(error: &DetectError) -> Self {
        let message = if error.is_timeout() {
            TIMEOUT_MESSAGE
        } else {
            GENERIC_FAILURE_MESSAGE
        };
        Self {
            is_likely_deepfake: false,
            similarity_score: Some(0.0),
            cosine_similarity: None,
            message: message.to_string(),
        }
    }

    pub fn similarity(&self) -> Option<f64> {
        self.similarity_score.or(self.cosine_similarity)
    }

    pub fn similarity_display(&self) -> String {
        self.similarity()
            .map(|score| score.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }

    pub fn verdict(&self) -> Verdict {
        if self.is_likely_deepfake {
            Verdict::LikelyDeepfake
        } else {
            Verdict::LikelyReal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    #[strum(serialize = "Likely Deepfake")]
    LikelyDeepfake,
    #[strum(serialize = "Likely Real")]
    LikelyReal,
}

impl Verdict {
    pub fn css_class(self) -> &'static str {
        match self {
            Verdict::LikelyDeepfake => "verdict-deepfake",
            Verdict::LikelyReal => "verdict-real",
        }
    }
}

/// Outcome of one attempt, keeping failures apart from genuine answers.
#[derive(Debug, Clone, PartialEq)]
pub enum DetectionOutcome {
    Detected(DetectionResult),
    Failed(DetectError),
}

impl DetectionOutcome {
    /// The record the popup renders. Failures look like a negative result
    /// whose message names the failure.
    pub fn display_result(&self) -> DetectionResult {
        match self {
            DetectionOutcome::Detected(result) => result.clone(),
            DetectionOutcome::Failed(error) => DetectionResult::fallback(error),
        }
    }

    pub fn failure(&self) -> Option<&DetectError> {
        match self {
            DetectionOutcome::Detected(_) => None,
            DetectionOutcome::Failed(error) => Some(error),
        }
    }
}

impl From<Result<DetectionResult, DetectError>> for DetectionOutcome {
    fn from(result: Result<DetectionResult, DetectError>) -> Self {
        match result {
            Ok(result) => DetectionOutcome::Detected(result),
            Err(error) => DetectionOutcome::Failed(error),
        }
    }
}

/// The two multipart parts of a detection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, EnumIter)]
pub enum MediaSlot {
    #[strum(serialize = "realMedia")]
    Real,
    #[strum(serialize = "fakeMedia")]
    Fake,
}

impl MediaSlot {
    pub fn field_name(self) -> &'static str {
        self.into()
    }

    pub fn title(self) -> &'static str {
        match self {
            MediaSlot::Real => "Real Image / Video",
            MediaSlot::Fake => "Suspected Deepfake",
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            MediaSlot::Real => "real-media",
            MediaSlot::Fake => "fake-media",
        }
    }
}

/// Decides whether a selected file gets an inline preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Other,
}

impl MediaKind {
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image") {
            MediaKind::Image
        } else {
            MediaKind::Other
        }
    }
}

/// The pair of files picked by the user, generic over the file handle so the
/// browser and tests can share it.
#[derive(Debug, Clone)]
pub struct MediaSubmission<F> {
    real: Option<F>,
    fake: Option<F>,
}

impl<F> Default for MediaSubmission<F> {
    fn default() -> Self {
        Self {
            real: None,
            fake: None,
        }
    }
}

impl<F> MediaSubmission<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `file` in `slot`, handing back whatever it replaced.
    pub fn set(&mut self, slot: MediaSlot, file: F) -> Option<F> {
        self.slot_mut(slot).replace(file)
    }

    pub fn get(&self, slot: MediaSlot) -> Option<&F> {
        match slot {
            MediaSlot::Real => self.real.as_ref(),
            MediaSlot::Fake => self.fake.as_ref(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.real.is_some() && self.fake.is_some()
    }

    pub fn pair(&self) -> Result<(&F, &F), DetectError> {
        match (&self.real, &self.fake) {
            (Some(real), Some(fake)) => Ok((real, fake)),
            _ => Err(DetectError::MissingInput),
        }
    }

    pub fn clear(&mut self) {
        self.real = None;
        self.fake = None;
    }

    fn slot_mut(&mut self, slot: MediaSlot) -> &mut Option<F> {
        match slot {
            MediaSlot::Real => &mut self.real,
            MediaSlot::Fake => &mut self.fake,
        }
    }
}
