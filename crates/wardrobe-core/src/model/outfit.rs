use serde::{Deserialize, Serialize};

/// Structured outfit analysis returned by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub style: String,
    pub colors: Vec<String>,
    pub season: String,
    pub sustainability_score: f32,
    pub recommendations: Vec<String>,
    pub occasion: String,
    pub care_tips: Vec<String>,
}
