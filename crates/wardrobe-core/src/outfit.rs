//! Outfit analysis and outfit Q&A.
//!
//! Both are placeholders for a vision model: the base64 image is required but
//! never decoded, and the output depends only on the question text. A real
//! implementation replaces the bodies of [`analyze`] and [`answer`] and keeps
//! their signatures.

use crate::chat::{match_rule, KeywordRule};
use crate::error::{Result, WardrobeError};
use crate::model::AnalysisResult;

/// Q&A categories in priority order.
pub const QUESTION_RULES: &[KeywordRule] = &[
    KeywordRule {
        name: "color",
        keywords: &["color"],
        reply: "The outfit features a harmonious color palette with neutral tones. Navy and beige work well together for a sophisticated, versatile look suitable for multiple seasons.",
    },
    KeywordRule {
        name: "season",
        keywords: &["season"],
        reply: "This outfit is ideal for spring and fall transitions. The layers allow you to adjust to changing temperatures throughout the day.",
    },
    KeywordRule {
        name: "occasion",
        keywords: &["occasion"],
        reply: "This is a versatile outfit suitable for casual professional settings, weekend outings, coffee meetups, or relaxed social events.",
    },
    KeywordRule {
        name: "sustainability",
        keywords: &["sustainable", "eco"],
        reply: "To make this outfit more sustainable: choose pieces made from organic or recycled materials, buy second-hand when possible, and invest in quality items that last longer.",
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Analyze an outfit photo.
pub fn analyze(image: &str) -> Result<AnalysisResult> {
    if image.is_empty() {
        return Err(WardrobeError::InvalidInput("No image provided".into()));
    }

    Ok(AnalysisResult {
        style: "Casual Contemporary".into(),
        colors: strings(&["Navy", "White", "Beige"]),
        season: "Spring/Fall".into(),
        sustainability_score: 7.5,
        recommendations: strings(&[
            "This outfit works great for mild weather (15-20°C)",
            "Consider adding a light cardigan for layering",
            "The color palette is versatile and timeless",
            "To boost sustainability: choose natural fibers like cotton or linen",
        ]),
        occasion: "Perfect for casual outings, coffee dates, or weekend activities".into(),
        care_tips: strings(&[
            "Wash in cold water to save energy",
            "Air dry when possible instead of using a dryer",
            "Store properly to extend garment lifespan",
        ]),
    })
}

/// Answer a question about an outfit photo.
pub fn answer(image: &str, question: &str) -> Result<String> {
    if image.is_empty() || question.is_empty() {
        return Err(WardrobeError::InvalidInput(
            "Image and question required".into(),
        ));
    }

    Ok(match match_rule(QUESTION_RULES, question) {
        Some(rule) => rule.reply.to_string(),
        None => format!(
            "Based on the outfit and your question about '{question}', I'd say this is a \
             well-balanced ensemble that offers versatility and style. The combination works \
             well for transitional weather and various casual occasions."
        ),
    })
}
