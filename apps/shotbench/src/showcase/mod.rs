//! Prompt showcases: fixed system prompts run against a few sample requests.
//!
//! Each (variant, request) pair is one `chat` call. A failed call is kept as
//! that item's `Err` and printed; the remaining items still run.

pub mod prompts;

use tracing::{info, warn};

use crate::config::Config;
use crate::llm_client::{Completer, LlmError};
use crate::pacing::Pacer;

use self::prompts::*;

/// One system prompt under test.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub title: &'static str,
    pub system_prompt: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Showcase {
    pub name: &'static str,
    pub description: &'static str,
    pub variants: &'static [Variant],
    pub requests: &'static [&'static str],
}

pub static SHOWCASES: [Showcase; 3] = [
    Showcase {
        name: "creative",
        description: "Creative writing: tone-driven stories, fairy tales, songs, dialogues",
        variants: &[Variant {
            title: "Creative Writing",
            system_prompt: CREATIVE_WRITING_SYSTEM,
        }],
        requests: &CREATIVE_WRITING_REQUESTS,
    },
    Showcase {
        name: "education",
        description: "Education: step-by-step solutions, flashcards, explanations, quizzes",
        variants: &[Variant {
            title: "Education",
            system_prompt: EDUCATION_SYSTEM,
        }],
        requests: &EDUCATION_REQUESTS,
    },
    Showcase {
        name: "strategy",
        description: "Data analysis & strategy: zero-shot vs five-shot system prompt",
        variants: &[
            Variant {
                title: "Zero-Shot Prompt Test",
                system_prompt: DATA_ANALYSIS_ZERO_SHOT_SYSTEM,
            },
            Variant {
                title: "Five-Shot Prompt Test",
                system_prompt: DATA_ANALYSIS_FIVE_SHOT_SYSTEM,
            },
        ],
        requests: &[DATA_ANALYSIS_REQUEST],
    },
];

pub fn find(name: &str) -> Option<&'static Showcase> {
    SHOWCASES
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShowcaseSettings {
    pub max_output_tokens: u32,
    pub temperature: f64,
}

impl From<&Config> for ShowcaseSettings {
    fn from(config: &Config) -> Self {
        Self {
            max_output_tokens: config.showcase_max_tokens,
            temperature: config.temperature,
        }
    }
}

#[derive(Debug)]
pub struct ShowcaseItem {
    pub variant: &'static str,
    /// 1-based position of the request within its variant.
    pub index: usize,
    pub request: &'static str,
    pub outcome: Result<String, LlmError>,
}

/// Runs every request under every variant, in order, printing each reply.
pub async fn run_showcase(
    showcase: &Showcase,
    completer: &dyn Completer,
    pacer: &dyn Pacer,
    settings: ShowcaseSettings,
) -> Vec<ShowcaseItem> {
    info!(showcase = showcase.name, "Running prompt showcase");

    let mut items = Vec::with_capacity(showcase.variants.len() * showcase.requests.len());
    for variant in showcase.variants {
        if showcase.variants.len() > 1 {
            println!("\n--- {} ---", variant.title);
        }
        for (i, &request) in showcase.requests.iter().enumerate() {
            let outcome = completer
                .chat(
                    variant.system_prompt,
                    request,
                    settings.max_output_tokens,
                    settings.temperature,
                )
                .await;
            pacer.pause().await;

            if showcase.requests.len() > 1 {
                println!("\n--- Prompt Example {} ---", i + 1);
            }
            match &outcome {
                Ok(content) => println!("{content}"),
                Err(e) => {
                    warn!(variant = variant.title, "Showcase request {} failed: {e}", i + 1);
                    println!("Error: {e}");
                }
            }

            items.push(ShowcaseItem {
                variant: variant.title,
                index: i + 1,
                request,
                outcome,
            });
        }
    }
    items
}
