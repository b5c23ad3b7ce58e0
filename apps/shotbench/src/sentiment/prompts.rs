// Prompt constants and builders for sentiment labeling.
// Zero-shot and five-shot prompts end in the same `Label:` suffix so their
// replies are directly comparable.

use crate::sentiment::dataset::FIVE_SHOT_EXAMPLES;
use crate::sentiment::models::{LabeledExample, Strategy};

/// Instruction block shared by both strategies. Ends with a blank line.
pub const ZERO_SHOT_INSTRUCTION: &str = "You are a helpful sentiment labeling assistant.\n\
    Classify the sentiment of the sentence into exactly one of: Positive, Negative, Neutral.\n\
    Return ONLY the label (one word): Positive, Negative, or Neutral.\n\n";

pub const EXAMPLES_HEADER: &str = "Examples:";

pub const FIVE_SHOT_TRANSITION: &str = "\nNow classify the following sentence in the same format:\n";

/// Renders sentences into prompts. Holds the exemplar set used for five-shot.
#[derive(Debug, Clone, Copy)]
pub struct PromptBuilder<'a> {
    exemplars: &'a [LabeledExample],
}

impl Default for PromptBuilder<'static> {
    fn default() -> Self {
        Self::new(&FIVE_SHOT_EXAMPLES)
    }
}

impl<'a> PromptBuilder<'a> {
    pub fn new(exemplars: &'a [LabeledExample]) -> Self {
        Self { exemplars }
    }

    pub fn build(&self, strategy: Strategy, sentence: &str) -> String {
        match strategy {
            Strategy::ZeroShot => self.zero_shot(sentence),
            Strategy::FiveShot => self.five_shot(sentence),
        }
    }

    pub fn zero_shot(&self, sentence: &str) -> String {
        format!("{ZERO_SHOT_INSTRUCTION}{}", target_block(sentence))
    }

    pub fn five_shot(&self, sentence: &str) -> String {
        let mut lines = Vec::with_capacity(self.exemplars.len() + 4);
        lines.push(ZERO_SHOT_INSTRUCTION.to_string());
        lines.push(EXAMPLES_HEADER.to_string());
        for (i, example) in self.exemplars.iter().enumerate() {
            lines.push(render_exemplar(i + 1, example));
        }
        lines.push(FIVE_SHOT_TRANSITION.to_string());
        lines.push(target_block(sentence));
        lines.join("\n")
    }
}

/// `<n>. "<text>" -> <label>`
pub fn render_exemplar(n: usize, example: &LabeledExample) -> String {
    format!("{n}. \"{}\" -> {}", example.text, example.label)
}

/// The target sentence always occupies a single `Sentence:` line.
fn target_block(sentence: &str) -> String {
    let flattened: String = sentence
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    format!("Sentence: \"{flattened}\"\nLabel:")
}
