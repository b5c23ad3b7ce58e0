// Fixed exemplars and test set for the zero-shot vs five-shot comparison.

use crate::sentiment::models::{Label, LabeledExample};

/// Worked examples shown in the five-shot prompt, in this order.
pub static FIVE_SHOT_EXAMPLES: [LabeledExample; 5] = [
    LabeledExample::new(
        "I love the battery life on this phone, it lasts all day!",
        Label::Positive,
    ),
    LabeledExample::new(
        "The waiter ignored us and the food was cold.",
        Label::Negative,
    ),
    LabeledExample::new(
        "The movie was okay, not bad but not great either.",
        Label::Neutral,
    ),
    LabeledExample::new(
        "What a fantastic performance—absolutely stunning!",
        Label::Positive,
    ),
    LabeledExample::new(
        "My package arrived later than promised and the box was damaged.",
        Label::Negative,
    ),
];

pub static TEST_DATA: [LabeledExample; 10] = [
    LabeledExample::new(
        "I had a great time at the restaurant last night.",
        Label::Positive,
    ),
    LabeledExample::new(
        "The app keeps crashing every time I try to open it.",
        Label::Negative,
    ),
    LabeledExample::new("It was an average experience.", Label::Neutral),
    LabeledExample::new(
        "Amazing customer support — helped me solve the issue quickly!",
        Label::Positive,
    ),
    LabeledExample::new("I wouldn't buy this product again.", Label::Negative),
    LabeledExample::new("The package was delivered on time.", Label::Neutral),
    LabeledExample::new("The plot was predictable and boring.", Label::Negative),
    LabeledExample::new(
        "Wow, that concert was the best night of my life!",
        Label::Positive,
    ),
    LabeledExample::new("It does what it says.", Label::Neutral),
    LabeledExample::new("The trainer was unhelpful and rude.", Label::Negative),
];
