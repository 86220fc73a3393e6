//! "Is it right for me?" eligibility quiz.

use crate::content::{QUIZ_INJURIES, cdn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Balance {
    Good,
    NeedsAssist,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KneeBend {
    CanBend,
    CannotBend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    Hands,
    Stairs,
    Active,
    Outdoor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Question {
    Injury,
    Balance,
    KneeBend,
    Priority,
}

impl Question {
    pub fn number(self) -> u8 {
        match self {
            Question::Injury => 1,
            Question::Balance => 2,
            Question::KneeBend => 3,
            Question::Priority => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Warning {
    Balance,
    KneeBend,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Warning(Warning),
    Success {
        injury: Option<&'static str>,
        priority: Priority,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultCard {
    pub title: &'static str,
    pub message: String,
    pub image: Option<&'static str>,
}

const CONSULT_TITLE: &str = "⚕️ Please consult your doctor";

impl QuizOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, QuizOutcome::Success { .. })
    }

    pub fn card(&self) -> ResultCard {
        match self {
            QuizOutcome::Warning(Warning::Balance) => ResultCard {
                title: CONSULT_TITLE,
                message: "The Freedom Leg requires good balance and core strength. Since you mentioned using a walker or cane before your injury, we strongly recommend consulting with your doctor or physical therapist before ordering. They can help determine if this device is safe for you, or recommend alternatives that may be a better fit.".to_string(),
                image: None,
            },
            QuizOutcome::Warning(Warning::KneeBend) => ResultCard {
                title: CONSULT_TITLE,
                message: "The Freedom Leg requires you to bend your knee at least 20 degrees to properly secure the brace and distribute weight safely. Please consult with your doctor or physical therapist to ensure your knee mobility is sufficient.".to_string(),
                image: None,
            },
            QuizOutcome::Success { injury, priority } => {
                let prefix = match injury {
                    Some(i) => format!("Great fit for {i}! "),
                    None => "Great fit for your injury! ".to_string(),
                };
                let (text, image) = benefit(*priority);
                ResultCard {
                    title: "✅ Great fit!",
                    message: prefix + text,
                    image: Some(image),
                }
            }
        }
    }
}

fn benefit(p: Priority) -> (&'static str, &'static str) {
    match p {
        Priority::Hands => (
            "The Freedom Leg keeps both hands completely free - perfect for carrying items, using your phone, or holding onto railings for extra stability.",
            cdn!("use-freedom-leg-brace.jpg"),
        ),
        Priority::Stairs => (
            "You can safely navigate stairs with the Freedom Leg with both hands free to hold onto the railings.",
            cdn!("fit_the_Freedom_Leg_3.png"),
        ),
        Priority::Active => (
            "Stay as active as you want! Walk, do chores, go to work - the Freedom Leg gives you the independence to keep living your normal life.",
            cdn!("Walking_in_Kitchen.png"),
        ),
        Priority::Outdoor => (
            "Freedom Leg works great on all terrain - grass, gravel, uneven surfaces. Take it anywhere you need to go!",
            cdn!("Customer_review_photo_Lee_Partyka.jpg"),
        ),
    }
}

/// Linear four-question flow. A disqualifying answer ends it early with a
/// warning; answering the last question ends it with a success card.
#[derive(Clone, Debug, Default)]
pub struct Quiz {
    injury: Option<&'static str>,
    answered_injury: bool,
    balance: Option<Balance>,
    knee: Option<KneeBend>,
    outcome: Option<QuizOutcome>,
}

impl Quiz {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn injuries() -> &'static [&'static str] {
        &QUIZ_INJURIES
    }

    /// `None` once the quiz has an outcome.
    pub fn question(&self) -> Option<Question> {
        if self.outcome.is_some() {
            None
        } else if !self.answered_injury {
            Some(Question::Injury)
        } else if self.balance.is_none() {
            Some(Question::Balance)
        } else if self.knee.is_none() {
            Some(Question::KneeBend)
        } else {
            Some(Question::Priority)
        }
    }

    pub fn outcome(&self) -> Option<&QuizOutcome> {
        self.outcome.as_ref()
    }

    /// Picks from `injuries()`, or `None` for "other". Out-of-range picks
    /// count as "other".
    pub fn select_injury(&mut self, choice: Option<usize>) {
        if self.question() != Some(Question::Injury) {
            return;
        }
        self.injury = choice.and_then(|i| QUIZ_INJURIES.get(i).copied());
        self.answered_injury = true;
    }

    pub fn answer_balance(&mut self, answer: Balance) {
        if self.question() != Some(Question::Balance) {
            return;
        }
        self.balance = Some(answer);
        if answer == Balance::NeedsAssist {
            self.finish(QuizOutcome::Warning(Warning::Balance));
        }
    }

    pub fn answer_knee(&mut self, answer: KneeBend) {
        if self.question() != Some(Question::KneeBend) {
            return;
        }
        self.knee = Some(answer);
        if answer == KneeBend::CannotBend {
            self.finish(QuizOutcome::Warning(Warning::KneeBend));
        }
    }

    pub fn answer_priority(&mut self, priority: Priority) {
        if self.question() != Some(Question::Priority) {
            return;
        }
        self.finish(QuizOutcome::Success {
            injury: self.injury,
            priority,
        });
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn finish(&mut self, outcome: QuizOutcome) {
        log::debug!("quiz: finished with {outcome:?}");
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_path_names_the_injury() {
        let mut q = Quiz::new();
        assert_eq!(q.question(), Some(Question::Injury));
        q.select_injury(Some(1));
        q.answer_balance(Balance::Good);
        q.answer_knee(KneeBend::CanBend);
        assert_eq!(q.question().map(Question::number), Some(4));
        q.answer_priority(Priority::Stairs);

        let card = q.outcome().unwrap().card();
        assert_eq!(card.title, "✅ Great fit!");
        assert!(card.message.starts_with("Great fit for Achilles Tendon Injury! You can safely"));
        assert_eq!(q.question(), None);
    }

    #[test]
    fn other_injury_uses_generic_prefix() {
        let mut q = Quiz::new();
        q.select_injury(None);
        q.answer_balance(Balance::Good);
        q.answer_knee(KneeBend::CanBend);
        q.answer_priority(Priority::Outdoor);
        assert!(q.outcome().unwrap().card().message.starts_with("Great fit for your injury! "));
    }

    #[test]
    fn disqualifiers_stop_early() {
        let mut q = Quiz::new();
        q.select_injury(Some(0));
        q.answer_balance(Balance::NeedsAssist);
        assert_eq!(q.outcome(), Some(&QuizOutcome::Warning(Warning::Balance)));
        // Later answers are ignored.
        q.answer_knee(KneeBend::CanBend);
        q.answer_priority(Priority::Hands);
        assert!(!q.outcome().unwrap().is_success());

        q.reset();
        q.select_injury(Some(2));
        q.answer_balance(Balance::Good);
        q.answer_knee(KneeBend::CannotBend);
        let card = q.outcome().unwrap().card();
        assert!(card.message.contains("20 degrees"));
        assert_eq!(card.image, None);
    }

    #[test]
    fn out_of_order_answers_are_ignored() {
        let mut q = Quiz::new();
        q.answer_priority(Priority::Hands);
        q.answer_balance(Balance::NeedsAssist);
        assert_eq!(q.question(), Some(Question::Injury));
        assert_eq!(q.outcome(), None);
    }
}
