//! SMART explainer: five letter buttons, one popup at a time.

use std::sync::Arc;

use log::debug;

use super::subscription::{ListenerRegistry, Subscription};

const LISTENER_SCOPE: &str = "smart-guide";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmartLetter {
    pub letter: char,
    /// "S = Specific"
    pub title: &'static str,
    pub explanation: &'static str,
    pub example: &'static str,
    pub tips: [&'static str; 4],
}

impl SmartLetter {
    /// Title without the "S = " prefix
    pub fn heading(&self) -> &'static str {
        self.title
            .split_once('=')
            .map_or(self.title, |(_, heading)| heading.trim())
    }

    /// Example broken into sentences on ". ", keeping the period on every
    /// sentence but the last
    pub fn example_sentences(&self) -> Vec<String> {
        let parts: Vec<&str> = self.example.split(". ").collect();
        let last = parts.len() - 1;
        parts
            .iter()
            .enumerate()
            .map(|(index, sentence)| {
                let sentence = sentence.trim();
                if index < last {
                    format!("{}.", sentence)
                } else {
                    sentence.to_string()
                }
            })
            .collect()
    }
}

pub const SMART_LETTERS: [SmartLetter; 5] = [
    SmartLetter {
        letter: 'S',
        title: "S = Specific",
        explanation: "Make your goal specific and narrow for more effective planning",
        example: "Instead of 'Get more clients', try 'Close 5 luxury property deals in downtown area' or 'Complete 20 AI-assisted sales training calls with a 90% quality score'",
        tips: [
            "What exactly do you want to achieve?",
            "Who is involved?",
            "Where will this happen?",
            "Which resources are needed?",
        ],
    },
    SmartLetter {
        letter: 'M',
        title: "M = Measurable",
        explanation: "Make sure your goal and progress are measurable",
        example: "Instead of 'Improve sales calls', try 'Increase sales call conversion rate from 20% to 35%' or 'Generate $100,000 in real estate commissions this quarter'",
        tips: [
            "How much?",
            "How many?",
            "How will you know when it's accomplished?",
            "What's your progress indicator?",
        ],
    },
    SmartLetter {
        letter: 'A',
        title: "A = Achievable",
        explanation: "Make sure you can reasonably accomplish your goal within a certain time frame",
        example: "Instead of 'Master sales skills', try 'Complete advanced AI sales training program with 50 recorded calls' or 'List 10 properties in the luxury market segment ($1M+)'",
        tips: [
            "Do you have the resources needed?",
            "Is it realistic given your constraints?",
            "Can you break it into smaller goals?",
            "What skills or tools do you need?",
        ],
    },
    SmartLetter {
        letter: 'R',
        title: "R = Relevant",
        explanation: "Your goal should align with your values and long-term objectives",
        example: "Instead of 'Do more sales training', try 'Master objection handling through AI-assisted role-play to increase luxury property closings' or 'Expand network by joining top 2 real estate associations in my area'",
        tips: [
            "Why is this goal important to you?",
            "Does it align with your other goals?",
            "Is this the right time?",
            "Does it match your values?",
        ],
    },
    SmartLetter {
        letter: 'T',
        title: "T = Time-based",
        explanation: "Set a realistic but ambitious end date to clarify task prioritization and increase motivation",
        example: "Instead of 'Improve my sales performance', try 'Complete 100 AI-analyzed sales calls by Q2 2024' or 'Close $2M in real estate transactions by end of Q3 2024'",
        tips: [
            "When do you want to achieve this?",
            "What can you do today?",
            "What can you do in 6 weeks?",
            "What's your deadline?",
        ],
    },
];

pub fn find_letter(letter: char) -> Option<&'static SmartLetter> {
    let letter = letter.to_ascii_uppercase();
    SMART_LETTERS.iter().find(|entry| entry.letter == letter)
}

pub struct SmartGuide {
    selected: Option<&'static SmartLetter>,
    listener: Option<Subscription>,
    registry: Arc<dyn ListenerRegistry>,
}

impl SmartGuide {
    pub fn new(registry: Arc<dyn ListenerRegistry>) -> Self {
        Self {
            selected: None,
            listener: None,
            registry,
        }
    }

    pub fn selected(&self) -> Option<&'static SmartLetter> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Toggle a letter's popup. Unknown letters are ignored.
    pub fn select(&mut self, letter: char) {
        let Some(entry) = find_letter(letter) else {
            debug!("Ignoring unknown SMART letter {:?}", letter);
            return;
        };

        if self.selected.map(|open| open.letter) == Some(entry.letter) {
            self.close();
            return;
        }

        self.selected = Some(entry);
        if self.listener.is_none() {
            self.listener = Some(Subscription::acquire(&self.registry, LISTENER_SCOPE));
        }
        debug!("SMART popup opened for {}", entry.letter);
    }

    pub fn outside_click(&mut self) {
        if self.listener.is_some() {
            self.close();
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.listener = None;
    }
}
