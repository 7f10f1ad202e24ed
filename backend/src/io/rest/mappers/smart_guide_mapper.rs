use shared::{SmartGuideView, SmartLetterButton, SmartLetterDetail};

use crate::domain::smart_guide::{SmartGuide, SmartLetter, SMART_LETTERS};

pub struct SmartGuideMapper;

impl SmartGuideMapper {
    pub fn to_detail_dto(entry: &SmartLetter) -> SmartLetterDetail {
        SmartLetterDetail {
            letter: entry.letter,
            title: entry.heading().to_string(),
            explanation: entry.explanation.to_string(),
            example_sentences: entry.example_sentences(),
            tips: entry.tips.iter().map(|tip| tip.to_string()).collect(),
        }
    }

    pub fn to_view(guide: &SmartGuide, overall_progress: f64) -> SmartGuideView {
        let selected_letter = guide.selected().map(|entry| entry.letter);

        SmartGuideView {
            letters: SMART_LETTERS
                .iter()
                .map(|entry| SmartLetterButton {
                    letter: entry.letter,
                    is_selected: selected_letter == Some(entry.letter),
                })
                .collect(),
            selected: guide.selected().map(Self::to_detail_dto),
            overall_progress,
        }
    }
}
