use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// The argumentative hosted model.
    Hosted,
    /// The diplomatic local model.
    Local,
}

impl Speaker {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hosted => "GPT",
            Self::Local => "Ollama",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    /// 0 for the opening exchange.
    pub round: u32,
    pub speaker: Speaker,
    pub text: String,
}

/// Ordered record of one debate. Every round holds exactly one hosted
/// utterance followed by one local utterance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateTranscript {
    topic: String,
    utterances: Vec<Utterance>,
    rounds: u32,
}

impl DebateTranscript {
    pub fn open(topic: impl Into<String>, hosted_opening: String, local_opening: String) -> Self {
        Self {
            topic: topic.into(),
            utterances: vec![
                Utterance {
                    round: 0,
                    speaker: Speaker::Hosted,
                    text: hosted_opening,
                },
                Utterance {
                    round: 0,
                    speaker: Speaker::Local,
                    text: local_opening,
                },
            ],
            rounds: 0,
        }
    }

    pub fn record_round(&mut self, hosted_reply: String, local_reply: String) {
        self.rounds += 1;
        self.utterances.push(Utterance {
            round: self.rounds,
            speaker: Speaker::Hosted,
            text: hosted_reply,
        });
        self.utterances.push(Utterance {
            round: self.rounds,
            speaker: Speaker::Local,
            text: local_reply,
        });
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }

    /// Everything `speaker` has said so far, opening included.
    pub fn history(&self, speaker: Speaker) -> impl Iterator<Item = &str> {
        self.utterances
            .iter()
            .filter(move |u| u.speaker == speaker)
            .map(|u| u.text.as_str())
    }

    pub fn last(&self, speaker: Speaker) -> Option<&str> {
        self.history(speaker).last()
    }

    pub fn to_markdown(&self) -> String {
        let mut lines = vec![
            "# AI Debate Transcript".to_string(),
            format!("**Topic:** {}\n", self.topic),
        ];
        let mut current_round = 0;
        for utterance in &self.utterances {
            if utterance.round != current_round {
                current_round = utterance.round;
                lines.push(format!("## Round {}", current_round));
            }
            lines.push(format!("### {}\n{}\n", utterance.speaker.label(), utterance.text));
        }
        lines.join("\n")
    }
}
