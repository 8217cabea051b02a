// Understands the loose phrases people say to a voice assistant, e.g.
// "relay two on", "Relay 3 brightness 50" or "what's the state".

use regex::{Captures, Regex};

use crate::channel::{Brightness, ChannelId, PowerCommand};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phrase {
    Status,
    Power(ChannelId, PowerCommand),
    Brightness(ChannelId, Brightness),
}

pub struct PhraseParser {
    number_words: Regex,
    power: Regex,
    brightness: Regex,
}

impl PhraseParser {
    pub fn new() -> Result<PhraseParser, regex::Error> {
        return Ok(PhraseParser {
            // "to" is what speech recognition usually makes of "two".
            number_words: Regex::new(r"\b(one|two|three|four|to)\b")?,
            power: Regex::new(r"relay\s*([1-4])\s*(on|off)")?,
            brightness: Regex::new(r"relay\s*([1-4])\s*brightness\s*(\d{1,3})")?,
        });
    }

    fn normalize(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        let replaced = self.number_words.replace_all(&lower, |caps: &Captures| match &caps[1] {
            "one" => "1",
            "two" | "to" => "2",
            "three" => "3",
            _ => "4",
        });
        return replaced.into_owned();
    }

    /// Returns `None` if the text doesn't contain a known command.
    /// Brightness values above 100 are clamped rather than rejected.
    pub fn parse(&self, text: &str) -> Option<Phrase> {
        let text = self.normalize(text);
        if text.contains("state") {
            return Some(Phrase::Status);
        }
        if let Some(caps) = self.power.captures(&text) {
            let id = caps[1].parse::<ChannelId>().ok()?;
            let command = caps[2].parse::<PowerCommand>().ok()?;
            return Some(Phrase::Power(id, command));
        }
        if let Some(caps) = self.brightness.captures(&text) {
            let id = caps[1].parse::<ChannelId>().ok()?;
            let percent = caps[2].parse::<u32>().ok()?;
            return Some(Phrase::Brightness(id, Brightness::clamped(percent)));
        }
        return None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Option<Phrase> {
        PhraseParser::new().unwrap().parse(text)
    }

    fn id(n: u8) -> ChannelId {
        ChannelId::try_from(n).unwrap()
    }

    #[test]
    fn power_phrases() {
        assert_eq!(parse("relay 2 on"), Some(Phrase::Power(id(2), PowerCommand::On)));
        assert_eq!(parse("Relay Four OFF"), Some(Phrase::Power(id(4), PowerCommand::Off)));
        assert_eq!(parse("please turn relay one on now"), Some(Phrase::Power(id(1), PowerCommand::On)));
        assert_eq!(parse("relay to off"), Some(Phrase::Power(id(2), PowerCommand::Off)));
    }

    #[test]
    fn brightness_phrases() {
        assert_eq!(
            parse("relay 3 brightness 50"),
            Some(Phrase::Brightness(id(3), Brightness::clamped(50)))
        );
        assert_eq!(
            parse("relay three brightness 0"),
            Some(Phrase::Brightness(id(3), Brightness::OFF))
        );
        assert_eq!(
            parse("relay 1 brightness 250"),
            Some(Phrase::Brightness(id(1), Brightness::clamped(100)))
        );
    }

    #[test]
    fn status_phrase_wins() {
        assert_eq!(parse("State"), Some(Phrase::Status));
        assert_eq!(parse("what is the state of relay 2 on"), Some(Phrase::Status));
    }

    #[test]
    fn unknown_phrases() {
        assert_eq!(parse("relay 5 on"), None);
        assert_eq!(parse("relay 2 toggle"), None);
        assert_eq!(parse("hello"), None);
        assert_eq!(parse(""), None);
    }

    #[test]
    fn number_words_need_word_boundaries() {
        // "someone" must not turn into "some1".
        assert_eq!(parse("someone said relay"), None);
    }
}
