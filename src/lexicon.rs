//! Static conversation content: keyword groups, response variants and
//! sentiment replies.
//!
//! A [`Lexicon`] is validated once when it is built. A topic that has a
//! keyword group but no response variants is a programming mistake and is
//! rejected with [`AssistantError::Lexicon`]; it can never surface at runtime.
//!
//! All tables keep declaration order. Topic iteration order decides the
//! order in which multi-topic replies are concatenated, and sentiment order
//! decides which phrase wins when several match.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::{error::AssistantError, intent::normalize};

/// Keyword phrases that identify one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordGroup {
    pub topic: String,
    pub phrases: Vec<String>,
}

/// Canned response variants for one topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSet {
    pub topic: String,
    pub variants: Vec<String>,
}

/// Emotion phrase and its empathetic reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentEntry {
    pub phrase: String,
    pub reply: String,
}

/// On-disk JSON shape of a lexicon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    pub keyword_groups: Vec<KeywordGroup>,
    pub responses: Vec<ResponseSet>,
    #[serde(default)]
    pub sentiments: Vec<SentimentEntry>,
}

/// Validated, read-only lookup tables.
#[derive(Debug, Clone)]
pub struct Lexicon {
    keyword_groups: Vec<KeywordGroup>,
    responses: HashMap<String, Vec<String>>,
    sentiments: Vec<SentimentEntry>,
}

impl Lexicon {
    /// Build and validate a lexicon.
    ///
    /// Topic names are trimmed and lowercased. Keyword and sentiment phrases
    /// go through [`normalize`] so they compare against normalized input.
    ///
    /// # Errors
    /// Returns [`AssistantError::Lexicon`] when a keyword topic has no
    /// response variants, a topic is declared twice, or a phrase is blank.
    pub fn new(
        keyword_groups: Vec<KeywordGroup>,
        responses: Vec<ResponseSet>,
        sentiments: Vec<SentimentEntry>,
    ) -> Result<Self, AssistantError> {
        let mut bank: HashMap<String, Vec<String>> = HashMap::new();
        for set in responses {
            let topic = topic_key(&set.topic)?;
            if set.variants.is_empty() {
                return Err(AssistantError::Lexicon(format!(
                    "topic '{topic}' has an empty response list"
                )));
            }
            if bank.insert(topic.clone(), set.variants).is_some() {
                return Err(AssistantError::Lexicon(format!(
                    "responses for topic '{topic}' declared twice"
                )));
            }
        }

        let mut seen = HashSet::new();
        let mut groups = Vec::with_capacity(keyword_groups.len());
        for group in keyword_groups {
            let topic = topic_key(&group.topic)?;
            if !seen.insert(topic.clone()) {
                return Err(AssistantError::Lexicon(format!(
                    "keyword group '{topic}' declared twice"
                )));
            }
            if !bank.contains_key(&topic) {
                return Err(AssistantError::Lexicon(format!(
                    "keyword group '{topic}' has no response variants"
                )));
            }
            if group.phrases.is_empty() {
                return Err(AssistantError::Lexicon(format!(
                    "keyword group '{topic}' has no phrases"
                )));
            }
            let phrases = group
                .phrases
                .iter()
                .map(|p| phrase_key(&topic, p))
                .collect::<Result<Vec<_>, _>>()?;
            groups.push(KeywordGroup { topic, phrases });
        }

        for topic in bank.keys().filter(|t| !seen.contains(*t)) {
            tracing::warn!(topic = %topic, "response topic has no keyword group and is unreachable");
        }

        let sentiments = sentiments
            .into_iter()
            .map(|s| {
                Ok(SentimentEntry {
                    phrase: phrase_key("sentiment", &s.phrase)?,
                    reply: s.reply,
                })
            })
            .collect::<Result<Vec<_>, AssistantError>>()?;

        Ok(Self {
            keyword_groups: groups,
            responses: bank,
            sentiments,
        })
    }

    /// The cybersecurity content shipped with the assistant.
    pub fn builtin() -> Result<Self, AssistantError> {
        let groups = BUILTIN_KEYWORDS
            .iter()
            .map(|(topic, phrases)| KeywordGroup {
                topic: topic.to_string(),
                phrases: phrases.iter().map(|p| p.to_string()).collect(),
            })
            .collect();
        let responses = BUILTIN_RESPONSES
            .iter()
            .map(|(topic, variants)| ResponseSet {
                topic: topic.to_string(),
                variants: variants.iter().map(|v| v.to_string()).collect(),
            })
            .collect();
        let sentiments = BUILTIN_SENTIMENTS
            .iter()
            .map(|(phrase, reply)| SentimentEntry {
                phrase: phrase.to_string(),
                reply: reply.to_string(),
            })
            .collect();
        Self::new(groups, responses, sentiments)
    }

    /// Parse and validate a lexicon from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, AssistantError> {
        let file: LexiconFile = serde_json::from_str(json)?;
        Self::new(file.keyword_groups, file.responses, file.sentiments)
    }

    /// Read, parse and validate a lexicon file.
    pub fn load(path: &Path) -> Result<Self, AssistantError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Keyword groups in declaration order.
    pub fn keyword_groups(&self) -> &[KeywordGroup] {
        &self.keyword_groups
    }

    /// Response variants for `topic`, if it exists.
    pub fn responses(&self, topic: &str) -> Option<&[String]> {
        self.responses.get(topic).map(Vec::as_slice)
    }

    /// Sentiment entries in declaration order.
    pub fn sentiments(&self) -> &[SentimentEntry] {
        &self.sentiments
    }

    /// Topic names in declaration order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.keyword_groups.iter().map(|g| g.topic.as_str())
    }
}

fn topic_key(raw: &str) -> Result<String, AssistantError> {
    let topic = raw.trim().to_lowercase();
    if topic.is_empty() {
        return Err(AssistantError::Lexicon("topic name is blank".to_string()));
    }
    Ok(topic)
}

fn phrase_key(owner: &str, raw: &str) -> Result<String, AssistantError> {
    let phrase = normalize(raw).trim().to_string();
    if phrase.is_empty() {
        return Err(AssistantError::Lexicon(format!(
            "'{owner}' contains a blank phrase"
        )));
    }
    Ok(phrase)
}

// ── Built-in content ───────────────────────────────────────────────────────

const BUILTIN_KEYWORDS: &[(&str, &[&str])] = &[
    ("hello", &["hello", "hi", "hey", "greetings"]),
    ("password", &["password", "passcode", "credentials"]),
    ("phishing", &["phishing", "scam", "fake email", "suspicious message"]),
    ("malware", &["malware", "virus", "trojan", "spyware"]),
    ("ransomware", &["ransomware", "encrypted files", "locked data"]),
    ("identity theft", &["identity theft", "impersonation", "stolen identity"]),
    ("public wifi", &["public wifi", "open wifi", "unsecured network"]),
    ("vpn", &["vpn", "virtual private network"]),
    ("2fa", &["2fa", "two factor", "multi-factor"]),
    ("safe browsing", &["safe browsing", "secure browsing", "https"]),
    ("update", &["update", "patch", "upgrade"]),
    ("scam", &["scam", "fraud", "con"]),
];

const BUILTIN_RESPONSES: &[(&str, &[&str])] = &[
    ("hello", &[
        "Hello! How can I assist you with cybersecurity today?",
        "Hi there! Ready to learn some cybersecurity tips?",
        "Hey! I'm here to help you stay safe online. What would you like to know?",
    ]),
    ("password", &[
        "Always use complex passwords with a mix of letters, numbers, and special symbols. Avoid using the same password across multiple sites, and change your passwords regularly.",
        "Use a trusted password manager to create and store strong, unique passwords. It's safer and easier than trying to remember them all yourself.",
        "Never share your passwords, even with people you trust. Instead, use secure password recovery options and enable two-factor authentication.",
    ]),
    ("phishing", &[
        "Phishing is a tactic cybercriminals use to trick you into providing personal info. Look out for urgent messages, suspicious links, and emails from unknown senders.",
        "Avoid clicking links in emails that seem out of place, even if they appear to come from trusted companies. Always verify the sender and check for grammar or formatting errors.",
        "A good rule: When in doubt, throw it out. If an email seems fishy, don't engage with it. Delete it or report it as phishing.",
    ]),
    ("malware", &[
        "Malware includes viruses, ransomware, spyware, and more. It's often hidden in email attachments, software cracks, or untrusted websites.",
        "Install reputable antivirus software and keep it updated. It helps detect and remove malware before it harms your system.",
        "Don't download software or open files from unknown sources. Malware can hijack your device or steal sensitive data.",
    ]),
    ("ransomware", &[
        "Ransomware locks or encrypts your files until you pay a ransom. The best defense is a strong backup system and secure habits.",
        "Never pay the ransom. It doesn't guarantee you'll get your files back. Instead, restore from backups and report the incident.",
        "Keep your system updated and be cautious with email attachments. Prevention is key with ransomware.",
    ]),
    ("identity theft", &[
        "Identity theft happens when someone uses your personal information without permission. Guard your ID numbers, address, and financial details.",
        "Shred important documents before discarding them. Monitor your bank statements and credit reports for suspicious activity.",
        "Limit how much personal information you share online. Even birthday and hometown info can be used for identity theft.",
    ]),
    ("public wifi", &[
        "Public Wi-Fi is often unsecured. Avoid entering sensitive information or logging into important accounts on it.",
        "Use a VPN (Virtual Private Network) when on public Wi-Fi. It encrypts your data and helps protect your privacy.",
        "If possible, use your mobile data or personal hotspot instead of public networks.",
    ]),
    ("vpn", &[
        "A VPN secures your internet connection by routing it through encrypted servers, masking your IP address and protecting your data.",
        "Using a VPN on public Wi-Fi protects you from hackers who try to intercept your data.",
        "Choose a trustworthy VPN provider. Free ones might compromise your data or sell your information.",
    ]),
    ("2fa", &[
        "Two-Factor Authentication (2FA) adds a second verification step, making it much harder for attackers to access your account.",
        "Always enable 2FA on your accounts. Even if your password is stolen, 2FA can prevent unauthorized access.",
        "Use authenticator apps rather than SMS for better protection against SIM-swapping attacks.",
    ]),
    ("safe browsing", &[
        "Stick to secure websites with HTTPS in the URL. Avoid downloading files or clicking links from shady sites.",
        "Keep your browser and extensions up to date. Many updates patch security holes exploited by hackers.",
        "Install browser add-ons like ad-blockers and script blockers to defend against malicious ads and trackers.",
    ]),
    ("update", &[
        "Updates aren't just for new features. They often fix critical security issues, so always install them promptly.",
        "Automate your updates whenever possible. Outdated software is a major vulnerability.",
        "Don't ignore update notifications. They're your shield against the latest threats.",
    ]),
    ("scam", &[
        "Scams can take many forms: fake job offers, phishing emails, or fraudulent websites. Be skeptical and research everything.",
        "If something online seems too good to be true, it probably is. Don't give out your personal information easily.",
        "Always verify links and company names. Scammers often use slight misspellings or altered URLs.",
    ]),
];

const BUILTIN_SENTIMENTS: &[(&str, &str)] = &[
    ("worried", "It's okay to feel worried. The first step in cybersecurity is awareness, and you're already doing great just by starting this conversation. Let's explore your concerns together!"),
    ("scared", "Fear is natural, especially when it comes to online threats. You're not alone. I'm here to walk you through every step of staying safe."),
    ("confused", "Confused about cybersecurity? You're not the only one. Let's simplify it together. Just ask and I'll make it clear."),
    ("nervous", "Feeling nervous is understandable. The internet can be risky, but with the right knowledge, we can beat those risks."),
    ("anxious", "Take a deep breath. You're doing great. Let's focus on one topic at a time and strengthen your digital defenses."),
    ("frustrated", "Frustration is valid. Technology can be tricky. Let's break it down step-by-step and find solutions."),
    ("angry", "Getting angry is okay. Security issues are serious. Let's redirect that energy into protecting your information."),
    ("sad", "I'm here for you. Want to lighten the mood with a cybersecurity joke or tip? You've got this."),
    ("overwhelmed", "One step at a time is all it takes. Don't worry, we'll tackle cybersecurity topics together in a manageable way."),
    ("happy", "That's fantastic to hear! Let's keep up the good habits and learn some cool things about staying safe online."),
    ("curious", "Curiosity is powerful. Ask me anything about cybersecurity. I love your enthusiasm!"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn group(topic: &str, phrases: &[&str]) -> KeywordGroup {
        KeywordGroup {
            topic: topic.to_string(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn responses(topic: &str, variants: &[&str]) -> ResponseSet {
        ResponseSet {
            topic: topic.to_string(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn builtin_tables_are_consistent() {
        let lexicon = Lexicon::builtin().unwrap();
        assert_eq!(lexicon.keyword_groups().len(), BUILTIN_KEYWORDS.len());
        assert_eq!(lexicon.sentiments().len(), BUILTIN_SENTIMENTS.len());
        for topic in lexicon.topics() {
            assert!(lexicon.responses(topic).is_some_and(|r| !r.is_empty()));
        }
    }

    #[test]
    fn phrases_are_stored_normalized() {
        let lexicon = Lexicon::builtin().unwrap();
        let twofa = &lexicon.keyword_groups()[8];
        assert_eq!(twofa.topic, "2fa");
        assert!(twofa.phrases.contains(&"multifactor".to_string()));
    }

    #[test]
    fn topic_keys_are_case_insensitive() {
        let lexicon = Lexicon::new(
            vec![group("VPN", &["vpn"])],
            vec![responses("vpn", &["Use one."])],
            vec![],
        )
        .unwrap();
        assert_eq!(lexicon.topics().collect::<Vec<_>>(), vec!["vpn"]);
    }

    #[test]
    fn empty_response_list_is_rejected() {
        let err = Lexicon::new(
            vec![group("vpn", &["vpn"])],
            vec![responses("vpn", &[])],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, AssistantError::Lexicon(_)));
    }
}
