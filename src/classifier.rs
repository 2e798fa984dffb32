//! Password classifier - category and message chains.
//!
//! The category and the message are computed by two separate walks over the
//! stage table, each with its own order. They can disagree: an 8+ character
//! password with a repeating run is reported through its message while its
//! category ignores the run.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::category::{Category, Classification};
use crate::messages::{MessageKey, MessageTable, REPEATING_CHARS_MESSAGE};
use crate::options::ClassifyOptions;
use crate::rules::RuleChain;
use crate::stages::Stage;

/// Classifies a password into a strength category with an advisory message.
///
/// Pure and total: every input, the empty string included, yields a result,
/// and the same inputs always yield the same result.
pub fn classify(password: &SecretString, options: &ClassifyOptions) -> Classification {
    let category = categorize(password, &options.chain);
    let message = explain(password, &options.chain, &options.messages);
    let classification = Classification { category, message };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password classified: length={}, custom={}, category={:?}, has_message={}",
        password.expose_secret().chars().count(),
        options.is_custom(),
        category,
        classification.has_message()
    );

    classification
}

/// Category chain.
///
/// Built-in: shorter than 8 is `TooShort`; otherwise `Strong` when uppercase,
/// lowercase, digit and special character are all present, else `Weak`.
/// Custom: the first failing rule decides; failing none is `Strong`.
pub fn categorize(password: &SecretString, chain: &RuleChain) -> Category {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Category::Empty;
    }

    match chain {
        RuleChain::Custom(rules) => rules
            .first_failure(pwd)
            .map_or(Category::Strong, |(stage, _)| stage.category()),
        RuleChain::Default => {
            if !Stage::MinLength.passes(pwd) {
                Category::TooShort
            } else if Stage::CATEGORY_CHAIN.iter().all(|stage| stage.passes(pwd)) {
                Category::Strong
            } else {
                Category::Weak
            }
        }
    }
}

/// Message chain.
///
/// Built-in: short passwords get `lengthRequirement`; otherwise the first
/// failing stage of repeating run, uppercase, lowercase, digit, special
/// character is reported. Custom: the first failing rule's message.
/// Empty when nothing fails or the password is empty.
pub fn explain(password: &SecretString, chain: &RuleChain, messages: &MessageTable) -> String {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return String::new();
    }

    match chain {
        RuleChain::Custom(rules) => rules
            .first_failure(pwd)
            .map(|(_stage, rule)| {
                #[cfg(feature = "tracing")]
                tracing::trace!("custom stage failed: {}", _stage.name());
                rule.message().to_string()
            })
            .unwrap_or_default(),
        RuleChain::Default => {
            if !Stage::MinLength.passes(pwd) {
                return stage_message(Stage::MinLength, messages).to_string();
            }
            Stage::MESSAGE_CHAIN
                .into_iter()
                .find(|stage| !stage.passes(pwd))
                .map(|stage| {
                    #[cfg(feature = "tracing")]
                    tracing::trace!("message stage failed: {}", stage.name());
                    stage_message(stage, messages).to_string()
                })
                .unwrap_or_default()
        }
    }
}

fn stage_message(stage: Stage, messages: &MessageTable) -> &str {
    match stage {
        Stage::MinLength => messages.get(MessageKey::LengthRequirement),
        Stage::NoRepeatingRun => REPEATING_CHARS_MESSAGE,
        Stage::HasUppercase => messages.get(MessageKey::Uppercase),
        Stage::HasLowercase => messages.get(MessageKey::Lowercase),
        Stage::HasDigit => messages.get(MessageKey::Numeric),
        Stage::HasSpecialChar(_) => messages.get(MessageKey::SpecialChar),
    }
}

/// Async version that sends the classification result via channel.
///
/// Meant to be called from a UI state loop on every input change. Nothing is
/// sent if `token` is cancelled before classification or while waiting for
/// channel capacity.
#[cfg(feature = "async")]
pub async fn classify_tx(
    password: &SecretString,
    options: &ClassifyOptions,
    token: CancellationToken,
    tx: mpsc::Sender<Classification>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::trace!("classification skipped: token already cancelled");
        return;
    }

    let classification = classify(password, options);

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::trace!("classification dropped: token cancelled before send");
        }
        sent = tx.send(classification) => {
            if let Err(_e) = sent {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password classification: {}", _e);
            }
        }
    }
}
