use crux_core::capability::{Capability, CapabilityContext, Operation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fire-and-forget text-to-speech. The shell never answers, so a failed
/// utterance is invisible to the core.
pub struct Speech<E> {
    context: CapabilityContext<SpeechOperation, E>,
}

impl<Ev> Capability<Ev> for Speech<Ev> {
    type Operation = SpeechOperation;
    type MappedSelf<MappedEv> = Speech<MappedEv>;

    fn map_event<F, NewEv>(&self, f: F) -> Self::MappedSelf<NewEv>
    where
        F: Fn(NewEv) -> Ev + Send + Sync + 'static,
        Ev: 'static,
        NewEv: 'static + Send,
    {
        Speech::new(self.context.map_event(f))
    }
}

impl<E> Speech<E>
where
    E: Send + 'static,
{
    pub fn new(context: CapabilityContext<SpeechOperation, E>) -> Self {
        Self { context }
    }

    pub fn speak(&self, utterance: Utterance) {
        let ctx = self.context.clone();
        self.context.spawn(async move {
            ctx.notify_shell(SpeechOperation::Speak(utterance)).await;
        });
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Utterance {
    /// Lets the shell drop a duplicate delivery of the same request.
    pub id: Uuid,
    pub text: String,
    /// BCP 47 tag handed to the platform voice.
    pub language_tag: String,
}

impl Utterance {
    #[must_use]
    pub fn new(text: impl Into<String>, language_tag: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            language_tag: language_tag.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpeechOperation {
    Speak(Utterance),
}

impl Operation for SpeechOperation {
    type Output = ();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utterance_ids_are_unique() {
        let a = Utterance::new("hello", "en-US");
        let b = Utterance::new("hello", "en-US");
        assert_ne!(a.id, b.id);
        assert_eq!(a.text, b.text);
    }

    #[test]
    fn test_speak_operation_wire_shape() {
        let utterance = Utterance::new("Invalid Barcode. Invalid Barcode", "en-US");
        let value = serde_json::to_value(SpeechOperation::Speak(utterance.clone()))
            .expect("serializes");
        assert_eq!(value["Speak"]["text"], "Invalid Barcode. Invalid Barcode");
        assert_eq!(value["Speak"]["language_tag"], "en-US");
        assert_eq!(value["Speak"]["id"], utterance.id.to_string());
    }
}
