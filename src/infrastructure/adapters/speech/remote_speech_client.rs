//! Remote Speech Client
//!
//! 实现 SpeechServicePort：服务端不发声，而是把每句话作为 `Speak` 事件推给
//! 浏览器，由浏览器的 speechSynthesis 朗读并通过 WebSocket 回报完成或失败。

use std::sync::Arc;

use crate::application::ports::{SpeechError, SpeechServicePort};
use crate::domain::playback::{SpeechRate, UtteranceHandle};
use crate::infrastructure::events::{EventPublisher, WsEvent};

/// 远程语音客户端
pub struct RemoteSpeechClient {
    publisher: Arc<EventPublisher>,
}

impl RemoteSpeechClient {
    pub fn new(publisher: Arc<EventPublisher>) -> Self {
        Self { publisher }
    }
}

impl SpeechServicePort for RemoteSpeechClient {
    fn speak(&mut self, text: &str, rate: SpeechRate) -> Result<UtteranceHandle, SpeechError> {
        if self.publisher.receiver_count() == 0 {
            return Err(SpeechError::Unavailable(
                "no speech client connected".to_string(),
            ));
        }

        let handle = UtteranceHandle::new();
        tracing::debug!(
            handle = %handle,
            rate = rate.value(),
            text_len = text.len(),
            "Dispatching utterance"
        );
        self.publisher.publish_speak(handle, text, rate.value());
        Ok(handle)
    }

    fn pause(&mut self) {
        self.publisher.publish(WsEvent::PauseSpeech);
    }

    fn resume(&mut self) {
        self.publisher.publish(WsEvent::ResumeSpeech);
    }

    fn cancel_all(&mut self) {
        self.publisher.publish(WsEvent::CancelSpeech);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speak_without_client_is_unavailable() {
        let mut client = RemoteSpeechClient::new(EventPublisher::new().arc());
        let err = client.speak("Hello.", SpeechRate::default()).unwrap_err();
        assert!(matches!(err, SpeechError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_commands_are_forwarded_in_order() {
        let publisher = EventPublisher::new().arc();
        let mut rx = publisher.subscribe();
        let mut client = RemoteSpeechClient::new(publisher);

        client.cancel_all();
        let handle = client.speak("Hello.", SpeechRate::new(0.75)).unwrap();
        client.pause();
        client.resume();

        assert!(matches!(rx.recv().await.unwrap(), WsEvent::CancelSpeech));
        match rx.recv().await.unwrap() {
            WsEvent::Speak { handle: h, text, rate } => {
                assert_eq!(h, handle);
                assert_eq!(text, "Hello.");
                assert_eq!(rate, 0.75);
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(rx.recv().await.unwrap(), WsEvent::PauseSpeech));
        assert!(matches!(rx.recv().await.unwrap(), WsEvent::ResumeSpeech));
    }
}
