//! Speech Adapter - 把朗读指令转发给 WebSocket 客户端

mod remote_speech_client;

pub use remote_speech_client::RemoteSpeechClient;
