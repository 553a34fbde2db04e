//! Chat collaborator thread and its ECS bridge.
//!
//! The worker thread owns all HTTP: it blocks on the command channel, posts
//! each question to the configured endpoint, and falls back to a canned
//! answer table whenever the request fails, the response does not parse, or
//! offline mode is on. The game loop never blocks; systems here shuttle
//! messages between the ECS queues and the thread's channels.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::events::chat::{ChatCmd, ChatReply};
use crate::resources::chat::ChatBridge;

/// Seconds before an in-flight request is abandoned in favor of the canned
/// table.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Answer given when no canned entry matches the question.
pub const DEFAULT_CANNED_REPLY: &str = "不跟泥說";

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    reply: String,
}

/// Advance the command queue so last frame's submissions become readable.
pub fn update_chat_cmds(mut msgs: ResMut<Messages<ChatCmd>>) {
    msgs.update();
}

/// Forward queued commands to the worker thread.
pub fn forward_chat_cmds(bridge: Res<ChatBridge>, mut reader: MessageReader<ChatCmd>) {
    for cmd in reader.read() {
        if let Err(e) = bridge.tx_cmd.send(cmd.clone()) {
            warn!("chat thread unreachable: {e}");
        }
    }
}

/// Drain replies from the worker thread into the ECS queue.
pub fn poll_chat_replies(bridge: Res<ChatBridge>, mut writer: MessageWriter<ChatReply>) {
    writer.write_batch(bridge.rx_reply.try_iter());
}

/// Advance the reply queue so freshly polled replies become readable.
pub fn update_chat_replies(mut msgs: ResMut<Messages<ChatReply>>) {
    msgs.update();
}

/// Worker thread body. Exits on [`ChatCmd::Shutdown`] or when either channel
/// disconnects.
pub fn chat_thread(
    rx_cmd: Receiver<ChatCmd>,
    tx_reply: Sender<ChatReply>,
    endpoint: String,
    offline: bool,
) {
    let client = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build();
    let client = match client {
        Ok(c) => c,
        Err(e) => {
            warn!("chat http client failed to build, going offline: {e}");
            run_offline(rx_cmd, tx_reply);
            return;
        }
    };

    for cmd in rx_cmd.iter() {
        match cmd {
            ChatCmd::Ask { seq, message } => {
                let text = if offline {
                    canned_reply(&message).to_string()
                } else {
                    match request_reply(&client, &endpoint, &message) {
                        Ok(reply) => reply,
                        Err(e) => {
                            warn!("chat request failed, using canned reply: {e}");
                            canned_reply(&message).to_string()
                        }
                    }
                };
                debug!("chat reply ready (seq {seq})");
                if tx_reply.send(ChatReply { seq, text }).is_err() {
                    break;
                }
            }
            ChatCmd::Shutdown => break,
        }
    }
    debug!("chat thread exiting");
}

fn run_offline(rx_cmd: Receiver<ChatCmd>, tx_reply: Sender<ChatReply>) {
    for cmd in rx_cmd.iter() {
        match cmd {
            ChatCmd::Ask { seq, message } => {
                let text = canned_reply(&message).to_string();
                if tx_reply.send(ChatReply { seq, text }).is_err() {
                    break;
                }
            }
            ChatCmd::Shutdown => break,
        }
    }
}

fn request_reply(
    client: &reqwest::blocking::Client,
    endpoint: &str,
    message: &str,
) -> Result<String, reqwest::Error> {
    let resp: ChatResponse = client
        .post(endpoint)
        .json(&ChatRequest { message })
        .send()?
        .error_for_status()?
        .json()?;
    Ok(if resp.reply.is_empty() {
        canned_reply(message).to_string()
    } else {
        resp.reply
    })
}

/// Canned answer table, matched on the whitespace-stripped lowercased
/// question. Keys are zhuyin renderings of the questions the NPC expects.
pub fn canned_reply(question: &str) -> &'static str {
    match normalize(question).as_str() {
        "ㄋㄧˇㄐㄧㄠˋㄕㄜˊㄇㄜ˙" => "你不需要知道",
        "ㄐㄧㄣㄊㄧㄢㄍㄨㄛˋㄉㄜ˙ㄖㄨˊㄏㄜˊ" => "有你在就是很好的一天",
        "ㄨㄛˇㄏㄣˇㄔㄚㄐㄧㄥˋㄇㄚ" => "怎麼會！你是最好的",
        "ㄧㄡˇㄖㄣˊㄕㄨㄛㄨㄛˇㄏㄣˇㄆㄤˋ" => "誰說的 我幫你去揍他",
        "ㄨㄛˇㄇㄣˇㄕˋㄏㄠˇㄆㄥˊㄧㄡˇㄇㄚ" => "是比好朋友還要好的那種好朋友",
        _ => DEFAULT_CANNED_REPLY,
    }
}

fn normalize(question: &str) -> String {
    question
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_question_gets_default_reply() {
        assert_eq!(canned_reply("hello there"), DEFAULT_CANNED_REPLY);
        assert_eq!(canned_reply(""), DEFAULT_CANNED_REPLY);
    }

    #[test]
    fn known_question_matches_exactly() {
        assert_eq!(canned_reply("ㄋㄧˇㄐㄧㄠˋㄕㄜˊㄇㄜ˙"), "你不需要知道");
    }

    #[test]
    fn matching_ignores_whitespace() {
        assert_eq!(canned_reply("ㄋㄧˇ ㄐㄧㄠˋ　ㄕㄜˊㄇㄜ˙"), "你不需要知道");
    }

    #[test]
    fn near_miss_is_not_a_match() {
        assert_eq!(canned_reply("ㄋㄧˇㄐㄧㄠˋㄕㄜˊㄇㄜ"), DEFAULT_CANNED_REPLY);
    }
}
