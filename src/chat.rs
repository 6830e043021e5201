use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::SYSTEM_PERSONA;
use crate::error::Result;
use crate::image::image_data_url;

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: Content,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ContentPart {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Message {
            role: Role::System,
            content: Content::Text(text.into()),
        }
    }

    pub fn user_with_image(text: impl Into<String>, data_url: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: Content::Parts(vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: data_url.into(),
                    },
                },
            ]),
        }
    }
}

// The image is re-read and re-encoded on every call; nothing is cached
// between questions.
pub fn build_request(model: &str, prompt: &str, image_path: &Path) -> Result<ChatRequest> {
    let data_url = image_data_url(image_path)?;
    Ok(ChatRequest {
        model: model.to_string(),
        messages: vec![
            Message::system(SYSTEM_PERSONA),
            Message::user_with_image(prompt, data_url),
        ],
    })
}

#[derive(Debug, Deserialize)]
pub struct ChatApiResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}
