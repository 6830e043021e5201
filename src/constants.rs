pub const ENV_PROJECT_CONNECTION: &str = "PROJECT_CONNECTION";
pub const ENV_MODEL_DEPLOYMENT: &str = "MODEL_DEPLOYMENT";
pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const SYSTEM_PERSONA: &str = "You are an AI assistant in a grocery store that sells fruit.";
pub const IMAGE_FILE: &str = "mystery-fruit.jpeg";
pub const IMAGE_MIME_TYPE: &str = "image/jpeg";

pub const QUESTION_PROMPT: &str = "\nAsk a question about the image\n(or type 'quit' to exit)\n";
pub const EMPTY_INPUT_REMINDER: &str = "Please enter a question.";
pub const QUIT_COMMAND: &str = "quit";
pub const WAITING_MESSAGE: &str = "Getting a response ...";
