//! LLM provider client.
//!
//! Thin wrapper around the Groq OpenAI-compatible chat-completions endpoint:
//! text in, text out, may fail. Every question is wrapped in a fixed prompt
//! template carrying the portfolio persona and knowledge base.
//!
//! Callers treat this as an optional collaborator: any failure here is
//! answered by the keyword engine instead, so the chat endpoints never
//! depend on the provider being up.

use serde::{Deserialize, Serialize};

const COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Per-request timeout (prevents hanging on a slow provider).
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Errors from the LLM call.
///
/// These never reach an HTTP response; the chat handlers log them and fall
/// back to the keyword engine.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Network failure, timeout, or non-success status from the provider
    #[error("LLM request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered 2xx but the body had no completion in it
    #[error("LLM returned no completion")]
    EmptyCompletion,
}

/// Client for the external LLM provider.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl LlmClient {
    /// Build a client for the given credential and model.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(api_key: String, model: String) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            http,
            api_key,
            model,
        })
    }

    /// Ask the provider a question through the portfolio prompt template.
    ///
    /// Returns the completion text with surrounding whitespace trimmed.
    pub async fn ask(&self, question: &str) -> Result<String, LlmError> {
        let prompt = PROMPT_TEMPLATE.replace("{user_input}", question);

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &prompt,
            }],
        };

        let response = self
            .http
            .post(COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<ChatCompletionResponse>()
            .await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(LlmError::EmptyCompletion)?;

        Ok(content.trim().to_string())
    }
}

/// Fixed prompt template: persona, knowledge base, then the user's question.
const PROMPT_TEMPLATE: &str = r#"
system_prompt:
I am Abhishek Gangappa Ambi's AI assistant, designed to provide accurate, clear, and contextual answers about his portfolio and career. My primary objectives are to:
- Provide detailed information about Abhishek's projects and technical skills
- Offer career advice based on his expertise and experience
- Answer questions about his full-stack development capabilities
- Assist with portfolio-related inquiries

Abhishek is a full-stack developer with expertise in creating efficient and innovative solutions,
specializing in App development and Web development. With a commitment to excellence,
he brings both technical expertise and creative problem-solving to his work.

knowledge_prompt:
PROJECT PORTFOLIO:

1. Indian Meeting House
   - Technology: React, Node.js, MongoDB
   - Description: Developed an online meeting application with user authentication,
     event management, and resource sharing for seamless collaboration.
   - Features: Real-time communication, user management, event scheduling

2. Online Notes Book
   - Technology: Android Studio, Java
   - Description: Designed and built an Android application for managing personal notes
   - Features: Secure user authentication, intuitive note management, and sharing capabilities

3. Path Finder
   - Technology: React
   - Description: Created a web application to visualize pathfinding algorithms
   - Features: Dijkstra's, DFS, BFS, A* algorithms visualization for finding shortest paths

4. Quick Eats
   - Technology: React Native, Express.js, MongoDB
   - Description: Developed a food ordering app with comprehensive features
   - Features: User authentication, order management, and payment integration

5. Online Medicine Store
   - Technology: React, Node.js, MongoDB
   - Description: Designed a web application for online medicine purchasing
   - Features: Simple cart system, product management, secure transactions

6. Todo List
   - Technology: Java
   - Description: Created a Java application for managing tasks
   - Features: Straightforward interface to boost productivity

7. Shri Vagdevi Construction (Real Time Project)
   - Technology: MERN Stack (MongoDB, Express.js, React, Node.js)
   - Website: shrivagdeviconstructions.com
   - Description: A comprehensive construction company website showcasing services and portfolio
   - Features: Modern responsive design, project galleries, client testimonials, contact forms,
     content management system, smooth front-end and back-end interaction

TECHNICAL SKILLS:
- Frontend: React, React Native, HTML, CSS, JavaScript
- Backend: Node.js, Express.js, Java
- Database: MongoDB
- Mobile Development: Android Studio, Java
- Full-Stack: MERN Stack expertise
- Version Control: Git
- Development Tools: VS Code, Android Studio

User Query: "{user_input}"

Answer:
"#;
