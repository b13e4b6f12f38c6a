//! Demonstration greeting tool.
use std::time::Duration;

use tokio::time::sleep;

/// Fixed suspension before answering, illustrating an async-capable tool.
pub const GREETING_DELAY: Duration = Duration::from_secs(1);

/// Greet after the fixed delay.
pub async fn greet(name: &str) -> String {
    sleep(GREETING_DELAY).await;
    render_greeting(name)
}

/// Populate the greeting template with the name verbatim.
pub fn render_greeting(name: &str) -> String {
    format!("Hello, {name}!")
}
